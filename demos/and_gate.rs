use perceptron_rule::{Dataset, Perceptron, TrainConfig, Trainer};

// Logical AND over {-1, 1} inputs, with a constant bias input in front.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = Dataset::new(
        &[
            vec![1.0, -1.0, -1.0],
            vec![1.0, -1.0, 1.0],
            vec![1.0, 1.0, -1.0],
            vec![1.0, 1.0, 1.0],
        ],
        &[-1.0, -1.0, -1.0, 1.0],
    )?;

    let mut trainer = Trainer::new(
        Perceptron::new(vec![0.0; 3]),
        dataset,
        TrainConfig::new(0.25, 42).with_max_passes(100),
    )?;

    let report = trainer.train(&mut std::io::stdout())?;
    println!(
        "Converged in {} passes with {} updates",
        report.total_passes(),
        report.total_updates()
    );

    for sample in trainer.dataset().iter() {
        println!(
            "Input: {:?} -> Output: {:+.0} (expected {:+.0})",
            &sample.input[1..],
            trainer.perceptron().predict(&sample.input),
            sample.label
        );
    }

    Ok(())
}
