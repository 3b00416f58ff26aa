// Trains one perceptron on the built-in four-sample dataset and prints the
// weights after every update. Set RUST_LOG=debug to see per-pass diagnostics
// on stderr.
use std::io::{self, Write};

use perceptron_rule::{Dataset, Perceptron, TrainConfig, Trainer};

const INITIAL_WEIGHTS: [f64; 3] = [0.2, -0.6, 0.25];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let perceptron = Perceptron::new(INITIAL_WEIGHTS.to_vec());
    let mut trainer = Trainer::new(perceptron, Dataset::builtin(), TrainConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    trainer.train(&mut out)?;
    out.flush()?;

    Ok(())
}
