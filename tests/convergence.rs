use perceptron_rule::{
    compute_output, format_weights, Dataset, Perceptron, TrainConfig, TrainReport, TrainState,
    Trainer,
};

const INITIAL_WEIGHTS: [f64; 3] = [0.2, -0.6, 0.25];

fn demo_trainer() -> Trainer {
    Trainer::new(
        Perceptron::new(INITIAL_WEIGHTS.to_vec()),
        Dataset::builtin(),
        TrainConfig::default(),
    )
    .unwrap()
}

fn run_demo() -> (Trainer, TrainReport, String) {
    let mut trainer = demo_trainer();
    let mut out = Vec::new();
    let report = trainer.train(&mut out).unwrap();
    (trainer, report, String::from_utf8(out).unwrap())
}

#[test]
fn output_is_reproducible() {
    let (_, first_report, first_out) = run_demo();
    let (_, second_report, second_out) = run_demo();

    assert_eq!(first_out, second_out);
    assert_eq!(first_report, second_report);
}

#[test]
fn final_weights_classify_every_sample() {
    let (trainer, report, _) = run_demo();

    assert_eq!(trainer.state(), TrainState::Converged);
    for sample in Dataset::builtin().iter() {
        assert_eq!(compute_output(&report.final_weights, &sample.input), sample.label);
    }
}

#[test]
fn convergence_is_stable() {
    let (mut trainer, report, _) = run_demo();

    for order in [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1]] {
        let mut out = Vec::new();
        let stats = trainer.run_pass_in_order(&order, &mut out).unwrap();
        assert_eq!(stats.mistakes, 0);
        assert!(out.is_empty());
        assert_eq!(trainer.weights(), report.final_weights.as_slice());
        assert_eq!(trainer.state(), TrainState::Converged);
    }
}

#[test]
fn every_update_follows_the_perceptron_rule() {
    let (_, report, _) = run_demo();
    let dataset = Dataset::builtin();

    assert!(!report.updates.is_empty());
    for update in &report.updates {
        let sample = dataset.get(update.index).unwrap();
        assert_ne!(compute_output(&update.before, &sample.input), sample.label);
        for j in 0..update.before.len() {
            let expected = update.before[j] + sample.label * 0.1 * sample.input[j];
            assert_eq!(update.after[j], expected);
        }
    }

    // Updates chain: each starts from where the previous one left off.
    for pair in report.updates.windows(2) {
        assert_eq!(pair[0].after, pair[1].before);
    }
    assert_eq!(report.updates[0].before, INITIAL_WEIGHTS.to_vec());
    assert_eq!(report.updates.last().unwrap().after, report.final_weights);
}

#[test]
fn stdout_has_initial_line_then_one_line_per_update() {
    let (_, report, out) = run_demo();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), report.total_updates() + 1);
    assert_eq!(lines[0], "w0 =  0.20 , w1 = -0.60 , w2 =  0.25");
    for (line, update) in lines[1..].iter().zip(report.updates.iter()) {
        assert_eq!(*line, format_weights(&update.after));
    }
}

#[test]
fn only_the_last_pass_is_clean() {
    let (_, report, _) = run_demo();
    let (last, rest) = report.passes.split_last().unwrap();

    assert!(last.is_clean());
    assert!(rest.iter().all(|p| !p.is_clean()));
    let mistakes: usize = report.passes.iter().map(|p| p.mistakes).sum();
    assert_eq!(mistakes, report.total_updates());
}

#[test]
fn first_update_on_sample_zero() {
    let mut trainer = demo_trainer();
    let mut out = Vec::new();

    let stats = trainer.run_pass_in_order(&[0, 1, 2, 3], &mut out).unwrap();
    let first = &trainer.updates()[0];

    assert_eq!(stats.pass, 1);
    assert_eq!(first.index, 0);
    let expected = [0.21, -0.61, 0.15];
    for (w, e) in first.after.iter().zip(expected.iter()) {
        assert!((w - e).abs() < 1e-12, "{w} != {e}");
    }
    assert!(String::from_utf8(out)
        .unwrap()
        .starts_with("w0 =  0.21 , w1 = -0.61 , w2 =  0.15\n"));
}

#[test]
fn different_seeds_still_converge() {
    for seed in 0..20 {
        let mut trainer = Trainer::new(
            Perceptron::new(INITIAL_WEIGHTS.to_vec()),
            Dataset::builtin(),
            TrainConfig::new(0.1, seed).with_max_passes(1_000),
        )
        .unwrap();
        let report = trainer.train(&mut std::io::sink()).unwrap();
        assert!(trainer.perceptron().classifies_all(&Dataset::builtin()));
        assert!(report.passes.last().unwrap().is_clean());
    }
}

#[test]
fn report_serializes_to_json() {
    let (_, report, _) = run_demo();
    let json = serde_json::to_string(&report).unwrap();
    let back: TrainReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.total_passes(), report.total_passes());
    assert_eq!(back.total_updates(), report.total_updates());
    for (a, b) in back.final_weights.iter().zip(report.final_weights.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}
