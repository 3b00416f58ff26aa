use std::io::Write;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::dataset::Dataset;
use crate::display::show::show_learning;
use crate::error::{PerceptronError, Result};
use crate::network::perceptron::Perceptron;
use crate::train::pass_stats::{PassStats, TrainReport, UpdateRecord};
use crate::train::train_config::TrainConfig;

/// Where the training state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainState {
    /// The last pass had at least one mistake, or no pass has run yet.
    Training,
    /// The last full pass made no updates.
    Converged,
}

/// Mistake-driven perceptron trainer.
///
/// Owns the perceptron, the dataset and a seeded `StdRng`. Each pass shuffles
/// the sample indices and updates the weights on every misclassified sample;
/// training stops after the first pass without a mistake.
pub struct Trainer {
    perceptron: Perceptron,
    dataset: Dataset,
    config: TrainConfig,
    rng: StdRng,
    order: Vec<usize>,
    state: TrainState,
    pass: usize,
    passes: Vec<PassStats>,
    updates: Vec<UpdateRecord>,
}

impl Trainer {
    /// Fails with `DimensionMismatch` if the weight vector and the samples
    /// differ in length.
    pub fn new(perceptron: Perceptron, dataset: Dataset, config: TrainConfig) -> Result<Trainer> {
        if perceptron.dim() != dataset.dim() {
            return Err(PerceptronError::DimensionMismatch {
                expected: perceptron.dim(),
                found: dataset.dim(),
                index: 0,
            });
        }

        let rng = StdRng::seed_from_u64(config.seed);
        let order = (0..dataset.len()).collect();

        Ok(Trainer {
            perceptron,
            dataset,
            config,
            rng,
            order,
            state: TrainState::Training,
            pass: 0,
            passes: Vec::new(),
            updates: Vec::new(),
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.perceptron.weights
    }

    pub fn perceptron(&self) -> &Perceptron {
        &self.perceptron
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    /// Updates recorded so far, across all passes and visits.
    pub fn updates(&self) -> &[UpdateRecord] {
        &self.updates
    }

    /// Classifies sample `index` and applies the perceptron rule if it is wrong.
    /// The new weights are written to `out` after an update. Fails with
    /// `SampleOutOfRange` if `index` is not in the dataset.
    pub fn visit<W: Write>(&mut self, index: usize, out: &mut W) -> Result<Option<UpdateRecord>> {
        let sample = self.dataset.get(index).ok_or(PerceptronError::SampleOutOfRange {
            index,
            len: self.dataset.len(),
        })?;

        if self.perceptron.predict(&sample.input) == sample.label {
            return Ok(None);
        }

        let before = self.perceptron.weights.clone();
        self.perceptron
            .apply_update(&sample.input, sample.label, self.config.learning_rate);
        show_learning(out, &self.perceptron.weights)?;

        let record = UpdateRecord {
            pass: self.pass,
            index,
            before,
            after: self.perceptron.weights.clone(),
        };
        trace!("pass {} sample {}: {:?} -> {:?}", record.pass, index, record.before, record.after);
        self.updates.push(record.clone());
        Ok(Some(record))
    }

    /// Runs one full pass visiting samples in exactly `order`.
    ///
    /// A pass with no mistakes moves the trainer to `Converged`; any mistake
    /// moves it back to `Training`. An out-of-range index in `order` fails
    /// the whole pass before any sample is visited.
    pub fn run_pass_in_order<W: Write>(&mut self, order: &[usize], out: &mut W) -> Result<PassStats> {
        let len = self.dataset.len();
        if let Some(&index) = order.iter().find(|&&i| i >= len) {
            return Err(PerceptronError::SampleOutOfRange { index, len });
        }
        self.pass += 1;

        let mut mistakes = 0;
        for &index in order {
            if self.visit(index, out)?.is_some() {
                mistakes += 1;
            }
        }

        let stats = PassStats {
            pass: self.pass,
            order: order.to_vec(),
            mistakes,
        };
        debug!("pass {} order {:?}: {} mistakes", stats.pass, stats.order, stats.mistakes);

        self.state = if stats.is_clean() {
            TrainState::Converged
        } else {
            TrainState::Training
        };
        self.passes.push(stats.clone());
        Ok(stats)
    }

    /// Reshuffles the index order with the trainer's generator, then runs one pass.
    pub fn run_pass<W: Write>(&mut self, out: &mut W) -> Result<PassStats> {
        self.order.shuffle(&mut self.rng);
        let order = self.order.clone();
        self.run_pass_in_order(&order, out)
    }

    /// Prints the starting weights, then runs shuffled passes until one is clean.
    ///
    /// With `max_passes` unset this only returns on convergence (or an I/O
    /// error), so the dataset must be linearly separable.
    pub fn train<W: Write>(&mut self, out: &mut W) -> Result<TrainReport> {
        let initial_weights = self.perceptron.weights.clone();
        let first_pass = self.passes.len();
        let first_update = self.updates.len();

        show_learning(out, &initial_weights)?;

        let mut run = 0;
        loop {
            if let Some(max) = self.config.max_passes {
                if run >= max {
                    return Err(PerceptronError::NotConverged { passes: run });
                }
            }
            run += 1;

            if self.run_pass(out)?.is_clean() {
                break;
            }
        }

        info!(
            "converged after {} passes and {} updates: {:?}",
            run,
            self.updates.len() - first_update,
            self.perceptron.weights
        );

        Ok(TrainReport {
            initial_weights,
            final_weights: self.perceptron.weights.clone(),
            passes: self.passes[first_pass..].to_vec(),
            updates: self.updates[first_update..].to_vec(),
        })
    }

    pub fn into_perceptron(self) -> Perceptron {
        self.perceptron
    }
}
