use crate::domain::{corpus::LabeledCorpus, errors::ConfigError};

/// Fraction of each class's documents assigned to training.
/// Only values in `[0, 1]` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SplitRatio(f64);

impl SplitRatio {
    pub fn new(ratio: f64) -> Result<Self, ConfigError> {
        if ratio.is_finite() && (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(ConfigError::RatioOutOfRange(ratio))
        }
    }

    /// `floor(ratio * total)`, the size of the training prefix
    pub fn train_count(self, total: usize) -> usize {
        ((self.0 * total as f64).floor() as usize).min(total)
    }
}

/// Document counts of one class after splitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSplitCounts {
    pub class: String,
    pub total: usize,
    pub train: usize,
    pub test:  usize,
}

/// Training prefix and testing suffix of every class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSplit {
    pub train: LabeledCorpus,
    pub test:  LabeledCorpus,
}

impl CorpusSplit {
    /// Per-class counts, in class order
    pub fn summary(&self) -> Vec<ClassSplitCounts> {
        self.train
            .iter()
            .map(|(class, train)| {
                let test = self.test.files(class).len();
                ClassSplitCounts {
                    class: class.to_owned(),
                    total: train.len() + test,
                    train: train.len(),
                    test,
                }
            })
            .collect()
    }
}
