use thiserror::Error;

/// Errors raised while building or evolving a set of populations.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Per-site mutation rate {rate} is outside [0, 1]")]
    MutationRateOutOfRange { rate: f64 },
    #[error("Non-positive fitness in replicate {replicate} at generation {generation} (total = {total})")]
    NonPositiveFitness {
        replicate: usize,
        generation: u32,
        total: f64,
    },
    #[error("Recording interval must be at least one generation")]
    InvalidInterval,
    #[error("Binomial distribution error: {0}")]
    Binomial(#[from] rand_distr::BinomialError),
}
