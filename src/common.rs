use clap::Parser;

use crate::SimError;

/// How the somatic genome is partitioned at cell division.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SomaticDivision {
    /// Daughter soma is an exact copy of the parent soma.
    Mitosis,
    /// Parent soma is replicated, then `ploidy` copies are drawn
    /// without replacement for the daughter.
    Amitosis,
}

#[derive(Parser, Copy, Clone, Debug, PartialEq)]
pub struct SimParams {
    #[arg(long)]
    pub seed: u64,
    #[arg(long = "nreps", short = 'r')]
    pub num_replicates: u32,
    #[arg(long = "popsize", short = 'N')]
    pub num_individuals: u32,
    #[arg(long = "nloci", short = 'l')]
    pub num_loci: u32,
    /// Ploidy of the somatic genome. The germline is always diploid.
    #[arg(long, default_value = "2")]
    pub ploidy: u32,
    /// Mutations per genome per generation
    #[arg(long = "mu", short = 'm')]
    pub genomic_mutation_rate: f64,
    /// Effect of each mutation. Negative values are deleterious.
    #[arg(long = "selcoef", short = 's', allow_negative_numbers = true)]
    pub selection_coefficient: f64,
    #[arg(long)]
    pub amitosis: bool,
}

impl SimParams {
    pub fn validate(self) -> Result<Self, SimError> {
        for (name, value) in [
            ("num_replicates", self.num_replicates),
            ("num_individuals", self.num_individuals),
            ("num_loci", self.num_loci),
            ("ploidy", self.ploidy),
        ] {
            if value == 0 {
                return Err(SimError::InvalidParameter(format!(
                    "{name} must be positive"
                )));
            }
        }
        let rate = self.per_site_mutation_rate();
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(SimError::MutationRateOutOfRange { rate });
        }
        if !self.selection_coefficient.is_finite() || self.selection_coefficient <= -1.0 {
            return Err(SimError::InvalidParameter(format!(
                "selection coefficient {} must be finite and greater than -1",
                self.selection_coefficient
            )));
        }
        Ok(self)
    }

    /// Probability that a single wildtype copy mutates in one generation.
    /// The same value applies to somatic and germline copies.
    pub fn per_site_mutation_rate(&self) -> f64 {
        self.genomic_mutation_rate / (self.num_loci as f64 * self.ploidy as f64)
    }

    pub fn somatic_division(&self) -> SomaticDivision {
        if self.amitosis {
            SomaticDivision::Amitosis
        } else {
            SomaticDivision::Mitosis
        }
    }

    pub(crate) fn shape(&self) -> (usize, usize, usize) {
        (
            self.num_replicates as usize,
            self.num_individuals as usize,
            self.num_loci as usize,
        )
    }
}

#[cfg(test)]
pub(crate) fn test_params() -> SimParams {
    SimParams {
        seed: 42,
        num_replicates: 10,
        num_individuals: 100,
        num_loci: 1,
        ploidy: 2,
        genomic_mutation_rate: 0.0,
        selection_coefficient: 0.0,
        amitosis: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = test_params().validate().unwrap();
        assert_eq!(params.somatic_division(), SomaticDivision::Mitosis);
        assert_eq!(params.per_site_mutation_rate(), 0.0);
    }

    #[test]
    fn test_per_site_rate() {
        let params = SimParams {
            num_loci: 10,
            ploidy: 4,
            genomic_mutation_rate: 0.8,
            amitosis: true,
            ..test_params()
        };
        assert!((params.per_site_mutation_rate() - 0.02).abs() < 1e-12);
        assert_eq!(params.somatic_division(), SomaticDivision::Amitosis);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let p = test_params();
        for params in [
            SimParams {
                num_replicates: 0,
                ..p
            },
            SimParams {
                num_individuals: 0,
                ..p
            },
            SimParams { num_loci: 0, ..p },
            SimParams { ploidy: 0, ..p },
        ] {
            assert!(matches!(
                params.validate(),
                Err(SimError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_mutation_rate_bounds() {
        let p = test_params();
        // One locus with two somatic copies: a genomic rate of 2 saturates
        assert!(SimParams {
            genomic_mutation_rate: 2.0,
            ..p
        }
        .validate()
        .is_ok());
        for rate in [2.5, -0.1, f64::NAN, f64::INFINITY] {
            let params = SimParams {
                genomic_mutation_rate: rate,
                ..p
            };
            assert!(matches!(
                params.validate(),
                Err(SimError::MutationRateOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_selection_coefficient_bounds() {
        let p = test_params();
        assert!(SimParams {
            selection_coefficient: -0.99,
            ..p
        }
        .validate()
        .is_ok());
        for s in [-1.0, -2.0, f64::NAN] {
            let params = SimParams {
                selection_coefficient: s,
                ..p
            };
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn test_parse_from_args() {
        let params = SimParams::try_parse_from([
            "evolve", "--seed", "7", "-r", "3", "-N", "50", "-l", "4", "--mu", "0.1", "-s",
            "-0.05", "--amitosis",
        ])
        .unwrap();
        assert_eq!(params.ploidy, 2);
        assert_eq!(params.num_individuals, 50);
        assert_eq!(params.selection_coefficient, -0.05);
        assert!(params.amitosis);
    }
}
