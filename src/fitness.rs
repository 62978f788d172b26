//! Somatic genotype to fitness.
//!
//! Each locus contributes `1 + (count / ploidy) * selcoef` and loci combine
//! multiplicatively. Only the soma is expressed; germline mutations are
//! invisible to selection.

use ndarray::{Array2, ArrayView2, ArrayView3, Axis};

use crate::SimError;

/// Fitness of every individual, shape `(replicates, individuals)`.
pub fn individual_fitness(soma: ArrayView3<u32>, ploidy: u32, selcoef: f64) -> Array2<f64> {
    let per_copy = selcoef / ploidy as f64;
    soma.map(|&count| 1.0 + count as f64 * per_copy)
        .map_axis(Axis(2), |locus_effects| locus_effects.product())
}

/// Normalise fitness within each replicate so that it sums to one.
///
/// `generation` is only used to label the error.
pub fn relative_fitness(fitness: ArrayView2<f64>, generation: u32) -> Result<Array2<f64>, SimError> {
    let mut relative = fitness.to_owned();
    for (replicate, mut row) in relative.outer_iter_mut().enumerate() {
        let total = row.sum();
        if !total.is_finite() || total <= 0.0 {
            tracing::warn!(replicate, generation, total, "replicate fitness cannot be normalised");
            return Err(SimError::NonPositiveFitness {
                replicate,
                generation,
                total,
            });
        }
        row /= total;
    }
    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn test_wildtype_fitness_is_one() {
        let soma = Array3::<u32>::zeros((3, 5, 4));
        let w = individual_fitness(soma.view(), 2, -0.3);
        assert_eq!(w.dim(), (3, 5));
        assert!(w.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_loci_multiply() {
        // one replicate, two individuals, two loci, ploidy 2
        let soma = array![[[2, 2], [1, 0]]];
        let w = individual_fitness(soma.view(), 2, 0.5);
        assert!((w[[0, 0]] - 1.5 * 1.5).abs() < 1e-12);
        assert!((w[[0, 1]] - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_relative_fitness_sums_to_one() {
        let soma = array![[[0, 1, 3], [3, 3, 3], [0, 0, 0]], [[1, 1, 1], [2, 0, 0], [0, 3, 1]]];
        let w = individual_fitness(soma.view(), 3, -0.2);
        let rel = relative_fitness(w.view(), 0).unwrap();
        for row in rel.outer_iter() {
            assert!((row.sum() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_neutral_relative_fitness_is_uniform() {
        let soma = array![[[0, 2], [1, 1], [2, 2], [0, 0]]];
        let w = individual_fitness(soma.view(), 2, 0.0);
        let rel = relative_fitness(w.view(), 0).unwrap();
        assert!(rel.iter().all(|&x| (x - 0.25).abs() < 1e-15));
    }

    #[test]
    fn test_zero_total_fitness_is_an_error() {
        let w = array![[1.0, 1.0], [0.0, 0.0]];
        match relative_fitness(w.view(), 17) {
            Err(SimError::NonPositiveFitness {
                replicate,
                generation,
                total,
            }) => {
                assert_eq!(replicate, 1);
                assert_eq!(generation, 17);
                assert_eq!(total, 0.0);
            }
            other => panic!("expected NonPositiveFitness, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_fitness_is_an_error() {
        let w = array![[f64::NAN, 1.0]];
        assert!(relative_fitness(w.view(), 0).is_err());
    }
}
