use ndarray::{ArrayView1, ArrayViewMut1};
use rand::prelude::Rng;

/// Running sum of relative fitness along one replicate.
pub fn cumulative_fitness(relative_fitness: ArrayView1<f64>) -> Vec<f64> {
    relative_fitness
        .iter()
        .scan(0.0, |total, w| {
            *total += w;
            Some(*total)
        })
        .collect()
}

/// First index whose cumulative fitness is at or above `draw`.
///
/// Rounding can leave the last cumulative value a hair below one,
/// in which case the last individual is returned.
pub fn roulette_index(cumulative: &[f64], draw: f64) -> usize {
    let index = cumulative.partition_point(|c| *c < draw);
    index.min(cumulative.len().saturating_sub(1))
}

/// Fill `parents` with indexes sampled with replacement, with probability
/// proportional to relative fitness.
pub fn select_parents<R: Rng>(
    relative_fitness: ArrayView1<f64>,
    mut parents: ArrayViewMut1<usize>,
    rng: &mut R,
) {
    let u01 = rand::distributions::Uniform::new(0., 1.);
    let cumulative = cumulative_fitness(relative_fitness);
    for parent in parents.iter_mut() {
        *parent = roulette_index(&cumulative, rng.sample(u01));
    }
}
