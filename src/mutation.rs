use ndarray::ArrayViewMut2;
use rand::prelude::Rng;
use rand_distr::{Binomial, Distribution};

use crate::SimError;

/// Mutate every site of one replicate's genome in place.
///
/// Each of the `copies - count` wildtype copies at a site becomes mutant
/// with probability `rate`. There is no back mutation, so counts only
/// grow and saturate at `copies`.
pub fn mutate_genome<R: Rng>(
    mut genome: ArrayViewMut2<u32>,
    copies: u32,
    rate: f64,
    rng: &mut R,
) -> Result<(), SimError> {
    if rate == 0.0 {
        return Ok(());
    }
    for count in genome.iter_mut() {
        let wildtype = copies - *count;
        if wildtype > 0 {
            let new_mutations = Binomial::new(wildtype as u64, rate)?.sample(rng);
            *count += new_mutations as u32;
        }
    }
    Ok(())
}
