//! Asexual reproduction of selected parents.
//!
//! The germline is always copied exactly. The soma is either copied
//! (mitosis) or replicated and randomly partitioned (amitosis).

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::prelude::Rng;

use crate::common::SomaticDivision;

/// Offspring genomes are exact copies of their parent's genome.
pub fn clone_genomes(parents: ArrayView2<u32>, selected: ArrayView1<usize>) -> Array2<u32> {
    let num_loci = parents.ncols();
    Array2::from_shape_fn((selected.len(), num_loci), |(i, locus)| {
        parents[[selected[i], locus]]
    })
}

/// Somatic count of one daughter after amitotic division at a single locus.
///
/// The parent's `ploidy` copies, `mutant` of which are mutant, are doubled
/// and the daughter receives `ploidy` of the `2 * ploidy` copies, drawn
/// one at a time without replacement. The result is hypergeometric with
/// mean `mutant`.
pub fn amitotic_count<R: Rng>(mutant: u32, ploidy: u32, rng: &mut R) -> u32 {
    if mutant == 0 || mutant == ploidy {
        return mutant;
    }
    let mut mutant_left = 2 * mutant;
    let mut pool_left = 2 * ploidy;
    let mut inherited = 0;
    for _ in 0..ploidy {
        if mutant_left == 0 {
            break;
        }
        if rng.gen_range(0..pool_left) < mutant_left {
            inherited += 1;
            mutant_left -= 1;
        }
        pool_left -= 1;
    }
    inherited
}

/// Offspring somata after amitosis of each selected parent.
pub fn amitotic_genomes<R: Rng>(
    parents: ArrayView2<u32>,
    selected: ArrayView1<usize>,
    ploidy: u32,
    rng: &mut R,
) -> Array2<u32> {
    let mut offspring = Array2::<u32>::zeros((selected.len(), parents.ncols()));
    for ((i, locus), count) in offspring.indexed_iter_mut() {
        *count = amitotic_count(parents[[selected[i], locus]], ploidy, rng);
    }
    offspring
}

/// Next-generation soma for one replicate.
pub fn divide_soma<R: Rng>(
    parents: ArrayView2<u32>,
    selected: ArrayView1<usize>,
    ploidy: u32,
    division: SomaticDivision,
    rng: &mut R,
) -> Array2<u32> {
    match division {
        SomaticDivision::Mitosis => clone_genomes(parents, selected),
        SomaticDivision::Amitosis => amitotic_genomes(parents, selected, ploidy, rng),
    }
}
