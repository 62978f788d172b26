use ndarray::{ArrayView2, Axis};

use crate::SimParams;

/// Mean and sample standard deviation, across replicates, of each
/// replicate's mean fitness.
pub fn summarize_fitness(fitness: ArrayView2<f64>) -> (f64, f64) {
    match fitness.mean_axis(Axis(1)) {
        Some(replicate_means) => {
            let mean = replicate_means.mean().unwrap_or(f64::NAN);
            let std = if replicate_means.len() > 1 {
                replicate_means.std(1.0)
            } else {
                f64::NAN
            };
            (mean, std)
        }
        None => (f64::NAN, f64::NAN),
    }
}

/// One row of the output table.
///
/// The model parameters are repeated on every row so that tables from
/// different parameter sets can be concatenated and compared.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitnessRecord {
    pub generation: u32,
    pub fitness_mean: f64,
    pub fitness_std: f64,
    pub num_replicates: u32,
    pub num_individuals: u32,
    pub num_loci: u32,
    pub ploidy: u32,
    pub genomic_mutation_rate: f64,
    pub selection_coefficient: f64,
    pub amitosis: bool,
}

impl FitnessRecord {
    pub fn new(generation: u32, fitness_mean: f64, fitness_std: f64, params: &SimParams) -> Self {
        Self {
            generation,
            fitness_mean,
            fitness_std,
            num_replicates: params.num_replicates,
            num_individuals: params.num_individuals,
            num_loci: params.num_loci,
            ploidy: params.ploidy,
            genomic_mutation_rate: params.genomic_mutation_rate,
            selection_coefficient: params.selection_coefficient,
            amitosis: params.amitosis,
        }
    }
}

/// Per-generation fitness summary, ordered by generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitnessTable {
    rows: Vec<FitnessRecord>,
}

impl FitnessTable {
    /// Records are keyed by generation; a second record for the
    /// same generation replaces the first.
    pub fn push(&mut self, record: FitnessRecord) {
        match self
            .rows
            .binary_search_by_key(&record.generation, |r| r.generation)
        {
            Ok(index) => self.rows[index] = record,
            Err(index) => self.rows.insert(index, record),
        }
    }

    pub fn rows(&self) -> &[FitnessRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, generation: u32) -> Option<&FitnessRecord> {
        self.rows
            .binary_search_by_key(&generation, |r| r.generation)
            .ok()
            .map(|index| &self.rows[index])
    }

    pub fn generations(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.generation).collect()
    }

    pub fn fitness_means(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.fitness_mean).collect()
    }

    pub fn fitness_stds(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.fitness_std).collect()
    }
}
