use ndarray::{Array2, Array3, Axis};
use rand::prelude::Rng;
use rand::SeedableRng;

use crate::fitness::{individual_fitness, relative_fitness};
use crate::mutation::mutate_genome;
use crate::reproduction::{clone_genomes, divide_soma};
use crate::selection::select_parents;
use crate::stats::{summarize_fitness, FitnessRecord, FitnessTable};
use crate::{SimError, SimParams};

/// The germline genome is always diploid.
pub const GERMLINE_PLOIDY: u32 = 2;

/// A set of independently evolving replicate populations of
/// ciliate-like individuals.
///
/// Genomes are stored as mutant-copy counts indexed by
/// `[replicate, individual, locus]`.
#[derive(Debug)]
pub struct Populations {
    params: SimParams,
    mutation_rate: f64,
    soma: Array3<u32>,
    germ: Array3<u32>,
    fitness: Array2<f64>,
    relative_fitness: Array2<f64>,
    selected: Array2<usize>,
    generation: u32,
    table: FitnessTable,
    // One stream per replicate
    rngs: Vec<rand::rngs::StdRng>,
}

impl Populations {
    /// Build wildtype populations and record generation zero.
    pub fn new(params: SimParams) -> Result<Self, SimError> {
        let params = params.validate()?;
        let shape = params.shape();
        let (num_replicates, num_individuals, _) = shape;

        let mut master = rand::rngs::StdRng::seed_from_u64(params.seed);
        let rngs = (0..num_replicates)
            .map(|_| rand::rngs::StdRng::seed_from_u64(master.gen::<u64>()))
            .collect::<Vec<_>>();

        let soma = Array3::<u32>::zeros(shape);
        let germ = Array3::<u32>::zeros(shape);
        let fitness = individual_fitness(soma.view(), params.ploidy, params.selection_coefficient);
        let relative_fitness = relative_fitness(fitness.view(), 0)?;
        let selected =
            Array2::from_shape_fn((num_replicates, num_individuals), |(_, individual)| individual);

        let mut pop = Self {
            params,
            mutation_rate: params.per_site_mutation_rate(),
            soma,
            germ,
            fitness,
            relative_fitness,
            selected,
            generation: 0,
            table: FitnessTable::default(),
            rngs,
        };
        tracing::info!(
            num_replicates,
            num_individuals,
            num_loci = params.num_loci,
            ploidy = params.ploidy,
            mutation_rate = pop.mutation_rate,
            selection_coefficient = params.selection_coefficient,
            division = ?params.somatic_division(),
            "initialized populations"
        );
        pop.collect_data();
        Ok(pop)
    }

    /// Recompute fitness from the current soma.
    pub fn update_fitness(&mut self) -> Result<(), SimError> {
        self.fitness = individual_fitness(
            self.soma.view(),
            self.params.ploidy,
            self.params.selection_coefficient,
        );
        self.relative_fitness = relative_fitness(self.fitness.view(), self.generation)?;
        Ok(())
    }

    /// Mutate every site of both genomes in every individual.
    pub fn mutate(&mut self) -> Result<(), SimError> {
        let rate = self.mutation_rate;
        let ploidy = self.params.ploidy;
        for ((soma, germ), rng) in self
            .soma
            .outer_iter_mut()
            .zip(self.germ.outer_iter_mut())
            .zip(self.rngs.iter_mut())
        {
            mutate_genome(soma, ploidy, rate, rng)?;
            mutate_genome(germ, GERMLINE_PLOIDY, rate, rng)?;
        }
        Ok(())
    }

    /// Choose the parents of the next generation in each replicate.
    pub fn select(&mut self) -> Result<(), SimError> {
        self.update_fitness()?;
        for ((relative, parents), rng) in self
            .relative_fitness
            .outer_iter()
            .zip(self.selected.outer_iter_mut())
            .zip(self.rngs.iter_mut())
        {
            select_parents(relative, parents, rng);
        }
        Ok(())
    }

    /// Replace the current generation with the offspring of the
    /// selected parents.
    pub fn reproduce(&mut self) {
        let division = self.params.somatic_division();
        let ploidy = self.params.ploidy;
        let mut germ = Array3::<u32>::zeros(self.germ.dim());
        let mut soma = Array3::<u32>::zeros(self.soma.dim());
        for (replicate, rng) in self.rngs.iter_mut().enumerate() {
            let parents = self.selected.index_axis(Axis(0), replicate);
            germ.index_axis_mut(Axis(0), replicate)
                .assign(&clone_genomes(self.germ.index_axis(Axis(0), replicate), parents));
            soma.index_axis_mut(Axis(0), replicate).assign(&divide_soma(
                self.soma.index_axis(Axis(0), replicate),
                parents,
                ploidy,
                division,
                rng,
            ));
        }
        self.germ = germ;
        self.soma = soma;
    }

    /// One full life cycle: mutation, selection, reproduction.
    pub fn next_generation(&mut self) -> Result<(), SimError> {
        self.mutate()?;
        self.select()?;
        self.reproduce();
        self.generation += 1;
        Ok(())
    }

    /// Record fitness statistics for the current generation.
    ///
    /// Uses the most recently evaluated fitness, which after a full
    /// generation is that of the selected-from parents.
    pub fn collect_data(&mut self) {
        let (fitness_mean, fitness_std) = summarize_fitness(self.fitness.view());
        tracing::debug!(
            generation = self.generation,
            fitness_mean,
            fitness_std,
            "recorded fitness"
        );
        self.table.push(FitnessRecord::new(
            self.generation,
            fitness_mean,
            fitness_std,
            &self.params,
        ));
    }

    /// Evolve for `ngenerations`, recording statistics whenever the
    /// generation count is a multiple of `interval`.
    ///
    /// Returns every record collected so far, including those of
    /// earlier calls.
    pub fn evolve(&mut self, ngenerations: u32, interval: u32) -> Result<FitnessTable, SimError> {
        if interval == 0 {
            return Err(SimError::InvalidInterval);
        }
        tracing::info!(
            start = self.generation,
            ngenerations,
            interval,
            "evolving populations"
        );
        for _ in 0..ngenerations {
            self.next_generation()?;
            if self.generation % interval == 0 {
                self.collect_data();
            }
        }
        tracing::info!(
            generation = self.generation,
            records = self.table.len(),
            "finished evolving"
        );
        Ok(self.table.clone())
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn soma(&self) -> &Array3<u32> {
        &self.soma
    }

    pub fn germ(&self) -> &Array3<u32> {
        &self.germ
    }

    pub fn fitness(&self) -> &Array2<f64> {
        &self.fitness
    }

    pub fn relative_fitness(&self) -> &Array2<f64> {
        &self.relative_fitness
    }

    /// Parent indexes chosen by the latest call to [`Populations::select`].
    pub fn selected(&self) -> &Array2<usize> {
        &self.selected
    }

    pub fn table(&self) -> &FitnessTable {
        &self.table
    }
}
