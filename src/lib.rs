//! Forward simulation of asexual populations whose individuals carry
//! a diploid germline genome and a somatic genome of arbitrary ploidy,
//! as in ciliates such as *Tetrahymena*.
//!
//! Many replicate populations evolve side by side under recurrent
//! mutation, fitness-proportional selection, and clonal reproduction of
//! the germline. The soma divides either mitotically (exact copies) or
//! amitotically (random partition of replicated copies).
//!
//! ```
//! use amitosis::{Populations, SimParams};
//!
//! let params = SimParams {
//!     seed: 101,
//!     num_replicates: 4,
//!     num_individuals: 50,
//!     num_loci: 10,
//!     ploidy: 4,
//!     genomic_mutation_rate: 0.1,
//!     selection_coefficient: -0.01,
//!     amitosis: true,
//! };
//! let mut pop = Populations::new(params).unwrap();
//! let table = pop.evolve(20, 5).unwrap();
//! assert_eq!(table.generations(), vec![0, 5, 10, 15, 20]);
//! ```

pub mod common;
pub mod error;
pub mod fitness;
pub mod mutation;
pub mod population;
pub mod reproduction;
pub mod selection;
pub mod stats;

pub use common::{SimParams, SomaticDivision};
pub use error::SimError;
pub use population::Populations;
pub use stats::{FitnessRecord, FitnessTable};
