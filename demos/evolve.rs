use anyhow::Result;
use clap::Parser;

use amitosis::{Populations, SimParams};

#[derive(Parser, Debug)]
#[command(about = "Evolve replicate populations with separate germline and somatic genomes")]
struct Args {
    #[command(flatten)]
    params: SimParams,
    #[arg(short, long = "ngens")]
    num_generations: u32,
    /// Generations between recorded statistics
    #[arg(short, long, default_value = "1")]
    interval: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut pop = Populations::new(args.params)?;
    let table = pop.evolve(args.num_generations, args.interval)?;

    println!("generation\tfitness_mean\tfitness_std\tnReps\tN\tnLoci\tploidy\tgenomic_mu\tselcoef\tamitosis");
    for r in table.rows() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.generation,
            r.fitness_mean,
            r.fitness_std,
            r.num_replicates,
            r.num_individuals,
            r.num_loci,
            r.ploidy,
            r.genomic_mutation_rate,
            r.selection_coefficient,
            r.amitosis
        );
    }
    Ok(())
}
