use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::bail;
use log::{debug, info};

use evil3sat::{
    config::{DriverConfig, DEFAULT_PROBABILITY, DEFAULT_REPORT_EVERY, DEFAULT_VARIABLES},
    dimacs::write_dimacs,
    generator::{check_all_false_solution, evil_3sat_instance},
    walk::{perturb_until_satisfied, ConsoleSink, Outcome, RngSource},
};

// Run this example:
// cargo run --release -- -n 8 -p 0.5 --seed 42

#[derive(Parser, Debug)]
#[command(author, version, about = "Watch a decimation walk struggle on an adversarial 3-SAT instance")]
struct Cli {
    /// Number of variables (at least 3).
    #[arg(short = 'n', long = "variables", value_name = "INT", default_value_t = DEFAULT_VARIABLES)]
    variables: usize,

    /// Probability of toggling each literal of an unsatisfied clause.
    #[arg(short = 'p', long, value_name = "FLOAT", default_value_t = DEFAULT_PROBABILITY)]
    probability: f64,

    /// Seed for the random source; drawn from entropy when omitted.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Give up after this many rounds. Unbounded when omitted.
    #[arg(long, value_name = "INT")]
    max_rounds: Option<usize>,

    /// Rounds between progress reports.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_REPORT_EVERY)]
    report_every: usize,

    /// Print the instance as DIMACS CNF and exit.
    #[arg(long)]
    dimacs: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    debug!("args = {:?}", args);

    let instance = evil_3sat_instance(args.variables)?;
    info!(
        "Number of variables: {}, number of clauses: {}",
        instance.variables(),
        instance.len()
    );

    let stdout = io::stdout();
    if args.dimacs {
        write_dimacs(&instance, stdout.lock())?;
        return Ok(());
    }

    {
        let mut out = stdout.lock();
        for clause in instance.iter() {
            writeln!(out, "{clause}")?;
        }
    }
    check_all_false_solution(&instance)?;

    let config = DriverConfig {
        probability: args.probability,
        report_every: args.report_every,
        max_rounds: args.max_rounds,
    };
    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut sink = ConsoleSink::new(stdout.lock());

    match perturb_until_satisfied(&instance, &config, &mut rng, &mut sink)? {
        Outcome::Satisfied { .. } => {
            writeln!(sink.into_inner(), "DONE")?;
            Ok(())
        }
        Outcome::Capped { rounds, assignment } => {
            bail!("still unsatisfied after {rounds} rounds at {assignment}")
        }
    }
}
