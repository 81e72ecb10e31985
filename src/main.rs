use qap_ants::AntColony;
use qap_ants::utils::config::Arguments;
use qap_ants::utils::{qaplib, yaml};
use qap_ants::Error;
use std::process;
use std::time::Instant;

fn main() {
    let args: Arguments = argh::from_env();
    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<(), Error> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    let model = qaplib::load_instance(&args.instance)?;
    println!("{}: {} facilities, seed {}", config.name, model.size(), config.seed);

    let mut colony = AntColony::new(model, config.parameters, config.seed)?;
    let params = colony.parameters();
    println!("{} ants x {} iterations", params.num_ants, params.iterations);
    let quiet = args.quiet;
    let start = Instant::now();
    colony.run_with(|record| {
        if !quiet {
            println!("Iteration {}: Best Cost = {}, Average Cost = {}",
                     record.iteration, record.best_cost, record.average_cost);
        }
    })?;
    let elapsed = start.elapsed().as_micros();

    #[cfg(debug_assertions)]
    println!("pheromone within [{}, {}]", colony.pheromone().min(), colony.pheromone().max());

    let best = colony.best();
    println!("Best assignment (facility -> location): {:?}", best.assignment);
    println!("Best cost: {}", best.cost);
    println!("--- computing time: {} μs ---", elapsed);

    if let Some(output) = args.output {
        yaml::save_yaml(&output, &colony.report())?;
    }
    Ok(())
}
