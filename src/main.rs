use solo_engine::{bench_update, load_scenario, Scenario};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`; the built-in demo runs when omitted
    #[arg(short, long = "file")]
    file_name: Option<String>,

    /// Time engine updates instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<Scenario> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let cfg = load_scenario(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(Scenario::build_scenario(cfg))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_update();
        return Ok(());
    }

    let mut scenario = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => Scenario::demo(),
    };

    println!("Added {} particles to the engine.", scenario.engine.particle_count());

    for step in 1..=scenario.steps {
        println!("\n--- Step {step} ---");
        scenario.step();

        for (i, p) in scenario.engine.particles().iter().enumerate() {
            println!("Particle {i} Position: {}", p.position());
        }
    }

    let energy: f64 = scenario.engine.particles().iter().map(|p| p.kinetic_energy()).sum();
    info!("finished {} steps, total kinetic energy = {energy:.6}", scenario.steps);

    Ok(())
}
