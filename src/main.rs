use orbit_sim::io::{load_system, CsvRecorder, SystemFile};
use orbit_sim::{compute_conservations, Simulation};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbit-sim", version, about = "N-body orbit simulator with conservation and eclipse diagnostics")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate a system and write the trajectory to CSV
    Run {
        /// JSON system file
        #[arg(long)]
        system: PathBuf,

        /// Number of steps (overrides the system file)
        #[arg(long)]
        steps: Option<u64>,

        /// Time step in seconds (overrides the system file)
        #[arg(long)]
        dt: Option<f64>,

        /// CSV output path
        #[arg(long, default_value = "orbit.csv")]
        output: PathBuf,

        /// Shift into the barycentric frame before the first step
        #[arg(long)]
        barycenter: bool,
    },

    /// Check that a system file loads and can be simulated
    Validate {
        #[arg(long)]
        system: PathBuf,
    },

    /// Print the bodies and initial conservations of a system file
    Info {
        #[arg(long)]
        system: PathBuf,
    },
}

fn run(system: PathBuf, steps: Option<u64>, dt: Option<f64>, output: PathBuf, barycenter: bool) -> Result<()> {
    let (bodies, mut config) = load_system(&system)
        .with_context(|| format!("failed to load system {}", system.display()))?;

    if let Some(steps) = steps {
        config.steps = steps;
    }
    if let Some(dt) = dt {
        config.time_step = dt;
    }
    config.normalize_barycenter |= barycenter;

    let mut simulation = Simulation::new(bodies, config)?;
    let mut recorder = CsvRecorder::create(&output, simulation.get_bodies())
        .with_context(|| format!("failed to create {}", output.display()))?;

    simulation.run(|sim| recorder.record(sim))?;
    recorder.flush()?;

    let drift = simulation.drift();
    println!(
        "Simulation complete: {} steps, {} rows written to {}",
        simulation.get_step_count(),
        recorder.rows_written(),
        output.display()
    );
    println!(
        "Relative drift: energy {:e}, angular momentum {:e}, linear momentum {:e}",
        drift.energy, drift.angular_momentum, drift.linear_momentum
    );
    Ok(())
}

fn validate(system: PathBuf) -> Result<()> {
    let file = SystemFile::load(&system)
        .with_context(|| format!("failed to load system {}", system.display()))?;
    file.validate()?;

    println!("System is valid: {} bodies", file.bodies.len());
    for body in &file.bodies {
        println!(
            " - {} | mass = {:e} | pos = {} | vel = {}",
            body.name, body.mass, body.position, body.velocity
        );
        if body.mass <= 0.0 {
            println!("   Warning: non-positive mass");
        }
    }
    Ok(())
}

fn info(system: PathBuf) -> Result<()> {
    let file = SystemFile::load(&system)
        .with_context(|| format!("failed to load system {}", system.display()))?;
    file.validate()?;

    let config = &file.simulation;
    println!(
        "{} bodies, dt = {} s, {} steps ({} s simulated)",
        file.bodies.len(),
        config.time_step,
        config.steps,
        config.duration()
    );
    for body in &file.bodies {
        println!("{:<12} {:>14.6e} kg  r = {}  v = {}", body.name, body.mass, body.position, body.velocity);
    }

    let c = compute_conservations(&file.bodies, &config.constants);
    println!("KE = {:e} J, PE = {:e} J, E = {:e} J", c.kinetic_energy, c.potential_energy, c.total_energy);
    println!("P = {} kg m/s", c.linear_momentum);
    println!("L = {} kg m^2/s", c.angular_momentum);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    match Args::parse().command {
        Command::Run { system, steps, dt, output, barycenter } => run(system, steps, dt, output, barycenter),
        Command::Validate { system } => validate(system),
        Command::Info { system } => info(system),
    }
}
