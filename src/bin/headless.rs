//! Run the simulation without a window and print the score

use clap::Parser;
use territory_wars::{
    Simulation,
    application::{Drawable, NullSurface},
    cli::SimArgs,
};

#[derive(Parser, Debug)]
#[command(name = "headless", about = "Step the simulation without a window")]
struct Cli {
    #[command(flatten)]
    sim: SimArgs,

    /// Frames to simulate
    #[arg(long, default_value_t = 1000)]
    frames: u64,

    /// Print the score every N frames (0 prints only the final score)
    #[arg(long, default_value_t = 0)]
    report_every: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.sim.resolve() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut sim = match Simulation::new(config, NullSurface, NullSurface) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    for frame in 1..=cli.frames {
        let score = Drawable::step(&mut sim);
        if cli.report_every > 0 && frame % cli.report_every == 0 {
            println!("{:>8}  {}", frame, score);
        }
    }

    println!("{}", sim.score());
}
