use clap::Parser;
use macroquad::prelude::{BLACK, Conf, clear_background, next_frame};
use territory_wars::{
    Simulation,
    cli::SimArgs,
    config::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    input,
    rendering::{self, MacroquadSurface, ScoreBanner, SCORE_STRIP_HEIGHT},
};

/// Two balls repaint a day/night grid; the score counts cells per side.
#[derive(Parser, Debug)]
#[command(name = "territory-wars", version)]
struct Cli {
    #[command(flatten)]
    sim: SimArgs,
}

fn window_conf() -> Conf {
    // Window follows the playfield; a bad config is reported from main
    let (width, height) = Cli::parse()
        .sim
        .resolve()
        .map(|config| (config.width, config.height))
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));

    Conf {
        window_title: "Territory Wars".to_owned(),
        window_width: width as i32,
        window_height: (height as f32 + SCORE_STRIP_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Cli::parse().sim.resolve() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let (width, height) = (config.width as f32, config.height as f32);
    let palette = config.palette;
    let surface = MacroquadSurface::new(palette.backdrop);
    let banner = ScoreBanner::new(width, height, palette.night_cell, palette.day_cell);

    let mut sim = match Simulation::new(config, surface, banner) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut paused = false;

    loop {
        let controls = input::poll_controls();
        if controls.quit {
            break;
        }
        if controls.restart {
            sim.restart();
        }
        if controls.toggle_pause {
            paused = !paused;
            log::info!("{} at frame {}", if paused { "Paused" } else { "Resumed" }, sim.frame());
        }

        clear_background(BLACK);

        if paused && !controls.single_step {
            sim.redraw();
            rendering::draw_paused_label(width, height);
        } else {
            sim.step();
        }

        next_frame().await;
    }

    log::info!("Final score after {} frames: {}", sim.frame(), sim.score());
}
