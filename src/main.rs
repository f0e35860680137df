#![warn(clippy::all)]

use std::io::{self, Write};

use anyhow::Result;
use life::{dump, Config, Grid, TickLimiter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let mut grid = Grid::blank(config.width, config.height)?;
    for &(x, y) in &config.seeds {
        grid.seed(x, y)?;
    }
    info!(
        width = config.width,
        height = config.height,
        population = grid.population(),
        "starting simulation"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut limiter = TickLimiter::new(config.tick_delay());
    let mut generation: u64 = 0;

    while !grid.is_extinct() {
        dump(&grid, &mut out)?;
        out.flush()?;

        grid = grid.next_gen();
        generation += 1;
        debug!(generation, population = grid.population(), "advanced generation");

        if let Some(max) = config.max_generations {
            if generation >= max {
                info!(generation, population = grid.population(), "generation limit reached");
                return Ok(());
            }
        }
        limiter.delay();
    }

    info!(generation, "population died out");
    Ok(())
}
