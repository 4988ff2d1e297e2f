use anyhow::{Context, Result};
use flight_trails::{Dataset, Simulation, SimulationConfig};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting flight trails...");

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let data_file = if args.len() > 1 {
        args[1].clone()
    } else {
        "location_data.json".to_string()
    };

    let config = match args.get(2) {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load config {path}"))?,
        None => SimulationConfig::default(),
    };

    let max_ticks = if args.len() > 3 {
        args[3].parse::<usize>().unwrap_or(usize::MAX)
    } else {
        usize::MAX
    };

    log::info!("Using data file: {}", data_file);

    let dataset =
        Dataset::load(&data_file).with_context(|| format!("failed to load {data_file}"))?;
    let mut simulation = Simulation::new(dataset, config)?;

    let mut ticks = 0;
    let mut peak_visible = 0;
    while !simulation.is_finished() && ticks < max_ticks {
        let frame = simulation.tick();
        peak_visible = peak_visible.max(frame.flights.len());

        log::debug!(
            "t={} visible={} airborne={}",
            frame.time,
            frame.flights.len(),
            frame.markers().count()
        );
        for flight in &frame.flights {
            if let Some(position) = flight.position {
                log::trace!(
                    "  {} {:?} at ({:.3}, {:.3}, {:.3}), {} trail samples",
                    flight.id,
                    flight.phase,
                    position.x,
                    position.y,
                    position.z,
                    flight.trail.len()
                );
            }
        }
        ticks += 1;
    }

    log::info!(
        "Finished after {} ticks at t={} ({:.0}% of schedule), peak {} visible flights",
        ticks,
        simulation.latest().time,
        simulation.clock().progress() * 100.0,
        peak_visible
    );
    Ok(())
}
