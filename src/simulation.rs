/// Simulation context: the clock plus every flight's immutable trajectory state
///
/// Owned by the driving loop. Each tick computes a complete [`Frame`] into a
/// back buffer and only then swaps it to the front, so readers of
/// [`Simulation::latest`] never observe a half-computed tick.
use std::collections::HashMap;
use std::ops::Range;

use glam::DVec3;
use rayon::prelude::*;

use crate::{
    FlightTrailsError, FlightTrailsResult,
    clock::Clock,
    config::SimulationConfig,
    dataset::Dataset,
    flight::Flight,
    trail::{TrailBuffer, TrailEngine, TrailPhase, TrailSample, TrailWindow},
};

/// Per-tick output for one visible flight
#[derive(Debug, Clone, PartialEq)]
pub struct FlightFrame {
    /// Index into [`Simulation::flights`]
    pub index: usize,
    pub id: String,
    pub phase: TrailPhase,
    /// Marker position; `None` once the flight has landed and only its trail remains
    pub position: Option<DVec3>,
    pub window: TrailWindow,
    /// Trail sampled at evenly spaced times, oldest first
    pub trail: Vec<TrailSample>,
    /// Lit vertices of the flight's pre-sampled [`TrailBuffer`]
    pub lit: Option<Range<usize>>,
}

/// Everything a renderer needs for one tick. Hidden flights are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub flights: Vec<FlightFrame>,
}

impl Frame {
    pub fn markers(&self) -> impl Iterator<Item = (usize, DVec3)> + '_ {
        self.flights
            .iter()
            .filter_map(|f| f.position.map(|position| (f.index, position)))
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

pub struct Simulation {
    config: SimulationConfig,
    engine: TrailEngine,
    clock: Clock,
    flights: Vec<Flight>,
    buffers: Vec<TrailBuffer>,
    by_id: HashMap<String, usize>,
    front: Frame,
    back: Frame,
}

impl Simulation {
    /// Densify and fit every flight in the dataset. Flights that fail
    /// validation are logged and left out.
    pub fn new(dataset: Dataset, config: SimulationConfig) -> FlightTrailsResult<Self> {
        config.validate()?;

        let built: Vec<_> = dataset
            .into_records()
            .into_par_iter()
            .map(|record| {
                let id = record.id.clone();
                Flight::new(record.id, record.waypoints, &config)
                    .map(|flight| {
                        let buffer = TrailBuffer::new(flight.trajectory(), config.trail.resolution);
                        (flight, buffer)
                    })
                    .map_err(|e| (id, e))
            })
            .collect();

        let mut flights = Vec::with_capacity(built.len());
        let mut buffers = Vec::with_capacity(built.len());
        let mut by_id = HashMap::with_capacity(built.len());
        for result in built {
            match result {
                Ok((flight, buffer)) => {
                    by_id.insert(flight.id().to_string(), flights.len());
                    flights.push(flight);
                    buffers.push(buffer);
                }
                Err((id, e)) => log::warn!("Excluding flight {}: {}", id, e),
            }
        }

        let clock = Clock::spanning(flights.iter().map(Flight::lifetime), config.tick_step_s)
            .ok_or(FlightTrailsError::EmptyDataset)?;

        if let Some(first) = flights
            .iter()
            .min_by(|a, b| a.lifetime().start.total_cmp(&b.lifetime().start))
        {
            log::info!("First flight {} departs at {}", first.id(), first.lifetime().start);
        }
        log::info!(
            "Simulation ready: {} flights, {} inserted waypoints, time {}..{}",
            flights.len(),
            flights.iter().map(Flight::inserted_count).sum::<usize>(),
            clock.start(),
            clock.end()
        );

        Ok(Self {
            engine: TrailEngine::new(&config.trail),
            config,
            clock,
            flights,
            buffers,
            by_id,
            front: Frame::default(),
            back: Frame::default(),
        })
    }

    /// Compute the frame for an arbitrary time without touching the clock
    pub fn frame_at(&self, time: f64) -> Frame {
        let mut frame = Frame::default();
        self.compute_frame(time, &mut frame);
        frame
    }

    fn compute_frame(&self, time: f64, frame: &mut Frame) {
        frame.time = time;
        frame.flights.clear();

        for (index, (flight, buffer)) in self.flights.iter().zip(&self.buffers).enumerate() {
            let Some(window) = self.engine.window(flight, time) else {
                continue;
            };

            let position = window
                .phase
                .shows_marker()
                .then(|| flight.location_at(time));

            frame.flights.push(FlightFrame {
                index,
                id: flight.id().to_string(),
                phase: window.phase,
                position,
                window,
                trail: self.engine.sample(flight, time),
                lit: buffer.lit_range(&window),
            });
        }
    }

    /// Compute the frame for the current time, publish it, then advance the clock
    pub fn tick(&mut self) -> &Frame {
        let time = self.clock.current();

        let mut back = std::mem::take(&mut self.back);
        self.compute_frame(time, &mut back);
        self.back = back;
        std::mem::swap(&mut self.front, &mut self.back);

        log::trace!(
            "Tick t={}: {} visible flights",
            time,
            self.front.flights.len()
        );

        self.clock.advance();
        &self.front
    }

    /// Most recently published frame
    pub fn latest(&self) -> &Frame {
        &self.front
    }

    /// True once every trail has faded out
    pub fn is_finished(&self) -> bool {
        self.clock.is_past(self.engine.duration())
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.front = Frame::default();
        self.back = Frame::default();
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn engine(&self) -> &TrailEngine {
        &self.engine
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn flight(&self, id: &str) -> Option<&Flight> {
        self.by_id.get(id).map(|&index| &self.flights[index])
    }

    pub fn trail_buffer(&self, index: usize) -> Option<&TrailBuffer> {
        self.buffers.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::TrailConfig,
        dataset::FlightRecord,
        flight::Waypoint,
    };

    fn config() -> SimulationConfig {
        SimulationConfig {
            trail: TrailConfig {
                duration_s: 200.0,
                points: 5,
                resolution: 50,
            },
            tick_step_s: 50.0,
            ..SimulationConfig::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            FlightRecord {
                id: "EARLY".to_string(),
                waypoints: vec![
                    Waypoint::new(0.0, 50.0, 0.0, 0.0),
                    Waypoint::new(500.0, 50.5, 1.0, 20_000.0),
                    Waypoint::new(1_000.0, 51.0, 2.0, 0.0),
                ],
            },
            FlightRecord {
                id: "LATE".to_string(),
                waypoints: vec![
                    Waypoint::new(600.0, 40.0, -3.0, 0.0),
                    Waypoint::new(1_500.0, 41.0, -1.0, 0.0),
                ],
            },
            FlightRecord {
                id: "SINGLE".to_string(),
                waypoints: vec![Waypoint::new(100.0, 0.0, 0.0, 0.0)],
            },
        ])
    }

    #[test]
    fn test_setup_excludes_invalid_flights() {
        let sim = Simulation::new(dataset(), config()).unwrap();

        assert_eq!(sim.flights().len(), 2);
        assert!(sim.flight("SINGLE").is_none());
        assert_eq!(sim.flight("LATE").unwrap().lifetime().stop, 1_500.0);
        assert_eq!(sim.clock().start(), 0.0);
        assert_eq!(sim.clock().end(), 1_500.0);
        assert_eq!(sim.trail_buffer(0).unwrap().len(), 51);
    }

    #[test]
    fn test_empty_dataset() {
        let only_bad = Dataset::from_records(vec![FlightRecord {
            id: "SINGLE".to_string(),
            waypoints: vec![Waypoint::new(100.0, 0.0, 0.0, 0.0)],
        }]);
        assert!(matches!(
            Simulation::new(only_bad, config()),
            Err(FlightTrailsError::EmptyDataset)
        ));
    }

    #[test]
    fn test_frame_contents() {
        let sim = Simulation::new(dataset(), config()).unwrap();
        let early = sim.flight("EARLY").unwrap();

        let frame = sim.frame_at(500.0);
        assert_eq!(frame.flights.len(), 1);
        let f = &frame.flights[0];
        assert_eq!(f.id, "EARLY");
        assert_eq!(sim.flights()[f.index].id(), "EARLY");
        assert_eq!(f.phase, TrailPhase::Full);
        assert_eq!((f.window.start_time, f.window.end_time), (300.0, 500.0));
        assert!((f.position.unwrap() - early.location_at(500.0)).length() < 1e-12);
        assert_eq!(f.trail.len(), 5);
        assert!(f.lit.is_some());

        let frame = sim.frame_at(1_100.0);
        assert_eq!(frame.flights.len(), 2);
        let fading = frame.flights.iter().find(|f| f.index == 0).unwrap();
        assert_eq!(fading.phase, TrailPhase::FadingOut);
        assert!(fading.position.is_none());
        assert_eq!(frame.markers().count(), 1);

        assert!(sim.frame_at(1_800.0).is_empty());
    }

    #[test]
    fn test_tick_publishes_then_advances() {
        let mut sim = Simulation::new(dataset(), config()).unwrap();
        assert!(sim.latest().is_empty());

        let first = sim.tick().clone();
        assert_eq!(first.time, 0.0);
        assert_eq!(first.flights.len(), 1);
        assert_eq!(sim.clock().current(), 50.0);
        assert_eq!(sim.latest(), &first);

        let second = sim.tick().clone();
        assert_eq!(second.time, 50.0);
        assert_eq!(second, sim.frame_at(50.0));
    }

    #[test]
    fn test_runs_until_trails_fade() {
        let mut sim = Simulation::new(dataset(), config()).unwrap();
        let mut ticks = 0;
        while !sim.is_finished() {
            sim.tick();
            ticks += 1;
        }

        // 0..=1700 in steps of 50
        assert_eq!(ticks, 35);
        // The last trail has shrunk to nothing but is still reported
        let last = sim.latest();
        assert_eq!(last.time, 1_700.0);
        assert_eq!(last.flights.len(), 1);
        assert_eq!(last.flights[0].phase, TrailPhase::FadingOut);
        assert!(last.flights[0].window.is_empty());
        assert_eq!(last.markers().count(), 0);

        sim.reset();
        assert_eq!(sim.clock().current(), 0.0);
        assert!(sim.latest().is_empty());
    }
}
