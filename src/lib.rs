pub mod clock;
pub mod config;
pub mod dataset;
pub mod flight;
pub mod math;
pub mod simulation;
pub mod trail;

pub use clock::Clock;
pub use config::SimulationConfig;
pub use dataset::Dataset;
pub use flight::{Flight, Lifetime, Waypoint};
pub use simulation::{FlightFrame, Frame, Simulation};
pub use trail::{TrailEngine, TrailPhase, TrailWindow};

#[derive(thiserror::Error, Debug)]
pub enum FlightTrailsError {
    #[error("Invalid waypoint in flight {flight}: {reason}")]
    InvalidWaypoint { flight: String, reason: String },
    #[error("Flight {flight} has {count} waypoint(s), at least 2 are required")]
    TooFewWaypoints { flight: String, count: usize },
    #[error("Flight {flight} has more than one waypoint at time {time}")]
    DuplicateTime { flight: String, time: f64 },
    #[error("Dataset contains no usable flights")]
    EmptyDataset,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

pub type FlightTrailsResult<T> = Result<T, FlightTrailsError>;
