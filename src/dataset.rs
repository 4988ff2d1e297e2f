/// Flight position dataset loading
///
/// Input is a JSON object keyed by flight id, each holding an object keyed by
/// epoch seconds (as strings):
///
/// ```json
/// { "BA117": { "1553439935": { "altitude": 0, "latitude": 51.47, "longitude": -0.45 } } }
/// ```
///
/// Flights with malformed records are rejected individually so one bad flight
/// never prevents the rest from loading.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::{FlightTrailsError, FlightTrailsResult, flight::Waypoint};

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawSample {
    altitude: f64,
    latitude: f64,
    longitude: f64,
}

/// Validated waypoints for one flight, sorted by time
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub id: String,
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedFlight {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<FlightRecord>,
    rejected: Vec<RejectedFlight>,
}

impl Dataset {
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        Self {
            records,
            rejected: Vec::new(),
        }
    }

    pub fn from_json_str(content: &str) -> FlightTrailsResult<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut dataset = Self::default();

        for (id, value) in raw {
            match Self::parse_flight(&id, value) {
                Ok(waypoints) => dataset.records.push(FlightRecord { id, waypoints }),
                Err(e) => {
                    log::warn!("Skipping flight {}: {}", id, e);
                    dataset.rejected.push(RejectedFlight {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        log::info!(
            "Parsed {} flights ({} rejected)",
            dataset.records.len(),
            dataset.rejected.len()
        );
        Ok(dataset)
    }

    pub fn load(path: impl AsRef<Path>) -> FlightTrailsResult<Self> {
        let path = path.as_ref();
        log::info!("Loading flight data from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn parse_flight(id: &str, value: serde_json::Value) -> FlightTrailsResult<Vec<Waypoint>> {
        let samples: BTreeMap<String, RawSample> = serde_json::from_value(value)?;

        let mut waypoints = Vec::with_capacity(samples.len());
        for (key, sample) in samples {
            let time = key.trim().parse::<i64>().map_err(|_| {
                FlightTrailsError::Parse(format!("time key {key:?} is not an integer"))
            })?;

            // Ground-level reports occasionally come through slightly negative
            let altitude = if sample.altitude < 0.0 {
                log::warn!(
                    "Flight {}: clamping altitude {} to 0 at t={}",
                    id,
                    sample.altitude,
                    time
                );
                0.0
            } else {
                sample.altitude
            };

            let waypoint = Waypoint::new(time as f64, sample.latitude, sample.longitude, altitude);
            waypoint.validate(id)?;
            waypoints.push(waypoint);
        }

        // Keys are strings, so lexical order is not time order
        waypoints.sort_by(|a, b| a.time.total_cmp(&b.time));

        if let Some(pair) = waypoints.windows(2).find(|pair| pair[0].time == pair[1].time) {
            return Err(FlightTrailsError::DuplicateTime {
                flight: id.to_string(),
                time: pair[0].time,
            });
        }
        if waypoints.len() < 2 {
            return Err(FlightTrailsError::TooFewWaypoints {
                flight: id.to_string(),
                count: waypoints.len(),
            });
        }

        Ok(waypoints)
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FlightRecord> {
        self.records
    }

    /// Flights dropped during parsing, with the reason
    pub fn rejected(&self) -> &[RejectedFlight] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
