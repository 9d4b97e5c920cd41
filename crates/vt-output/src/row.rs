//! Plain data rows written by output backends.

use vt_sim::Vehicle;

/// One vehicle's trajectory sample at one tick.
///
/// Column contract: `ID, Time, X, Y, Speed, Direction, State, Download,
/// Upload`.  `speed` is 0 while the vehicle waits; `direction` is degrees in
/// `[0, 360)`; `state` is `"moving"` or `"waiting"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRow {
    pub id:        u32,
    /// `YYYY-MM-DD HH:MM:SS` wall-clock timestamp of the tick.
    pub time:      String,
    pub x:         f64,
    pub y:         f64,
    pub speed:     f64,
    pub direction: f64,
    pub state:     &'static str,
    pub download:  f64,
    pub upload:    f64,
}

impl TrajectoryRow {
    /// Build a row from a vehicle's post-transition state.
    pub fn from_vehicle(vehicle: &Vehicle, time: String) -> Self {
        Self {
            id:        vehicle.id.0,
            time,
            x:         vehicle.position.x,
            y:         vehicle.position.y,
            speed:     vehicle.reported_speed(),
            direction: vehicle.heading,
            state:     vehicle.state.label(),
            download:  vehicle.download_rate,
            upload:    vehicle.upload_rate,
        }
    }
}

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Timestamps outside chrono's representable range fall back to the raw
/// second count, keeping the output well-formed rather than aborting a run
/// that is otherwise fine.
pub fn format_time(unix_secs: i64) -> String {
    match chrono::DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => unix_secs.to_string(),
    }
}
