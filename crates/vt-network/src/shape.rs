//! Polyline shape parsing.
//!
//! Edge shapes arrive as space-separated `"x,y"` pairs, e.g.
//! `"101.3,205.0 140.1,207.2"`.  An empty (or all-whitespace) string yields
//! zero waypoints — such edges are excluded from the graph, not an error.

use vt_core::Point;

use crate::{NetworkError, NetworkResult};

/// Parse a shape attribute into an ordered waypoint polyline.
///
/// Any token that is not exactly two comma-separated floats fails with
/// [`NetworkError::MalformedShape`].
pub fn parse_shape(shape: &str) -> NetworkResult<Vec<Point>> {
    shape.split_whitespace().map(parse_point).collect()
}

fn parse_point(token: &str) -> NetworkResult<Point> {
    let malformed = |reason: &str| NetworkError::MalformedShape {
        token:  token.to_string(),
        reason: reason.to_string(),
    };

    let (x, y) = token
        .split_once(',')
        .ok_or_else(|| malformed("missing ',' separator"))?;
    if y.contains(',') {
        return Err(malformed("more than two coordinates"));
    }

    let x: f64 = x.parse().map_err(|_| malformed("non-numeric x"))?;
    let y: f64 = y.parse().map_err(|_| malformed("non-numeric y"))?;
    Ok(Point::new(x, y))
}
