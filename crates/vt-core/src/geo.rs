//! Planar coordinate type and movement geometry.
//!
//! Network descriptions this tool consumes (SUMO-style `.net.xml`) carry
//! projected coordinates in metres, so plain Euclidean geometry applies —
//! no great-circle math.  `f64` matches the precision of the source data.

/// A 2-D point in the network's projected coordinate system (metres).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in metres.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading from `self` toward `other` in degrees, normalized to `[0, 360)`.
    ///
    /// 0° points along +x (east), 90° along +y (north).  Returns `0.0` when
    /// the points coincide (`atan2(0, 0)` is defined as 0).
    #[inline]
    pub fn heading_deg_to(self, other: Point) -> f64 {
        (other.y - self.y)
            .atan2(other.x - self.x)
            .to_degrees()
            .rem_euclid(360.0)
    }

    /// The point `step` metres from `self` along the straight line toward
    /// `target`.  Snaps to `target` when the remaining distance is zero.
    pub fn advance_toward(self, target: Point, step: f64) -> Point {
        let dist = self.distance(target);
        if dist <= f64::EPSILON {
            return target;
        }
        Point {
            x: self.x + (target.x - self.x) / dist * step,
            y: self.y + (target.y - self.y) / dist * step,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
