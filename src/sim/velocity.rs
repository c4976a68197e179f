//! Per-tick displacement, convertible between Cartesian and polar form

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Change in position per tick on the x and y axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build from an angle in degrees (standard trig convention on screen
    /// axes, so with y growing downward 90 degrees points down and 270 up)
    /// and a speed magnitude.
    pub fn from_angle_and_speed(angle_deg: f64, speed: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            dx: rad.cos() * speed,
            dy: rad.sin() * speed,
        }
    }

    pub fn speed(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// The point one tick of this velocity away from `p`
    pub fn apply_to(&self, p: DVec2) -> DVec2 {
        p + DVec2::new(self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx_eq, points_equal};

    #[test]
    fn test_from_angle_and_speed() {
        let down = Velocity::from_angle_and_speed(90.0, 5.0);
        assert!(approx_eq(down.dx, 0.0));
        assert!(approx_eq(down.dy, 5.0));

        let up_left = Velocity::from_angle_and_speed(210.0, 2.0);
        assert!(up_left.dx < 0.0);
        assert!(up_left.dy < 0.0);
        assert!(approx_eq(up_left.speed(), 2.0));
    }

    #[test]
    fn test_speed_roundtrip() {
        let v = Velocity::new(3.0, 4.0);
        assert!(approx_eq(v.speed(), 5.0));
        assert!(approx_eq(Velocity::ZERO.speed(), 0.0));
    }

    #[test]
    fn test_apply_to() {
        let v = Velocity::new(2.0, -1.0);
        let p = v.apply_to(DVec2::new(10.0, 10.0));
        assert!(points_equal(p, DVec2::new(12.0, 9.0)));
    }
}
