//! Block Break - a classic brick-breaker
//!
//! Core modules:
//! - `geometry`: exact segment/rectangle intersection primitives
//! - `sim`: deterministic simulation (movement, collision resolution, scoring)
//! - `config`: data-driven level tunables

pub mod config;
pub mod geometry;
pub mod sim;

pub use config::Config;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;
    /// Thickness of the boundary walls and the bottom gutter
    pub const WALL_THICKNESS: f64 = 10.0;

    /// Brick wall layout: a staircase starting `BRICK_COLS` wide,
    /// shrinking by one brick per row
    pub const BRICK_WIDTH: f64 = 40.0;
    pub const BRICK_HEIGHT: f64 = 20.0;
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_COLS: u32 = 12;
    pub const BRICK_TOP: f64 = 100.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    pub const PADDLE_Y: f64 = 570.0;
    pub const PADDLE_SPEED: f64 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 5;
    pub const BALL_SPEED: f64 = 5.0;
    pub const BALL_COUNT: u32 = 3;
    pub const BALL_SPAWN_X: f64 = 500.0;
    pub const BALL_SPAWN_Y: f64 = 500.0;

    /// Scoring
    pub const BRICK_SCORE: i64 = 5;
    pub const CLEAR_BONUS: i64 = 100;

    /// Target frame rate for the outer run loop
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Comparison tolerance shared by every geometric predicate. Every
/// intersection and containment test builds on it to avoid false negatives
/// from floating-point round-off.
pub const EPSILON: f64 = 1e-5;

/// Approximate equality within [`EPSILON`]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// `a <= b` up to tolerance
#[inline]
pub fn approx_le(a: f64, b: f64) -> bool {
    a < b || approx_eq(a, b)
}

/// `a >= b` up to tolerance
#[inline]
pub fn approx_ge(a: f64, b: f64) -> bool {
    a > b || approx_eq(a, b)
}

/// Point equality: both coordinate deltas under tolerance
#[inline]
pub fn points_equal(a: DVec2, b: DVec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_tolerance() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(1.0, 1.0 + 1e-6));
        assert!(!approx_eq(1.0, 1.0 + 1e-4));
        // Symmetric
        assert!(approx_eq(1.0 + 1e-6, 1.0));
    }

    #[test]
    fn test_approx_ordering() {
        assert!(approx_le(1.0, 1.0 + 1e-6));
        assert!(approx_le(1.0 + 1e-6, 1.0));
        assert!(approx_ge(5.0, 3.0));
        assert!(!approx_le(5.0, 3.0));
    }

    #[test]
    fn test_points_equal() {
        let p = DVec2::new(3.0, 4.0);
        assert!(points_equal(p, p));
        assert!(points_equal(p, p + DVec2::new(1e-6, 0.0)));
        assert!(!points_equal(p, p + DVec2::new(1e-4, 0.0)));
        // Both coordinates must be close
        assert!(!points_equal(p, DVec2::new(3.0, 4.1)));
    }
}
