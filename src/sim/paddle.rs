//! The player paddle: bounded movement and zone-based hit response

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

use super::obstacle::{Collidable, ObstacleKind};
use super::velocity::Velocity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    rect: Rect,
    speed: f64,
    arena_width: f64,
}

impl Paddle {
    pub fn new(rect: Rect, speed: f64, arena_width: f64) -> Self {
        Self {
            rect,
            speed,
            arena_width,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move one step left; leaving the play-field wraps to the right edge
    pub fn move_left(&mut self) {
        let mut x = self.rect.upper_left.x - self.speed;
        if x < 0.0 {
            x = self.arena_width - self.rect.width;
        }
        self.rect.upper_left.x = x;
    }

    /// Move one step right; leaving the play-field wraps to the left edge
    pub fn move_right(&mut self) {
        let mut x = self.rect.upper_left.x + self.speed;
        if x > self.arena_width - self.rect.width {
            x = 0.0;
        }
        self.rect.upper_left.x = x;
    }
}

impl Collidable for Paddle {
    fn collision_rect(&self) -> Rect {
        self.rect
    }

    /// Position-dependent bounce: the paddle width splits into 5 equal
    /// zones. The outer four map to fixed outgoing angles (210, 240, 300,
    /// 330 degrees) at the incoming speed; the middle zone is a plain
    /// vertical reflection. Where the ball lands on the paddle therefore
    /// steers it, rather than a pure mirror bounce.
    fn hit(&self, at: DVec2, incoming: Velocity) -> Velocity {
        let zone_width = self.rect.width / 5.0;
        let hit_x = at.x - self.rect.upper_left.x;
        let speed = incoming.speed();
        if hit_x < zone_width {
            Velocity::from_angle_and_speed(210.0, speed)
        } else if hit_x < 2.0 * zone_width {
            Velocity::from_angle_and_speed(240.0, speed)
        } else if hit_x < 3.0 * zone_width {
            Velocity::new(incoming.dx, -incoming.dy)
        } else if hit_x < 4.0 * zone_width {
            Velocity::from_angle_and_speed(300.0, speed)
        } else {
            Velocity::from_angle_and_speed(330.0, speed)
        }
    }

    fn kind(&self) -> ObstacleKind {
        ObstacleKind::Paddle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx_eq, points_equal};

    fn paddle() -> Paddle {
        Paddle::new(Rect::from_coords(0.0, 570.0, 100.0, 20.0), 10.0, 800.0)
    }

    #[test]
    fn test_zone_one_fixed_angle() {
        let v = paddle().hit(DVec2::new(10.0, 570.0), Velocity::new(0.0, 5.0));
        let expected = Velocity::from_angle_and_speed(210.0, 5.0);
        assert!(approx_eq(v.dx, expected.dx));
        assert!(approx_eq(v.dy, expected.dy));
        // Speed magnitude preserved
        assert!(approx_eq(v.speed(), 5.0));
    }

    #[test]
    fn test_middle_zone_reflects_vertically() {
        let v = paddle().hit(DVec2::new(50.0, 570.0), Velocity::new(2.0, 5.0));
        assert!(approx_eq(v.dx, 2.0));
        assert!(approx_eq(v.dy, -5.0));
    }

    #[test]
    fn test_outer_zones_left_right_symmetry() {
        let p = paddle();
        let incoming = Velocity::new(0.0, 4.0);
        let far_left = p.hit(DVec2::new(5.0, 570.0), incoming);
        let far_right = p.hit(DVec2::new(95.0, 570.0), incoming);
        // 210 and 330 degrees mirror around vertical
        assert!(approx_eq(far_left.dx, -far_right.dx));
        assert!(approx_eq(far_left.dy, far_right.dy));
        assert!(far_left.dy < 0.0);
    }

    #[test]
    fn test_move_respects_bounds_and_wraps() {
        let mut p = paddle();
        p.move_right();
        assert!(points_equal(p.rect().upper_left, DVec2::new(10.0, 570.0)));
        p.move_left();
        p.move_left();
        // Stepping past the left edge wraps to the far right
        assert!(points_equal(p.rect().upper_left, DVec2::new(700.0, 570.0)));
        p.move_right();
        // And past the right edge wraps back to zero
        assert!(points_equal(p.rect().upper_left, DVec2::new(0.0, 570.0)));
    }
}
