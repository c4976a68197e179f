//! Ball movement: one discrete move-and-collide step per tick

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::EPSILON;
use crate::geometry::Segment;

use super::environment::{Collision, Environment};
use super::obstacle::{Collidable, ObstacleKind};
use super::velocity::Velocity;

pub type BallId = u32;

/// Distance the ball is pushed upward when a paddle bounce leaves its center
/// still inside the paddle rectangle. Without the nudge a wide, shallow
/// obstacle can re-collide every tick and trap the ball.
const PADDLE_SEPARATION: f64 = 10.0;

/// A moving body: center, radius, velocity, and a color tag matching the
/// brick that last recolored it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    pub center: DVec2,
    pub radius: i32,
    pub velocity: Velocity,
    pub color: u32,
}

impl Ball {
    pub fn new(id: BallId, center: DVec2, radius: i32, color: u32) -> Self {
        Self {
            id,
            center,
            radius,
            velocity: Velocity::ZERO,
            color,
        }
    }

    /// Trajectory for this tick: from the center along the velocity,
    /// extended by the radius so contact is detected when the ball surface,
    /// not its center, would reach an obstacle. `None` at zero speed.
    fn trajectory(&self) -> Option<Segment> {
        let speed = self.velocity.speed();
        if speed < EPSILON {
            return None;
        }
        let dir = DVec2::new(self.velocity.dx, self.velocity.dy) / speed;
        let end = self.center + dir * (speed + f64::from(self.radius));
        Some(Segment::new(self.center, end))
    }

    /// Advance one tick: free flight, or resolve the single closest contact.
    ///
    /// On contact the center moves to the midpoint between its old position
    /// and the surface-contact position, a deliberate under-shoot so the
    /// ball stops just short of the obstacle instead of penetrating it. The
    /// struck obstacle then computes the outgoing velocity. Returns the
    /// collision so the caller can run hit bookkeeping; the environment is
    /// only ever read here.
    pub fn step(&mut self, env: &Environment) -> Option<Collision> {
        let trajectory = self.trajectory()?;
        let Some(collision) = env.closest_collision(&trajectory) else {
            self.center = self.velocity.apply_to(self.center);
            return None;
        };
        let obstacle = env.obstacle(collision.obstacle)?;
        let dir = (trajectory.end - trajectory.start).normalize();
        // Where the center would sit with the ball surface touching the hit point
        let contact_center = collision.point - dir * f64::from(self.radius);
        self.center = Segment::new(self.center, contact_center).midpoint();
        self.velocity = obstacle.hit(collision.point, self.velocity);
        if obstacle.kind() == ObstacleKind::Paddle
            && obstacle.collision_rect().contains(self.center)
        {
            self.center.y -= PADDLE_SEPARATION;
        }
        Some(collision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::points_equal;
    use crate::sim::obstacle::{Block, Obstacle};
    use crate::sim::paddle::Paddle;

    fn wall_env(rect: Rect) -> Environment {
        let mut env = Environment::new();
        env.add_obstacle(Obstacle::Block(Block::new(rect, ObstacleKind::Wall, 0)));
        env
    }

    #[test]
    fn test_zero_velocity_is_idempotent() {
        let env = wall_env(Rect::from_coords(0.0, 0.0, 800.0, 10.0));
        let mut ball = Ball::new(1, DVec2::new(400.0, 300.0), 5, 0);
        for _ in 0..10 {
            assert!(ball.step(&env).is_none());
        }
        assert!(points_equal(ball.center, DVec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_free_flight_moves_by_velocity() {
        let env = Environment::new();
        let mut ball = Ball::new(1, DVec2::new(100.0, 100.0), 5, 0);
        ball.velocity = Velocity::new(3.0, -2.0);
        assert!(ball.step(&env).is_none());
        assert!(points_equal(ball.center, DVec2::new(103.0, 98.0)));
    }

    #[test]
    fn test_wall_bounce_is_radius_adjusted() {
        // Ball falling straight down onto a wall whose top edge is at y=510,
        // with no gap between ball surface and wall.
        let env = wall_env(Rect::from_coords(400.0, 510.0, 200.0, 10.0));
        let mut ball = Ball::new(1, DVec2::new(500.0, 500.0), 5, 0);
        ball.velocity = Velocity::from_angle_and_speed(90.0, 5.0);

        let hit = ball.step(&env).expect("surface contact within one tick");
        assert!(points_equal(hit.point, DVec2::new(500.0, 510.0)));
        // Velocity y-component flips sign
        assert!(ball.velocity.dy < 0.0);
        // Center stops strictly before surface contact at y=505
        assert!(ball.center.y < 505.0);
        assert!(ball.center.y > 500.0);
    }

    #[test]
    fn test_collision_undershoots_to_midpoint() {
        let env = wall_env(Rect::from_coords(110.0, 0.0, 10.0, 200.0));
        let mut ball = Ball::new(1, DVec2::new(100.0, 100.0), 0, 0);
        ball.velocity = Velocity::new(20.0, 0.0);

        ball.step(&env).unwrap();
        // Zero radius: contact at the left edge x=110, midpoint of (100, 110)
        assert!(points_equal(ball.center, DVec2::new(105.0, 100.0)));
        assert!(ball.velocity.dx < 0.0);
    }

    #[test]
    fn test_paddle_penetration_nudges_upward() {
        let mut env = Environment::new();
        env.add_obstacle(Obstacle::Paddle(Paddle::new(
            Rect::from_coords(0.0, 570.0, 100.0, 20.0),
            10.0,
            800.0,
        )));
        // Overlapping ball moving up: the middle-zone bounce leaves the
        // center inside the paddle, so the separation nudge must fire.
        let mut ball = Ball::new(1, DVec2::new(50.0, 578.0), 5, 0);
        ball.velocity = Velocity::new(0.0, -5.0);

        ball.step(&env).unwrap();
        assert!(!env.obstacle(0).unwrap().collision_rect().contains(ball.center));
        assert!(crate::approx_eq(ball.center.y, 566.5));
    }
}
