//! World assembly: the environment, the balls, and the bookkeeping counters

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::geometry::Rect;

use super::ball::{Ball, BallId};
use super::environment::Environment;
use super::events::Counter;
use super::obstacle::{Block, Obstacle, ObstacleKind};
use super::paddle::Paddle;
use super::velocity::Velocity;

/// Palette index shared by the boundary walls
const WALL_COLOR: u32 = 7;
/// Palette index the balls start with
const BALL_COLOR: u32 = 6;

/// Outcome the outer loop polls after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldStatus {
    Running,
    /// Every brick destroyed
    Cleared,
    /// Every ball lost to the gutter
    OutOfBalls,
}

/// Everything the simulation owns: obstacle registry, moving balls, and the
/// counters the listeners maintain.
#[derive(Debug)]
pub struct World {
    pub environment: Environment,
    pub balls: Vec<Ball>,
    pub score: Counter,
    pub blocks_left: Counter,
    pub balls_left: Counter,
    next_ball_id: BallId,
}

impl World {
    /// Empty world, for tests and custom layouts
    pub fn empty() -> Self {
        Self {
            environment: Environment::new(),
            balls: Vec::new(),
            score: Counter::default(),
            blocks_left: Counter::default(),
            balls_left: Counter::default(),
            next_ball_id: 0,
        }
    }

    /// Build the classic level: a staircase wall of bricks, four boundary
    /// walls with the bottom one acting as the gutter, the paddle, and the
    /// starting balls launched at seeded-random angles.
    pub fn new_level(config: &Config, seed: u64) -> Self {
        let mut world = Self::empty();
        let mut rng = Pcg32::seed_from_u64(seed);

        // Brick staircase: each row one brick shorter than the one above,
        // right-aligned against the right wall
        for row in 0..config.brick_rows {
            let cols = config.brick_cols.saturating_sub(row);
            for col in 1..=cols {
                let x = config.arena_width
                    - config.wall_thickness
                    - config.brick_width * f64::from(col);
                let y = config.brick_top + config.brick_height * f64::from(row);
                let rect = Rect::from_coords(x, y, config.brick_width, config.brick_height);
                world
                    .environment
                    .add_obstacle(Obstacle::Block(Block::new(rect, ObstacleKind::Brick, row)));
                world.blocks_left.increase(1);
            }
        }

        // Boundary walls; the bottom edge removes balls instead of bouncing them
        let w = config.arena_width;
        let h = config.arena_height;
        let t = config.wall_thickness;
        for (rect, kind) in [
            (Rect::from_coords(0.0, 0.0, w, t), ObstacleKind::Wall),
            (Rect::from_coords(0.0, 0.0, t, h), ObstacleKind::Wall),
            (Rect::from_coords(w - t, 0.0, t, h), ObstacleKind::Wall),
            (Rect::from_coords(0.0, h, w, t), ObstacleKind::Gutter),
        ] {
            world
                .environment
                .add_obstacle(Obstacle::Block(Block::new(rect, kind, WALL_COLOR)));
        }

        // Paddle
        let paddle_rect = Rect::from_coords(
            0.0,
            config.paddle_y,
            config.paddle_width,
            config.paddle_height,
        );
        world
            .environment
            .add_obstacle(Obstacle::Paddle(Paddle::new(
                paddle_rect,
                config.paddle_speed,
                config.arena_width,
            )));

        // Balls, launched at seeded-random angles
        let spawn = DVec2::new(config.ball_spawn_x, config.ball_spawn_y);
        for _ in 0..config.ball_count {
            let angle = f64::from(rng.random_range(0..360u32));
            let ball = world.spawn_ball(spawn, config.ball_radius, BALL_COLOR);
            ball.velocity = Velocity::from_angle_and_speed(angle, config.ball_speed);
        }

        log::info!(
            "level built: {} bricks, {} balls, seed {seed}",
            world.blocks_left.value(),
            world.balls_left.value(),
        );
        world
    }

    /// Add a ball and keep the ball counter in sync
    pub fn spawn_ball(&mut self, center: DVec2, radius: i32, color: u32) -> &mut Ball {
        let id = self.next_ball_id;
        self.next_ball_id += 1;
        self.balls.push(Ball::new(id, center, radius, color));
        self.balls_left.increase(1);
        self.balls.last_mut().expect("ball just pushed")
    }

    pub fn ball_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    /// Remove a ball by id; true if it was present
    pub fn remove_ball(&mut self, id: BallId) -> bool {
        let before = self.balls.len();
        self.balls.retain(|b| b.id != id);
        self.balls.len() < before
    }

    /// Termination state: cleared wall wins over drained balls, matching the
    /// order the outer loop checks them in
    pub fn status(&self) -> WorldStatus {
        if self.blocks_left.value() == 0 {
            WorldStatus::Cleared
        } else if self.balls_left.value() == 0 {
            WorldStatus::OutOfBalls
        } else {
            WorldStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Collidable;

    #[test]
    fn test_standard_level_counts() {
        let config = Config::default();
        let world = World::new_level(&config, 7);
        // Staircase: 12 + 11 + 10 + 9 + 8 + 7 bricks
        assert_eq!(world.blocks_left.value(), 57);
        // Bricks plus three walls, the gutter, and the paddle
        assert_eq!(world.environment.len(), 57 + 4 + 1);
        assert_eq!(world.balls.len(), 3);
        assert_eq!(world.balls_left.value(), 3);
        assert_eq!(world.score.value(), 0);
        assert_eq!(world.status(), WorldStatus::Running);
    }

    #[test]
    fn test_level_is_deterministic_per_seed() {
        let config = Config::default();
        let a = World::new_level(&config, 42);
        let b = World::new_level(&config, 42);
        let c = World::new_level(&config, 43);
        for (x, y) in a.balls.iter().zip(b.balls.iter()) {
            assert_eq!(x.velocity, y.velocity);
        }
        // A different seed launches at least one ball differently
        assert!(
            a.balls
                .iter()
                .zip(c.balls.iter())
                .any(|(x, y)| x.velocity != y.velocity)
        );
    }

    #[test]
    fn test_bricks_fit_inside_arena() {
        let config = Config::default();
        let world = World::new_level(&config, 1);
        for (_, obstacle) in world.environment.iter() {
            let rect = obstacle.collision_rect();
            assert!(rect.upper_left.x >= 0.0);
            assert!(rect.upper_left.x + rect.width <= config.arena_width);
        }
    }

    #[test]
    fn test_remove_ball() {
        let mut world = World::empty();
        let id = world.spawn_ball(DVec2::new(0.0, 0.0), 5, 0).id;
        assert!(world.remove_ball(id));
        assert!(!world.remove_ball(id));
        assert!(world.balls.is_empty());
    }
}
