//! Hit bookkeeping: counters, events, and the listeners that consume them
//!
//! Obstacle hit responses are pure. Removal and scoring run here instead,
//! after every ball has finished its step, over a drained snapshot of the
//! tick's event queue. The registry is therefore never mutated while a
//! collision scan over it is in progress.

use serde::{Deserialize, Serialize};

use crate::consts::BRICK_SCORE;

use super::ball::BallId;
use super::obstacle::{Obstacle, ObstacleId, ObstacleKind};
use super::world::World;

/// Simple counter for remaining blocks, remaining balls, and the score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter(i64);

impl Counter {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn increase(&mut self, amount: i64) {
        self.0 += amount;
    }

    pub fn decrease(&mut self, amount: i64) {
        self.0 -= amount;
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// One obstacle strike, recorded while the tick's collision scans run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    pub obstacle: ObstacleId,
    pub kind: ObstacleKind,
    pub ball: BallId,
}

/// Observer notified after an obstacle is struck. Listeners run once the
/// tick's scans are complete and are free to mutate the world.
pub trait HitListener {
    fn hit_event(&mut self, world: &mut World, event: &HitEvent);
}

/// Removes destroyed bricks and keeps the brick count current. The
/// destroying ball takes the brick's color.
#[derive(Debug, Default)]
pub struct BlockRemover;

impl HitListener for BlockRemover {
    fn hit_event(&mut self, world: &mut World, event: &HitEvent) {
        if event.kind != ObstacleKind::Brick {
            return;
        }
        let Some(Obstacle::Block(brick)) = world.environment.remove_obstacle(event.obstacle)
        else {
            return;
        };
        if let Some(ball) = world.ball_mut(event.ball) {
            ball.color = brick.color;
        }
        world.blocks_left.decrease(1);
        log::debug!("brick {} destroyed, {} left", event.obstacle, world.blocks_left.value());
    }
}

/// Removes balls that reach the bottom gutter
#[derive(Debug, Default)]
pub struct BallRemover;

impl HitListener for BallRemover {
    fn hit_event(&mut self, world: &mut World, event: &HitEvent) {
        if event.kind != ObstacleKind::Gutter {
            return;
        }
        if world.remove_ball(event.ball) {
            world.balls_left.decrease(1);
            log::debug!("ball {} lost, {} left", event.ball, world.balls_left.value());
        }
    }
}

/// Awards points for every destroyed brick
#[derive(Debug, Default)]
pub struct ScoreTracker;

impl HitListener for ScoreTracker {
    fn hit_event(&mut self, world: &mut World, event: &HitEvent) {
        if event.kind == ObstacleKind::Brick {
            world.score.increase(BRICK_SCORE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_arithmetic() {
        let mut c = Counter::new(3);
        c.increase(5);
        c.decrease(2);
        assert_eq!(c.value(), 6);
        // Counters may legitimately pass through zero
        c.decrease(10);
        assert_eq!(c.value(), -4);
    }
}
