//! One simulation tick: paddle input, ball stepping, deferred hit handling

use super::events::{HitEvent, HitListener};
use super::obstacle::{Collidable, Obstacle, ObstacleKind};
use super::world::{World, WorldStatus};

/// Player input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the world by one tick.
///
/// Each ball's full move-and-collide resolution completes before the next
/// ball is processed, and the obstacle registry stays untouched until every
/// scan is done: strikes are recorded as events and handed to the listeners
/// afterwards, over the drained queue.
pub fn tick(world: &mut World, listeners: &mut [Box<dyn HitListener>], input: TickInput) -> WorldStatus {
    if input.left {
        if let Some(paddle) = world.environment.paddle_mut() {
            paddle.move_left();
        }
    }
    if input.right {
        if let Some(paddle) = world.environment.paddle_mut() {
            paddle.move_right();
        }
    }

    let mut events: Vec<HitEvent> = Vec::new();
    let env = &world.environment;
    for ball in &mut world.balls {
        let Some(collision) = ball.step(env) else {
            continue;
        };
        let Some(obstacle) = env.obstacle(collision.obstacle) else {
            continue;
        };
        let kind = obstacle.kind();
        // Paddle strikes steer the ball but are not bookkept
        if kind == ObstacleKind::Paddle {
            continue;
        }
        // Color-match immunity: a ball bounces off a block of its own color
        // without triggering removal or scoring
        if let Obstacle::Block(block) = obstacle {
            if block.color == ball.color {
                continue;
            }
        }
        events.push(HitEvent {
            obstacle: collision.obstacle,
            kind,
            ball: ball.id,
        });
    }

    for event in events {
        for listener in listeners.iter_mut() {
            listener.hit_event(world, &event);
        }
    }

    world.status()
}
