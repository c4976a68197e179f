//! Obstacles: the collidable capability and the block implementation

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

use super::paddle::Paddle;
use super::velocity::Velocity;

/// Stable handle for an obstacle registered in the environment
pub type ObstacleId = u32;

/// Self-identification for hit bookkeeping and the paddle special case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Destructible brick in the wall
    Brick,
    /// Indestructible arena boundary
    Wall,
    /// Bottom boundary; balls that reach it are removed from play
    Gutter,
    Paddle,
}

/// Capability every obstacle implements to take part in collision resolution
pub trait Collidable {
    /// Axis-aligned collision shape
    fn collision_rect(&self) -> Rect;

    /// Outgoing velocity for a contact at `at` arriving with `incoming`.
    /// Pure: obstacle state never changes here, removal and scoring run
    /// through the hit-event path after the tick's scans complete.
    fn hit(&self, at: DVec2, incoming: Velocity) -> Velocity;

    fn kind(&self) -> ObstacleKind;
}

/// A static rectangular obstacle: brick, boundary wall, or gutter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub kind: ObstacleKind,
    /// Palette index; a brick recolors the ball that destroys it
    pub color: u32,
}

impl Block {
    pub fn new(rect: Rect, kind: ObstacleKind, color: u32) -> Self {
        Self { rect, kind, color }
    }
}

impl Collidable for Block {
    fn collision_rect(&self) -> Rect {
        self.rect
    }

    /// Mirror reflection: contact on the left/right edge negates dx, on the
    /// top/bottom edge negates dy, and a corner contact (on two edges at
    /// once) negates both.
    fn hit(&self, at: DVec2, incoming: Velocity) -> Velocity {
        let mut v = incoming;
        if self.rect.left().contains_point(at) || self.rect.right().contains_point(at) {
            v = Velocity::new(-v.dx, v.dy);
        }
        if self.rect.top().contains_point(at) || self.rect.bottom().contains_point(at) {
            v = Velocity::new(v.dx, -v.dy);
        }
        v
    }

    fn kind(&self) -> ObstacleKind {
        self.kind
    }
}

/// Closed set of obstacle variants, dispatched through [`Collidable`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Obstacle {
    Block(Block),
    Paddle(Paddle),
}

impl Collidable for Obstacle {
    fn collision_rect(&self) -> Rect {
        match self {
            Obstacle::Block(b) => b.collision_rect(),
            Obstacle::Paddle(p) => p.collision_rect(),
        }
    }

    fn hit(&self, at: DVec2, incoming: Velocity) -> Velocity {
        match self {
            Obstacle::Block(b) => b.hit(at, incoming),
            Obstacle::Paddle(p) => p.hit(at, incoming),
        }
    }

    fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Block(b) => b.kind(),
            Obstacle::Paddle(p) => p.kind(),
        }
    }
}
