//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable obstacle and ball ordering
//! - No rendering or platform dependencies

pub mod ball;
pub mod environment;
pub mod events;
pub mod obstacle;
pub mod paddle;
pub mod tick;
pub mod velocity;
pub mod world;

pub use ball::{Ball, BallId};
pub use environment::{Collision, Environment};
pub use events::{BallRemover, BlockRemover, Counter, HitEvent, HitListener, ScoreTracker};
pub use obstacle::{Block, Collidable, Obstacle, ObstacleId, ObstacleKind};
pub use paddle::Paddle;
pub use tick::{TickInput, tick};
pub use velocity::Velocity;
pub use world::{World, WorldStatus};
