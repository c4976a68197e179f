//! The obstacle registry and the closest-collision search

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Segment;

use super::obstacle::{Collidable, Obstacle, ObstacleId};
use super::paddle::Paddle;

/// A resolved collision: where, and against which obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub point: DVec2,
    pub obstacle: ObstacleId,
}

/// Insertion-ordered registry of every obstacle in play.
///
/// Registration order carries no meaning for collision selection, which is
/// purely by distance, except as the tie-break: exactly equidistant hits
/// resolve to the first-registered obstacle.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Environment {
    entries: Vec<(ObstacleId, Obstacle)>,
    next_id: ObstacleId,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, obstacle));
        id
    }

    /// Remove by id, preserving the relative order of the rest
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let pos = self.entries.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, o)| o)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.entries.iter().map(|(id, o)| (*id, o))
    }

    /// The registered paddle, if any (for keyboard-driven movement)
    pub fn paddle_mut(&mut self) -> Option<&mut Paddle> {
        self.entries.iter_mut().find_map(|(_, o)| match o {
            Obstacle::Paddle(p) => Some(p),
            _ => None,
        })
    }

    /// The first obstacle a mover travelling along `trajectory` would reach.
    ///
    /// Every obstacle's collision rectangle is tested; the hit with the
    /// smallest distance from the trajectory start wins. The comparison is
    /// strict, so exact ties keep the earliest-registered obstacle.
    pub fn closest_collision(&self, trajectory: &Segment) -> Option<Collision> {
        let mut closest: Option<(f64, Collision)> = None;
        for (id, obstacle) in &self.entries {
            let rect = obstacle.collision_rect();
            let Some(point) = trajectory.closest_intersection_to_start(&rect) else {
                continue;
            };
            let distance = point.distance(trajectory.start);
            if closest.is_none_or(|(d, _)| distance < d) {
                closest = Some((
                    distance,
                    Collision {
                        point,
                        obstacle: *id,
                    },
                ));
            }
        }
        closest.map(|(_, c)| c)
    }
}
