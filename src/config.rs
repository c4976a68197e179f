//! Data-driven level tunables
//!
//! Defaults reproduce the classic 800x600 layout; a JSON file can override
//! any subset of fields. An unreadable or malformed file falls back to the
//! defaults with a log message rather than failing the run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f64,
    pub arena_height: f64,
    pub wall_thickness: f64,

    pub brick_width: f64,
    pub brick_height: f64,
    pub brick_rows: u32,
    pub brick_cols: u32,
    /// y coordinate of the top brick row
    pub brick_top: f64,

    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_y: f64,
    pub paddle_speed: f64,

    pub ball_radius: i32,
    pub ball_speed: f64,
    pub ball_count: u32,
    pub ball_spawn_x: f64,
    pub ball_spawn_y: f64,

    pub frames_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_top: BRICK_TOP,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_count: BALL_COUNT,
            ball_spawn_x: BALL_SPAWN_X,
            ball_spawn_y: BALL_SPAWN_Y,
            frames_per_second: FRAMES_PER_SECOND,
        }
    }
}

impl Config {
    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config: Config = serde_json::from_str(r#"{"ball_speed": 8.0}"#).unwrap();
        assert_eq!(config.ball_speed, 8.0);
        assert_eq!(config.arena_width, ARENA_WIDTH);
        assert_eq!(config.ball_count, BALL_COUNT);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/definitely/not/here.json"));
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
    }
}
