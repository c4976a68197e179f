//! Block Break entry point
//!
//! Runs the simulation headless at a fixed frame rate with a simple
//! ball-tracking autopilot on the paddle, logging the outcome. Rendering
//! plugs in above this layer; the core never draws.

use std::path::Path;
use std::time::{Duration, Instant};

use blockbreak::Config;
use blockbreak::consts::CLEAR_BONUS;
use blockbreak::sim::{
    BallRemover, BlockRemover, HitListener, ScoreTracker, TickInput, World, WorldStatus, tick,
};

/// Steer the paddle toward the ball nearest the paddle row
fn autopilot(world: &mut World) -> TickInput {
    let Some(paddle) = world.environment.paddle_mut() else {
        return TickInput::default();
    };
    let rect = paddle.rect();
    let paddle_center = rect.upper_left.x + rect.width / 2.0;
    let target = world
        .balls
        .iter()
        .max_by(|a, b| a.center.y.total_cmp(&b.center.y))
        .map(|ball| ball.center.x);
    match target {
        Some(x) if x < paddle_center - rect.width / 4.0 => TickInput {
            left: true,
            right: false,
        },
        Some(x) if x > paddle_center + rect.width / 4.0 => TickInput {
            left: false,
            right: true,
        },
        _ => TickInput::default(),
    }
}

fn main() {
    env_logger::init();

    let config = Config::load(Path::new("blockbreak.json"));
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);

    let mut world = World::new_level(&config, seed);
    let mut listeners: Vec<Box<dyn HitListener>> = vec![
        Box::new(BlockRemover),
        Box::new(ScoreTracker),
        Box::new(BallRemover),
    ];

    log::info!("starting run, seed {seed}");
    let frame = Duration::from_millis(1000 / u64::from(config.frames_per_second.max(1)));
    loop {
        let start = Instant::now();
        let input = autopilot(&mut world);
        match tick(&mut world, &mut listeners, input) {
            WorldStatus::Running => {}
            WorldStatus::Cleared => {
                world.score.increase(CLEAR_BONUS);
                log::info!("wall cleared, final score {}", world.score.value());
                break;
            }
            WorldStatus::OutOfBalls => {
                log::info!("all balls lost, final score {}", world.score.value());
                break;
            }
        }
        if let Some(left) = frame.checked_sub(start.elapsed()) {
            std::thread::sleep(left);
        }
    }
}
