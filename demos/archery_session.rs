//! Archery Session with Adaptive Difficulty
//!
//! Simulates a short archery round. Each target is a task: misses count
//! against the player, a hit records precision from the number of attempts.
//!
//! Key concepts:
//! - Supplying minigame ports to the controller
//! - Hysteresis: difficulty only moves after repeated evidence
//! - Checkpointing mid-session and resuming
//!
//! Run with: cargo run --example archery_session

use midway::difficulty::{
    DifficultyConfig, DifficultyController, DifficultyError, DifficultyFeedback, GameManager,
    SessionId, SessionStore, SessionSummary,
};

/// Target radius shrinks as difficulty rises.
struct Range {
    target_radius: f32,
}

impl GameManager for Range {
    fn increase_difficulty(&mut self) {
        self.target_radius = (self.target_radius * 0.8).max(0.2);
        println!("    range: target shrinks to {:.2}m", self.target_radius);
    }

    fn decrease_difficulty(&mut self) {
        self.target_radius = (self.target_radius * 1.25).min(2.0);
        println!("    range: target grows to {:.2}m", self.target_radius);
    }

    fn session_goal_reached(&mut self) {
        println!("    range: round over, lowering the bow");
    }
}

struct Scoreboard;

impl SessionStore for Scoreboard {
    fn save_session_data(&mut self, summary: &SessionSummary, session_id: &SessionId, minigame: &str) {
        println!(
            "    saved {minigame} session {session_id}: {} targets, precision {:.2}, {:.1}s avg",
            summary.task_count, summary.average_precision, summary.average_elapsed_time
        );
    }
}

struct Banner;

impl DifficultyFeedback for Banner {
    fn notify_difficulty_changed(&mut self, is_increase: bool) {
        if is_increase {
            println!("    banner: \"Nice shooting! Harder targets ahead.\"");
        } else {
            println!("    banner: \"Let's make it a bit easier.\"");
        }
    }
}

/// Misses before the hit, per target.
const ROUND: [u32; 9] = [0, 0, 0, 0, 0, 0, 4, 2, 3];

fn main() -> Result<(), DifficultyError> {
    println!("=== Archery Session ===\n");

    let config = DifficultyConfig {
        counter_threshold: 2,
        ..DifficultyConfig::default()
    };

    let mut controller = DifficultyController::builder("archery")
        .config(config)
        .game_manager(Range { target_radius: 1.0 })
        .session_store(Scoreboard)
        .feedback(Banner)
        .build()?;

    let (first, rest) = ROUND.split_at(5);
    for (index, misses) in first.iter().enumerate() {
        shoot(&mut controller, index + 1, *misses);
    }

    println!("\nScene reload, resuming from checkpoint");
    let checkpoint = controller.checkpoint();
    let mut controller = DifficultyController::builder("archery")
        .game_manager(Range { target_radius: 0.64 })
        .session_store(Scoreboard)
        .feedback(Banner)
        .resume(checkpoint)
        .build()?;

    for (index, misses) in rest.iter().enumerate() {
        shoot(&mut controller, first.len() + index + 1, *misses);
    }

    let stats = controller.stats();
    println!(
        "\nAdjustments: {} up, {} down ({} forced by misses)",
        stats.increases, stats.decreases, stats.forced_decreases
    );

    println!("\nSession goal reached");
    if controller.on_session_goal_reached().is_none() {
        println!("    nothing to save");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

fn shoot(controller: &mut DifficultyController, target: usize, misses: u32) {
    println!("Target {target}");
    controller.start_task();
    for _ in 0..misses {
        println!("  miss");
        if let Some(change) = controller.record_miss() {
            println!("  -> difficulty {change:?} after too many misses");
        }
    }
    let change = controller.record_score();
    let precision = controller
        .history()
        .samples()
        .last()
        .map_or(0.0, |s| s.precision);
    println!("  hit, precision {precision:.2}");
    if let Some(change) = change {
        println!("  -> difficulty {change:?}");
    }
}
