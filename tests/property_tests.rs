//! Property-based tests for state graphs and the difficulty controller.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use midway::builder::StateGraphBuilder;
use midway::core::{Behavior, Trigger};
use midway::difficulty::{DifficultyConfig, DifficultyController};
use midway::graph::{StateGraph, Transition};
use midway::{state_enum, trigger_enum};
use proptest::prelude::*;

state_enum! {
    enum Companion {
        Idle,
        Fetch,
        Return,
        Sit,
    }
}

trigger_enum! {
    enum Cue {
        Thrown,
        Grabbed,
        Delivered,
        Recall,
        Wave,
    }
}

/// Counts enter/exit calls so activation pairing can be checked.
#[derive(Default)]
struct Activations {
    enters: usize,
    exits: usize,
}

struct Counted(Companion);

impl Behavior<Companion, Cue, Activations> for Counted {
    fn id(&self) -> Companion {
        self.0.clone()
    }

    fn enter(&mut self, ctx: &mut Activations) {
        ctx.enters += 1;
    }

    fn exit(&mut self, ctx: &mut Activations) {
        ctx.exits += 1;
    }
}

/// `Wave` is declared but has no transition, `Recall` is a wildcard.
fn companion(ctx: &mut Activations) -> StateGraph<Companion, Cue, Activations> {
    StateGraphBuilder::new()
        .state(Counted(Companion::Idle))
        .state(Counted(Companion::Fetch))
        .state(Counted(Companion::Return))
        .state(Counted(Companion::Sit))
        .add_transition(Transition::new(Cue::Thrown, Companion::Idle, Companion::Fetch))
        .add_transition(Transition::new(Cue::Grabbed, Companion::Fetch, Companion::Return))
        .add_transition(Transition::new(Cue::Delivered, Companion::Return, Companion::Sit))
        .add_transition(Transition::wildcard(Cue::Recall, Companion::Idle))
        .wire()
        .unwrap()
        .start(ctx)
}

prop_compose! {
    fn arbitrary_cue()(variant in 0..Cue::VARIANTS.len()) -> Cue {
        Cue::VARIANTS[variant].clone()
    }
}

#[derive(Clone, Debug)]
enum Signal {
    Start,
    Miss,
    Score,
}

prop_compose! {
    fn arbitrary_signal()(variant in 0..3u8) -> Signal {
        match variant {
            0 => Signal::Start,
            1 => Signal::Miss,
            _ => Signal::Score,
        }
    }
}

proptest! {
    #[test]
    fn unmatched_requests_leave_state_unchanged(cues in prop::collection::vec(arbitrary_cue(), 0..30)) {
        let mut ctx = Activations::default();
        let mut graph = companion(&mut ctx);

        for cue in &cues {
            let before = graph.current_state().clone();
            let possible = graph.can_fire(cue);
            let result = graph.request_transition(cue, &mut ctx).map(|s| s.clone());

            prop_assert_eq!(result.is_ok(), possible);
            if !possible {
                prop_assert_eq!(graph.current_state(), &before);
            }
        }
    }

    #[test]
    fn wildcard_fires_from_any_state(cues in prop::collection::vec(arbitrary_cue(), 0..20)) {
        let mut ctx = Activations::default();
        let mut graph = companion(&mut ctx);

        for cue in &cues {
            let _ = graph.request_transition(cue, &mut ctx);
        }

        prop_assert!(graph.request_transition(&Cue::Recall, &mut ctx).is_ok());
        prop_assert_eq!(graph.current_state(), &Companion::Idle);
    }

    #[test]
    fn enter_and_exit_stay_paired(cues in prop::collection::vec(arbitrary_cue(), 0..30)) {
        let mut ctx = Activations::default();
        let mut graph = companion(&mut ctx);

        for cue in &cues {
            let _ = graph.request_transition(cue, &mut ctx);
            prop_assert_eq!(ctx.enters, ctx.exits + 1);
        }
        prop_assert_eq!(graph.history().len(), ctx.exits);
    }

    #[test]
    fn names_resolve_regardless_of_case_and_padding(
        cue in arbitrary_cue(),
        upper in any::<bool>(),
        left in 0..3usize,
        right in 0..3usize,
    ) {
        let name = if upper { cue.name().to_uppercase() } else { cue.name().to_lowercase() };
        let padded = format!("{}{}{}", " ".repeat(left), name, "\t".repeat(right));

        prop_assert_eq!(Cue::parse(&padded), Some(cue));
    }

    #[test]
    fn counters_and_precision_stay_in_range(
        signals in prop::collection::vec(arbitrary_signal(), 0..60),
        counter_threshold in 1..5u32,
        consecutive_miss_limit in 1..6u32,
    ) {
        let mut controller = DifficultyController::builder("archery")
            .config(DifficultyConfig {
                counter_threshold,
                consecutive_miss_limit,
                ..DifficultyConfig::default()
            })
            .build()
            .unwrap();

        for signal in &signals {
            match signal {
                Signal::Start => {
                    controller.start_task();
                }
                Signal::Miss => {
                    controller.record_miss();
                    prop_assert!(controller.task().attempts() < consecutive_miss_limit);
                }
                Signal::Score => {
                    let attempts = controller.task().attempts() + 1;
                    controller.record_score();
                    let sample = controller.history().samples().last().copied().unwrap();
                    prop_assert_eq!(sample.precision, 1.0 / f64::from(attempts));
                    prop_assert!(sample.precision > 0.0 && sample.precision <= 1.0);
                    prop_assert_eq!(controller.task().attempts(), 0);
                }
            }

            let counters = controller.counters();
            prop_assert!(counters.excel() < counter_threshold);
            prop_assert!(counters.struggle() < counter_threshold);
        }
    }

    #[test]
    fn summary_exists_iff_a_task_was_scored(
        signals in prop::collection::vec(arbitrary_signal(), 0..30),
    ) {
        let mut controller = DifficultyController::builder("frisbee").build().unwrap();

        for signal in &signals {
            match signal {
                Signal::Start => {
                    controller.start_task();
                }
                Signal::Miss => {
                    controller.record_miss();
                }
                Signal::Score => {
                    controller.record_score();
                }
            }
        }

        let scored = signals.iter().filter(|s| matches!(s, Signal::Score)).count();
        let summary = controller.on_session_goal_reached();
        prop_assert_eq!(summary.is_some(), scored > 0);
        if let Some(summary) = summary {
            prop_assert_eq!(summary.task_count, scored);
            prop_assert!(summary.average_precision > 0.0 && summary.average_precision <= 1.0);
            prop_assert!(summary.average_elapsed_time >= 0.0);
        }
    }
}
