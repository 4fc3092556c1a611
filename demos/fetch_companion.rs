//! Fetch-and-Return Companion
//!
//! A dog waits by the player, chases a thrown disc, and brings it back.
//!
//! Key concepts:
//! - Behaviors that resolve their exit triggers while wiring
//! - Behaviors asking the owning loop for transitions through the context
//! - A wildcard recall that works from any state
//!
//! Run with: cargo run --example fetch_companion

use midway::builder::{BuildError, StateGraphBuilder, Wiring};
use midway::core::{Behavior, State};
use midway::graph::Transition;
use midway::{state_enum, trigger_enum};

state_enum! {
    enum Dog {
        Idle,
        Fetch,
        Return,
    }
}

trigger_enum! {
    enum Cue {
        Thrown,
        Grabbed,
        Delivered,
        Recall,
    }
}

/// Shared world the behaviors act on.
struct Field {
    player: f32,
    dog: f32,
    disc: Option<f32>,
    carrying: bool,
    request: Option<Cue>,
}

const SPEED: f32 = 1.5;

fn approach(from: f32, to: f32) -> f32 {
    if (to - from).abs() <= SPEED {
        to
    } else {
        from + SPEED * (to - from).signum()
    }
}

struct Idle;

impl Behavior<Dog, Cue, Field> for Idle {
    fn id(&self) -> Dog {
        Dog::Idle
    }

    fn enter(&mut self, field: &mut Field) {
        println!("  [idle] sitting at {:.1}", field.dog);
    }
}

struct Fetch {
    grabbed: Option<Cue>,
}

impl Behavior<Dog, Cue, Field> for Fetch {
    fn id(&self) -> Dog {
        Dog::Fetch
    }

    fn wire(&mut self, wiring: &Wiring<'_, Dog, Cue>) -> Result<(), BuildError> {
        wiring.require(&Dog::Return)?;
        self.grabbed = Some(wiring.resolve("grabbed")?);
        Ok(())
    }

    fn execute(&mut self, field: &mut Field) {
        let Some(disc) = field.disc else {
            return;
        };
        field.dog = approach(field.dog, disc);
        println!("  [fetch] running, dog at {:.1}", field.dog);
        if field.dog == disc {
            field.disc = None;
            field.carrying = true;
            field.request = self.grabbed.clone();
        }
    }
}

struct Return {
    delivered: Option<Cue>,
}

impl Behavior<Dog, Cue, Field> for Return {
    fn id(&self) -> Dog {
        Dog::Return
    }

    fn wire(&mut self, wiring: &Wiring<'_, Dog, Cue>) -> Result<(), BuildError> {
        self.delivered = Some(wiring.resolve("Delivered")?);
        Ok(())
    }

    fn execute(&mut self, field: &mut Field) {
        field.dog = approach(field.dog, field.player);
        println!("  [return] trotting back, dog at {:.1}", field.dog);
        if field.dog == field.player {
            field.request = self.delivered.clone();
        }
    }

    fn exit(&mut self, field: &mut Field) {
        if field.carrying {
            println!("  [return] disc dropped at the player's feet");
            field.carrying = false;
        }
    }
}

fn main() -> Result<(), BuildError> {
    println!("=== Fetch-and-Return Companion ===\n");

    let mut field = Field {
        player: 0.0,
        dog: 0.0,
        disc: None,
        carrying: false,
        request: None,
    };

    let mut dog = StateGraphBuilder::new()
        .state(Idle)
        .state(Fetch { grabbed: None })
        .state(Return { delivered: None })
        .add_transition(Transition::new(Cue::Thrown, Dog::Idle, Dog::Fetch))
        .add_transition(Transition::new(Cue::Grabbed, Dog::Fetch, Dog::Return))
        .add_transition(Transition::new(Cue::Delivered, Dog::Return, Dog::Idle))
        .add_transition(Transition::wildcard(Cue::Recall, Dog::Idle))
        .wire()?
        .start(&mut field);

    println!("Player throws the disc to 6.0");
    field.disc = Some(6.0);
    if let Err(err) = dog.request_transition_named("thrown", &mut field) {
        println!("  unexpected: {err}");
    }

    for _ in 0..20 {
        dog.tick(&mut field);
        if let Some(cue) = field.request.take() {
            if let Ok(state) = dog.request_transition(&cue, &mut field) {
                println!("  -> {}", state.name());
            }
        }
        if dog.current_state() == &Dog::Idle {
            break;
        }
    }

    println!("\nA second throw, recalled halfway");
    field.disc = Some(-9.0);
    let _ = dog.request_transition(&Cue::Thrown, &mut field);
    dog.tick(&mut field);
    dog.tick(&mut field);
    let _ = dog.request_transition(&Cue::Recall, &mut field);
    println!("  after recall: {}", dog.current_state().name());

    println!("\nAsking to deliver while idle is ignored:");
    if let Err(err) = dog.request_transition(&Cue::Delivered, &mut field) {
        println!("  {err}");
    }

    let path: Vec<&str> = dog.history().get_path().iter().map(|s| s.name()).collect();
    println!("\nPath: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
