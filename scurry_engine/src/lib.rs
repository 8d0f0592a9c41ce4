#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SCURRY_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod hazard;
pub mod loader;
pub mod map;
pub mod repl;
pub mod session;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use command::{Command, PlayerInput, parse_command, parse_player_input};
pub use hazard::{HazardDice, RandomDice};
pub use loader::load_map;
pub use map::{Area, MapLayout};
pub use repl::{TurnStatus, run_repl, take_turn};
pub use session::Session;
pub use view::{View, ViewItem};
