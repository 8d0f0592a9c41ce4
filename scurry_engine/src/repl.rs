//! REPL and turn sequencing.
//!
//! The game runs in a read-eval-print loop. Each turn: situation display,
//! one line of input, parse, hazard roll, command dispatch, area refresh,
//! termination check. This module and its submodules implement the loop and
//! the per-command handlers that manipulate the [`Session`].

mod input;
pub mod item;
pub mod movement;
pub mod system;

pub use item::{take_handler, use_handler};
pub use movement::go_handler;
pub use system::quit_handler;

use anyhow::Result;
use log::info;

use crate::command::{Command, parse_command, parse_player_input};
use crate::hazard::{HazardDice, RandomDice, resolve_hazard};
use crate::map::MapLayout;
use crate::session::Session;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// How a turn left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Ongoing,
    Won,
    Dead,
    /// Player asked out; skips the end-of-turn refresh, termination check,
    /// and game-over display entirely.
    Quit,
}

/// Run one full turn against a line of player input.
///
/// Sequence: parse, hazard roll, dispatch, area refresh, termination check.
/// The hazard roll lands before dispatch, so even a quitting player takes one
/// last swipe from the squirrels -- and a med kit used this turn can undo a
/// roll that would otherwise have been lethal.
///
/// # Errors
/// - if the session's area id stops resolving (map/engine desynchronization)
pub fn take_turn(
    session: &mut Session,
    map: &MapLayout,
    raw_input: &str,
    dice: &mut dyn HazardDice,
    view: &mut View,
) -> Result<TurnStatus> {
    let input = parse_player_input(raw_input);
    let command = parse_command(&input);

    resolve_hazard(session, dice, view);

    match command {
        Command::Quit => {
            if let ReplControl::Quit = quit_handler(session, view) {
                return Ok(TurnStatus::Quit);
            }
        },
        Command::Go(direction) => go_handler(session, map, view, &direction)?,
        Command::TakeOrDrop => take_handler(session, map, view)?,
        Command::Use => use_handler(session, view),
        Command::Unknown(command) => view.push(ViewItem::UnknownCommand(command)),
    }

    refresh_area(session, map)?;

    if session.is_at_end(map) {
        let end = map.area(map.end_area_id())?;
        info!("player reached the end area with injury {}", session.injury_level);
        view.push(ViewItem::Victory(end.description.clone()));
        Ok(TurnStatus::Won)
    } else if session.is_dead() {
        info!("player died with threat level {}", session.threat_level);
        view.push(ViewItem::Death(map.death_message().to_string()));
        Ok(TurnStatus::Dead)
    } else {
        Ok(TurnStatus::Ongoing)
    }
}

/// Re-derive area-dependent state after dispatch.
///
/// A move replaces the threat level and ground item with the new area's
/// initial values (wiping any bat work); staying put lets the threat climb
/// by one. There is no upper bound on threat.
fn refresh_area(session: &mut Session, map: &MapLayout) -> Result<()> {
    if session.has_moved {
        let area = map.area(session.current_area_id)?;
        session.threat_level = area.initial_threat;
        session.item_on_ground = area.item;
    } else {
        session.threat_level += 1;
    }
    Ok(())
}

/// Run the main read-eval-print loop until the game ends or the user quits.
///
/// # Errors
/// - Propagates failures from handlers, such as an unresolvable area id.
pub fn run_repl(map: &MapLayout) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();
    let mut dice = RandomDice::new();
    let mut session = Session::start(map)?;

    display_start_screen(map);
    if !wait_for_enter(&mut input_manager) {
        return Ok(());
    }

    let mut turn = 0u64;
    loop {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");

        let area = map.area(session.current_area_id)?;
        view.push(ViewItem::Situation {
            description: area.description.clone(),
            injury: session.injury_level,
            threat: session.threat_level,
            ground: session.item_on_ground,
            inventory: session.inventory_item,
        });
        view.flush();

        let prompt = "> ".prompt_style().to_string();
        let line = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => continue,
            Err(err) => {
                eprintln!("Failed to read input: {err}. Try again.");
                continue;
            },
        };

        let status = take_turn(&mut session, map, &line, &mut dice, &mut view)?;
        view.flush();

        match status {
            TurnStatus::Ongoing => {},
            TurnStatus::Won | TurnStatus::Dead | TurnStatus::Quit => break,
        }
    }
    Ok(())
}

/// Print the map's opening message and the command reference.
fn display_start_screen(map: &MapLayout) {
    println!("{}", map.title().banner_style());
    println!();
    println!("{}", map.start_message().area_style());
    println!();
    println!("PLAYER COMMANDS:");
    println!("exit, quit, take <item>, drop <item>, go <direction>, use <item>");
    println!();
}

/// Block until the player hits enter. Returns false on EOF.
fn wait_for_enter(input_manager: &mut InputManager) -> bool {
    println!("Press enter to start!");
    let prompt = "> ".prompt_style().to_string();
    !matches!(input_manager.read_line(&prompt), Ok(InputEvent::Eof) | Err(_))
}
