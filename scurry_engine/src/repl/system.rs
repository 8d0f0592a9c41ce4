//! `repl::system` module
//!
//! Contains handlers for commands that are system utilities rather than
//! in-world actions.

use log::info;

use crate::repl::ReplControl;
use crate::session::Session;
use crate::view::{View, ViewItem};

/// Quit the game.
///
/// Returns the terminal signal up to the run loop, which stops without the
/// usual end-of-turn refresh, termination check, or win/death display.
pub fn quit_handler(session: &Session, view: &mut View) -> ReplControl {
    info!(
        "player quit in area {} with injury {} and threat {}",
        session.current_area_id, session.injury_level, session.threat_level
    );
    view.push(ViewItem::Farewell);
    ReplControl::Quit
}
