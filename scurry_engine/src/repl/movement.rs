//! `repl::movement` module
//!
//! Contains the handler for the `go` command.

use anyhow::Result;
use log::info;

use crate::map::MapLayout;
use crate::session::Session;
use crate::view::{View, ViewItem};

/// Move the player along one of the current area's exits.
///
/// Directions resolve case-sensitively against the area's adjacency map. An
/// unknown direction is a normal narrative outcome, not an error: the player
/// stays put and the turn continues.
///
/// # Errors
/// - if the current area id does not resolve
pub fn go_handler(session: &mut Session, map: &MapLayout, view: &mut View, direction: &str) -> Result<()> {
    let current = map.area(session.current_area_id)?;
    if let Some(destination) = current.resolve_direction(direction) {
        session.current_area_id = destination;
        session.has_moved = true;
        info!("player moved {direction} from area {} to area {destination}", current.id);
        view.push(ViewItem::Moved);
    } else {
        session.has_moved = false;
        info!("player tried invalid direction '{direction}' in area {}", current.id);
        view.push(ViewItem::BlockedDirection(direction.to_string()));
    }
    Ok(())
}
