//! `repl::item` module
//!
//! Contains the handlers for the `take`/`drop` and `use` commands.

use anyhow::Result;
use log::info;

use scurry_data::ItemKind;

use crate::map::MapLayout;
use crate::session::{BAT_EFFECTIVENESS, BUS_ENTRANCE, BUS_EXIT, Session};
use crate::view::{View, ViewItem};

/// Handle `take` and `drop`.
///
/// Both commands are the same operation: the pack is overwritten with
/// whatever is on the current area's ground, even when that is nothing, and
/// the ground item is never cleared. There is no true "drop" -- items cannot
/// be put down, only replaced.
///
/// # Errors
/// - if the current area id does not resolve
pub fn take_handler(session: &mut Session, map: &MapLayout, view: &mut View) -> Result<()> {
    let ground = map.area(session.current_area_id)?.item;
    session.inventory_item = ground;
    if ground == ItemKind::None {
        view.push(ViewItem::NothingToPickUp);
    } else {
        info!("player picked up {ground:?} in area {}", session.current_area_id);
        view.push(ViewItem::PickedUp(ground));
    }
    session.has_moved = false;
    Ok(())
}

/// Handle `use`.
///
/// Resolves the held item's effect, then unconditionally empties the pack --
/// a fumbled use (wrong place, nothing held) still costs the item slot.
pub fn use_handler(session: &mut Session, view: &mut View) {
    match session.inventory_item {
        ItemKind::BusKey => {
            if session.current_area_id == BUS_ENTRANCE {
                session.current_area_id = BUS_EXIT;
                info!("player rode the bus from area {BUS_ENTRANCE} to area {BUS_EXIT}");
                view.push(ViewItem::BusRide);
            } else {
                view.push(ViewItem::NoUseHere);
            }
        },
        ItemKind::MedKit => {
            session.injury_level = 0;
            info!("player healed to injury 0");
            view.push(ViewItem::MedKitUsed);
        },
        ItemKind::BaseballBat => {
            session.threat_level = session.threat_level.saturating_sub(BAT_EFFECTIVENESS);
            info!("player swung the bat, threat now {}", session.threat_level);
            view.push(ViewItem::BatSwung);
        },
        ItemKind::None => view.push(ViewItem::EmptyPack),
    }
    session.inventory_item = ItemKind::None;
    session.has_moved = false;
}
