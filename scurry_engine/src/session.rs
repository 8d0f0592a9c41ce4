//! Session state for a single playthrough.
//!
//! All mutable player and environment state lives in one [`Session`] struct
//! owned by the turn loop. It is created once at startup, seeded from the
//! map's start area, and discarded when the run ends.

use anyhow::Result;
use log::info;
use scurry_data::{AreaId, ItemKind};

use crate::map::MapLayout;

/// Injury level at which the player dies and the game ends.
pub const DEATH_THRESHOLD: u32 = 3;

/// Amount the baseball bat reduces the current threat level.
pub const BAT_EFFECTIVENESS: u32 = 5;

/// Area ids anchoring the shuttle-bus shortcut.
pub const BUS_ENTRANCE: AreaId = 8;
pub const BUS_EXIT: AreaId = 15;

/// All mutable state for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Always resolves to exactly one area in the map layout.
    pub current_area_id: AreaId,
    pub inventory_item: ItemKind,
    /// Session-local mirror of the current area's ground item, refreshed
    /// only when the player moves.
    pub item_on_ground: ItemKind,
    pub threat_level: u32,
    pub injury_level: u32,
    /// Set by command dispatch, consumed by the area-refresh step.
    /// Unrecognized commands leave it untouched.
    pub has_moved: bool,
}

impl Session {
    /// Create the session for a fresh playthrough, seeded from the map's
    /// start area.
    ///
    /// # Errors
    /// - if the map's start area id does not resolve
    pub fn start(map: &MapLayout) -> Result<Session> {
        let start = map.area(map.start_area_id())?;
        info!(
            "session started in area {} (threat {}, ground item {:?})",
            start.id, start.initial_threat, start.item
        );
        Ok(Session {
            current_area_id: start.id,
            inventory_item: ItemKind::None,
            item_on_ground: start.item,
            threat_level: start.initial_threat,
            injury_level: 0,
            has_moved: false,
        })
    }

    /// Whether the player has reached the map's end area.
    pub fn is_at_end(&self, map: &MapLayout) -> bool {
        self.current_area_id == map.end_area_id()
    }

    /// Whether accumulated injuries have reached the death threshold.
    pub fn is_dead(&self) -> bool {
        self.injury_level >= DEATH_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scurry_data::{AreaDef, GameDef, MapDef};

    fn layout() -> MapLayout {
        MapLayout::from_def(&MapDef {
            game: GameDef {
                title: "Test".into(),
                start_area: 1,
                end_area: 2,
                start_message: String::new(),
                death_message: String::new(),
            },
            areas: vec![
                AreaDef {
                    id: 1,
                    description: "Start".into(),
                    initial_threat: 4,
                    item: ItemKind::BaseballBat,
                    exits: Vec::new(),
                },
                AreaDef {
                    id: 2,
                    description: "End".into(),
                    initial_threat: 0,
                    item: ItemKind::None,
                    exits: Vec::new(),
                },
            ],
        })
    }

    #[test]
    fn start_seeds_from_start_area() {
        let session = Session::start(&layout()).unwrap();
        assert_eq!(session.current_area_id, 1);
        assert_eq!(session.threat_level, 4);
        assert_eq!(session.item_on_ground, ItemKind::BaseballBat);
        assert_eq!(session.inventory_item, ItemKind::None);
        assert_eq!(session.injury_level, 0);
        assert!(!session.has_moved);
    }

    #[test]
    fn death_triggers_at_threshold_not_before() {
        let mut session = Session::start(&layout()).unwrap();
        session.injury_level = DEATH_THRESHOLD - 1;
        assert!(!session.is_dead());
        session.injury_level = DEATH_THRESHOLD;
        assert!(session.is_dead());
    }

    #[test]
    fn end_area_is_detected() {
        let map = layout();
        let mut session = Session::start(&map).unwrap();
        assert!(!session.is_at_end(&map));
        session.current_area_id = 2;
        assert!(session.is_at_end(&map));
    }
}
