//! Runtime map model built from a validated [`MapDef`].
//!
//! [`MapLayout`] is immutable once built; the engine reads areas, exits, and
//! global messages from it but never mutates it.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use log::info;
use scurry_data::{AreaId, ItemKind, MapDef};

/// A node in the map graph: description, starting threat, ground item, and
/// directional exits.
#[derive(Debug, Clone)]
pub struct Area {
    pub id: AreaId,
    pub description: String,
    pub initial_threat: u32,
    pub item: ItemKind,
    exits: HashMap<String, AreaId>,
}

impl Area {
    /// Resolve a direction name to a destination area id.
    ///
    /// Direction names are matched case-sensitively against the area's
    /// adjacency map -- no normalization, no partial matching.
    pub fn resolve_direction(&self, name: &str) -> Option<AreaId> {
        self.exits.get(name).copied()
    }
}

/// Immutable read-only graph of areas plus global game metadata.
#[derive(Debug, Clone)]
pub struct MapLayout {
    areas: HashMap<AreaId, Area>,
    title: String,
    start_area: AreaId,
    end_area: AreaId,
    start_message: String,
    death_message: String,
}

impl MapLayout {
    /// Build the runtime layout from a map definition.
    ///
    /// Callers are expected to run `scurry_data::validate_map` first; this
    /// constructor trusts ids to be unique and exits to resolve.
    pub fn from_def(def: &MapDef) -> MapLayout {
        let mut areas = HashMap::new();
        for area_def in &def.areas {
            let exits = area_def
                .exits
                .iter()
                .map(|exit| (exit.direction.clone(), exit.to))
                .collect();
            areas.insert(
                area_def.id,
                Area {
                    id: area_def.id,
                    description: area_def.description.clone(),
                    initial_threat: area_def.initial_threat,
                    item: area_def.item,
                    exits,
                },
            );
        }
        info!("map layout '{}' built with {} areas", def.game.title, areas.len());
        MapLayout {
            areas,
            title: def.game.title.clone(),
            start_area: def.game.start_area,
            end_area: def.game.end_area,
            start_message: def.game.start_message.clone(),
            death_message: def.game.death_message.clone(),
        }
    }

    /// Look up an area by id.
    ///
    /// # Errors
    /// An unknown id means the session and the map have desynchronized --
    /// a broken engine invariant, reported loudly rather than tolerated.
    pub fn area(&self, id: AreaId) -> Result<&Area> {
        self.areas
            .get(&id)
            .ok_or_else(|| anyhow!("area id {id} not found in map layout '{}'", self.title))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_area_id(&self) -> AreaId {
        self.start_area
    }

    pub fn end_area_id(&self) -> AreaId {
        self.end_area
    }

    pub fn start_message(&self) -> &str {
        &self.start_message
    }

    pub fn death_message(&self) -> &str {
        &self.death_message
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }
}
