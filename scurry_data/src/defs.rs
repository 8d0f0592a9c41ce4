use serde::{Deserialize, Serialize};

/// Stable identifier used across MapDef references.
pub type AreaId = u32;

/// Top-level map data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapDef {
    pub game: GameDef,
    #[serde(default)]
    pub areas: Vec<AreaDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    pub start_area: AreaId,
    pub end_area: AreaId,
    pub start_message: String,
    pub death_message: String,
}

/// Area definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDef {
    pub id: AreaId,
    pub description: String,
    #[serde(default)]
    pub initial_threat: u32,
    #[serde(default)]
    pub item: ItemKind,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// A directed exit from one area to another.
///
/// Exits are one-way; a return path must be declared on the destination area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: AreaId,
}

/// The closed set of item kinds a map may place and a player may carry.
///
/// An area's ground holds at most one of these; so does the player's pack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    #[default]
    None,
    BaseballBat,
    MedKit,
    BusKey,
}

impl ItemKind {
    /// Player-facing description, defined for every kind including `None`.
    pub fn description(&self) -> &'static str {
        match self {
            ItemKind::None => "nothing of interest",
            ItemKind::BaseballBat => "a dinged-up aluminum baseball bat",
            ItemKind::MedKit => "a pocket first aid kit",
            ItemKind::BusKey => "a key to the campus shuttle bus",
        }
    }
}
