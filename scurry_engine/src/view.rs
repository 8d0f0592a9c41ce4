//! View module.
//!
//! Rather than printing to the console from each handler, handlers push
//! [`ViewItem`]s describing what happened and the [`View`] renders the whole
//! frame at the end of the turn.

use std::fmt::Write;

use scurry_data::ItemKind;
use textwrap::{fill, termwidth};

use crate::session::DEATH_THRESHOLD;
use crate::style::GameStyle;

/// Everything a turn may need to show the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    /// The start-of-turn report: where you are and how you're doing.
    Situation {
        description: String,
        injury: u32,
        threat: u32,
        ground: ItemKind,
        inventory: ItemKind,
    },
    SquirrelAttack,
    SquirrelsAvoided,
    Moved,
    BlockedDirection(String),
    PickedUp(ItemKind),
    NothingToPickUp,
    BusRide,
    NoUseHere,
    MedKitUsed,
    BatSwung,
    EmptyPack,
    UnknownCommand(String),
    Victory(String),
    Death(String),
    Farewell,
}

impl ViewItem {
    /// Render this item as one styled block of output.
    pub fn render(&self, width: usize) -> String {
        match self {
            ViewItem::Situation {
                description,
                injury,
                threat,
                ground,
                inventory,
            } => {
                let mut block = String::new();
                let _ = writeln!(block, "{}", fill(description, width).area_style());
                let _ = writeln!(
                    block,
                    "Current Injury Sustained: {} (death at {DEATH_THRESHOLD})",
                    injury.to_string().stat_style()
                );
                let _ = writeln!(block, "Threat Level: {}", threat.to_string().stat_style());
                let _ = writeln!(block, "Item on ground: {}", ground.description().item_style());
                let _ = write!(block, "Inventory: {}", inventory.description().item_style());
                block
            },
            ViewItem::SquirrelAttack => "You get mauled by a squirrel!".hazard_style().to_string(),
            ViewItem::SquirrelsAvoided => {
                "You managed to avoid the squirrels, for now.".relief_style().to_string()
            },
            ViewItem::Moved => "You successfully moved to a new area!".to_string(),
            ViewItem::BlockedDirection(direction) => format!(
                "There's no way {} from here -- you run into a squirrel roadblock!",
                direction.error_style()
            ),
            ViewItem::PickedUp(kind) => {
                format!("You pick up {}.", kind.description().item_style())
            },
            ViewItem::NothingToPickUp => "There is nothing new to pick up here!".to_string(),
            ViewItem::BusRide => "You use the bus key and drive on.".to_string(),
            ViewItem::NoUseHere => "I cannot use this item here.".to_string(),
            ViewItem::MedKitUsed => "You patch your wounds with the first aid kit.".to_string(),
            ViewItem::BatSwung => "You swing the baseball bat and pummel some squirrels.".to_string(),
            ViewItem::EmptyPack => {
                "You scramble through your pack for something useful and find nothing.".to_string()
            },
            ViewItem::UnknownCommand(command) => {
                format!("You ponder what it means to '{}'.", command.error_style())
            },
            ViewItem::Victory(description) => fill(description, width).victory_style().to_string(),
            ViewItem::Death(message) => fill(message, width).death_style().to_string(),
            ViewItem::Farewell => "Exiting game...".to_string(),
        }
    }
}

/// Aggregates the messages for one pass through the turn loop and displays
/// them together.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view sized to the terminal.
    pub fn new() -> View {
        View {
            width: display_width(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Display everything pushed this turn, in order, then clear the buffer.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = display_width();
        for item in self.items.drain(..) {
            println!("{}", item.render(self.width));
        }
    }
}

fn display_width() -> usize {
    termwidth().clamp(40, 100)
}
