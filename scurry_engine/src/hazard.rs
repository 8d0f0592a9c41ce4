//! Hazard roll: the per-turn squirrel-attack check.
//!
//! The single source of randomness in the engine. The die is injected behind
//! the [`HazardDice`] trait so turns are deterministic under test.

use log::info;
use rand::Rng;

use crate::session::Session;
use crate::view::{View, ViewItem};

/// Upper bound (inclusive) of the hazard die; draws are uniform in
/// `0..=HAZARD_DIE_MAX`.
pub const HAZARD_DIE_MAX: u32 = 10;

/// Source of hazard rolls.
pub trait HazardDice {
    /// Draw one uniformly distributed integer in `0..=HAZARD_DIE_MAX`.
    fn roll(&mut self) -> u32;
}

/// Production dice backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomDice;

impl RandomDice {
    pub fn new() -> RandomDice {
        RandomDice
    }
}

impl HazardDice for RandomDice {
    fn roll(&mut self) -> u32 {
        rand::rng().random_range(0..=HAZARD_DIE_MAX)
    }
}

/// Apply the turn's hazard roll against the current threat level.
///
/// A draw strictly below the threat level injures the player by one; anything
/// else is a near miss. This is the only mechanism that raises the injury
/// level.
pub fn resolve_hazard(session: &mut Session, dice: &mut dyn HazardDice, view: &mut View) {
    let roll = dice.roll();
    if roll < session.threat_level {
        session.injury_level += 1;
        info!(
            "hazard roll {roll} under threat {} -- injury now {}",
            session.threat_level, session.injury_level
        );
        view.push(ViewItem::SquirrelAttack);
    } else {
        view.push(ViewItem::SquirrelsAvoided);
    }
}
