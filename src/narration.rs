//! Player narration events
//!
//! Every branch of every player action produces exactly one [`PlayerEvent`].
//! The player hands each event to its [`Narrator`], which decides what to do
//! with it: log it, record it, or drop it. The state changes themselves never
//! look at the narrator, so game logic can be tested without capturing text.
//!
//! # Rust Learning Notes
//!
//! - **Trait objects**: `Box<dyn Narrator>` lets a player carry any narrator
//! - **Shared ownership**: `EventLog` uses `Rc<RefCell<..>>` so a test can keep
//!   a handle to the same buffer the player writes into

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Something that happened to a player, with everything needed to describe it
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    ItemAdded { player: String, item: String },
    PackFull { player: String, item: String },
    /// The item is already in the pack or in the weapon slot
    NotPickupable { player: String, item: String },
    ItemDiscarded { player: String, item: String },
    NothingToDiscard { player: String, item: String },
    PackChecked { player: String, contents: String },

    /// Weapon equipped into an empty slot
    Equipped { player: String, weapon: String },
    /// Weapon equipped while another was held; the old one went back in the pack
    Swapped { player: String, previous: String, weapon: String },
    NotCarrying { player: String, item: String },
    NotAWeapon { player: String, item: String },
    EquippedWith { player: String, weapon: String },
    NothingEquipped { player: String },

    Ate { player: String, item: String, restored: f64 },
    SavedForLater { player: String, item: String },
    NoFoodToEat { player: String, item: String },
    NotEdible { player: String, item: String },

    UnknownUse { player: String, item: String },
    CannotUse { player: String, item: String },
}

impl PlayerEvent {
    /// Name of the player the event happened to
    pub fn player(&self) -> &str {
        use PlayerEvent::*;
        match self {
            ItemAdded { player, .. }
            | PackFull { player, .. }
            | NotPickupable { player, .. }
            | ItemDiscarded { player, .. }
            | NothingToDiscard { player, .. }
            | PackChecked { player, .. }
            | Equipped { player, .. }
            | Swapped { player, .. }
            | NotCarrying { player, .. }
            | NotAWeapon { player, .. }
            | EquippedWith { player, .. }
            | NothingEquipped { player }
            | Ate { player, .. }
            | SavedForLater { player, .. }
            | NoFoodToEat { player, .. }
            | NotEdible { player, .. }
            | UnknownUse { player, .. }
            | CannotUse { player, .. } => player,
        }
    }
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PlayerEvent::*;
        match self {
            ItemAdded { player, item } => write!(f, "{} added the {} to the pack.", player, item),
            PackFull { player, item } => {
                write!(f, "{}'s pack is full. The {} can't be picked up.", player, item)
            }
            NotPickupable { .. } => write!(f, "That can't be picked up."),
            ItemDiscarded { player, item } => {
                write!(f, "The {} was removed from {}'s pack.", item, player)
            }
            NothingToDiscard { player, item } => {
                write!(f, "There is no {} in {}'s pack to remove.", item, player)
            }
            PackChecked { contents, .. } => write!(f, "Contents: {}", contents),
            Equipped { player, weapon } => {
                write!(f, "{} has taken the {} out of the pack to equip it.", player, weapon)
            }
            Swapped { player, previous, weapon } => write!(
                f,
                "{} swapped the {} they had equipped for the {} in the pack.",
                player, previous, weapon
            ),
            NotCarrying { player, item } => write!(f, "{} isn't carrying any {}s.", player, item),
            NotAWeapon { player, item } => write!(
                f,
                "{} can't possibly hope to use this {} as a weapon.",
                player, item
            ),
            EquippedWith { player, weapon } => write!(f, "{} has the {} equipped.", player, weapon),
            NothingEquipped { player } => write!(f, "{} isn't equipped with any weapon.", player),
            Ate { player, item, restored } => write!(
                f,
                "{} ate the {} and regained {} health.",
                player, item, restored
            ),
            SavedForLater { player, item } => write!(
                f,
                "{} is at full health and decided to save the {} for when it's useful.",
                player, item
            ),
            NoFoodToEat { player, item } => {
                write!(f, "{} can't eat any {} they aren't carrying.", player, item)
            }
            NotEdible { item, .. } => write!(
                f,
                "In a survival situation, it's not a good idea to eat a {}.",
                item
            ),
            UnknownUse { player, item } => {
                write!(f, "{} doesn't know what to do with this {}.", player, item)
            }
            CannotUse { player, item } => {
                write!(f, "{} can't use any {} they don't have.", player, item)
            }
        }
    }
}

/// Receives the events a player produces
pub trait Narrator: fmt::Debug {
    fn narrate(&mut self, event: &PlayerEvent);
}

/// Default narrator: forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn narrate(&mut self, event: &PlayerEvent) {
        tracing::info!(player = event.player(), "{}", event);
    }
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&mut self, _event: &PlayerEvent) {}
}

/// Records events into a shared buffer
///
/// Clones share the same buffer: give one clone to the player and keep the
/// other to read back what happened.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Rc<RefCell<Vec<PlayerEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of all recorded events, oldest first
    pub fn events(&self) -> Vec<PlayerEvent> {
        self.events.borrow().clone()
    }

    /// The most recent event
    pub fn last(&self) -> Option<PlayerEvent> {
        self.events.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Removes and returns everything recorded so far
    pub fn drain(&self) -> Vec<PlayerEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl Narrator for EventLog {
    fn narrate(&mut self, event: &PlayerEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
