//! The player: stats, a pack, and a weapon slot
//!
//! All pack and weapon-slot changes go through `Player`'s own methods. Each
//! method returns a plain result describing what happened and narrates one
//! [`PlayerEvent`]; misuse (a full pack, an item the player doesn't have)
//! is never an error.
//!
//! The equip and eat logic live in the `equipment` and `consumption`
//! submodules; this file holds construction, pack management and `use_item`.

mod consumption;
mod equipment;

pub use consumption::EatOutcome;
pub use equipment::EquipOutcome;

use serde::Serialize;

use crate::error::{EntityError, require_name, require_number};
use crate::inventory::Pack;
use crate::item::{Item, ItemKind};
use crate::narration::{Narrator, PlayerEvent, TracingNarrator};
use crate::stats::Health;

/// What `use_item` ended up doing
#[derive(Debug, Clone)]
pub enum UseOutcome {
    /// The item was a weapon and was handed to `equip`
    Equipped(EquipOutcome),
    /// The item was food and was handed to `eat`
    Ate(EatOutcome),
    /// The item is in the pack but has no use
    UnknownUse,
    NotInPack,
}

/// A player in a zombie-infested world
#[derive(Debug)]
pub struct Player {
    name: String,
    health: Health,
    pub strength: f64,
    pub speed: f64,
    pub is_alive: bool,
    equipped: Option<Item>,
    pack: Pack,
    narrator: Box<dyn Narrator>,
}

impl Player {
    /// Creates a player at full health with an empty pack and nothing equipped
    ///
    /// `health` becomes the player's max health and must be greater than zero.
    pub fn new(
        name: impl Into<String>,
        health: f64,
        strength: f64,
        speed: f64,
    ) -> Result<Self, EntityError> {
        let name = require_name("name", name)?;
        let health = require_number("health", health)?;
        if health <= 0.0 {
            return Err(EntityError::RangeConstraint {
                field: "health",
                reason: "must be greater than zero",
            });
        }

        Ok(Player {
            name,
            health: Health::new(health),
            strength: require_number("strength", strength)?,
            speed: require_number("speed", speed)?,
            is_alive: true,
            equipped: None,
            pack: Pack::default(),
            narrator: Box::new(TracingNarrator),
        })
    }

    /// Replaces the narrator (builder style)
    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Box::new(narrator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f64 {
        self.health.current()
    }

    pub fn max_health(&self) -> f64 {
        self.health.max()
    }

    /// Sets health directly (capped at max health)
    pub fn set_health(&mut self, value: f64) {
        self.health.set_current(value);
    }

    pub fn pack(&self) -> &Pack {
        &self.pack
    }

    /// The currently equipped weapon, if any
    pub fn equipped(&self) -> Option<&Item> {
        self.equipped.as_ref()
    }

    fn narrate(&mut self, event: PlayerEvent) {
        self.narrator.narrate(&event);
    }

    /// True if this exact item is in the pack or in the weapon slot
    fn carries(&self, item: &Item) -> bool {
        self.pack.contains(item) || self.equipped.as_ref().is_some_and(|w| w.is_same(item))
    }

    /// Puts an item into the pack
    ///
    /// Returns false (and leaves the pack alone) if the pack is full or the
    /// player already carries this exact item. Storing several items with the
    /// same name is allowed.
    pub fn take_item(&mut self, item: Item) -> bool {
        let player = self.name.clone();
        let item_name = item.name().to_string();

        if self.carries(&item) {
            self.narrate(PlayerEvent::NotPickupable { player, item: item_name });
            return false;
        }

        match self.pack.add(item) {
            Ok(()) => {
                tracing::debug!(player = %player, pack_len = self.pack.len(), "pack grew");
                self.narrate(PlayerEvent::ItemAdded { player, item: item_name });
                true
            }
            Err(_) => {
                self.narrate(PlayerEvent::PackFull { player, item: item_name });
                false
            }
        }
    }

    /// Removes this exact item from the pack
    ///
    /// Another item with the same name doesn't count. Returns false if the
    /// item wasn't found.
    pub fn discard_item(&mut self, item: &Item) -> bool {
        let player = self.name.clone();
        let item_name = item.name().to_string();

        if self.pack.remove(item).is_some() {
            self.narrate(PlayerEvent::ItemDiscarded { player, item: item_name });
            true
        } else {
            self.narrate(PlayerEvent::NothingToDiscard { player, item: item_name });
            false
        }
    }

    /// Lists the pack contents by name, comma-separated
    pub fn check_pack(&mut self) -> String {
        let contents = self.pack.names().join(", ");
        self.narrate(PlayerEvent::PackChecked {
            player: self.name.clone(),
            contents: contents.clone(),
        });
        contents
    }

    /// Uses an item from the pack: weapons get equipped, food gets eaten
    pub fn use_item(&mut self, item: &Item) -> UseOutcome {
        if !self.pack.contains(item) {
            self.narrate(PlayerEvent::CannotUse {
                player: self.name.clone(),
                item: item.name().to_string(),
            });
            return UseOutcome::NotInPack;
        }

        match item.kind() {
            ItemKind::Weapon { .. } => UseOutcome::Equipped(self.equip(item)),
            ItemKind::Food { .. } => UseOutcome::Ate(self.eat(item)),
            ItemKind::Misc => {
                self.narrate(PlayerEvent::UnknownUse {
                    player: self.name.clone(),
                    item: item.name().to_string(),
                });
                UseOutcome::UnknownUse
            }
        }
    }

    /// Point-in-time view of the player for reports
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            health: self.health.current(),
            max_health: self.health.max(),
            strength: self.strength,
            speed: self.speed,
            is_alive: self.is_alive,
            equipped: self.equipped.as_ref().map(|w| w.name().to_string()),
            pack: self.pack.names().into_iter().map(String::from).collect(),
        }
    }
}

/// Serializable copy of a player's state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: f64,
    pub max_health: f64,
    pub strength: f64,
    pub speed: f64,
    pub is_alive: bool,
    pub equipped: Option<String>,
    pub pack: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;
    use crate::narration::EventLog;

    fn joan() -> (Player, EventLog) {
        let log = EventLog::new();
        let player = Player::new("Joan", 500.0, 30.0, 70.0)
            .unwrap()
            .with_narrator(log.clone());
        (player, log)
    }

    fn pack_ids(player: &Player) -> Vec<ItemId> {
        player.pack().iter().map(Item::id).collect()
    }

    #[test]
    fn test_new_player_defaults() {
        let (player, _) = joan();
        assert_eq!(player.name(), "Joan");
        assert_eq!(player.health(), 500.0);
        assert_eq!(player.max_health(), 500.0);
        assert_eq!(player.strength, 30.0);
        assert_eq!(player.speed, 70.0);
        assert!(player.is_alive);
        assert!(player.equipped().is_none());
        assert!(player.pack().is_empty());
    }

    #[test]
    fn test_new_player_validation() {
        assert_eq!(
            Player::new("Joan", 0.0, 30.0, 70.0).unwrap_err(),
            EntityError::RangeConstraint { field: "health", reason: "must be greater than zero" }
        );
        assert!(matches!(
            Player::new("Joan", -5.0, 30.0, 70.0),
            Err(EntityError::RangeConstraint { .. })
        ));
        assert!(matches!(
            Player::new("Joan", f64::NAN, 30.0, 70.0),
            Err(EntityError::TypeConstraint { field: "health", .. })
        ));
        assert!(matches!(
            Player::new("Joan", 500.0, f64::NAN, 70.0),
            Err(EntityError::TypeConstraint { field: "strength", .. })
        ));
        assert!(matches!(
            Player::new("Joan", 500.0, 30.0, f64::INFINITY),
            Err(EntityError::TypeConstraint { field: "speed", .. })
        ));
        assert!(matches!(
            Player::new("", 500.0, 30.0, 70.0),
            Err(EntityError::TypeConstraint { field: "name", .. })
        ));
    }

    #[test]
    fn test_take_item_until_full() {
        let (mut player, log) = joan();
        assert!(player.take_item(Item::weapon("shovel", 15.0).unwrap()));
        assert!(player.take_item(Item::food("sandwich", 30.0).unwrap()));
        assert!(player.take_item(Item::weapon("chainsaw", 25.0).unwrap()));
        assert_eq!(player.pack().len(), 3);

        let before = pack_ids(&player);
        assert!(!player.take_item(Item::new("rock").unwrap()));
        assert_eq!(pack_ids(&player), before);
        assert_eq!(
            log.last(),
            Some(PlayerEvent::PackFull { player: "Joan".into(), item: "rock".into() })
        );
    }

    #[test]
    fn test_take_duplicate_names() {
        let (mut player, _) = joan();
        assert!(player.take_item(Item::food("apple", 5.0).unwrap()));
        assert!(player.take_item(Item::food("apple", 5.0).unwrap()));
        assert_eq!(player.check_pack(), "apple, apple");
    }

    #[test]
    fn test_take_same_item_twice() {
        let (mut player, log) = joan();
        let shovel = Item::weapon("shovel", 15.0).unwrap();

        assert!(player.take_item(shovel.clone()));
        assert!(!player.take_item(shovel.clone()));
        assert_eq!(player.pack().len(), 1);
        assert_eq!(log.last().unwrap().to_string(), "That can't be picked up.");

        player.equip(&shovel);
        assert!(!player.take_item(shovel.clone()));
        assert!(player.pack().is_empty());

        assert_eq!(log.len(), 4);
        assert!(log.events().iter().all(|event| event.player() == "Joan"));
    }

    #[test]
    fn test_discard_by_identity() {
        let (mut player, log) = joan();
        let shovel = Item::weapon("shovel", 15.0).unwrap();
        let twin = Item::weapon("shovel", 15.0).unwrap();
        player.take_item(shovel.clone());
        player.take_item(twin.clone());

        assert!(player.discard_item(&shovel));
        assert_eq!(player.pack().len(), 1);
        assert!(player.pack().contains(&twin));
        assert!(!player.pack().contains(&shovel));

        let before = pack_ids(&player);
        assert!(!player.discard_item(&shovel));
        assert_eq!(pack_ids(&player), before);
        assert_eq!(
            log.last(),
            Some(PlayerEvent::NothingToDiscard { player: "Joan".into(), item: "shovel".into() })
        );
    }

    #[test]
    fn test_discard_unknown_item() {
        let (mut player, _) = joan();
        player.take_item(Item::weapon("shovel", 15.0).unwrap());
        let scythe = Item::weapon("scythe", 21.0).unwrap();

        assert!(!player.discard_item(&scythe));
        assert_eq!(player.pack().len(), 1);
    }

    #[test]
    fn test_check_pack_does_not_mutate() {
        let (mut player, log) = joan();
        assert_eq!(player.check_pack(), "");

        player.take_item(Item::weapon("shovel", 15.0).unwrap());
        player.take_item(Item::food("sandwich", 30.0).unwrap());
        let before = pack_ids(&player);

        assert_eq!(player.check_pack(), "shovel, sandwich");
        assert_eq!(pack_ids(&player), before);
        assert_eq!(log.last().unwrap().to_string(), "Contents: shovel, sandwich");
    }

    #[test]
    fn test_use_item_dispatch() {
        let (mut player, _) = joan();
        let chainsaw = Item::weapon("chainsaw", 25.0).unwrap();
        let sandwich = Item::food("sandwich", 30.0).unwrap();
        player.take_item(chainsaw.clone());
        player.take_item(sandwich.clone());

        let outcome = player.use_item(&chainsaw);
        assert!(matches!(outcome, UseOutcome::Equipped(EquipOutcome::Equipped)));
        assert!(player.equipped().unwrap().is_same(&chainsaw));

        player.set_health(100.0);
        let outcome = player.use_item(&sandwich);
        assert!(matches!(
            outcome,
            UseOutcome::Ate(EatOutcome::Ate { restored }) if restored == 30.0
        ));
        assert_eq!(player.health(), 130.0);
        assert!(player.pack().is_empty());
    }

    #[test]
    fn test_use_item_not_in_pack() {
        let (mut player, log) = joan();
        let axe = Item::weapon("axe", 20.0).unwrap();

        assert!(matches!(player.use_item(&axe), UseOutcome::NotInPack));
        assert!(player.equipped().is_none());
        assert_eq!(
            log.last(),
            Some(PlayerEvent::CannotUse { player: "Joan".into(), item: "axe".into() })
        );
    }

    #[test]
    fn test_use_item_unknown_use() {
        let (mut player, _) = joan();
        let rock = Item::new("rock").unwrap();
        player.take_item(rock.clone());

        assert!(matches!(player.use_item(&rock), UseOutcome::UnknownUse));
        assert!(player.pack().contains(&rock));
    }

    #[test]
    fn test_snapshot() {
        let (mut player, _) = joan();
        let shovel = Item::weapon("shovel", 15.0).unwrap();
        player.take_item(shovel.clone());
        player.take_item(Item::food("sandwich", 30.0).unwrap());
        player.equip(&shovel);

        let snapshot = player.snapshot();
        assert_eq!(snapshot.equipped.as_deref(), Some("shovel"));
        assert_eq!(snapshot.pack, vec!["sandwich".to_string()]);
        assert_eq!(snapshot.max_health, 500.0);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["equipped"], "shovel");
    }
}
