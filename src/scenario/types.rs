//! Scenario file types
//!
//! Entity attributes are kept as raw JSON values and only checked when the
//! entity is built, so a string where a number belongs is reported as an
//! [`EntityError::TypeConstraint`] naming the field, not as a generic parse
//! failure.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::EntityError;
use crate::item::Item;
use crate::player::Player;
use crate::zombie::{Zombie, ZombieKind};

/// A scripted run: who is in the world, what items exist, and what the player does
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub player: PlayerConfig,
    #[serde(default)]
    pub zombies: Vec<ZombieConfig>,
    /// Items by label; each label is one item identity
    #[serde(default)]
    pub items: BTreeMap<String, ItemConfig>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub name: Value,
    pub health: Value,
    pub strength: Value,
    pub speed: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZombieConfig {
    #[serde(default = "default_zombie_kind")]
    pub kind: ZombieKind,
    pub health: Value,
    pub strength: Value,
    pub speed: Value,
}

fn default_zombie_kind() -> ZombieKind {
    ZombieKind::Normal
}

/// One item entry; the key names the kind
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemConfig {
    Weapon { weapon: Value, damage: Value },
    Food { food: Value, energy: Value },
    Misc { name: Value },
}

/// A single step of the script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Take { item: String },
    Discard { item: String },
    CheckPack,
    Equip { item: String },
    Eat { item: String },
    Use { item: String },
    EquippedWith,
    SetHealth { health: f64 },
}

fn text(field: &'static str, value: &Value) -> Result<String, EntityError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(EntityError::not_text(field))
}

fn number(field: &'static str, value: &Value) -> Result<f64, EntityError> {
    value.as_f64().ok_or(EntityError::not_number(field))
}

impl PlayerConfig {
    pub fn build(&self) -> Result<Player, EntityError> {
        Player::new(
            text("name", &self.name)?,
            number("health", &self.health)?,
            number("strength", &self.strength)?,
            number("speed", &self.speed)?,
        )
    }
}

impl ZombieConfig {
    pub fn build(&self) -> Result<Zombie, EntityError> {
        Zombie::new(
            self.kind,
            number("health", &self.health)?,
            number("strength", &self.strength)?,
            number("speed", &self.speed)?,
        )
    }
}

impl ItemConfig {
    pub fn build(&self) -> Result<Item, EntityError> {
        match self {
            ItemConfig::Weapon { weapon, damage } => {
                Item::weapon(text("name", weapon)?, number("damage", damage)?)
            }
            ItemConfig::Food { food, energy } => {
                Item::food(text("name", food)?, number("energy", energy)?)
            }
            ItemConfig::Misc { name } => Item::new(text("name", name)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_config_variants() {
        let weapon: ItemConfig = serde_json::from_value(json!({ "weapon": "axe", "damage": 20 })).unwrap();
        let food: ItemConfig = serde_json::from_value(json!({ "food": "apple", "energy": 5 })).unwrap();
        let misc: ItemConfig = serde_json::from_value(json!({ "name": "rock" })).unwrap();

        assert_eq!(weapon.build().unwrap().damage(), Some(20.0));
        assert_eq!(food.build().unwrap().energy(), Some(5.0));
        assert_eq!(misc.build().unwrap().name(), "rock");
    }

    #[test]
    fn test_wrong_json_type_is_type_constraint() {
        let weapon: ItemConfig =
            serde_json::from_value(json!({ "weapon": "axe", "damage": "lots" })).unwrap();
        assert_eq!(
            weapon.build().unwrap_err(),
            EntityError::TypeConstraint { field: "damage", expected: "a Number" }
        );

        let misc: ItemConfig = serde_json::from_value(json!({ "name": 7 })).unwrap();
        assert!(matches!(
            misc.build(),
            Err(EntityError::TypeConstraint { field: "name", .. })
        ));

        let player: PlayerConfig = serde_json::from_value(
            json!({ "name": "Joan", "health": "500", "strength": 30, "speed": 70 }),
        )
        .unwrap();
        assert!(matches!(
            player.build(),
            Err(EntityError::TypeConstraint { field: "health", .. })
        ));
    }

    #[test]
    fn test_player_range_checked() {
        let player: PlayerConfig = serde_json::from_value(
            json!({ "name": "Joan", "health": 0, "strength": 30, "speed": 70 }),
        )
        .unwrap();
        assert!(matches!(
            player.build(),
            Err(EntityError::RangeConstraint { field: "health", .. })
        ));
    }

    #[test]
    fn test_zombie_kind_defaults_to_normal() {
        let zombie: ZombieConfig =
            serde_json::from_value(json!({ "health": 40, "strength": 50, "speed": 20 })).unwrap();
        assert_eq!(zombie.build().unwrap().kind(), ZombieKind::Normal);
    }

    #[test]
    fn test_action_tags() {
        let actions: Vec<Action> = serde_json::from_value(json!([
            { "action": "take", "item": "shovel" },
            { "action": "check_pack" },
            { "action": "set_health", "health": 487 }
        ]))
        .unwrap();

        assert_eq!(actions[0], Action::Take { item: "shovel".into() });
        assert_eq!(actions[1], Action::CheckPack);
        assert_eq!(actions[2], Action::SetHealth { health: 487.0 });
    }
}
