use super::Player;
use crate::item::Item;
use crate::narration::PlayerEvent;

/// Result of trying to equip a weapon
///
/// The weapon slot has two states, empty or holding one weapon. Equipping
/// always takes the weapon out of the pack; if something was already held it
/// goes back into the pack in its place.
#[derive(Debug, Clone)]
pub enum EquipOutcome {
    /// Slot was empty, now holds the weapon
    Equipped,
    /// Slot held `previous`, which is now back in the pack
    Swapped { previous: Item },
    /// The weapon isn't in the pack
    NotInPack,
    /// The item isn't a weapon
    NotAWeapon,
}

impl Player {
    /// Equips a weapon from the pack
    pub fn equip(&mut self, weapon: &Item) -> EquipOutcome {
        let player = self.name.clone();

        if !weapon.is_weapon() {
            self.narrate(PlayerEvent::NotAWeapon {
                player,
                item: weapon.name().to_string(),
            });
            return EquipOutcome::NotAWeapon;
        }

        let Some(taken) = self.pack.remove(weapon) else {
            self.narrate(PlayerEvent::NotCarrying {
                player,
                item: weapon.name().to_string(),
            });
            return EquipOutcome::NotInPack;
        };

        match self.equipped.replace(taken) {
            None => {
                self.narrate(PlayerEvent::Equipped {
                    player,
                    weapon: weapon.name().to_string(),
                });
                EquipOutcome::Equipped
            }
            Some(previous) => {
                self.narrate(PlayerEvent::Swapped {
                    player,
                    previous: previous.name().to_string(),
                    weapon: weapon.name().to_string(),
                });
                // The removal above freed a slot
                if let Err(err) = self.pack.add(previous.clone()) {
                    tracing::error!(%err, weapon = previous.name(), "unequipped weapon lost");
                }
                EquipOutcome::Swapped { previous }
            }
        }
    }

    /// Name of the equipped weapon, or None if nothing is equipped
    pub fn equipped_with(&mut self) -> Option<&str> {
        let event = match &self.equipped {
            Some(weapon) => PlayerEvent::EquippedWith {
                player: self.name.clone(),
                weapon: weapon.name().to_string(),
            },
            None => PlayerEvent::NothingEquipped {
                player: self.name.clone(),
            },
        };
        self.narrate(event);

        self.equipped.as_ref().map(Item::name)
    }
}
