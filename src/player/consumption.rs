use super::Player;
use crate::item::Item;
use crate::narration::PlayerEvent;

/// Result of trying to eat something
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EatOutcome {
    /// Food eaten; `restored` is how much health actually came back
    Ate { restored: f64 },
    /// Already at max health, the food stays in the pack
    AtFullHealth,
    NotInPack,
    NotFood,
}

impl Player {
    /// Eats a food item from the pack, restoring health up to max health
    pub fn eat(&mut self, food: &Item) -> EatOutcome {
        let player = self.name.clone();
        let item = food.name().to_string();

        let Some(energy) = food.energy() else {
            self.narrate(PlayerEvent::NotEdible { player, item });
            return EatOutcome::NotFood;
        };

        if !self.pack.contains(food) {
            self.narrate(PlayerEvent::NoFoodToEat { player, item });
            return EatOutcome::NotInPack;
        }

        if self.health.is_full() {
            self.narrate(PlayerEvent::SavedForLater { player, item });
            return EatOutcome::AtFullHealth;
        }

        self.pack.remove(food);
        let restored = self.health.heal(energy);
        tracing::debug!(player = %player, health = self.health.current(), "healed");
        self.narrate(PlayerEvent::Ate { player, item, restored });

        EatOutcome::Ate { restored }
    }
}
