use serde::Serialize;
use std::collections::HashMap;

use super::error::ScenarioError;
use super::types::{Action, Scenario};
use crate::item::Item;
use crate::narration::EventLog;
use crate::player::{Player, PlayerSnapshot};
use crate::zombie::Zombie;

/// What happened during a scenario, and where everything ended up
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// One line per narrated player event, in order
    pub transcript: Vec<String>,
    pub player: PlayerSnapshot,
    pub zombies: Vec<Zombie>,
}

/// Builds a scenario's world and plays its actions against it
#[derive(Debug)]
pub struct ScenarioRunner {
    player: Player,
    zombies: Vec<Zombie>,
    items: HashMap<String, Item>,
    log: EventLog,
    transcript: Vec<String>,
}

impl ScenarioRunner {
    /// Validates and builds every entity in the scenario
    pub fn new(scenario: &Scenario) -> Result<Self, ScenarioError> {
        let log = EventLog::new();
        let player = scenario.player.build()?.with_narrator(log.clone());

        let zombies = scenario
            .zombies
            .iter()
            .map(|config| config.build())
            .collect::<Result<Vec<_>, _>>()?;

        let mut items = HashMap::new();
        for (label, config) in &scenario.items {
            items.insert(label.clone(), config.build()?);
        }

        tracing::debug!(
            player = player.name(),
            zombies = zombies.len(),
            items = items.len(),
            "scenario world built"
        );

        Ok(ScenarioRunner {
            player,
            zombies,
            items,
            log,
            transcript: Vec::new(),
        })
    }

    /// Builds the world and applies every action in order
    pub fn run(scenario: &Scenario) -> Result<ScenarioReport, ScenarioError> {
        let mut runner = Self::new(scenario)?;
        for action in &scenario.actions {
            runner.apply(action)?;
        }
        Ok(runner.finish())
    }

    fn item(&self, label: &str) -> Result<Item, ScenarioError> {
        self.items
            .get(label)
            .cloned()
            .ok_or_else(|| ScenarioError::UnknownItem(label.to_string()))
    }

    /// Applies one action to the player
    pub fn apply(&mut self, action: &Action) -> Result<(), ScenarioError> {
        tracing::trace!(?action, "applying");

        match action {
            Action::Take { item } => {
                let item = self.item(item)?;
                self.player.take_item(item);
            }
            Action::Discard { item } => {
                let item = self.item(item)?;
                self.player.discard_item(&item);
            }
            Action::CheckPack => {
                self.player.check_pack();
            }
            Action::Equip { item } => {
                let item = self.item(item)?;
                self.player.equip(&item);
            }
            Action::Eat { item } => {
                let item = self.item(item)?;
                self.player.eat(&item);
            }
            Action::Use { item } => {
                let item = self.item(item)?;
                self.player.use_item(&item);
            }
            Action::EquippedWith => {
                self.player.equipped_with();
            }
            Action::SetHealth { health } => {
                self.player.set_health(*health);
                tracing::debug!(health = self.player.health(), "health set");
            }
        }

        for event in self.log.drain() {
            tracing::info!(player = event.player(), "{}", event);
            self.transcript.push(event.to_string());
        }
        Ok(())
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn zombies(&self) -> &[Zombie] {
        &self.zombies
    }

    /// Consumes the runner and produces the report
    pub fn finish(self) -> ScenarioReport {
        ScenarioReport {
            transcript: self.transcript,
            player: self.player.snapshot(),
            zombies: self.zombies,
        }
    }
}
