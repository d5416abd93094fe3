//! Regeneration command and read-only query surface
//!
//! The generator owns the configuration, the RNG and the current level.
//! Front-ends call [`Generator::regenerate`] on user input and read the level
//! back between calls; they never observe a partially built level.

use crate::config::DungeonConfig;
use crate::dungeon::{Level, generate_level};
use crate::rng::GameRng;

/// Owns the current level and produces new ones on demand
#[derive(Debug, Clone)]
pub struct Generator {
    config: DungeonConfig,
    rng: GameRng,
    level: Level,
    generation: u64,
}

impl Generator {
    /// Create a generator and build the first level.
    ///
    /// The RNG is never reseeded afterwards, so consecutive levels continue
    /// the same random sequence.
    pub fn new(config: DungeonConfig, rng: GameRng) -> Self {
        let level = Level::new(config.grid_width(), config.grid_height(), config.max_rooms);
        let mut generator = Self {
            config,
            rng,
            level,
            generation: 0,
        };
        generator.regenerate();
        generator
    }

    /// Replace the current level with a freshly generated one
    pub fn regenerate(&mut self) {
        generate_level(&mut self.level, &self.config, &mut self.rng);
        self.generation += 1;
        log::info!(
            "generation {}: {} rooms",
            self.generation,
            self.level.rooms().len()
        );
    }

    /// The current level
    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Seed the RNG was created with
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of levels generated so far, starting at 1
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
