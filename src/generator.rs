//! Random lap dataset generation for a fixed driver roster.

use anyhow::{Result, bail};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::lap_time::LapTime;
use crate::records::LapRecord;

/// Drivers from the 2021 Bahrain GP first practice session.
pub const ROSTER: &[&str] = &[
    "Max Verstappen",
    "Valtteri Bottas",
    "Lando Norris",
    "Lewis Hamilton",
    "Charles Leclerc",
    "Sergio Perez",
    "Pierre Gasly",
    "Carlos Sainz",
    "Daniel Ricciardo",
];

/// Most laps a single driver may be given.
pub const MAX_LAPS_PER_DRIVER: u32 = 1_000;

/// Bounds for generated laps.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Fewest laps any driver gets.
    pub min_laps: u32,
    /// Up to this many laps on top of `min_laps`.
    pub extra_laps: u32,
    pub minutes: u32,
    pub min_seconds: u32,
    pub max_seconds: u32,
    /// Fixed seed for reproducible output; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            min_laps: 3,
            extra_laps: 5,
            minutes: 1,
            min_seconds: 20,
            max_seconds: 40,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_laps == 0 {
            bail!("min_laps must be at least 1");
        }
        match self.min_laps.checked_add(self.extra_laps) {
            Some(most) if most <= MAX_LAPS_PER_DRIVER => {}
            _ => bail!(
                "min_laps ({}) plus extra_laps ({}) exceeds {} laps per driver",
                self.min_laps,
                self.extra_laps,
                MAX_LAPS_PER_DRIVER
            ),
        }
        if self.min_seconds > self.max_seconds {
            bail!(
                "min_seconds ({}) is greater than max_seconds ({})",
                self.min_seconds,
                self.max_seconds
            );
        }
        if self.max_seconds > 59 {
            bail!("max_seconds ({}) must be below 60", self.max_seconds);
        }
        if self.minutes > 59 {
            bail!("minutes ({}) must be below 60", self.minutes);
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Generates laps for every driver, driver-major with lap numbers ascending from 1.
pub fn generate_lap_times(drivers: &[&str], config: &GeneratorConfig) -> Result<Vec<LapRecord>> {
    config.validate()?;
    let mut rng = config.rng();

    let mut laps = Vec::new();
    for driver in drivers {
        let count = rng.gen_range(config.min_laps..=config.min_laps + config.extra_laps);
        debug!(driver, count, "Generating laps");

        for lap in 1..=count {
            laps.push(LapRecord {
                driver: driver.to_string(),
                lap,
                time: random_lap_time(&mut rng, config),
            });
        }
    }

    info!(drivers = drivers.len(), laps = laps.len(), "Lap dataset generated");
    Ok(laps)
}

fn random_lap_time(rng: &mut impl Rng, config: &GeneratorConfig) -> LapTime {
    let seconds = rng.gen_range(config.min_seconds..=config.max_seconds);
    LapTime::from_seconds(config.minutes * 60 + seconds)
}
