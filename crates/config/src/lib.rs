//! Gameplay balance tables.
//!
//! Every tunable the core treats as a constant lives here: spawn rates,
//! point values, gas-can costs, timers. Values are loaded once per session
//! from `assets/config.json`; a missing file falls back to the built-in
//! defaults so the game always starts.

use common::{GameError, GameResult};
use grid::ItemKind;
use serde::Deserialize;

/// One scroll-speed level.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SpeedLevel {
    pub interval_ms: u64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Milliseconds per level before the scroll speeds up.
    pub level_duration_ms: u64,
    pub levels: Vec<SpeedLevel>,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        let level = |interval_ms, name: &str| SpeedLevel {
            interval_ms,
            name: name.to_string(),
        };
        Self {
            level_duration_ms: 180_000,
            levels: vec![
                level(3000, "Slow"),
                level(2000, "Normal"),
                level(1000, "Fast"),
                level(500, "Very Fast"),
                level(250, "Insane"),
            ],
        }
    }
}

/// Consecutive vegetable runs spawned on one row.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VegetableGroupConfig {
    pub chance: f32,
    pub min_length: i32,
    pub max_length: i32,
}

impl Default for VegetableGroupConfig {
    fn default() -> Self {
        Self {
            chance: 0.4,
            min_length: 3,
            max_length: 8,
        }
    }
}

/// Item category weights; should sum to 1.0.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ItemDistribution {
    pub vegetables: f32,
    pub coins: f32,
    pub gems: f32,
}

impl Default for ItemDistribution {
    fn default() -> Self {
        Self {
            vegetables: 0.6,
            coins: 0.3,
            gems: 0.1,
        }
    }
}

/// Per-cell spawn probabilities.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub obstacle: f32,
    pub item: f32,
    pub powerup: f32,
    pub life: f32,
    pub max_obstacle_rate: f32,
    pub vegetable_group: VegetableGroupConfig,
    pub item_distribution: ItemDistribution,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            obstacle: 0.18,
            item: 0.15,
            powerup: 0.05,
            life: 0.02,
            max_obstacle_rate: 0.45,
            vegetable_group: VegetableGroupConfig::default(),
            item_distribution: ItemDistribution::default(),
        }
    }
}

/// Point values per item, plus the survival trickle and the `dG` haircut.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    pub survival_per_second: i32,
    /// `dG` credits only this fraction of collected points.
    pub dg_multiplier: f32,
    pub coin: i32,
    pub gem: i32,
    pub tomato: i32,
    pub lettuce: i32,
    pub zucchini: i32,
    pub grapes: i32,
    pub potato: i32,
    pub carrot: i32,
    pub asparagus: i32,
    pub pepper: i32,
    pub wheat: i32,
    pub corn: i32,
    pub snail: i32,
    pub mushroom: i32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            survival_per_second: 1,
            dg_multiplier: 0.2,
            coin: 1,
            gem: 5,
            tomato: 2,
            lettuce: 2,
            zucchini: 2,
            grapes: 3,
            potato: 2,
            carrot: 2,
            asparagus: 3,
            pepper: 2,
            wheat: 2,
            corn: 2,
            snail: 5,
            mushroom: 3,
        }
    }
}

impl PointsConfig {
    /// Point value for an item kind.
    pub fn item_points(&self, kind: ItemKind) -> i32 {
        match kind {
            ItemKind::Coin => self.coin,
            ItemKind::Gem => self.gem,
            ItemKind::Tomato => self.tomato,
            ItemKind::Lettuce => self.lettuce,
            ItemKind::Zucchini => self.zucchini,
            ItemKind::Grapes => self.grapes,
            ItemKind::Potato => self.potato,
            ItemKind::Carrot => self.carrot,
            ItemKind::Asparagus => self.asparagus,
            ItemKind::Pepper => self.pepper,
            ItemKind::Wheat => self.wheat,
            ItemKind::Corn => self.corn,
            ItemKind::Snail => self.snail,
            ItemKind::Mushroom => self.mushroom,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub starting_lives: i32,
    pub starting_gas_cans: i32,
    /// Rows above the current position after falling off the bottom edge.
    pub respawn_row_offset: i32,
    pub max_lives: i32,
    pub max_gas_cans: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            starting_gas_cans: 0,
            respawn_row_offset: 5,
            max_lives: 99,
            max_gas_cans: 99,
        }
    }
}

/// Gas cans required by the powered commands.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PowerupCosts {
    pub dd: i32,
    #[serde(rename = "dG")]
    pub dg: i32,
    pub cc: i32,
}

impl Default for PowerupCosts {
    fn default() -> Self {
        Self { dd: 2, dg: 10, cc: 2 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Obstacle rate scales up once per this many milliseconds.
    pub scaling_interval_ms: u64,
    pub safe_zone_rows: i32,
    pub initial_buffer_rows: i32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            scaling_interval_ms: 60_000,
            safe_zone_rows: 3,
            initial_buffer_rows: 5,
        }
    }
}

/// Rock transmutation (`r` + direction) tuning.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TransmuteConfig {
    pub duration_ms: u64,
    /// Chance a plain rock yields a bonus item.
    pub success_chance: f32,
    /// Score delta when the rock turns out to be a stone-pile trap.
    pub trap_penalty: i32,
}

impl Default for TransmuteConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            success_chance: 0.5,
            trap_penalty: -50,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Milliseconds before a planted seed grows into a vegetable.
    pub growth_time_ms: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { growth_time_ms: 8000 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Rows kept between a `G` landing and the dangerous bottom edge.
    pub g_command_margin: i32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { g_command_margin: 2 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub game_over_delay_ms: u64,
    pub message_time_ms: u64,
    pub count_timeout_ms: u64,
    pub max_count: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            game_over_delay_ms: 1500,
            message_time_ms: 2000,
            count_timeout_ms: 1500,
            max_count: 99,
        }
    }
}

/// Root configuration object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub speed: SpeedConfig,
    pub spawn: SpawnConfig,
    pub points: PointsConfig,
    pub player: PlayerConfig,
    pub powerup_costs: PowerupCosts,
    pub difficulty: DifficultyConfig,
    pub rock_transmute: TransmuteConfig,
    pub seeds: SeedConfig,
    pub navigation: NavigationConfig,
    pub ui: UiConfig,
}

impl GameConfig {
    /// Loads configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &str) -> GameResult<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Self::parse(&data)
    }

    /// Loads the configuration embedded at compile time (used on WASM).
    pub fn load_embedded() -> GameResult<Self> {
        Self::parse(include_str!("../../../assets/config.json"))
    }

    fn parse(data: &str) -> GameResult<Self> {
        serde_json::from_str(data).map_err(|e| GameError::Parse(e.to_string()))
    }
}
