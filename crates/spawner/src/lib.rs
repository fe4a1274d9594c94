//! Row population and seed growth.
//!
//! New rows appear above the camera as the field scrolls. Spawn rates come
//! from [`config::SpawnConfig`]; every spawned row is guaranteed to keep at
//! least one non-obstacle column so a path always exists.

use bracket_lib::prelude::RandomNumberGenerator;
use config::GameConfig;
use grid::{Cell, Grid, ItemKind, ObstacleKind, PowerupKind};

/// Vegetables eligible for group spawns and seed growth.
pub const VEGETABLES: [ItemKind; 10] = [
    ItemKind::Tomato,
    ItemKind::Lettuce,
    ItemKind::Zucchini,
    ItemKind::Grapes,
    ItemKind::Potato,
    ItemKind::Carrot,
    ItemKind::Asparagus,
    ItemKind::Pepper,
    ItemKind::Wheat,
    ItemKind::Corn,
];

const OBSTACLES: [ObstacleKind; 2] = [ObstacleKind::Rock, ObstacleKind::StonePile];

/// Builds an item cell with its configured point value.
pub fn item_cell(config: &GameConfig, kind: ItemKind) -> Cell {
    Cell::Item {
        kind,
        points: config.points.item_points(kind),
    }
}

pub fn random_obstacle(rng: &mut RandomNumberGenerator) -> ObstacleKind {
    OBSTACLES[rng.range(0, OBSTACLES.len() as i32) as usize]
}

pub fn random_vegetable(rng: &mut RandomNumberGenerator) -> ItemKind {
    VEGETABLES[rng.range(0, VEGETABLES.len() as i32) as usize]
}

/// Weighted item pick following the configured distribution.
pub fn random_item(rng: &mut RandomNumberGenerator, config: &GameConfig) -> ItemKind {
    let dist = &config.spawn.item_distribution;
    let roll: f32 = rng.range(0.0, 1.0);
    if roll < dist.vegetables {
        random_vegetable(rng)
    } else if roll < dist.vegetables + dist.coins {
        ItemKind::Coin
    } else {
        ItemKind::Gem
    }
}

/// Populates one fresh row. `difficulty` scales the obstacle rate, capped so
/// rows stay playable.
pub fn spawn_row(
    grid: &mut Grid,
    rng: &mut RandomNumberGenerator,
    config: &GameConfig,
    row: i32,
    difficulty: f32,
) {
    let obstacle_rate = (config.spawn.obstacle * difficulty).min(config.spawn.max_obstacle_rate);

    for col in 0..grid.cols() {
        if !grid.is_empty(col, row) {
            continue;
        }
        let roll: f32 = rng.range(0.0, 1.0);
        if roll < obstacle_rate {
            grid.set_cell(col, row, Cell::Obstacle(random_obstacle(rng)));
        }
    }

    spawn_vegetable_group(grid, rng, config, row);

    // Individual items at half rate since groups carry most of the harvest.
    for col in 0..grid.cols() {
        if !grid.is_empty(col, row) {
            continue;
        }
        let roll: f32 = rng.range(0.0, 1.0);
        if roll < config.spawn.item * 0.5 {
            let kind = random_item(rng, config);
            grid.set_cell(col, row, item_cell(config, kind));
        }
    }

    for col in 0..grid.cols() {
        if !grid.is_empty(col, row) {
            continue;
        }
        let roll: f32 = rng.range(0.0, 1.0);
        if roll < config.spawn.powerup {
            grid.set_cell(col, row, Cell::Powerup(PowerupKind::GasCan));
        }
    }

    for col in 0..grid.cols() {
        if !grid.is_empty(col, row) {
            continue;
        }
        let roll: f32 = rng.range(0.0, 1.0);
        if roll < config.spawn.life {
            grid.set_cell(col, row, Cell::Life);
        }
    }

    ensure_passable_path(grid, rng, row);
}

fn spawn_vegetable_group(
    grid: &mut Grid,
    rng: &mut RandomNumberGenerator,
    config: &GameConfig,
    row: i32,
) {
    let group = &config.spawn.vegetable_group;
    let roll: f32 = rng.range(0.0, 1.0);
    if roll >= group.chance {
        return;
    }
    let length = rng.range(group.min_length, group.max_length + 1);
    let kind = random_vegetable(rng);
    let max_start = grid.cols() - length;
    if max_start < 0 {
        return;
    }

    // A handful of placement attempts; a crowded row simply gets no group.
    for _ in 0..=max_start {
        let start = rng.range(0, max_start + 1);
        let free = (start..start + length).all(|col| grid.is_empty(col, row));
        if free {
            for col in start..start + length {
                grid.set_cell(col, row, item_cell(config, kind));
            }
            return;
        }
    }
}

/// Guarantees at least one non-obstacle column on the row.
pub fn ensure_passable_path(grid: &mut Grid, rng: &mut RandomNumberGenerator, row: i32) {
    let has_path = (0..grid.cols()).any(|col| !grid.is_obstacle(col, row));
    if !has_path {
        let col = rng.range(0, grid.cols());
        grid.clear_cell(col, row);
    }
}

/// Populates the field for a fresh session: an obstacle-free safe zone
/// around the start row, normal rows above it, decorative rocks below.
/// Returns the lowest (topmost) spawned row number.
pub fn spawn_initial_rows(
    grid: &mut Grid,
    rng: &mut RandomNumberGenerator,
    config: &GameConfig,
    start_row: i32,
    view_rows: i32,
) -> i32 {
    let safe_start = start_row - config.difficulty.safe_zone_rows;
    for row in safe_start..=start_row {
        for col in 0..grid.cols() {
            let roll: f32 = rng.range(0.0, 1.0);
            if roll < config.spawn.item * 0.5 {
                let kind = random_item(rng, config);
                grid.set_cell(col, row, item_cell(config, kind));
            }
        }
    }

    let top_row = safe_start - view_rows - config.difficulty.initial_buffer_rows;
    for row in (top_row..safe_start).rev() {
        spawn_row(grid, rng, config, row, 1.0);
    }

    // Scenery below the tractor scrolls off the bottom and is never reached.
    for row in start_row + 1..=start_row + view_rows {
        for col in 0..grid.cols() {
            let roll: f32 = rng.range(0.0, 1.0);
            if roll < 0.08 {
                grid.set_cell(col, row, Cell::Obstacle(random_obstacle(rng)));
            }
        }
    }

    top_row
}

/// Ripens every seed older than its growth time within the given row window
/// into a random vegetable. Returns the grown positions.
pub fn grow_seeds(
    grid: &mut Grid,
    rng: &mut RandomNumberGenerator,
    config: &GameConfig,
    now_ms: u64,
    top_row: i32,
    bottom_row: i32,
) -> Vec<(i32, i32)> {
    let mut grown = Vec::new();
    for row in top_row..=bottom_row {
        for col in 0..grid.cols() {
            let ripe = matches!(
                grid.get_cell(col, row),
                Some(Cell::Seed { planted_at, growth_time })
                    if now_ms.saturating_sub(*planted_at) >= *growth_time
            );
            if ripe {
                let kind = random_vegetable(rng);
                grid.set_cell(col, row, item_cell(config, kind));
                grown.push((col, row));
            }
        }
    }
    grown
}
