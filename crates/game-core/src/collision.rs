use grid::{Cell, Grid};

/// What walking onto the current cell yielded. Items and seeds are never
/// auto-collected: vegetables take a harvest command, seeds have to grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickup {
    GasCan,
    Life,
}

#[derive(Debug, Default)]
pub struct CollisionOutcome {
    pub obstacle: bool,
    pub pickup: Option<Pickup>,
}

/// Checks the tractor's cell. Obstacles are reported and left in place (the
/// caller decides whether the tractor survives to clear them); gas cans and
/// lives are consumed here.
pub fn process(grid: &mut Grid, col: i32, row: i32) -> CollisionOutcome {
    if grid.is_obstacle(col, row) {
        return CollisionOutcome {
            obstacle: true,
            pickup: None,
        };
    }
    let pickup = match grid.get_cell(col, row) {
        Some(Cell::Powerup(_)) => Some(Pickup::GasCan),
        Some(Cell::Life) => Some(Pickup::Life),
        _ => None,
    };
    if pickup.is_some() {
        grid.clear_cell(col, row);
    }
    CollisionOutcome {
        obstacle: false,
        pickup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid::{ItemKind, ObstacleKind, PowerupKind};

    #[test]
    fn empty_cell_is_quiet() {
        let mut grid = Grid::new(24);
        let outcome = process(&mut grid, 3, 3);
        assert!(!outcome.obstacle);
        assert!(outcome.pickup.is_none());
    }

    #[test]
    fn obstacle_reported_and_kept() {
        let mut grid = Grid::new(24);
        grid.set_cell(3, 3, Cell::Obstacle(ObstacleKind::Rock));
        let outcome = process(&mut grid, 3, 3);
        assert!(outcome.obstacle);
        assert!(grid.is_obstacle(3, 3));
    }

    #[test]
    fn powerup_and_life_auto_collect() {
        let mut grid = Grid::new(24);
        grid.set_cell(1, 0, Cell::Powerup(PowerupKind::GasCan));
        grid.set_cell(2, 0, Cell::Life);
        assert_eq!(process(&mut grid, 1, 0).pickup, Some(Pickup::GasCan));
        assert!(grid.is_empty(1, 0));
        assert_eq!(process(&mut grid, 2, 0).pickup, Some(Pickup::Life));
        assert!(grid.is_empty(2, 0));
    }

    #[test]
    fn items_and_seeds_stay_put() {
        let mut grid = Grid::new(24);
        grid.set_cell(
            1,
            0,
            Cell::Item {
                kind: ItemKind::Carrot,
                points: 2,
            },
        );
        grid.set_cell(
            2,
            0,
            Cell::Seed {
                planted_at: 0,
                growth_time: 1000,
            },
        );
        assert!(process(&mut grid, 1, 0).pickup.is_none());
        assert!(grid.is_item(1, 0));
        assert!(process(&mut grid, 2, 0).pickup.is_none());
        assert!(matches!(grid.get_cell(2, 0), Some(Cell::Seed { .. })));
    }
}
