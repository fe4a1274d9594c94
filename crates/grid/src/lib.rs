//! Sparse field grid and word/object queries.
//!
//! The field scrolls vertically without bound, so rows are stored in a map
//! keyed by signed row index and created lazily on first write. Columns are
//! fixed per grid; any access outside `[0, cols)` is a no-op rather than an
//! error.

use std::collections::HashMap;

use common::TargetKind;

/// Obstacle variants. `StonePile` is the transmutation trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Rock,
    StonePile,
}

/// Collectible item variants. `Snail` and `Mushroom` only appear as
/// transmutation bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Coin,
    Gem,
    Tomato,
    Lettuce,
    Zucchini,
    Grapes,
    Potato,
    Carrot,
    Asparagus,
    Pepper,
    Wheat,
    Corn,
    Snail,
    Mushroom,
}

impl ItemKind {
    /// Stable label used for telemetry and save data.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Coin => "coin",
            ItemKind::Gem => "gem",
            ItemKind::Tomato => "tomato",
            ItemKind::Lettuce => "lettuce",
            ItemKind::Zucchini => "zucchini",
            ItemKind::Grapes => "grapes",
            ItemKind::Potato => "potato",
            ItemKind::Carrot => "carrot",
            ItemKind::Asparagus => "asparagus",
            ItemKind::Pepper => "pepper",
            ItemKind::Wheat => "wheat",
            ItemKind::Corn => "corn",
            ItemKind::Snail => "snail",
            ItemKind::Mushroom => "mushroom",
        }
    }
}

/// Powerup variants. Gas cans fuel the `dd`/`dG`/`cc` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerupKind {
    GasCan,
}

/// A grid cell. Cells are replaced wholesale or cleared, never patched.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Obstacle(ObstacleKind),
    Item { kind: ItemKind, points: i32 },
    Powerup(PowerupKind),
    Life,
    Seed { planted_at: u64, growth_time: u64 },
}

impl Cell {
    pub fn is_obstacle(&self) -> bool {
        matches!(self, Cell::Obstacle(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Cell::Item { .. })
    }

    pub fn is_powerup(&self) -> bool {
        matches!(self, Cell::Powerup(_))
    }

    pub fn is_seed(&self) -> bool {
        matches!(self, Cell::Seed { .. })
    }

    /// Point value of the cell, zero for anything that is not an item.
    pub fn points(&self) -> i32 {
        match self {
            Cell::Item { points, .. } => *points,
            _ => 0,
        }
    }

    /// Whether this cell belongs to the given find/till target category.
    pub fn matches(&self, target: TargetKind) -> bool {
        match target {
            TargetKind::Rock => self.is_obstacle(),
            TargetKind::Vegetable => self.is_item(),
            TargetKind::Gas => self.is_powerup(),
            TargetKind::Life => matches!(self, Cell::Life),
        }
    }
}

/// Boundaries of a word: a maximal run of word-bearing cells in one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    pub start: i32,
    pub end: i32,
    pub row: i32,
}

/// Sparse cell store keyed by row number.
#[derive(Debug, Default)]
pub struct Grid {
    cols: i32,
    rows: HashMap<i32, Vec<Option<Cell>>>,
}

impl Grid {
    pub fn new(cols: i32) -> Self {
        Self {
            cols,
            rows: HashMap::new(),
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn is_valid_column(&self, col: i32) -> bool {
        col >= 0 && col < self.cols
    }

    fn row(&self, row: i32) -> Option<&Vec<Option<Cell>>> {
        self.rows.get(&row)
    }

    fn ensure_row(&mut self, row: i32) -> &mut Vec<Option<Cell>> {
        let cols = self.cols as usize;
        self.rows.entry(row).or_insert_with(|| vec![None; cols])
    }

    pub fn get_cell(&self, col: i32, row: i32) -> Option<&Cell> {
        if !self.is_valid_column(col) {
            return None;
        }
        self.row(row)?.get(col as usize)?.as_ref()
    }

    /// Stores a cell, creating the row if needed. Returns `false` if the
    /// column is out of bounds.
    pub fn set_cell(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        if !self.is_valid_column(col) {
            return false;
        }
        self.ensure_row(row)[col as usize] = Some(cell);
        true
    }

    /// Clears a cell. No-op when the row was never created.
    pub fn clear_cell(&mut self, col: i32, row: i32) {
        if !self.is_valid_column(col) {
            return;
        }
        if let Some(data) = self.rows.get_mut(&row) {
            data[col as usize] = None;
        }
    }

    pub fn is_empty(&self, col: i32, row: i32) -> bool {
        self.get_cell(col, row).is_none()
    }

    pub fn is_obstacle(&self, col: i32, row: i32) -> bool {
        self.get_cell(col, row).map_or(false, Cell::is_obstacle)
    }

    pub fn is_item(&self, col: i32, row: i32) -> bool {
        self.get_cell(col, row).map_or(false, Cell::is_item)
    }

    pub fn is_powerup(&self, col: i32, row: i32) -> bool {
        self.get_cell(col, row).map_or(false, Cell::is_powerup)
    }

    /// Finds the first row without an obstacle at `col`, scanning from the
    /// top or bottom of the given range. Used by the `gg`/`G` motions so the
    /// tractor never lands on a rock.
    pub fn find_safe_row_in_range(
        &self,
        col: i32,
        start_row: i32,
        end_row: i32,
        from_top: bool,
    ) -> Option<i32> {
        if from_top {
            (start_row..=end_row).find(|&row| !self.is_obstacle(col, row))
        } else {
            (start_row..=end_row).rev().find(|&row| !self.is_obstacle(col, row))
        }
    }

    /// Drops all rows strictly above (before) `row`. Memory bound only.
    pub fn cleanup_rows_before(&mut self, row: i32) {
        self.rows.retain(|&key, _| key >= row);
    }

    /// Drops all rows strictly below (after) `row`. Memory bound only.
    pub fn cleanup_rows_after(&mut self, row: i32) {
        self.rows.retain(|&key, _| key <= row);
    }

    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Whether the cell counts as part of a word. Seeds are excluded: a
    /// freshly changed stretch of field reads as blank until it regrows.
    fn in_word(&self, col: i32, row: i32) -> bool {
        self.get_cell(col, row).map_or(false, |c| !c.is_seed())
    }

    /// Word boundaries around `(col, row)`, or `None` when the cell bears no
    /// word.
    pub fn get_word_boundaries(&self, col: i32, row: i32) -> Option<Word> {
        if !self.in_word(col, row) {
            return None;
        }
        let mut start = col;
        let mut end = col;
        while start > 0 && self.in_word(start - 1, row) {
            start -= 1;
        }
        while end < self.cols - 1 && self.in_word(end + 1, row) {
            end += 1;
        }
        Some(Word { start, end, row })
    }

    /// The word at `(col, row)`, or the next word to the right when the cell
    /// is blank.
    pub fn find_word_at(&self, col: i32, row: i32) -> Option<Word> {
        if !self.is_valid_column(col) {
            return None;
        }
        if self.in_word(col, row) {
            return self.get_word_boundaries(col, row);
        }
        (col + 1..self.cols)
            .find(|&c| self.in_word(c, row))
            .and_then(|c| self.get_word_boundaries(c, row))
    }

    /// The next word in `direction` (1 = right, -1 = left), skipping the
    /// remainder of the current word first. `None` when the row edge is
    /// reached.
    pub fn find_next_word(&self, col: i32, row: i32, direction: i32) -> Option<Word> {
        if !self.is_valid_column(col) {
            return None;
        }
        let mut current = col;
        while self.is_valid_column(current) && self.in_word(current, row) {
            current += direction;
        }
        while self.is_valid_column(current) && !self.in_word(current, row) {
            current += direction;
        }
        if self.is_valid_column(current) {
            self.get_word_boundaries(current, row)
        } else {
            None
        }
    }

    /// The first word strictly left of `col`, or `None`.
    pub fn find_prev_word(&self, col: i32, row: i32) -> Option<Word> {
        if !self.is_valid_column(col) {
            return None;
        }
        let mut current = col - 1;
        while current >= 0 && !self.in_word(current, row) {
            current -= 1;
        }
        if current >= 0 {
            self.get_word_boundaries(current, row)
        } else {
            None
        }
    }

    /// Scans in `direction` for the first cell in the target category and
    /// returns its column. Used by `f`/`F`/`t`/`T`.
    pub fn find_object_on_row(
        &self,
        col: i32,
        row: i32,
        direction: i32,
        target: TargetKind,
    ) -> Option<i32> {
        let mut current = col + direction;
        while self.is_valid_column(current) {
            if let Some(cell) = self.get_cell(current, row) {
                if cell.matches(target) {
                    return Some(current);
                }
            }
            current += direction;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(points: i32) -> Cell {
        Cell::Item {
            kind: ItemKind::Tomato,
            points,
        }
    }

    fn grid_with_row(cells: &[(i32, Cell)]) -> Grid {
        let mut grid = Grid::new(24);
        for (col, cell) in cells {
            grid.set_cell(*col, 0, cell.clone());
        }
        grid
    }

    #[test]
    fn out_of_bounds_columns_are_null() {
        let mut grid = Grid::new(24);
        grid.set_cell(3, 5, item(1));
        assert!(grid.get_cell(-1, 5).is_none());
        assert!(grid.get_cell(24, 5).is_none());
        assert!(!grid.set_cell(24, 5, item(1)));
        assert!(!grid.set_cell(-1, 5, item(1)));
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut grid = Grid::new(24);
        assert!(grid.set_cell(3, -7, item(2)));
        assert_eq!(grid.get_cell(3, -7), Some(&item(2)));
        grid.clear_cell(3, -7);
        assert!(grid.get_cell(3, -7).is_none());
    }

    #[test]
    fn clear_on_missing_row_is_noop() {
        let mut grid = Grid::new(24);
        grid.clear_cell(0, 100);
        assert!(grid.get_cell(0, 100).is_none());
    }

    #[test]
    fn type_tests_false_on_missing_cell() {
        let grid = Grid::new(24);
        assert!(!grid.is_obstacle(0, 0));
        assert!(!grid.is_item(0, 0));
        assert!(!grid.is_powerup(0, 0));
        assert!(grid.is_empty(0, 0));
    }

    #[test]
    fn word_boundaries_expand_both_ways() {
        let grid = grid_with_row(&[(4, item(1)), (5, item(1)), (6, item(1))]);
        let word = grid.get_word_boundaries(5, 0).unwrap();
        assert_eq!(word, Word { start: 4, end: 6, row: 0 });
        assert!(grid.get_cell(3, 0).is_none());
        assert!(grid.get_cell(7, 0).is_none());
    }

    #[test]
    fn word_boundaries_null_on_empty_cell() {
        let grid = grid_with_row(&[(4, item(1))]);
        assert!(grid.get_word_boundaries(9, 0).is_none());
    }

    #[test]
    fn word_at_row_edges() {
        let grid = grid_with_row(&[(0, item(1)), (1, item(1)), (22, item(1)), (23, item(1))]);
        assert_eq!(
            grid.get_word_boundaries(0, 0),
            Some(Word { start: 0, end: 1, row: 0 })
        );
        assert_eq!(
            grid.get_word_boundaries(23, 0),
            Some(Word { start: 22, end: 23, row: 0 })
        );
    }

    #[test]
    fn seeds_do_not_join_words() {
        let mut grid = grid_with_row(&[(4, item(1)), (6, item(1))]);
        grid.set_cell(
            5,
            0,
            Cell::Seed {
                planted_at: 0,
                growth_time: 1000,
            },
        );
        assert_eq!(
            grid.get_word_boundaries(4, 0),
            Some(Word { start: 4, end: 4, row: 0 })
        );
        assert!(grid.get_word_boundaries(5, 0).is_none());
    }

    #[test]
    fn find_word_at_scans_right_when_blank() {
        let grid = grid_with_row(&[(8, item(1)), (9, item(1))]);
        let word = grid.find_word_at(2, 0).unwrap();
        assert_eq!(word.start, 8);
        assert_eq!(word.end, 9);
    }

    #[test]
    fn find_next_word_visits_in_order() {
        let grid = grid_with_row(&[
            (2, item(1)),
            (3, item(1)),
            (8, item(1)),
            (14, item(1)),
            (15, item(1)),
        ]);
        let first = grid.find_next_word(0, 0, 1).unwrap();
        assert_eq!(first.start, 2);
        let second = grid.find_next_word(first.start, 0, 1).unwrap();
        assert_eq!(second.start, 8);
        let third = grid.find_next_word(second.start, 0, 1).unwrap();
        assert_eq!(third.start, 14);
        assert!(grid.find_next_word(third.start, 0, 1).is_none());
    }

    #[test]
    fn find_prev_word_scans_left() {
        let grid = grid_with_row(&[(2, item(1)), (3, item(1)), (8, item(1))]);
        let word = grid.find_prev_word(8, 0).unwrap();
        assert_eq!(word, Word { start: 2, end: 3, row: 0 });
        assert!(grid.find_prev_word(2, 0).is_none());
    }

    #[test]
    fn find_object_on_row_matches_categories() {
        let mut grid = Grid::new(24);
        grid.set_cell(3, 0, Cell::Obstacle(ObstacleKind::Rock));
        grid.set_cell(5, 0, item(2));
        grid.set_cell(7, 0, Cell::Powerup(PowerupKind::GasCan));
        grid.set_cell(9, 0, Cell::Life);
        assert_eq!(grid.find_object_on_row(0, 0, 1, TargetKind::Rock), Some(3));
        assert_eq!(grid.find_object_on_row(0, 0, 1, TargetKind::Vegetable), Some(5));
        assert_eq!(grid.find_object_on_row(0, 0, 1, TargetKind::Gas), Some(7));
        assert_eq!(grid.find_object_on_row(0, 0, 1, TargetKind::Life), Some(9));
        assert_eq!(grid.find_object_on_row(9, 0, -1, TargetKind::Rock), Some(3));
        assert_eq!(grid.find_object_on_row(0, 0, -1, TargetKind::Rock), None);
    }

    #[test]
    fn safe_row_search_both_directions() {
        let mut grid = Grid::new(24);
        grid.set_cell(4, 0, Cell::Obstacle(ObstacleKind::Rock));
        grid.set_cell(4, 1, Cell::Obstacle(ObstacleKind::StonePile));
        assert_eq!(grid.find_safe_row_in_range(4, 0, 5, true), Some(2));
        assert_eq!(grid.find_safe_row_in_range(4, 0, 5, false), Some(5));
        grid.set_cell(4, 2, Cell::Obstacle(ObstacleKind::Rock));
        grid.set_cell(4, 3, Cell::Obstacle(ObstacleKind::Rock));
        grid.set_cell(4, 4, Cell::Obstacle(ObstacleKind::Rock));
        grid.set_cell(4, 5, Cell::Obstacle(ObstacleKind::Rock));
        assert_eq!(grid.find_safe_row_in_range(4, 0, 5, true), None);
    }

    #[test]
    fn cleanup_evicts_by_row_index() {
        let mut grid = Grid::new(24);
        for row in -3..=3 {
            grid.set_cell(0, row, item(1));
        }
        grid.cleanup_rows_after(1);
        assert!(grid.get_cell(0, 2).is_none());
        assert!(grid.get_cell(0, 1).is_some());
        grid.cleanup_rows_before(0);
        assert!(grid.get_cell(0, -1).is_none());
        assert!(grid.get_cell(0, 0).is_some());
    }

    #[test]
    fn reset_clears_all_rows() {
        let mut grid = grid_with_row(&[(4, item(1))]);
        grid.reset();
        assert!(grid.get_cell(4, 0).is_none());
    }

    #[test]
    fn cell_target_matching() {
        assert!(Cell::Obstacle(ObstacleKind::StonePile).matches(TargetKind::Rock));
        assert!(item(1).matches(TargetKind::Vegetable));
        assert!(Cell::Powerup(PowerupKind::GasCan).matches(TargetKind::Gas));
        assert!(Cell::Life.matches(TargetKind::Life));
        assert!(!Cell::Life.matches(TargetKind::Gas));
    }
}
