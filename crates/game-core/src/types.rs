use config::PlayerConfig;

/// Player entity: logical cell position plus life and fuel accounting.
///
/// Columns are clamped to the field width; rows are unbounded because the
/// camera scrolls the world without limit (rows go negative as the tractor
/// climbs).
#[derive(Debug)]
pub struct Tractor {
    pub col: i32,
    pub row: i32,
    pub lives: i32,
    pub gas_cans: i32,
    cols: i32,
    start_col: i32,
    start_row: i32,
    starting_lives: i32,
    starting_gas_cans: i32,
    max_lives: i32,
    max_gas_cans: i32,
}

impl Tractor {
    pub fn new(player: &PlayerConfig, cols: i32, start_col: i32, start_row: i32) -> Self {
        Self {
            col: start_col,
            row: start_row,
            lives: player.starting_lives,
            gas_cans: player.starting_gas_cans,
            cols,
            start_col,
            start_row,
            starting_lives: player.starting_lives,
            starting_gas_cans: player.starting_gas_cans,
            max_lives: player.max_lives,
            max_gas_cans: player.max_gas_cans,
        }
    }

    pub fn move_left(&mut self, count: i32) -> bool {
        let new_col = (self.col - count).max(0);
        let moved = new_col != self.col;
        self.col = new_col;
        moved
    }

    pub fn move_right(&mut self, count: i32) -> bool {
        let new_col = (self.col + count).min(self.cols - 1);
        let moved = new_col != self.col;
        self.col = new_col;
        moved
    }

    pub fn move_up(&mut self, count: i32) -> bool {
        self.row -= count;
        true
    }

    pub fn move_down(&mut self, count: i32) -> bool {
        self.row += count;
        true
    }

    pub fn move_to_start(&mut self) -> bool {
        let moved = self.col != 0;
        self.col = 0;
        moved
    }

    pub fn move_to_end(&mut self) -> bool {
        let moved = self.col != self.cols - 1;
        self.col = self.cols - 1;
        moved
    }

    /// Jumps to an arbitrary cell. Rejects out-of-range columns; any row is
    /// legal.
    pub fn set_position(&mut self, col: i32, row: i32) -> bool {
        if col < 0 || col >= self.cols {
            return false;
        }
        self.col = col;
        self.row = row;
        true
    }

    pub fn position(&self) -> (i32, i32) {
        (self.col, self.row)
    }

    pub fn add_life(&mut self) {
        self.lives = (self.lives + 1).min(self.max_lives);
    }

    /// Removes one life and returns the remainder.
    pub fn lose_life(&mut self) -> i32 {
        self.lives -= 1;
        self.lives
    }

    pub fn has_lives(&self) -> bool {
        self.lives > 0
    }

    pub fn add_gas_can(&mut self) {
        self.gas_cans = (self.gas_cans + 1).min(self.max_gas_cans);
    }

    /// Spends gas cans if enough are held.
    pub fn use_gas_cans(&mut self, count: i32) -> bool {
        if self.gas_cans >= count {
            self.gas_cans -= count;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.col = self.start_col;
        self.row = self.start_row;
        self.lives = self.starting_lives;
        self.gas_cans = self.starting_gas_cans;
    }
}
