//! Turn resolution: parsed commands become grid mutation, motion and
//! score/life/resource deltas.

use audio::Sound;
use common::{Direction, TargetKind};
use grid::{Cell, ItemKind, ObstacleKind};
use vim::{ActionKind, Command, ExCommand, HelpAction, Mode, Motion};

use crate::collision::{self, Pickup};
use crate::{SessionState, Transmutation, VimTractorGame, GRID_ROWS};

/// Totals gathered by the paid sweep commands (`dd`, `dG`, `cc`).
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SweepResult {
    pub points: i32,
    pub lives: i32,
    pub gas_cans: i32,
}

impl VimTractorGame {
    /// Entry point for every parser event.
    pub fn handle_command(&mut self, command: Command) {
        match &command {
            Command::Move { motion, .. } => self.storage.track_command(motion.name()),
            Command::Action { kind, .. } => self.storage.track_command(kind.name()),
            _ => {}
        }

        match &command {
            Command::Mode(mode) => {
                self.on_mode_change(*mode);
                return;
            }
            Command::Count(count) => {
                self.ui.update_count(*count);
                return;
            }
            Command::Buffer(buffer) => {
                let buffer = buffer.clone();
                self.ui.update_command_buffer(&buffer);
                return;
            }
            Command::Help(HelpAction::Toggle) => {
                self.toggle_help();
                return;
            }
            Command::Help(HelpAction::Close) => {
                if self.ui.is_help_visible() {
                    self.ui.hide_help();
                    self.resume_if_paused_for_help();
                    return;
                }
                // No help open: Escape falls through to the state handlers.
            }
            _ => {}
        }

        if self.ui.is_help_visible() {
            return;
        }

        match self.state {
            // Name entry happens at the raw input layer.
            SessionState::NameInput => return,
            SessionState::Leaderboard => {
                if matches!(command, Command::Help(HelpAction::Close)) {
                    self.enter_menu();
                }
                return;
            }
            SessionState::Menu => {
                if !self.audio.menu_jingle_running() {
                    self.audio.start_menu_jingle();
                }
                if matches!(command, Command::Leaderboard) {
                    self.show_leaderboard();
                } else {
                    self.start_game();
                }
                return;
            }
            SessionState::GameOver => {
                match command {
                    Command::Leaderboard => self.show_leaderboard(),
                    Command::CommandLine(ExCommand::Restart) => self.start_game(),
                    Command::Enter | Command::Move { .. } | Command::Action { .. } => {
                        self.enter_menu()
                    }
                    _ => {}
                }
                return;
            }
            SessionState::Paused => return,
            SessionState::Playing => {}
        }

        match command {
            Command::DebugToggle => {
                self.toggle_debug_mode();
                return;
            }
            Command::Move { motion, count } => self.handle_move(motion, count as i32),
            Command::Action { kind, count } => self.handle_action(kind, count as i32),
            Command::CommandLine(ex) => self.handle_command_line(ex),
            _ => {}
        }

        self.ui.update_count(0);
    }

    fn on_mode_change(&mut self, mode: Mode) {
        self.ui.set_mode(mode);
        match mode {
            Mode::Normal => {
                self.ui.update_count(0);
                if self.paused_for_command
                    && self.previous_state == Some(SessionState::Playing)
                {
                    self.state = SessionState::Playing;
                    self.paused_for_command = false;
                    self.audio.resume_engine();
                }
            }
            Mode::Command => {
                // Freeze the world so the tractor does not scroll off while
                // the player types.
                if self.state == SessionState::Playing {
                    self.previous_state = Some(self.state);
                    self.state = SessionState::Paused;
                    self.paused_for_command = true;
                    self.audio.pause_engine();
                }
                let _ = self.audio.play(Sound::CommandMode);
            }
        }
    }

    fn toggle_help(&mut self) {
        let opened = self.ui.toggle_help();
        if opened && self.state == SessionState::Playing {
            self.previous_state = Some(self.state);
            self.state = SessionState::Paused;
            self.audio.pause_engine();
        } else if !opened {
            self.resume_if_paused_for_help();
        }
    }

    fn resume_if_paused_for_help(&mut self) {
        if self.state == SessionState::Paused
            && !self.paused_for_command
            && self.previous_state == Some(SessionState::Playing)
        {
            self.state = SessionState::Playing;
            self.audio.resume_engine();
        }
    }

    /// Applies a motion. Word motions are purely navigational: nothing is
    /// collected on the way.
    pub(crate) fn handle_move(&mut self, motion: Motion, count: i32) {
        if self.transmute.is_some() {
            return;
        }

        let col = self.tractor.col;
        let row = self.tractor.row;
        let moved = match motion {
            Motion::Left => self.tractor.move_left(count),
            Motion::Right => self.tractor.move_right(count),
            Motion::Up => self.tractor.move_up(count),
            Motion::Down => self.tractor.move_down(count),
            Motion::LineStart => self.tractor.move_to_start(),
            Motion::LineEnd => self.tractor.move_to_end(),
            Motion::FileStart => {
                let top = self.visible_top_row();
                let bottom = self.visible_bottom_row();
                match self.grid.find_safe_row_in_range(col, top, bottom, true) {
                    Some(target) => self.tractor.set_position(col, target),
                    None => false,
                }
            }
            Motion::FileEnd => {
                // G stops short of the dangerous bottom edge.
                let top = self.visible_top_row();
                let bottom = self.navigable_bottom_row();
                match self.grid.find_safe_row_in_range(col, top, bottom, false) {
                    Some(target) => self.tractor.set_position(col, target),
                    None => false,
                }
            }
            Motion::WordNext => {
                let target = if !self.grid.is_empty(col, row) {
                    self.grid.find_next_word(col, row, 1)
                } else {
                    self.grid.find_word_at(col, row)
                };
                match target {
                    Some(word) => self.tractor.set_position(word.start, row),
                    None => self.tractor.set_position(self.grid.cols() - 1, row),
                }
            }
            Motion::WordPrev => match self.grid.find_prev_word(col, row) {
                Some(word) => self.tractor.set_position(word.start, row),
                None => self.tractor.set_position(0, row),
            },
            Motion::WordEnd => {
                let current = self.grid.get_word_boundaries(col, row);
                let target = match current {
                    Some(word) if col < word.end => Some(word.end),
                    _ => self.grid.find_next_word(col, row, 1).map(|w| w.end),
                };
                match target {
                    Some(target) => self.tractor.set_position(target, row),
                    None => false,
                }
            }
            Motion::WordEndPrev => match self.grid.find_prev_word(col, row) {
                Some(word) => self.tractor.set_position(word.end, row),
                None => false,
            },
            Motion::PageDown => self.tractor.move_down(GRID_ROWS / 2),
            Motion::PageUp => self.tractor.move_up(GRID_ROWS / 2),
            Motion::FindForward(target) => self.find_on_row(target, 1, false),
            Motion::FindBack(target) => self.find_on_row(target, -1, false),
            Motion::TillForward(target) => self.find_on_row(target, 1, true),
            Motion::TillBack(target) => self.find_on_row(target, -1, true),
        };

        if moved {
            let _ = self.audio.play(Sound::Move);
            self.check_collisions();
        }
    }

    /// Shared `f`/`F`/`t`/`T` destination logic. Rocks cannot be stood on,
    /// so `f`/`F` stop adjacent to them; `till` always stops one cell short
    /// and requires room to do so.
    fn find_on_row(&mut self, target: TargetKind, direction: i32, till: bool) -> bool {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let Some(found) = self.grid.find_object_on_row(col, row, direction, target) else {
            return false;
        };
        if till {
            if (found - col) * direction <= 1 {
                return false;
            }
            return self.tractor.set_position(found - direction, row);
        }
        let dest = if target == TargetKind::Rock {
            found - direction
        } else {
            found
        };
        self.tractor.set_position(dest, row)
    }

    pub(crate) fn handle_action(&mut self, kind: ActionKind, count: i32) {
        match kind {
            ActionKind::DeleteLine => self.execute_delete_line(),
            ActionKind::DeleteAll => self.execute_delete_all(),
            ActionKind::DeleteWord => self.execute_delete_word(),
            ActionKind::DeleteWordEnd => self.execute_delete_word_end(),
            // The aggressive variant shares plain `db` semantics.
            ActionKind::DeleteBack | ActionKind::DeleteBackAggressive => {
                self.execute_delete_back()
            }
            ActionKind::DeleteChar => {
                let col = self.tractor.col;
                let row = self.tractor.row;
                let end = (col + count - 1).min(self.grid.cols() - 1);
                self.delete_range_and_score(col, end, row);
                if end > col {
                    self.effects.dash((col, row), (end, row));
                }
            }
            ActionKind::DeleteCharBack => {
                let col = self.tractor.col;
                let row = self.tractor.row;
                let start = (col - count).max(0);
                if start < col {
                    self.delete_range_and_score(start, col - 1, row);
                    self.effects.dash((col, row), (start, row));
                }
            }
            ActionKind::DeleteToLineStart => {
                let col = self.tractor.col;
                let row = self.tractor.row;
                if col > 0 {
                    self.delete_range_and_score(0, col - 1, row);
                    self.effects.dash((col, row), (0, row));
                }
            }
            ActionKind::DeleteToLineEnd => {
                let col = self.tractor.col;
                let row = self.tractor.row;
                let end = self.grid.cols() - 1;
                if col < end {
                    self.delete_range_and_score(col + 1, end, row);
                    self.effects.dash((col, row), (end, row));
                }
            }
            ActionKind::ChangeWord => self.execute_change_word(),
            ActionKind::ChangeWordEnd => self.execute_change_word_end(),
            ActionKind::ChangeBack => self.execute_change_back(),
            ActionKind::ChangeLine => self.execute_change_line(),
            ActionKind::ReplaceRock(direction) => self.execute_replace_rock(direction),
            // Accepted for Vim muscle memory; no history yet.
            ActionKind::Undo | ActionKind::Redo => {}
        }
    }

    /// `dd`: clear the current row, collecting everything in it. Costs gas.
    fn execute_delete_line(&mut self) {
        let cost = self.config.powerup_costs.dd;
        if self.tractor.gas_cans < cost {
            return;
        }
        let _ = self.audio.play(Sound::Powerup);
        let row = self.tractor.row;
        self.effects.row_smoke(row);
        let result = self.clear_row_and_collect(row);
        self.tractor.use_gas_cans(cost);
        self.apply_sweep(result);
    }

    /// `dG`: clear the whole visible screen at a point discount. Costs gas.
    fn execute_delete_all(&mut self) {
        let cost = self.config.powerup_costs.dg;
        if self.tractor.gas_cans < cost {
            return;
        }
        let _ = self.audio.play(Sound::Powerup);
        let top = self.visible_top_row();
        let bottom = self.visible_bottom_row();
        self.effects.screen_smoke(top, bottom);
        let result = self.clear_screen_and_collect(top, bottom);
        self.tractor.use_gas_cans(cost);
        self.apply_sweep(result);
    }

    /// `cc`: harvest the current row and sow seeds in its place. Costs gas.
    fn execute_change_line(&mut self) {
        let cost = self.config.powerup_costs.cc;
        if self.tractor.gas_cans < cost {
            return;
        }
        let _ = self.audio.play(Sound::Powerup);
        let row = self.tractor.row;
        self.effects.row_smoke(row);
        let result = self.change_row_and_plant_seeds(row);
        self.tractor.use_gas_cans(cost);
        self.apply_sweep(result);
    }

    fn apply_sweep(&mut self, result: SweepResult) {
        self.score += result.points;
        for _ in 0..result.lives {
            self.tractor.add_life();
        }
        for _ in 0..result.gas_cans {
            self.tractor.add_gas_can();
        }
        if result.points > 0 {
            let _ = self.audio.play(Sound::Collect);
        }
        if result.lives > 0 {
            let _ = self.audio.play(Sound::ExtraLife);
        }
        if result.gas_cans > 0 {
            let _ = self.audio.play(Sound::GasCan);
        }
    }

    /// Row sweep for `dd`. Obstacles are simply bulldozed: the gas can paid
    /// for them.
    pub(crate) fn clear_row_and_collect(&mut self, row: i32) -> SweepResult {
        let mut result = SweepResult::default();
        for col in 0..self.grid.cols() {
            let Some(cell) = self.grid.get_cell(col, row).cloned() else {
                continue;
            };
            match cell {
                Cell::Item { points, .. } => {
                    result.points += points;
                    self.effects.collect(col, row);
                }
                Cell::Life => result.lives += 1,
                Cell::Powerup(_) => result.gas_cans += 1,
                Cell::Obstacle(_) | Cell::Seed { .. } => {}
            }
            self.grid.clear_cell(col, row);
        }
        result
    }

    /// Screen sweep for `dG`; item points are scaled down to offset its
    /// power.
    pub(crate) fn clear_screen_and_collect(&mut self, top: i32, bottom: i32) -> SweepResult {
        let mut total_points = 0;
        let mut result = SweepResult::default();
        for row in top..=bottom {
            for col in 0..self.grid.cols() {
                let Some(cell) = self.grid.get_cell(col, row).cloned() else {
                    continue;
                };
                match cell {
                    Cell::Item { points, .. } => {
                        total_points += points;
                        self.effects.collect(col, row);
                    }
                    Cell::Life => result.lives += 1,
                    Cell::Powerup(_) => result.gas_cans += 1,
                    Cell::Obstacle(_) | Cell::Seed { .. } => {}
                }
                self.grid.clear_cell(col, row);
            }
        }
        result.points =
            (total_points as f32 * self.config.points.dg_multiplier).floor() as i32;
        result
    }

    /// Row sweep for `cc`: like `dd` but leaves seeds alone and sows a seed
    /// in every cleared cell.
    pub(crate) fn change_row_and_plant_seeds(&mut self, row: i32) -> SweepResult {
        let mut result = SweepResult::default();
        for col in 0..self.grid.cols() {
            if let Some(cell) = self.grid.get_cell(col, row).cloned() {
                match cell {
                    Cell::Seed { .. } => continue,
                    Cell::Item { points, .. } => {
                        result.points += points;
                        self.effects.collect(col, row);
                        self.effects.score_popup(col, row, points);
                    }
                    Cell::Life => result.lives += 1,
                    Cell::Powerup(_) => result.gas_cans += 1,
                    Cell::Obstacle(_) => {}
                }
            }
            self.grid.clear_cell(col, row);
            self.plant_seed(col, row);
        }
        result
    }

    /// `dw`: delete from the cursor up to (not including) the next word.
    fn execute_delete_word(&mut self) {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let Some(current) = self.grid.find_word_at(col, row) else {
            return;
        };
        let next = self.grid.find_next_word(current.end, row, 1);
        let end = next.map_or(current.end, |word| word.start - 1);
        self.delete_range_and_score(col, end, row);
        // Cursor stays put; the dash is presentation only.
        if end > col {
            self.effects.dash((col, row), (end, row));
        }
    }

    /// `de`: delete through the end of the current (or next) word.
    fn execute_delete_word_end(&mut self) {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let current = self.grid.get_word_boundaries(col, row);
        let target = match current {
            Some(word) if col < word.end => Some(word.end),
            _ => self.grid.find_next_word(col, row, 1).map(|w| w.end),
        };
        let Some(end) = target else {
            return;
        };
        self.delete_range_and_score(col, end, row);
        if end > col {
            self.effects.dash((col, row), (end, row));
        }
    }

    /// `db`/`dB`: delete back to the start of the previous word; the cursor
    /// follows the deletion.
    fn execute_delete_back(&mut self) {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let start = self.grid.find_prev_word(col, row).map_or(0, |w| w.start);
        if start < col {
            self.delete_range_and_score(start, col - 1, row);
            self.tractor.set_position(start, row);
        }
    }

    /// `cw`: harvest to the start of the next word, sowing seeds behind.
    fn execute_change_word(&mut self) {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let Some(current) = self.grid.find_word_at(col, row) else {
            return;
        };
        let next = self.grid.find_next_word(current.end, row, 1);
        let end = next.map_or(current.end, |word| word.start - 1);
        self.collect_and_plant_seeds(col, end, row);
        if end > col {
            self.effects.dash((col, row), (end, row));
        }
    }

    /// `ce`: harvest through the word end, sowing seeds behind.
    fn execute_change_word_end(&mut self) {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let current = self.grid.get_word_boundaries(col, row);
        let target = match current {
            Some(word) if col < word.end => Some(word.end),
            _ => self.grid.find_next_word(col, row, 1).map(|w| w.end),
        };
        let Some(end) = target else {
            return;
        };
        self.collect_and_plant_seeds(col, end, row);
        if end > col {
            self.effects.dash((col, row), (end, row));
        }
    }

    /// `cb`: harvest back to the previous word, sowing seeds behind. Unlike
    /// `db`, the cursor stays put after the backward dash.
    fn execute_change_back(&mut self) {
        let col = self.tractor.col;
        let row = self.tractor.row;
        let start = self.grid.find_prev_word(col, row).map_or(0, |w| w.start);
        if start < col {
            self.collect_and_plant_seeds(start, col - 1, row);
            self.effects.dash((col, row), (start, row));
        }
    }

    /// Unpaid range delete. Items score, gas cans and lives are banked,
    /// obstacles each cost a life. Seeds are untouchable. Hitting zero lives
    /// aborts the sweep mid-range.
    pub(crate) fn delete_range_and_score(&mut self, from: i32, to: i32, row: i32) {
        let min = from.min(to);
        let max = from.max(to);
        let mut items = false;
        let mut powerups = false;
        let mut lives = false;

        for col in min..=max {
            let Some(cell) = self.grid.get_cell(col, row).cloned() else {
                continue;
            };
            match cell {
                Cell::Seed { .. } => continue,
                Cell::Item { points, .. } => {
                    self.score += points;
                    items = true;
                    self.effects.collect(col, row);
                    self.effects.score_popup(col, row, points);
                }
                Cell::Obstacle(_) => {
                    self.effects.explosion(col, row);
                    let remaining = self.tractor.lose_life();
                    let _ = self.audio.play(Sound::Crash);
                    if remaining <= 0 {
                        self.grid.clear_cell(col, row);
                        self.game_over();
                        return;
                    }
                }
                Cell::Powerup(_) => {
                    self.tractor.add_gas_can();
                    powerups = true;
                    self.effects.collect(col, row);
                }
                Cell::Life => {
                    self.tractor.add_life();
                    lives = true;
                    self.effects.collect(col, row);
                }
            }
            self.grid.clear_cell(col, row);
        }

        if items {
            let _ = self.audio.play(Sound::Collect);
        }
        if powerups {
            let _ = self.audio.play(Sound::GasCan);
        }
        if lives {
            let _ = self.audio.play(Sound::ExtraLife);
        }
    }

    /// Range harvest for the change commands: like
    /// [`delete_range_and_score`](Self::delete_range_and_score) but every
    /// cleared cell (including empty ones) is sown with a seed. Existing
    /// seeds are skipped outright.
    pub(crate) fn collect_and_plant_seeds(&mut self, from: i32, to: i32, row: i32) {
        let min = from.min(to);
        let max = from.max(to);
        let mut items = false;
        let mut powerups = false;
        let mut lives = false;

        for col in min..=max {
            if let Some(cell) = self.grid.get_cell(col, row).cloned() {
                match cell {
                    Cell::Seed { .. } => continue,
                    Cell::Item { points, .. } => {
                        self.score += points;
                        items = true;
                        self.effects.collect(col, row);
                        self.effects.score_popup(col, row, points);
                    }
                    Cell::Obstacle(_) => {
                        self.effects.explosion(col, row);
                        let remaining = self.tractor.lose_life();
                        let _ = self.audio.play(Sound::Crash);
                        if remaining <= 0 {
                            self.grid.clear_cell(col, row);
                            self.game_over();
                            return;
                        }
                    }
                    Cell::Powerup(_) => {
                        self.tractor.add_gas_can();
                        powerups = true;
                        self.effects.collect(col, row);
                    }
                    Cell::Life => {
                        self.tractor.add_life();
                        lives = true;
                        self.effects.collect(col, row);
                    }
                }
            }
            self.grid.clear_cell(col, row);
            self.plant_seed(col, row);
        }

        if items {
            let _ = self.audio.play(Sound::Collect);
        }
        if powerups {
            let _ = self.audio.play(Sound::GasCan);
        }
        if lives {
            let _ = self.audio.play(Sound::ExtraLife);
        }
    }

    pub(crate) fn plant_seed(&mut self, col: i32, row: i32) {
        let now = self.now();
        self.grid.set_cell(
            col,
            row,
            Cell::Seed {
                planted_at: now,
                growth_time: self.config.seeds.growth_time_ms,
            },
        );
    }

    /// `r` + direction: begin transmuting an adjacent obstacle.
    fn execute_replace_rock(&mut self, direction: Direction) {
        if self.transmute.is_some() {
            return;
        }
        let (dx, dy) = direction.delta();
        let col = self.tractor.col + dx;
        let row = self.tractor.row + dy;
        if let Some(Cell::Obstacle(kind)) = self.grid.get_cell(col, row).cloned() {
            self.start_transmutation(col, row, kind);
        }
    }

    pub(crate) fn start_transmutation(&mut self, col: i32, row: i32, kind: ObstacleKind) {
        self.transmute = Some(Transmutation {
            col,
            row,
            kind,
            started_at: self.now(),
        });
        self.effects.transmute_started(col, row);
        self.audio.start_transmute_work();
    }

    /// Resolves a finished transmutation: stone piles are traps, plain rocks
    /// may yield a bonus item.
    pub(crate) fn complete_transmutation(&mut self) {
        let Some(target) = self.transmute.take() else {
            return;
        };
        match target.kind {
            ObstacleKind::StonePile => {
                let penalty = self.config.rock_transmute.trap_penalty;
                self.score = (self.score + penalty).max(0);
                let _ = self.audio.play(Sound::Penalty);
                self.grid.clear_cell(target.col, target.row);
                self.effects.smoke(target.col, target.row, true);
                self.effects.score_popup(target.col, target.row, penalty);
            }
            ObstacleKind::Rock => {
                let roll: f32 = self.rng.range(0.0, 1.0);
                if roll < self.config.rock_transmute.success_chance {
                    let kind = if self.rng.range(0, 2) == 0 {
                        ItemKind::Snail
                    } else {
                        ItemKind::Mushroom
                    };
                    let cell = spawner::item_cell(&self.config, kind);
                    self.grid.set_cell(target.col, target.row, cell);
                    self.effects.growth(target.col, target.row);
                    let _ = self.audio.play(Sound::Collect);
                } else {
                    self.grid.clear_cell(target.col, target.row);
                    self.effects.smoke(target.col, target.row, false);
                }
            }
        }
        self.effects.transmute_stopped();
        self.audio.stop_transmute_work();
    }

    /// Drops an in-progress transmutation without side effects. Safe to call
    /// from any site, any number of times.
    pub(crate) fn cancel_transmutation(&mut self) {
        if self.transmute.take().is_some() {
            self.effects.transmute_stopped();
        }
        self.audio.stop_transmute_work();
    }

    fn handle_command_line(&mut self, ex: ExCommand) {
        match ex {
            ExCommand::Quit | ExCommand::SaveQuit => self.game_over(),
            ExCommand::Restart => self.start_game(),
            ExCommand::Drabda => {
                let on = self.theme.toggle_drabda();
                let text = if on { "Drabda Mode: ON" } else { "Drabda Mode: OFF" };
                let now = self.now();
                self.ui.show_message(text, now, 1500);
            }
            ExCommand::Unknown(raw) => {
                let now = self.now();
                let duration = self.config.ui.message_time_ms;
                let text = format!("Unknown command: {}", raw);
                self.ui.show_message(&text, now, duration);
            }
        }
    }

    /// Resolves whatever the tractor is standing on.
    pub(crate) fn check_collisions(&mut self) {
        let outcome = collision::process(&mut self.grid, self.tractor.col, self.tractor.row);

        if outcome.obstacle {
            self.effects.shake();
            self.effects.explosion(self.tractor.col, self.tractor.row);
            let remaining = self.tractor.lose_life();
            if remaining <= 0 {
                self.game_over();
                return;
            }
            let _ = self.audio.play(Sound::Crash);
            // The crash flattened the rock.
            self.grid.clear_cell(self.tractor.col, self.tractor.row);
        }

        if let Some(pickup) = outcome.pickup {
            self.effects.collect(self.tractor.col, self.tractor.row);
            match pickup {
                Pickup::GasCan => {
                    let _ = self.audio.play(Sound::GasCan);
                    self.tractor.add_gas_can();
                }
                Pickup::Life => {
                    let _ = self.audio.play(Sound::ExtraLife);
                    self.tractor.add_life();
                }
            }
        }
    }
}
