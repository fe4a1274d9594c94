//! Game engine entry point.

mod collision;
mod commands;
mod effects;
mod input;
mod types;

use bracket_lib::prelude::*;

use audio::{AudioManager, Sound};
use config::GameConfig;
use ui::{ColorPalette, ThemeManager, UiContext};
use common::GameResult;
use grid::{Cell, Grid, ItemKind, ObstacleKind};
use storage::Storage;
use vim::{KeyInput, VimParser};

pub use effects::{EffectSink, NullEffects};
pub use types::Tractor;

pub const GRID_COLS: i32 = 24;
pub const GRID_ROWS: i32 = 18;
pub const CELL_SIZE: i32 = 48;
pub const CANVAS_HEIGHT: i32 = GRID_ROWS * CELL_SIZE;

const START_COL: i32 = GRID_COLS / 2;
const START_ROW: i32 = GRID_ROWS / 2 + 2;
const NAME_MAX_LEN: usize = 12;
const CONFIG_PATH: &str = "assets/config.json";
const STORAGE_PATH: &str = "vimtractor_save.json";

/// Session-level state machine. `Paused` covers both the help overlay and
/// command-line entry; the world is frozen but untouched while paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NameInput,
    Menu,
    Playing,
    Paused,
    GameOver,
    Leaderboard,
}

/// An in-progress rock transmutation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Transmutation {
    pub col: i32,
    pub row: i32,
    pub kind: ObstacleKind,
    pub started_at: u64,
}

/// The full game session: world, parser, resolver state and collaborators.
pub struct VimTractorGame {
    pub(crate) grid: Grid,
    pub(crate) tractor: Tractor,
    pub(crate) parser: VimParser,
    pub(crate) rng: RandomNumberGenerator,
    pub(crate) config: GameConfig,
    pub(crate) ui: UiContext,
    pub(crate) theme: ThemeManager,
    pub(crate) storage: Storage,
    pub(crate) audio: AudioManager,
    pub(crate) effects: Box<dyn EffectSink>,

    pub(crate) state: SessionState,
    pub(crate) previous_state: Option<SessionState>,
    pub(crate) paused_for_command: bool,
    pub(crate) score: i32,
    pub(crate) high_score: i32,

    // Session wall clock in ms; drives the parser count timer, seeds and
    // transmutation deadlines.
    pub(crate) clock_ms: f64,
    // Playing time in ms; drives scroll speed levels and survival points.
    pub(crate) game_time: f32,

    pub(crate) name_buffer: String,
    pub(crate) current_level: usize,
    pub(crate) scroll_interval: f32,
    pub(crate) camera_y: f32,
    pub(crate) last_spawned_row: i32,
    pub(crate) debug_mode: bool,
    pub(crate) transmute: Option<Transmutation>,
    pub(crate) game_over_at: Option<u64>,
}

impl VimTractorGame {
    /// Creates a session, loading config and persistence from their default
    /// locations (embedded / in-memory on WASM).
    pub fn new(seed: u64) -> GameResult<Self> {
        let config = {
            #[cfg(target_arch = "wasm32")]
            {
                GameConfig::load_embedded()?
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                GameConfig::load(CONFIG_PATH)?
            }
        };
        let storage = {
            #[cfg(target_arch = "wasm32")]
            {
                Storage::ephemeral()
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                Storage::load(STORAGE_PATH)?
            }
        };
        Ok(Self::from_parts(config, storage, seed))
    }

    fn from_parts(config: GameConfig, storage: Storage, seed: u64) -> Self {
        let parser = VimParser::new(config.ui.count_timeout_ms, config.ui.max_count);
        let tractor = Tractor::new(&config.player, GRID_COLS, START_COL, START_ROW);
        let state = if storage.player_name().is_some() {
            SessionState::Menu
        } else {
            SessionState::NameInput
        };
        let high_score = storage.high_score();
        let scroll_interval = config.speed.levels[0].interval_ms as f32;
        Self {
            grid: Grid::new(GRID_COLS),
            tractor,
            parser,
            rng: RandomNumberGenerator::seeded(seed),
            config,
            ui: UiContext::default(),
            theme: ThemeManager::default(),
            storage,
            audio: AudioManager::default(),
            effects: Box::new(NullEffects),
            state,
            previous_state: None,
            paused_for_command: false,
            score: 0,
            high_score,
            clock_ms: 0.0,
            game_time: 0.0,
            name_buffer: String::new(),
            current_level: 0,
            scroll_interval,
            camera_y: 0.0,
            last_spawned_row: 0,
            debug_mode: false,
            transmute: None,
            game_over_at: None,
        }
    }

    /// Installs a renderer-backed effect sink in place of the no-op default.
    pub fn set_effects(&mut self, effects: Box<dyn EffectSink>) {
        self.effects = effects;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub(crate) fn now(&self) -> u64 {
        self.clock_ms as u64
    }

    // Camera helpers. `camera_y` is the world-pixel position of the top of
    // the screen; it decreases as the field scrolls, revealing lower row
    // numbers, so the player climbs toward negative rows.
    pub(crate) fn visible_top_row(&self) -> i32 {
        (self.camera_y / CELL_SIZE as f32).floor() as i32
    }

    pub(crate) fn visible_bottom_row(&self) -> i32 {
        ((self.camera_y + CANVAS_HEIGHT as f32) / CELL_SIZE as f32).floor() as i32
    }

    pub(crate) fn navigable_bottom_row(&self) -> i32 {
        let margin = self.config.navigation.g_command_margin;
        self.visible_top_row() + GRID_ROWS - 1 - margin
    }

    pub(crate) fn tractor_screen_y(&self) -> f32 {
        self.tractor.row as f32 * CELL_SIZE as f32 - self.camera_y
    }

    /// Starts (or restarts) a run.
    pub fn start_game(&mut self) {
        self.state = SessionState::Playing;
        self.previous_state = None;
        self.paused_for_command = false;
        self.score = 0;
        self.game_time = 0.0;
        self.current_level = 0;
        self.scroll_interval = self.config.speed.levels[0].interval_ms as f32;
        self.camera_y = 0.0;
        self.game_over_at = None;

        self.grid.reset();
        self.tractor.reset();
        self.parser.reset();
        self.ui.reset();
        self.cancel_transmutation();

        self.last_spawned_row = spawner::spawn_initial_rows(
            &mut self.grid,
            &mut self.rng,
            &self.config,
            START_ROW,
            GRID_ROWS,
        );

        self.storage.increment_games_played();
        self.audio.stop_menu_jingle();
        self.audio.start_engine();
    }

    pub(crate) fn enter_menu(&mut self) {
        self.state = SessionState::Menu;
        self.audio.stop_engine();
        self.audio.start_menu_jingle();
    }

    pub(crate) fn show_leaderboard(&mut self) {
        self.state = SessionState::Leaderboard;
    }

    pub(crate) fn toggle_debug_mode(&mut self) -> bool {
        self.debug_mode = !self.debug_mode;
        self.ui.set_debug(self.debug_mode);
        self.debug_mode
    }

    /// Ends the run: the only fatal transition in the game.
    pub(crate) fn game_over(&mut self) {
        self.state = SessionState::GameOver;
        self.cancel_transmutation();
        self.audio.stop_engine();
        let _ = self.audio.play(Sound::Explosion);

        if let Some(name) = self.storage.player_name().map(str::to_string) {
            if self.score > 0 {
                self.storage.add_score(&name, self.score);
            }
        }
        if self.storage.update_high_score(self.score) {
            self.high_score = self.score;
        }

        self.game_over_at = Some(self.now() + self.config.ui.game_over_delay_ms);
        self.parser.reset();
    }

    /// One frame of world simulation. Only the `Playing` state mutates the
    /// world; everything else returns immediately.
    pub fn update(&mut self, delta_ms: f32) {
        self.ui.update(self.now());

        if let Some(at) = self.game_over_at {
            if self.now() >= at {
                self.game_over_at = None;
                let _ = self.audio.play(Sound::Death);
            }
        }

        if self.state != SessionState::Playing {
            return;
        }

        self.game_time += delta_ms;

        if let Some(target) = self.transmute {
            let elapsed = self.now().saturating_sub(target.started_at);
            if elapsed >= self.config.rock_transmute.duration_ms {
                self.complete_transmutation();
            }
        }

        let new_level = ((self.game_time as u64 / self.config.speed.level_duration_ms)
            as usize)
            .min(self.config.speed.levels.len() - 1);
        if new_level != self.current_level {
            self.current_level = new_level;
            self.scroll_interval = self.config.speed.levels[new_level].interval_ms as f32;
            let _ = self.audio.play(Sound::LevelUp);
        }

        if !self.debug_mode {
            let scroll_speed = CELL_SIZE as f32 / self.scroll_interval;
            self.camera_y -= delta_ms * scroll_speed;

            // Keep a full screen of rows spawned ahead of the camera.
            let difficulty =
                1.0 + self.game_time / self.config.difficulty.scaling_interval_ms as f32;
            let target_row = self.visible_top_row() - GRID_ROWS;
            while self.last_spawned_row > target_row {
                self.last_spawned_row -= 1;
                spawner::spawn_row(
                    &mut self.grid,
                    &mut self.rng,
                    &self.config,
                    self.last_spawned_row,
                    difficulty,
                );
            }

            let cleanup_row = self.visible_bottom_row() + 10;
            self.grid.cleanup_rows_after(cleanup_row);
        }

        let screen_y = self.tractor_screen_y();

        // Above the top edge: the field ran away underneath.
        if !self.debug_mode && screen_y < -(CELL_SIZE as f32) {
            self.cancel_transmutation();
            self.effects.shake();
            let remaining = self.tractor.lose_life();
            if remaining <= 0 {
                self.game_over();
                return;
            }
            let _ = self.audio.play(Sound::Crash);
            let safe_row = self.visible_top_row() + 2;
            self.tractor.set_position(self.tractor.col, safe_row);
        }

        // Touching the bottom edge: about to scroll off.
        let bottom_edge = (CANVAS_HEIGHT - CELL_SIZE) as f32;
        if !self.debug_mode && screen_y >= bottom_edge {
            self.cancel_transmutation();
            self.effects.shake();
            let remaining = self.tractor.lose_life();
            if remaining <= 0 {
                self.game_over();
                return;
            }
            let _ = self.audio.play(Sound::Crash);
            let safe_row = self.tractor.row - self.config.player.respawn_row_offset;
            self.tractor.set_position(self.tractor.col, safe_row);
        }

        let top = self.visible_top_row() - 5;
        let bottom = self.visible_bottom_row() + 5;
        let now = self.now();
        let grown = spawner::grow_seeds(
            &mut self.grid,
            &mut self.rng,
            &self.config,
            now,
            top,
            bottom,
        );
        for (col, row) in grown {
            self.effects.growth(col, row);
        }

        self.check_collisions();
        if self.state != SessionState::Playing {
            return;
        }

        // Survival trickle, once per elapsed second.
        let second = (self.game_time / 1000.0).floor();
        let prev_second = ((self.game_time - delta_ms) / 1000.0).floor();
        if second > prev_second {
            self.score += self.config.points.survival_per_second;
        }
    }

    fn handle_name_key(&mut self, key: VirtualKeyCode, shift: bool) {
        match input::translate(key, shift) {
            Some(KeyInput::Char(c))
                if c.is_ascii_alphanumeric() && self.name_buffer.len() < NAME_MAX_LEN =>
            {
                self.name_buffer.push(c);
            }
            Some(KeyInput::Backspace) => {
                self.name_buffer.pop();
            }
            Some(KeyInput::Enter) => {
                let name = self.name_buffer.trim().to_string();
                if !name.is_empty() {
                    self.storage.set_player_name(&name);
                    self.enter_menu();
                }
            }
            _ => {}
        }
    }

    fn draw_field(&self, ctx: &mut BTerm, palette: &ColorPalette) {
        let top = self.visible_top_row();
        for screen_row in 0..GRID_ROWS {
            let row = top + screen_row;
            for col in 0..GRID_COLS {
                let (glyph, color) = match self.grid.get_cell(col, row) {
                    Some(cell) => cell_style(cell, palette),
                    None => ('.', palette.field),
                };
                ctx.set(col, screen_row, color, RGB::named(BLACK), to_cp437(glyph));
            }
        }
        let tractor_row = self.tractor.row - top;
        if (0..GRID_ROWS).contains(&tractor_row) {
            ctx.set(
                self.tractor.col,
                tractor_row,
                palette.tractor,
                RGB::named(BLACK),
                to_cp437('@'),
            );
        }
    }

    fn render(&self, ctx: &mut BTerm) {
        ctx.cls();
        let palette = self.theme.palette();
        match self.state {
            SessionState::NameInput => ui::draw_name_input(ctx, &self.name_buffer),
            SessionState::Menu => {
                let name = self.storage.player_name().unwrap_or("farmer");
                ui::draw_menu(ctx, name);
            }
            SessionState::Leaderboard => {
                let name = self.storage.player_name().unwrap_or("");
                ui::draw_leaderboard(ctx, self.storage.leaderboard(), name);
            }
            SessionState::GameOver => ui::draw_game_over(ctx, self.score, self.high_score),
            SessionState::Playing | SessionState::Paused => {
                self.draw_field(ctx, &palette);
                let level_name = &self.config.speed.levels[self.current_level].name;
                self.ui
                    .draw_status(
                        ctx,
                        self.score,
                        self.high_score,
                        self.tractor.lives,
                        self.tractor.gas_cans,
                        level_name,
                    )
                    .ok();
                self.ui.draw_statusline(ctx, &palette).ok();
                self.ui.draw_help(ctx).ok();
            }
        }
    }
}

fn cell_style(cell: &Cell, palette: &ColorPalette) -> (char, RGB) {
    match cell {
        Cell::Obstacle(ObstacleKind::Rock) => ('#', palette.rock),
        Cell::Obstacle(ObstacleKind::StonePile) => ('M', palette.rock),
        Cell::Item { kind: ItemKind::Coin, .. } => ('$', palette.item),
        Cell::Item { kind: ItemKind::Gem, .. } => ('^', palette.item),
        Cell::Item { kind: ItemKind::Snail, .. } => ('s', palette.item),
        Cell::Item { kind: ItemKind::Mushroom, .. } => ('m', palette.item),
        Cell::Item { .. } => ('v', palette.item),
        Cell::Powerup(_) => ('F', palette.powerup),
        Cell::Life => ('+', palette.life),
        Cell::Seed { .. } => (',', palette.seed),
    }
}

impl GameState for VimTractorGame {
    fn tick(&mut self, ctx: &mut BTerm) {
        let delta = ctx.frame_time_ms;
        self.clock_ms += delta as f64;

        if let Some(key) = ctx.key {
            if self.state == SessionState::NameInput {
                self.handle_name_key(key, ctx.shift);
            } else if let Some(input) = input::translate(key, ctx.shift) {
                self.parser.handle_key(input, ctx.control, self.now());
            }
        }
        self.parser.expire(self.now());
        for command in self.parser.take_events() {
            self.handle_command(command);
        }

        self.update(delta);
        self.render(ctx);
    }
}

/// Runs the game loop using [`bracket-lib`].
pub fn run() -> BError {
    let mut seed_rng = RandomNumberGenerator::new();
    let game = VimTractorGame::new(seed_rng.rand::<u64>())?;

    let context = BTermBuilder::simple(80, 25)?
        .with_title("Vimtractor")
        .build()?;
    main_loop(context, game)
}
