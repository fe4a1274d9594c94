//! HUD context and drawing helpers.

use bracket_lib::prelude::{BTerm, RGB, BLACK, CYAN, GOLD, GRAY, GREEN, MAGENTA, ORANGE, RED, WHITE, YELLOW};
use common::GameResult;
use storage::ScoreEntry;
use vim::Mode;

const MAP_ROWS: i32 = 18;
const STATUS_Y: i32 = MAP_ROWS + 1;
const PANEL_X: i32 = 26;

/// Color palette for map and entity rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    pub field: RGB,
    pub rock: RGB,
    pub item: RGB,
    pub powerup: RGB,
    pub life: RGB,
    pub seed: RGB,
    pub tractor: RGB,
    pub accent: RGB,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            field: RGB::named(GRAY),
            rock: RGB::named(ORANGE),
            item: RGB::named(GREEN),
            powerup: RGB::named(CYAN),
            life: RGB::named(RED),
            seed: RGB::named(YELLOW),
            tractor: RGB::named(GOLD),
            accent: RGB::named(WHITE),
        }
    }
}

impl ColorPalette {
    /// High-saturation alternate palette for drabda mode.
    pub fn drabda() -> Self {
        Self {
            field: RGB::named(MAGENTA),
            rock: RGB::named(WHITE),
            item: RGB::named(YELLOW),
            powerup: RGB::named(GREEN),
            life: RGB::named(CYAN),
            seed: RGB::named(ORANGE),
            tractor: RGB::named(MAGENTA),
            accent: RGB::named(GOLD),
        }
    }
}

/// Presentation theme switch driven by the `:drabda` command.
#[derive(Debug, Default)]
pub struct ThemeManager {
    drabda: bool,
}

impl ThemeManager {
    /// Flips drabda mode and returns the new state.
    pub fn toggle_drabda(&mut self) -> bool {
        self.drabda = !self.drabda;
        self.drabda
    }

    pub fn is_drabda(&self) -> bool {
        self.drabda
    }

    pub fn palette(&self) -> ColorPalette {
        if self.drabda {
            ColorPalette::drabda()
        } else {
            ColorPalette::default()
        }
    }
}

/// HUD state fed by parser events.
pub struct UiContext {
    mode: Mode,
    count: u32,
    command_buffer: String,
    message: Option<(String, u64)>,
    help_visible: bool,
    debug: bool,
}

impl Default for UiContext {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            count: 0,
            command_buffer: String::new(),
            message: None,
            help_visible: false,
            debug: false,
        }
    }
}

impl UiContext {
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn update_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn update_command_buffer(&mut self, buffer: &str) {
        self.command_buffer = buffer.to_string();
    }

    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// Shows a transient message until `now_ms + duration_ms`.
    pub fn show_message(&mut self, text: &str, now_ms: u64, duration_ms: u64) {
        self.message = Some((text.to_string(), now_ms + duration_ms));
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }

    /// Expires the transient message.
    pub fn update(&mut self, now_ms: u64) {
        if let Some((_, until)) = &self.message {
            if now_ms >= *until {
                self.message = None;
            }
        }
    }

    /// Flips the help overlay; returns `true` when it just opened.
    pub fn toggle_help(&mut self) -> bool {
        self.help_visible = !self.help_visible;
        self.help_visible
    }

    pub fn hide_help(&mut self) {
        self.help_visible = false;
    }

    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn reset(&mut self) {
        self.mode = Mode::Normal;
        self.count = 0;
        self.command_buffer.clear();
        self.message = None;
        self.help_visible = false;
    }

    /// Vim-style status line: mode, pending count, `:` buffer, messages.
    pub fn draw_statusline(&self, ctx: &mut BTerm, palette: &ColorPalette) -> GameResult<()> {
        let mode = match self.mode {
            Mode::Normal => "-- NORMAL --",
            Mode::Command => "-- COMMAND --",
        };
        ctx.print_color(0, STATUS_Y, palette.accent, RGB::named(BLACK), mode);
        if self.count > 0 {
            ctx.print(15, STATUS_Y, format!("{}", self.count));
        }
        if self.mode == Mode::Command {
            ctx.print(0, STATUS_Y + 1, format!(":{}", self.command_buffer));
        } else if let Some((text, _)) = &self.message {
            ctx.print(0, STATUS_Y + 1, text);
        }
        if self.debug {
            ctx.print_color(20, STATUS_Y, RGB::named(RED), RGB::named(BLACK), "[DEBUG]");
        }
        Ok(())
    }

    /// Score / lives / gas panel beside the field.
    pub fn draw_status(
        &self,
        ctx: &mut BTerm,
        score: i32,
        high_score: i32,
        lives: i32,
        gas_cans: i32,
        level_name: &str,
    ) -> GameResult<()> {
        ctx.print(PANEL_X, 1, format!("Score: {}", score));
        ctx.print(PANEL_X, 2, format!("High:  {}", high_score));
        ctx.print(PANEL_X, 3, format!("Lives: {}", lives));
        ctx.print(PANEL_X, 4, format!("Gas:   {}", gas_cans));
        ctx.print(PANEL_X, 5, format!("Speed: {}", level_name));
        Ok(())
    }

    /// Draws the help overlay when visible.
    pub fn draw_help(&self, ctx: &mut BTerm) -> GameResult<()> {
        if !self.help_visible {
            return Ok(());
        }
        for (i, line) in help_strings().iter().enumerate() {
            ctx.print_centered(3 + i as i32, line);
        }
        Ok(())
    }
}

pub fn draw_menu(ctx: &mut BTerm, player: &str) {
    ctx.print_centered(8, "VIMTRACTOR");
    ctx.print_centered(10, format!("Welcome back, {}", player));
    ctx.print_centered(12, "Press any key to plow");
    ctx.print_centered(14, "Tab: leaderboard   ?: help");
}

pub fn draw_name_input(ctx: &mut BTerm, buffer: &str) {
    ctx.print_centered(8, "VIMTRACTOR");
    ctx.print_centered(10, "Type your name, then Enter:");
    ctx.print_centered(12, format!("[{}]", buffer));
}

pub fn draw_game_over(ctx: &mut BTerm, score: i32, high_score: i32) {
    ctx.print_centered(8, "GAME OVER");
    ctx.print_centered(10, format!("Final score: {}", score));
    ctx.print_centered(11, format!("High score:  {}", high_score));
    ctx.print_centered(13, "Enter: menu   :restart   Tab: leaderboard");
}

pub fn draw_leaderboard(ctx: &mut BTerm, entries: &[ScoreEntry], player: &str) {
    ctx.print_centered(4, "LEADERBOARD");
    if entries.is_empty() {
        ctx.print_centered(7, "(no scores yet)");
    }
    for (i, entry) in entries.iter().enumerate() {
        let marker = if entry.name == player { ">" } else { " " };
        ctx.print_centered(
            6 + i as i32,
            format!("{} {:2}. {:<12} {:>6}", marker, i + 1, entry.name, entry.score),
        );
    }
    ctx.print_centered(18, "Esc: back to menu");
}

fn help_strings() -> Vec<String> {
    vec![
        "Vimtractor controls:".to_string(),
        "h j k l: move     w b e ge: word motions".to_string(),
        "0 $: line start/end   gg G: field top/bottom".to_string(),
        "f/F/t/T + r/v/g/l: find rock/veg/gas/life".to_string(),
        "x X: harvest cell     dw de db: harvest word".to_string(),
        "dd: clear row (gas)   dG: clear screen (gas)".to_string(),
        "cw ce cb cc: harvest and sow seeds".to_string(),
        "r + h/j/k/l: transmute adjacent rock".to_string(),
        ": command line   :q :restart :help :drabda".to_string(),
        "?: toggle this help   Esc: close".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_and_count_tracking() {
        let mut ui = UiContext::default();
        assert_eq!(ui.mode(), Mode::Normal);
        ui.set_mode(Mode::Command);
        ui.update_count(12);
        assert_eq!(ui.mode(), Mode::Command);
        assert_eq!(ui.count(), 12);
    }

    #[test]
    fn help_toggle_reports_opened() {
        let mut ui = UiContext::default();
        assert!(ui.toggle_help());
        assert!(ui.is_help_visible());
        assert!(!ui.toggle_help());
        assert!(!ui.is_help_visible());
    }

    #[test]
    fn message_expires() {
        let mut ui = UiContext::default();
        ui.show_message("hello", 100, 500);
        ui.update(400);
        assert_eq!(ui.message(), Some("hello"));
        ui.update(600);
        assert_eq!(ui.message(), None);
    }

    #[test]
    fn reset_clears_transients() {
        let mut ui = UiContext::default();
        ui.set_mode(Mode::Command);
        ui.update_count(3);
        ui.update_command_buffer("res");
        ui.show_message("msg", 0, 100);
        ui.toggle_help();
        ui.reset();
        assert_eq!(ui.mode(), Mode::Normal);
        assert_eq!(ui.count(), 0);
        assert_eq!(ui.command_buffer(), "");
        assert_eq!(ui.message(), None);
        assert!(!ui.is_help_visible());
    }

    #[test]
    fn drabda_palette_differs() {
        let normal = ColorPalette::default();
        let drabda = ColorPalette::drabda();
        assert_ne!(normal.item, drabda.item);
    }

    #[test]
    fn theme_toggle_flips() {
        let mut theme = ThemeManager::default();
        assert!(!theme.is_drabda());
        assert!(theme.toggle_drabda());
        assert_eq!(theme.palette(), ColorPalette::drabda());
        assert!(!theme.toggle_drabda());
        assert_eq!(theme.palette(), ColorPalette::default());
    }

    #[test]
    fn help_strings_cover_core_commands() {
        let lines = help_strings();
        assert!(lines.iter().any(|l| l.contains("h j k l")));
        assert!(lines.iter().any(|l| l.contains("dd")));
        assert!(lines.iter().any(|l| l.contains("drabda")));
    }
}
