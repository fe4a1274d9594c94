//! Modal Vim-style key interpreter.
//!
//! [`VimParser`] turns raw key events into tagged [`Command`] events. It is a
//! plain state machine with no I/O: the caller supplies a millisecond clock
//! and drains emitted events after each key.
//!
//! Two pieces of pending state coexist in normal mode and expire differently:
//! the numeric count prefix lapses after a configured timeout, while a
//! pending operator key (`d`, `c`, `g`, `r`, `f`, ...) waits indefinitely for
//! its second keystroke, exactly as Vim operators do.

use common::{Direction, TargetKind};

/// Parser mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Command,
}

/// A single key event, already resolved to its printable character where one
/// exists. Modifier-only presses (Shift, Control, ...) arrive as separate
/// events and must be ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Tab,
    Modifier,
}

/// Help overlay requests raised by `?`, `:help` and `Escape`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpAction {
    Toggle,
    Close,
}

/// Position-changing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    WordNext,
    WordPrev,
    WordEnd,
    WordEndPrev,
    FileStart,
    FileEnd,
    PageUp,
    PageDown,
    FindForward(TargetKind),
    FindBack(TargetKind),
    TillForward(TargetKind),
    TillBack(TargetKind),
}

impl Motion {
    /// Stable label used for command-usage telemetry.
    pub fn name(&self) -> &'static str {
        match self {
            Motion::Left => "left",
            Motion::Right => "right",
            Motion::Up => "up",
            Motion::Down => "down",
            Motion::LineStart => "line_start",
            Motion::LineEnd => "line_end",
            Motion::WordNext => "word_next",
            Motion::WordPrev => "word_prev",
            Motion::WordEnd => "word_end",
            Motion::WordEndPrev => "word_end_prev",
            Motion::FileStart => "file_start",
            Motion::FileEnd => "file_end",
            Motion::PageUp => "page_up",
            Motion::PageDown => "page_down",
            Motion::FindForward(_) => "find_right",
            Motion::FindBack(_) => "find_left",
            Motion::TillForward(_) => "till_right",
            Motion::TillBack(_) => "till_left",
        }
    }
}

/// Grid-mutating commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    DeleteChar,
    DeleteCharBack,
    DeleteLine,
    DeleteAll,
    DeleteWord,
    DeleteWordEnd,
    DeleteBack,
    DeleteBackAggressive,
    DeleteToLineStart,
    DeleteToLineEnd,
    ChangeWord,
    ChangeWordEnd,
    ChangeBack,
    ChangeLine,
    ReplaceRock(Direction),
    Undo,
    Redo,
}

impl ActionKind {
    /// Stable label used for command-usage telemetry.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::DeleteChar => "delete_char",
            ActionKind::DeleteCharBack => "delete_char_back",
            ActionKind::DeleteLine => "delete_line",
            ActionKind::DeleteAll => "delete_all",
            ActionKind::DeleteWord => "delete_word",
            ActionKind::DeleteWordEnd => "delete_word_end",
            ActionKind::DeleteBack => "delete_back",
            ActionKind::DeleteBackAggressive => "delete_back_aggressive",
            ActionKind::DeleteToLineStart => "delete_to_line_start",
            ActionKind::DeleteToLineEnd => "delete_to_line_end",
            ActionKind::ChangeWord => "change_word",
            ActionKind::ChangeWordEnd => "change_word_end",
            ActionKind::ChangeBack => "change_back",
            ActionKind::ChangeLine => "change_line",
            ActionKind::ReplaceRock(_) => "replace_rock",
            ActionKind::Undo => "undo",
            ActionKind::Redo => "redo",
        }
    }
}

/// Resolved `:` commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExCommand {
    Quit,
    SaveQuit,
    Restart,
    Drabda,
    Unknown(String),
}

/// Events emitted by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Mode(Mode),
    Count(u32),
    Buffer(String),
    Help(HelpAction),
    Enter,
    DebugToggle,
    Leaderboard,
    Move { motion: Motion, count: u32 },
    Action { kind: ActionKind, count: u32 },
    CommandLine(ExCommand),
}

/// Modal key-event interpreter.
#[derive(Debug)]
pub struct VimParser {
    mode: Mode,
    count: u32,
    count_deadline: Option<u64>,
    pending: Option<char>,
    buffer: String,
    count_timeout_ms: u64,
    max_count: u32,
    events: Vec<Command>,
}

impl VimParser {
    pub fn new(count_timeout_ms: u64, max_count: u32) -> Self {
        Self {
            mode: Mode::Normal,
            count: 0,
            count_deadline: None,
            pending: None,
            buffer: String::new(),
            count_timeout_ms,
            max_count,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn pending_key(&self) -> Option<char> {
        self.pending
    }

    pub fn command_buffer(&self) -> &str {
        &self.buffer
    }

    /// Drains the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.events)
    }

    /// Lapses the count prefix once its deadline passes. The pending key is
    /// deliberately left alone: an operator waits for its motion even after
    /// any count typed before it has expired.
    pub fn expire(&mut self, now_ms: u64) {
        if let Some(deadline) = self.count_deadline {
            if now_ms >= deadline {
                self.reset_count();
            }
        }
    }

    /// Feeds one key event. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyInput, ctrl: bool, now_ms: u64) -> bool {
        self.expire(now_ms);
        match self.mode {
            Mode::Command => self.handle_command_mode(key),
            Mode::Normal => self.handle_normal_mode(key, ctrl, now_ms),
        }
    }

    /// Back to the initial state; all transient timers die with it.
    pub fn reset(&mut self) {
        self.mode = Mode::Normal;
        self.count = 0;
        self.count_deadline = None;
        self.pending = None;
        self.buffer.clear();
        self.events.clear();
    }

    fn handle_normal_mode(&mut self, key: KeyInput, ctrl: bool, now_ms: u64) -> bool {
        // Modifiers arrive as separate events ahead of the real key.
        let ch = match key {
            KeyInput::Modifier => return false,
            KeyInput::Escape => {
                self.emit(Command::Help(HelpAction::Close));
                return true;
            }
            KeyInput::Enter => {
                self.emit(Command::Enter);
                return true;
            }
            KeyInput::Tab => {
                self.emit(Command::Leaderboard);
                return true;
            }
            KeyInput::Backspace => return false,
            KeyInput::Char(c) => c,
        };

        if ctrl {
            return self.handle_ctrl_key(ch);
        }

        match ch {
            ':' => {
                self.mode = Mode::Command;
                self.buffer.clear();
                self.emit(Command::Mode(Mode::Command));
                return true;
            }
            '?' => {
                self.emit(Command::Help(HelpAction::Toggle));
                return true;
            }
            ' ' => {
                self.emit(Command::DebugToggle);
                return true;
            }
            _ => {}
        }

        if self.pending.is_some() {
            return self.handle_pending_sequence(ch);
        }

        // Capitals with meanings distinct from their lower-case twins.
        match ch {
            'X' => {
                self.emit_action(ActionKind::DeleteCharBack);
                return true;
            }
            'G' => {
                self.emit_move(Motion::FileEnd);
                return true;
            }
            'F' => {
                self.pending = Some('F');
                return true;
            }
            'T' => {
                self.pending = Some('T');
                return true;
            }
            _ => {}
        }

        if let Some(digit) = ch.to_digit(10) {
            // A leading '0' is the line-start motion, not a count digit.
            if digit == 0 && self.count == 0 {
                self.emit_move(Motion::LineStart);
                return true;
            }
            self.count = (self.count * 10 + digit).min(self.max_count);
            self.count_deadline = Some(now_ms + self.count_timeout_ms);
            let count = self.count;
            self.emit(Command::Count(count));
            return true;
        }

        match ch.to_ascii_lowercase() {
            'h' => self.emit_move(Motion::Left),
            'j' => self.emit_move(Motion::Down),
            'k' => self.emit_move(Motion::Up),
            'l' => self.emit_move(Motion::Right),
            '$' => self.emit_move(Motion::LineEnd),
            'w' => self.emit_move(Motion::WordNext),
            'b' => self.emit_move(Motion::WordPrev),
            'e' => self.emit_move(Motion::WordEnd),
            'g' | 'd' | 'c' | 'r' => {
                self.pending = Some(ch.to_ascii_lowercase());
                self.count_deadline = Some(now_ms + self.count_timeout_ms);
            }
            'f' | 't' => {
                self.pending = Some(ch);
            }
            'x' => self.emit_action(ActionKind::DeleteChar),
            'u' => self.emit_action(ActionKind::Undo),
            _ => return false,
        }
        true
    }

    fn handle_pending_sequence(&mut self, ch: char) -> bool {
        let pending = self.pending.take().expect("pending key present");

        // Case-sensitive two-key table.
        let motion = match (pending, ch) {
            ('g', 'g') => Some(Motion::FileStart),
            ('g', 'e') => Some(Motion::WordEndPrev),
            _ => None,
        };
        if let Some(motion) = motion {
            self.emit_move(motion);
            return true;
        }
        let action = match (pending, ch) {
            ('d', 'd') => Some(ActionKind::DeleteLine),
            ('d', 'G') => Some(ActionKind::DeleteAll),
            ('d', 'w') => Some(ActionKind::DeleteWord),
            ('d', 'e') => Some(ActionKind::DeleteWordEnd),
            ('d', 'b') => Some(ActionKind::DeleteBack),
            ('d', 'B') => Some(ActionKind::DeleteBackAggressive),
            ('d', '0') => Some(ActionKind::DeleteToLineStart),
            ('d', '$') => Some(ActionKind::DeleteToLineEnd),
            ('c', 'w') => Some(ActionKind::ChangeWord),
            ('c', 'e') => Some(ActionKind::ChangeWordEnd),
            ('c', 'b') => Some(ActionKind::ChangeBack),
            ('c', 'c') => Some(ActionKind::ChangeLine),
            ('r', 'h') => Some(ActionKind::ReplaceRock(Direction::Left)),
            ('r', 'j') => Some(ActionKind::ReplaceRock(Direction::Down)),
            ('r', 'k') => Some(ActionKind::ReplaceRock(Direction::Up)),
            ('r', 'l') => Some(ActionKind::ReplaceRock(Direction::Right)),
            _ => None,
        };
        if let Some(action) = action {
            self.emit_action(action);
            return true;
        }

        // f/F/t/T address a target category rather than a literal cell.
        if let Some(target) = target_kind(ch) {
            let motion = match pending {
                'f' => Some(Motion::FindForward(target)),
                'F' => Some(Motion::FindBack(target)),
                't' => Some(Motion::TillForward(target)),
                'T' => Some(Motion::TillBack(target)),
                _ => None,
            };
            if let Some(motion) = motion {
                self.emit_move(motion);
                return true;
            }
        }

        // Invalid sequence: drop it silently.
        self.reset_count();
        false
    }

    fn handle_ctrl_key(&mut self, ch: char) -> bool {
        match ch.to_ascii_lowercase() {
            'f' => self.emit_move(Motion::PageDown),
            'b' => self.emit_move(Motion::PageUp),
            'r' => self.emit_action(ActionKind::Redo),
            _ => return false,
        }
        true
    }

    fn handle_command_mode(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Escape => {
                self.mode = Mode::Normal;
                self.buffer.clear();
                self.emit(Command::Mode(Mode::Normal));
                true
            }
            KeyInput::Enter => {
                let line = self.buffer.trim().to_string();
                self.mode = Mode::Normal;
                self.buffer.clear();
                self.emit(Command::Mode(Mode::Normal));
                if !line.is_empty() {
                    self.execute_command_line(&line);
                }
                true
            }
            KeyInput::Backspace => {
                self.buffer.pop();
                let buffer = self.buffer.clone();
                self.emit(Command::Buffer(buffer));
                true
            }
            KeyInput::Char(c) => {
                self.buffer.push(c);
                let buffer = self.buffer.clone();
                self.emit(Command::Buffer(buffer));
                true
            }
            _ => false,
        }
    }

    fn execute_command_line(&mut self, line: &str) {
        let command = match line {
            "q" | "quit" => Command::CommandLine(ExCommand::Quit),
            "w" | "wq" | "write" => Command::CommandLine(ExCommand::SaveQuit),
            "restart" | "r" => Command::CommandLine(ExCommand::Restart),
            "help" | "h" | "?" => Command::Help(HelpAction::Toggle),
            "drabda" => Command::CommandLine(ExCommand::Drabda),
            _ => Command::CommandLine(ExCommand::Unknown(line.to_string())),
        };
        self.emit(command);
    }

    fn effective_count(&self) -> u32 {
        if self.count > 0 {
            self.count
        } else {
            1
        }
    }

    fn emit_move(&mut self, motion: Motion) {
        let count = self.effective_count();
        self.reset_count();
        self.events.push(Command::Move { motion, count });
    }

    fn emit_action(&mut self, kind: ActionKind) {
        let count = self.effective_count();
        self.reset_count();
        self.events.push(Command::Action { kind, count });
    }

    fn emit(&mut self, command: Command) {
        self.events.push(command);
    }

    fn reset_count(&mut self) {
        self.count = 0;
        self.count_deadline = None;
    }
}

fn target_kind(ch: char) -> Option<TargetKind> {
    match ch.to_ascii_lowercase() {
        'r' => Some(TargetKind::Rock),
        'v' => Some(TargetKind::Vegetable),
        'g' => Some(TargetKind::Gas),
        'l' => Some(TargetKind::Life),
        _ => None,
    }
}
