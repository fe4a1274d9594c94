//! Best-effort persistence: player name, high score, local leaderboard and
//! command-usage telemetry.
//!
//! Writes happen inline after each mutation and failures are swallowed; the
//! game never blocks on, or fails because of, storage.

use std::collections::HashMap;
use std::path::PathBuf;

use common::{GameError, GameResult};
use serde::{Deserialize, Serialize};

const LEADERBOARD_LIMIT: usize = 10;

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StorageData {
    player_name: Option<String>,
    high_score: i32,
    games_played: u32,
    command_usage: HashMap<String, u32>,
    leaderboard: Vec<ScoreEntry>,
}

/// Persistent game data bound to a JSON file, or purely in-memory when no
/// path is given (WASM, tests).
#[derive(Debug, Default)]
pub struct Storage {
    path: Option<PathBuf>,
    data: StorageData,
}

impl Storage {
    /// Loads storage from `path`. A missing file yields empty data.
    pub fn load(path: &str) -> GameResult<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| GameError::Parse(e.to_string()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StorageData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: Some(PathBuf::from(path)),
            data,
        })
    }

    /// In-memory storage that never touches disk.
    pub fn ephemeral() -> Self {
        Self::default()
    }

    /// Writes the current data out. No-op for ephemeral storage.
    pub fn save(&self) -> GameResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let raw =
            serde_json::to_string_pretty(&self.data).map_err(|e| GameError::Parse(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    fn persist(&self) {
        // Best effort: failures must not disturb the session.
        let _ = self.save();
    }

    pub fn player_name(&self) -> Option<&str> {
        self.data.player_name.as_deref()
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.data.player_name = Some(name.to_string());
        self.persist();
    }

    pub fn high_score(&self) -> i32 {
        self.data.high_score
    }

    /// Records `score` if it beats the stored high score. Returns whether a
    /// new record was set.
    pub fn update_high_score(&mut self, score: i32) -> bool {
        if score > self.data.high_score {
            self.data.high_score = score;
            self.persist();
            true
        } else {
            false
        }
    }

    pub fn games_played(&self) -> u32 {
        self.data.games_played
    }

    pub fn increment_games_played(&mut self) {
        self.data.games_played += 1;
        self.persist();
    }

    /// Counts one use of a motion/action for telemetry.
    pub fn track_command(&mut self, name: &str) {
        *self.data.command_usage.entry(name.to_string()).or_insert(0) += 1;
        self.persist();
    }

    pub fn command_count(&self, name: &str) -> u32 {
        self.data.command_usage.get(name).copied().unwrap_or(0)
    }

    /// Inserts a run into the leaderboard, keeping it sorted and bounded.
    pub fn add_score(&mut self, name: &str, score: i32) {
        self.data.leaderboard.push(ScoreEntry {
            name: name.to_string(),
            score,
        });
        self.data.leaderboard.sort_by(|a, b| b.score.cmp(&a.score));
        self.data.leaderboard.truncate(LEADERBOARD_LIMIT);
        self.persist();
    }

    pub fn leaderboard(&self) -> &[ScoreEntry] {
        &self.data.leaderboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(name);
        path
    }

    #[test]
    fn load_missing_file_is_empty() {
        let storage = Storage::load("/no/such/storage.json").unwrap();
        assert_eq!(storage.high_score(), 0);
        assert!(storage.player_name().is_none());
        assert!(storage.leaderboard().is_empty());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let path = temp_path("vimtractor_storage_roundtrip.json");
        let path_str = path.to_str().unwrap();
        let mut storage = Storage::load(path_str).unwrap();
        storage.set_player_name("ada");
        storage.update_high_score(42);
        storage.track_command("word_next");
        storage.track_command("word_next");
        storage.add_score("ada", 42);

        let reloaded = Storage::load(path_str).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(reloaded.player_name(), Some("ada"));
        assert_eq!(reloaded.high_score(), 42);
        assert_eq!(reloaded.command_count("word_next"), 2);
        assert_eq!(
            reloaded.leaderboard(),
            &[ScoreEntry { name: "ada".into(), score: 42 }]
        );
    }

    #[test]
    fn high_score_only_moves_up() {
        let mut storage = Storage::ephemeral();
        assert!(storage.update_high_score(10));
        assert!(!storage.update_high_score(5));
        assert_eq!(storage.high_score(), 10);
    }

    #[test]
    fn leaderboard_sorted_and_bounded() {
        let mut storage = Storage::ephemeral();
        for score in [5, 30, 10, 25, 1, 50, 15, 20, 40, 35, 45] {
            storage.add_score("p", score);
        }
        let board = storage.leaderboard();
        assert_eq!(board.len(), LEADERBOARD_LIMIT);
        assert_eq!(board[0].score, 50);
        assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
        // The lowest run fell off.
        assert!(board.iter().all(|e| e.score != 1));
    }

    #[test]
    fn ephemeral_never_writes() {
        let mut storage = Storage::ephemeral();
        storage.set_player_name("ghost");
        assert!(storage.save().is_ok());
        assert_eq!(storage.player_name(), Some("ghost"));
    }
}
