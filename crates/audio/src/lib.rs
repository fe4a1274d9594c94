//! Simple audio playback utilities.
//!
//! All calls are fire-and-forget: the game never waits on the audio layer.

use common::GameResult;

/// Supported sound effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Move,
    Collect,
    GasCan,
    ExtraLife,
    Crash,
    Explosion,
    Powerup,
    CommandMode,
    LevelUp,
    Penalty,
    Death,
}

/// Basic audio manager storing volume level and loop states.
#[derive(Debug)]
pub struct AudioManager {
    volume: u8,
    engine_running: bool,
    engine_paused: bool,
    menu_jingle_running: bool,
    transmute_running: bool,
}

impl AudioManager {
    /// Creates a new manager with the given volume (0-10).
    pub fn new(volume: u8) -> Self {
        Self {
            volume: volume.min(10),
            engine_running: false,
            engine_paused: false,
            menu_jingle_running: false,
            transmute_running: false,
        }
    }

    /// Sets the playback volume (0-10).
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(10);
    }

    /// Returns current volume.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Plays a one-shot sound effect.
    pub fn play(&self, sound: Sound) -> GameResult<()> {
        println!("Play sound {:?} at volume {}", sound, self.volume);
        Ok(())
    }

    pub fn start_engine(&mut self) {
        self.engine_running = true;
        self.engine_paused = false;
        println!("Engine hum started");
    }

    pub fn stop_engine(&mut self) {
        if self.engine_running {
            println!("Engine hum stopped");
        }
        self.engine_running = false;
        self.engine_paused = false;
    }

    pub fn pause_engine(&mut self) {
        if self.engine_running {
            self.engine_paused = true;
        }
    }

    pub fn resume_engine(&mut self) {
        if self.engine_running {
            self.engine_paused = false;
        }
    }

    pub fn engine_running(&self) -> bool {
        self.engine_running && !self.engine_paused
    }

    pub fn start_menu_jingle(&mut self) {
        if !self.menu_jingle_running {
            println!("Menu jingle started");
        }
        self.menu_jingle_running = true;
    }

    pub fn stop_menu_jingle(&mut self) {
        self.menu_jingle_running = false;
    }

    pub fn menu_jingle_running(&self) -> bool {
        self.menu_jingle_running
    }

    /// Drilling loop heard while a rock transmutation is in progress.
    pub fn start_transmute_work(&mut self) {
        self.transmute_running = true;
        println!("Transmute work loop started");
    }

    pub fn stop_transmute_work(&mut self) {
        self.transmute_running = false;
    }

    pub fn transmute_running(&self) -> bool {
        self.transmute_running
    }

    pub fn stop_all(&mut self) {
        self.stop_engine();
        self.stop_menu_jingle();
        self.stop_transmute_work();
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamped() {
        let m = AudioManager::new(15);
        assert_eq!(m.volume(), 10);
    }

    #[test]
    fn set_volume_clamps() {
        let mut m = AudioManager::new(5);
        m.set_volume(20);
        assert_eq!(m.volume(), 10);
    }

    #[test]
    fn play_runs() {
        let m = AudioManager::new(3);
        assert!(m.play(Sound::Crash).is_ok());
    }

    #[test]
    fn engine_pause_resume() {
        let mut m = AudioManager::default();
        m.start_engine();
        assert!(m.engine_running());
        m.pause_engine();
        assert!(!m.engine_running());
        m.resume_engine();
        assert!(m.engine_running());
        m.stop_engine();
        assert!(!m.engine_running());
    }

    #[test]
    fn stop_all_silences_loops() {
        let mut m = AudioManager::default();
        m.start_engine();
        m.start_menu_jingle();
        m.start_transmute_work();
        m.stop_all();
        assert!(!m.engine_running());
        assert!(!m.menu_jingle_running());
        assert!(!m.transmute_running());
    }
}
