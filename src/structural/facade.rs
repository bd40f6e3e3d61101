//! Facade: one home theater object sequences four independent subsystems.

#[derive(Debug, Default)]
pub struct Projector {
    on: bool,
}

impl Projector {
    pub fn turn_on(&mut self) -> String {
        self.on = true;
        "Projector is now ON.".to_string()
    }

    pub fn turn_off(&mut self) -> String {
        self.on = false;
        "Projector is now OFF.".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct SoundSystem {
    on: bool,
    volume: u8,
}

impl SoundSystem {
    pub fn turn_on(&mut self) -> String {
        self.on = true;
        "Sound System is now ON.".to_string()
    }

    pub fn turn_off(&mut self) -> String {
        self.on = false;
        "Sound System is now OFF.".to_string()
    }

    pub fn set_volume(&mut self, level: u8) -> String {
        self.volume = level;
        format!("Setting sound system volume to {level}.")
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }
}

#[derive(Debug, Default)]
pub struct DvdPlayer {
    on: bool,
    playing: Option<String>,
}

impl DvdPlayer {
    pub fn turn_on(&mut self) -> String {
        self.on = true;
        "DVD Player is now ON.".to_string()
    }

    pub fn turn_off(&mut self) -> String {
        self.on = false;
        self.playing = None;
        "DVD Player is now OFF.".to_string()
    }

    pub fn play_movie(&mut self, movie: &str) -> String {
        self.playing = Some(movie.to_string());
        format!("Playing movie: {movie}")
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct Screen {
    lowered: bool,
}

impl Screen {
    pub fn lower(&mut self) -> String {
        self.lowered = true;
        "Screen is now lowered.".to_string()
    }

    pub fn raise(&mut self) -> String {
        self.lowered = false;
        "Screen is now raised.".to_string()
    }

    pub fn is_lowered(&self) -> bool {
        self.lowered
    }
}

// =============================================================================
// Facade
// =============================================================================

#[derive(Debug)]
pub struct HomeTheaterFacade {
    projector: Projector,
    sound_system: SoundSystem,
    dvd_player: DvdPlayer,
    screen: Screen,
    volume: u8,
}

impl Default for HomeTheaterFacade {
    fn default() -> Self {
        Self::new(5)
    }
}

impl HomeTheaterFacade {
    pub fn new(volume: u8) -> Self {
        Self {
            projector: Projector::default(),
            sound_system: SoundSystem::default(),
            dvd_player: DvdPlayer::default(),
            screen: Screen::default(),
            volume,
        }
    }

    pub fn watch_movie(&mut self, movie: &str) -> Vec<String> {
        tracing::debug!(movie, volume = self.volume, "starting home theater");
        vec![
            "Getting ready to watch a movie...".to_string(),
            self.screen.lower(),
            self.projector.turn_on(),
            self.sound_system.turn_on(),
            self.sound_system.set_volume(self.volume),
            self.dvd_player.turn_on(),
            self.dvd_player.play_movie(movie),
        ]
    }

    pub fn end_movie(&mut self) -> Vec<String> {
        tracing::debug!("shutting down home theater");
        vec![
            "Shutting down home theater...".to_string(),
            self.dvd_player.turn_off(),
            self.sound_system.turn_off(),
            self.projector.turn_off(),
            self.screen.raise(),
        ]
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn sound_system(&self) -> &SoundSystem {
        &self.sound_system
    }

    pub fn dvd_player(&self) -> &DvdPlayer {
        &self.dvd_player
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_movie_sequence() {
        let mut theater = HomeTheaterFacade::default();
        let lines = theater.watch_movie("Inception");
        assert_eq!(
            lines,
            vec![
                "Getting ready to watch a movie...",
                "Screen is now lowered.",
                "Projector is now ON.",
                "Sound System is now ON.",
                "Setting sound system volume to 5.",
                "DVD Player is now ON.",
                "Playing movie: Inception",
            ]
        );
        assert!(theater.screen().is_lowered());
        assert!(theater.projector().is_on());
        assert_eq!(theater.dvd_player().playing(), Some("Inception"));
    }

    #[test]
    fn test_end_movie_sequence() {
        let mut theater = HomeTheaterFacade::new(7);
        theater.watch_movie("Alien");
        let lines = theater.end_movie();
        assert_eq!(
            lines,
            vec![
                "Shutting down home theater...",
                "DVD Player is now OFF.",
                "Sound System is now OFF.",
                "Projector is now OFF.",
                "Screen is now raised.",
            ]
        );
        assert!(!theater.sound_system().is_on());
        assert!(!theater.dvd_player().is_on());
        assert_eq!(theater.dvd_player().playing(), None);
        assert!(!theater.screen().is_lowered());
        assert_eq!(theater.sound_system().volume(), 7);
    }
}
