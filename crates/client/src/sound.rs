//! Sound sink for the terminal.
//!
//! There is no mixer in a terminal, so cues are written to the log. Muting
//! and track de-duplication still behave like a real player.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use party_runtime::{EffectKind, SoundService, TrackKind};

#[derive(Default)]
pub struct LoggedSound {
    music_muted: AtomicBool,
    sfx_muted: AtomicBool,
    current: Mutex<Option<TrackKind>>,
}

impl LoggedSound {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SoundService for LoggedSound {
    fn play_effect(&self, effect: EffectKind) {
        if self.sfx_muted.load(Ordering::Relaxed) {
            return;
        }
        tracing::debug!(
            target: "client::sound",
            ?effect,
            volume = effect.volume(),
            "effect"
        );
    }

    fn switch_ambient_track(&self, track: TrackKind) {
        if self.music_muted.load(Ordering::Relaxed) {
            return;
        }
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if *current == Some(track) {
            return;
        }
        *current = Some(track);
        tracing::debug!(
            target: "client::sound",
            ?track,
            looping = track.loops(),
            volume = track.volume(),
            "ambient track"
        );
    }

    fn set_music_muted(&self, muted: bool) {
        self.music_muted.store(muted, Ordering::Relaxed);
        if muted && let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }

    fn set_sfx_muted(&self, muted: bool) {
        self.sfx_muted.store(muted, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_track_is_not_restarted() {
        let sound = LoggedSound::new();
        sound.switch_ambient_track(TrackKind::Hub);
        sound.switch_ambient_track(TrackKind::Hub);
        assert_eq!(*sound.current.lock().unwrap(), Some(TrackKind::Hub));
    }

    #[test]
    fn muting_music_stops_the_track() {
        let sound = LoggedSound::new();
        sound.switch_ambient_track(TrackKind::Tension);
        sound.set_music_muted(true);
        sound.switch_ambient_track(TrackKind::Setup);
        assert_eq!(*sound.current.lock().unwrap(), None);

        sound.set_music_muted(false);
        sound.switch_ambient_track(TrackKind::Setup);
        assert_eq!(*sound.current.lock().unwrap(), Some(TrackKind::Setup));
    }
}
