//! Maps round progress to sound cues.

use party_core::{Phase, Role, RoundAction, RoundState};

use crate::api::{EffectKind, TrackKind};

/// Ambient track for the current screen. `None` means the hub.
pub fn track_for(round: Option<&RoundState>) -> TrackKind {
    let Some(state) = round else {
        return TrackKind::Hub;
    };

    match state.status {
        Phase::Setup => TrackKind::Setup,
        Phase::Revealing => TrackKind::Revealing,
        Phase::GameOver => match state.winner {
            Some(Role::Civilian) => TrackKind::Victory,
            _ => TrackKind::Defeat,
        },
        _ => TrackKind::Tension,
    }
}

/// Effect played when a person performs `action`. Clock ticks are silent.
pub fn effect_for(action: &RoundAction) -> Option<EffectKind> {
    match action {
        RoundAction::TimerTick(_) => None,
        RoundAction::CastVote(_) => Some(EffectKind::Vote),
        _ => Some(EffectKind::Click),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_core::{GameVariant, PlayerId};

    #[test]
    fn hub_without_round() {
        assert_eq!(track_for(None), TrackKind::Hub);
    }

    #[test]
    fn tracks_follow_phase() {
        let mut state = RoundState::new(GameVariant::Impostor);
        assert_eq!(track_for(Some(&state)), TrackKind::Setup);

        state.status = Phase::Revealing;
        assert_eq!(track_for(Some(&state)), TrackKind::Revealing);

        for phase in [Phase::Discussion, Phase::Voting, Phase::SpyGuessing] {
            state.status = phase;
            assert_eq!(track_for(Some(&state)), TrackKind::Tension);
        }

        state.status = Phase::GameOver;
        state.winner = Some(Role::Civilian);
        assert_eq!(track_for(Some(&state)), TrackKind::Victory);
        state.winner = Some(Role::Impostor);
        assert_eq!(track_for(Some(&state)), TrackKind::Defeat);
    }

    #[test]
    fn ticks_are_silent() {
        assert_eq!(effect_for(&RoundAction::timer_tick(1)), None);
        assert_eq!(
            effect_for(&RoundAction::cast_vote(PlayerId(1))),
            Some(EffectKind::Vote)
        );
        assert_eq!(
            effect_for(&RoundAction::confirm_reveal()),
            Some(EffectKind::Click)
        );
    }
}
