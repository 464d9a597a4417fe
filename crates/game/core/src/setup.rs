//! Round setup input and role dealing.
//!
//! [`SetupRequest`] is what the setup screen submits. Front-ends call
//! [`SetupRequest::sanitize`] at the boundary; the engine refuses anything
//! that is still out of range. Dealing uses a Fisher-Yates shuffle driven by
//! the injected [`RngOracle`], so the same seed always deals the same roles.

use crate::action::RoundError;
use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed, context};
use crate::state::Role;

/// Names and options collected before a round starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetupRequest {
    /// Player names in turn order.
    pub names: Vec<String>,
    pub impostor_count: usize,
    pub use_hint_word: bool,
    pub use_timer: bool,
}

impl SetupRequest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            impostor_count: GameConfig::MIN_IMPOSTORS,
            use_hint_word: true,
            use_timer: false,
        }
    }

    /// Default table of `Spieler 1` .. `Spieler 4`.
    pub fn default_names() -> Vec<String> {
        (1..=4).map(placeholder_name).collect()
    }

    pub fn with_impostors(mut self, count: usize) -> Self {
        self.impostor_count = count;
        self
    }

    pub fn with_hint_word(mut self, enabled: bool) -> Self {
        self.use_hint_word = enabled;
        self
    }

    pub fn with_timer(mut self, enabled: bool) -> Self {
        self.use_timer = enabled;
        self
    }

    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Clamps the request into a startable shape.
    ///
    /// Names past [`GameConfig::MAX_PLAYERS`] are dropped, blank names and
    /// missing seats up to [`GameConfig::MIN_PLAYERS`] become `Spieler N`,
    /// and the impostor count is clamped to `1..=n-1`.
    pub fn sanitize(mut self) -> Self {
        self.names.truncate(GameConfig::MAX_PLAYERS);
        for (index, name) in self.names.iter_mut().enumerate() {
            let trimmed = name.trim();
            *name = if trimmed.is_empty() {
                placeholder_name(index + 1)
            } else {
                trimmed.to_owned()
            };
        }
        while self.names.len() < GameConfig::MIN_PLAYERS {
            self.names.push(placeholder_name(self.names.len() + 1));
        }

        let max = GameConfig::max_impostors(self.names.len());
        self.impostor_count = self.impostor_count.clamp(GameConfig::MIN_IMPOSTORS, max);
        self
    }

    /// Checks the request without modifying it.
    pub fn validate(&self) -> Result<(), RoundError> {
        let count = self.names.len();
        if !(GameConfig::MIN_PLAYERS..=GameConfig::MAX_PLAYERS).contains(&count) {
            return Err(RoundError::PlayerCount { count });
        }
        if self.impostor_count < GameConfig::MIN_IMPOSTORS
            || self.impostor_count > GameConfig::max_impostors(count)
        {
            return Err(RoundError::ImpostorCount {
                count: self.impostor_count,
                players: count,
            });
        }
        if self.names.iter().any(|name| name.trim().is_empty()) {
            return Err(RoundError::InvalidSetup("player name is blank"));
        }
        Ok(())
    }
}

impl Default for SetupRequest {
    fn default() -> Self {
        Self::new(Self::default_names())
    }
}

fn placeholder_name(position: usize) -> String {
    format!("Spieler {position}")
}

/// In-place Fisher-Yates shuffle.
///
/// Step `i` (counting down from the last index) swaps `items[i]` with
/// `items[j]` where `j` is drawn from `0..=i` using a seed derived from
/// `seed`, `i` and [`context::SHUFFLE`].
pub fn shuffle<T>(items: &mut [T], rng: &dyn RngOracle, seed: u64) {
    for i in (1..items.len()).rev() {
        let step_seed = compute_seed(seed, 0, i as u32, context::SHUFFLE);
        let j = rng.below(step_seed, (i + 1) as u32) as usize;
        items.swap(i, j);
    }
}

/// Deals `minority_count` copies of `minority` and civilians for the rest,
/// shuffled into seat order.
pub fn assign_roles(
    player_count: usize,
    minority_count: usize,
    minority: Role,
    rng: &dyn RngOracle,
    seed: u64,
) -> Vec<Role> {
    let mut roles: Vec<Role> = (0..player_count)
        .map(|i| {
            if i < minority_count {
                minority
            } else {
                Role::Civilian
            }
        })
        .collect();
    shuffle(&mut roles, rng, seed);
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    /// Always answers the same value, so every swap index is predictable.
    struct FixedRng(u32);

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    #[test]
    fn role_counts_hold_for_every_valid_table() {
        let rng = PcgRng;
        for players in GameConfig::MIN_PLAYERS..=GameConfig::MAX_PLAYERS {
            for impostors in 1..players {
                for seed in 0..8u64 {
                    let roles = assign_roles(players, impostors, Role::Spy, &rng, seed);
                    assert_eq!(roles.len(), players);
                    let spies = roles.iter().filter(|r| **r == Role::Spy).count();
                    let civilians = roles.iter().filter(|r| **r == Role::Civilian).count();
                    assert_eq!(spies, impostors, "n={players} k={impostors}");
                    assert_eq!(civilians, players - impostors);
                }
            }
        }
    }

    #[test]
    fn zero_oracle_yields_exact_permutation() {
        // i=2 swaps with 0, then i=1 swaps with 0.
        let mut items = ['a', 'b', 'c'];
        shuffle(&mut items, &FixedRng(0), 99);
        assert_eq!(items, ['b', 'c', 'a']);
    }

    #[test]
    fn self_swap_keeps_order() {
        // Single step with bound 2: 1 % 2 == 1 swaps the last item with itself.
        let mut items = [1, 2];
        shuffle(&mut items, &FixedRng(1), 0);
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let rng = PcgRng;
        for seed in 0..50u64 {
            let mut items: Vec<u32> = (0..12).collect();
            shuffle(&mut items, &rng, seed);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..12).collect::<Vec<_>>());
        }
    }

    #[test]
    fn impostor_seat_is_roughly_uniform() {
        let rng = PcgRng;
        let trials = 6_000u64;
        let mut seats = [0u32; 3];
        for seed in 0..trials {
            let roles = assign_roles(3, 1, Role::Impostor, &rng, seed);
            let seat = roles.iter().position(|r| *r == Role::Impostor).unwrap();
            seats[seat] += 1;
        }
        for count in seats {
            assert!((1_700..=2_300).contains(&count), "seat counts {seats:?}");
        }
    }

    #[test]
    fn sanitize_pads_and_clamps() {
        let request = SetupRequest::new(["Anna", "  "]).with_impostors(5).sanitize();
        assert_eq!(request.names, ["Anna", "Spieler 2", "Spieler 3"]);
        assert_eq!(request.impostor_count, 2);
        request.validate().unwrap();
    }

    #[test]
    fn sanitize_drops_extra_names_and_raises_zero_impostors() {
        let names = (0..15).map(|i| format!("P{i}"));
        let request = SetupRequest::new(names).with_impostors(0).sanitize();
        assert_eq!(request.player_count(), GameConfig::MAX_PLAYERS);
        assert_eq!(request.impostor_count, 1);
    }

    #[test]
    fn validate_rejects_unsanitized_input() {
        let two = SetupRequest::new(["A", "B"]);
        assert_eq!(two.validate(), Err(RoundError::PlayerCount { count: 2 }));

        let all_impostors = SetupRequest::new(["A", "B", "C"]).with_impostors(3);
        assert_eq!(
            all_impostors.validate(),
            Err(RoundError::ImpostorCount {
                count: 3,
                players: 3
            })
        );
    }
}
