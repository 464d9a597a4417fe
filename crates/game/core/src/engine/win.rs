use crate::state::{Role, RoundState};

/// Decides the game after an elimination.
///
/// Civilians win once no minority player is left standing. Otherwise the
/// minority wins as soon as at most one civilian remains.
pub fn evaluate_winner(state: &RoundState) -> Option<Role> {
    let counts = state.active_counts();
    if counts.minority == 0 {
        Some(Role::Civilian)
    } else if counts.civilians <= 1 {
        Some(state.minority_role())
    } else {
        None
    }
}
