use core::fmt;

/// Opaque player identifier, unique within one [`super::RoundState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Secret role dealt at round start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[strum(serialize = "Bürger")]
    Civilian,
    #[strum(serialize = "Impostor")]
    Impostor,
    #[strum(serialize = "Spion")]
    Spy,
}

impl Role {
    /// True for the roles dealt to the deliberately small subset of players.
    pub const fn is_minority(self) -> bool {
        !matches!(self, Role::Civilian)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// Secret word for civilians, hint word for the minority.
    pub word: String,
    pub is_eliminated: bool,
    /// Free-text answer from the input phase.
    pub answer: Option<String>,
    /// Index into the front-end's avatar/colour palette.
    pub avatar_slot: u8,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role, word: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            word: word.into(),
            is_eliminated: false,
            answer: None,
            avatar_slot: 0,
        }
    }

    pub fn with_avatar_slot(mut self, slot: u8) -> Self {
        self.avatar_slot = slot;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }
}
