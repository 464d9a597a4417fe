use party_core::GameConfig;

/// Categories offered on the setup screen, in display order.
///
/// The first entry lets the generator choose a category itself.
pub const CATEGORIES: [&str; 9] = [
    GameConfig::RANDOM_CATEGORY,
    "Alltag",
    "Essen & Trinken",
    "Berufe",
    "Sport",
    "Technik",
    "Natur",
    "Filme & Serien",
    "Reisen",
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}
