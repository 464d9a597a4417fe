//! Text rendering of each screen.

use std::fmt::Write;

use party_core::{
    GameVariant, InputPrompt, LabelKind, NextStep, Player, PromptKind, RevealCard, Role,
    RoundState, RoundSummary, ShowdownEntry,
};
use party_runtime::{Notice, SessionSnapshot, TimerEvent};

const RULE: &str = "────────────────────────────────────────";

pub fn hub(snapshot: &SessionSnapshot) -> String {
    let settings = &snapshot.settings;
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\n  FAMILYTIME\n{RULE}");
    let _ = writeln!(out, "  1) {}", GameVariant::Impostor.rules().title);
    let _ = writeln!(out, "  2) {}", GameVariant::WordSpy.rules().title);
    let _ = writeln!(out, "  3) {}", GameVariant::FragenMix.rules().title);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Spieler:   {}", snapshot.player_names.join(", "));
    let _ = writeln!(out, "  Kategorie: {}", settings.selected_category);
    let _ = writeln!(
        out,
        "  Musik {} · Effekte {}",
        on_off(!settings.music_muted),
        on_off(!settings.sfx_muted)
    );
    let _ = writeln!(
        out,
        "\n  [1-3] Spiel wählen  [n] Namen  [k] Kategorie  [m] Musik  [s] Effekte  [q] Beenden"
    );
    out
}

pub fn setup(state: &RoundState, snapshot: &SessionSnapshot) -> String {
    let rules = state.rules();
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\n  {} · Vorbereitung\n{RULE}", rules.title);
    for (index, name) in snapshot.player_names.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {name}", index + 1);
    }
    let _ = writeln!(out, "\n  Kategorie: {}", snapshot.settings.selected_category);
    if rules.honours_hint_toggle {
        let _ = writeln!(out, "  Hilfswort: {}", on_off(state.use_hint_word));
    }
    if rules.offers_timer {
        let _ = writeln!(out, "  Timer:     {}", on_off(state.use_timer));
    }

    let mut keys = String::from("  [Enter/Zahl] Start mit N Impostern  [n] Namen  [k] Kategorie");
    if rules.honours_hint_toggle {
        keys.push_str("  [h] Hilfswort");
    }
    if rules.offers_timer {
        keys.push_str("  [t] Timer");
    }
    keys.push_str("  [b] Zurück");
    let _ = writeln!(out, "\n{keys}");
    out
}

pub fn pass_device(player: &Player) -> String {
    format!("\n  Gib das Gerät an {}.\n  [Enter] Karte aufdecken", player.name)
}

pub fn reveal_card(card: &RevealCard<'_>) -> String {
    let label = match card.label {
        LabelKind::SecretWord => "Dein geheimes Wort",
        LabelKind::HintWord => "Dein Hinweiswort",
        LabelKind::Undercover => "Du bist undercover",
        LabelKind::SecretQuestion => "Deine geheime Frage",
    };
    let next = match card.next {
        NextStep::NextPlayer => "Verdecken und weitergeben",
        NextStep::Discussion => "Zur Diskussion",
        NextStep::Input => "Zur Eingabe",
    };

    let mut out = String::new();
    let _ = writeln!(out, "\n  {}", card.player.name);
    if card.role.is_minority() && card.label != LabelKind::SecretQuestion {
        let _ = writeln!(out, "  Rolle: {}", card.role);
    }
    let _ = writeln!(out, "  {label}:\n\n      {}\n", card.shown);
    let _ = write!(out, "  [Enter] {next}");
    out
}

/// Pushes the card off screen before the device changes hands.
pub fn blank_screen() -> String {
    "\n".repeat(60)
}

pub fn input_prompt(prompt: &InputPrompt<'_>) -> String {
    let mut out = format!("\n  {}, ", prompt.player.name);
    match (prompt.kind, prompt.question) {
        (PromptKind::Answer, Some(question)) => {
            let _ = write!(out, "beantworte deine Frage:\n  {question}\n  > ");
        }
        _ => out.push_str("schreib ein Wort, das zu deinem Wort passt:\n  > "),
    }
    out
}

pub fn showdown(entries: &[ShowdownEntry<'_>], question: Option<&str>) -> String {
    let mut out = format!("{RULE}\n  Auflösung der Antworten\n{RULE}\n");
    if let Some(question) = question {
        let _ = writeln!(out, "  Frage: {question}\n");
    }
    for entry in entries {
        let _ = writeln!(out, "  {:<12} {}", entry.player.name, entry.answer);
    }
    out.push_str("\n  [Enter] Diskussion starten");
    out
}

pub fn discussion(state: &RoundState) -> String {
    let mut out = format!("{RULE}\n  Diskussion · Runde {}\n{RULE}\n", state.round);
    if let Some(timer) = state.discussion_timer {
        let _ = writeln!(out, "  Zeit: {}", timer.display());
    }
    out.push_str("  [Enter] Abstimmung starten");
    out
}

pub fn voting(candidates: &[&Player]) -> String {
    let mut out = format!("{RULE}\n  Wer ist verdächtig?\n{RULE}\n");
    for (index, player) in candidates.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}) {}", index + 1, player.name);
    }
    out.push_str("  > ");
    out
}

pub fn reveal_vote(player: &Player) -> String {
    format!(
        "\n  Ihr habt {} gewählt.\n  [Enter] Rolle aufdecken",
        player.name
    )
}

pub fn spy_guess(player: &Player) -> String {
    format!(
        "\n  {} war der Spion! Letzte Chance: Wie lautet das geheime Wort?\n  > ",
        player.name
    )
}

pub fn summary(summary: &RoundSummary<'_>) -> String {
    let headline = match summary.winner {
        Role::Civilian => "Die Bürger gewinnen!",
        Role::Impostor => "Die Impostor gewinnen!",
        Role::Spy => "Der Spion gewinnt!",
    };
    let minority: Vec<_> = summary.minority.iter().map(|p| p.name.as_str()).collect();

    let mut out = format!("{RULE}\n  {headline}\n{RULE}\n");
    let _ = writeln!(out, "  Geheim:    {}", summary.secret_word);
    if !summary.hint_word.is_empty() {
        let _ = writeln!(out, "  Hinweis:   {}", summary.hint_word);
    }
    let _ = writeln!(out, "  Kategorie: {}", summary.category);
    let _ = writeln!(out, "  Enttarnt:  {}", minority.join(", "));
    let _ = writeln!(out, "  Runden:    {}", summary.rounds_played);
    out.push_str("\n  [r] Nochmal  [b] Zurück zur Auswahl");
    out
}

pub fn timer(event: &TimerEvent) -> Option<String> {
    match *event {
        TimerEvent::Started { seconds, .. } => Some(format!("  ⏱ {} Sekunden Diskussion", seconds)),
        TimerEvent::Tick { remaining, .. } if remaining % 30 == 0 || remaining <= 10 => {
            Some(format!("  ⏱ {}:{:02}", remaining / 60, remaining % 60))
        }
        TimerEvent::Expired { .. } => {
            Some("  ⏱ Zeit abgelaufen! [Enter] zur Abstimmung".to_owned())
        }
        _ => None,
    }
}

pub fn notice(notice: &Notice) -> String {
    match notice {
        Notice::GenerationFallback { .. } => "  (offline: Wort aus der Reserve gewählt)".to_owned(),
        Notice::StartAborted { reason } => format!("  Start abgebrochen: {reason}"),
        Notice::PersistenceFailed { reason } => format!("  Speichern fehlgeschlagen: {reason}"),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "an" } else { "aus" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_core::PlayerId;

    #[test]
    fn masked_card_shows_placeholder() {
        let player = Player::new(PlayerId(1), "Mia", Role::Impostor, "Sünde");
        let card = RevealCard {
            player: &player,
            role: Role::Impostor,
            shown: "???",
            label: LabelKind::Undercover,
            is_last: false,
            next: NextStep::NextPlayer,
        };
        let text = reveal_card(&card);
        assert!(text.contains("???"));
        assert!(!text.contains("Sünde"));
        assert!(text.contains("undercover"));
    }

    #[test]
    fn question_cards_hide_the_role() {
        let player = Player::new(PlayerId(2), "Ole", Role::Impostor, "Frage B?");
        let card = RevealCard {
            player: &player,
            role: Role::Impostor,
            shown: "Frage B?",
            label: LabelKind::SecretQuestion,
            is_last: true,
            next: NextStep::Input,
        };
        assert!(!reveal_card(&card).contains("Rolle"));
    }

    #[test]
    fn timer_lines_are_throttled() {
        assert!(timer(&TimerEvent::Tick { epoch: 1, remaining: 45 }).is_none());
        assert!(timer(&TimerEvent::Tick { epoch: 1, remaining: 60 }).is_some());
        assert!(timer(&TimerEvent::Tick { epoch: 1, remaining: 3 }).is_some());
        assert!(timer(&TimerEvent::Cancelled { epoch: 1 }).is_none());
    }
}
