//! Prompt text sent to a language-model word generator.
//!
//! The bundled generators never call this; service-backed
//! [`WordGenerator`](crate::WordGenerator) implementations do.

use crate::api::GenerationRequest;

/// System and user halves of a generation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    /// Single-message form for services without a system role.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

const QUESTION_SYSTEM: &str = "Du bist ein extrem kreativer Spiele-Autor. \
Erstelle zwei unterschiedliche, aber perfekt vergleichbare Fragen.";

const WORD_SYSTEM: &str = "Du bist ein brillanter Spiele-Designer. \
Generiere ein deutsches Wortpaar für ein Social-Deduction-Spiel.

ZIEL: Ein konkretes 'secretWord' (für die Bürger) und ein cleveres 'hintWord' (für den Impostor).

REGELN FÜR DAS HILFSWORT (hintWord):
1. Keine Synonyme und keine nahen Verwandten: zu 'Apfel' niemals 'Birne', 'Frucht' oder 'Obst'.
2. Das Hilfswort stammt aus einer anderen begrifflichen Ebene (Eigenschaft, Aktion, Material, Geschichte).
3. Es beschreibt eine Eigenschaft, eine Funktion oder einen kulturellen Kontext.

GUTE PAARE:
- 'Apfel' -> 'Sünde'
- 'Spiegel' -> 'Reflexion'
- 'Kaffee' -> 'Röstung'
- 'Bett' -> 'Träumen'

SCHLECHTE PAARE:
- 'Katze' -> 'Hund'
- 'Auto' -> 'Zug'

Mit dem Hilfswort soll der Impostor vage über das Thema reden können, ohne das Wort selbst zu kennen.";

/// Renders the prompt for `request`.
///
/// Question variants ask for two comparable questions; every other variant
/// asks for a secret word and a distant hint word.
pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    let exclusion = exclusion_line(&request.exclude_words);

    if request.variant.rules().asks_questions {
        let user = format!(
            "Generiere zwei Fragen (Deutsch), die ähnliche Antworten provozieren.\n\
             KATEGORIE: {}. VIBE: {}.\n\
             ENTROPIE-TOKEN: {}.\n\
             {exclusion}\n\
             ANFORDERUNGEN: 'secretWord' ist Frage A, 'hintWord' ist Frage B.",
            request.category, request.vibe, request.entropy,
        );
        return Prompt {
            system: QUESTION_SYSTEM.to_owned(),
            user,
        };
    }

    let category = if request.wants_random_category() {
        "Wähle eine spannende, bekannte Kategorie.".to_owned()
    } else {
        format!("Nutze die Kategorie '{}'.", request.category)
    };

    let system = if exclusion.is_empty() {
        WORD_SYSTEM.to_owned()
    } else {
        format!("{WORD_SYSTEM}\n\n{exclusion}")
    };

    let user = format!(
        "{category}\n\
         VIBE: {}.\n\
         SEED: {}.\n\n\
         ANFORDERUNGEN:\n\
         - 'secretWord': Das konkrete Hauptwort.\n\
         - 'hintWord': Die kluge, distanzierte Assoziation.\n\
         - Antworte NUR mit JSON.",
        request.vibe, request.entropy,
    );

    Prompt { system, user }
}

fn exclusion_line(words: &[String]) -> String {
    if words.is_empty() {
        String::new()
    } else {
        format!("VERMEIDE DIESE WÖRTER: {}", words.join(", "))
    }
}
