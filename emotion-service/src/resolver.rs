//! Deterministic emotion resolution.
//!
//! Combines the sentiment classifier's class index with an ordered keyword
//! scan of the input text. The keyword list order is observable behavior:
//! when several keywords occur in a text, the earliest list entry wins,
//! regardless of where each keyword appears in the text.

/// The classifier's five ordinal classes, most negative first.
pub const EMOTION_LABELS: [&str; 5] = [
    "Triste/a",
    "Frustrado/a",
    "Neutral/a",
    "Feliz/a",
    "Orgulloso/a",
];

/// Keyword substring -> override label, scanned in order, first match wins.
/// Do not reorder.
const KEYWORD_OVERRIDES: [(&str, &str); 17] = [
    ("error", "Confundido/a"),
    ("problema", "Frustrado/a"),
    ("molest", "Enojado/a"),
    ("increíble", "Sorpresa/a"),
    ("amo", "Amor/a"),
    ("miedo", "Miedo/a"),
    ("confus", "Confundido/a"),
    ("verguenz", "Avergonzado/a"),
    ("orgull", "Orgulloso/a"),
    ("cansan", "Cansado/a"),
    ("nervios", "Nervioso/a"),
    ("frustra", "Frustrado/a"),
    ("aburr", "Aburrido/a"),
    ("relaja", "Relajado/a"),
    ("ansio", "Ansioso/a"),
    ("inspira", "Inspirado/a"),
    ("desinterés", "Desinteresado/a"),
];

/// Display glyph per label. The override labels are a superset of the base
/// labels, so this table covers both.
const GLYPHS: [(&str, &str); 18] = [
    ("Feliz/a", "😊"),
    ("Triste/a", "😞"),
    ("Enojado/a", "😡"),
    ("Neutral/a", "😐"),
    ("Sorpresa/a", "😲"),
    ("Amor/a", "❤️"),
    ("Miedo/a", "😨"),
    ("Confundido/a", "🤔"),
    ("Avergonzado/a", "😳"),
    ("Orgulloso/a", "😎"),
    ("Cansado/a", "😴"),
    ("Nervioso/a", "😬"),
    ("Frustrado/a", "😤"),
    ("Desinteresado/a", "😒"),
    ("Relajado/a", "😌"),
    ("Ansioso/a", "😟"),
    ("Aburrido/a", "😑"),
    ("Inspirado/a", "✨"),
];

/// A fully resolved emotion for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionRecord {
    pub text: String,
    /// Raw label at the model's predicted class index.
    pub base_label: &'static str,
    /// Final label after keyword overriding; equals `base_label` when no
    /// keyword matched.
    pub resolved_label: &'static str,
    /// Probability at the predicted index, as a percentage (0-100).
    pub confidence: f64,
    pub glyph: &'static str,
}

/// Resolves the final emotion for `text` given the model's predicted class
/// index and its probability vector. Pure: same inputs, same record.
///
/// Returns `None` when the index falls outside both tables, which a
/// well-behaved model never produces.
pub fn resolve(text: &str, predicted_index: usize, probabilities: &[f32]) -> Option<EmotionRecord> {
    let base_label = *EMOTION_LABELS.get(predicted_index)?;
    let confidence = f64::from(*probabilities.get(predicted_index)?) * 100.0;

    let lowered = text.to_lowercase();
    let resolved_label = KEYWORD_OVERRIDES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, label)| *label)
        .unwrap_or(base_label);

    Some(EmotionRecord {
        text: text.to_string(),
        base_label,
        resolved_label,
        confidence,
        glyph: glyph_for(resolved_label),
    })
}

/// Glyph for a resolved label; unmapped labels get an empty string.
pub fn glyph_for(label: &str) -> &'static str {
    GLYPHS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("")
}

/// The base labels the classifier can produce, in ordinal order.
pub fn supported_emotions() -> Vec<String> {
    EMOTION_LABELS.iter().map(|label| label.to_string()).collect()
}
