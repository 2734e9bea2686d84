//! Sentiment badge formatting.

/// Sentiments the page has an emoji for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl Sentiment {
    /// Parse an already-lowercased sentiment.
    pub fn from_lowercase(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "mixed" => Some(Sentiment::Mixed),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😔",
            Sentiment::Neutral => "😐",
            Sentiment::Mixed => "🤔",
        }
    }
}

/// Base class every badge carries.
pub const BADGE_BASE_CLASS: &str = "sentiment-badge";

/// Uppercase the first character, keep the rest as is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Badge text and class list for a raw sentiment value.
///
/// Unknown sentiments keep their label with an empty emoji prefix.
pub(super) fn badge(raw: &str) -> (String, Vec<String>) {
    let lower = raw.to_lowercase();
    let label = capitalize(&lower);
    let emoji = Sentiment::from_lowercase(&lower).map_or("", Sentiment::emoji);
    let classes = vec![BADGE_BASE_CLASS.to_string(), format!("sentiment-{lower}")];
    (format!("{emoji} {label}"), classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sentiment_gets_emoji_and_class() {
        let (text, classes) = badge("Positive");
        assert_eq!(text, "😊 Positive");
        assert_eq!(classes, vec!["sentiment-badge", "sentiment-positive"]);
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let (text, classes) = badge("MIXED");
        assert_eq!(text, "🤔 Mixed");
        assert_eq!(classes[1], "sentiment-mixed");
    }

    #[test]
    fn unknown_sentiment_has_empty_emoji() {
        let (text, classes) = badge("ecstatic");
        assert_eq!(text, " Ecstatic");
        assert_eq!(classes[1], "sentiment-ecstatic");
    }

    #[test]
    fn capitalize_handles_non_ascii() {
        assert_eq!(capitalize("émouvant"), "Émouvant");
        assert_eq!(capitalize(""), "");
    }
}
