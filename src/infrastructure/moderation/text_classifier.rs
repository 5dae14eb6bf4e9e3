use crate::config::Lexicons;
use crate::domain::moderation::{ModerationResult, Severity};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument};

lazy_static! {
    static ref EXCESSIVE_PUNCTUATION: Regex = Regex::new(r"[!?]{3,}").unwrap();
    static ref URL_PATTERN: Regex = Regex::new(r"(?i)https?://|www\.").unwrap();
    static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

/// Texts at or below this many characters are never caps abuse.
const CAPS_MIN_LENGTH: usize = 10;
const CAPS_RATIO_LIMIT: f64 = 0.5;

const REASON_CAPS: &str = "Excessive capitalization (spam indicator)";
const REASON_PUNCTUATION: &str = "Excessive punctuation";
const REASON_LINK: &str = "Contains URL or email (spam)";

/// Scans free text against the lexicons and a few spam heuristics.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    lexicons: Lexicons,
}

impl TextClassifier {
    pub fn new(lexicons: Lexicons) -> Self {
        Self {
            lexicons: lexicons.normalized(),
        }
    }

    /// Classifies one text.
    ///
    /// Reasons are always emitted in the same order: banned words, review
    /// words, capitalization, punctuation, links.
    #[instrument(level = "debug", skip(self, text), fields(text_length = text.len()))]
    pub fn classify(&self, text: &str) -> ModerationResult {
        let lowered = text.to_lowercase();
        let banned = matched_terms(&lowered, &self.lexicons.banned);
        let review = matched_terms(&lowered, &self.lexicons.review);
        let excessive_caps = has_excessive_caps(text);
        let excessive_punctuation = EXCESSIVE_PUNCTUATION.is_match(text);
        let has_link = URL_PATTERN.is_match(text) || EMAIL_PATTERN.is_match(text);

        let mut severity = Severity::Low;
        let mut should_auto_delete = false;
        let mut reasons = Vec::new();

        if !banned.is_empty() {
            severity = Severity::High;
            should_auto_delete = true;
            reasons.push(format!("Contains banned words: {}", banned.join(", ")));
        }

        if !review.is_empty() {
            severity = severity.max(Severity::Medium);
            reasons.push(format!("Contains review words: {}", review.join(", ")));
        }

        if excessive_caps {
            severity = severity.max(Severity::Medium);
            reasons.push(REASON_CAPS.to_string());
        }

        if excessive_punctuation {
            severity = severity.max(Severity::Medium);
            reasons.push(REASON_PUNCTUATION.to_string());
        }

        if has_link {
            severity = Severity::High;
            should_auto_delete = true;
            reasons.push(REASON_LINK.to_string());
        }

        let is_clean = banned.is_empty() && !should_auto_delete;
        let should_flag = !is_clean || !review.is_empty() || excessive_caps;

        if should_flag {
            debug!(%severity, signals = reasons.len(), "text flagged");
        }

        ModerationResult {
            is_clean,
            should_flag,
            should_auto_delete,
            severity,
            reasons,
            matched_words: banned.into_iter().chain(review).collect(),
        }
    }
}

/// Plain substring containment, so short terms also hit inside longer words.
fn matched_terms(lowered: &str, terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .cloned()
        .collect()
}

fn has_excessive_caps(text: &str) -> bool {
    let length = text.chars().count();
    if length <= CAPS_MIN_LENGTH {
        return false;
    }
    let uppercase = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    uppercase as f64 / length as f64 > CAPS_RATIO_LIMIT
}
