//! Moderation and scoring configuration.
//!
//! Settings are layered with the `config` crate: built-in defaults first, then an
//! optional TOML file, then environment variables. Every component receives the
//! slice of configuration it needs at construction time and never mutates it.
//!
//! # Environment Variables
//!
//! Variables use the `WYR` prefix and `__` as the section separator:
//!
//! - `WYR__THRESHOLDS__AUTO_FLAG_REPORTS`: Reports before a question enters the queue (default: 3)
//! - `WYR__THRESHOLDS__HIGH_PRIORITY`: Flags before a question is high priority (default: 5)
//! - `WYR__THRESHOLDS__AUTO_DELETE`: Flags before a question is auto-deleted (default: 10)
//! - `WYR__THRESHOLDS__MIN_LENGTH`: Minimum option length in characters (default: 10)
//! - `WYR__THRESHOLDS__MAX_LENGTH`: Maximum option length in characters (default: 200)
//! - `WYR__LEXICONS__BANNED`: Comma separated banned terms
//! - `WYR__LEXICONS__REVIEW`: Comma separated review terms
//! - `WYR__VISIBILITY__MIN_VOTES_BEFORE_SHOWING_STATS`: (default: 10)
//! - `WYR__LIFECYCLE__MIN_VOTES_TO_CLOSE`: (default: 100)
//! - `WYR__LIFECYCLE__MAX_DAYS_ACTIVE`: (default: 7)
//! - `WYR__REVENUE__CREATOR_SHARE`: Fraction of gross paid to creators (default: 0.7)
//! - `WYR__REVENUE__MINIMUM_PAYOUT`: Minimum payout in dollars (default: 10.0)
//! - `RUST_LOG`: Logging filter for the binary (default: "info,wyr_core=debug")

use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "WYR";
const DEFAULT_FILE: &str = "moderation";

/// Complete configuration for the moderation and scoring core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub thresholds: ModerationThresholds,
    pub lexicons: Lexicons,
    pub visibility: VisibilityRules,
    pub lifecycle: LifecycleRules,
    pub revenue: RevenueConfig,
}

/// Numeric knobs shared by the validator, decision engine and priority ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationThresholds {
    /// User reports before a question is surfaced to moderators
    pub auto_flag_reports: u32,

    /// Flags before a question is marked high priority
    pub high_priority: u32,

    /// Flags before a question is deleted regardless of its text
    pub auto_delete: u32,

    /// Minimum characters per option
    pub min_length: usize,

    /// Maximum characters per option
    pub max_length: usize,
}

impl Default for ModerationThresholds {
    fn default() -> Self {
        Self {
            auto_flag_reports: 3,
            high_priority: 5,
            auto_delete: 10,
            min_length: 10,
            max_length: 200,
        }
    }
}

/// Term lists scanned by the text classifier.
///
/// Matching is plain substring containment on lower-cased text, so short terms
/// also match inside longer words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicons {
    /// Terms that cause an automatic delete
    pub banned: Vec<String>,

    /// Borderline terms that only send the text to review
    pub review: Vec<String>,
}

impl Lexicons {
    /// Builds lexicons from arbitrary term lists, lower-casing and de-duplicating
    /// while keeping first-seen order.
    pub fn new<I, J, S>(banned: I, review: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            banned: normalize_terms(banned),
            review: normalize_terms(review),
        }
    }

    /// Same normalization as [`Lexicons::new`], applied to lists loaded from config.
    pub fn normalized(&self) -> Self {
        Self::new(&self.banned, &self.review)
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED.iter(), DEFAULT_REVIEW.iter())
    }
}

fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}

const DEFAULT_BANNED: &[&str] = &[
    // profanity
    "fuck",
    "shit",
    "bitch",
    "asshole",
    "cunt",
    "dick",
    "pussy",
    // hate speech
    "nigger",
    "faggot",
    "retard",
    "tranny",
    // violence and self-harm
    "kill yourself",
    "kys",
    "suicide",
    "die",
    // spam
    "free iphone",
    "click here",
    "buy now",
    "limited time",
    "act fast",
    "winner",
    "congratulations",
    // scams
    "nigerian prince",
    "wire transfer",
    "bitcoin wallet",
    "send money",
];

const DEFAULT_REVIEW: &[&str] = &[
    "sex", "porn", "nude", "naked", "drugs", "weed", "cocaine", "alcohol", "drunk", "money",
    "cash", "prize",
];

/// When vote percentages become visible to voters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityRules {
    pub min_votes_before_showing_stats: u32,
}

impl Default for VisibilityRules {
    fn default() -> Self {
        Self {
            min_votes_before_showing_stats: 10,
        }
    }
}

/// When an active question closes on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleRules {
    pub min_votes_to_close: u32,
    pub max_days_active: i64,
}

impl Default for LifecycleRules {
    fn default() -> Self {
        Self {
            min_votes_to_close: 100,
            max_days_active: 7,
        }
    }
}

/// Creator revenue share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueConfig {
    /// Fraction of gross revenue paid to the creator
    pub creator_share: f64,

    /// Smallest creator balance that can be paid out, in dollars
    pub minimum_payout: f64,
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            creator_share: 0.7,
            minimum_payout: 10.0,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    ///
    /// When `path` is `None` a `moderation.{toml,json,yaml}` file in the working
    /// directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` does not exist, a source cannot be
    /// parsed, or the thresholds are inconsistent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_FILE).required(false),
        };

        let settings: Settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("lexicons.banned")
                    .with_list_parse_key("lexicons.review"),
            )
            .build()?
            .try_deserialize()?;

        let settings = Settings {
            lexicons: settings.lexicons.normalized(),
            ..settings
        };
        settings.check()?;
        Ok(settings)
    }

    /// Reject threshold combinations that would make the ladders meaningless.
    pub fn check(&self) -> anyhow::Result<()> {
        let t = &self.thresholds;
        if t.min_length > t.max_length {
            anyhow::bail!(
                "min_length ({}) must not exceed max_length ({})",
                t.min_length,
                t.max_length
            );
        }
        if t.auto_flag_reports > t.high_priority {
            anyhow::bail!(
                "auto_flag_reports ({}) must not exceed high_priority ({})",
                t.auto_flag_reports,
                t.high_priority
            );
        }
        if !(0.0..=1.0).contains(&self.revenue.creator_share) {
            anyhow::bail!(
                "creator_share must be within 0..=1, got {}",
                self.revenue.creator_share
            );
        }
        Ok(())
    }
}
