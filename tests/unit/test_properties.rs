use proptest::prelude::*;
use wyr_core::{
    config::{ModerationThresholds, Settings},
    infrastructure::{
        moderation::{ModerationEngine, PriorityRanker, TextClassifier, compute_similarity},
        scoring::score_prediction,
    },
};

fn engine() -> ModerationEngine {
    ModerationEngine::from_settings(&Settings::default())
}

proptest! {
    #[test]
    fn similarity_identity(s in ".{0,60}") {
        prop_assert_eq!(compute_similarity(&s, &s), 1.0);
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in ".{0,40}", b in ".{0,40}") {
        let ab = compute_similarity(&a, &b);
        let ba = compute_similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn adding_banned_word_never_lowers_severity(text in "[a-zA-Z !?.]{0,60}") {
        let classifier = TextClassifier::new(Settings::default().lexicons);
        let before = classifier.classify(&text);
        let after = classifier.classify(&format!("{text} shit"));
        prop_assert!(after.severity >= before.severity);
        prop_assert!(after.should_auto_delete);
    }

    #[test]
    fn flag_threshold_always_blocks(
        a in "[a-z ]{10,40}",
        b in "[a-z ]{10,40}",
        extra in 0u32..1000,
    ) {
        let threshold = Settings::default().thresholds.auto_delete;
        let decision = engine().moderate(&a, &b, threshold + extra);
        prop_assert!(!decision.should_allow);
    }

    #[test]
    fn moderation_is_deterministic(
        a in ".{0,80}",
        b in ".{0,80}",
        flags in 0u32..20,
    ) {
        let first = serde_json::to_vec(&engine().moderate(&a, &b, flags)).unwrap();
        let second = serde_json::to_vec(&engine().moderate(&a, &b, flags)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn priority_is_monotone(count in 0u32..10_000) {
        let ranker = PriorityRanker::new(&ModerationThresholds::default());
        prop_assert!(ranker.priority(count) <= ranker.priority(count + 1));
    }

    #[test]
    fn accuracy_stays_in_range(
        predicted in 0u8..=100,
        total in 0u32..5_000,
        share in 0.0f64..=1.0,
    ) {
        let votes_a = (total as f64 * share).floor() as u32;
        let score = score_prediction(predicted, votes_a, total);
        prop_assert!(score.accuracy <= 100);
        prop_assert!(score.actual_percentage_a <= 100);
        prop_assert_eq!(u32::from(score.accuracy), 100 - score.difference.min(100));
    }
}
