use wyr_core::{
    config::Settings,
    domain::moderation::Severity,
    infrastructure::{
        moderation::{ModerationEngine, compute_similarity},
        scoring::score_prediction,
    },
};

fn engine() -> ModerationEngine {
    ModerationEngine::from_settings(&Settings::default())
}

#[test]
fn golden_banned_question() {
    let decision = engine().moderate("Would you rather eat shit", "Would you rather die", 0);
    assert!(!decision.should_allow);
    assert!(decision.should_auto_delete);
    assert_eq!(decision.severity, Severity::High);

    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "should_allow": false,
            "should_flag": true,
            "should_auto_delete": true,
            "severity": "high",
            "reasons": [
                "Contains banned words: shit",
                "Contains banned words: die"
            ]
        })
    );
}

#[test]
fn golden_duplicate_options() {
    let validation = engine().validate("same text", "same text");
    assert!(!validation.is_valid);
    assert!(validation.errors.iter().any(|e| e.contains("must be different")));
}

#[test]
fn golden_prediction_scores() {
    let score = score_prediction(50, 0, 0);
    assert_eq!((score.actual_percentage_a, score.accuracy), (50, 100));

    let score = score_prediction(65, 342, 1000);
    assert_eq!(
        (score.actual_percentage_a, score.difference, score.accuracy),
        (34, 31, 69)
    );
}

#[test]
fn golden_similarity_of_empty_strings() {
    assert_eq!(compute_similarity("", ""), 1.0);
}

#[test]
fn classification_json_is_stable() {
    let result = engine().classify("Win CASH prizes now!!!");
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"is_clean":true,"should_flag":true,"should_auto_delete":false,"severity":"medium","reasons":["Contains review words: cash, prize","Excessive punctuation"],"matched_words":["cash","prize"]}"#
    );
}
