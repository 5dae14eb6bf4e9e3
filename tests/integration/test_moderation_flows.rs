use super::helpers::{publish, spawn_app, submission};
use wyr_core::{
    application::{
        admin_action::dto::AdminActionRequest, report_question::dto::ReportQuestionRequest,
        submit_question::dto::SubmissionOutcome,
    },
    domain::{
        errors::DomainError,
        moderation::{AdminAction, ModerationType, PriorityLevel, Severity},
        question::QuestionStatus,
    },
    infrastructure::moderation::PriorityRanker,
};
use uuid::Uuid;

fn report(question_id: Uuid) -> ReportQuestionRequest {
    ReportQuestionRequest {
        question_id,
        reporter_id: Uuid::now_v7(),
        reason: "spam".to_string(),
    }
}

#[test]
fn reports_escalate_from_queue_to_auto_delete() {
    let app = spawn_app();
    let question = publish(&app, "Be able to fly", "Be invisible at will");
    assert!(app.queue.flags.lock().unwrap().is_empty());

    let mut priorities = Vec::new();
    for expected in 1..=9u32 {
        let outcome = app.report.execute(report(question.id)).unwrap();
        assert_eq!(outcome.flagged_count, expected);
        assert!(!outcome.deleted);
        priorities.push(outcome.priority);
    }
    assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(priorities[1], PriorityLevel::Low);
    assert_eq!(priorities[2], PriorityLevel::Medium);
    assert_eq!(priorities[4], PriorityLevel::High);

    // only the third report queued the question
    let flags = app.queue.flags.lock().unwrap().clone();
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].kind, ModerationType::UserReport);
    assert_eq!(flags[0].question_id, question.id);

    let outcome = app.report.execute(report(question.id)).unwrap();
    assert!(outcome.deleted);
    assert_eq!(outcome.decision.severity, Severity::High);
    assert!(app.questions.get(question.id).is_none());

    let actions = app.queue.actions.lock().unwrap().clone();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action, AdminAction::Deleted);
    assert_eq!(actions[0].reason, "Exceeded flag threshold (10 flags)");

    let after = app.report.execute(report(question.id));
    assert!(matches!(after, Err(DomainError::NotFound(_))));
}

#[test]
fn flagged_submission_lands_in_admin_queue() {
    let app = spawn_app();
    let outcome = app
        .submit
        .execute(submission("GO TO THE MOON TODAY", "Be invisible at will"))
        .unwrap();
    let SubmissionOutcome::Published { question, flag, .. } = outcome else {
        panic!("caps abuse should publish with a flag");
    };
    let flag = flag.expect("flag");
    assert_eq!(flag.question_id, question.id);
    assert_eq!(flag.kind, ModerationType::Auto);
    assert_eq!(flag.reason, "Excessive capitalization (spam indicator)");
    assert_eq!(app.queue.flags.lock().unwrap().len(), 1);
}

#[test]
fn spam_submission_is_never_stored() {
    let app = spawn_app();
    let outcome = app
        .submit
        .execute(submission("Visit www.example.com", "Be invisible at will"))
        .unwrap();
    let SubmissionOutcome::Rejected { decision } = outcome else {
        panic!("links must be rejected");
    };
    assert!(decision.should_auto_delete);
    assert_eq!(decision.summary(), "Contains URL or email (spam)");
}

#[test]
fn admin_queue_summary_matches_report_counts() {
    let app = spawn_app();
    let counts = [8u32, 6, 2];
    let mut queue = Vec::new();
    for (i, count) in counts.iter().enumerate() {
        let question = publish(
            &app,
            &format!("Option number {i} A"),
            &format!("Choice {i} totally B"),
        );
        for _ in 0..*count {
            app.report.execute(report(question.id)).unwrap();
        }
        queue.push(app.questions.get(question.id).unwrap());
    }

    let ranker = PriorityRanker::new(&app.settings.thresholds);
    let summary = ranker.summarize(&queue);
    assert_eq!((summary.high, summary.medium, summary.low), (2, 0, 1));
}

fn admin(question_id: Uuid, action: AdminAction, reason: &str) -> AdminActionRequest {
    AdminActionRequest {
        admin_id: "admin-1".to_string(),
        question_id,
        action,
        reason: Some(reason.to_string()),
    }
}

#[test]
fn admin_reviews_a_reported_question() {
    let app = spawn_app();
    let question = publish(&app, "Be able to fly", "Be invisible at will");
    for _ in 0..3 {
        app.report.execute(report(question.id)).unwrap();
    }

    app.admin
        .execute(admin(question.id, AdminAction::Paused, "under review"))
        .unwrap();
    let stored = app.questions.get(question.id).unwrap();
    assert_eq!(stored.status, QuestionStatus::Paused);
    assert_eq!(stored.flagged_count, 3);

    // a paused question cannot be paused again
    let again = app
        .admin
        .execute(admin(question.id, AdminAction::Paused, "twice"));
    assert!(matches!(again, Err(DomainError::InvalidState(_))));

    let log = app
        .admin
        .execute(admin(question.id, AdminAction::Deleted, "targets a real person"))
        .unwrap();
    assert!(app.questions.get(question.id).is_none());
    assert_eq!(log.reason, "targets a real person");

    let actions = app.queue.actions.lock().unwrap().clone();
    let kinds: Vec<_> = actions.iter().map(|a| a.action).collect();
    assert_eq!(kinds, vec![AdminAction::Paused, AdminAction::Deleted]);
    assert!(actions.iter().all(|a| a.admin_id == "admin-1"));
}
