pub mod admin_action;
pub mod report_question;
pub mod score_predictions;
pub mod submit_question;
