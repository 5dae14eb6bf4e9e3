pub mod flag;
pub mod queue;
pub mod severity;
pub mod verdict;

pub use flag::{AUTO_MODERATOR, AdminAction, AdminLog, ModerationFlag, ModerationType};
pub use queue::ModerationQueue;
pub use severity::{PriorityLevel, Severity};
pub use verdict::{ModerationDecision, ModerationResult, QuestionValidation, format_reasons};
