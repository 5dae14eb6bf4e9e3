pub mod entity;
pub mod repository;

pub use entity::{Question, QuestionStatus, percentage_a};
pub use repository::QuestionRepository;
