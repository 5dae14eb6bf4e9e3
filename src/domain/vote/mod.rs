pub mod entity;
pub mod repository;

pub use entity::Vote;
pub use repository::VoteRepository;
