pub mod creator;
pub mod errors;
pub mod moderation;
pub mod question;
pub mod vote;
