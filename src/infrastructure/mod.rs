pub mod moderation;
pub mod scoring;
