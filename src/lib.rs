//! Moderation and prediction scoring core for the Would You Rather game.
//!
//! Every component is a pure function of its inputs and the configuration it
//! was built with, so a single instance can be shared across threads.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
