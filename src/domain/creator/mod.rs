pub mod credits;
pub mod earnings;

pub use credits::{CreditPack, Credits};
pub use earnings::CreatorEarnings;
