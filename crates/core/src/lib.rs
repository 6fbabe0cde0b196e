pub mod action;
pub mod display_time;
pub mod error;
pub mod normalize;
pub mod types;
