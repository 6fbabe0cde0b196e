pub mod actions;
pub mod webhook;
