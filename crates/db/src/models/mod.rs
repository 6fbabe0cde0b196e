//! Row models for database tables.

pub mod action;
