//! Core data types

pub mod message;
pub mod project;
