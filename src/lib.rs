//! Folio Library
//!
//! Core library for the Folio portfolio desktop application.

pub mod app;
pub mod bot;
pub mod content;
pub mod gallery;
pub mod storage;
pub mod types;
pub mod ui;
