//! StudyDesk: academic task and deadline tracking.
//!
//! The crate is split into a data model ([`models`]), pure view derivations
//! ([`views`]), and an in-memory state container ([`board::TaskBoard`]) that
//! owns the collections and hands out borrows to the views.

pub mod board;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod render;
pub mod views;

pub use error::{Error, Result};
