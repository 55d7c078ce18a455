//! Core domain types for states, variants, and selections.

pub mod selection;
pub mod spec;
pub mod state;
pub mod variant;
