//! Question data and per-question interaction
//!
//! This module contains the immutable question records, the parsing of the
//! blank marker in a prompt, and the drag-and-drop protocol that runs for
//! each rendered question.

pub mod config;
pub mod drop_zone;
pub mod prompt;
