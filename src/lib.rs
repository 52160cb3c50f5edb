//! # Drop Quiz Library
//!
//! This library provides the engine behind drag-and-drop fill-in-the-blank
//! quizzes. It runs one quiz session: rendering questions, evaluating the
//! choice dropped into each blank, keeping the score, navigating between
//! questions and ending on a completion summary. The page itself is driven
//! through the [`session::Surface`] trait, so the same engine serves a WASM
//! DOM binding or any other front end.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]
use serde::{Deserialize, Serialize};

pub mod constants;

pub mod effect;
pub mod game;
pub mod quiz;
pub mod session;
pub mod site;

/// Messages sent to bring a late surface up to date
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum SyncMessage {
    /// Session snapshot
    Game(game::SyncMessage),
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Messages sent to update parts of the page
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum UpdateMessage {
    /// Question rendering, summary and navigation
    Game(game::UpdateMessage),
    /// Drop zone hover marks and evaluated answers
    DropZone(quiz::drop_zone::UpdateMessage),
    /// Feedback effect updates
    Effect(effect::UpdateMessage),
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Alarm messages for timed events
///
/// The host schedules these when asked and hands them back to
/// [`game::Game::receive_alarm`] once the delay has elapsed.
#[derive(Debug, Clone, derive_more::From, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Feedback effect alarms
    Effect(effect::AlarmMessage),
}
