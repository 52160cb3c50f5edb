//! Presentation surface abstraction
//!
//! This module defines the trait through which the quiz engine drives the
//! page it is embedded in. The engine never touches the page directly: it
//! describes every change as a message and the host binding (a WASM DOM
//! binding, a terminal front end, a test recorder) applies it.

use super::{SyncMessage, UpdateMessage};

/// Trait for sending render messages to the page hosting the quiz
///
/// Implementations own the named regions of the page: question text,
/// choices, feedback, explanation, and the "next", "back" and "home"
/// controls.
pub trait Surface {
    /// Applies an incremental change to the page
    ///
    /// # Arguments
    ///
    /// * `message` - The update to apply
    fn send_message(&self, message: &UpdateMessage);

    /// Replaces whatever the page shows with a complete snapshot
    ///
    /// Snapshots are sent when a surface attaches after the quiz has
    /// already started.
    ///
    /// # Arguments
    ///
    /// * `state` - The snapshot to render
    fn send_state(&self, state: &SyncMessage);
}
