//! Drag-and-drop protocol for a rendered question
//!
//! Every rendered question owns one drop zone. The zone moves from `Idle`
//! to `DragOver` while a choice hovers over it and back when the drag
//! leaves. A drop evaluates the payload and moves the zone to `Dropped`,
//! which is terminal: only rendering the question again produces a fresh
//! zone.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::constants::feedback::*;

use super::config::Question;

/// The phase of a drop zone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ZoneState {
    /// Waiting for a choice to be dragged over
    #[default]
    Idle,
    /// A choice is hovering over the zone
    DragOver,
    /// A choice was dropped and evaluated
    Dropped,
}

/// Result of evaluating a dropped choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Outcome {
    /// The payload matched the correct answer exactly
    Correct,
    /// Anything else
    Incorrect,
}

impl Outcome {
    /// Evaluates a payload against a question
    pub fn of(question: &Question, chosen: &str) -> Self {
        if question.is_correct(chosen) {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Feedback shown for this outcome
    pub fn feedback(self) -> Feedback {
        feedback_table()[self]
    }
}

/// Feedback text, styling and effect glyph for one outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Message shown in the feedback area
    pub text: &'static str,
    /// Colour of the message
    pub color: &'static str,
    /// Glyph rained over the page
    #[serde(skip)]
    pub glyph: &'static str,
}

/// Feedback for every outcome
pub fn feedback_table() -> EnumMap<Outcome, Feedback> {
    enum_map! {
        Outcome::Correct => Feedback {
            text: CORRECT_TEXT,
            color: CORRECT_COLOR,
            glyph: CORRECT_GLYPH,
        },
        Outcome::Incorrect => Feedback {
            text: INCORRECT_TEXT,
            color: INCORRECT_COLOR,
            glyph: INCORRECT_GLYPH,
        },
    }
}

/// What the page shows once a question is answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Text placed in the drop zone
    pub chosen: String,
    /// Whether it was correct
    pub outcome: Outcome,
    /// Feedback for the outcome
    pub feedback: Feedback,
    /// Explanation revealed alongside the feedback
    pub explanation: String,
}

/// Drop zone updates sent to the surface
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Add or remove the hover mark
    Hover(bool),
    /// Show the answer, mark the zone, reveal feedback, explanation and "next"
    Answered(Answer),
}

/// Snapshot of a drop zone for a surface that attaches late
#[derive(Debug, Serialize, Clone)]
pub struct SyncMessage {
    /// Whether the hover mark is shown
    pub hover: bool,
    /// The evaluated answer, if any
    pub answer: Option<Answer>,
}

/// Runtime state of the drop zone of the current question
#[derive(Debug, Clone, Default)]
pub struct State {
    state: ZoneState,
    /// Payload of the drag in progress
    transfer: Option<String>,
    answer: Option<Answer>,
}

impl State {
    /// Returns the current phase
    pub fn state(&self) -> ZoneState {
        self.state
    }

    /// Returns the evaluated answer once dropped
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    fn change_state(&mut self, before: ZoneState, after: ZoneState) -> bool {
        if self.state == before {
            self.state = after;

            true
        } else {
            false
        }
    }

    /// Records the payload of a drag that just started
    pub fn drag_start(&mut self, payload: &str) {
        if self.state != ZoneState::Dropped {
            self.transfer = Some(payload.to_owned());
        }
    }

    /// Marks the zone as hovered
    ///
    /// Returns `true` only on the transition, so repeated drag-over events
    /// do not produce repeated updates.
    pub fn drag_over(&mut self) -> bool {
        self.change_state(ZoneState::Idle, ZoneState::DragOver)
    }

    /// Removes the hover mark; returns `true` if it was set
    pub fn drag_leave(&mut self) -> bool {
        self.change_state(ZoneState::DragOver, ZoneState::Idle)
    }

    /// Evaluates a drop
    ///
    /// The payload is the text delivered with the drop event, or else the
    /// payload recorded when the drag started, or else empty. Returns `None`
    /// if the zone has already been dropped on.
    pub fn drop(&mut self, question: &Question, payload: Option<String>) -> Option<Answer> {
        if !(self.change_state(ZoneState::DragOver, ZoneState::Dropped)
            || self.change_state(ZoneState::Idle, ZoneState::Dropped))
        {
            return None;
        }

        let chosen = payload.or_else(|| self.transfer.take()).unwrap_or_default();
        let outcome = Outcome::of(question, &chosen);
        let answer = Answer {
            chosen,
            outcome,
            feedback: outcome.feedback(),
            explanation: question.explanation.clone(),
        };
        self.transfer = None;
        self.answer = Some(answer.clone());

        Some(answer)
    }

    /// Returns a snapshot of the zone
    pub fn sync_message(&self) -> SyncMessage {
        SyncMessage {
            hover: self.state == ZoneState::DragOver,
            answer: self.answer.clone(),
        }
    }
}
