//! Core quiz session logic
//!
//! This module contains the [`Game`] struct that drives one traversal of a
//! quiz: it renders the current question, evaluates drops, keeps the score,
//! moves forward and backward through the questions and finally shows the
//! completion summary with its home action.
//!
//! The host binding forwards every UI event as an [`IncomingMessage`] to
//! [`Game::receive_message`]. Each call runs to completion and describes its
//! visible effects as messages to a [`Surface`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

use crate::{
    AlarmMessage, constants, effect,
    quiz::{
        config::{Question, Quiz},
        drop_zone::{self, Outcome},
        prompt::PromptSegment,
    },
    session::Surface,
    site::SiteRoot,
};

/// Errors that can occur when creating a quiz session
#[derive(Error, Debug)]
pub enum Error {
    /// The question list is empty
    #[error("quiz has no questions")]
    NoQuestions,
    /// The question data could not be parsed
    #[error("invalid question data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-session configuration
///
/// Every field falls back to the defaults in [`crate::constants`] when
/// missing from the deserialized input.
#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Location the completion screen's home action navigates to
    home: String,
    /// Number of particles per feedback rain
    particle_count: usize,
    /// Delay before an empty rain container is removed
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    cleanup_grace: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            home: constants::site::HOME_LOCATION.to_owned(),
            particle_count: constants::effect::PARTICLE_COUNT,
            cleanup_grace: Duration::from_millis(constants::effect::CLEANUP_GRACE_MILLIS),
        }
    }
}

impl Options {
    /// Points the home action at the entry document of `root`
    #[must_use]
    pub fn with_site_root(mut self, root: &SiteRoot) -> Self {
        self.home = root.home();
        self
    }

    /// Returns the home location
    pub fn home(&self) -> &str {
        &self.home
    }
}

/// The question currently on screen
#[derive(Debug, Clone)]
pub struct CurrentQuestion {
    /// Index of the question in the quiz
    pub index: usize,
    /// Drop zone of this rendering of the question
    pub drop_zone: drop_zone::State,
}

impl CurrentQuestion {
    fn fresh(index: usize) -> Self {
        Self {
            index,
            drop_zone: drop_zone::State::default(),
        }
    }
}

/// Phase of the session
#[derive(Debug, Clone)]
pub enum State {
    /// Created but nothing rendered yet
    Unstarted,
    /// Showing a question
    Question(Box<CurrentQuestion>),
    /// Showing the completion summary
    Done,
}

/// Final score line, displayed as `correct / total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{correct} / {total}")]
pub struct Score {
    /// Drops evaluated as correct over the whole session
    pub correct: usize,
    /// Number of questions in the quiz
    pub total: usize,
}

/// UI events forwarded by the host binding
#[derive(Debug, Deserialize, Clone)]
pub enum IncomingMessage {
    /// A drag started on the choice at this index
    DragStart(usize),
    /// A drag is over the drop zone
    DragOver,
    /// A drag left the drop zone without dropping
    DragLeave,
    /// Something was dropped on the drop zone, with the text it carried if
    /// the binding could read it
    Drop(Option<String>),
    /// The "next" control was clicked
    Next,
    /// The "back" control was clicked
    Back,
    /// The completion screen's home action was clicked
    Home,
}

/// Session-level updates sent to the surface
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Render a question
    ///
    /// The surface places the prompt with its drop zone, lists the choices,
    /// hides feedback, explanation and "next", and shows "back" as told.
    QuestionAnnouncement {
        /// Index of the question (0-based)
        index: usize,
        /// Total number of questions
        count: usize,
        /// Prompt split around its drop zone
        prompt: Vec<PromptSegment>,
        /// Draggable choices in display order; each carries its own text
        choices: Vec<String>,
        /// Whether the "back" control is shown
        back_visible: bool,
    },
    /// Replace the question with the completion summary
    ///
    /// The surface clears choices, feedback and explanation, hides "next"
    /// and "back", and offers the home action.
    Summary(Score),
    /// Navigate the page to this location
    Navigate(String),
}

/// Complete snapshot of the session
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// Nothing rendered yet
    Unstarted,
    /// A question is on screen
    Question {
        /// Index of the question (0-based)
        index: usize,
        /// Total number of questions
        count: usize,
        /// Prompt split around its drop zone
        prompt: Vec<PromptSegment>,
        /// Draggable choices in display order
        choices: Vec<String>,
        /// Whether the "back" control is shown
        back_visible: bool,
        /// Whether the "next" control is shown
        next_visible: bool,
        /// State of the drop zone
        drop_zone: drop_zone::SyncMessage,
    },
    /// The completion summary is on screen
    Summary(Score),
}

/// One traversal of a quiz
pub struct Game {
    quiz: Quiz,
    /// Current phase of the session
    pub state: State,
    /// Drops evaluated as correct so far
    score: usize,
    options: Options,
}

impl Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("questions", &self.quiz.len())
            .field("state", &self.state)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a session for a quiz without rendering anything
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoQuestions`] if the quiz is empty.
    pub fn new(quiz: Quiz, options: Options) -> Result<Self, Error> {
        if quiz.is_empty() {
            return Err(Error::NoQuestions);
        }

        Ok(Self {
            quiz,
            state: State::Unstarted,
            score: 0,
            options,
        })
    }

    /// Creates a session from question data embedded in the page
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the data is not a list of questions and
    /// [`Error::NoQuestions`] if the list is empty.
    pub fn from_json(json: &str, options: Options) -> Result<Self, Error> {
        Self::new(Quiz::from_json(json)?, options)
    }

    /// Creates a session and renders its first question
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoQuestions`] if the quiz is empty.
    pub fn start<S: Surface>(quiz: Quiz, options: Options, surface: &S) -> Result<Self, Error> {
        let mut game = Self::new(quiz, options)?;
        game.play(surface);
        Ok(game)
    }

    /// Renders the first question of an unstarted session
    pub fn play<S: Surface>(&mut self, surface: &S) {
        if matches!(self.state, State::Unstarted) {
            log::info!("starting quiz with {} questions", self.quiz.len());
            self.render_question(0, surface);
        }
    }

    /// Returns the number of drops evaluated as correct so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the index of the question on screen
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            State::Question(current) => Some(current.index),
            State::Unstarted | State::Done => None,
        }
    }

    /// Returns whether the completion summary has been shown
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Returns the session configuration
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn final_score(&self) -> Score {
        Score {
            correct: self.score,
            total: self.quiz.len(),
        }
    }

    /// Dispatches a UI event
    ///
    /// # Arguments
    ///
    /// * `message` - The event to process
    /// * `surface` - Surface receiving the resulting render messages
    /// * `schedule_message` - Schedules effect alarms to be delivered to
    ///   [`Game::receive_alarm`] after the given delay
    pub fn receive_message<S: Surface, F: FnMut(AlarmMessage, Duration)>(
        &mut self,
        message: IncomingMessage,
        surface: &S,
        schedule_message: F,
    ) {
        match message {
            IncomingMessage::DragStart(choice) => self.receive_drag_start(choice),
            IncomingMessage::DragOver => self.receive_hover(true, surface),
            IncomingMessage::DragLeave => self.receive_hover(false, surface),
            IncomingMessage::Drop(payload) => {
                self.receive_drop(payload, surface, schedule_message);
            }
            IncomingMessage::Next => self.advance(surface),
            IncomingMessage::Back => self.retreat(surface),
            IncomingMessage::Home => self.go_home(surface),
        }
    }

    /// Handles an elapsed alarm
    ///
    /// Alarms only concern feedback effects and are honoured in every phase,
    /// including after completion.
    pub fn receive_alarm<S: Surface>(&self, alarm: &AlarmMessage, surface: &S) {
        match alarm {
            AlarmMessage::Effect(alarm) => effect::receive_alarm(alarm, surface),
        }
    }

    /// Sends a full snapshot of the session to a surface
    pub fn sync<S: Surface>(&self, surface: &S) {
        surface.send_state(&self.sync_message().into());
    }

    fn sync_message(&self) -> SyncMessage {
        match &self.state {
            State::Unstarted => SyncMessage::Unstarted,
            State::Done => SyncMessage::Summary(self.final_score()),
            State::Question(current) => {
                let question = self.quiz.get(current.index);
                SyncMessage::Question {
                    index: current.index,
                    count: self.quiz.len(),
                    prompt: question.map(Question::segments).unwrap_or_default(),
                    choices: question.map(|q| q.choices.clone()).unwrap_or_default(),
                    back_visible: current.index > 0,
                    next_visible: current.drop_zone.answer().is_some(),
                    drop_zone: current.drop_zone.sync_message(),
                }
            }
        }
    }

    /// Renders the question at `index` with a fresh drop zone
    fn render_question<S: Surface>(&mut self, index: usize, surface: &S) {
        let Some(question) = self.quiz.get(index) else {
            return;
        };

        self.state = State::Question(Box::new(CurrentQuestion::fresh(index)));

        surface.send_message(
            &UpdateMessage::QuestionAnnouncement {
                index,
                count: self.quiz.len(),
                prompt: question.segments(),
                choices: question.choices.clone(),
                back_visible: index > 0,
            }
            .into(),
        );
    }

    /// Moves to the next question, or to the summary after the last one
    fn advance<S: Surface>(&mut self, surface: &S) {
        let State::Question(current) = &self.state else {
            log::debug!("ignoring next outside of a question");
            return;
        };

        let next_index = current.index + 1;
        if next_index < self.quiz.len() {
            self.render_question(next_index, surface);
        } else {
            self.announce_summary(surface);
        }
    }

    /// Moves to the previous question; a no-op on the first one
    fn retreat<S: Surface>(&mut self, surface: &S) {
        let State::Question(current) = &self.state else {
            log::debug!("ignoring back outside of a question");
            return;
        };

        if let Some(previous_index) = current.index.checked_sub(1) {
            self.render_question(previous_index, surface);
        } else {
            log::debug!("ignoring back on the first question");
        }
    }

    fn announce_summary<S: Surface>(&mut self, surface: &S) {
        self.state = State::Done;

        let score = self.final_score();
        log::info!("quiz completed with score {score}");
        surface.send_message(&UpdateMessage::Summary(score).into());
    }

    fn go_home<S: Surface>(&self, surface: &S) {
        if self.is_done() {
            surface.send_message(&UpdateMessage::Navigate(self.options.home.clone()).into());
        } else {
            log::debug!("ignoring home before completion");
        }
    }

    fn receive_drag_start(&mut self, choice: usize) {
        let State::Question(current) = &mut self.state else {
            return;
        };

        match self.quiz.get(current.index).and_then(|q| q.choice(choice)) {
            Some(payload) => current.drop_zone.drag_start(payload),
            None => log::debug!("ignoring drag of unknown choice {choice}"),
        }
    }

    fn receive_hover<S: Surface>(&mut self, entering: bool, surface: &S) {
        let State::Question(current) = &mut self.state else {
            return;
        };

        if !self.quiz.get(current.index).is_some_and(|q| q.has_blank()) {
            return;
        }

        let changed = if entering {
            current.drop_zone.drag_over()
        } else {
            current.drop_zone.drag_leave()
        };

        if changed {
            surface.send_message(&drop_zone::UpdateMessage::Hover(entering).into());
        }
    }

    fn receive_drop<S: Surface, F: FnMut(AlarmMessage, Duration)>(
        &mut self,
        payload: Option<String>,
        surface: &S,
        schedule_message: F,
    ) {
        let State::Question(current) = &mut self.state else {
            log::debug!("ignoring drop outside of a question");
            return;
        };

        let Some(question) = self.quiz.get(current.index).filter(|q| q.has_blank()) else {
            log::debug!("ignoring drop on question {} without a blank", current.index);
            return;
        };

        let Some(answer) = current.drop_zone.drop(question, payload) else {
            log::debug!("ignoring drop on answered question {}", current.index);
            return;
        };

        // Re-answering after navigating back counts again; there is no
        // per-question deduplication.
        if answer.outcome == Outcome::Correct {
            self.score += 1;
        }

        log::debug!(
            "question {} answered {:?} with {:?}",
            current.index,
            answer.outcome,
            answer.chosen
        );

        let glyph = answer.feedback.glyph;
        surface.send_message(&drop_zone::UpdateMessage::Answered(answer).into());

        effect::trigger(
            glyph,
            self.options.particle_count,
            self.options.cleanup_grace,
            surface,
            schedule_message,
        );
    }
}
