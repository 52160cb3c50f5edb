//! Emoji rain feedback effect
//!
//! After every evaluated drop the engine asks the surface to rain a glyph
//! over the page. The engine only chooses the particle parameters; the
//! surface animates them and removes each particle when its animation ends.
//! A cleanup alarm fires after a fixed grace period so the surface can drop
//! the effect container once it is empty. Nothing here touches quiz state,
//! and there is no ordering guarantee relative to later quiz transitions.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;
use web_time::Duration;

use crate::{constants, session::Surface};

/// Identifies one triggered rain so its cleanup can find its container
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct EffectId(Uuid);

impl EffectId {
    /// Creates a new random effect ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EffectId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EffectId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A single falling glyph
#[serde_with::serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Horizontal position in percent of the container width
    pub left_percent: f64,
    /// Font size in rem
    pub font_size_rem: f64,
    /// Length of the fall animation
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub duration: Duration,
    /// Delay before the fall starts
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub delay: Duration,
}

impl Particle {
    /// Draws a particle with random position, size and timing
    pub fn random() -> Self {
        use constants::effect::*;

        Self {
            left_percent: MIN_LEFT_PERCENT + fastrand::f64() * LEFT_SPREAD_PERCENT,
            font_size_rem: MIN_FONT_SIZE_REM + fastrand::f64() * FONT_SIZE_SPREAD_REM,
            duration: Duration::from_millis(
                MIN_DURATION_MILLIS + fastrand::u64(0..=DURATION_SPREAD_MILLIS),
            ),
            delay: Duration::from_millis(fastrand::u64(0..=MAX_DELAY_MILLIS)),
        }
    }
}

/// One triggered rain of a glyph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rain {
    /// Identifier used by the cleanup alarm
    pub id: EffectId,
    /// Glyph every particle displays
    pub glyph: String,
    /// Particles to spawn
    pub particles: Vec<Particle>,
}

impl Rain {
    /// Creates a rain of `count` randomly placed particles showing `glyph`
    pub fn new(glyph: &str, count: usize) -> Self {
        Self {
            id: EffectId::new(),
            glyph: glyph.to_owned(),
            particles: std::iter::repeat_with(Particle::random)
                .take(count)
                .collect_vec(),
        }
    }
}

/// Effect messages sent to the surface
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Spawn the particles of a rain
    Rain(Rain),
    /// Remove the container of a rain if it has no particles left
    Cleanup(EffectId),
}

/// Timed events scheduled by the effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// The grace period of a rain has elapsed
    Cleanup(EffectId),
}

/// Starts a rain on the surface and schedules its cleanup
///
/// Returns the ID of the new rain.
pub fn trigger<S: Surface, F: FnMut(crate::AlarmMessage, Duration)>(
    glyph: &str,
    count: usize,
    grace: Duration,
    surface: &S,
    mut schedule_message: F,
) -> EffectId {
    let rain = Rain::new(glyph, count);
    let id = rain.id;

    surface.send_message(&UpdateMessage::Rain(rain).into());
    schedule_message(AlarmMessage::Cleanup(id).into(), grace);

    id
}

/// Handles an elapsed effect alarm
pub fn receive_alarm<S: Surface>(alarm: &AlarmMessage, surface: &S) {
    match alarm {
        AlarmMessage::Cleanup(id) => {
            log::debug!("cleaning up rain {id}");
            surface.send_message(&UpdateMessage::Cleanup(*id).into());
        }
    }
}
