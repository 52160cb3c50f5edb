//! Configuration constants for the drop quiz
//!
//! Compile-time defaults for rendering, feedback and effects. Values that a
//! page may want to change per session are mirrored in
//! [`crate::game::Options`].

/// Question data constants
pub mod question {
    /// Character whose runs mark the blank in a prompt
    pub const BLANK_MARKER: char = '…';
}

/// Feedback shown after a drop is evaluated
pub mod feedback {
    /// Text shown when the dropped choice is correct
    pub const CORRECT_TEXT: &str = "✅ Correct!";
    /// Text shown when the dropped choice is incorrect
    pub const INCORRECT_TEXT: &str = "😢 Oops wrong answer";
    /// Colour of the feedback text for a correct drop
    pub const CORRECT_COLOR: &str = "green";
    /// Colour of the feedback text for an incorrect drop
    pub const INCORRECT_COLOR: &str = "red";
    /// Glyph rained down after a correct drop
    pub const CORRECT_GLYPH: &str = "🎉";
    /// Glyph rained down after an incorrect drop
    pub const INCORRECT_GLYPH: &str = "😢";
}

/// Emoji rain effect constants
pub mod effect {
    /// Number of particles spawned per trigger
    pub const PARTICLE_COUNT: usize = 30;
    /// Milliseconds after a trigger before the empty container is removed
    pub const CLEANUP_GRACE_MILLIS: u64 = 6000;
    /// Leftmost horizontal position of a particle, in percent of the width
    pub const MIN_LEFT_PERCENT: f64 = 5.;
    /// Horizontal spread of particles, in percent of the width
    pub const LEFT_SPREAD_PERCENT: f64 = 70.;
    /// Smallest particle font size in rem
    pub const MIN_FONT_SIZE_REM: f64 = 3.;
    /// Font size spread in rem
    pub const FONT_SIZE_SPREAD_REM: f64 = 3.;
    /// Shortest fall animation in milliseconds
    pub const MIN_DURATION_MILLIS: u64 = 2000;
    /// Fall animation spread in milliseconds
    pub const DURATION_SPREAD_MILLIS: u64 = 3000;
    /// Longest delay before a particle starts falling, in milliseconds
    pub const MAX_DELAY_MILLIS: u64 = 1000;
}

/// Site navigation constants
pub mod site {
    /// Entry document of the site, relative to its root
    pub const HOME_DOCUMENT: &str = "index.html";
    /// Location the completion screen's home action navigates to
    pub const HOME_LOCATION: &str = "/index.html";
}
