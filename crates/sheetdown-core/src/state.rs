//! Carry-state for a rendering run.
//!
//! The [`RenderState`] struct holds the open-block flags that persist across
//! row boundaries within a single run. It is owned by the transducer instance
//! and passed by reference to the rendering calls, so independent runs never
//! interfere with each other.

use crate::enums::Block;
use serde::{Deserialize, Serialize};

/// Carry-state for converting a row sequence into markup.
///
/// Tracks whether a bulleted list or a table block is currently open, whether
/// the first top-level heading has been seen yet (used to suppress the
/// separator before the very first wrapping section), and whether a wrapping
/// section is open (so the finalize step can close it).
///
/// # Example
///
/// ```
/// use sheetdown_core::RenderState;
///
/// let mut state = RenderState::new();
/// assert!(!state.in_list);
/// state.open_list();
/// assert!(state.in_list);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    /// An unclosed bulleted-list block is open
    pub in_list: bool,
    /// An unclosed table block is open
    pub in_table: bool,
    /// No top-level heading has been rendered yet
    pub first_heading: bool,
    /// A top-level wrapping section is open
    pub in_section: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderState {
    /// Create a fresh state, as it is before the first row is processed.
    pub fn new() -> Self {
        Self {
            in_list: false,
            in_table: false,
            first_heading: true,
            in_section: false,
        }
    }

    /// Mark a list block as open.
    pub fn open_list(&mut self) {
        self.in_list = true;
    }

    /// Mark the open list block as closed.
    pub fn close_list(&mut self) {
        self.in_list = false;
    }

    /// Mark a table block as open.
    pub fn open_table(&mut self) {
        self.in_table = true;
    }

    /// Mark the open table block as closed.
    pub fn close_table(&mut self) {
        self.in_table = false;
    }

    /// The block currently open, if any.
    ///
    /// A list and a table are never open at the same time; the line scanner
    /// closes one before opening the other.
    pub fn open_block(&self) -> Option<Block> {
        if self.in_list {
            Some(Block::List)
        } else if self.in_table {
            Some(Block::Table)
        } else {
            None
        }
    }

    /// Consume the first-heading flag.
    ///
    /// Returns `true` exactly once per run: for the first top-level heading,
    /// which gets no leading separator. Every later call returns `false`.
    pub fn take_first_heading(&mut self) -> bool {
        let first = self.first_heading;
        self.first_heading = false;
        first
    }

    /// Reset to the initial state, ready for a new run.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
