//! Valentine TUI - a proposal page in your terminal
//!
//! This library provides the page state, the cursor-avoidance logic for the
//! evasive "No" button, and the rendering of the page and its modals.

pub mod ui;
