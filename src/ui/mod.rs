//! # UI Module
//!
//! This module provides the terminal user interface for the valentine page.
//!
//! ## Components
//!
//! - [`App`] - Page state (modal flags, evasive button, focus)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`avoidance`] - Hides the "No" button when the pointer gets close
//! - [`capture`] - Scoped mouse capture for the pointer listener
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  ♥                                              │
//! │            Would you be my valentine?           │
//! │                                                 │
//! │           ╭─────────╮    ╭────────╮             │
//! │           │   Yes   │    │   No   │             │
//! │           ╰─────────╯    ╰────────╯             │
//! │                                           ♥     │
//! │ Footer (key hints)                              │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! "Yes" opens the love message modal with a photo; "No" opens the rebuke,
//! if you can ever click it.

pub mod app;
pub mod avoidance;
pub mod capture;
pub mod config;
pub mod layout;
pub mod modal;
pub mod photo;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
