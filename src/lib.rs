//! ORCA, the on-the-fly calculator core.
//!
//! A host front end feeds button presses or key events into a
//! [`calculator::Calculator`], renders its display and history, and owns it
//! through a [`panel::Panel`].

pub mod calculator;
pub mod config;
pub mod help;
pub mod panel;
