//! Terminal keypad calculator.
//!
//! The arithmetic lives in a pure reducer (`ui::calculator`) over the
//! primitives in `calc`; everything else is terminal plumbing around it.

pub mod calc;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
