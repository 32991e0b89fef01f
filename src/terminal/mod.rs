//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, and ANSI helpers.

mod output;

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

pub use output::*;

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
