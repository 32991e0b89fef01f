//! Interactive prompts.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

/// Run interactive mode, starting from `settings`.
pub fn run(settings: &mut Settings) {
    reset_terminal();
    clear();
    print_banner();
    gen_session(settings);
    reset_terminal();
}
