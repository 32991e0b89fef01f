mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run the flag-driven CLI and exit with its status.
pub fn run(args: Vec<String>) {
    let code = match Context::new(&args).and_then(|mut ctx| ctx.run()) {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Code(code)) => code,
    };
    if code != 0 {
        std::process::exit(code);
    }
}
