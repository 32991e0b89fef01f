use log::debug;
use passgauge::{GenerationConfig, GenerationError, checked_length, generate_password};

use super::{get_numeric_input, get_yes_no, print_interrupted, print_result};
use crate::settings::Settings;
use crate::terminal::print_error;

/// Ask for every generation option, starting from the saved defaults.
/// Re-prompts until the length is valid. `None` if the user cancels.
pub fn prompt_config(settings: &Settings) -> Option<GenerationConfig> {
    let length = loop {
        let digits = get_numeric_input("Enter the desired password length", settings.pass_length)?;
        match length_from_digits(&digits) {
            Ok(len) => break len,
            Err(msg) => print_error(&msg),
        }
    };

    let include_digits = get_yes_no("Include digits", settings.include_digits)?;
    let include_symbols = get_yes_no("Include symbols", settings.include_symbols)?;
    let exclude_ambiguous = get_yes_no(
        "Exclude ambiguous characters (e.g., 'l', '1', 'O', '0')",
        settings.exclude_ambiguous,
    )?;

    Some(GenerationConfig {
        length,
        include_digits,
        include_symbols,
        exclude_ambiguous,
    })
}

/// Validate the digits typed at the length prompt. Empty input is a zero
/// length; input too large for an `i64` is rejected rather than clamped.
pub fn length_from_digits(digits: &str) -> Result<usize, String> {
    if digits.is_empty() {
        return checked_length(0).map_err(|e| e.to_string());
    }
    let raw: i64 = digits
        .parse()
        .map_err(|_| format!("Invalid input, please enter a number up to: {}...", i64::MAX))?;
    checked_length(raw).map_err(|e| e.to_string())
}

/// Prompt, generate, show; repeat while the user asks for another.
/// The last answers become the session defaults in `settings`.
pub fn gen_session(settings: &mut Settings) {
    loop {
        let Some(config) = prompt_config(settings) else {
            print_interrupted();
            return;
        };
        settings.apply_config(&config);
        debug!("interactive generation: {:?}", config);

        match generate_password(&config) {
            Ok(pass) => print_result(&pass),
            Err(GenerationError::EmptyPool) => {
                print_error("No characters left to choose from; adjust the options.")
            }
            Err(e) => print_error(&e.to_string()),
        }

        match get_yes_no("Generate another", false) {
            Some(true) => println!(),
            Some(false) => return,
            None => {
                print_interrupted();
                return;
            }
        }
    }
}
