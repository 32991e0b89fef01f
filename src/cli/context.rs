//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{BufRead, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use passgauge::{entropy, generate_batch, score_strength};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::settings::Settings;
use crate::tui;

/// How the CLI run ended early.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Not an error, just done.
    Done,
    /// Failed; exit with this status.
    Code(i32),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, Exit> {
        let flags = super::parse(args).map_err(|e| {
            prompts::error(&e.to_string());
            Exit::Code(2)
        })?;
        quiet::set(flags.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            log::warn!("settings load failed: {}", e);
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.handle_score()?;
        self.handle_os_rng();
        self.apply_flags()?;
        self.handle_save();

        if self.flags.interactive {
            tui::run(&mut self.settings);
            return Ok(());
        }

        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            tui::print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passgauge {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_score(&mut self) -> Result<(), Exit> {
        let Some(given) = self.flags.score.take() else {
            return Ok(());
        };

        // Moved out of the flags, so wiping `input` leaves no copy behind
        let mut input = match given {
            Some(p) => p,
            None => {
                let mut line = String::new();
                if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
                    prompts::error(&format!("Failed to read password: {}", e));
                    return Err(Exit::Code(1));
                }
                line
            }
        };

        let trimmed = input.trim_end_matches(['\r', '\n']);
        println!("{}", score_strength(trimmed));
        input.zeroize();
        Err(Exit::Done)
    }

    fn handle_os_rng(&self) {
        if self.flags.os_rng {
            entropy::enable_os_rng();
        }
        debug!("entropy source: {}", entropy::entropy_source());
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Exit> {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.no_digits {
            self.settings.include_digits = false;
        }
        if self.flags.no_symbols {
            self.settings.include_symbols = false;
        }
        if self.flags.allow_ambiguous {
            self.settings.exclude_ambiguous = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Exit::Done);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let config = self.settings.config();
        let count = self.settings.number_of_passwords.max(1);

        let mut rng = entropy::source();
        let passwords = generate_batch(&config, count, &mut rng).map_err(|e| {
            prompts::error(&e.to_string());
            Exit::Code(1)
        })?;

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = passwords
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    joined.zeroize();
                    return Err(Exit::Code(1));
                }
            }
            joined.zeroize();
            if let Some(weakest) = passwords.iter().map(|p| p.strength()).min() {
                prompts::strength(weakest);
            }
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for pass in &passwords {
            let _ = writeln!(out, "{}", pass.as_str());
            let _ = out.flush();
            prompts::strength(pass.strength());
        }
        Ok(())
    }
}
