//! Saved generation defaults.

mod file;

use std::path::Path;

use passgauge::GenerationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub number_of_passwords: usize,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::get_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }

    pub fn config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.pass_length,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }

    pub fn apply_config(&mut self, config: &GenerationConfig) {
        self.pass_length = config.length;
        self.include_digits = config.include_digits;
        self.include_symbols = config.include_symbols;
        self.exclude_ambiguous = config.exclude_ambiguous;
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = GenerationConfig::default();
        Self {
            pass_length: config.length,
            include_digits: config.include_digits,
            include_symbols: config.include_symbols,
            exclude_ambiguous: config.exclude_ambiguous,
            number_of_passwords: 1,
        }
    }
}
