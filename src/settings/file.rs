//! Settings file persistence.
//!
//! One comma-separated line: length, digits, symbols, ambiguous, count.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 5;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        settings.pass_length,
        settings.include_digits,
        settings.include_symbols,
        settings.exclude_ambiguous,
        settings.number_of_passwords,
    );

    file.write_all(data.as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

/// Fill `settings` from `path`. A missing or malformed file is rewritten
/// with the current values.
pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        debug!("no settings file at {}, writing defaults", path.display());
        return save(path, settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();

    if parts.len() != FIELDS {
        warn!(
            "settings file {} has {} fields, expected {}; rewriting",
            path.display(),
            parts.len(),
            FIELDS
        );
        return save(path, settings);
    }

    settings.pass_length = match parts[0].parse() {
        Ok(0) | Err(_) => settings.pass_length,
        Ok(n) => n,
    };
    settings.include_digits = parts[1].parse().unwrap_or(settings.include_digits);
    settings.include_symbols = parts[2].parse().unwrap_or(settings.include_symbols);
    settings.exclude_ambiguous = parts[3].parse().unwrap_or(settings.exclude_ambiguous);
    settings.number_of_passwords = match parts[4].parse() {
        Ok(0) | Err(_) => settings.number_of_passwords,
        Ok(n) => n,
    };

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgauge/settings", home))
}
