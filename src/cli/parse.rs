use passgauge::{GenerationError, checked_length};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error(transparent)]
    Length(#[from] GenerationError),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--os-rng" => flags.os_rng = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--save" => flags.save = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--allow-ambiguous" => flags.allow_ambiguous = true,
            "-l" | "--length" => {
                let raw = value(args, &mut i)?;
                // Negative values are a length error, not a bad number
                let n: i64 = raw
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?;
                flags.length = Some(checked_length(n)?);
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => flags.number = Some(n),
                    _ => return Err(ParseError::InvalidNumber(raw.to_string())),
                }
            }
            "--score" => {
                // Optional value: take the next arg unless it looks like a flag;
                // `--score=-x` passes a value starting with '-'.
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.score = Some(Some(args[i].clone()));
                } else {
                    flags.score = Some(None);
                }
            }
            arg => match arg.strip_prefix("--score=") {
                Some(pass) => flags.score = Some(Some(pass.to_string())),
                None => return Err(ParseError::UnknownArg(arg.to_string())),
            },
        }
        i += 1;
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}
