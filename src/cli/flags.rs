#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub os_rng: bool,
    pub clipboard: bool,
    pub save: bool,
    pub interactive: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub allow_ambiguous: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    /// `Some(None)` means `--score` was given without a value; read stdin.
    /// Taken and wiped once scored.
    pub score: Option<Option<String>>,
}

