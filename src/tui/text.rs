use passgauge::{Password, entropy};

use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, colored_strength, flush,
};

pub fn print_help() {
    box_top("Passgauge");
    box_line_center("Password generator with a strength rating");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments (or with -i). Asks for the");
    box_line("     length and character options, then shows the password and");
    box_line("     its strength.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to print");
    box_line("     passwords without prompts.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgauge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-digits", "Leave digits out of the pool");
    box_opt("      --no-symbols", "Leave punctuation out of the pool");
    box_opt(
        "      --allow-ambiguous",
        "Keep look-alike characters (l 1 I i L 0 O o) in the pool",
    );
    box_line("");
    box_line(" Strength:");
    box_opt(
        "      --score [PASSWORD]",
        "Rate a password (Weak, Medium, Strong). Reads stdin if no value is given; use --score=PASSWORD when it starts with '-'.",
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --save", "Save the resulting options as defaults");
    box_opt("  -i, --interactive", "Prompt for options, starting from flags");
    box_line("");
    box_line(" Entropy:");
    box_opt("  -u, --os-rng", "Draw every value directly from the OS");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgauge                    Interactive mode");
    box_line("  passgauge -l 16              One password, 16 characters");
    box_line("  passgauge -l 20 -n 3         Three passwords, 20 characters each");
    box_line("  passgauge --no-symbols       Letters and digits only");
    box_line("  passgauge -l 24 -s           Save 24 as the default length");
    box_line("  passgauge --score 'Abc1!'    Rate an existing password");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_banner() {
    box_top("Passgauge");
    box_line_center("Esc/CTRL+C: cancel | CTRL+U: clear input | Enter: accept default");
    box_line(&format!("Source: {}", entropy::entropy_source()));
    box_bottom();
    println!();
    flush();
}

pub fn print_result(pass: &Password) {
    println!();
    box_top("Generated Password");
    box_line(pass.as_str());
    box_line("");
    box_line(&format!("Strength: {}", colored_strength(pass.strength())));
    box_bottom();
    println!();
    flush();
}

pub fn print_interrupted() {
    println!();
    println!("Password generation interrupted.");
    flush();
}
