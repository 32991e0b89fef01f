use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, format_number, print_error};

/// Outcome of one raw-mode line edit.
enum Edit {
    Submitted(String),
    Cancelled,
}

/// Edit a single line in raw mode. Only characters passing `accept` are
/// inserted; `render` turns the buffer into what is shown after the prompt.
///
/// Without a tty, returns the initial value untouched.
fn edit_line(
    prompt: &str,
    initial: &str,
    accept: fn(char) -> bool,
    render: fn(&str) -> String,
) -> Edit {
    let mut buf = initial.to_string();

    let guard = match RawModeGuard::enter() {
        Ok(g) => g,
        Err(_) => return Edit::Submitted(buf),
    };

    let mut shown = render(&buf);
    print!("{}: {}", prompt, shown);
    flush();

    let outcome = loop {
        let Ok(event) = read() else {
            break Edit::Submitted(buf);
        };
        let Event::Key(key) = event else { continue };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => break Edit::Cancelled,
            KeyCode::Esc => break Edit::Cancelled,
            KeyCode::Char('u') if ctrl => buf.clear(),
            KeyCode::Enter => break Edit::Submitted(buf),
            KeyCode::Backspace => {
                buf.pop();
            }
            KeyCode::Char(c) if !ctrl && accept(c) => buf.push(c),
            _ => continue,
        }

        // Blank the old rendering, then redraw
        print!("\r{}: {}", prompt, " ".repeat(shown.chars().count()));
        shown = render(&buf);
        print!("\r{}: {}", prompt, shown);
        flush();
    };

    drop(guard);
    println!();
    outcome
}

/// Digits only, shown with comma separators. Returns the raw digits, which
/// may not fit in a `usize`; `None` if cancelled.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<String> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };

    let render = |digits: &str| match digits.parse::<usize>() {
        Ok(n) => format_number(n),
        Err(_) => digits.to_string(),
    };

    match edit_line(prompt, &initial, |c| c.is_ascii_digit(), render) {
        Edit::Cancelled => None,
        Edit::Submitted(digits) => Some(digits),
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    match edit_line(prompt, initial_value, |c| !c.is_control(), |s: &str| s.to_string()) {
        Edit::Cancelled => None,
        Edit::Submitted(s) => Some(s),
    }
}

/// Interpret a y/n answer; empty input takes the default.
pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask a y/n question until it gets a valid answer. `None` if cancelled.
pub fn get_yes_no(question: &str, default: bool) -> Option<bool> {
    let prompt = if default {
        format!("{question} (Y/n)")
    } else {
        format!("{question} (y/N)")
    };

    loop {
        let answer = get_editable_input(&prompt, "")?;
        match parse_yes_no(&answer, default) {
            Some(b) => return Some(b),
            None => print_error("Please answer 'y' or 'n'."),
        }
    }
}
