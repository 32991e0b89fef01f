use std::env;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

use settings::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
                log::warn!("settings load failed: {}", e);
                Settings::default()
            });
            tui::run(&mut settings);
        }
        _ => cli::run(args),
    }
}
