use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    println!("{}", "Configuration".bold());
    if let Ok(path) = Config::path() {
        println!("  {} {}", "file:".dimmed(), path.display());
    }
    println!();
    print_value("defaults.theme", defaults.theme.as_deref(), "dark");
    print_value(
        "defaults.transition",
        defaults.transition.as_deref(),
        "slide",
    );
    print_value("defaults.start_mode", defaults.start_mode.as_deref(), "first");
    Ok(())
}

fn print_value(key: &str, value: Option<&str>, fallback: &str) {
    match value {
        Some(v) => println!("  {key} = {}", v.green()),
        None => println!("  {key} = {} {}", fallback, "(default)".dimmed()),
    }
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value}",
        "saved:".green().bold(),
    );
    println!("  {} {}", "file:".dimmed(), path.display());
    Ok(())
}
