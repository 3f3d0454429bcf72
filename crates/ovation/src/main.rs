mod app;
mod cli;
mod commands;
mod config;
mod deck;
mod icons;
mod render;
mod state;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    cli.run()
}
