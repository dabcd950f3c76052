//! Atelier CLI Application
//!
//! Command-line front end for the onboarding wizard. Every run loads the saved
//! order, applies at most one command, and saves the result.

mod args;
mod cli;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use atelier_core::WizardBuilder;
use clap::Parser;
use handler::Handler;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        slot,
        no_color,
        command,
    } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_database_path(database_file)
        .with_slot_key(slot)
        .build()
        .context("Failed to initialize wizard")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut handler = Handler::new(wizard, renderer);

    info!("Atelier started");

    match command {
        Some(Package { command }) => handler.handle_package_command(command),
        Some(BrandKit { command }) => handler.handle_brand_kit_command(command),
        Some(Branding { command }) => handler.handle_branding_command(command),
        Some(Industry { command }) => handler.handle_industry_command(command),
        Some(Page { command }) => handler.handle_page_command(command),
        Some(Addon { command }) => handler.handle_addon_command(command),
        Some(Plan { command }) => handler.handle_plan_command(command),
        Some(Invoice) => handler.show_invoice(),
        Some(Export) => return handler.export(),
        Some(Status) | None => handler.show_status(),
    }
    Ok(())
}
