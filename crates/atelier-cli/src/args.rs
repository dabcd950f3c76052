use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddonCommands, BrandKitCommands, BrandingCommands, IndustryCommands, PackageCommands,
    PageCommands, PlanCommands,
};

/// Onboarding wizard for website design orders
///
/// Atelier walks a client through choosing a package, brand kit, pages and
/// add-ons, keeping a live invoice as the order changes. The order is saved
/// after every change and picked up again on the next run.
#[derive(Parser)]
#[command(version, about, name = "atelier")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/atelier/atelier.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Storage slot holding the order. Defaults to "onboardingState"
    #[arg(long, global = true)]
    pub slot: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Atelier CLI
///
/// Each group edits one part of the order; `invoice`, `status` and `export`
/// only read it. Running without a command shows the status.
#[derive(Subcommand)]
pub enum Commands {
    /// Choose the service package
    #[command(alias = "pkg")]
    Package {
        #[command(subcommand)]
        command: PackageCommands,
    },
    /// Add or remove the brand kit
    BrandKit {
        #[command(subcommand)]
        command: BrandKitCommands,
    },
    /// Set the custom branding line item
    Branding {
        #[command(subcommand)]
        command: BrandingCommands,
    },
    /// Describe the client's industry
    Industry {
        #[command(subcommand)]
        command: IndustryCommands,
    },
    /// Manage the planned pages
    #[command(alias = "p")]
    Page {
        #[command(subcommand)]
        command: PageCommands,
    },
    /// Manage optional add-ons
    #[command(alias = "a")]
    Addon {
        #[command(subcommand)]
        command: AddonCommands,
    },
    /// Annotate and review page plans
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show the itemized invoice
    #[command(alias = "i")]
    Invoice,
    /// Show the order summary
    #[command(alias = "s")]
    Status,
    /// Print the saved order record as JSON
    Export,
}
