//! Command-line argument definitions using clap
//!
//! Each subcommand has a clap-derived argument struct that converts into the
//! matching core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Wizard Mutation
//! ```
//!
//! Core parameter types stay free of clap attributes so any other front end
//! can build them directly. Prices are parsed leniently: text that is not a
//! number becomes zero, the same coercion the wizard applies to stored
//! records.

use atelier_core::{
    models::PlanAnnotation,
    money::parse_price,
    params::{AddonSpec, AnnotatePage, ReorderPage, SelectPackage, SetCustomBranding},
};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

/// Lenient price parser for clap; malformed text becomes zero.
pub fn price_arg(text: &str) -> Result<Decimal, String> {
    Ok(parse_price(text))
}

// ============================================================================
// Package, brand kit, branding and industry
// ============================================================================

/// Select a package
///
/// Replaces any previous package. When no pages are planned yet, the starter
/// pages (Home, About, Services, Contact) are added.
#[derive(Args)]
pub struct SelectPackageArgs {
    /// Catalog identifier of the package
    pub id: String,
    /// Display name on the invoice; defaults to the identifier
    #[arg(short, long)]
    pub name: Option<String>,
    /// Listed price
    #[arg(long, value_parser = price_arg, default_value = "0")]
    pub price: Decimal,
    /// Number of pages included in the price
    #[arg(long = "pages", default_value_t = 0)]
    pub included_pages: u32,
    /// Brand kit price when bought with this package
    #[arg(long, value_parser = price_arg)]
    pub bundle_price: Option<Decimal>,
    /// Price of each page beyond the included ones
    #[arg(long, value_parser = price_arg, default_value = "0")]
    pub extra_page_cost: Decimal,
}

impl From<SelectPackageArgs> for SelectPackage {
    fn from(val: SelectPackageArgs) -> Self {
        SelectPackage {
            name: val.name.unwrap_or_else(|| val.id.clone()),
            id: val.id,
            price: val.price,
            included_pages: val.included_pages,
            brand_kit_bundle_price: val.bundle_price,
            extra_page_cost: val.extra_page_cost,
        }
    }
}

#[derive(Subcommand)]
pub enum PackageCommands {
    /// Select the service package
    #[command(alias = "s")]
    Select(SelectPackageArgs),
}

#[derive(Subcommand)]
pub enum BrandKitCommands {
    /// Add the brand kit if absent, remove it if present
    #[command(alias = "t")]
    Toggle,
}

/// Set the custom branding line item
///
/// A price of zero removes the item from the invoice.
#[derive(Args)]
pub struct SetBrandingArgs {
    /// Label shown on the invoice
    pub name: String,
    /// Price of the custom branding work
    #[arg(value_parser = price_arg)]
    pub price: Decimal,
}

impl From<SetBrandingArgs> for SetCustomBranding {
    fn from(val: SetBrandingArgs) -> Self {
        SetCustomBranding {
            name: val.name,
            price: val.price,
        }
    }
}

#[derive(Subcommand)]
pub enum BrandingCommands {
    /// Set the custom branding name and price
    Set(SetBrandingArgs),
}

#[derive(Subcommand)]
pub enum IndustryCommands {
    /// Set the industry used for page suggestions
    Set {
        /// Free-text industry, e.g. "bakery"
        industry: String,
    },
}

// ============================================================================
// Pages
// ============================================================================

/// Move a page to another position
///
/// Positions are 1-based, as shown by `page list`. Positions outside the
/// list leave it unchanged.
#[derive(Args)]
pub struct MovePageArgs {
    /// Current position of the page
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub from: u64,
    /// New position of the page
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub to: u64,
}

fn to_index(position: u64) -> usize {
    usize::try_from(position - 1).unwrap_or(usize::MAX)
}

impl From<MovePageArgs> for ReorderPage {
    fn from(val: MovePageArgs) -> Self {
        ReorderPage {
            from: to_index(val.from),
            to: to_index(val.to),
        }
    }
}

#[derive(Subcommand)]
pub enum PageCommands {
    /// Add a page to the site plan
    #[command(alias = "a")]
    Add {
        /// Page name
        name: String,
    },
    /// Remove a page from the site plan
    #[command(alias = "rm")]
    Remove {
        /// Page name
        name: String,
    },
    /// Move a page to another position
    #[command(alias = "mv")]
    Move(MovePageArgs),
    /// List planned pages
    #[command(alias = "ls")]
    List,
    /// Suggest pages for the industry
    Suggest,
}

// ============================================================================
// Add-ons
// ============================================================================

/// An add-on with a flat price
#[derive(Args)]
pub struct AddonArgs {
    /// Unique identifier of the add-on
    pub id: String,
    /// Display name on the invoice; defaults to the identifier
    #[arg(short, long)]
    pub name: Option<String>,
    /// Flat price of the add-on
    #[arg(long, value_parser = price_arg, default_value = "0")]
    pub price: Decimal,
}

impl From<AddonArgs> for AddonSpec {
    fn from(val: AddonArgs) -> Self {
        AddonSpec {
            name: val.name.unwrap_or_else(|| val.id.clone()),
            id: val.id,
            price: val.price,
        }
    }
}

#[derive(Subcommand)]
pub enum AddonCommands {
    /// Add an add-on, or replace the one with the same id
    #[command(alias = "s")]
    Set(AddonArgs),
    /// Add the add-on if absent, remove it if present
    #[command(alias = "t")]
    Toggle(AddonArgs),
    /// Remove an add-on
    #[command(alias = "rm")]
    Remove {
        /// Identifier of the add-on
        id: String,
    },
}

// ============================================================================
// Page plans
// ============================================================================

/// Annotate a page plan
///
/// Only the given fields change. The page does not need to be in the page
/// list; notes for removed pages are kept.
#[derive(Args)]
pub struct AnnotatePageArgs {
    /// Page name
    pub page: String,
    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
    /// SEO keywords or brief
    #[arg(long)]
    pub seo: Option<String>,
    /// Conversion goal for the page
    #[arg(long)]
    pub conversion: Option<String>,
    /// Integration to add (repeatable)
    #[arg(long = "integration")]
    pub integrations: Vec<String>,
    /// Integration to remove (repeatable)
    #[arg(long = "remove-integration")]
    pub removed_integrations: Vec<String>,
    /// Mobile layout sketch, e.g. a data URL
    #[arg(long)]
    pub mobile_sketch: Option<String>,
    /// Desktop layout sketch, e.g. a data URL
    #[arg(long)]
    pub desktop_sketch: Option<String>,
    /// Remove both sketches
    #[arg(long, conflicts_with_all = ["mobile_sketch", "desktop_sketch"])]
    pub clear_sketches: bool,
}

impl AnnotatePageArgs {
    /// One core annotation per requested field change.
    pub fn into_params(self) -> Vec<AnnotatePage> {
        let mut annotations = Vec::new();
        annotations.extend(self.notes.map(PlanAnnotation::Notes));
        annotations.extend(self.seo.map(PlanAnnotation::Seo));
        annotations.extend(self.conversion.map(PlanAnnotation::Conversion));
        annotations.extend(
            self.integrations
                .into_iter()
                .map(|name| PlanAnnotation::Integration {
                    name,
                    enabled: true,
                }),
        );
        annotations.extend(
            self.removed_integrations
                .into_iter()
                .map(|name| PlanAnnotation::Integration {
                    name,
                    enabled: false,
                }),
        );
        if self.clear_sketches {
            annotations.push(PlanAnnotation::MobileSketch(None));
            annotations.push(PlanAnnotation::DesktopSketch(None));
        }
        if let Some(sketch) = self.mobile_sketch {
            annotations.push(PlanAnnotation::MobileSketch(Some(sketch)));
        }
        if let Some(sketch) = self.desktop_sketch {
            annotations.push(PlanAnnotation::DesktopSketch(Some(sketch)));
        }

        annotations
            .into_iter()
            .map(|annotation| AnnotatePage {
                page: self.page.clone(),
                annotation,
            })
            .collect()
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Set planning notes for a page
    #[command(alias = "a")]
    Annotate(AnnotatePageArgs),
    /// Show the plan for a page
    #[command(alias = "s")]
    Show {
        /// Page name
        page: String,
    },
}
