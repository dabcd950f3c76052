//! Core library for the Atelier onboarding wizard.
//!
//! This crate holds the state and pricing engine behind a website-design
//! onboarding flow: the [`Order`] a client builds up step by step, the
//! [`compute_invoice`] function that prices it, and the stores that keep it
//! across sessions.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the order record and its parts
//! - **Wizard** ([`wizard`]): the controller that owns the order and applies
//!   every [`Mutation`]
//! - **Pricing** ([`pricing`]): the single source of invoice and overage math
//! - **Views** ([`view`]): read-only snapshots recomputed after each change
//! - **Stores** ([`store`]): SQLite and in-memory slots behind [`OrderStore`]
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use atelier_core::{params::SelectPackage, WizardBuilder};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_database_path(Some("atelier.db"))
//!     .build()?;
//!
//! wizard.select_package(SelectPackage {
//!     id: "growth".to_string(),
//!     name: "Growth".to_string(),
//!     price: Decimal::from(1000),
//!     included_pages: 5,
//!     brand_kit_bundle_price: None,
//!     extra_page_cost: Decimal::from(50),
//! });
//! let applied = wizard.add_page("Blog");
//!
//! if let Some(warning) = applied.warning {
//!     eprintln!("Not saved: {warning}");
//! }
//! println!("{}", wizard.invoice());
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod money;
pub mod params;
pub mod pricing;
pub mod store;
pub mod suggest;
pub mod view;
pub mod wizard;

// Re-export commonly used types
pub use display::{Dollars, LastSaved, OperationStatus, Pages, Suggestions};
pub use error::{PersistError, Result, WizardError};
pub use models::{
    Addon, Connection, CustomBranding, FlowNode, FlowchartData, Order, Package, PagePlan,
    PlanAnnotation,
};
pub use pricing::{compute_invoice, Invoice, LineItem, LineKind, BASE_BRAND_KIT_PRICE};
pub use store::{MemoryStore, OrderStore, SqliteStore, DEFAULT_SLOT_KEY};
pub use view::{BrandKitBanner, PageLimit, ViewSnapshot};
pub use wizard::{Applied, Mutation, ViewListener, Wizard, WizardBuilder};
