//! Markdown formatting for orders, invoices and operation results.
//!
//! Domain types implement [`std::fmt::Display`] directly where there is one
//! obvious rendering ([`Invoice`](crate::pricing::Invoice),
//! [`ViewSnapshot`](crate::view::ViewSnapshot),
//! [`PagePlan`](crate::models::PagePlan)). Wrapper types cover the cases
//! that need extra context, such as a page list that has to know the
//! package allowance to tag overage pages.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Order / View   │    │ Display impls & │    │    Markdown     │
//! │   (snapshots)   │───▶│    wrappers     │───▶│     output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`money`]: currency formatting ([`Dollars`])
//! - [`collections`]: page lists and suggestions
//! - [`models`]: Display implementations for invoices, views and page plans
//! - [`status`]: confirmation and warning messages ([`OperationStatus`])
//!   and the last-saved line ([`LastSaved`])
//!
//! ## Usage
//!
//! ```rust
//! use atelier_core::{pricing::compute_invoice, Order};
//!
//! let invoice = compute_invoice(&Order::new());
//! assert!(invoice.to_string().contains("Select a package to start..."));
//! ```

pub mod collections;
pub mod models;
pub mod money;
pub mod status;

pub use collections::{Pages, Suggestions};
pub use money::Dollars;
pub use status::{LastSaved, OperationStatus};
