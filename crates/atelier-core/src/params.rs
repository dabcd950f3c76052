//! Parameter structures for wizard operations
//!
//! These structures are shared by every front end (the CLI today, any other
//! rendering layer tomorrow) without framework-specific derives. Front ends
//! wrap them with their own argument types and convert via `From`.
//!
//! Numeric fields are already typed; front ends that receive text should run
//! it through [`crate::money::parse_price`] so malformed input becomes zero
//! rather than an error. Negative values are clamped again when the mutation
//! is applied.

use rust_decimal::Decimal;

use crate::models::PlanAnnotation;

/// Parameters for choosing a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectPackage {
    /// Catalog identifier of the package
    pub id: String,
    /// Display name of the package
    pub name: String,
    /// Listed price
    pub price: Decimal,
    /// Pages covered by the listed price
    pub included_pages: u32,
    /// Brand kit price when bundled with this package, if offered
    pub brand_kit_bundle_price: Option<Decimal>,
    /// Price per page beyond the included allowance
    pub extra_page_cost: Decimal,
}

/// Parameters for setting the bespoke branding line item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCustomBranding {
    /// Label shown on the invoice
    pub name: String,
    /// Price; zero or less deactivates the line item
    pub price: Decimal,
}

/// Parameters for inserting, replacing or toggling an add-on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonSpec {
    /// Unique identifier of the add-on
    pub id: String,
    /// Display name
    pub name: String,
    /// Flat price
    pub price: Decimal,
}

/// Parameters for moving a page within the page list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderPage {
    /// Current zero-based position of the page
    pub from: usize,
    /// Target zero-based position
    pub to: usize,
}

/// Parameters for annotating a page plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatePage {
    /// Page name; need not be in the current page list
    pub page: String,
    /// Field update to merge
    pub annotation: PlanAnnotation,
}
