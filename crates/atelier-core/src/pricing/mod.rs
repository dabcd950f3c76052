//! Invoice derivation.
//!
//! [`compute_invoice`] is the only code path that turns an [`Order`] into
//! money. Views that need the overage, the brand kit price or the total ask
//! this module instead of recomputing them.
//!
//! Line items are emitted in a fixed order:
//!
//! 1. the package at its listed price
//! 2. extra-page overage (`extra pages × extra page cost`)
//! 3. the brand kit, bundled or standalone
//! 4. custom branding, when active and priced
//! 5. each add-on in insertion order
//!
//! The order of line items affects display only; the total is their sum.
//! Every price is capped at [`MAX_PRICE`](crate::money::MAX_PRICE) before it
//! is summed, and sums saturate rather than overflow.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    display::Dollars,
    models::{Order, Package},
    money::sanitize_price,
};


/// Standalone brand kit price, used when no bundle price applies.
pub const BASE_BRAND_KIT_PRICE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// What a line item was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineKind {
    Package,
    ExtraPages { count: u32, unit_cost: Decimal },
    BrandKit { bundled: bool },
    CustomBranding,
    Addon { id: String },
}

/// One priced row of the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
    #[serde(flatten)]
    pub kind: LineKind,
}

/// The itemized invoice for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub line_items: Vec<LineItem>,
    pub total: Decimal,
}

impl Invoice {
    /// Up-front deposit, half of the total.
    pub fn deposit(&self) -> Decimal {
        (self.total / Decimal::TWO).normalize()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    fn push(&mut self, label: impl Into<String>, amount: Decimal, kind: LineKind) {
        self.total = self.total.saturating_add(amount);
        self.line_items.push(LineItem {
            label: label.into(),
            amount,
            kind,
        });
    }
}

/// Resolved brand kit pricing for the current package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandKitPrice {
    /// Price actually charged
    pub amount: Decimal,
    /// Whether a package-specific bundle price applies
    pub bundled: bool,
}

/// Resolves the brand kit unit price.
///
/// A package's bundle price wins when it is positive. The result is only
/// marked as bundled when that price differs from
/// [`BASE_BRAND_KIT_PRICE`]; a "bundle" at the base price is the standalone
/// offer under another name.
pub fn brand_kit_price(package: Option<&Package>) -> BrandKitPrice {
    let bundle = package
        .and_then(|p| p.brand_kit_bundle_price)
        .map(sanitize_price)
        .filter(|price| *price > Decimal::ZERO);

    match bundle {
        Some(amount) => BrandKitPrice {
            amount,
            bundled: amount != BASE_BRAND_KIT_PRICE,
        },
        None => BrandKitPrice {
            amount: BASE_BRAND_KIT_PRICE,
            bundled: false,
        },
    }
}

/// Counts distinct, non-blank page names.
pub fn count_distinct_pages(pages: &[String]) -> usize {
    pages
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of pages beyond the package allowance; zero without a package.
pub fn extra_pages(order: &Order) -> u32 {
    let Some(package) = order.package() else {
        return 0;
    };
    let count = u32::try_from(count_distinct_pages(order.pages())).unwrap_or(u32::MAX);
    count.saturating_sub(package.included_pages)
}

/// Derives the itemized invoice for an order.
///
/// Pure and deterministic: the same order always yields the same invoice.
///
/// # Examples
///
/// ```rust
/// use atelier_core::{pricing::compute_invoice, Order};
///
/// let invoice = compute_invoice(&Order::new());
/// assert!(invoice.is_empty());
/// assert!(invoice.total.is_zero());
/// ```
pub fn compute_invoice(order: &Order) -> Invoice {
    let mut invoice = Invoice::default();

    if let Some(package) = order.package() {
        invoice.push(
            package.name.clone(),
            sanitize_price(package.price),
            LineKind::Package,
        );

        let count = extra_pages(order);
        let unit_cost = sanitize_price(package.extra_page_cost);
        if count > 0 && unit_cost > Decimal::ZERO {
            invoice.push(
                format!("Extra Pages ({count} × {})", Dollars(unit_cost)),
                Decimal::from(count).saturating_mul(unit_cost),
                LineKind::ExtraPages { count, unit_cost },
            );
        }
    }

    if order.brand_kit() {
        let kit = brand_kit_price(order.package());
        let label = if kit.bundled {
            "Brand Kit (Bundled)"
        } else {
            "Brand Kit"
        };
        invoice.push(label, kit.amount, LineKind::BrandKit { bundled: kit.bundled });
    }

    let branding = order.custom_branding();
    let branding_price = sanitize_price(branding.price);
    if branding.active && branding_price > Decimal::ZERO {
        let label = if branding.name.trim().is_empty() {
            "Custom Branding".to_string()
        } else {
            branding.name.clone()
        };
        invoice.push(label, branding_price, LineKind::CustomBranding);
    }

    for addon in order.addons() {
        invoice.push(
            addon.name.clone(),
            sanitize_price(addon.price),
            LineKind::Addon {
                id: addon.id.clone(),
            },
        );
    }

    invoice.total = invoice.total.normalize();
    invoice
}
