//! Read-only projections for presentation layers.
//!
//! A [`ViewSnapshot`] is rebuilt from the order after every applied mutation.
//! It carries no state of its own: everything in it is derived from
//! [`compute_invoice`] and raw order fields, so a renderer holding a snapshot
//! can never disagree with the priced total.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    models::Order,
    pricing::{
        brand_kit_price, compute_invoice, count_distinct_pages, Invoice, LineKind,
        BASE_BRAND_KIT_PRICE,
    },
    suggest::suggested_pages,
};

/// State of the brand kit banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKitBanner {
    /// Whether the brand kit is in the order
    pub selected: bool,
    /// Whether the package bundle price applies
    pub bundled: bool,
    /// Struck-through base price, shown only when bundled
    pub original_price: Option<Decimal>,
    /// Price the brand kit would be charged at
    pub final_price: Decimal,
}

impl BrandKitBanner {
    pub fn from_order(order: &Order) -> Self {
        let kit = brand_kit_price(order.package());
        Self {
            selected: order.brand_kit(),
            bundled: kit.bundled,
            original_price: kit.bundled.then_some(BASE_BRAND_KIT_PRICE),
            final_price: kit.amount,
        }
    }
}

/// Page count against the package allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLimit {
    /// Distinct, non-blank pages planned
    pub count: usize,
    /// Pages included in the package, if one is selected
    pub included: Option<u32>,
    /// Pages billed as overage
    pub extra_pages: u32,
    /// Overage charge as priced on the invoice
    pub extra_cost: Decimal,
}

impl PageLimit {
    fn from_parts(order: &Order, invoice: &Invoice) -> Self {
        let (extra_pages, extra_cost) = invoice
            .line_items
            .iter()
            .find_map(|line| match line.kind {
                LineKind::ExtraPages { count, .. } => Some((count, line.amount)),
                _ => None,
            })
            .unwrap_or((0, Decimal::ZERO));

        Self {
            count: count_distinct_pages(order.pages()),
            included: order.package().map(|p| p.included_pages),
            extra_pages,
            extra_cost,
        }
    }

    /// True when more pages are planned than the package includes.
    pub fn over_limit(&self) -> bool {
        self.included
            .is_some_and(|included| self.count > included as usize)
    }
}

/// Everything a renderer needs to redraw after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub invoice: Invoice,
    pub deposit: Decimal,
    pub brand_kit: BrandKitBanner,
    pub pages: PageLimit,
    pub suggestions: Vec<String>,
}

impl ViewSnapshot {
    /// Derives a snapshot from the order alone.
    pub fn from_order(order: &Order) -> Self {
        let invoice = compute_invoice(order);
        let pages = PageLimit::from_parts(order, &invoice);
        Self {
            deposit: invoice.deposit(),
            brand_kit: BrandKitBanner::from_order(order),
            pages,
            suggestions: suggested_pages(order),
            invoice,
        }
    }
}
