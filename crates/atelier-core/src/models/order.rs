//! The order record and its priced components.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{FlowchartData, PagePlan};

/// A purchasable service tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Catalog identifier (e.g. `"growth"`)
    pub id: String,

    /// Display name used as the invoice label
    pub name: String,

    /// Listed price of the tier
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Number of pages covered by the listed price
    pub included_pages: u32,

    /// Brand kit price when bought together with this tier
    #[serde(with = "rust_decimal::serde::float_option")]
    pub brand_kit_bundle_price: Option<Decimal>,

    /// Price of each page beyond `included_pages`
    #[serde(with = "rust_decimal::serde::float")]
    pub extra_page_cost: Decimal,
}

/// A bespoke branding line item, separate from the brand kit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomBranding {
    pub active: bool,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// An optional extra with a flat price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Addon {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// The user's in-progress configuration.
///
/// Fields are readable by anyone holding a reference, but only the mutation
/// layer in [`crate::wizard`] and the store decoder can write them. That keeps
/// the duplicate-free page list and the unique add-on ids intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub(crate) package: Option<Package>,
    pub(crate) brand_kit: bool,
    pub(crate) industry: String,
    pub(crate) pages: Vec<String>,
    pub(crate) addons: Vec<Addon>,
    pub(crate) page_plans: BTreeMap<String, PagePlan>,
    pub(crate) custom_branding: CustomBranding,
    pub(crate) flowchart_data: FlowchartData,
}

impl Order {
    /// Creates an empty order with no package selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    pub fn brand_kit(&self) -> bool {
        self.brand_kit
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Planned page names in display order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Selected add-ons in the order they were added.
    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn addon(&self, id: &str) -> Option<&Addon> {
        self.addons.iter().find(|a| a.id == id)
    }

    /// Per-page annotations, including entries for pages since removed.
    pub fn page_plans(&self) -> &BTreeMap<String, PagePlan> {
        &self.page_plans
    }

    pub fn page_plan(&self, page: &str) -> Option<&PagePlan> {
        self.page_plans.get(page)
    }

    pub fn custom_branding(&self) -> &CustomBranding {
        &self.custom_branding
    }

    pub fn flowchart_data(&self) -> &FlowchartData {
        &self.flowchart_data
    }

    /// Returns true when nothing has been selected or planned yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
