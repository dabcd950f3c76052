//! The mutation protocol.
//!
//! Every change to an [`Order`] is expressed as a [`Mutation`] and applied
//! here. Each variant is total over its inputs: malformed numbers are
//! clamped, blank names and out-of-range indices are no-ops, and references
//! to unknown pages or add-ons do nothing. [`Mutation::apply`] reports
//! whether the order actually changed so the controller can skip redundant
//! saves.

use log::debug;
use rust_decimal::Decimal;

use crate::{
    models::{Addon, CustomBranding, FlowchartData, Order, Package},
    money::sanitize_price,
    params::{AddonSpec, AnnotatePage, ReorderPage, SelectPackage, SetCustomBranding},
    suggest::STARTER_PAGES,
};

/// A single requested change to the order.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Replace the selected package; seeds starter pages into an empty list
    SelectPackage(SelectPackage),
    /// Flip the brand kit flag
    ToggleBrandKit,
    /// Set the bespoke branding line item
    SetCustomBranding(SetCustomBranding),
    /// Set the free-text industry
    SetIndustry(String),
    /// Append a page unless already present
    AddPage(String),
    /// Remove a page by name
    RemovePage(String),
    /// Move a page to another position
    ReorderPage(ReorderPage),
    /// Insert or replace an add-on by id
    UpsertAddon(AddonSpec),
    /// Insert the add-on when absent, remove it when present
    ToggleAddon(AddonSpec),
    /// Remove an add-on by id
    RemoveAddon(String),
    /// Merge an annotation into a page plan
    AnnotatePage(AnnotatePage),
    /// Replace the site-map diagram
    SetFlowchart(FlowchartData),
}

impl Mutation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SelectPackage(_) => "select_package",
            Mutation::ToggleBrandKit => "toggle_brand_kit",
            Mutation::SetCustomBranding(_) => "set_custom_branding",
            Mutation::SetIndustry(_) => "set_industry",
            Mutation::AddPage(_) => "add_page",
            Mutation::RemovePage(_) => "remove_page",
            Mutation::ReorderPage(_) => "reorder_page",
            Mutation::UpsertAddon(_) => "upsert_addon",
            Mutation::ToggleAddon(_) => "toggle_addon",
            Mutation::RemoveAddon(_) => "remove_addon",
            Mutation::AnnotatePage(_) => "set_page_annotation",
            Mutation::SetFlowchart(_) => "set_flowchart",
        }
    }

    /// Applies the mutation, returning whether the order changed.
    pub fn apply(self, order: &mut Order) -> bool {
        let name = self.name();
        let changed = match self {
            Mutation::SelectPackage(params) => select_package(order, params),
            Mutation::ToggleBrandKit => {
                order.brand_kit = !order.brand_kit;
                true
            }
            Mutation::SetCustomBranding(params) => set_custom_branding(order, params),
            Mutation::SetIndustry(industry) => set_industry(order, &industry),
            Mutation::AddPage(page) => add_page(order, &page),
            Mutation::RemovePage(page) => remove_page(order, &page),
            Mutation::ReorderPage(params) => reorder_page(order, params),
            Mutation::UpsertAddon(spec) => upsert_addon(order, spec),
            Mutation::ToggleAddon(spec) => toggle_addon(order, spec),
            Mutation::RemoveAddon(id) => remove_addon(order, &id),
            Mutation::AnnotatePage(params) => order
                .page_plans
                .entry(params.page)
                .or_default()
                .merge(params.annotation),
            Mutation::SetFlowchart(chart) => set_flowchart(order, chart),
        };
        debug!("Applied {name} (changed: {changed})");
        changed
    }
}

fn select_package(order: &mut Order, params: SelectPackage) -> bool {
    let package = Package {
        id: params.id,
        name: params.name,
        price: sanitize_price(params.price),
        included_pages: params.included_pages,
        brand_kit_bundle_price: params.brand_kit_bundle_price.map(sanitize_price),
        extra_page_cost: sanitize_price(params.extra_page_cost),
    };

    let mut changed = order.package.as_ref() != Some(&package);
    order.package = Some(package);

    if order.pages.is_empty() {
        order.pages = STARTER_PAGES.iter().map(|p| p.to_string()).collect();
        changed = true;
    }
    changed
}

fn set_custom_branding(order: &mut Order, params: SetCustomBranding) -> bool {
    let price = sanitize_price(params.price);
    let branding = CustomBranding {
        active: price > Decimal::ZERO,
        name: params.name.trim().to_string(),
        price,
    };
    if order.custom_branding == branding {
        return false;
    }
    order.custom_branding = branding;
    true
}

fn set_industry(order: &mut Order, industry: &str) -> bool {
    let industry = industry.trim();
    if order.industry == industry {
        return false;
    }
    order.industry = industry.to_string();
    true
}

fn add_page(order: &mut Order, page: &str) -> bool {
    let page = page.trim();
    if page.is_empty() || order.pages.iter().any(|p| p == page) {
        return false;
    }
    order.pages.push(page.to_string());
    true
}

fn remove_page(order: &mut Order, page: &str) -> bool {
    match order.pages.iter().position(|p| p == page) {
        Some(index) => {
            order.pages.remove(index);
            true
        }
        None => false,
    }
}

fn reorder_page(order: &mut Order, params: ReorderPage) -> bool {
    let ReorderPage { from, to } = params;
    let len = order.pages.len();
    if from >= len || to >= len || from == to {
        return false;
    }
    let page = order.pages.remove(from);
    order.pages.insert(to, page);
    true
}

fn addon_from_spec(spec: AddonSpec) -> Addon {
    Addon {
        id: spec.id,
        name: spec.name,
        price: sanitize_price(spec.price),
    }
}

fn upsert_addon(order: &mut Order, spec: AddonSpec) -> bool {
    if spec.id.is_empty() {
        return false;
    }
    let addon = addon_from_spec(spec);
    match order.addons.iter_mut().find(|a| a.id == addon.id) {
        Some(existing) if *existing == addon => false,
        Some(existing) => {
            *existing = addon;
            true
        }
        None => {
            order.addons.push(addon);
            true
        }
    }
}

fn toggle_addon(order: &mut Order, spec: AddonSpec) -> bool {
    if spec.id.is_empty() {
        return false;
    }
    if !remove_addon(order, &spec.id) {
        order.addons.push(addon_from_spec(spec));
    }
    true
}

fn remove_addon(order: &mut Order, id: &str) -> bool {
    let before = order.addons.len();
    order.addons.retain(|a| a.id != id);
    order.addons.len() != before
}

fn set_flowchart(order: &mut Order, mut chart: FlowchartData) -> bool {
    chart.normalize();
    if order.flowchart_data == chart {
        return false;
    }
    order.flowchart_data = chart;
    true
}
