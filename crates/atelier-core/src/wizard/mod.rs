//! The wizard controller.
//!
//! [`Wizard`] owns the one [`Order`] of a session and is the only way to
//! change it. Every operation follows the same sequence:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Mutation     │    │     Pricing     │    │   OrderStore    │    │  ViewListeners  │
//! │ (apply to the   │───▶│ (recompute the  │───▶│ (save; failures │───▶│ (refresh from   │
//! │  owned order)   │    │  view snapshot) │    │  become warnings│    │  the snapshot)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Consumers read through [`Wizard::order`] (a shared reference) or
//! [`Wizard::view`]; neither lets them write order fields directly.
//!
//! # Usage
//!
//! ```rust
//! use atelier_core::{params::SelectPackage, WizardBuilder};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().in_memory().build()?;
//!
//! wizard.select_package(SelectPackage {
//!     id: "growth".to_string(),
//!     name: "Growth".to_string(),
//!     price: Decimal::from(1000),
//!     included_pages: 5,
//!     brand_kit_bundle_price: Some(Decimal::from(300)),
//!     extra_page_cost: Decimal::from(50),
//! });
//! let applied = wizard.toggle_brand_kit();
//!
//! assert_eq!(applied.view.invoice.total, Decimal::from(1300));
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;
use log::warn;

use crate::{
    error::PersistError,
    models::{FlowchartData, Order, PlanAnnotation},
    params::{AddonSpec, AnnotatePage, ReorderPage, SelectPackage, SetCustomBranding},
    pricing::{compute_invoice, Invoice},
    store::OrderStore,
    view::ViewSnapshot,
};

pub mod builder;
pub mod mutation;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;
pub use mutation::Mutation;

/// Receives a fresh snapshot after each mutation that changed the order.
pub trait ViewListener {
    fn refresh(&mut self, view: &ViewSnapshot);
}

impl<F> ViewListener for F
where
    F: FnMut(&ViewSnapshot),
{
    fn refresh(&mut self, view: &ViewSnapshot) {
        self(view)
    }
}

/// Outcome of a mutation.
#[derive(Debug)]
pub struct Applied {
    /// Whether the order changed; unchanged orders are not re-saved
    pub changed: bool,
    /// Projections recomputed from the order after the mutation
    pub view: ViewSnapshot,
    /// Persistence failure, if the save did not go through
    pub warning: Option<PersistError>,
}

/// Owner of the session's order.
pub struct Wizard {
    order: Order,
    store: Box<dyn OrderStore>,
    listeners: Vec<Box<dyn ViewListener>>,
}

impl Wizard {
    /// Creates a wizard, loading the order from the store.
    pub(crate) fn new(store: Box<dyn OrderStore>) -> Self {
        let order = store.load();
        Self {
            order,
            store,
            listeners: Vec::new(),
        }
    }

    /// The current order, read-only.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// The current invoice.
    pub fn invoice(&self) -> Invoice {
        compute_invoice(&self.order)
    }

    /// All projections for the current order.
    pub fn view(&self) -> ViewSnapshot {
        ViewSnapshot::from_order(&self.order)
    }

    /// When the order was last persisted, if the store knows.
    pub fn last_saved_at(&self) -> Option<Timestamp> {
        self.store.last_saved_at()
    }

    /// Registers a listener notified after every change.
    pub fn subscribe(&mut self, listener: impl ViewListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Writes the current order to the store.
    ///
    /// Mutations already save; this is for callers that want to flush before
    /// leaving a step.
    pub fn save(&mut self) -> Result<(), PersistError> {
        self.store.save(&self.order)
    }

    /// Applies a mutation, then recomputes, persists and notifies listeners.
    pub fn apply(&mut self, mutation: Mutation) -> Applied {
        let changed = mutation.apply(&mut self.order);
        let view = self.view();

        if !changed {
            return Applied {
                changed,
                view,
                warning: None,
            };
        }

        let warning = self.store.save(&self.order).err();
        if let Some(e) = &warning {
            warn!("Order kept in memory only: {e}");
        }

        for listener in &mut self.listeners {
            listener.refresh(&view);
        }

        Applied {
            changed,
            view,
            warning,
        }
    }

    /// Selects a package, replacing any previous choice.
    pub fn select_package(&mut self, params: SelectPackage) -> Applied {
        self.apply(Mutation::SelectPackage(params))
    }

    pub fn toggle_brand_kit(&mut self) -> Applied {
        self.apply(Mutation::ToggleBrandKit)
    }

    /// Sets the bespoke branding item; a price of zero deactivates it.
    pub fn set_custom_branding(&mut self, params: SetCustomBranding) -> Applied {
        self.apply(Mutation::SetCustomBranding(params))
    }

    pub fn set_industry(&mut self, industry: impl Into<String>) -> Applied {
        self.apply(Mutation::SetIndustry(industry.into()))
    }

    /// Appends a page; blank names and duplicates are ignored.
    pub fn add_page(&mut self, page: impl Into<String>) -> Applied {
        self.apply(Mutation::AddPage(page.into()))
    }

    pub fn remove_page(&mut self, page: impl Into<String>) -> Applied {
        self.apply(Mutation::RemovePage(page.into()))
    }

    /// Moves a page; out-of-range indices are ignored.
    pub fn reorder_page(&mut self, params: ReorderPage) -> Applied {
        self.apply(Mutation::ReorderPage(params))
    }

    /// Inserts the add-on or replaces the one with the same id.
    pub fn upsert_addon(&mut self, spec: AddonSpec) -> Applied {
        self.apply(Mutation::UpsertAddon(spec))
    }

    /// Adds the add-on if absent, removes it if present.
    pub fn toggle_addon(&mut self, spec: AddonSpec) -> Applied {
        self.apply(Mutation::ToggleAddon(spec))
    }

    pub fn remove_addon(&mut self, id: impl Into<String>) -> Applied {
        self.apply(Mutation::RemoveAddon(id.into()))
    }

    /// Merges one annotation into a page plan, creating the plan if needed.
    pub fn set_page_annotation(
        &mut self,
        page: impl Into<String>,
        annotation: PlanAnnotation,
    ) -> Applied {
        self.apply(Mutation::AnnotatePage(AnnotatePage {
            page: page.into(),
            annotation,
        }))
    }

    /// Replaces the site-map diagram handed back by the diagram editor.
    pub fn set_flowchart(&mut self, chart: FlowchartData) -> Applied {
        self.apply(Mutation::SetFlowchart(chart))
    }
}
