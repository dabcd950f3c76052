//! Command handlers.
//!
//! Each handler applies at most one mutation group through the [`Wizard`],
//! then renders a confirmation and the updated totals. Persistence warnings
//! are printed but do not fail the command: the change still applies to the
//! in-memory order for the rest of the run.

use anyhow::{Context, Result};
use atelier_core::{
    display::{Dollars, LastSaved, OperationStatus, Pages, Suggestions},
    store::encode,
    Applied, Wizard,
};
use log::warn;

use crate::{
    cli::{
        AddonCommands, BrandKitCommands, BrandingCommands, IndustryCommands, PackageCommands,
        PageCommands, PlanCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Handler {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Handler {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    pub fn handle_package_command(&mut self, command: PackageCommands) {
        match command {
            PackageCommands::Select(args) => {
                let applied = self.wizard.select_package(args.into());
                self.report(&applied, "Package selected");
            }
        }
    }

    pub fn handle_brand_kit_command(&mut self, command: BrandKitCommands) {
        match command {
            BrandKitCommands::Toggle => {
                let applied = self.wizard.toggle_brand_kit();
                let done = if self.wizard.order().brand_kit() {
                    "Brand kit added"
                } else {
                    "Brand kit removed"
                };
                self.report(&applied, done);
            }
        }
    }

    pub fn handle_branding_command(&mut self, command: BrandingCommands) {
        match command {
            BrandingCommands::Set(args) => {
                let applied = self.wizard.set_custom_branding(args.into());
                self.report(&applied, "Custom branding updated");
            }
        }
    }

    pub fn handle_industry_command(&mut self, command: IndustryCommands) {
        match command {
            IndustryCommands::Set { industry } => {
                let applied = self.wizard.set_industry(industry);
                self.report(&applied, "Industry updated");
                self.show_suggestions();
            }
        }
    }

    pub fn handle_page_command(&mut self, command: PageCommands) {
        match command {
            PageCommands::Add { name } => {
                let applied = self.wizard.add_page(name);
                self.report(&applied, "Page added");
            }
            PageCommands::Remove { name } => {
                let applied = self.wizard.remove_page(name);
                self.report(&applied, "Page removed");
            }
            PageCommands::Move(args) => {
                let applied = self.wizard.reorder_page(args.into());
                self.report(&applied, "Page moved");
                self.list_pages();
            }
            PageCommands::List => self.list_pages(),
            PageCommands::Suggest => self.show_suggestions(),
        }
    }

    pub fn handle_addon_command(&mut self, command: AddonCommands) {
        match command {
            AddonCommands::Set(args) => {
                let applied = self.wizard.upsert_addon(args.into());
                self.report(&applied, "Add-on saved");
            }
            AddonCommands::Toggle(args) => {
                let id = args.id.clone();
                let applied = self.wizard.toggle_addon(args.into());
                let done = if self.wizard.order().addon(&id).is_some() {
                    "Add-on added"
                } else {
                    "Add-on removed"
                };
                self.report(&applied, done);
            }
            AddonCommands::Remove { id } => {
                let applied = self.wizard.remove_addon(id);
                self.report(&applied, "Add-on removed");
            }
        }
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) {
        match command {
            PlanCommands::Annotate(args) => {
                let page = args.page.clone();
                let mut changed = false;
                let mut warning = None;
                for params in args.into_params() {
                    let applied = self
                        .wizard
                        .set_page_annotation(params.page, params.annotation);
                    changed |= applied.changed;
                    warning = applied.warning.or(warning);
                }

                let status = match (warning, changed) {
                    (Some(e), _) => OperationStatus::failure(format!(
                        "Plan for {page} updated, but it was not saved: {e}"
                    )),
                    (None, true) => OperationStatus::success(format!("Plan for {page} updated.")),
                    (None, false) => OperationStatus::success("Nothing to change.".to_string()),
                };
                self.renderer.render(&status.to_string());
                self.show_plan(&page);
            }
            PlanCommands::Show { page } => self.show_plan(&page),
        }
    }

    /// Renders the full order summary.
    pub fn show_status(&self) {
        let mut output = self.wizard.view().to_string();
        if let Some(saved_at) = self.wizard.last_saved_at() {
            output.push_str(&format!("\n{}", LastSaved::local(saved_at)));
        }
        self.renderer.render(&output);
    }

    pub fn show_invoice(&self) {
        self.renderer
            .render(&format!("# Invoice\n\n{}", self.wizard.invoice()));
    }

    /// Prints the order as the pretty-printed record the store would save.
    pub fn export(&self) -> Result<()> {
        let record = encode(self.wizard.order()).context("Failed to encode order")?;
        let value: serde_json::Value =
            serde_json::from_str(&record).context("Failed to re-read encoded order")?;
        let pretty = serde_json::to_string_pretty(&value).context("Failed to format order")?;
        self.renderer.raw(&pretty);
        Ok(())
    }

    fn list_pages(&self) {
        let view = self.wizard.view();
        let mut output = format!("# Pages\n\n{}", Pages(self.wizard.order()));
        if view.pages.over_limit() {
            output.push_str(&format!("\n{}", view.pages));
        }
        self.renderer.render(&output);
    }

    fn show_suggestions(&self) {
        let suggestions = self.wizard.view().suggestions;
        self.renderer
            .render(&format!("# Suggested Pages\n\n{}", Suggestions(&suggestions)));
    }

    fn show_plan(&self, page: &str) {
        let plan = self
            .wizard
            .order()
            .page_plan(page)
            .map(ToString::to_string)
            .unwrap_or_else(|| "No planning notes yet.\n".to_string());
        self.renderer.render(&format!("# {page}\n\n{plan}"));
    }

    /// Prints the outcome of a mutation followed by the running total.
    fn report(&self, applied: &Applied, done: &str) {
        if let Some(e) = &applied.warning {
            warn!("Save failed: {e}");
        }
        let status = OperationStatus::from_applied(applied, done);
        let invoice = &applied.view.invoice;
        let totals = if invoice.is_empty() {
            invoice.to_string()
        } else {
            format!(
                "Total: **{}** (deposit **{}**)\n",
                Dollars(invoice.total),
                Dollars(applied.view.deposit)
            )
        };
        self.renderer.render(&format!("{status}\n{totals}"));
    }
}
