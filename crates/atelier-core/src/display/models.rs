//! Display implementations for invoices, views and page plans.
//!
//! All output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::money::Dollars;
use crate::{
    models::PagePlan,
    pricing::{Invoice, LineItem},
    view::{BrandKitBanner, PageLimit, ViewSnapshot},
};

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} | {} |", self.label, Dollars(self.amount))
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Select a package to start...");
        }

        writeln!(f, "| Item | Amount |")?;
        writeln!(f, "|:-|-:|")?;
        for line in &self.line_items {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "| **Total** | **{}** |", Dollars(self.total))?;
        writeln!(f)?;
        writeln!(f, "Deposit due today (50%): **{}**", Dollars(self.deposit()))
    }
}

impl fmt::Display for BrandKitBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = if self.selected {
            "Selected"
        } else {
            "Not selected"
        };
        writeln!(f, "- Status: {selected}")?;
        match self.original_price {
            Some(original) => writeln!(
                f,
                "- Price: ~~{}~~ **{}** (bundle discount)",
                Dollars(original),
                Dollars(self.final_price)
            ),
            None => writeln!(f, "- Price: {}", Dollars(self.final_price)),
        }
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.included {
            Some(included) => writeln!(f, "- {} of {included} included pages", self.count)?,
            None => writeln!(f, "- {} pages planned", self.count)?,
        }
        if self.over_limit() {
            writeln!(
                f,
                "- **Over the page limit**: {} extra pages (+ {})",
                self.extra_pages,
                Dollars(self.extra_cost)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ViewSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Order Summary")?;
        writeln!(f)?;
        write!(f, "{}", self.invoice)?;

        writeln!(f, "\n## Brand Kit")?;
        writeln!(f)?;
        write!(f, "{}", self.brand_kit)?;

        writeln!(f, "\n## Pages")?;
        writeln!(f)?;
        write!(f, "{}", self.pages)?;

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Suggested: {}", self.suggestions.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for PagePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No planning notes yet.");
        }

        let text_fields = [
            ("Notes", &self.notes),
            ("SEO", &self.seo),
            ("Conversion goal", &self.conversion),
        ];
        for (label, value) in text_fields {
            if !value.is_empty() {
                writeln!(f, "- **{label}**: {value}")?;
            }
        }

        if !self.integrations.is_empty() {
            let names: Vec<&str> = self.integrations.iter().map(String::as_str).collect();
            writeln!(f, "- **Integrations**: {}", names.join(", "))?;
        }

        let sketches = [
            ("Mobile sketch", &self.mobile_sketch),
            ("Desktop sketch", &self.desktop_sketch),
        ];
        for (label, sketch) in sketches {
            if let Some(blob) = sketch {
                writeln!(f, "- **{label}**: attached ({} bytes)", blob.len())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{
        models::{Order, Package, PagePlan},
        pricing::compute_invoice,
        view::ViewSnapshot,
    };

    fn order() -> Order {
        let mut order = Order::new();
        order.package = Some(Package {
            id: "growth".to_string(),
            name: "Growth".to_string(),
            price: Decimal::from(1000),
            included_pages: 5,
            brand_kit_bundle_price: Some(Decimal::from(300)),
            extra_page_cost: Decimal::from(50),
        });
        order.pages = (1..=7).map(|i| format!("Page {i}")).collect();
        order.brand_kit = true;
        order
    }

    #[test]
    fn test_empty_invoice_prompts_for_package() {
        let output = compute_invoice(&Order::new()).to_string();

        assert_eq!(output.trim(), "Select a package to start...");
    }

    #[test]
    fn test_invoice_lists_lines_total_and_deposit() {
        let output = compute_invoice(&order()).to_string();

        assert!(output.contains("| Growth | $1,000 |"));
        assert!(output.contains("| Extra Pages (2 × $50) | $100 |"));
        assert!(output.contains("| Brand Kit (Bundled) | $300 |"));
        assert!(output.contains("**$1,400**"));
        assert!(output.contains("**$700**"));
    }

    #[test]
    fn test_view_shows_discount_and_limit_warning() {
        let output = ViewSnapshot::from_order(&order()).to_string();

        assert!(output.contains("~~$500~~ **$300**"));
        assert!(output.contains("7 of 5 included pages"));
        assert!(output.contains("2 extra pages (+ $100)"));
    }

    #[test]
    fn test_page_plan_display() {
        assert!(PagePlan::default()
            .to_string()
            .contains("No planning notes yet."));

        let plan = PagePlan {
            seo: "bakery near me".to_string(),
            integrations: ["Stripe".to_string(), "Calendly".to_string()]
                .into_iter()
                .collect(),
            mobile_sketch: Some("data:image/png;base64,AAAA".to_string()),
            ..PagePlan::default()
        };
        let output = plan.to_string();

        assert!(output.contains("- **SEO**: bakery near me"));
        assert!(output.contains("- **Integrations**: Calendly, Stripe"));
        assert!(output.contains("- **Mobile sketch**: attached (26 bytes)"));
        assert!(!output.contains("Notes"));
    }
}
