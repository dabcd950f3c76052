//! Wrapper types for displaying page lists.

use std::fmt;

use crate::{models::Order, pricing::extra_pages};

/// Newtype wrapper for displaying the planned pages of an order.
///
/// Pages past the package allowance carry a `+ Extra Cost` tag, in the same
/// quantity the invoice bills for.
///
/// # Examples
///
/// ```rust
/// use atelier_core::{display::Pages, Order};
///
/// let order = Order::new();
/// assert!(Pages(&order).to_string().contains("No pages planned yet."));
/// ```
pub struct Pages<'a>(pub &'a Order);

impl<'a> fmt::Display for Pages<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        if order.pages().is_empty() {
            return writeln!(f, "No pages planned yet.");
        }

        let extra = extra_pages(order) as usize;
        let tagged_from = order.pages().len().saturating_sub(extra);

        for (index, page) in order.pages().iter().enumerate() {
            write!(f, "{}. {page}", index + 1)?;
            if index >= tagged_from {
                write!(f, " *(+ Extra Cost)*")?;
            }
            if order.page_plan(page).is_some_and(|plan| !plan.is_empty()) {
                write!(f, " [planned]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying page suggestions.
pub struct Suggestions<'a>(pub &'a [String]);

impl<'a> fmt::Display for Suggestions<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No further suggestions.");
        }
        for page in self.0 {
            writeln!(f, "- {page}")?;
        }
        Ok(())
    }
}
