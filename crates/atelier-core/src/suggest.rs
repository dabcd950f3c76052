//! Page-name suggestions driven by the order's industry.
//!
//! Suggestions are a read-only projection; they never change the order or the
//! price. Matching is a case-insensitive keyword search over the free-text
//! industry.

use crate::models::Order;

/// Pages seeded into an empty page list when a package is first selected.
pub const STARTER_PAGES: [&str; 4] = ["Home", "About", "Services", "Contact"];

const GENERIC_PAGES: &[&str] = &[
    "Home",
    "About",
    "Services",
    "Portfolio",
    "Testimonials",
    "Blog",
    "FAQ",
    "Contact",
];

const INDUSTRY_PAGES: &[(&[&str], &[&str])] = &[
    (
        &["restaurant", "cafe", "café", "bakery", "bar", "food"],
        &["Menu", "Reservations", "Locations", "Catering", "Gallery"],
    ),
    (
        &["retail", "shop", "store", "ecommerce", "e-commerce", "boutique"],
        &["Shop", "Collections", "Lookbook", "Shipping & Returns", "FAQ"],
    ),
    (
        &["health", "clinic", "dental", "medical", "therapy", "wellness"],
        &["Services", "Book Appointment", "Our Team", "Insurance", "Patient Forms"],
    ),
    (
        &["law", "legal", "attorney"],
        &["Practice Areas", "Attorneys", "Case Results", "Free Consultation"],
    ),
    (
        &["real estate", "realtor", "property"],
        &["Listings", "Neighborhoods", "Agents", "Mortgage Calculator"],
    ),
    (
        &["agency", "consult", "freelance", "design"],
        &["Services", "Case Studies", "Process", "Team", "Contact"],
    ),
    (
        &["fitness", "gym", "yoga", "studio"],
        &["Classes", "Schedule", "Trainers", "Membership", "Pricing"],
    ),
];

/// Suggested page names for an industry description.
///
/// Falls back to a generic list when no keyword matches.
pub fn pages_for_industry(industry: &str) -> Vec<&'static str> {
    let needle = industry.trim().to_lowercase();
    if needle.is_empty() {
        return GENERIC_PAGES.to_vec();
    }

    INDUSTRY_PAGES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| needle.contains(k)))
        .map_or_else(|| GENERIC_PAGES.to_vec(), |(_, pages)| pages.to_vec())
}

/// Suggestions for the order's industry that are not already planned.
pub fn suggested_pages(order: &Order) -> Vec<String> {
    pages_for_industry(order.industry())
        .into_iter()
        .filter(|s| !order.pages().iter().any(|p| p == s))
        .map(String::from)
        .collect()
}
