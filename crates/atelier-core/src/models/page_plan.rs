//! Per-page planning annotations.

use std::collections::BTreeSet;

use serde::Serialize;

/// Planning notes attached to a single page.
///
/// Sketches are opaque blobs (typically data URLs) owned by the sketching
/// collaborator; they are stored and forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub notes: String,
    pub seo: String,
    pub conversion: String,
    pub integrations: BTreeSet<String>,
    pub mobile_sketch: Option<String>,
    pub desktop_sketch: Option<String>,
}

/// A single field update merged into a [`PagePlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAnnotation {
    /// Replace the free-form notes
    Notes(String),
    /// Replace the SEO keywords/brief
    Seo(String),
    /// Replace the conversion goal
    Conversion(String),
    /// Replace the whole integration set; names are trimmed and blanks dropped
    Integrations(BTreeSet<String>),
    /// Add or remove one integration
    Integration { name: String, enabled: bool },
    /// Store the mobile layout sketch blob
    MobileSketch(Option<String>),
    /// Store the desktop layout sketch blob
    DesktopSketch(Option<String>),
}

impl PagePlan {
    /// True when nothing has been annotated yet.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
            && self.seo.is_empty()
            && self.conversion.is_empty()
            && self.integrations.is_empty()
            && self.mobile_sketch.is_none()
            && self.desktop_sketch.is_none()
    }

    /// Merges one annotation into this plan, returning whether anything
    /// changed.
    pub fn merge(&mut self, annotation: PlanAnnotation) -> bool {
        match annotation {
            PlanAnnotation::Notes(v) => replace(&mut self.notes, v),
            PlanAnnotation::Seo(v) => replace(&mut self.seo, v),
            PlanAnnotation::Conversion(v) => replace(&mut self.conversion, v),
            PlanAnnotation::Integrations(v) => {
                let names = v
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect();
                replace(&mut self.integrations, names)
            }
            PlanAnnotation::Integration { name, enabled } => {
                let name = name.trim();
                if name.is_empty() {
                    false
                } else if enabled {
                    self.integrations.insert(name.to_string())
                } else {
                    self.integrations.remove(name)
                }
            }
            PlanAnnotation::MobileSketch(v) => replace(&mut self.mobile_sketch, v),
            PlanAnnotation::DesktopSketch(v) => replace(&mut self.desktop_sketch, v),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
