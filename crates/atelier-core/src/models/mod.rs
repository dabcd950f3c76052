//! Data models for the onboarding order.
//!
//! The [`Order`] is the single record describing what the user has chosen so
//! far. Display implementations live in [`crate::display`]; pricing is
//! derived by [`crate::pricing`] and never stored here.
//!
//! Only [`Package`], [`CustomBranding`] and [`Addon`] carry money. The page
//! plans and the flowchart ride along with the order so they persist with it,
//! but they are inert to the invoice.

pub mod flowchart;
pub mod order;
pub mod page_plan;


pub use flowchart::{Connection, FlowNode, FlowchartData};
pub use order::{Addon, CustomBranding, Order, Package};
pub use page_plan::{PagePlan, PlanAnnotation};
