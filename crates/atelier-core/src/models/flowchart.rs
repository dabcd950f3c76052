//! Site-map diagram data owned by the flowchart editor.

use serde::{Deserialize, Deserializer, Serialize};

/// One box in the site-map diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub x: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub y: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub w: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub h: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A directed arrow between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowchartData {
    pub nodes: Vec<FlowNode>,
    pub connections: Vec<Connection>,
}

/// Reads a coordinate, mapping `null` and non-finite values to zero.
fn finite_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or_default())
}

impl FlowNode {
    /// Zeroes coordinates that cannot be stored as JSON numbers.
    fn zero_non_finite(&mut self) {
        for value in [&mut self.x, &mut self.y, &mut self.w, &mut self.h] {
            if !value.is_finite() {
                *value = 0.0;
            }
        }
    }
}

impl FlowchartData {
    /// Zeroes non-finite node geometry and drops dangling connections, so the
    /// diagram survives a save and load unchanged.
    pub fn normalize(&mut self) {
        for node in &mut self.nodes {
            node.zero_non_finite();
        }
        self.prune_dangling();
    }

    /// Drops connections whose endpoints are not nodes of this diagram.
    pub fn prune_dangling(&mut self) {
        let nodes = &self.nodes;
        self.connections
            .retain(|c| nodes.iter().any(|n| n.id == c.from) && nodes.iter().any(|n| n.id == c.to));
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }
}
