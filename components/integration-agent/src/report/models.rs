// External crates
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Integration name reported to the agent.
pub const INTEGRATION_NAME: &str = "test";

/// Version of the agent output protocol this integration speaks.
pub const PROTOCOL_VERSION: &str = "1";

/// Version of the integration itself, taken from the package version.
pub const INTEGRATION_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MetricData is one observation record emitted to the agent's metrics
/// data store. Keys are field names, values are arbitrary JSON values.
pub type MetricData = Map<String, Value>;

/// InventoryData is a point-in-time snapshot of one item's attributes,
/// emitted to the agent's inventory data store.
pub type InventoryData = Map<String, Value>;

/// EventData is a single-shot event record.
pub type EventData = Map<String, Value>;

/// IntegrationData is the output document an integration run emits, in the
/// shape the agent expects.
#[derive(Debug, Serialize)]
pub struct IntegrationData {
    pub name: String,
    pub protocol_version: String,
    pub integration_version: String,
    pub metrics: Vec<MetricData>,
    pub inventory: BTreeMap<String, InventoryData>,
    pub events: Vec<EventData>,
}

impl Default for IntegrationData {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrationData {
    /// An empty report carrying only the fixed identity fields.
    pub fn new() -> Self {
        Self {
            name: INTEGRATION_NAME.to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            integration_version: INTEGRATION_VERSION.to_string(),
            metrics: Vec::new(),
            inventory: BTreeMap::new(),
            events: Vec::new(),
        }
    }
}
