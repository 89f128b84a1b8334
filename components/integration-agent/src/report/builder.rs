// Local crates
use crate::helpers::config::AgentConfig;
use crate::report::models::{IntegrationData, InventoryData, MetricData};
use crate::sizer::sizer;

// External crates
use serde_json::Value;
use tracing::{debug, warn};

/// Event type the metric sample is grouped under. The agent accepts:
///  * LoadBalancerSample
///  * BlockDeviceSample
///  * DatastoreSample
///  * QueueSample
///  * ComputeSample
///  * IamAccountSummarySample
///  * PrivateNetworkSample
///  * ServerlessSample
const EVENT_TYPE: &str = "DatastoreSample";

/// Identifies the data provider. May be set to anything.
const PROVIDER: &str = "JoanmiTestExtension";

/// Provider-namespaced metric fields, reserved but left at zero for now.
const METRIC_KEYS: &[&str] = &["provider.folderSize"]; // "provider.valueTwo", "provider.valueThree"

/// Inventory items this integration reports on.
const INVENTORY_ITEMS: &[&str] = &["item1"]; // "item2", "item3"

/// Attribute keys set on every inventory item.
const INVENTORY_KEYS: &[&str] = &["folderSize"]; // "valueTwo", "valueThree"

/// Assemble the full integration report: one metric sample, one inventory
/// record per configured item, and an empty events list.
pub fn build_report(config: &AgentConfig) -> IntegrationData {
    let mut data = IntegrationData::new();

    let mut metric = MetricData::new();
    metric.insert("event_type".to_string(), Value::from(EVENT_TYPE));
    metric.insert("provider".to_string(), Value::from(PROVIDER));

    // ENVIRONMENT is set by the agent; copied verbatim when non-empty.
    if let Some(env) = &config.environment {
        metric.insert("environment".to_string(), Value::from(env.clone()));
    }

    // Each metric specific to a provider goes prefixed with the provider
    // namespace.
    for key in METRIC_KEYS {
        metric.insert((*key).to_string(), Value::from(0));
        debug!(key, value = 0, "Adding metric");
    }

    data.metrics.push(metric);

    let scan = sizer::folder_size(&config.search_path);
    if scan.errors > 0 {
        warn!(
            path = %config.search_path.display(),
            errors = scan.errors,
            "Directory scan was partial, folder size may undercount"
        );
    }

    for item in INVENTORY_ITEMS {
        let mut record = InventoryData::new();
        for key in INVENTORY_KEYS {
            record.insert((*key).to_string(), Value::from(scan.bytes));
            debug!(item, key, value = scan.bytes, "Setting inventory key");
        }
        data.inventory.insert((*item).to_string(), record);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(environment: Option<&str>, search_path: PathBuf) -> AgentConfig {
        AgentConfig {
            verbose: false,
            pretty: false,
            search_path,
            environment: environment.map(str::to_string),
        }
    }

    #[test]
    fn report_carries_fixed_identity_fields() {
        let tmp = TempDir::new().expect("create temp dir");
        let report = build_report(&config(None, tmp.path().to_path_buf()));

        assert_eq!(report.name, "test");
        assert_eq!(report.protocol_version, "1");
        assert_eq!(report.integration_version, "1.0.0");
        assert!(report.events.is_empty());
    }

    #[test]
    fn metric_contains_provider_fields_and_placeholder() {
        let tmp = TempDir::new().expect("create temp dir");
        let report = build_report(&config(None, tmp.path().to_path_buf()));

        assert_eq!(report.metrics.len(), 1);
        let metric = &report.metrics[0];
        assert_eq!(metric["event_type"], "DatastoreSample");
        assert_eq!(metric["provider"], "JoanmiTestExtension");
        assert_eq!(metric["provider.folderSize"], 0);
        assert!(!metric.contains_key("environment"));
    }

    #[test]
    fn environment_is_copied_when_configured() {
        let tmp = TempDir::new().expect("create temp dir");
        let report = build_report(&config(Some("staging"), tmp.path().to_path_buf()));

        assert_eq!(report.metrics[0]["environment"], "staging");
    }

    #[test]
    fn inventory_item_holds_the_computed_folder_size() {
        let tmp = TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("payload.dat"), vec![0u8; 42]).expect("write file");

        let report = build_report(&config(None, tmp.path().to_path_buf()));

        assert_eq!(report.inventory.len(), 1);
        assert_eq!(report.inventory["item1"]["folderSize"], 42);
    }
}
