use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::Ec2Instance;

/// Errors raised while loading or re-encoding the mock inventory file.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The data file could not be read at all
    #[error("Failed to read mock data from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a JSON array of instance records
    #[error("Invalid JSON format in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Re-serialization failed (unreachable for records that just decoded)
    #[error("Failed to format JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl InventoryError {
    pub fn is_read_error(&self) -> bool {
        matches!(self, InventoryError::Read { .. })
    }
}

/// Reads and decodes the full instance inventory, preserving array order.
pub fn load_instances(path: &Path) -> Result<Vec<Ec2Instance>, InventoryError> {
    let data = fs::read(path).map_err(|source| InventoryError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let instances: Vec<Ec2Instance> =
        serde_json::from_slice(&data).map_err(|source| InventoryError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(count = instances.len(), path = %path.display(), "Loaded mock inventory");
    Ok(instances)
}

/// Re-encodes records as indented JSON (two-space, declared field order).
pub fn render_pretty<T: serde::Serialize>(value: &T) -> Result<String, InventoryError> {
    serde_json::to_string_pretty(value).map_err(InventoryError::Encode)
}

pub fn find_instance<'a>(instances: &'a [Ec2Instance], instance_id: &str) -> Option<&'a Ec2Instance> {
    instances.iter().find(|i| i.instance_id == instance_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn load_preserves_order_and_length() {
        let f = write_temp(
            r#"[
                {"InstanceId":"i-b","Name":"b","Type":"t3.small","PublicIP":"","PrivateIP":"10.0.0.2","State":"stopped","OSInfo":"","SuggestedType":""},
                {"InstanceId":"i-a","Name":"a","Type":"t2.micro","PublicIP":"","PrivateIP":"10.0.0.1","State":"running","OSInfo":"","SuggestedType":""}
            ]"#,
        );
        let instances = load_instances(f.path()).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].instance_id, "i-b");
        assert_eq!(instances[1].instance_id, "i-a");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_instances(Path::new("MockData/definitely_not_here.json")).unwrap_err();
        assert!(err.is_read_error());
        assert!(err.to_string().contains("Failed to read mock data"));
    }

    #[test]
    fn truncated_json_is_a_parse_error() {
        let f = write_temp(r#"[{"InstanceId":"i-1","#);
        let err = load_instances(f.path()).unwrap_err();
        assert!(!err.is_read_error());
        assert!(err.to_string().contains("Invalid JSON format"));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        // Top-level object instead of an array of records
        let f = write_temp(r#"{"InstanceId":"i-1"}"#);
        assert!(load_instances(f.path()).is_err());
    }

    #[test]
    fn find_instance_matches_exact_id() {
        let f = write_temp(
            r#"[{"InstanceId":"i-42","Name":"db1","Type":"m5.large","PublicIP":"","PrivateIP":"","State":"running","OSInfo":"","SuggestedType":""}]"#,
        );
        let instances = load_instances(f.path()).unwrap();
        assert!(find_instance(&instances, "i-42").is_some());
        assert!(find_instance(&instances, "i-4").is_none());
    }
}
