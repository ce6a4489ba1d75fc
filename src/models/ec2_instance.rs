use serde::{Deserialize, Serialize};

/// One observed compute instance as exchanged via the mock inventory JSON.
///
/// The JSON keys are a fixed, case-sensitive contract with the data file and
/// the dashboard frontend; field order here is the order they serialize in.
/// String fields missing from the input decode as empty strings; the two
/// numeric fields stay absent from the output entirely when unset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ec2Instance {
    #[serde(rename = "InstanceId", default)]
    pub instance_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub instance_type: String,
    #[serde(rename = "PublicIP", default)]
    pub public_ip: String,
    #[serde(rename = "PrivateIP", default)]
    pub private_ip: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "OSInfo", default)]
    pub os_info: String,
    #[serde(rename = "SuggestedType", default)]
    pub suggested_type: String,
    /// Absent (not null) in the JSON when unknown.
    #[serde(rename = "Cores", skip_serializing_if = "Option::is_none", default)]
    pub cores: Option<i64>,
    /// Absent (not null) in the JSON when unknown.
    #[serde(rename = "Threads", skip_serializing_if = "Option::is_none", default)]
    pub threads: Option<i64>,
}
