//! Value types returned by the remote parameter store.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of value stored under a parameter name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    /// Plain text value.
    String,
    /// Comma-separated list of values.
    StringList,
    /// Value encrypted at rest with KMS.
    SecureString,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParameterType::String => "String",
            ParameterType::StringList => "StringList",
            ParameterType::SecureString => "SecureString",
        };
        f.write_str(s)
    }
}

/// A parameter as returned by the remote store.
///
/// The cache treats this as an opaque value: it is stored and handed back
/// exactly as received. Field names follow the SSM wire format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    /// Parameter name (path-style names such as `/app/db/password` are allowed)
    pub name: String,
    /// The value, decrypted when the store was asked to decrypt
    pub value: String,
    /// Value kind
    #[serde(rename = "Type")]
    pub parameter_type: ParameterType,
    /// Monotonic version assigned by the store
    #[serde(default)]
    pub version: i64,
    /// Last time the value was changed
    #[serde(
        default,
        serialize_with = "serialize_epoch_opt",
        deserialize_with = "deserialize_epoch_opt"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,
    /// Amazon Resource Name
    #[serde(rename = "ARN", default)]
    pub arn: Option<String>,
    /// Data type hint (`text`, `aws:ec2:image`, ...)
    #[serde(default)]
    pub data_type: Option<String>,
}

impl Parameter {
    /// Creates a plain `String` parameter with no metadata.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            parameter_type: ParameterType::String,
            version: 1,
            last_modified_date: None,
            arn: None,
            data_type: Some("text".into()),
        }
    }

    /// Sets the value kind.
    pub fn with_type(mut self, parameter_type: ParameterType) -> Self {
        self.parameter_type = parameter_type;
        self
    }

    /// Splits a `StringList` value into its items.
    ///
    /// Other kinds yield the whole value as a single item.
    pub fn values(&self) -> Vec<&str> {
        match self.parameter_type {
            ParameterType::StringList => self.value.split(',').collect(),
            _ => vec![self.value.as_str()],
        }
    }
}

/// SSM encodes timestamps as fractional epoch seconds.
fn serialize_epoch_opt<S>(value: &Option<DateTime<Utc>>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(t) => serializer
            .serialize_some(&(t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9)),
        None => serializer.serialize_none(),
    }
}

fn deserialize_epoch_opt<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<f64>::deserialize(deserializer)?;
    Ok(secs.and_then(|s| {
        let whole = s.trunc() as i64;
        let nanos = ((s - s.trunc()) * 1e9).round() as u32;
        Utc.timestamp_opt(whole, nanos.min(999_999_999)).single()
    }))
}
