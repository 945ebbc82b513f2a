//! SSM client configuration.
//!
//! Every field is an override. Whatever is left unset is resolved by the AWS
//! default provider chain when the client is loaded.

use serde::{Deserialize, Serialize};

use paramcache_core::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECONDS, ENV_AWS_DEFAULT_REGION, ENV_AWS_ENDPOINT_URL,
    ENV_AWS_ENDPOINT_URL_SSM, ENV_AWS_REGION,
};

/// SSM client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsmConfig {
    /// Region override; inherited from the provider chain when unset
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile_name: Option<String>,
    /// Endpoint override (LocalStack, VPC endpoints, tests)
    pub endpoint_url: Option<String>,
    /// Per-operation timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SsmConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile_name: None,
            endpoint_url: None,
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl SsmConfig {
    /// Creates a configuration pinned to `region`.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    /// Reads region and endpoint overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup` (a name → value function).
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: non_empty(ENV_AWS_REGION).or_else(|| non_empty(ENV_AWS_DEFAULT_REGION)),
            endpoint_url: non_empty(ENV_AWS_ENDPOINT_URL_SSM)
                .or_else(|| non_empty(ENV_AWS_ENDPOINT_URL)),
            ..Default::default()
        }
    }

    /// Pins the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Selects a named profile.
    pub fn with_profile(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }

    /// Overrides the endpoint.
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Sets the per-operation timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_region() {
        let config = SsmConfig::from_lookup(lookup_from(&[("AWS_REGION", "eu-west-2")]));
        assert_eq!(config.region.as_deref(), Some("eu-west-2"));
        assert_eq!(config.timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_region_fallback() {
        let config = SsmConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "us-east-1"),
        ]));
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn test_unset_region_is_inherited() {
        let config = SsmConfig::from_lookup(lookup_from(&[("AWS_PROFILE", "prod")]));
        assert!(config.region.is_none());
        assert!(config.profile_name.is_none());
        assert_eq!(config, SsmConfig::default());
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = SsmConfig::from_lookup(lookup_from(&[
            ("AWS_ENDPOINT_URL", "http://global:4566"),
            ("AWS_ENDPOINT_URL_SSM", "http://ssm-only:4566"),
        ]));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://ssm-only:4566"));
    }

    #[test]
    fn test_builders() {
        let config = SsmConfig::default()
            .with_region("ap-southeast-2")
            .with_profile("ops")
            .with_endpoint("http://localhost:4566")
            .with_timeout(5);

        assert_eq!(config.region.as_deref(), Some("ap-southeast-2"));
        assert_eq!(config.profile_name.as_deref(), Some("ops"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.timeout_seconds, 5);
    }
}
