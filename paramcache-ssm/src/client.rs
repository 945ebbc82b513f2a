//! SSM client for single-parameter reads.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ssm::config::http::HttpResponse;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::types::{Parameter as SdkParameter, ParameterType as SdkParameterType};
use chrono::{TimeZone, Utc};
use tracing::{debug, instrument};

use paramcache_core::error::{ParamCacheError, Result};
use paramcache_core::traits::ParameterStore;
use paramcache_core::types::{Parameter, ParameterType};

use crate::config::SsmConfig;

/// Client for the SSM `GetParameter` action.
///
/// Wraps a pooled SDK client, so one instance should be reused for the
/// lifetime of the process.
#[derive(Clone, Debug)]
pub struct SsmClient {
    client: aws_sdk_ssm::Client,
}

impl SsmClient {
    /// Loads a client through the AWS default provider chain.
    ///
    /// Fields set in `config` take precedence; the rest (region included) is
    /// inherited from the environment, shared profile, or instance metadata.
    /// Retries are disabled: a failed fetch is reported to the caller as is.
    pub async fn load(config: SsmConfig) -> Self {
        let timeouts = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(config.timeout_seconds))
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .timeout_config(timeouts);
        if let Some(region) = config.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = config.profile_name {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let client = Self::from_sdk_config(&loader.load().await);
        debug!(region = ?client.region(), "Created SSM client");
        client
    }

    /// Creates a client from an already loaded shared configuration.
    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self::from_client(aws_sdk_ssm::Client::new(sdk_config))
    }

    /// Creates a client from a service-specific configuration.
    pub fn from_conf(conf: aws_sdk_ssm::Config) -> Self {
        Self::from_client(aws_sdk_ssm::Client::from_conf(conf))
    }

    /// Wraps an existing SDK client.
    pub fn from_client(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }

    /// Region the client resolved, if any.
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }

    /// Fetches one parameter.
    #[instrument(skip(self), fields(region = self.region().unwrap_or("unset")))]
    pub async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<Parameter> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| error_from_sdk(name, e))?;

        let parameter = output.parameter.map(to_parameter).ok_or_else(|| {
            ParamCacheError::Http(format!("GetParameter response for '{}' had no parameter", name))
        })?;

        debug!(name, version = parameter.version, "Fetched parameter");
        Ok(parameter)
    }
}

#[async_trait]
impl ParameterStore for SsmClient {
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<Parameter> {
        SsmClient::get_parameter(self, name, with_decryption).await
    }
}

fn to_parameter(p: SdkParameter) -> Parameter {
    let parameter_type = match p.r#type {
        Some(SdkParameterType::StringList) => ParameterType::StringList,
        Some(SdkParameterType::SecureString) => ParameterType::SecureString,
        _ => ParameterType::String,
    };

    Parameter {
        name: p.name.unwrap_or_default(),
        value: p.value.unwrap_or_default(),
        parameter_type,
        version: p.version,
        last_modified_date: p
            .last_modified_date
            .and_then(|t| Utc.timestamp_opt(t.secs(), t.subsec_nanos()).single()),
        arn: p.arn,
        data_type: p.data_type,
    }
}

/// Maps an SDK failure onto the crate error.
///
/// Service errors keep their AWS code and HTTP status; a request that could
/// not be built (no region, bad endpoint) is a configuration error; anything
/// else failed in transport.
fn error_from_sdk(name: &str, err: SdkError<GetParameterError, HttpResponse>) -> ParamCacheError {
    match err {
        SdkError::ServiceError(context) => {
            let status = context.raw().status().as_u16();
            let service_err = context.into_err();
            if service_err.is_parameter_not_found() {
                return ParamCacheError::ParameterNotFound(name.to_string());
            }
            ParamCacheError::Remote {
                code: service_err
                    .code()
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("HTTP{}", status)),
                message: service_err.message().unwrap_or_default().to_string(),
                status,
            }
        }
        e @ SdkError::ConstructionFailure(_) => {
            ParamCacheError::Config(DisplayErrorContext(&e).to_string())
        }
        e => ParamCacheError::Http(DisplayErrorContext(&e).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::config::Credentials;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, header, header_exists, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(endpoint: &str) -> SsmClient {
        let conf = aws_sdk_ssm::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-2"))
            .endpoint_url(endpoint)
            .credentials_provider(Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"))
            .retry_config(RetryConfig::disabled())
            .build();
        SsmClient::from_conf(conf)
    }

    fn parameter_body(name: &str, value: &str, kind: &str) -> serde_json::Value {
        json!({
            "Parameter": {
                "Name": name,
                "Type": kind,
                "Value": value,
                "Version": 3,
                "LastModifiedDate": 1_700_000_000.25,
                "ARN": format!("arn:aws:ssm:eu-west-2:123456789012:parameter/{}", name),
                "DataType": "text"
            }
        })
    }

    #[tokio::test]
    async fn test_load_keeps_region_override() {
        let client = SsmClient::load(SsmConfig::new("eu-west-2")).await;
        assert_eq!(client.region(), Some("eu-west-2"));
    }

    #[tokio::test]
    async fn test_get_parameter_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-amz-target", "AmazonSSM.GetParameter"))
            .and(header_exists("authorization"))
            .and(body_json(json!({
                "Name": "paramcache_test_string",
                "WithDecryption": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(parameter_body(
                "paramcache_test_string",
                "teststring",
                "String",
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let param = client.get_parameter("paramcache_test_string", true).await.unwrap();

        assert_eq!(param.value, "teststring");
        assert_eq!(param.parameter_type, ParameterType::String);
        assert_eq!(param.version, 3);
        assert_eq!(param.data_type.as_deref(), Some("text"));
        assert_eq!(
            param.last_modified_date.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_250)
        );
    }

    #[tokio::test]
    async fn test_get_parameter_string_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(parameter_body(
                "paramcache_test_string_list",
                "teststring1,teststring2",
                "StringList",
            )))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let param = client
            .get_parameter("paramcache_test_string_list", true)
            .await
            .unwrap();

        assert_eq!(param.parameter_type, ParameterType::StringList);
        assert_eq!(param.values(), vec!["teststring1", "teststring2"]);
    }

    #[tokio::test]
    async fn test_secure_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(parameter_body("p", "s3cret", "SecureString")),
            )
            .mount(&server)
            .await;

        let param = assert_ok!(test_client(&server.uri()).get_parameter("p", true).await);
        assert_eq!(param.parameter_type, ParameterType::SecureString);
        assert_eq!(param.value, "s3cret");
    }

    #[tokio::test]
    async fn test_parameter_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "__type": "ParameterNotFound",
                "message": ""
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .get_parameter("paramcache_does_not_exist", true)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("ParameterNotFound"));
        assert!(err.to_string().contains("paramcache_does_not_exist"));
    }

    #[tokio::test]
    async fn test_not_found_from_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("x-amzn-ErrorType", "ParameterNotFound:http://internal/")
                    .set_body_json(json!({})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .get_parameter("missing", true)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_access_denied() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "__type": "com.amazonaws.ssm#AccessDeniedException",
                "Message": "User is not authorized"
            })))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .get_parameter("p", true)
            .await
            .unwrap_err();

        match err {
            ParamCacheError::Remote { code, message, status } => {
                assert_eq!(code, "AccessDeniedException");
                assert_eq!(message, "User is not authorized");
                assert_eq!(status, 400);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_recoverable_and_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "__type": "InternalServerError",
                "message": "boom"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = assert_err!(test_client(&server.uri()).get_parameter("p", true).await);
        assert!(err.is_recoverable());
        assert_eq!(err.remote_code(), Some("InternalServerError"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let client = test_client("http://127.0.0.1:1");
        let err = client.get_parameter("p", true).await.unwrap_err();
        assert!(matches!(err, ParamCacheError::Http(_)));
        assert!(err.is_recoverable());
    }
}
