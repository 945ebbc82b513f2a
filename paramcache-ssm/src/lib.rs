//! # paramcache SSM client
//!
//! Thin wrapper over `aws-sdk-ssm` exposing a single `GetParameter` call as a
//! [`ParameterStore`](paramcache_core::ParameterStore). Region and
//! credentials come from the AWS default provider chain (environment,
//! shared profile, SSO, web identity, ECS and EC2 metadata) unless
//! overridden in [`SsmConfig`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use paramcache_ssm::{SsmClient, SsmConfig};
//!
//! let client = SsmClient::load(SsmConfig::from_env()).await;
//! let param = client.get_parameter("/app/db/password", true).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod config;

pub use client::SsmClient;
pub use config::SsmConfig;
