//! Defaults and environment variable names.

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default lifetime of a cached parameter in seconds.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;

/// Caching is on unless explicitly disabled.
pub const DEFAULT_CACHE_ENABLED: bool = true;

/// Diagnostic logging is off unless explicitly enabled.
pub const DEFAULT_VERBOSE: bool = false;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Turns read-through caching on or off.
pub const ENV_CACHE_ENABLED: &str = "SSM_CACHE_ENABLED";

/// Default TTL in seconds (must be a non-negative integer).
pub const ENV_CACHE_TIMEOUT: &str = "SSM_CACHE_TIMEOUT";

/// Enables diagnostic logging of cache hits and misses.
pub const ENV_VERBOSE: &str = "SSM_VERBOSE";

// ═══════════════════════════════════════════════════════════════════════════════
// AWS ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Region override for the SSM client.
pub const ENV_AWS_REGION: &str = "AWS_REGION";

/// Fallback region variable used by the AWS CLI.
pub const ENV_AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Service-specific endpoint override.
pub const ENV_AWS_ENDPOINT_URL_SSM: &str = "AWS_ENDPOINT_URL_SSM";

/// Global endpoint override.
pub const ENV_AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

// ═══════════════════════════════════════════════════════════════════════════════
// SSM CLIENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Error code SSM returns for unknown parameter names.
pub const PARAMETER_NOT_FOUND_CODE: &str = "ParameterNotFound";

/// Default request timeout for the SSM client.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
