pub(crate) const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";
pub(crate) const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
pub(crate) const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
pub(crate) const HEADER_CSP: &str = "content-security-policy";
pub(crate) const HEADER_CSP_REPORT_ONLY: &str = "content-security-policy-report-only";
pub(crate) const HEADER_REFERRER_POLICY: &str = "referrer-policy";
pub(crate) const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";
pub(crate) const HEADER_COEP: &str = "cross-origin-embedder-policy";
pub(crate) const HEADER_COOP: &str = "cross-origin-opener-policy";
pub(crate) const HEADER_CORP: &str = "cross-origin-resource-policy";
pub(crate) const HEADER_ORIGIN_AGENT_CLUSTER: &str = "origin-agent-cluster";
pub(crate) const HEADER_X_DNS_PREFETCH_CONTROL: &str = "x-dns-prefetch-control";
pub(crate) const HEADER_X_DOWNLOAD_OPTIONS: &str = "x-download-options";
pub(crate) const HEADER_X_PERMITTED_CROSS_DOMAIN_POLICIES: &str =
    "x-permitted-cross-domain-policies";
pub(crate) const HEADER_HSTS: &str = "strict-transport-security";

pub const DEFAULT_XSS_PROTECTION: &str = "0";
pub const DEFAULT_CONTENT_TYPE_NOSNIFF: &str = "nosniff";
pub const DEFAULT_X_FRAME_OPTIONS: &str = "SAMEORIGIN";
pub const DEFAULT_REFERRER_POLICY: &str = "no-referrer";
pub const DEFAULT_CROSS_ORIGIN_EMBEDDER_POLICY: &str = "require-corp";
pub const DEFAULT_CROSS_ORIGIN_OPENER_POLICY: &str = "same-origin";
pub const DEFAULT_CROSS_ORIGIN_RESOURCE_POLICY: &str = "same-origin";
pub const DEFAULT_ORIGIN_AGENT_CLUSTER: &str = "?1";
pub const DEFAULT_X_DNS_PREFETCH_CONTROL: &str = "off";
pub const DEFAULT_X_DOWNLOAD_OPTIONS: &str = "noopen";
pub const DEFAULT_X_PERMITTED_CROSS_DOMAIN: &str = "none";

pub(crate) const HSTS_MAX_AGE_PREFIX: &str = "max-age=";
pub(crate) const HSTS_INCLUDE_SUBDOMAINS: &str = "; includeSubDomains";
pub(crate) const HSTS_PRELOAD: &str = "; preload";

pub(crate) const HTTPS_SCHEME: &str = "https";
pub(crate) const HEADER_X_FORWARDED_PROTOCOL: &str = "x-forwarded-protocol";
pub(crate) const HEADER_X_FORWARDED_SSL: &str = "x-forwarded-ssl";
pub(crate) const HEADER_X_URL_SCHEME: &str = "x-url-scheme";

/// Number of headers a single exchange can receive.
pub(crate) const MAX_POLICY_HEADERS: usize = 14;
