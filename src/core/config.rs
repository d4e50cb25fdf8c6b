use crate::constants::{
    DEFAULT_CONTENT_TYPE_NOSNIFF, DEFAULT_CROSS_ORIGIN_EMBEDDER_POLICY,
    DEFAULT_CROSS_ORIGIN_OPENER_POLICY, DEFAULT_CROSS_ORIGIN_RESOURCE_POLICY,
    DEFAULT_ORIGIN_AGENT_CLUSTER, DEFAULT_REFERRER_POLICY, DEFAULT_XSS_PROTECTION,
    DEFAULT_X_DNS_PREFETCH_CONTROL, DEFAULT_X_DOWNLOAD_OPTIONS, DEFAULT_X_FRAME_OPTIONS,
    DEFAULT_X_PERMITTED_CROSS_DOMAIN,
};
use crate::error::HelmetError;
use actix_web::dev::ServiceRequest;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Predicate deciding whether an exchange bypasses the middleware.
pub type RequestFilter = Arc<dyn Fn(&ServiceRequest) -> bool + Send + Sync + 'static>;

/// Security header configuration.
///
/// A `Default` value holds zero values only. Empty strings are replaced with the
/// documented defaults by [`HelmetConfig::with_defaults`], which every construction
/// path of the middleware goes through.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmetConfig {
    /// Skips the middleware when it returns `true`. Default: none.
    #[serde(skip)]
    pub filter: Option<RequestFilter>,
    /// X-XSS-Protection. Default: `"0"`.
    pub xss_protection: String,
    /// X-Content-Type-Options. Default: `"nosniff"`.
    pub content_type_nosniff: String,
    /// X-Frame-Options. Default: `"SAMEORIGIN"`.
    /// Possible values: `"SAMEORIGIN"`, `"DENY"`, `"ALLOW-FROM uri"`.
    pub x_frame_options: String,
    /// HSTS max-age in seconds. Default: `0`, which never emits the header.
    pub hsts_max_age: u64,
    /// Drops `includeSubDomains` from HSTS. Default: `false`.
    pub hsts_exclude_subdomains: bool,
    /// Content-Security-Policy. Default: `""`.
    pub content_security_policy: String,
    /// Sends the CSP as Content-Security-Policy-Report-Only. Default: `false`.
    pub csp_report_only: bool,
    /// Appends `preload` to HSTS. Default: `false`.
    pub hsts_preload_enabled: bool,
    /// Referrer-Policy. Default: `"no-referrer"`.
    pub referrer_policy: String,
    /// Permissions-Policy. Default: `""`.
    pub permission_policy: String,
    /// Cross-Origin-Embedder-Policy. Default: `"require-corp"`.
    pub cross_origin_embedder_policy: String,
    /// Cross-Origin-Opener-Policy. Default: `"same-origin"`.
    pub cross_origin_opener_policy: String,
    /// Cross-Origin-Resource-Policy. Default: `"same-origin"`.
    pub cross_origin_resource_policy: String,
    /// Origin-Agent-Cluster. Default: `"?1"`.
    pub origin_agent_cluster: String,
    /// X-DNS-Prefetch-Control. Default: `"off"`.
    pub x_dns_prefetch_control: String,
    /// X-Download-Options. Default: `"noopen"`.
    pub x_download_options: String,
    /// X-Permitted-Cross-Domain-Policies. Default: `"none"`.
    pub x_permitted_cross_domain: String,
}

#[inline]
fn or_default(value: &mut String, default: &'static str) {
    if value.is_empty() {
        default.clone_into(value);
    }
}

impl HelmetConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every unset field that has a documented default.
    pub fn with_defaults(mut self) -> Self {
        or_default(&mut self.xss_protection, DEFAULT_XSS_PROTECTION);
        or_default(&mut self.content_type_nosniff, DEFAULT_CONTENT_TYPE_NOSNIFF);
        or_default(&mut self.x_frame_options, DEFAULT_X_FRAME_OPTIONS);
        or_default(&mut self.referrer_policy, DEFAULT_REFERRER_POLICY);
        or_default(
            &mut self.cross_origin_embedder_policy,
            DEFAULT_CROSS_ORIGIN_EMBEDDER_POLICY,
        );
        or_default(
            &mut self.cross_origin_opener_policy,
            DEFAULT_CROSS_ORIGIN_OPENER_POLICY,
        );
        or_default(
            &mut self.cross_origin_resource_policy,
            DEFAULT_CROSS_ORIGIN_RESOURCE_POLICY,
        );
        or_default(&mut self.origin_agent_cluster, DEFAULT_ORIGIN_AGENT_CLUSTER);
        or_default(&mut self.x_dns_prefetch_control, DEFAULT_X_DNS_PREFETCH_CONTROL);
        or_default(&mut self.x_download_options, DEFAULT_X_DOWNLOAD_OPTIONS);
        or_default(
            &mut self.x_permitted_cross_domain,
            DEFAULT_X_PERMITTED_CROSS_DOMAIN,
        );
        self
    }

    /// Parses a JSON override document and applies the defaults to it.
    pub fn from_json(json: &str) -> Result<Self, HelmetError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(HelmetError::ConfigError(format!(
                "expected a JSON object, found {value}"
            )));
        }
        let config: Self = serde_json::from_value(value)?;
        Ok(config.with_defaults())
    }

    /// Whether the configured filter asks to skip this request.
    #[inline]
    pub fn is_filtered(&self, req: &ServiceRequest) -> bool {
        self.filter.as_ref().is_some_and(|filter| filter(req))
    }
}

impl fmt::Debug for HelmetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelmetConfig")
            .field("filter", &self.filter.as_ref().map(|_| "Fn(&ServiceRequest) -> bool"))
            .field("xss_protection", &self.xss_protection)
            .field("content_type_nosniff", &self.content_type_nosniff)
            .field("x_frame_options", &self.x_frame_options)
            .field("hsts_max_age", &self.hsts_max_age)
            .field("hsts_exclude_subdomains", &self.hsts_exclude_subdomains)
            .field("content_security_policy", &self.content_security_policy)
            .field("csp_report_only", &self.csp_report_only)
            .field("hsts_preload_enabled", &self.hsts_preload_enabled)
            .field("referrer_policy", &self.referrer_policy)
            .field("permission_policy", &self.permission_policy)
            .field(
                "cross_origin_embedder_policy",
                &self.cross_origin_embedder_policy,
            )
            .field("cross_origin_opener_policy", &self.cross_origin_opener_policy)
            .field(
                "cross_origin_resource_policy",
                &self.cross_origin_resource_policy,
            )
            .field("origin_agent_cluster", &self.origin_agent_cluster)
            .field("x_dns_prefetch_control", &self.x_dns_prefetch_control)
            .field("x_download_options", &self.x_download_options)
            .field("x_permitted_cross_domain", &self.x_permitted_cross_domain)
            .finish()
    }
}

#[derive(Default)]
pub struct HelmetConfigBuilder {
    config: HelmetConfig,
}

impl HelmetConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&ServiceRequest) -> bool + Send + Sync + 'static,
    {
        self.config.filter = Some(Arc::new(filter));
        self
    }

    #[inline]
    pub fn xss_protection(mut self, value: impl Into<String>) -> Self {
        self.config.xss_protection = value.into();
        self
    }

    #[inline]
    pub fn content_type_nosniff(mut self, value: impl Into<String>) -> Self {
        self.config.content_type_nosniff = value.into();
        self
    }

    #[inline]
    pub fn x_frame_options(mut self, value: impl Into<String>) -> Self {
        self.config.x_frame_options = value.into();
        self
    }

    #[inline]
    pub fn hsts_max_age(mut self, seconds: u64) -> Self {
        self.config.hsts_max_age = seconds;
        self
    }

    #[inline]
    pub fn hsts_exclude_subdomains(mut self, exclude: bool) -> Self {
        self.config.hsts_exclude_subdomains = exclude;
        self
    }

    #[inline]
    pub fn hsts_preload_enabled(mut self, enabled: bool) -> Self {
        self.config.hsts_preload_enabled = enabled;
        self
    }

    #[inline]
    pub fn content_security_policy(mut self, value: impl Into<String>) -> Self {
        self.config.content_security_policy = value.into();
        self
    }

    #[inline]
    pub fn csp_report_only(mut self, report_only: bool) -> Self {
        self.config.csp_report_only = report_only;
        self
    }

    #[inline]
    pub fn referrer_policy(mut self, value: impl Into<String>) -> Self {
        self.config.referrer_policy = value.into();
        self
    }

    #[inline]
    pub fn permission_policy(mut self, value: impl Into<String>) -> Self {
        self.config.permission_policy = value.into();
        self
    }

    #[inline]
    pub fn cross_origin_embedder_policy(mut self, value: impl Into<String>) -> Self {
        self.config.cross_origin_embedder_policy = value.into();
        self
    }

    #[inline]
    pub fn cross_origin_opener_policy(mut self, value: impl Into<String>) -> Self {
        self.config.cross_origin_opener_policy = value.into();
        self
    }

    #[inline]
    pub fn cross_origin_resource_policy(mut self, value: impl Into<String>) -> Self {
        self.config.cross_origin_resource_policy = value.into();
        self
    }

    #[inline]
    pub fn origin_agent_cluster(mut self, value: impl Into<String>) -> Self {
        self.config.origin_agent_cluster = value.into();
        self
    }

    #[inline]
    pub fn x_dns_prefetch_control(mut self, value: impl Into<String>) -> Self {
        self.config.x_dns_prefetch_control = value.into();
        self
    }

    #[inline]
    pub fn x_download_options(mut self, value: impl Into<String>) -> Self {
        self.config.x_download_options = value.into();
        self
    }

    #[inline]
    pub fn x_permitted_cross_domain(mut self, value: impl Into<String>) -> Self {
        self.config.x_permitted_cross_domain = value.into();
        self
    }

    pub fn build(self) -> HelmetConfig {
        self.config.with_defaults()
    }
}
