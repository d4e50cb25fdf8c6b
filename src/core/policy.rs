use crate::constants::{
    HEADER_COEP, HEADER_COOP, HEADER_CORP, HEADER_CSP, HEADER_CSP_REPORT_ONLY, HEADER_HSTS,
    HEADER_ORIGIN_AGENT_CLUSTER, HEADER_PERMISSIONS_POLICY, HEADER_REFERRER_POLICY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_DNS_PREFETCH_CONTROL, HEADER_X_DOWNLOAD_OPTIONS,
    HEADER_X_FRAME_OPTIONS, HEADER_X_PERMITTED_CROSS_DOMAIN_POLICIES, HEADER_X_XSS_PROTECTION,
    MAX_POLICY_HEADERS,
};
use crate::core::config::HelmetConfig;
use crate::core::hsts::HstsPolicy;
use crate::error::HelmetError;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};

/// Response headers resolved from a [`HelmetConfig`].
///
/// Values are converted once; per exchange only the transport decides whether
/// Strict-Transport-Security is added.
#[derive(Debug, Clone, Default)]
pub struct HeaderPolicy {
    headers: Vec<(HeaderName, HeaderValue)>,
    hsts: Option<HeaderValue>,
}

impl HeaderPolicy {
    /// Resolves `config`, dropping values that are not valid header values.
    pub fn from_config(config: &HelmetConfig) -> Self {
        Self::resolve(config, |header, value| {
            log::warn!("omitting {header}: {value:?} is not a valid header value");
            Ok(())
        })
        .unwrap_or_default()
    }

    /// Resolves `config`, failing on the first value that is not a valid header value.
    pub fn try_from_config(config: &HelmetConfig) -> Result<Self, HelmetError> {
        Self::resolve(config, |header, value| {
            Err(HelmetError::InvalidHeaderValue {
                header,
                value: value.to_owned(),
            })
        })
    }

    fn resolve<F>(config: &HelmetConfig, mut on_invalid: F) -> Result<Self, HelmetError>
    where
        F: FnMut(&'static str, &str) -> Result<(), HelmetError>,
    {
        let csp_header = if config.csp_report_only {
            HEADER_CSP_REPORT_ONLY
        } else {
            HEADER_CSP
        };

        let candidates: [(&'static str, &str); MAX_POLICY_HEADERS - 1] = [
            (HEADER_X_XSS_PROTECTION, &config.xss_protection),
            (HEADER_X_CONTENT_TYPE_OPTIONS, &config.content_type_nosniff),
            (HEADER_X_FRAME_OPTIONS, &config.x_frame_options),
            (csp_header, &config.content_security_policy),
            (HEADER_REFERRER_POLICY, &config.referrer_policy),
            (HEADER_PERMISSIONS_POLICY, &config.permission_policy),
            (HEADER_COEP, &config.cross_origin_embedder_policy),
            (HEADER_COOP, &config.cross_origin_opener_policy),
            (HEADER_CORP, &config.cross_origin_resource_policy),
            (HEADER_ORIGIN_AGENT_CLUSTER, &config.origin_agent_cluster),
            (HEADER_X_DNS_PREFETCH_CONTROL, &config.x_dns_prefetch_control),
            (HEADER_X_DOWNLOAD_OPTIONS, &config.x_download_options),
            (
                HEADER_X_PERMITTED_CROSS_DOMAIN_POLICIES,
                &config.x_permitted_cross_domain,
            ),
        ];

        let mut headers = Vec::with_capacity(candidates.len());
        for (name, value) in candidates {
            if value.is_empty() {
                continue;
            }
            match HeaderValue::from_str(value) {
                Ok(value) => headers.push((HeaderName::from_static(name), value)),
                Err(_) => on_invalid(name, value)?,
            }
        }

        let hsts = HstsPolicy::from_config(config)
            .header_value()
            .and_then(|value| HeaderValue::try_from(value).ok());

        Ok(Self { headers, hsts })
    }

    /// Headers for one exchange, in a fixed order with HSTS last.
    pub fn header_pairs(&self, secure: bool) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        let hsts = if secure { self.hsts.as_ref() } else { None };
        self.headers
            .iter()
            .map(|(name, value)| (name, value))
            .chain(hsts.map(|value| (&HSTS_HEADER_NAME, value)))
    }

    /// Sets every header the response does not already carry and returns how many were added.
    pub fn apply(&self, headers: &mut HeaderMap, secure: bool) -> usize {
        let mut added = 0;
        for (name, value) in self.header_pairs(secure) {
            if headers.contains_key(name) {
                continue;
            }
            headers.insert(name.clone(), value.clone());
            added += 1;
        }
        if !secure && self.hsts.is_some() {
            log::trace!("plain transport, {HEADER_HSTS} not sent");
        }
        added
    }

    #[inline]
    pub fn hsts(&self) -> Option<&HeaderValue> {
        self.hsts.as_ref()
    }

    #[inline]
    pub fn header_count(&self, secure: bool) -> usize {
        self.headers.len() + usize::from(secure && self.hsts.is_some())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.hsts.is_none()
    }
}

static HSTS_HEADER_NAME: HeaderName = HeaderName::from_static(HEADER_HSTS);
