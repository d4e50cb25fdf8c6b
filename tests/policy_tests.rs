use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web_helmet::{HeaderPolicy, HelmetConfig, HelmetConfigBuilder, HstsPolicy};
use proptest::prelude::*;

fn hsts_config(max_age: u64, exclude_subdomains: bool, preload: bool) -> HelmetConfig {
    HelmetConfigBuilder::new()
        .hsts_max_age(max_age)
        .hsts_exclude_subdomains(exclude_subdomains)
        .hsts_preload_enabled(preload)
        .build()
}

fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(31536000, false, true, true => Some("max-age=31536000; includeSubDomains; preload".to_owned()) ; "subdomains and preload")]
    #[test_case(31536000, true, false, true => Some("max-age=31536000".to_owned()) ; "max age only")]
    #[test_case(31536000, false, false, true => Some("max-age=31536000; includeSubDomains".to_owned()) ; "subdomains by default")]
    #[test_case(86400, true, true, true => Some("max-age=86400; preload".to_owned()) ; "preload without subdomains")]
    #[test_case(0, false, true, true => None ; "zero max age over https")]
    #[test_case(0, false, false, false => None ; "zero max age over http")]
    #[test_case(31536000, false, true, false => None ; "plain transport")]
    fn test_hsts_composition(
        max_age: u64,
        exclude_subdomains: bool,
        preload: bool,
        secure: bool,
    ) -> Option<String> {
        let policy = HeaderPolicy::from_config(&hsts_config(max_age, exclude_subdomains, preload));
        let mut headers = HeaderMap::new();
        policy.apply(&mut headers, secure);
        get(&headers, "strict-transport-security").map(str::to_owned)
    }

    #[test]
    fn test_hsts_policy_from_config() {
        let hsts = HstsPolicy::from_config(&hsts_config(120, true, true));

        assert_eq!(hsts.max_age(), 120);
        assert_eq!(hsts, HstsPolicy::new(120).include_subdomains(false).preload(true));
    }

    #[test]
    fn test_header_pairs_follow_table_order() {
        let config = HelmetConfigBuilder::new()
            .content_security_policy("default-src 'none'")
            .permission_policy("microphone=()")
            .hsts_max_age(60)
            .build();
        let policy = HeaderPolicy::from_config(&config);

        let names: Vec<&str> = policy
            .header_pairs(true)
            .map(|(name, _)| name.as_str())
            .collect();

        assert_eq!(
            names,
            [
                "x-xss-protection",
                "x-content-type-options",
                "x-frame-options",
                "content-security-policy",
                "referrer-policy",
                "permissions-policy",
                "cross-origin-embedder-policy",
                "cross-origin-opener-policy",
                "cross-origin-resource-policy",
                "origin-agent-cluster",
                "x-dns-prefetch-control",
                "x-download-options",
                "x-permitted-cross-domain-policies",
                "strict-transport-security",
            ]
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let config = HelmetConfigBuilder::new()
            .content_security_policy("default-src 'self'")
            .hsts_max_age(31536000)
            .build();
        let policy = HeaderPolicy::from_config(&config);

        let mut once = HeaderMap::new();
        let added = policy.apply(&mut once, true);

        let mut twice = HeaderMap::new();
        policy.apply(&mut twice, true);
        let added_again = policy.apply(&mut twice, true);

        assert_eq!(added, 13);
        assert_eq!(added_again, 0);
        assert_eq!(once.len(), twice.len());
        for (name, value) in once.iter() {
            assert_eq!(twice.get_all(name).count(), 1);
            assert_eq!(twice.get(name), Some(value));
        }
    }

    #[test]
    fn test_apply_keeps_existing_values() {
        let policy = HeaderPolicy::from_config(&HelmetConfig::default().with_defaults());
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("origin"),
        );

        let added = policy.apply(&mut headers, false);

        assert_eq!(added, 10);
        assert_eq!(get(&headers, "referrer-policy"), Some("origin"));
    }

    #[test]
    fn test_zero_config_policy_is_not_empty() {
        let policy = HeaderPolicy::from_config(&HelmetConfig::default().with_defaults());

        assert!(!policy.is_empty());
        assert!(policy.hsts().is_none());
        assert_eq!(policy.header_count(true), policy.header_count(false));
    }

    #[test]
    fn test_unresolved_config_only_emits_supplied_values() {
        let config = HelmetConfig {
            x_frame_options: "DENY".to_owned(),
            ..Default::default()
        };
        let policy = HeaderPolicy::from_config(&config);

        let pairs: Vec<_> = policy.header_pairs(true).collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.as_str(), "x-frame-options");
        assert_eq!(pairs[0].1, "DENY");
    }

    proptest! {
        #[test]
        fn prop_csp_uses_exactly_one_header(
            csp in "[a-z][a-z0-9 ':;*.-]{0,60}",
            report_only in any::<bool>(),
            secure in any::<bool>(),
        ) {
            let config = HelmetConfigBuilder::new()
                .content_security_policy(csp.clone())
                .csp_report_only(report_only)
                .build();
            let policy = HeaderPolicy::from_config(&config);
            let mut headers = HeaderMap::new();
            policy.apply(&mut headers, secure);

            let enforced = get(&headers, "content-security-policy");
            let reported = get(&headers, "content-security-policy-report-only");
            if report_only {
                prop_assert_eq!(reported, Some(csp.as_str()));
                prop_assert_eq!(enforced, None);
            } else {
                prop_assert_eq!(enforced, Some(csp.as_str()));
                prop_assert_eq!(reported, None);
            }
        }

        #[test]
        fn prop_hsts_requires_secure_transport(max_age in 1u64..=u64::from(u32::MAX), preload in any::<bool>()) {
            let policy = HeaderPolicy::from_config(&hsts_config(max_age, false, preload));

            let mut plain = HeaderMap::new();
            policy.apply(&mut plain, false);
            prop_assert!(!plain.contains_key("strict-transport-security"));

            let mut secure = HeaderMap::new();
            policy.apply(&mut secure, true);
            let value = get(&secure, "strict-transport-security").unwrap_or_default();
            let expected_prefix = format!("max-age={max_age}; includeSubDomains");
            prop_assert!(value.starts_with(&expected_prefix));
            prop_assert_eq!(value.ends_with("; preload"), preload);
        }
    }
}
