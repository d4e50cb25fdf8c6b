use crate::constants::{
    HEADER_X_FORWARDED_PROTOCOL, HEADER_X_FORWARDED_SSL, HEADER_X_URL_SCHEME, HTTPS_SCHEME,
};
use crate::core::config::HelmetConfig;
use crate::core::policy::HeaderPolicy;
use crate::error::HelmetError;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::{rc::Rc, sync::Arc};

/// Middleware that adds security headers to every response.
#[derive(Clone, Debug)]
pub struct Helmet {
    config: Arc<HelmetConfig>,
    policy: Arc<HeaderPolicy>,
}

impl Helmet {
    /// Applies the documented defaults to `config` and resolves its headers.
    pub fn new(config: HelmetConfig) -> Self {
        let config = config.with_defaults();
        let policy = HeaderPolicy::from_config(&config);
        Self::from_parts(config, policy)
    }

    /// Like [`Helmet::new`], but rejects values that cannot be sent as header values.
    pub fn try_new(config: HelmetConfig) -> Result<Self, HelmetError> {
        let config = config.with_defaults();
        let policy = HeaderPolicy::try_from_config(&config)?;
        Ok(Self::from_parts(config, policy))
    }

    fn from_parts(config: HelmetConfig, policy: HeaderPolicy) -> Self {
        log::debug!(
            "helmet resolved {} headers (hsts: {})",
            policy.header_count(false),
            policy.hsts().is_some()
        );
        Self {
            config: Arc::new(config),
            policy: Arc::new(policy),
        }
    }

    #[inline]
    pub fn config(&self) -> Arc<HelmetConfig> {
        self.config.clone()
    }

    #[inline]
    pub fn policy(&self) -> Arc<HeaderPolicy> {
        self.policy.clone()
    }
}

impl Default for Helmet {
    fn default() -> Self {
        Self::new(HelmetConfig::default())
    }
}

impl<S, B> Transform<S, ServiceRequest> for Helmet
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = HelmetService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HelmetService {
            service: Rc::new(service),
            config: self.config.clone(),
            policy: self.policy.clone(),
        }))
    }
}

pub struct HelmetService<S> {
    service: Rc<S>,
    config: Arc<HelmetConfig>,
    policy: Arc<HeaderPolicy>,
}

impl<S, B> Service<ServiceRequest> for HelmetService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if self.config.is_filtered(&req) {
            log::debug!("helmet skipped for {}", req.path());
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let secure = is_secure(&req);
        let http_req = req.request().clone();
        let policy = self.policy.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            // inner errors are rendered here so the error response carries the headers too
            let mut res = match fut.await {
                Ok(res) => res.map_into_left_body(),
                Err(err) => {
                    log::debug!("rendering inner error for {}: {err}", http_req.path());
                    ServiceResponse::from_err(err, http_req).map_into_right_body()
                }
            };
            policy.apply(res.headers_mut(), secure);
            Ok(res)
        })
    }
}

/// Whether the exchange arrived over HTTPS, directly or as reported by a proxy.
///
/// Besides what actix reads (`Forwarded`, `X-Forwarded-Proto`, the URI scheme and the
/// listener), `X-Forwarded-Protocol`, `X-Forwarded-Ssl: on` and `X-Url-Scheme` are honoured.
pub fn is_secure(req: &ServiceRequest) -> bool {
    if req
        .connection_info()
        .scheme()
        .eq_ignore_ascii_case(HTTPS_SCHEME)
    {
        return true;
    }

    if let Some(proto) = header_str(req, HEADER_X_FORWARDED_PROTOCOL) {
        let first = proto.split(',').next().unwrap_or_default();
        return first.trim().eq_ignore_ascii_case(HTTPS_SCHEME);
    }
    if let Some(ssl) = header_str(req, HEADER_X_FORWARDED_SSL) {
        return ssl.trim().eq_ignore_ascii_case("on");
    }
    header_str(req, HEADER_X_URL_SCHEME)
        .is_some_and(|scheme| scheme.trim().eq_ignore_ascii_case(HTTPS_SCHEME))
}

#[inline]
fn header_str<'a>(req: &'a ServiceRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

/// Security headers with every default.
#[inline]
pub fn helmet() -> Helmet {
    Helmet::default()
}

/// Security headers from caller overrides merged over the defaults.
#[inline]
pub fn helmet_with(config: HelmetConfig) -> Helmet {
    Helmet::new(config)
}
