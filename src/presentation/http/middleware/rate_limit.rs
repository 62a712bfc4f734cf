// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// One request replenished every this many seconds, per client IP.
pub const REPLENISH_SECONDS: u64 = 6;
pub const BURST_SIZE: u32 = 5;

/// Per-IP limiter for the unauthenticated write endpoints (login, contact).
///
/// Returns `None` when the limiter cannot be configured; the caller decides
/// whether to serve without it.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<RateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_SECONDS);
            builder.burst_size(BURST_SIZE);
            builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .map(GovernorLayer::new)
        })
        .clone()
}
