/// Prometheus metrics
///
/// Counters for the request paths worth watching, plus the text exposition
/// handler mounted at /metrics.
use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, TextEncoder};

/// Render all registered metrics in the Prometheus text format.
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return HttpResponse::InternalServerError().finish();
    }

    match String::from_utf8(buffer) {
        Ok(output) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(output),
        Err(e) => {
            tracing::error!("Metrics buffer is not UTF-8: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn counter(name: &str, help: &str) -> IntCounter {
    IntCounter::new(name.to_string(), help.to_string())
        .and_then(|c| {
            prometheus::default_registry().register(Box::new(c.clone()))?;
            Ok(c)
        })
        .unwrap_or_else(|e| {
            tracing::error!("Failed to register {} counter: {}", name, e);
            IntCounter::new(format!("{name}_unregistered"), help.to_string())
                .unwrap_or_else(|_| panic!("fallback counter {name}"))
        })
}

static REGISTRATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "postline_registrations_total",
        "Total successful user registrations",
    )
});

static SIGN_INS_TOTAL: Lazy<IntCounter> =
    Lazy::new(|| counter("postline_sign_ins_total", "Total successful sign-ins"));

static SIGN_IN_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "postline_sign_in_failures_total",
        "Sign-in attempts rejected for bad credentials",
    )
});

static POSTS_CREATED_TOTAL: Lazy<IntCounter> =
    Lazy::new(|| counter("postline_posts_created_total", "Total posts created"));

static POSTS_DELETED_TOTAL: Lazy<IntCounter> =
    Lazy::new(|| counter("postline_posts_deleted_total", "Total posts deleted"));

#[inline]
pub fn inc_registrations() {
    REGISTRATIONS_TOTAL.inc();
}

#[inline]
pub fn inc_sign_ins() {
    SIGN_INS_TOTAL.inc();
}

#[inline]
pub fn inc_sign_in_failures() {
    SIGN_IN_FAILURES_TOTAL.inc();
}

#[inline]
pub fn inc_posts_created() {
    POSTS_CREATED_TOTAL.inc();
}

#[inline]
pub fn inc_posts_deleted() {
    POSTS_DELETED_TOTAL.inc();
}
