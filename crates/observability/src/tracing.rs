//! Span helpers shared across the irodori crates

/// Span for one HTTP request. `http.status_code` is recorded once the response
/// is known.
///
/// ```rust
/// use irodori_observability::http_request_span;
///
/// let span = http_request_span!("GET", "/cn/", "2f1c7c0e");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! http_request_span {
    ($method:expr, $route:expr, $request_id:expr) => {
        tracing::info_span!(
            "http.request",
            http.method = %$method,
            http.route = %$route,
            http.status_code = tracing::field::Empty,
            request.id = %$request_id,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Span for one upstream palette fetch.
#[macro_export]
macro_rules! upstream_span {
    ($locale:expr, $url:expr) => {
        tracing::info_span!(
            "upstream.fetch",
            palette.locale = %$locale,
            upstream.url = %$url,
            fetch.duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Span for a palette bucket read or write.
#[macro_export]
macro_rules! bucket_span {
    ($backend:expr, $operation:expr, $key:expr) => {
        tracing::debug_span!(
            "bucket.operation",
            bucket.backend = $backend,
            bucket.operation = $operation,
            bucket.key = %$key,
            bucket.hit = tracing::field::Empty,
        )
    };
}

/// Marks the current span as failed and logs the error.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", tracing::field::display(error));
    tracing::error!(error = %error, "operation failed");
}

/// Records `duration` in milliseconds under `key` on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
