//! Handlers for liveness probes.

/// Liveness and readiness probe.
///
/// # Endpoint
///
/// `GET /healthcheck`
///
/// Always answers `200 OK` with body `ok`; the upstream API is not contacted.
pub async fn healthcheck_handler() -> &'static str {
    "ok"
}

/// `GET /ping` answers `pong`.
pub async fn ping_handler() -> &'static str {
    "pong"
}
