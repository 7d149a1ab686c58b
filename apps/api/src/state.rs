use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The highlighter itself is stateless; the run-boundary mode
/// rides inside `Config`, resolved once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
