use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The analysis core is stateless (static pattern tables, pure functions), so
/// the state carries configuration only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
