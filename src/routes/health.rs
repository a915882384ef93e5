//! Probe endpoints for container orchestration.
//!
//! Each probe is a constant function of a flag fixed at process start; there
//! are no state transitions during the process lifetime. The failing outcomes
//! are simulated failures for exercising orchestrator behavior, not real
//! subsystem health.

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Liveness probe. Fails for every request when FAIL_LIVENESS was set,
/// prompting the orchestrator to restart the pod.
pub async fn liveness(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    if state.flags.fail_liveness {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok("ok")
}

/// Readiness probe. The outcome was fixed by a single coin flip at startup
/// (see `HealthFlags`); a failing run never receives traffic.
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    if state.flags.fail_readiness {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok("ok")
}

/// Startup probe. Unconditional success - reaching this handler at all means
/// the process passed the startup gate and bound its listener.
pub async fn startup() -> &'static str {
    "ok"
}
