use tracing::error;

use crate::error::DashboardError;
use crate::mvu::dashboard::{DashboardModel, Deps, Msg, run_effect, update};
use crate::view::dashboard::RenderTarget;

/// Runs the MVU loop for one page load: seeds with `init_msg` and drains effects.
///
/// A failure is logged here, once, and the loop stops without touching `target` again.
///
/// # Errors
///
/// Returns the first `DashboardError` raised by an effect.
pub async fn run_dashboard(
    model: &mut DashboardModel,
    init_msg: Msg,
    deps: Deps<'_>,
    target: &mut dyn RenderTarget,
) -> Result<(), DashboardError> {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps, target).await;
        match msg {
            Msg::Failed(e) => {
                error!(error = %e, "failed to load stats");
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}
