use tracing::warn;

use crate::controller::loader::StatsSource;
use crate::error::DashboardError;
use crate::model::StatsSnapshot;
use crate::view::dashboard::{RenderTarget, check_gauge_bounds, gauge_configs, render_dashboard};

#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub want_json: bool,
    pub snapshot: Option<StatsSnapshot>,
    pub rendered: bool,
    pub error: Option<DashboardError>,
}

impl DashboardModel {
    #[must_use]
    pub fn new(want_json: bool) -> Self {
        Self {
            want_json,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageReady,
    StatsLoaded(StatsSnapshot),
    Rendered,
    Failed(DashboardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchStats,
    Render,
}

pub fn update(model: &mut DashboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageReady => vec![Effect::FetchStats],
        Msg::StatsLoaded(snapshot) => {
            model.snapshot = Some(snapshot);
            if model.want_json {
                vec![]
            } else {
                vec![Effect::Render]
            }
        }
        Msg::Rendered => {
            model.rendered = true;
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub source: &'a dyn StatsSource,
}

pub async fn run_effect(
    effect: Effect,
    model: &DashboardModel,
    deps: Deps<'_>,
    target: &mut dyn RenderTarget,
) -> Msg {
    match effect {
        Effect::FetchStats => match deps.source.fetch().await {
            Ok(snapshot) => Msg::StatsLoaded(snapshot),
            Err(e) => Msg::Failed(e),
        },
        Effect::Render => {
            if let Some(snapshot) = model.snapshot.as_ref() {
                let bound_flags = check_gauge_bounds(&gauge_configs(snapshot));
                for flag in snapshot.validate().into_iter().chain(bound_flags) {
                    warn!(%flag, "suspicious stats value");
                }
                render_dashboard(snapshot, target);
                Msg::Rendered
            } else {
                Msg::Failed("render requested without a snapshot".into())
            }
        }
    }
}
