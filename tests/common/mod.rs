#![allow(dead_code)]

use async_trait::async_trait;
use maud::Markup;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use shortgame_dashboard::controller::loader::StatsSource;
use shortgame_dashboard::error::DashboardError;
use shortgame_dashboard::model::StatsSnapshot;
use shortgame_dashboard::view::dashboard::{MountPoint, RenderTarget};

pub const SNAPSHOT_JSON: &str = include_str!("../test3_snapshot.json");

pub fn snapshot() -> StatsSnapshot {
    serde_json::from_str(SNAPSHOT_JSON).expect("fixture should parse")
}

/// Every write, in order, so tests can check what was painted and when.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub writes: Vec<(MountPoint, String)>,
}

impl RecordingTarget {
    pub fn last(&self, mount: MountPoint) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(m, _)| *m == mount)
            .map(|(_, s)| s.as_str())
    }
}

impl RenderTarget for RecordingTarget {
    fn set_text(&mut self, mount: MountPoint, text: &str) {
        self.writes.push((mount, text.to_string()));
    }

    fn set_markup(&mut self, mount: MountPoint, markup: Markup) {
        self.writes.push((mount, markup.into_string()));
    }
}

pub struct FixedSource(pub StatsSnapshot);

#[async_trait]
impl StatsSource for FixedSource {
    async fn fetch(&self) -> Result<StatsSnapshot, DashboardError> {
        Ok(self.0.clone())
    }
}

/// Stands in for a rejected network request.
pub struct FailingSource {
    pub calls: AtomicUsize,
}

impl FailingSource {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl StatsSource for FailingSource {
    async fn fetch(&self) -> Result<StatsSnapshot, DashboardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DashboardError::Network("connection refused".into()))
    }
}

/// Counts events logged at a given level.
#[derive(Clone)]
pub struct LevelCounter {
    level: Level,
    pub count: Arc<Mutex<usize>>,
}

impl LevelCounter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn get(&self) -> usize {
        *self.count.lock().unwrap()
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == self.level {
            *self.count.lock().unwrap() += 1;
        }
    }
}
