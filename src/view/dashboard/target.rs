use maud::{Markup, PreEscaped};
use std::collections::BTreeMap;

/// Element ids the dashboard writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MountPoint {
    TotalRounds,
    GaugePuttsPerRound,
    GaugeUpAndDown,
    GaugeApproach,
    GaugeSgPutting,
    Gauge3ft,
    Gauge4To5ft,
    Gauge6To7ft,
    PuttingTbody,
    GirApproach,
}

impl MountPoint {
    pub const GAUGES: [MountPoint; 7] = [
        MountPoint::GaugePuttsPerRound,
        MountPoint::GaugeUpAndDown,
        MountPoint::GaugeApproach,
        MountPoint::GaugeSgPutting,
        MountPoint::Gauge3ft,
        MountPoint::Gauge4To5ft,
        MountPoint::Gauge6To7ft,
    ];

    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            MountPoint::TotalRounds => "total-rounds",
            MountPoint::GaugePuttsPerRound => "gauge-ppr",
            MountPoint::GaugeUpAndDown => "gauge-updown",
            MountPoint::GaugeApproach => "gauge-approach",
            MountPoint::GaugeSgPutting => "gauge-sg",
            MountPoint::Gauge3ft => "gauge-3ft",
            MountPoint::Gauge4To5ft => "gauge-4-5ft",
            MountPoint::Gauge6To7ft => "gauge-6-7ft",
            MountPoint::PuttingTbody => "putting-tbody",
            MountPoint::GirApproach => "gir-approach",
        }
    }
}

/// Anything the dashboard can be painted onto.
///
/// Every call replaces whatever the mount point held before.
pub trait RenderTarget {
    fn set_text(&mut self, mount: MountPoint, text: &str);
    fn set_markup(&mut self, mount: MountPoint, markup: Markup);
}

#[derive(Debug, Clone, PartialEq)]
pub enum MountContent {
    Text(String),
    Markup(String),
}

/// Collects writes so the page template can lay them out afterwards.
#[derive(Debug, Clone, Default)]
pub struct PageTarget {
    contents: BTreeMap<MountPoint, MountContent>,
}

impl PageTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    #[must_use]
    pub fn get(&self, mount: MountPoint) -> Option<&MountContent> {
        self.contents.get(&mount)
    }

    /// Content for a mount point, escaped as needed. Unwritten mounts render empty.
    #[must_use]
    pub fn render(&self, mount: MountPoint) -> Markup {
        match self.contents.get(&mount) {
            Some(MountContent::Text(text)) => maud::html! { (text) },
            Some(MountContent::Markup(markup)) => PreEscaped(markup.clone()),
            None => PreEscaped(String::new()),
        }
    }
}

impl RenderTarget for PageTarget {
    fn set_text(&mut self, mount: MountPoint, text: &str) {
        self.contents
            .insert(mount, MountContent::Text(text.to_string()));
    }

    fn set_markup(&mut self, mount: MountPoint, markup: Markup) {
        self.contents
            .insert(mount, MountContent::Markup(markup.into_string()));
    }
}
