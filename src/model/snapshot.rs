use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::distance::DistanceBucket;
use crate::error::DashboardError;

/// Make percentage and attempt count for one distance bucket.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PuttStat {
    pub pct: f64,
    pub attempts: u32,
    #[serde(default)]
    pub makes: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Goals {
    pub putts_per_round: f64,
    pub up_and_down_pct: f64,
    pub non_gir_approach_ft: f64,
    pub sg_putting: f64,
    pub make_pct_3ft: f64,
    pub make_pct_4_5ft: f64,
    pub make_pct_6_7ft: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub total_rounds: u32,
    pub putts_per_round: f64,
    pub up_and_down_pct: f64,
    pub non_gir_approach_ft: f64,
    pub non_gir_approach_display: String,
    #[serde(default)]
    pub gir_approach_ft: f64,
    #[serde(default)]
    pub gir_approach_display: String,
    pub sg_putting: f64,
    pub make_pct_3ft: f64,
    pub make_pct_4_5ft: f64,
    pub make_pct_6_7ft: f64,
    pub goals: Goals,
    pub first_putt_stats: HashMap<String, PuttStat>,
    pub second_putt_stats: HashMap<String, PuttStat>,
}

impl StatsSnapshot {
    /// # Errors
    ///
    /// Will return `Err` if the body is not json or a field is missing or mistyped
    pub fn from_json_slice(body: &[u8]) -> Result<Self, DashboardError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// A bucket missing from the payload counts as never attempted.
    #[must_use]
    pub fn first_putt(&self, bucket: DistanceBucket) -> PuttStat {
        lookup(&self.first_putt_stats, bucket)
    }

    #[must_use]
    pub fn second_putt(&self, bucket: DistanceBucket) -> PuttStat {
        lookup(&self.second_putt_stats, bucket)
    }
}

fn lookup(stats: &HashMap<String, PuttStat>, bucket: DistanceBucket) -> PuttStat {
    stats.get(bucket.label()).copied().unwrap_or_default()
}
