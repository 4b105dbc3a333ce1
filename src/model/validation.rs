use super::distance::DistanceBucket;
use super::snapshot::{PuttStat, StatsSnapshot};
use std::collections::HashMap;

/// Suspicious value found in a snapshot. Flags are reported, never corrected.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFlag {
    pub field: String,
    pub message: String,
}

impl SchemaFlag {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl StatsSnapshot {
    #[must_use]
    pub fn validate(&self) -> Vec<SchemaFlag> {
        let mut flags = Vec::new();

        let scalars = [
            ("putts_per_round", self.putts_per_round),
            ("non_gir_approach_ft", self.non_gir_approach_ft),
            ("gir_approach_ft", self.gir_approach_ft),
            ("sg_putting", self.sg_putting),
            ("goals.putts_per_round", self.goals.putts_per_round),
            ("goals.non_gir_approach_ft", self.goals.non_gir_approach_ft),
            ("goals.sg_putting", self.goals.sg_putting),
        ];
        for (field, value) in scalars {
            check_finite(&mut flags, field, value);
        }

        let percentages = [
            ("up_and_down_pct", self.up_and_down_pct),
            ("make_pct_3ft", self.make_pct_3ft),
            ("make_pct_4_5ft", self.make_pct_4_5ft),
            ("make_pct_6_7ft", self.make_pct_6_7ft),
            ("goals.up_and_down_pct", self.goals.up_and_down_pct),
            ("goals.make_pct_3ft", self.goals.make_pct_3ft),
            ("goals.make_pct_4_5ft", self.goals.make_pct_4_5ft),
            ("goals.make_pct_6_7ft", self.goals.make_pct_6_7ft),
        ];
        for (field, value) in percentages {
            check_percentage(&mut flags, field, value);
        }

        check_buckets(&mut flags, "first_putt_stats", &self.first_putt_stats);
        check_buckets(&mut flags, "second_putt_stats", &self.second_putt_stats);

        flags
    }
}

fn check_finite(flags: &mut Vec<SchemaFlag>, field: &str, value: f64) {
    if !value.is_finite() {
        flags.push(SchemaFlag::new(field, format!("{value} is not a finite number")));
    }
}

fn check_percentage(flags: &mut Vec<SchemaFlag>, field: &str, value: f64) {
    if !value.is_finite() {
        check_finite(flags, field, value);
    } else if !(0.0..=100.0).contains(&value) {
        flags.push(SchemaFlag::new(field, format!("{value} is outside 0..=100")));
    }
}

fn check_buckets(flags: &mut Vec<SchemaFlag>, field: &str, stats: &HashMap<String, PuttStat>) {
    // sorted so the log output is stable
    let mut keys: Vec<&String> = stats.keys().collect();
    keys.sort();
    for key in keys {
        let path = format!("{field}.{key}");
        if DistanceBucket::from_label(key).is_none() {
            flags.push(SchemaFlag::new(path, "unknown distance bucket"));
            continue;
        }
        let stat = &stats[key];
        check_percentage(flags, &path, stat.pct);
        if stat.makes > stat.attempts {
            flags.push(SchemaFlag::new(
                path,
                format!("{} makes exceeds {} attempts", stat.makes, stat.attempts),
            ));
        }
    }
}
