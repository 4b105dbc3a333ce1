use maud::{Markup, html};
use std::f64::consts::PI;

pub const GAUGE_SIZE: u32 = 120;
pub const GAUGE_STROKE_WIDTH: u32 = 10;
/// Sweep of the dial; the missing quarter sits at the bottom.
pub const ARC_DEGREES: f64 = 270.0;
/// Rotation that puts the start of the sweep at bottom-left.
pub const START_ANGLE: f64 = 135.0;

const TRACK_COLOR: &str = "#2a2a4a";
const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeConfig {
    pub title: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub goal: f64,
    /// Lower values are better (putts per round, approach distance).
    pub invert_color: bool,
    pub unit: String,
    /// Already formatted by the caller.
    pub display_value: String,
    /// Printed verbatim after "Goal: ".
    pub goal_label: String,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: 0.0,
            min: 0.0,
            max: 100.0,
            goal: 0.0,
            invert_color: false,
            unit: String::new(),
            display_value: String::new(),
            goal_label: String::new(),
        }
    }
}

/// How close-to-goal is measured for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalPolicy {
    LowerIsBetter,
    /// Goal of exactly zero with higher-is-better; credit falls off linearly below zero.
    ZeroTarget,
    HigherIsBetter,
}

impl GoalPolicy {
    #[must_use]
    pub fn select(invert_color: bool, goal: f64) -> Self {
        if invert_color {
            GoalPolicy::LowerIsBetter
        } else if goal == 0.0 {
            GoalPolicy::ZeroTarget
        } else {
            GoalPolicy::HigherIsBetter
        }
    }

    #[must_use]
    pub fn for_config(config: &GaugeConfig) -> Self {
        Self::select(config.invert_color, config.goal)
    }

    #[must_use]
    pub fn ratio(self, value: f64, goal: f64, min: f64, max: f64) -> f64 {
        match self {
            GoalPolicy::LowerIsBetter => lower_is_better_ratio(value, goal),
            GoalPolicy::ZeroTarget => zero_target_ratio(value, min, max),
            GoalPolicy::HigherIsBetter => higher_is_better_ratio(value, goal),
        }
    }
}

#[must_use]
pub fn lower_is_better_ratio(value: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        if value <= goal { 1.0 } else { goal / value }
    } else if value <= 0.0 {
        1.0
    } else {
        0.0
    }
}

#[must_use]
pub fn zero_target_ratio(value: f64, min: f64, max: f64) -> f64 {
    if value >= 0.0 {
        1.0
    } else {
        (1.0 + 2.0 * value / (max - min)).max(0.0)
    }
}

/// Uncapped: anything past the goal is still "meeting goal".
#[must_use]
pub fn higher_is_better_ratio(value: f64, goal: f64) -> f64 {
    value / goal
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    MeetingGoal,
    Close,
    Far,
}

impl ColorTier {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            ColorTier::MeetingGoal
        } else if ratio >= 0.8 {
            ColorTier::Close
        } else {
            ColorTier::Far
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            ColorTier::MeetingGoal => "#4ecca3",
            ColorTier::Close => "#f0a500",
            ColorTier::Far => "#e74c3c",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTier::MeetingGoal => "meeting-goal",
            ColorTier::Close => "close",
            ColorTier::Far => "far",
        }
    }
}

/// Fraction of the dial to fill, saturating at both ends.
#[must_use]
pub fn progress(value: f64, min: f64, max: f64) -> f64 {
    // max/min rather than clamp so a degenerate range reads as empty instead of NaN
    ((value - min) / (max - min)).max(0.0).min(1.0)
}

#[must_use]
pub fn goal_ratio(config: &GaugeConfig) -> f64 {
    GoalPolicy::for_config(config).ratio(config.value, config.goal, config.min, config.max)
}

#[must_use]
pub fn color_tier(config: &GaugeConfig) -> ColorTier {
    ColorTier::from_ratio(goal_ratio(config))
}

/// Smaller text for longer readouts so they stay inside the dial.
#[must_use]
pub fn font_size(display_value: &str, unit: &str) -> u32 {
    let text_len = display_value.chars().count() + unit.chars().count();
    if text_len > 6 {
        18
    } else if text_len > 4 {
        22
    } else {
        26
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub radius: f64,
    pub center: f64,
    pub circumference: f64,
    pub arc_length: f64,
    pub dash_offset: f64,
}

impl ArcGeometry {
    #[must_use]
    pub fn new(progress: f64) -> Self {
        let radius = f64::from(GAUGE_SIZE - GAUGE_STROKE_WIDTH) / 2.0;
        let circumference = 2.0 * PI * radius;
        let arc_length = (ARC_DEGREES / 360.0) * circumference;
        Self {
            radius,
            center: f64::from(GAUGE_SIZE) / 2.0,
            circumference,
            arc_length,
            dash_offset: arc_length * (1.0 - progress),
        }
    }
}

#[must_use]
pub fn render_gauge(config: &GaugeConfig) -> Markup {
    let tier = color_tier(config);
    let color = tier.color();
    let geometry = ArcGeometry::new(progress(config.value, config.min, config.max));

    let center = format!("{}", geometry.center);
    let radius = format!("{}", geometry.radius);
    let dash_array = format!("{} {}", geometry.arc_length, geometry.circumference);
    let rotation = format!("rotate({} {} {})", START_ANGLE, geometry.center, geometry.center);

    html! {
        div class="gauge-title" { (config.title) }
        svg viewBox=(format!("0 0 {GAUGE_SIZE} {GAUGE_SIZE}")) width=(GAUGE_SIZE) height=(GAUGE_SIZE) data-tier=(tier.as_str()) {
            circle class="gauge-track" cx=(center) cy=(center) r=(radius)
                fill="none"
                stroke=(TRACK_COLOR)
                stroke-width=(GAUGE_STROKE_WIDTH)
                stroke-dasharray=(dash_array)
                stroke-linecap="round"
                transform=(rotation) {}
            circle class="gauge-arc" cx=(center) cy=(center) r=(radius)
                fill="none"
                stroke=(color)
                stroke-width=(GAUGE_STROKE_WIDTH)
                stroke-dasharray=(dash_array)
                stroke-dashoffset=(format!("{}", geometry.dash_offset))
                stroke-linecap="round"
                transform=(rotation) {}
            text x=(center) y=(format!("{}", geometry.center + 2.0))
                text-anchor="middle"
                dominant-baseline="central"
                fill=(color)
                font-family=(FONT_FAMILY)
                font-size=(font_size(&config.display_value, &config.unit))
                font-weight="700" {
                (config.display_value) (config.unit)
            }
        }
        div class="gauge-goal" { "Goal: " (config.goal_label) }
    }
}
