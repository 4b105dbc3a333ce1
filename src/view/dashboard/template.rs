use maud::{Markup, html};

use crate::model::{SchemaFlag, StatsSnapshot};
use crate::view::dashboard::gauge::{GaugeConfig, render_gauge};
use crate::view::dashboard::table::render_putting_rows;
use crate::view::dashboard::target::{MountPoint, PageTarget, RenderTarget};
use crate::view::dashboard::utils::{goal_number, one_decimal, signed_two_decimals};

const PCT: &str = "%";

/// The seven dial configurations, in the order they are painted.
#[must_use]
pub fn gauge_configs(stats: &StatsSnapshot) -> Vec<(MountPoint, GaugeConfig)> {
    let goals = &stats.goals;
    vec![
        (
            MountPoint::GaugePuttsPerRound,
            GaugeConfig {
                title: "Putts Per Round".into(),
                value: stats.putts_per_round,
                display_value: one_decimal(stats.putts_per_round),
                goal: goals.putts_per_round,
                goal_label: format!("< {}", goal_number(goals.putts_per_round)),
                min: 26.0,
                max: 40.0,
                invert_color: true,
                ..GaugeConfig::default()
            },
        ),
        (
            MountPoint::GaugeUpAndDown,
            make_pct_gauge("Up & Down %", stats.up_and_down_pct, goals.up_and_down_pct),
        ),
        (
            MountPoint::GaugeApproach,
            GaugeConfig {
                title: "Non-GIR Approach".into(),
                value: stats.non_gir_approach_ft,
                display_value: stats.non_gir_approach_display.clone(),
                goal: goals.non_gir_approach_ft,
                goal_label: format!("< {}ft", goal_number(goals.non_gir_approach_ft)),
                min: 0.0,
                max: 30.0,
                invert_color: true,
                ..GaugeConfig::default()
            },
        ),
        (
            MountPoint::GaugeSgPutting,
            GaugeConfig {
                title: "SG: Putting".into(),
                value: stats.sg_putting,
                display_value: signed_two_decimals(stats.sg_putting),
                goal: goals.sg_putting,
                goal_label: "> 0".into(),
                min: -5.0,
                max: 5.0,
                ..GaugeConfig::default()
            },
        ),
        (
            MountPoint::Gauge3ft,
            make_pct_gauge("3ft Make %", stats.make_pct_3ft, goals.make_pct_3ft),
        ),
        (
            MountPoint::Gauge4To5ft,
            make_pct_gauge("4-5ft Make %", stats.make_pct_4_5ft, goals.make_pct_4_5ft),
        ),
        (
            MountPoint::Gauge6To7ft,
            make_pct_gauge("6-7ft Make %", stats.make_pct_6_7ft, goals.make_pct_6_7ft),
        ),
    ]
}

/// Flags every dial whose range is empty or inverted, where progress would divide by zero.
#[must_use]
pub fn check_gauge_bounds(configs: &[(MountPoint, GaugeConfig)]) -> Vec<SchemaFlag> {
    configs
        .iter()
        .filter(|(_, config)| !(config.min < config.max))
        .map(|(mount, config)| {
            SchemaFlag::new(
                mount.element_id(),
                format!("min {} is not below max {}", config.min, config.max),
            )
        })
        .collect()
}

fn make_pct_gauge(title: &str, value: f64, goal: f64) -> GaugeConfig {
    GaugeConfig {
        title: title.into(),
        value,
        display_value: one_decimal(value),
        goal,
        goal_label: format!("{}%", goal_number(goal)),
        unit: PCT.into(),
        ..GaugeConfig::default()
    }
}

/// Paints a snapshot onto `target`: gauges, then the putting table, then the scalar fields.
pub fn render_dashboard(stats: &StatsSnapshot, target: &mut dyn RenderTarget) {
    for (mount, config) in gauge_configs(stats) {
        target.set_markup(mount, render_gauge(&config));
    }

    target.set_markup(MountPoint::PuttingTbody, render_putting_rows(stats));

    target.set_text(MountPoint::TotalRounds, &stats.total_rounds.to_string());
    target.set_text(MountPoint::GirApproach, &stats.gir_approach_display);
}

/// Page body holding every mount point. With an empty target this is the
/// placeholder that asks for `dashboard` once the page has loaded.
#[must_use]
pub fn render_dashboard_body(page: &PageTarget) -> Markup {
    html! {
        div id="dashboard"
            hx-get=[page.is_empty().then_some("dashboard")]
            hx-trigger=[page.is_empty().then_some("load")]
            hx-swap=[page.is_empty().then_some("outerHTML")] {
            div class="summary" {
                span class="summary-label" { "Rounds: " }
                span id=(MountPoint::TotalRounds.element_id()) { (page.render(MountPoint::TotalRounds)) }
            }
            div class="gauges" {
                @for mount in MountPoint::GAUGES {
                    div class="gauge" id=(mount.element_id()) { (page.render(mount)) }
                }
            }
            h3 { "Make % by Distance" }
            table class="styled-table" {
                thead {
                    tr {
                        th { "Distance" }
                        th { "1st Putt" }
                        th { "2nd Putt" }
                    }
                }
                tbody id=(MountPoint::PuttingTbody.element_id()) {
                    (page.render(MountPoint::PuttingTbody))
                }
            }
            div class="other-stats" {
                span class="summary-label" { "GIR Approach: " }
                span id=(MountPoint::GirApproach.element_id()) { (page.render(MountPoint::GirApproach)) }
            }
        }
    }
}
