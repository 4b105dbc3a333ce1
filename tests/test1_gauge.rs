use scraper::{Html, Selector};
use shortgame_dashboard::view::dashboard::{
    ArcGeometry, ColorTier, GaugeConfig, GoalPolicy, color_tier, font_size, goal_ratio,
    lower_is_better_ratio, progress, render_gauge, zero_target_ratio,
};

#[test]
fn test1_progress_stays_in_unit_interval() {
    let (min, max) = (26.0, 40.0);
    let mut value = min;
    while value <= max {
        let p = progress(value, min, max);
        assert!((0.0..=1.0).contains(&p), "progress {p} for {value}");
        value += 0.5;
    }
    assert_eq!(progress(26.0, min, max), 0.0);
    assert_eq!(progress(40.0, min, max), 1.0);
    assert_eq!(progress(33.0, min, max), 0.5);
}

#[test]
fn test1_progress_saturates_out_of_range() {
    assert_eq!(progress(-12.0, 0.0, 100.0), 0.0);
    assert_eq!(progress(150.0, 0.0, 100.0), 1.0);
    assert_eq!(progress(-7.5, -5.0, 5.0), 0.0);
    assert_eq!(progress(9.0, -5.0, 5.0), 1.0);
}

#[test]
fn test1_policy_selection() {
    assert_eq!(GoalPolicy::select(true, 32.0), GoalPolicy::LowerIsBetter);
    assert_eq!(GoalPolicy::select(true, 0.0), GoalPolicy::LowerIsBetter);
    assert_eq!(GoalPolicy::select(false, 0.0), GoalPolicy::ZeroTarget);
    assert_eq!(GoalPolicy::select(false, 50.0), GoalPolicy::HigherIsBetter);
}

#[test]
fn test1_lower_is_better_ratio() {
    assert_eq!(lower_is_better_ratio(32.0, 32.0), 1.0);
    assert_eq!(lower_is_better_ratio(0.0, 0.0), 1.0);
    assert_eq!(lower_is_better_ratio(30.2, 32.0), 1.0);
    assert_eq!(lower_is_better_ratio(40.0, 32.0), 0.8);
    assert_eq!(lower_is_better_ratio(2.0, 0.0), 0.0);
    assert_eq!(lower_is_better_ratio(-1.0, 0.0), 1.0);
}

#[test]
fn test1_zero_target_ratio() {
    let (min, max) = (-5.0, 5.0);
    assert_eq!(zero_target_ratio(0.0, min, max), 1.0);
    assert_eq!(zero_target_ratio(1.3, min, max), 1.0);
    assert_eq!(zero_target_ratio(-(max - min) / 2.0, min, max), 0.0);
    assert_eq!(zero_target_ratio(-9.0, min, max), 0.0);
    let partial = zero_target_ratio(-0.15, min, max);
    assert!((partial - 0.97).abs() < 1e-12, "got {partial}");
}

#[test]
fn test1_meeting_goal_for_every_policy() {
    let lower = GaugeConfig {
        value: 6.5,
        goal: 7.0,
        min: 0.0,
        max: 30.0,
        invert_color: true,
        ..GaugeConfig::default()
    };
    let zero = GaugeConfig {
        value: 0.4,
        goal: 0.0,
        min: -5.0,
        max: 5.0,
        ..GaugeConfig::default()
    };
    let higher = GaugeConfig {
        value: 95.0,
        goal: 90.0,
        ..GaugeConfig::default()
    };
    for config in [lower, zero, higher] {
        assert!(goal_ratio(&config) >= 1.0);
        assert_eq!(color_tier(&config), ColorTier::MeetingGoal);
    }
}

#[test]
fn test1_tier_thresholds() {
    assert_eq!(ColorTier::from_ratio(1.0), ColorTier::MeetingGoal);
    assert_eq!(ColorTier::from_ratio(1.7), ColorTier::MeetingGoal);
    assert_eq!(ColorTier::from_ratio(0.999), ColorTier::Close);
    assert_eq!(ColorTier::from_ratio(0.8), ColorTier::Close);
    assert_eq!(ColorTier::from_ratio(0.79), ColorTier::Far);
    assert_eq!(ColorTier::from_ratio(f64::NEG_INFINITY), ColorTier::Far);
}

#[test]
fn test1_font_size_steps() {
    assert_eq!(font_size("30.2", ""), 26);
    assert_eq!(font_size("41.7", "%"), 22);
    assert_eq!(font_size("-0.15", ""), 22);
    assert_eq!(font_size("100.0", "%"), 22);
    assert_eq!(font_size("21'3\"", ""), 22);
    assert_eq!(font_size("+12.50", "%"), 18);
}

#[test]
fn test1_render_gauge_markup() -> Result<(), Box<dyn std::error::Error>> {
    let config = GaugeConfig {
        title: "Up & Down %".into(),
        value: 41.7,
        display_value: "41.7".into(),
        goal: 50.0,
        goal_label: "50%".into(),
        unit: "%".into(),
        ..GaugeConfig::default()
    };
    let html = render_gauge(&config).into_string();
    let doc = Html::parse_fragment(&html);

    let title = Selector::parse("div.gauge-title")?;
    let goal = Selector::parse("div.gauge-goal")?;
    let svg = Selector::parse("svg")?;
    let arc = Selector::parse("circle.gauge-arc")?;
    let text = Selector::parse("text")?;

    let title_text: String = doc.select(&title).next().ok_or("no title")?.text().collect();
    assert_eq!(title_text, "Up & Down %");
    let goal_text: String = doc.select(&goal).next().ok_or("no goal")?.text().collect();
    assert_eq!(goal_text, "Goal: 50%");

    // 41.7 / 50 is below 0.8 of goal
    let svg_el = doc.select(&svg).next().ok_or("no svg")?;
    assert_eq!(svg_el.value().attr("data-tier"), Some("far"));
    assert_eq!(svg_el.value().attr("width"), Some("120"));

    let arc_el = doc.select(&arc).next().ok_or("no arc")?;
    assert_eq!(arc_el.value().attr("stroke"), Some(ColorTier::Far.color()));
    assert_eq!(arc_el.value().attr("stroke-linecap"), Some("round"));
    assert_eq!(arc_el.value().attr("transform"), Some("rotate(135 60 60)"));
    let offset: f64 = arc_el
        .value()
        .attr("stroke-dashoffset")
        .ok_or("no offset")?
        .parse()?;
    let expected = ArcGeometry::new(0.417).dash_offset;
    assert!((offset - expected).abs() < 1e-9);

    let text_el = doc.select(&text).next().ok_or("no text")?;
    let readout: String = text_el.text().collect();
    assert_eq!(readout, "41.7%");
    assert_eq!(text_el.value().attr("font-size"), Some("22"));
    Ok(())
}

#[test]
fn test1_arc_geometry() {
    let full = ArcGeometry::new(1.0);
    assert_eq!(full.radius, 55.0);
    assert_eq!(full.center, 60.0);
    assert_eq!(full.dash_offset, 0.0);
    assert!((full.arc_length / full.circumference - 0.75).abs() < 1e-12);

    let empty = ArcGeometry::new(0.0);
    assert_eq!(empty.dash_offset, empty.arc_length);
}
