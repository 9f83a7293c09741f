use chrono::{Datelike, Weekday};
use gantt_rs::api::{GanttEngine, GanttEngineConfig};
use gantt_rs::core::{
    DEFAULT_PERIOD_NAME, PeriodRegistry, PrimaryBand, SecondaryBand, TimePeriod, TimeUnit,
    WindowMargin,
};

fn custom_period(name: &str) -> TimePeriod {
    TimePeriod {
        name: name.to_owned(),
        primary: PrimaryBand {
            unit: TimeUnit::Days,
            format: "%d".to_owned(),
            secondary_per_unit: 4,
        },
        secondary: SecondaryBand {
            unit: TimeUnit::Hours,
            format: "%H".to_owned(),
            step: 6,
        },
        start_margin: WindowMargin {
            term: 1,
            unit: TimeUnit::Days,
        },
        end_margin: WindowMargin {
            term: 1,
            unit: TimeUnit::Days,
        },
        round_to: TimeUnit::Days,
    }
}

#[test]
fn standard_registry_orders_presets_finest_first() {
    let registry = PeriodRegistry::standard();
    let names: Vec<&str> = registry.names().collect();

    assert_eq!(names, ["hours", "days", "weeks", "months"]);
    assert!(registry.get(DEFAULT_PERIOD_NAME).is_some());
    assert!(registry.get("quarters").is_none());
}

#[test]
fn offsets_walk_the_declared_order_without_wrapping() {
    let registry = PeriodRegistry::standard();

    assert_eq!(registry.by_offset("days", -1).map(|p| p.name.as_str()), Some("hours"));
    assert_eq!(registry.by_offset("days", 1).map(|p| p.name.as_str()), Some("weeks"));
    assert_eq!(registry.by_offset("days", 2).map(|p| p.name.as_str()), Some("months"));
    assert_eq!(registry.by_offset("days", 0).map(|p| p.name.as_str()), Some("days"));
    assert!(registry.by_offset("days", -5).is_none());
    assert!(registry.by_offset("days", 5).is_none());
    assert!(registry.by_offset("quarters", 1).is_none());
}

#[test]
fn registering_a_new_preset_appends_to_the_zoom_order() {
    let mut registry = PeriodRegistry::standard();
    registry.register(custom_period("shifts")).expect("valid preset");

    assert_eq!(registry.len(), 5);
    assert_eq!(registry.position("shifts"), Some(4));
    assert_eq!(
        registry.by_offset("months", 1).map(|p| p.name.as_str()),
        Some("shifts")
    );
}

#[test]
fn registering_an_existing_name_replaces_in_place() {
    let mut registry = PeriodRegistry::standard();
    let mut replacement = custom_period("days");
    replacement.primary.secondary_per_unit = 12;
    registry.register(replacement).expect("valid preset");

    assert_eq!(registry.len(), 4);
    assert_eq!(registry.position("days"), Some(1));
    assert_eq!(
        registry.get("days").map(|p| p.primary.secondary_per_unit),
        Some(12)
    );
}

#[test]
fn malformed_presets_are_rejected_by_the_registry() {
    let mut registry = PeriodRegistry::standard();
    let mut broken = custom_period("broken");
    broken.secondary.step = 0;

    assert!(registry.register(broken).is_err());
    assert_eq!(registry.len(), 4);
}

#[test]
fn switching_to_a_registered_preset_rebuilds_the_window() {
    let mut engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");
    let days_width = engine.scroll_width();

    assert!(engine.set_time_period("weeks"));

    assert_eq!(engine.period().name, "weeks");
    assert_ne!(engine.scroll_width(), days_width);
    // Week windows open on a Monday.
    assert_eq!(engine.layout().window().0.weekday(), Weekday::Mon);
}

#[test]
fn unknown_period_names_leave_the_engine_untouched() {
    let mut engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");
    let days_width = engine.scroll_width();

    assert!(!engine.set_time_period("quarters"));

    assert_eq!(engine.period().name, DEFAULT_PERIOD_NAME);
    assert_eq!(engine.scroll_width(), days_width);
}

#[test]
fn invalid_inline_presets_are_refused_at_the_switch() {
    let mut engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");
    let mut broken = custom_period("broken");
    broken.primary.secondary_per_unit = 0;

    assert!(!engine.set_time_period(broken));
    assert_eq!(engine.period().name, DEFAULT_PERIOD_NAME);
}

#[test]
fn offset_switching_steps_through_the_registry() {
    let mut zoom_in = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");
    assert!(zoom_in.set_time_period_offset(-1));
    assert_eq!(zoom_in.period().name, "hours");

    let mut zoom_out = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");
    assert!(zoom_out.set_time_period_offset(1));
    assert_eq!(zoom_out.period().name, "weeks");

    let mut too_far = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");
    assert!(!too_far.set_time_period_offset(-5));
    assert_eq!(too_far.period().name, DEFAULT_PERIOD_NAME);
}

#[test]
fn offset_switching_requires_the_current_preset_to_be_registered() {
    let config = GanttEngineConfig::new().with_period(custom_period("one-off"));
    let mut engine = GanttEngine::new(config).expect("engine init");

    assert!(!engine.set_time_period_offset(1));
    assert!(!engine.set_time_period_offset(-1));
    assert_eq!(engine.period().name, "one-off");
}

#[test]
fn custom_registries_replace_the_standard_presets() {
    let mut registry = PeriodRegistry::empty();
    registry.register(custom_period("shifts")).expect("valid preset");

    let config = GanttEngineConfig::new()
        .with_registry(registry)
        .with_period("shifts");
    let engine = GanttEngine::new(config).expect("engine init");

    assert_eq!(engine.period().name, "shifts");
    assert_eq!(engine.registry().len(), 1);
}
