use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use gantt_rs::api::{GanttEngine, GanttEngineConfig};
use gantt_rs::core::{DEFAULT_ROW_HEIGHT_PX, DEFAULT_TIME_UNIT_WIDTH, Task};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .expect("valid test date")
}

#[test]
fn default_engines_open_on_a_fifteen_day_window() {
    let engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");

    assert_eq!(engine.period().name, "days");
    assert_eq!(engine.reference(), utc(2022, 1, 13, 10, 0, 0));

    let (start, end) = engine.layout().window();
    assert_eq!(start, utc(2022, 1, 6, 0, 0, 0));
    assert_eq!(end, utc(2022, 1, 21, 0, 0, 0));
    assert!((engine.scroll_width() - 7200.0).abs() <= 1e-9);
}

#[test]
fn default_settings_and_metrics_are_sane() {
    let engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");

    assert!(engine.settings().snap_to_grid);
    assert!(!engine.settings().verbose);
    assert_eq!(engine.viewport().width_px, 960.0);
    assert_eq!(engine.grid_metrics().time_unit_width, DEFAULT_TIME_UNIT_WIDTH);
    assert_eq!(engine.grid_metrics().row_height_px, DEFAULT_ROW_HEIGHT_PX);
    assert_eq!(engine.registry().len(), 4);
}

#[test]
fn the_happy_path_survives_a_full_session() {
    let mut engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");

    let start = utc(2022, 1, 13, 0, 0, 0).timestamp() as f64;
    let id = engine
        .add_task(Task::new("drill section", start, start + 43_200.0, 0.0).expect("valid task"));

    assert!(engine.contains_task(id));
    assert_eq!(engine.task_duration_label(id).as_deref(), Some("12 hours"));
    assert!(engine.task_geometry(id).expect("geometry").visible);

    let json = engine.snapshot_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("drill section"));
    assert!(json.contains("\"period\": \"days\""));

    assert!(engine.remove_task(id).is_some());
    assert_eq!(engine.task_count(), 0);
}
