use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use gantt_rs::api::{GanttEngine, GanttEngineConfig};
use gantt_rs::core::{
    PrimaryBand, SecondaryBand, TimePeriod, TimeUnit, Viewport, WindowMargin,
};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .expect("valid test date")
}

fn three_day_period() -> TimePeriod {
    TimePeriod {
        name: "three-days".to_owned(),
        primary: PrimaryBand {
            unit: TimeUnit::Days,
            format: "%m/%Y %d".to_owned(),
            secondary_per_unit: 24,
        },
        secondary: SecondaryBand {
            unit: TimeUnit::Hours,
            format: "%H:%M".to_owned(),
            step: 1,
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

fn build_engine(viewport: Viewport) -> GanttEngine {
    let config = GanttEngineConfig::new()
        .with_period(three_day_period())
        .with_viewport(viewport);
    GanttEngine::new(config).expect("engine init")
}

#[test]
fn window_edges_map_to_content_edges() {
    let engine = build_engine(Viewport::new(600.0));

    let start = engine.date_from_pixel(0.0).expect("window start");
    assert_eq!(start, utc(2022, 1, 12, 0, 0, 0));

    let one_column = engine.date_from_pixel(480.0).expect("second column");
    assert_eq!(one_column, utc(2022, 1, 13, 0, 0, 0));

    let px = engine
        .pixel_from_date(utc(2022, 1, 15, 0, 0, 0))
        .expect("window end");
    assert!((px - 1440.0).abs() <= 1e-9);
}

#[test]
fn pixel_date_pixel_round_trip_is_stable() {
    let engine = build_engine(Viewport::new(600.0));

    for x in [0.0, 1.0, 480.0, 736.6, 1439.9, 1440.0] {
        let date = engine.date_from_pixel(x).expect("to date");
        let back = engine.pixel_from_date(date).expect("to pixel");
        assert!((back - x).abs() <= 1e-6, "round trip drifted at x={x}");
    }
}

#[test]
fn viewport_offsets_shift_pointer_coordinates_into_content_space() {
    let viewport = Viewport::new(600.0)
        .with_left_edge(100.0)
        .with_scroll_left(250.0);
    let engine = build_engine(viewport);

    // Screen x=100 is the element's left edge, scrolled 250px in.
    let date = engine.date_from_pixel(100.0).expect("to date");
    let content_px = engine.pixel_from_date(date).expect("to pixel");
    assert!((content_px - 250.0).abs() <= 1e-6);
}

#[test]
fn conversions_bind_to_the_snapshot_not_the_engine() {
    let mut engine = build_engine(Viewport::new(600.0));
    let frozen = engine.layout().clone();

    engine.set_reference_instant(utc(2023, 6, 1, 0, 0, 0));

    // The engine now answers for the new window, the clone for the old.
    let (old_start, _) = frozen.window();
    assert_eq!(old_start, utc(2022, 1, 12, 0, 0, 0));
    let px = frozen
        .pixel_from_date(utc(2022, 1, 13, 0, 0, 0))
        .expect("frozen conversion");
    assert!((px - 480.0).abs() <= 1e-9);

    let live = engine
        .pixel_from_date(utc(2023, 5, 31, 0, 0, 0))
        .expect("live conversion");
    assert!((live - 0.0).abs() <= 1e-9);
}

#[test]
fn non_finite_pointer_input_is_an_error() {
    let engine = build_engine(Viewport::new(600.0));
    assert!(engine.date_from_pixel(f64::NAN).is_err());
    assert!(engine.date_from_pixel(f64::INFINITY).is_err());
}
