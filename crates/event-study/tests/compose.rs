// File: crates/event-study/tests/compose.rs
// Purpose: Figure layout produced for a split series and a handful of events.

use chart_core::{date_to_x, hit_test, viewport, AxisKind, RenderOptions, TickFormat, TraceMode};
use chrono::NaiveDate;
use event_study::{
    compose, place_events, split_at, ChartStyle, EventCatalog, EventSpec, Jitter, PriceSeries, StudyConfig,
};
use rand::{rngs::StdRng, SeedableRng};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

fn style() -> ChartStyle { StudyConfig::default().chart_style().unwrap() }

fn series() -> PriceSeries {
    PriceSeries::from_closes([
        (ymd(2019, 9, 9), 53.54),
        (ymd(2019, 9, 10), 54.17),
        (ymd(2020, 3, 20), 57.31),
        (ymd(2020, 3, 23), 56.09),
        (ymd(2020, 9, 15), 115.54),
    ])
}

fn catalog() -> EventCatalog {
    EventCatalog::from_specs(&[
        EventSpec::new("2019-09-10", "iPhone 11 Announcement", "star-open", "pink"),
        EventSpec::new("2020-03-22", "Weekend", "triangle-up-open", "black"),
        EventSpec::new("2020-09-15", "Apple Watch Series 6 Announcement", "triangle-down-open", "cyan"),
    ])
    .unwrap()
}

#[test]
fn two_lines_then_markers_then_legend_entries() {
    let s = series();
    let split = split_at(&s, ymd(2015, 1, 1), ymd(2020, 3, 23));
    let placed = place_events(&s, &catalog(), &Jitter::default(), &mut StdRng::seed_from_u64(3)).unwrap();
    let fig = compose(&split, &placed, &style());

    assert_eq!(fig.traces.len(), 2 + 2 * 3);
    assert_eq!(fig.traces[0].name, "Close Price up to March 2020");
    assert_eq!(fig.traces[0].points.len(), 3);
    assert_eq!(fig.traces[1].name, "Close Price from March 2020 onward");
    assert_eq!(fig.traces[1].points.len(), 2);
    assert!(fig.traces[..2].iter().all(|t| t.mode == TraceMode::Lines && t.show_legend));

    for (i, t) in fig.traces[2..5].iter().enumerate() {
        assert_eq!(t.mode, TraceMode::Markers);
        assert!(!t.show_legend);
        assert_eq!(t.points.len(), 1);
        assert_eq!(t.name, placed[i].event.label);
        assert_eq!(t.marker.size, 14.0);
        assert_eq!(t.marker.opacity, 0.8);
    }
    for (i, t) in fig.traces[5..].iter().enumerate() {
        assert!(t.show_legend);
        assert_eq!(t.points, vec![None]);
        assert!(!t.is_plotted());
        assert_eq!(t.legend_group.as_deref(), Some(placed[i].event.label.as_str()));
        assert_eq!(t.marker.symbol, placed[i].event.marker);
    }

    let legend: Vec<_> = fig.legend_entries().iter().map(|t| t.name.clone()).collect();
    assert_eq!(legend.len(), 5);
    assert_eq!(legend[2], "iPhone 11 Announcement");
}

#[test]
fn hover_shows_unjittered_values() {
    let s = series();
    let split = split_at(&s, ymd(2015, 1, 1), ymd(2020, 3, 23));
    let placed = place_events(&s, &catalog(), &Jitter::new(10, 0.03).unwrap(), &mut StdRng::seed_from_u64(9)).unwrap();
    let fig = compose(&split, &placed, &style());

    // weekend event: as-of Friday's close, own date in the tooltip
    let weekend = &fig.traces[3];
    assert_eq!(weekend.hover_text.as_deref(), Some("Weekend\nDate: 2020-03-22\nClose Price: $57.31"));
    let (x, y) = weekend.points[0].unwrap();
    assert!((x - date_to_x(ymd(2020, 3, 22))).abs() <= 10.0);
    assert!((y - 57.31).abs() <= 0.03 + 1e-9);
}

#[test]
fn layout_matches_style() {
    let fig = compose(&Default::default(), &[], &style());
    let l = &fig.layout;
    assert_eq!((l.width, l.height), (1200, 800));
    assert_eq!(l.x_axis.kind, AxisKind::Date);
    assert_eq!(l.y_axis.tick_format, TickFormat::Currency(2));
    assert_eq!(l.y_axis.title, "Close Price (in USD)");
    assert!(l.y_axis.show_grid && !l.y_axis.zero_line);
    assert_eq!(l.legend.title.as_deref(), Some("Events"));
}

#[test]
fn markers_are_hoverable_legend_entries_are_not() {
    let s = series();
    let split = split_at(&s, ymd(2015, 1, 1), ymd(2020, 3, 23));
    let placed = place_events(&s, &catalog(), &Jitter::none(), &mut StdRng::seed_from_u64(0)).unwrap();
    let fig = compose(&split, &placed, &style());
    let opts = RenderOptions::for_figure(&fig);
    let (px, py) = viewport(&fig, &opts).to_px((date_to_x(ymd(2019, 9, 10)), 54.17));
    let hit = hit_test(&fig, &opts, px, py).expect("marker under pointer");
    assert_eq!(hit.trace_index, 2);
    assert!(hit.text.starts_with("iPhone 11 Announcement\n"));
}
