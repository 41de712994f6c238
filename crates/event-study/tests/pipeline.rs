// File: crates/event-study/tests/pipeline.rs
// Purpose: End-to-end run from a CSV file to a composed figure.

use event_study::{run, run_with_series, Error, PriceSeries, StudyConfig};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

fn config(events: &str) -> StudyConfig {
    let mut cfg = StudyConfig::from_toml_str(events).unwrap();
    cfg.data.path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_prices.csv");
    cfg
}

const EVENTS: &str = r#"
[[events]]
date = "2020-03-22"
label = "Sunday"
marker = "circle-open"
color = "blue"

[[events]]
date = "2020-03-23"
label = "COVID-19 Market Crash"
marker = "triangle-up-open"
color = "black"
"#;

#[test]
fn runs_end_to_end() {
    let study = run(&config(EVENTS), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(study.series_len, 6);
    assert_eq!(study.split.before.len(), 3);
    assert_eq!(study.split.after.len(), 3);
    assert_eq!(study.figure.traces.len(), 6);
    // Sunday resolves to Friday's forward-filled close
    assert_eq!(study.resolved[0].price.close, 244.78);
    assert_eq!(study.resolved[1].price.close, 224.37);
}

#[test]
fn same_seed_same_figure_positions() {
    let cfg = config(EVENTS);
    let a = run(&cfg, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = run(&cfg, &mut StdRng::seed_from_u64(5)).unwrap();
    let pos = |s: &event_study::Study| s.resolved.iter().map(|r| r.display).collect::<Vec<_>>();
    assert_eq!(pos(&a), pos(&b));
}

#[test]
fn event_before_data_aborts() {
    let cfg = config("[[events]]\ndate = \"2015-09-09\"\nlabel = \"early\"\nmarker = \"circle\"\ncolor = \"red\"\n");
    let err = run(&cfg, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, Error::NoPriorPrice(ref e) if e.first.is_some()), "{err}");
}

#[test]
fn empty_series_fails_on_first_event() {
    let err = run_with_series(&StudyConfig::default(), &PriceSeries::new(), &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, Error::NoPriorPrice(_)));
}

#[test]
fn missing_data_file_is_a_load_error() {
    let mut cfg = StudyConfig::default();
    cfg.data.path = PathBuf::from("no/such/prices.csv");
    assert!(matches!(run(&cfg, &mut StdRng::seed_from_u64(1)), Err(Error::Load(_))));
}
