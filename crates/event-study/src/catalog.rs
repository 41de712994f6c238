// File: crates/event-study/src/catalog.rs
// Summary: Event catalog: hand-authored (date, label, marker, color) records parsed into typed events.

use chart_core::{MarkerSymbol, Rgba};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config form of an event; all fields are strings until parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSpec {
    pub date: String,
    #[serde(alias = "event")]
    pub label: String,
    pub marker: String,
    pub color: String,
}

impl EventSpec {
    pub fn new(date: &str, label: &str, marker: &str, color: &str) -> Self {
        Self { date: date.into(), label: label.into(), marker: marker.into(), color: color.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Calendar date; need not be a trading day.
    pub date: NaiveDate,
    pub label: String,
    pub marker: MarkerSymbol,
    pub color: Rgba,
}

impl Event {
    pub fn parse(spec: &EventSpec) -> Result<Self, ConfigError> {
        let date = NaiveDate::parse_from_str(spec.date.trim(), "%Y-%m-%d")
            .map_err(|_| ConfigError::EventDate { label: spec.label.clone(), value: spec.date.clone() })?;
        let marker = spec
            .marker
            .parse()
            .map_err(|source| ConfigError::EventMarker { label: spec.label.clone(), source })?;
        let color = spec
            .color
            .parse()
            .map_err(|source| ConfigError::Color { field: format!("event '{}' color", spec.label), source })?;
        Ok(Self { date, label: spec.label.clone(), marker, color })
    }
}

/// Ordered list of events; order carries through to the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self { Self { events } }

    pub fn from_specs(specs: &[EventSpec]) -> Result<Self, ConfigError> {
        specs.iter().map(Event::parse).collect::<Result<Vec<_>, _>>().map(Self::new)
    }

    /// The stock product-launch catalog.
    ///
    /// Panics if a built-in entry fails to parse.
    pub fn stock() -> Self {
        Self::from_specs(&default_event_specs()).expect("built-in event catalog must parse")
    }

    pub fn events(&self) -> &[Event] { &self.events }
    pub fn len(&self) -> usize { self.events.len() }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Event> { self.events.iter() }
}

impl Default for EventCatalog {
    fn default() -> Self { Self::stock() }
}

impl<'a> IntoIterator for &'a EventCatalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;
    fn into_iter(self) -> Self::IntoIter { self.events.iter() }
}

pub fn default_event_specs() -> Vec<EventSpec> {
    [
        ("2015-09-09", "iPhone 6s Announcement", "circle-open", "blue"),
        ("2016-03-21", "iPhone SE Announcement", "square-open", "purple"),
        ("2017-09-12", "iPhone X Announcement", "diamond-open", "orange"),
        ("2018-09-12", "iPhone XS and XR Announcement", "cross-open", "green"),
        ("2018-11-01", "Q4 2018 Earnings Report", "x-open", "red"),
        ("2019-09-10", "iPhone 11 Announcement", "star-open", "pink"),
        ("2020-03-23", "COVID-19 Market Crash", "triangle-up-open", "black"),
        ("2020-09-15", "Apple Watch Series 6 Announcement", "triangle-down-open", "cyan"),
        ("2020-11-10", "M1 Chip Announcement", "hexagon-open", "magenta"),
        ("2021-03-23", "iPad Pro 2021 Announcement", "octagon-open", "brown"),
        ("2021-09-14", "iPhone 13 Announcement", "square-open", "teal"),
        ("2021-10-26", "MacBook Pro 2021 Announcement", "diamond-open", "grey"),
        ("2022-03-08", "Mac Studio and Studio Display Announcement", "circle-open", "darkblue"),
        ("2022-09-07", "iPhone 14 Announcement", "star-open", "orange"),
        ("2023-09-12", "iPhone 15 Announcement", "triangle-up-open", "green"),
    ]
    .into_iter()
    .map(|(d, l, m, c)| EventSpec::new(d, l, m, c))
    .collect()
}
