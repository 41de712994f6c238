// File: crates/event-study/src/compose.rs
// Summary: Build the chart Figure: two price lines, one marker per event, one legend entry per event.
// Trace order:
// - [0] before-cutoff line, [1] after-cutoff line
// - [2 .. 2+N] event markers (hoverable, hidden from the legend)
// - [2+N .. 2+2N] legend-only entries (single null point, grouped by label)

use chart_core::{
    date_to_x, Axis, Figure, Layout, Legend, LineStyle, MarkerStyle, Orientation, Rgba, TickFormat, Trace, TraceOrder,
};

use crate::resolve::ResolvedEvent;
use crate::series::PriceSeries;
use crate::split::RangeSplit;

/// Resolved (typed) chart styling. Built by `StyleConfig::resolve`, which also
/// holds the stock values.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub before_name: String,
    pub after_name: String,
    pub before_color: Rgba,
    pub after_color: Rgba,
    pub line_width: f32,
    pub width: i32,
    pub height: i32,
    pub legend_title: String,
    pub legend_width: u32,
    pub marker_size: f32,
    pub marker_opacity: f32,
    pub marker_line_color: Rgba,
    pub marker_line_width: f32,
    pub plot_bgcolor: Rgba,
    pub paper_bgcolor: Rgba,
    pub grid_color: Rgba,
    pub show_grid: bool,
    pub zero_line: bool,
    pub price_decimals: usize,
}

impl ChartStyle {
    fn layout(&self) -> Layout {
        let mut x_axis = Axis::date(self.x_title.clone());
        x_axis.show_grid = self.show_grid;
        x_axis.grid_color = self.grid_color;
        x_axis.zero_line = self.zero_line;

        let mut y_axis = Axis::new(self.y_title.clone());
        y_axis.tick_format = TickFormat::Currency(self.price_decimals);
        y_axis.show_grid = self.show_grid;
        y_axis.grid_color = self.grid_color;
        y_axis.zero_line = self.zero_line;

        Layout {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            x_axis,
            y_axis,
            legend: Legend {
                title: Some(self.legend_title.clone()),
                visible: true,
                orientation: Orientation::Vertical,
                trace_order: TraceOrder::Normal,
                width: self.legend_width,
            },
            plot_bgcolor: self.plot_bgcolor,
            paper_bgcolor: self.paper_bgcolor,
        }
    }

    fn marker(&self, ev: &ResolvedEvent) -> MarkerStyle {
        MarkerStyle {
            symbol: ev.event.marker,
            size: self.marker_size,
            color: ev.event.color,
            opacity: self.marker_opacity,
            line: LineStyle { color: self.marker_line_color, width: self.marker_line_width },
        }
    }
}

/// Tooltip for an event marker. Uses the event's own date and the unjittered close.
pub fn hover_text(ev: &ResolvedEvent, decimals: usize) -> String {
    format!(
        "{}\nDate: {}\nClose Price: ${:.*}",
        ev.event.label,
        ev.event.date.format("%Y-%m-%d"),
        decimals,
        ev.price.close
    )
}

fn price_line(name: &str, series: &PriceSeries, color: Rgba, width: f32) -> Trace {
    Trace::line(name, series.closes().map(|(d, c)| (date_to_x(d), c)), LineStyle { color, width })
}

pub fn compose(split: &RangeSplit, resolved: &[ResolvedEvent], style: &ChartStyle) -> Figure {
    let mut fig = Figure::new(style.layout());
    fig.add_trace(price_line(&style.before_name, &split.before, style.before_color, style.line_width));
    fig.add_trace(price_line(&style.after_name, &split.after, style.after_color, style.line_width));

    for ev in resolved {
        let (date, price) = ev.display;
        fig.add_trace(
            Trace::markers(ev.event.label.clone(), [(date_to_x(date), price)], style.marker(ev))
                .with_hover_text(hover_text(ev, style.price_decimals))
                .with_show_legend(false),
        );
    }
    for ev in resolved {
        fig.add_trace(Trace::legend_only(ev.event.label.clone(), style.marker(ev)).with_legend_group(ev.event.label.clone()));
    }
    fig
}
