//! Geometry for the temperature bar chart
//!
//! Bars grow up from the zero line for positive temperatures and down from it
//! for negative ones. The value axis always includes zero.

use application::ports::TemperatureChart;
use serde::Serialize;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 90.0;
const BAR_FILL_RATIO: f64 = 0.6;
const TICK_COUNT: u32 = 5;

/// One positioned bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutBar {
    pub city: String,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    /// Baseline of the value label, just outside the bar end
    pub value_y: f64,
    pub negative: bool,
}

/// Horizontal grid line with its value label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxisTick {
    pub y: f64,
    pub label: String,
}

/// Everything the SVG template needs, in canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub zero_y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub tick_label_x: f64,
    pub category_label_y: f64,
    pub x_label_y: f64,
    pub ticks: Vec<YAxisTick>,
    pub bars: Vec<LaidOutBar>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Value range covering all temperatures and zero, padded by 10%
fn value_range(chart: &TemperatureChart) -> (f64, f64) {
    let (lo, hi) = chart
        .bars
        .iter()
        .map(|b| b.temperature)
        .filter(|t| t.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), t| (lo.min(t), hi.max(t)));

    let span = hi - lo;
    if span <= f64::EPSILON {
        return (0.0, 1.0);
    }

    let pad = span * 0.1;
    (if lo < 0.0 { lo - pad } else { lo }, if hi > 0.0 { hi + pad } else { hi })
}

impl ChartLayout {
    /// Lay out the chart on its canvas
    pub fn compute(chart: &TemperatureChart) -> Self {
        let width = f64::from(chart.width);
        let height = f64::from(chart.height);

        let plot_left = MARGIN_LEFT;
        let plot_right = (width - MARGIN_RIGHT).max(plot_left + 1.0);
        let plot_top = MARGIN_TOP;
        let plot_bottom = (height - MARGIN_BOTTOM).max(plot_top + 1.0);
        let plot_height = plot_bottom - plot_top;

        let (min, max) = value_range(chart);
        let to_y = |v: f64| plot_top + (max - v) / (max - min) * plot_height;
        let zero_y = to_y(0.0);

        let ticks = (0..=TICK_COUNT)
            .map(|i| {
                let v = min + (max - min) * f64::from(i) / f64::from(TICK_COUNT);
                YAxisTick {
                    y: round2(to_y(v)),
                    label: format!("{v:.1}"),
                }
            })
            .collect();

        let count = u32::try_from(chart.bars.len()).unwrap_or(u32::MAX).max(1);
        let slot = (plot_right - plot_left) / f64::from(count);
        let bar_width = slot * BAR_FILL_RATIO;

        let bars = chart
            .bars
            .iter()
            .zip(0u32..)
            .map(|(bar, index)| {
                let temperature = if bar.temperature.is_finite() {
                    bar.temperature
                } else {
                    0.0
                };
                let x = plot_left + slot * f64::from(index) + (slot - bar_width) / 2.0;
                let end_y = to_y(temperature);
                let negative = temperature < 0.0;
                let (top, bar_height, value_y) = if negative {
                    (zero_y, end_y - zero_y, end_y + 16.0)
                } else {
                    (end_y, zero_y - end_y, end_y - 6.0)
                };

                LaidOutBar {
                    city: bar.city.clone(),
                    value_label: format!("{temperature:.1}°C"),
                    x: round2(x),
                    y: round2(top),
                    width: round2(bar_width),
                    height: round2(bar_height),
                    center_x: round2(x + bar_width / 2.0),
                    value_y: round2(value_y),
                    negative,
                }
            })
            .collect();

        Self {
            title: chart.title.clone(),
            x_label: chart.x_label.clone(),
            y_label: chart.y_label.clone(),
            width: chart.width,
            height: chart.height,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            zero_y: round2(zero_y),
            center_x: round2(width / 2.0),
            center_y: round2(height / 2.0),
            tick_label_x: plot_left - 8.0,
            category_label_y: round2(plot_bottom + 22.0),
            x_label_y: round2(height - 25.0),
            ticks,
            bars,
        }
    }
}
