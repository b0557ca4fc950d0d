//! Template engine for rendered artifacts
//!
//! Uses Tera with templates compiled into the binary. The only artifact
//! rendered this way is the SVG temperature chart.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let svg = engine.render_temperature_chart(&chart)?;
//! ```

mod chart_layout;

pub use chart_layout::{ChartLayout, LaidOutBar, YAxisTick};

use std::sync::Arc;

use application::ports::TemperatureChart;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Name of the embedded chart template
pub const TEMPERATURE_CHART_TEMPLATE: &str = "chart/temperature.svg";

/// Embedded templates - compiled into the binary
mod embedded {
    #[allow(clippy::needless_raw_string_hashes)]
    pub const TEMPERATURE_CHART: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{{ width }}" height="{{ height }}" viewBox="0 0 {{ width }} {{ height }}" font-family="sans-serif">
  <rect x="0" y="0" width="{{ width }}" height="{{ height }}" fill="#ffffff"/>
  <text x="{{ center_x }}" y="32" font-size="20" text-anchor="middle">{{ title }}</text>
{% for tick in ticks %}  <line x1="{{ plot_left }}" y1="{{ tick.y }}" x2="{{ plot_right }}" y2="{{ tick.y }}" stroke="#e0e0e0"/>
  <text x="{{ tick_label_x }}" y="{{ tick.y }}" font-size="12" text-anchor="end" dominant-baseline="middle">{{ tick.label }}</text>
{% endfor %}{% for bar in bars %}  <rect x="{{ bar.x }}" y="{{ bar.y }}" width="{{ bar.width }}" height="{{ bar.height }}" fill="{% if bar.negative %}#4a90d9{% else %}#e8743b{% endif %}"><title>{{ bar.city }}: {{ bar.value_label }}</title></rect>
  <text x="{{ bar.center_x }}" y="{{ bar.value_y }}" font-size="12" text-anchor="middle">{{ bar.value_label }}</text>
  <text x="{{ bar.center_x }}" y="{{ category_label_y }}" font-size="13" text-anchor="middle">{{ bar.city }}</text>
{% endfor %}  <line x1="{{ plot_left }}" y1="{{ zero_y }}" x2="{{ plot_right }}" y2="{{ zero_y }}" stroke="#333333"/>
  <line x1="{{ plot_left }}" y1="{{ plot_top }}" x2="{{ plot_left }}" y2="{{ plot_bottom }}" stroke="#333333"/>
  <text x="{{ center_x }}" y="{{ x_label_y }}" font-size="14" text-anchor="middle">{{ x_label }}</text>
  <text x="22" y="{{ center_y }}" font-size="14" text-anchor="middle" transform="rotate(-90 22 {{ center_y }})">{{ y_label }}</text>
</svg>
"##;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create an engine with the embedded templates loaded
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        // City names end up in SVG text nodes.
        tera.autoescape_on(vec![".svg"]);

        tera.add_raw_template(TEMPERATURE_CHART_TEMPLATE, embedded::TEMPERATURE_CHART)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template from any serializable context value
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(data).map_err(|e| TemplateError::Render(e.to_string()))?;
        self.tera
            .render(template_name, &context)
            .map_err(TemplateError::from)
    }

    /// Render the temperature bar chart as an SVG document
    pub fn render_temperature_chart(
        &self,
        chart: &TemperatureChart,
    ) -> Result<String, TemplateError> {
        let layout = ChartLayout::compute(chart);
        debug!(bars = layout.bars.len(), "Rendering temperature chart");
        self.render(TEMPERATURE_CHART_TEMPLATE, &layout)
    }
}

#[cfg(test)]
mod tests {
    use application::ports::TemperatureBar;

    use super::*;

    fn chart(bars: &[(&str, f64)]) -> TemperatureChart {
        TemperatureChart {
            title: "Current Temperatures in Various Cities".to_string(),
            x_label: "City".to_string(),
            y_label: "Temperature (°C)".to_string(),
            width: 1000,
            height: 600,
            bars: bars
                .iter()
                .map(|(city, temperature)| TemperatureBar {
                    city: (*city).to_string(),
                    temperature: *temperature,
                })
                .collect(),
        }
    }

    #[test]
    fn test_template_engine_creation() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_chart_contains_labels_and_bars() {
        let engine = TemplateEngine::new().unwrap();
        let svg = engine
            .render_temperature_chart(&chart(&[("Tokyo", 8.2), ("Sydney", 24.0)]))
            .unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="1000""#));
        assert!(svg.contains(r#"height="600""#));
        assert!(svg.contains("Current Temperatures in Various Cities"));
        assert!(svg.contains(">City<"));
        assert!(svg.contains("Temperature (°C)"));
        assert!(svg.contains(">Tokyo<"));
        assert!(svg.contains(">Sydney<"));
        assert!(svg.contains("24.0°C"));
        assert_eq!(svg.matches("<rect").count(), 3);
    }

    #[test]
    fn test_city_names_are_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let svg = engine
            .render_temperature_chart(&chart(&[("A<B & C", 1.0)]))
            .unwrap();
        assert!(!svg.contains("A<B"));
        assert!(svg.contains("A&lt;B &amp; C"));
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("missing.svg", &serde_json::json!({}));
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }
}
