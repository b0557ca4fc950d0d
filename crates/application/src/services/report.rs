//! Text report and chart model construction

use domain::CityRecord;

use crate::ports::{TemperatureBar, TemperatureChart};

/// Line closing each city block
pub const REPORT_SEPARATOR: &str = "==================================================";

pub const CHART_TITLE: &str = "Current Temperatures in Various Cities";
pub const CHART_X_LABEL: &str = "City";
pub const CHART_Y_LABEL: &str = "Temperature (°C)";
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;

/// Render one city's block, ending with the separator line
pub fn render_city_block(record: &CityRecord) -> String {
    let mut parts = Vec::new();

    parts.push(format!("City: {}", record.city));
    parts.push(format!(
        "Current Weather: {}, {}",
        record.temperature_display(),
        record.current_weather.description
    ));

    parts.push("5-Day Forecast:".to_string());
    for point in &record.forecast {
        parts.push(format!(
            "Date: {}, Temp: {}, Description: {}",
            point.date,
            point.temperature_display(),
            point.description
        ));
    }

    parts.push("Top 3 News Headlines:".to_string());
    for headline in &record.news_headlines {
        parts.push(format!("- {headline}"));
    }
    parts.push(REPORT_SEPARATOR.to_string());

    let mut block = parts.join("\n");
    block.push('\n');
    block
}

/// Concatenate the blocks of all records in order
pub fn render_text_report(records: &[CityRecord]) -> String {
    records.iter().map(render_city_block).collect()
}

/// Bar chart of current temperature per city, in record order
pub fn build_temperature_chart(records: &[CityRecord]) -> TemperatureChart {
    TemperatureChart {
        title: CHART_TITLE.to_string(),
        x_label: CHART_X_LABEL.to_string(),
        y_label: CHART_Y_LABEL.to_string(),
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        bars: records
            .iter()
            .map(|r| TemperatureBar {
                city: r.city.clone(),
                temperature: r.current_weather.temperature,
            })
            .collect(),
    }
}
