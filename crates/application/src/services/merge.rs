//! Per-city merging of weather, forecast and news into a [`CityRecord`]

use domain::{
    CityRecord, CurrentConditions, FORECAST_SAMPLE_STRIDE, ForecastPoint, MAX_HEADLINES,
    NO_NEWS_HEADLINE,
};
use tracing::info;

use crate::ports::{ForecastEntry, ForecastSeries, NewsFeed};

/// Every eighth entry starting at index 0, i.e. about one per day
///
/// Yields `ceil(n / 8)` points in provider order.
pub fn sample_daily_forecast(entries: &[ForecastEntry]) -> Vec<ForecastPoint> {
    entries
        .iter()
        .step_by(FORECAST_SAMPLE_STRIDE)
        .map(|entry| ForecastPoint {
            date: entry.timestamp.clone(),
            temperature: entry.temperature,
            description: entry.description.clone(),
        })
        .collect()
}

/// First three titles, or the placeholder when there is nothing to show
pub fn top_headlines(news: Option<&NewsFeed>) -> Vec<String> {
    let titles: Vec<String> = news
        .map(|feed| {
            feed.articles
                .iter()
                .take(MAX_HEADLINES)
                .map(|a| a.title.clone())
                .collect()
        })
        .unwrap_or_default();

    if titles.is_empty() {
        vec![NO_NEWS_HEADLINE.to_string()]
    } else {
        titles
    }
}

/// Combine one city's fetch results
///
/// Returns `None` when either weather half is missing. Missing or empty news
/// never drops the record.
pub fn merge_city_data(
    city: &str,
    current: Option<CurrentConditions>,
    forecast: Option<ForecastSeries>,
    news: Option<&NewsFeed>,
) -> Option<CityRecord> {
    let (Some(current_weather), Some(forecast)) = (current, forecast) else {
        info!("Skipping city {city} due to missing data.");
        return None;
    };

    Some(CityRecord {
        city: city.to_string(),
        current_weather,
        forecast: sample_daily_forecast(&forecast.entries),
        news_headlines: top_headlines(news),
    })
}
