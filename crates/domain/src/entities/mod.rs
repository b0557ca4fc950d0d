//! Domain entities - Objects produced once per city per run

mod city_record;

pub use city_record::{
    CityRecord, CurrentConditions, FORECAST_SAMPLE_STRIDE, ForecastPoint, MAX_HEADLINES,
    NO_NEWS_HEADLINE,
};
