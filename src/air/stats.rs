//! AQI aggregation and per-city series

use crate::air::record::Record;
use crate::errors::{RecordError, Result};

/// Max/min/mean over the parsed AQI values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiSummary {
    pub max: i64,
    pub min: i64,
    pub avg: f64,
    pub count: usize,
}

/// Dates and AQI values for one city, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTrend {
    pub city: String,
    pub dates: Vec<String>,
    pub values: Vec<i64>,
}

/// Parse an AQI cell the way a person would write an integer
pub fn parse_aqi(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Summarize the `AQI` column.
///
/// Rows with a missing or empty AQI are skipped. Any malformed value fails the
/// whole summary with one aggregate error.
pub fn summarize(records: &[Record]) -> Result<AqiSummary> {
    let mut values = Vec::new();
    let mut invalid = Vec::new();

    for raw in records.iter().filter_map(|r| r.get_field("AQI")) {
        if raw.is_empty() {
            continue;
        }
        match parse_aqi(raw) {
            Some(v) => values.push(v),
            None => invalid.push(raw),
        }
    }

    if let Some(first) = invalid.first() {
        return Err(RecordError::InvalidAqi {
            invalid: invalid.len(),
            first: first.to_string(),
        });
    }

    let (Some(&max), Some(&min)) = (values.iter().max(), values.iter().min()) else {
        return Err(RecordError::NoNumericValues);
    };
    let avg = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;

    Ok(AqiSummary {
        max,
        min,
        avg,
        count: values.len(),
    })
}

/// Rows for `city`, up to `limit`
pub fn filter_city<'a>(records: &'a [Record], city: &str, limit: usize) -> Vec<&'a Record> {
    records.iter().filter(|r| r.is_city(city)).take(limit).collect()
}

/// Date/AQI series for `city`. Every matching row must carry an integer AQI.
pub fn city_trend(records: &[Record], city: &str) -> Result<CityTrend> {
    let rows: Vec<&Record> = records.iter().filter(|r| r.is_city(city)).collect();
    if rows.is_empty() {
        return Err(RecordError::CityNotFound {
            city: city.to_string(),
        });
    }

    let dates = rows
        .iter()
        .map(|r| r.get_field("Date").unwrap_or_default().to_string())
        .collect();

    let mut values = Vec::with_capacity(rows.len());
    let mut invalid = Vec::new();
    for raw in rows.iter().map(|r| r.get_field("AQI").unwrap_or_default()) {
        match parse_aqi(raw) {
            Some(v) => values.push(v),
            None => invalid.push(raw),
        }
    }

    if let Some(first) = invalid.first() {
        return Err(RecordError::InvalidAqi {
            invalid: invalid.len(),
            first: first.to_string(),
        });
    }

    Ok(CityTrend {
        city: city.to_string(),
        dates,
        values,
    })
}
