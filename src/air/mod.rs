//! Air Quality Data Visualizer
//!
//! Loads a CSV of readings (any columns; `City`, `Date` and `AQI` are the ones
//! the queries understand), previews and filters rows, summarizes AQI and
//! charts a city's AQI over time.

pub mod chart;
pub mod loader;
pub mod menu;
pub mod record;
pub mod resolver;
pub mod stats;

pub use chart::ChartRenderer;
pub use menu::{AirCommand, AirQualityMenu};
pub use record::{Dataset, Record};
pub use resolver::PathResolver;
pub use stats::{AqiSummary, CityTrend};

use std::path::PathBuf;

use crate::errors::{RecordError, Result};

/// Session state for the air-quality tool
#[derive(Debug, Clone)]
pub struct AirQualityTool {
    dataset: Dataset,
    resolver: PathResolver,
}

impl AirQualityTool {
    pub fn new(resolver: PathResolver) -> Self {
        AirQualityTool {
            dataset: Dataset::default(),
            resolver,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Resolve `file_name`, parse it and replace the dataset.
    ///
    /// On any failure the current dataset is left as it was.
    pub fn load_data(&mut self, file_name: &str) -> Result<PathBuf> {
        let resolved = self.resolver.resolve(file_name)?;
        let records = loader::read_csv(&resolved)?;
        self.dataset = Dataset::new(records, resolved.clone());
        Ok(resolved)
    }

    /// First `count` rows in load order
    pub fn preview(&self, count: usize) -> Result<&[Record]> {
        let records = self.dataset.require_loaded()?;
        Ok(&records[..count.min(records.len())])
    }

    /// Up to `limit` rows whose `City` matches, ignoring case
    pub fn filter_by_city(&self, city: &str, limit: usize) -> Result<Vec<&Record>> {
        let records = self.dataset.require_loaded()?;
        let found = stats::filter_city(records, city, limit);
        if found.is_empty() {
            return Err(RecordError::CityNotFound {
                city: city.to_string(),
            });
        }
        Ok(found)
    }

    /// Max/min/average of the AQI column
    pub fn summary(&self) -> Result<AqiSummary> {
        stats::summarize(self.dataset.require_loaded()?)
    }

    /// Date/AQI series for `city`, in file order
    pub fn trend(&self, city: &str) -> Result<CityTrend> {
        stats::city_trend(self.dataset.require_loaded()?, city)
    }

    /// Chart `city`'s trend; no file is written if the series is unusable
    pub fn plot_city(&self, city: &str, renderer: &ChartRenderer) -> Result<PathBuf> {
        let trend = self.trend(city)?;
        renderer.render(&trend)
    }
}

impl Default for AirQualityTool {
    fn default() -> Self {
        Self::new(PathResolver::default())
    }
}
