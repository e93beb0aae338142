use std::env::{self, VarError};
use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::builder::PlaylistBuilder;
use crate::clients::{
    billboard::{BillboardClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
    catalog::TrackCatalog,
    entities::Playlist,
    errors::{Error, FetchError, Result},
};

const CHART_URL_VAR: &str = "RCHARTS_CHART_URL";
const TIMEOUT_VAR: &str = "RCHARTS_TIMEOUT_SECS";

/// Configuration for the [`App`] struct
pub struct Config<C> {
    /// Chart page client
    pub chart: BillboardClient,
    /// Track catalog the playlist is built on
    pub catalog: C,
}

/// Builder for [`Config`]; unset values fall back to the environment, then to defaults.
pub struct ConfigBuilder<C> {
    catalog: Option<C>,
    chart_url: Option<String>,
    timeout: Option<Duration>,
}

impl<C: TrackCatalog> Default for ConfigBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TrackCatalog> ConfigBuilder<C> {
    /// Start with nothing configured
    pub fn new() -> Self {
        Self {
            catalog: None,
            chart_url: None, // Falls back to RCHARTS_CHART_URL, then billboard.com
            timeout: None,   // Falls back to RCHARTS_TIMEOUT_SECS, then 10 seconds
        }
    }

    /// Track catalog to build playlists on (required)
    #[must_use]
    pub fn catalog(mut self, catalog: C) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Base URL of the chart site
    #[must_use]
    pub fn chart_url(mut self, url: impl Into<String>) -> Self {
        self.chart_url = Some(url.into());
        self
    }

    /// Per-request timeout for chart fetches; must be non-zero
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve every setting and build the chart client
    pub fn build(self) -> Result<Config<C>> {
        let catalog = self
            .catalog
            .ok_or_else(|| Error::ConfigurationError("No track catalog configured".into()))?;
        let chart_url = match self.chart_url {
            Some(url) => url,
            None => env_override(CHART_URL_VAR)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        let timeout = match self.timeout {
            Some(t) => t,
            None => match env_override(TIMEOUT_VAR)? {
                Some(secs) => parse_timeout_secs(&secs)?,
                None => DEFAULT_TIMEOUT,
            },
        };
        if timeout.is_zero() {
            return Err(Error::ConfigurationError(
                "Chart request timeout must be greater than zero".into(),
            ));
        }
        debug!("Chart source {chart_url}, timeout {timeout:?}");
        Ok(Config {
            chart: BillboardClient::new(chart_url, timeout)?,
            catalog,
        })
    }
}

fn parse_timeout_secs(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(Error::ConfigurationError(format!(
            "{TIMEOUT_VAR} must be greater than zero"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(Error::ConfigurationError(format!(
            "{TIMEOUT_VAR}={value:?} is not a number of seconds: {e}"
        ))),
    }
}

fn env_override(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Result of one [`App::run`]
#[derive(Debug)]
pub enum RunOutcome {
    /// The chart page could not be retrieved; treated as an empty chart.
    FetchFailed(FetchError),
    /// The page was retrieved but held no chart rows.
    NoEntries,
    /// A playlist was created from the chart.
    Created {
        /// The created playlist and the tracks added to it
        playlist: Playlist,
        /// Number of entries on the chart
        chart_size: usize,
    },
}

/// Runs the chart -> playlist pipeline exactly once
pub struct App<C> {
    chart: BillboardClient,
    builder: PlaylistBuilder<C>,
}

impl<C: TrackCatalog> App<C> {
    /// Wire up the chart client and playlist builder
    pub fn new(config: Config<C>) -> Self {
        App {
            chart: config.chart,
            builder: PlaylistBuilder::new(config.catalog),
        }
    }

    /// The injected track catalog
    pub fn catalog(&self) -> &C {
        self.builder.catalog()
    }

    /// Fetch the chart for `date` and, when it has entries, build its playlist.
    pub async fn run(&self, date: NaiveDate) -> Result<RunOutcome> {
        info!("Starting playlist build for {date} ...");
        let entries = match self.chart.fetch(date).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Failed to fetch chart for {date}: {err}");
                return Ok(RunOutcome::FetchFailed(err));
            }
        };

        if entries.is_empty() {
            info!("No chart entries found for {date}");
            return Ok(RunOutcome::NoEntries);
        }
        debug!("Fetched {} chart entries", entries.len());

        let user_id = self.builder.catalog().current_user_id().await?;
        let label = date.format("%Y-%m-%d").to_string();
        let playlist = self.builder.create_playlist(&user_id, &label, &entries).await?;

        info!("Playlist build for {date} completed");
        Ok(RunOutcome::Created {
            playlist,
            chart_size: entries.len(),
        })
    }
}
