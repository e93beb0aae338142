use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, info};

use crate::clients::{
    entities::ChartEntry,
    errors::{FetchError, Result},
};
use crate::parser::parse_chart;

/// Chart site used unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://www.billboard.com";
/// Per-request timeout used unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches and parses weekly Hot 100 pages.
pub struct BillboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl BillboardClient {
    /// Client for the chart site at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(BillboardClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Page URL of the chart for the week of `date`
    pub fn chart_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/charts/hot-100/{}",
            self.base_url,
            date.format("%Y-%m-%d")
        )
    }

    /// Single attempt, bounded by the client timeout. Any transport failure or
    /// non-2xx status comes back as a tagged [`FetchError`] for the caller to report.
    pub async fn fetch(&self, date: NaiveDate) -> std::result::Result<Vec<ChartEntry>, FetchError> {
        let url = self.chart_url(date);
        info!("Fetching data from: {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let entries = parse_chart(&body);
        debug!("Parsed {} chart entries from {url}", entries.len());
        Ok(entries)
    }
}
