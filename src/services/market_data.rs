use chrono::{Duration, Utc};
use reqwest::Client;
use serde::Deserialize;

/// Client for the chart endpoint that backs ticker evaluation.
///
/// The window is fixed: hourly bars over the trailing 7 calendar days.
#[derive(Clone)]
pub struct MarketDataClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartSlice>>,
}

#[derive(Debug, Deserialize)]
struct ChartSlice {
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl MarketDataClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Hourly closes for the trailing week, oldest first. Bars without a
    /// close are dropped. A symbol with no data yields an empty series,
    /// which is a normal outcome rather than an error.
    pub async fn close_series(&self, ticker: &str) -> Result<Vec<f64>, String> {
        let now = Utc::now();
        let week_ago = now - Duration::days(7);

        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("interval", "1h".to_string()),
                ("period1", week_ago.timestamp().to_string()),
                ("period2", now.timestamp().to_string()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("chart fetch for {ticker} failed: {status} {body}"));
        }

        let parsed = res
            .json::<ChartResponse>()
            .await
            .map_err(|e| e.to_string())?;

        let closes = parsed
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|slice| slice.indicators.quote.into_iter().next())
            .map(|q| q.close.into_iter().flatten().collect())
            .unwrap_or_default();

        Ok(closes)
    }
}
