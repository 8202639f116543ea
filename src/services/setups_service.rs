use serde::Serialize;

use crate::AppState;
use crate::models::Alert;
use crate::services::indicators::{self, IndicatorSnapshot};

/// One matched setup. `rsi` and `macd` are rounded to 2 decimals for
/// reporting; the band comparison itself always runs at full precision.
#[derive(Debug, Clone, Serialize)]
pub struct SetupMatch {
    pub ticker: String,
    pub rsi: f64,
    pub macd: f64,
    pub user_id: i64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Inclusive on all four bounds, AND semantics across the two dimensions.
pub fn band_match(alert: &Alert, snapshot: &IndicatorSnapshot) -> bool {
    alert.rsi_min <= snapshot.rsi
        && snapshot.rsi <= alert.rsi_max
        && alert.macd_min <= snapshot.macd
        && snapshot.macd <= alert.macd_max
}

/// Fresh evaluation of one ticker. Any failure along the way (fetch error,
/// empty series, undefined indicator) means "skip", never an error.
pub async fn evaluate_ticker(state: &AppState, ticker: &str) -> Option<IndicatorSnapshot> {
    let closes = match state.market.close_series(ticker).await {
        Ok(closes) => closes,
        Err(e) => {
            tracing::debug!("skipping {ticker}: {e}");
            return None;
        }
    };

    if closes.is_empty() {
        tracing::debug!("skipping {ticker}: no price data");
        return None;
    }

    indicators::latest_snapshot(&closes)
}

/// Reads every stored alert and evaluates each one's ticker fresh, one at a
/// time. A skipped ticker contributes no match and never aborts the
/// remaining evaluations.
pub async fn scan_for_matches(state: &AppState) -> Result<Vec<SetupMatch>, String> {
    let alerts = state.registry.list_all_alerts().await?;

    let mut matches = Vec::new();
    for alert in alerts {
        let Some(snapshot) = evaluate_ticker(state, &alert.ticker).await else {
            continue;
        };

        if band_match(&alert, &snapshot) {
            matches.push(SetupMatch {
                ticker: alert.ticker.clone(),
                rsi: round2(snapshot.rsi),
                macd: round2(snapshot.macd),
                user_id: alert.user_id,
            });
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(rsi_min: f64, rsi_max: f64, macd_min: f64, macd_max: f64) -> Alert {
        Alert {
            id: 1,
            user_id: 1,
            ticker: "AAPL".to_string(),
            rsi_min,
            rsi_max,
            macd_min,
            macd_max,
        }
    }

    fn snap(rsi: f64, macd: f64) -> IndicatorSnapshot {
        IndicatorSnapshot { rsi, macd }
    }

    #[test]
    fn snapshot_inside_both_bands_matches() {
        let a = alert(30.0, 70.0, -1.0, 1.0);
        assert!(band_match(&a, &snap(65.0, 0.2)));
    }

    #[test]
    fn snapshot_outside_rsi_band_does_not_match() {
        let a = alert(30.0, 70.0, -1.0, 1.0);
        assert!(!band_match(&a, &snap(75.0, 0.2)));
    }

    #[test]
    fn snapshot_outside_macd_band_does_not_match() {
        let a = alert(30.0, 70.0, -1.0, 1.0);
        assert!(!band_match(&a, &snap(65.0, 1.5)));
    }

    #[test]
    fn band_edges_are_inclusive() {
        let a = alert(30.0, 70.0, -1.0, 1.0);
        assert!(band_match(&a, &snap(30.0, 0.0)));
        assert!(band_match(&a, &snap(70.0, 0.0)));
        assert!(band_match(&a, &snap(50.0, -1.0)));
        assert!(band_match(&a, &snap(50.0, 1.0)));
    }

    #[test]
    fn inverted_band_never_matches() {
        let a = alert(70.0, 30.0, -1.0, 1.0);
        assert!(!band_match(&a, &snap(50.0, 0.0)));
    }

    #[test]
    fn comparison_uses_full_precision() {
        // 70.004 rounds to 70.00 for display, but it is still out of band.
        let a = alert(30.0, 70.0, -1.0, 1.0);
        assert!(!band_match(&a, &snap(70.004, 0.0)));
    }

    #[test]
    fn round2_rounds_to_two_decimals() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(100.0), 100.0);
    }
}
