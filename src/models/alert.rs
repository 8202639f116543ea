use serde::{Deserialize, Serialize};

/// A stored setup: inclusive RSI and MACD bands for one ticker.
///
/// `min <= max` is expected but never enforced; an inverted band simply
/// never matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub user_id: i64,
    pub ticker: String,
    pub rsi_min: f64,
    pub rsi_max: f64,
    pub macd_min: f64,
    pub macd_max: f64,
}

/// Insert payload for the `alerts` table (the store assigns the id).
#[derive(Debug, Clone, Serialize)]
pub struct NewAlert {
    pub user_id: i64,
    pub ticker: String,
    pub rsi_min: f64,
    pub rsi_max: f64,
    pub macd_min: f64,
    pub macd_max: f64,
}
