use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use volterra_nav::Market;

/// Last trade snapshot with the IV rank the analyze view leads with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub market: Market,
    pub last: f64,
    pub change: f64,
    pub change_pct: f64,
    pub iv_rank: Option<f64>,
    pub as_of: DateTime<Utc>,
}

/// Aggregated options-flow sentiment for one underlying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub symbol: String,
    pub put_call_ratio: f64,
    pub score: f64,
    pub as_of: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub market: Market,
    #[serde(default)]
    pub note: Option<String>,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub market: Market,
    pub quantity: f64,
    pub avg_price: f64,
    pub mark: f64,
    pub unrealized_pnl: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCondition {
    PriceAbove,
    PriceBelow,
    IvRankAbove,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: u64,
    pub symbol: String,
    pub market: Market,
    pub condition: AlertCondition,
    pub threshold: f64,
    pub triggered: bool,
}

/// Parameters for creating an alert; the server assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewAlert {
    pub symbol: String,
    pub market: Market,
    pub condition: AlertCondition,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperAccount {
    pub equity: f64,
    pub cash: f64,
    pub day_pnl: f64,
    pub open_positions: u32,
}

/// One row of the unusual-activity scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerRow {
    pub symbol: String,
    pub market: Market,
    pub last: f64,
    pub volume_ratio: f64,
    pub iv_rank: f64,
}
