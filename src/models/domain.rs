use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Commodity price summary grouped across trading locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCommodity {
    pub name: String,
    pub price: String,
    pub change: String,
    pub demand: String,
    pub locations: Vec<String>,
}

/// Single commodity trade route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRoute {
    pub name: String,
    pub price: String,
    pub change: String,
    pub route: String,
    pub profit: String,
}

/// Bounty contract from the missions feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub reward: String,
    pub location: String,
    pub difficulty: String,
    pub status: String,
}

/// News headline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub priority: String,
}

/// Normalized news payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub headlines: Vec<Headline>,
}

/// Radio programming guide
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammingGuide {
    pub metadata: GuideMetadata,
    pub time_slots: Vec<String>,
    pub days: Vec<String>,
    pub channels: IndexMap<String, Channel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideMetadata {
    pub version: String,
    pub last_updated: String,
    pub description: String,
    pub timezone: String,
    pub update_frequency: String,
    pub maintainer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Broadcast channel with its weekly schedule keyed by day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub description: String,
    pub frequency: String,
    #[serde(default)]
    pub programs: IndexMap<String, Vec<Program>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
