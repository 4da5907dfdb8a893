//! HCN Radio API - data relay for the HCN Radio front-end
//!
//! Proxies the UEX Corp commodity API and the HCN news and bounty feeds,
//! reshapes their responses into the shapes the client expects, and serves
//! the station's programming guide. Every proxied endpoint degrades to a
//! fixed placeholder payload when its upstream is unavailable.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{transform_market_data, transform_missions_data, transform_news_data, transform_trade_data, NewsPayload};
pub use models::{Headline, MarketCommodity, Mission, NewsFeed, ProgrammingGuide, TradeRoute};
pub use routes::{configure_routes, handle_query_payload_error, AppState};
