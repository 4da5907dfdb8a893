// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Channel, GuideMetadata, Headline, MarketCommodity, Mission, NewsFeed, Program, ProgrammingGuide, TradeRoute};
pub use requests::{GuideQuery, LimitQuery, NewsQuery};
pub use responses::{ErrorResponse, HealthResponse};
