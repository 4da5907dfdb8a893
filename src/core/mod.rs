// Normalization exports
pub mod fallback;
pub mod fields;
pub mod guide;
pub mod market;
pub mod missions;
pub mod news;
pub mod trade;

pub use fallback::{market_fallback, missions_fallback, news_fallback, trade_fallback};
pub use guide::{ChannelGuide, GuideError};
pub use market::transform_market_data;
pub use missions::transform_missions_data;
pub use news::{candidate_dates, transform_news_data, NewsPayload};
pub use trade::transform_trade_data;
