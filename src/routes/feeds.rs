use actix_web::{web, HttpResponse, Responder};
use crate::config::{LimitSettings, NewsSettings, Settings};
use crate::core::{
    candidate_dates, GuideError, market_fallback, missions_fallback, news_fallback, trade_fallback,
    transform_market_data, transform_missions_data, transform_news_data, transform_trade_data,
    NewsPayload,
};
use crate::models::{HealthResponse, LimitQuery, NewsQuery, ProgrammingGuide};
use crate::services::{UpstreamClient, UpstreamError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that prevent the application state from being built
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build upstream client: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Failed to load programming guide: {0}")]
    Guide(#[from] GuideError),
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub guide: Arc<ProgrammingGuide>,
    pub limits: LimitSettings,
    pub news: NewsSettings,
}

impl AppState {
    /// Build the shared state from loaded settings and the bundled guide
    pub fn from_settings(settings: &Settings) -> Result<Self, StartupError> {
        Ok(Self {
            upstream: Arc::new(UpstreamClient::new(&settings.upstream)?),
            guide: Arc::new(ProgrammingGuide::bundled()?),
            limits: settings.limits,
            news: settings.news,
        })
    }
}

/// Configure the proxied feed routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/market", web::get().to(market))
        .route("/trade", web::get().to(trade))
        .route("/missions", web::get().to(missions))
        .route("/news", web::get().to(news));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Commodity market summary
///
/// GET /api/market?limit={limit}
///
/// Proxies UEX Corp commodity prices and groups them by commodity.
async fn market(state: web::Data<AppState>, query: web::Query<LimitQuery>) -> impl Responder {
    let limit = query.resolve(state.limits.market_default_limit, state.limits.market_max_limit);

    match state.upstream.commodity_prices(limit).await {
        Ok(raw) => {
            let commodities =
                transform_market_data(&raw, state.limits.market_max_items, &mut rand::thread_rng());
            tracing::info!("Returning {} market commodities", commodities.len());
            HttpResponse::Ok().json(commodities)
        }
        Err(e) => {
            tracing::error!("Market API error: {}", e);
            HttpResponse::Ok().json(market_fallback(&e.to_string()))
        }
    }
}

/// Commodity trade routes
///
/// GET /api/trade?limit={limit}
async fn trade(state: web::Data<AppState>, query: web::Query<LimitQuery>) -> impl Responder {
    let limit = query.resolve(state.limits.trade_default_limit, state.limits.market_max_limit);

    match state.upstream.commodity_routes(limit).await {
        Ok(raw) => {
            let routes =
                transform_trade_data(&raw, state.limits.trade_max_items, &mut rand::thread_rng());
            tracing::info!("Returning {} trade routes", routes.len());
            HttpResponse::Ok().json(routes)
        }
        Err(e) => {
            tracing::error!("Trade API error: {}", e);
            HttpResponse::Ok().json(trade_fallback(&e.to_string()))
        }
    }
}

/// Bounty board
///
/// GET /api/missions
async fn missions(state: web::Data<AppState>) -> impl Responder {
    match state.upstream.missions().await {
        Ok(raw) => {
            let missions = transform_missions_data(&raw, state.limits.missions_max_items);
            tracing::info!("Returning {} missions", missions.len());
            HttpResponse::Ok().json(missions)
        }
        Err(e) => {
            tracing::error!("Missions API error: {}", e);
            HttpResponse::Ok().json(missions_fallback(&e.to_string()))
        }
    }
}

/// Daily news
///
/// GET /api/news?date={YYYY-MM-DD}
///
/// Tries the requested day first, then the days before today, and serves the
/// first file that exists.
async fn news(state: web::Data<AppState>, query: web::Query<NewsQuery>) -> impl Responder {
    let today = chrono::Utc::now().date_naive();
    let dates = candidate_dates(query.date.as_deref(), today, state.news.fallback_days);

    match fetch_news(&state.upstream, &dates).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(message) => {
            tracing::error!("News API error: {}", message);
            HttpResponse::Ok().json(news_fallback(&message))
        }
    }
}

async fn fetch_news(
    upstream: &UpstreamClient,
    dates: &[chrono::NaiveDate],
) -> Result<NewsPayload, String> {
    for (attempt, date) in dates.iter().enumerate() {
        match upstream.news(*date).await {
            Ok(raw) => {
                if attempt > 0 {
                    tracing::info!("Serving news from fallback date {}", date);
                }
                return Ok(transform_news_data(raw));
            }
            Err(e) if e.is_status() => {
                tracing::warn!("No news for {} ({}), trying an earlier date", date, e);
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Err("No news data available".to_string())
}

