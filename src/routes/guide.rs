use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use validator::Validate;
use crate::core::GuideError;
use crate::models::{ErrorResponse, GuideQuery};
use crate::routes::feeds::AppState;

/// Configure the programming guide route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/guide")
            .route(web::get().to(programming_guide))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Programming guide endpoint
///
/// GET /api/guide
/// GET /api/guide?channel={channelId}
///
/// Without a channel the whole guide is returned. With one, only that
/// channel's schedule plus the shared metadata, time slots and days.
async fn programming_guide(
    state: web::Data<AppState>,
    query: web::Query<GuideQuery>,
) -> impl Responder {
    // An empty ?channel= is treated the same as no channel
    let channel = query
        .channel
        .as_deref()
        .filter(|_| query.validate().is_ok());

    match channel {
        Some(channel_id) => match state.guide.channel_guide(channel_id) {
            Ok(view) => json_or_internal_error(&view),
            Err(GuideError::ChannelNotFound(id)) => {
                tracing::info!("Programming guide requested for unknown channel: {}", id);
                HttpResponse::NotFound().json(ErrorResponse {
                    error: "Channel not found".to_string(),
                    message: format!("No channel with id '{}'", id),
                    status_code: 404,
                })
            }
            Err(e) => {
                tracing::error!("Programming guide API error: {}", e);
                internal_error()
            }
        },
        None => json_or_internal_error(state.guide.as_ref()),
    }
}

fn json_or_internal_error<T: Serialize>(body: &T) -> HttpResponse {
    match serde_json::to_value(body) {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => {
            tracing::error!("Programming guide API error: {}", e);
            internal_error()
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Internal server error".to_string(),
        message: "Failed to fetch programming guide".to_string(),
        status_code: 500,
    })
}

async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(ErrorResponse {
        error: "Method not allowed".to_string(),
        message: "Only GET is supported on the programming guide".to_string(),
        status_code: 405,
    })
}
