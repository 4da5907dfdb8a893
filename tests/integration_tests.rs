// Integration tests for the HCN Radio API endpoints

use actix_web::{http::StatusCode, test, web, web::Bytes, App};
use chrono::{Duration, Utc};
use hcn_radio_api::config::Settings;
use hcn_radio_api::core::{market_fallback, missions_fallback, news_fallback, trade_fallback};
use hcn_radio_api::{configure_routes, handle_query_payload_error, AppState};
use mockito::Matcher;
use serde_json::{json, Value};

fn settings_for(base: &str) -> Settings {
    let mut settings = Settings::default();
    settings.upstream.uex_base_url = format!("{}/2.0", base);
    settings.upstream.news_base_url = format!("{}/news", base);
    settings.upstream.missions_url = format!("{}/bounty/list.json", base);
    settings.upstream.timeout_secs = 5;
    settings
}

async fn request_raw(settings: &Settings, method: &str, uri: &str) -> (StatusCode, Bytes) {
    let state = AppState::from_settings(settings).unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = match method {
        "POST" => test::TestRequest::post(),
        _ => test::TestRequest::get(),
    }
    .uri(uri)
    .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body(resp).await)
}

async fn request(settings: &Settings, method: &str, uri: &str) -> (StatusCode, Value) {
    let (status, body) = request_raw(settings, method, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get(settings: &Settings, uri: &str) -> (StatusCode, Value) {
    request(settings, "GET", uri).await
}

#[actix_web::test]
async fn test_health() {
    let (status, body) = get(&Settings::default(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_market_groups_upstream_prices() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/2.0/commodities_prices")
        .match_query(Matcher::UrlEncoded("limit".into(), "30".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"status": "ok", "data": [
                {"commodity_name": "Laranite", "planet_name": "Lorville", "price_buy": 28.0},
                {"commodity_name": "Laranite", "planet_name": "ArcCorp", "price_buy": 32.0},
                {"commodity_name": "Titanium", "station_name": "Everus Harbor", "price_buy": 8.2},
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/market").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item.as_object().unwrap().len(), 5);
    }
    assert_eq!(items[0]["name"], "Laranite");
    assert_eq!(items[0]["price"], "30.00");
    assert_eq!(items[0]["locations"], json!(["Lorville", "ArcCorp"]));
    assert_eq!(items[1]["locations"], json!(["Everus Harbor"]));

    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_market_forwards_limit_and_caps_groups() {
    let mut server = mockito::Server::new_async().await;
    let rows: Vec<Value> = (0..50)
        .map(|i| json!({"commodity_name": format!("Commodity {}", i), "price_buy": i + 1}))
        .collect();
    let upstream = server
        .mock("GET", "/2.0/commodities_prices")
        .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
        .with_status(200)
        .with_body(Value::Array(rows).to_string())
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/market?limit=50").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 12);
    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_market_upstream_failure_returns_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2.0/commodities_prices")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/market").await;

    assert_eq!(status, StatusCode::OK);
    let expected = serde_json::to_value(market_fallback("HTTP 503: Failed to fetch market data")).unwrap();
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn test_unusable_limit_forwards_default() {
    for uri in ["/api/market?limit=", "/api/market?limit=lots"] {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("GET", "/2.0/commodities_prices")
            .match_query(Matcher::UrlEncoded("limit".into(), "30".into()))
            .with_status(200)
            .with_body(json!({"data": [{"commodity_name": "Gold", "price_buy": 6.0}]}).to_string())
            .create_async()
            .await;

        let (status, body) = get(&settings_for(&server.url()), uri).await;

        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body[0]["name"], "Gold");
        upstream.assert_async().await;
    }
}

#[actix_web::test]
async fn test_malformed_guide_query_is_rejected() {
    let (status, body) = get(&Settings::default(), "/api/guide?channel=hcn-01&channel=hcn-02").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_query");
}

#[actix_web::test]
async fn test_trade_routes() {
    let mut server = mockito::Server::new_async().await;
    let routes: Vec<Value> = (0..15)
        .map(|i| json!({
            "commodity_name": format!("Cargo {}", i),
            "price_buy": 10.0,
            "price_sell": 13.0,
            "origin_planet": "Daymar",
            "destination_planet": "Area18",
        }))
        .collect();
    server
        .mock("GET", "/2.0/commodities_routes")
        .match_query(Matcher::UrlEncoded("limit".into(), "20".into()))
        .with_status(200)
        .with_body(json!({"data": routes}).to_string())
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/trade").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["route"], "Daymar → Area18");
    assert_eq!(items[0]["change"], "30.0");
    assert_eq!(items[0]["profit"], "3");
}

#[actix_web::test]
async fn test_trade_unreachable_upstream_returns_fallback() {
    let (status, body) = get(&settings_for("http://127.0.0.1:1"), "/api/trade").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), trade_fallback("").len());
    assert_eq!(items[0]["name"], "Trade API Error");
    assert!(items[0]["profit"].as_str().unwrap().starts_with("Connection Failed: "));
    assert_eq!(items[1], serde_json::to_value(&trade_fallback("")[1]).unwrap());
}

#[actix_web::test]
async fn test_missions_are_capped() {
    let mut server = mockito::Server::new_async().await;
    let bounties: Vec<Value> = (0..25)
        .map(|i| json!({"id": format!("b-{}", i), "title": format!("Target {}", i), "reward": 1000 * i}))
        .collect();
    server
        .mock("GET", "/bounty/list.json")
        .with_status(200)
        .with_body(json!({"bounties": bounties}).to_string())
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/missions").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], "b-0");
    assert_eq!(items[0]["reward"], "Negotiable");
    assert_eq!(items[3]["reward"], "3000 aUEC");
    assert_eq!(items[0].as_object().unwrap().len(), 7);
}

#[actix_web::test]
async fn test_missions_invalid_json_returns_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/bounty/list.json")
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/missions").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), missions_fallback("").len());
    assert_eq!(items[0]["title"], "Contract Database Error");
    assert!(items[0].get("id").is_none());
}

#[actix_web::test]
async fn test_missions_null_body_returns_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/bounty/list.json")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/missions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::to_value(missions_fallback("Invalid response format: Empty missions data")).unwrap()
    );
}

fn days_ago(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[actix_web::test]
async fn test_news_falls_back_to_yesterday() {
    let mut server = mockito::Server::new_async().await;
    let yesterday = days_ago(1);
    let document = json!({
        "date": yesterday,
        "headlines": [{"title": "Jump point discovered", "category": "exploration"}],
        "weather": {"Stanton": "clear"}
    });
    let missing = server
        .mock("GET", "/news/2954-03-02.json")
        .with_status(404)
        .create_async()
        .await;
    let previous = server
        .mock("GET", format!("/news/{}.json", yesterday).as_str())
        .with_status(200)
        .with_body(document.to_string())
        .create_async()
        .await;
    let day_before_request = server
        .mock("GET", "/news/2954-03-01.json")
        .with_status(200)
        .with_body(json!({"date": "2954-03-01", "headlines": []}).to_string())
        .expect(0)
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/news?date=2954-03-02").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, document);
    missing.assert_async().await;
    previous.assert_async().await;
    day_before_request.assert_async().await;
}

#[actix_web::test]
async fn test_news_passthrough_keeps_key_order() {
    let mut server = mockito::Server::new_async().await;
    let document = r#"{"metadata":{"edition":"evening"},"weather":{"Stanton":"clear"},"headlines":[{"title":"Convoy arrives","priority":"HIGH"}],"date":"2954-03-02"}"#;
    server
        .mock("GET", "/news/2954-03-02.json")
        .with_status(200)
        .with_body(document)
        .create_async()
        .await;

    let (status, body) = request_raw(&settings_for(&server.url()), "GET", "/api/news?date=2954-03-02").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(std::str::from_utf8(&body).unwrap(), document);
}

#[actix_web::test]
async fn test_news_normalizes_unrecognized_shape() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/news/2954-03-02.json")
        .with_status(200)
        .with_body(json!({"articles": [{"headline": "Quiet day", "author": "R. Vane"}]}).to_string())
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/news?date=2954-03-02").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"headlines": [{
            "title": "Quiet day",
            "summary": "Full story available on request",
            "source": "R. Vane",
            "priority": "BREAKING"
        }]})
    );
}

#[actix_web::test]
async fn test_news_unavailable_returns_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/news/.*\.json$".to_string()))
        .with_status(404)
        .expect(2)
        .create_async()
        .await;

    let (status, body) = get(&settings_for(&server.url()), "/api/news?date=2954-03-02").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(news_fallback("No news data available")).unwrap());
}

#[actix_web::test]
async fn test_guide_full_and_single_channel() {
    let settings = Settings::default();

    let (status, body) = get(&settings, "/api/guide").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["channels"].as_object().unwrap().len(), 4);
    assert_eq!(body["timeSlots"].as_array().unwrap().len(), 12);

    let (status, body) = get(&settings, "/api/guide?channel=hcn-02").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["channel"]["name"], "Radio Two");
    assert_eq!(body["days"].as_array().unwrap().len(), 7);
    assert!(body.get("metadata").is_some());
    assert!(body.get("channels").is_none());
}

#[actix_web::test]
async fn test_guide_unknown_channel_is_not_found() {
    let (status, body) = get(&Settings::default(), "/api/guide?channel=hcn-99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Channel not found");
}

#[actix_web::test]
async fn test_guide_empty_channel_returns_full_guide() {
    let (status, body) = get(&Settings::default(), "/api/guide?channel=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("channels").is_some());
}

#[actix_web::test]
async fn test_guide_rejects_other_methods() {
    let (status, body) = request(&Settings::default(), "POST", "/api/guide").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}
