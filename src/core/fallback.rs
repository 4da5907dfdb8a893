//! Placeholder payloads served when an upstream feed cannot be read.
//!
//! Each carries the failure message inline so the front-end shows what went
//! wrong instead of an empty panel.

use crate::models::{Headline, MarketCommodity, Mission, NewsFeed, TradeRoute};

fn commodity(name: &str, price: &str, change: &str, demand: &str, locations: &[&str]) -> MarketCommodity {
    MarketCommodity {
        name: name.to_string(),
        price: price.to_string(),
        change: change.to_string(),
        demand: demand.to_string(),
        locations: locations.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn market_fallback(message: &str) -> Vec<MarketCommodity> {
    vec![
        MarketCommodity {
            name: "Market API Error".to_string(),
            price: "N/A".to_string(),
            change: "0.0".to_string(),
            demand: "Unknown".to_string(),
            locations: vec![format!("UEX Corp API Error: {}", message)],
        },
        commodity("Quantum Fuel", "1.50", "+0.05", "High", &["Port Olisar", "Grim HEX", "Levski"]),
        commodity("Ship Components", "125.00", "-2.1", "Very High", &["Area18", "New Babbage"]),
        commodity("Agricultural Supplies", "0.85", "+1.2", "Moderate", &["Lorville", "Tressler"]),
    ]
}

fn trade_route(name: &str, price: &str, change: &str, route: &str, profit: &str) -> TradeRoute {
    TradeRoute {
        name: name.to_string(),
        price: price.to_string(),
        change: change.to_string(),
        route: route.to_string(),
        profit: profit.to_string(),
    }
}

pub fn trade_fallback(message: &str) -> Vec<TradeRoute> {
    vec![
        TradeRoute {
            name: "Trade API Error".to_string(),
            price: "N/A".to_string(),
            change: "0.0".to_string(),
            route: "UEX Corp → Error".to_string(),
            profit: format!("Connection Failed: {}", message),
        },
        trade_route("Medical Supplies", "28.50", "+2.3", "Port Olisar → New Babbage", "12500"),
        trade_route("Processed Food", "1.45", "-0.8", "ArcCorp → Lorville", "8750"),
        trade_route("Titanium Ore", "8.20", "+5.2", "Daymar → Area18", "15200"),
    ]
}

pub fn missions_fallback(message: &str) -> Vec<Mission> {
    let mission = |title: &str, description: String, reward: &str, location: &str, difficulty: &str, status: &str| Mission {
        id: None,
        title: title.to_string(),
        description,
        reward: reward.to_string(),
        location: location.to_string(),
        difficulty: difficulty.to_string(),
        status: status.to_string(),
    };

    vec![
        mission(
            "Contract Database Error",
            format!("Unable to connect to missions database: {}", message),
            "N/A",
            "System Error",
            "HIGH",
            "Connection Failed",
        ),
        mission(
            "Bounty System Status",
            "Checking GitHub repository for bounty data availability".to_string(),
            "Diagnostic",
            "HCN Network",
            "MEDIUM",
            "Investigating",
        ),
        mission(
            "Sample Mission Alpha",
            "Eliminate pirate threats in Crusader space - high value target confirmed".to_string(),
            "45000 aUEC",
            "Crusader System",
            "HIGH",
            "Available",
        ),
    ]
}

pub fn news_fallback(message: &str) -> NewsFeed {
    let headline = |title: &str, summary: String, source: &str, priority: &str| Headline {
        title: title.to_string(),
        summary,
        source: source.to_string(),
        priority: priority.to_string(),
    };

    NewsFeed {
        headlines: vec![
            headline(
                "HCN Network Operational",
                "All systems functioning normally - live data feed active".to_string(),
                "HCN Operations",
                "NORMAL",
            ),
            headline(
                "News Feed Status",
                "External news sources temporarily unavailable, checking GitHub repository".to_string(),
                "System Monitor",
                "HIGH",
            ),
            headline("API Connection Notice", format!("Error: {}", message), "Debug System", "HIGH"),
        ],
    }
}
