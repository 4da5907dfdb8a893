use crate::core::fields::{number, records, text, to_fixed};
use crate::models::MarketCommodity;
use rand::Rng;
use serde_json::Value;

/// Demand levels assigned to commodity groups
pub const DEMAND_LEVELS: [&str; 5] = ["Low", "Moderate", "High", "Very High", "Critical"];

struct CommodityGroup {
    summary: MarketCommodity,
    total_price: f64,
    count: u32,
}

/// Group UEX commodity price rows by commodity name
///
/// Each row is one commodity at one terminal. Rows sharing a name collapse
/// into a single entry whose price is the mean of all rows and whose
/// locations are the distinct places seen, in first-seen order. At most
/// `max_items` groups are returned.
pub fn transform_market_data<R: Rng>(
    raw: &Value,
    max_items: usize,
    rng: &mut R,
) -> Vec<MarketCommodity> {
    let mut groups: Vec<CommodityGroup> = Vec::new();

    for item in records(raw, &["data", "commodities"]) {
        let name = text(item, &["commodity_name", "name", "commodity"])
            .unwrap_or_else(|| "Unknown".to_string());
        let location = text(item, &["planet_name", "station_name", "location"])
            .unwrap_or_else(|| "Unknown".to_string());
        let price = number(item, &["price_buy", "price", "buy_price"]);

        match groups.iter_mut().find(|g| g.summary.name == name) {
            Some(group) => {
                if !group.summary.locations.contains(&location) {
                    group.summary.locations.push(location);
                }
                group.total_price += price;
                group.count += 1;
                group.summary.price = to_fixed(group.total_price / group.count as f64, 2);
            }
            None => groups.push(CommodityGroup {
                summary: MarketCommodity {
                    name,
                    price: to_fixed(price, 2),
                    change: random_change(rng),
                    demand: random_demand(rng).to_string(),
                    locations: vec![location],
                },
                total_price: price,
                count: 1,
            }),
        }
    }

    groups
        .into_iter()
        .take(max_items)
        .map(|g| g.summary)
        .collect()
}

fn random_change<R: Rng>(rng: &mut R) -> String {
    to_fixed(rng.gen_range(-6.0..6.0), 1)
}

fn random_demand<R: Rng>(rng: &mut R) -> &'static str {
    DEMAND_LEVELS[rng.gen_range(0..DEMAND_LEVELS.len())]
}
