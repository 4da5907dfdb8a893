use crate::core::fields::{first_present, records, text};
use crate::models::Mission;
use serde_json::Value;

/// Map the bounty board feed onto mission cards
///
/// The feed is hand-maintained, so field names drift between editions.
/// Entries without an identifier get a fresh UUID so the client can key them.
pub fn transform_missions_data(raw: &Value, max_items: usize) -> Vec<Mission> {
    records(raw, &["bounties", "missions", "contracts", "data"])
        .into_iter()
        .take(max_items)
        .enumerate()
        .map(|(index, item)| Mission {
            id: Some(
                text(item, &["id", "_id", "uuid"])
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            ),
            title: text(item, &["title", "name", "target"])
                .unwrap_or_else(|| format!("Contract {}", index + 1)),
            description: text(item, &["description", "details", "summary", "briefing"])
                .unwrap_or_else(|| "No briefing available".to_string()),
            reward: reward(item),
            location: text(item, &["location", "system", "area"])
                .unwrap_or_else(|| "Unknown".to_string()),
            difficulty: text(item, &["difficulty", "threat", "risk"])
                .map(|d| d.to_uppercase())
                .unwrap_or_else(|| "MEDIUM".to_string()),
            status: text(item, &["status"]).unwrap_or_else(|| "Available".to_string()),
        })
        .collect()
}

fn reward(item: &Value) -> String {
    match first_present(item, &["reward", "bounty", "payout"]) {
        Some(Value::Number(n)) => format!("{} aUEC", n),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "Negotiable".to_string(),
    }
}
