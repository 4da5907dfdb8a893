use crate::core::fields::{records, text};
use crate::models::{Headline, NewsFeed};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use serde_json::Value;

/// News payload returned to the client
///
/// Documents already published in the HCN format pass through untouched;
/// anything else is reduced to a list of headlines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NewsPayload {
    Hcn(Value),
    Normalized(NewsFeed),
}

/// Whether a document is in the HCN format
///
/// HCN documents carry a `headlines` array alongside a `date` or
/// `metadata` field at the top level.
pub fn is_hcn_format(raw: &Value) -> bool {
    let Some(obj) = raw.as_object() else {
        return false;
    };

    obj.get("headlines").map(Value::is_array).unwrap_or(false)
        && (obj.contains_key("date") || obj.contains_key("metadata"))
}

pub fn transform_news_data(raw: Value) -> NewsPayload {
    if is_hcn_format(&raw) {
        return NewsPayload::Hcn(raw);
    }

    let headlines = records(&raw, &["headlines", "news", "articles"])
        .into_iter()
        .enumerate()
        .map(|(index, item)| Headline {
            title: text(item, &["title", "headline", "text"])
                .unwrap_or_else(|| format!("News Story {}", index + 1)),
            summary: text(item, &["summary", "content", "body", "description"])
                .unwrap_or_else(|| "Full story available on request".to_string()),
            source: text(item, &["source", "author", "publisher"])
                .unwrap_or_else(|| "HCN Correspondent".to_string()),
            priority: text(item, &["priority", "urgency"])
                .unwrap_or_else(|| default_priority(index).to_string()),
        })
        .collect();

    NewsPayload::Normalized(NewsFeed { headlines })
}

fn default_priority(index: usize) -> &'static str {
    match index {
        0 => "BREAKING",
        1 | 2 => "HIGH",
        _ => "NORMAL",
    }
}

/// Dates to try, in order, for a news request
///
/// The requested date comes first (or `today` when none is given or it does
/// not parse as `YYYY-MM-DD`), followed by the `fallback_days` days before
/// `today`. Fallbacks are always relative to today, not to the requested
/// date, and a date already in the list is not tried twice.
pub fn candidate_dates(requested: Option<&str>, today: NaiveDate, fallback_days: u32) -> Vec<NaiveDate> {
    let first = requested
        .and_then(|date| match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Ignoring invalid news date {:?}: {}", date, e);
                None
            }
        })
        .unwrap_or(today);

    let mut dates = vec![first];
    for offset in 1..=i64::from(fallback_days) {
        if let Some(date) = today.checked_sub_signed(Duration::days(offset)) {
            if !dates.contains(&date) {
                dates.push(date);
            }
        }
    }
    dates
}
