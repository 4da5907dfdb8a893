use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Query for the market and trade endpoints
///
/// A `limit` that is empty or not a whole number is treated as absent, so
/// `?limit=` and `?limit=lots` both get the default rather than a 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LimitQuery {
    #[serde(default, deserialize_with = "lenient_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u32>,
}

fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.trim().parse::<u32>() {
        Ok(limit) => Some(limit),
        Err(_) => {
            if !value.is_empty() {
                tracing::info!("Ignoring non-numeric limit {:?}", value);
            }
            None
        }
    }))
}

impl LimitQuery {
    /// Requested limit if present and valid, otherwise `default`
    pub fn resolve(&self, default: u32, max: u32) -> u32 {
        match self.limit {
            Some(limit) if self.validate().is_ok() => limit.min(max),
            Some(limit) => {
                tracing::info!("Ignoring out-of-range limit {}, using {}", limit, default);
                default
            }
            None => default,
        }
    }
}

/// Query for the news endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsQuery {
    pub date: Option<String>,
}

/// Query for the programming guide endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GuideQuery {
    #[validate(length(min = 1))]
    pub channel: Option<String>,
}
