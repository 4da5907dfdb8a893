use crate::models::{Channel, GuideMetadata, ProgrammingGuide};
use serde::Serialize;
use thiserror::Error;

const BUNDLED_GUIDE: &str = include_str!("../../data/guide.json");

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Invalid programming guide: {0}")]
    InvalidGuide(#[from] serde_json::Error),
}

/// Single channel view of the programming guide
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelGuide<'a> {
    pub metadata: &'a GuideMetadata,
    pub channel: &'a Channel,
    pub time_slots: &'a [String],
    pub days: &'a [String],
}

impl ProgrammingGuide {
    /// Parse the schedule shipped with the service
    pub fn bundled() -> Result<Self, GuideError> {
        Self::from_json(BUNDLED_GUIDE)
    }

    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Schedule for one channel along with the shared guide metadata
    pub fn channel_guide(&self, channel_id: &str) -> Result<ChannelGuide<'_>, GuideError> {
        let channel = self
            .channels
            .get(channel_id)
            .ok_or_else(|| GuideError::ChannelNotFound(channel_id.to_string()))?;

        Ok(ChannelGuide {
            metadata: &self.metadata,
            channel,
            time_slots: &self.time_slots,
            days: &self.days,
        })
    }
}
