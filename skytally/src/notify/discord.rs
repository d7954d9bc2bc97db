//! Discord REST channel.
//!
//! Pages are posted as a single rich embed per message using a bot token:
//!
//! - send: `POST {api_base}/channels/{channel_id}/messages`
//! - edit: `PATCH {api_base}/channels/{channel_id}/messages/{message_id}`

use std::borrow::Cow;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::channel::{EditOutcome, MessageId, NotificationChannel};
use super::error::ChannelError;
use crate::report::ReportPage;

/// Default Discord REST API root.
pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Embed side colour (blue).
pub const EMBED_COLOR: u32 = 0x3498DB;

/// Discord rejects embed field values longer than this.
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

/// Discord rejects embeds whose title, description, field names and field
/// values together exceed this many characters.
pub const MAX_EMBED_CHARS: usize = 6000;

/// Connection settings for [`DiscordChannel`].
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    /// Bot token, sent as `Authorization: Bot <token>`.
    pub token: String,
    /// Target channel snowflake.
    pub channel_id: u64,
    /// API root, overridable for testing.
    pub api_base: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl DiscordConfig {
    pub fn new(token: impl Into<String>, channel_id: u64) -> Self {
        Self {
            token: token.into(),
            channel_id,
            api_base: DEFAULT_DISCORD_API_BASE.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    embeds: [Embed<'a>; 1],
}

#[derive(Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    color: u32,
    timestamp: String,
    fields: Vec<EmbedField<'a>>,
}

#[derive(Serialize)]
struct EmbedField<'a> {
    name: &'a str,
    value: Cow<'a, str>,
    inline: bool,
}

#[derive(Deserialize)]
struct MessageResponse {
    id: String,
}

#[derive(Deserialize)]
struct RateLimitResponse {
    retry_after: f64,
}

impl<'a> MessagePayload<'a> {
    /// Build the embed for a page.
    ///
    /// Field values share what is left of [`MAX_EMBED_CHARS`] after the
    /// title, description and field names. Each value gets an equal share of
    /// the remaining budget, capped at [`MAX_FIELD_VALUE_CHARS`]; characters a
    /// short value leaves unused carry over to the fields after it.
    fn from_page(page: &'a ReportPage) -> Self {
        let fixed = page.header.title.chars().count()
            + page.header.description.chars().count()
            + page
                .fields
                .iter()
                .map(|field| field.name.chars().count())
                .sum::<usize>();
        let mut budget = MAX_EMBED_CHARS.saturating_sub(fixed);

        let total = page.fields.len();
        let fields = page
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let share = budget / (total - index);
                let value = truncate_value(&field.value, share.min(MAX_FIELD_VALUE_CHARS));
                budget = budget.saturating_sub(value.chars().count());
                EmbedField {
                    name: &field.name,
                    value,
                    inline: false,
                }
            })
            .collect();

        Self {
            embeds: [Embed {
                title: &page.header.title,
                description: &page.header.description,
                color: EMBED_COLOR,
                timestamp: page.header.timestamp.to_rfc3339(),
                fields,
            }],
        }
    }
}

/// Cut a field value to at most `limit` characters, ending in an ellipsis.
///
/// Discord rejects empty values, so the result keeps at least the ellipsis.
fn truncate_value(value: &str, limit: usize) -> Cow<'_, str> {
    if value.chars().count() <= limit {
        return Cow::Borrowed(value);
    }
    let mut cut: String = value.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    Cow::Owned(cut)
}

/// Publishes report pages to a Discord text channel.
pub struct DiscordChannel {
    http: reqwest::Client,
    config: DiscordConfig,
}

impl DiscordChannel {
    pub fn new(config: DiscordConfig) -> Result<Self, ChannelError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("skytally/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChannelError::ClientBuild(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn channel_id(&self) -> u64 {
        self.config.channel_id
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/channels/{}/messages",
            self.config.api_base.trim_end_matches('/'),
            self.config.channel_id
        )
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.config.token)
    }
}

/// Map a non-success response to a channel error.
async fn error_from(response: reqwest::Response) -> ChannelError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    if status == 429 {
        let retry_after_secs = serde_json::from_str::<RateLimitResponse>(&body)
            .map(|r| r.retry_after)
            .unwrap_or(1.0);
        return ChannelError::RateLimited { retry_after_secs };
    }

    ChannelError::Status { status, body }
}

impl NotificationChannel for DiscordChannel {
    async fn send_message(&self, page: &ReportPage) -> Result<MessageId, ChannelError> {
        let response = self
            .http
            .post(self.messages_url())
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .json(&MessagePayload::from_page(page))
            .send()
            .await
            .map_err(|e| ChannelError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from(response).await);
        }

        let message: MessageResponse = response
            .json()
            .await
            .map_err(|e| ChannelError::InvalidResponse(e.to_string()))?;

        let id = message.id.parse::<u64>().map_err(|_| {
            ChannelError::InvalidResponse(format!("message id is not a snowflake: {}", message.id))
        })?;

        Ok(MessageId(id))
    }

    async fn edit_message(
        &self,
        id: MessageId,
        page: &ReportPage,
    ) -> Result<EditOutcome, ChannelError> {
        let response = self
            .http
            .patch(format!("{}/{}", self.messages_url(), id))
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .json(&MessagePayload::from_page(page))
            .send()
            .await
            .map_err(|e| ChannelError::Http(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(EditOutcome::NotFound);
        }
        if !status.is_success() {
            return Err(error_from(response).await);
        }

        Ok(EditOutcome::Edited)
    }
}
