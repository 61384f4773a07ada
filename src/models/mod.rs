//! Data model for the channel catalog and the upstream wire format

use serde::{Deserialize, Deserializer};

/// One channel the gateway knows how to present.
///
/// The set is compiled in (see [`crate::catalog`]); catalog order is the
/// order entries appear in the rendered playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelEntry {
    /// Short internal key, used only for logging
    pub key: &'static str,
    /// The `id` this entry matches in the upstream directory
    pub upstream_id: &'static str,
    /// Name shown after the comma on the `#EXTINF` line
    pub display_name: &'static str,
    pub tvg_id: &'static str,
    pub tvg_name: &'static str,
    pub logo_url: &'static str,
    pub group_title: &'static str,
}

/// One element of the upstream `dt` array.
///
/// The upstream serializes `id` sometimes as a JSON string and sometimes as
/// a number; both normalize to `String` so catalog matching is plain string
/// equality. Entries occasionally arrive without a `channelUrl`; those
/// deserialize with an empty URL and are skipped at render time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpstreamChannel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "channelUrl", default)]
    pub channel_url: String,
}

/// The validated upstream response: a JSON object carrying the channel
/// list in its top-level `dt` field.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChannelDirectory {
    pub dt: Vec<UpstreamChannel>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Str(s) => s,
        IdRepr::Num(n) => n.to_string(),
    })
}
