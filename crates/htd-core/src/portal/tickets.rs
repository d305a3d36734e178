//! Ticket list payload returned by the list endpoint.

use serde::{Deserialize, Deserializer};

/// One downloadable document, as reported by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketDescriptor {
    /// Opaque id passed back to the download endpoint.
    #[serde(rename = "Text", deserialize_with = "string_or_number")]
    pub ticket_id: String,
    /// Display label, e.g. the exam name.
    #[serde(rename = "Value")]
    pub label: String,
}

/// Parses a list response body. Unknown identifiers get an HTML page back,
/// which fails here.
pub fn parse_ticket_list(body: &[u8]) -> Result<Vec<TicketDescriptor>, serde_json::Error> {
    serde_json::from_slice(body)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
