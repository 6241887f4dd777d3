//! Wire types for the Responses API

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/responses`
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<&'a str>,
}

/// The subset of the response body we read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsesResponse {
    /// Convenience aggregate some SDKs and proxies fill in
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsesResponse {
    /// Text of the reply: `output_text` when present, otherwise every
    /// `output_text` content part concatenated in order.
    pub fn text(&self) -> String {
        if let Some(text) = &self.output_text
            && !text.trim().is_empty()
        {
            return text.clone();
        }
        self.output
            .iter()
            .flat_map(|item| &item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}
