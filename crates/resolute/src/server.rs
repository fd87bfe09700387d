//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes suggestion filtering over stdio so a generation service (or an
//! assistant driving one) can hand raw model output to resolute and get back
//! only the novel, well-formed items.
//!
//! # Architecture
//!
//! The server is a presentation layer over the same core library the CLI
//! commands use. The two filtering tools are rate-limited per
//! `client_token`; a denial is returned as an error tool result carrying the
//! quota, not as a protocol error.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use resolute_core::generation;
use resolute_core::rate_limit::{LIMIT_HEADER, REMAINING_HEADER};
use resolute_core::{
    DEFAULT_MAX_INPUT_BYTES, DedupEngine, DedupReport, RateLimitConfig, RateLimitExceeded,
    RateLimitStatus, RateLimiter,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `normalize_phrase` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct NormalizePhraseParams {
    /// The phrase to normalize.
    pub phrase: String,
}

/// Parameters for the `filter_suggestions` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterSuggestionsParams {
    /// Opaque identifier of the calling client, used for rate limiting.
    pub client_token: String,
    /// Candidate phrases, already split. Ignored when `generated` is set.
    #[serde(default)]
    pub candidates: Vec<String>,
    /// Raw generated text: a bulleted list terminated by `-----`.
    pub generated: Option<String>,
    /// Phrases the user already has.
    #[serde(default)]
    pub seeds: Vec<String>,
    /// Include the verdict for every candidate.
    #[serde(default)]
    pub explain: bool,
}

/// Parameters for the `filter_next_steps` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterNextStepsParams {
    /// Opaque identifier of the calling client, used for rate limiting.
    pub client_token: String,
    /// Step phrases, already split. Ignored when `generated` is set.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Raw generated text: a bulleted list terminated by `-----`.
    pub generated: Option<String>,
}

#[derive(Serialize)]
struct FilterSuggestionsResult {
    kept: Vec<String>,
    rate_limit: RateLimitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<DedupReport>,
}

#[derive(Serialize)]
struct FilterNextStepsResult {
    steps: Vec<String>,
    rate_limit: RateLimitStatus,
}

/// MCP server exposing suggestion filtering.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    engine: DedupEngine,
    limiter: RateLimiter,
    limit: u32,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        let rate_limit = RateLimitConfig::default();
        Self::new(
            DedupEngine::default(),
            rate_limit.limiter(),
            rate_limit.limit,
            Some(DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server filtering with `engine` and admitting `limit`
    /// filtering calls per client per window.
    pub fn new(
        engine: DedupEngine,
        limiter: RateLimiter,
        limit: u32,
        max_input: Option<usize>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            engine,
            limiter,
            limit,
            max_input,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "rate_limit": self.limit,
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Show the normalized form of a phrase.
    #[tool(
        description = "Normalize a phrase the way suggestions are compared: verbs and stop words removed, remaining words stemmed."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    async fn normalize_phrase(
        &self,
        Parameters(params): Parameters<NormalizePhraseParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.phrase.len())?;
        let normalized = self
            .engine
            .normalizer()
            .normalize(&params.phrase)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = to_json(&serde_json::json!({
            "phrase": params.phrase,
            "normalized": normalized,
        }))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Filter generated suggestions against seeds and each other.
    #[tool(
        description = "Keep only novel, well-formed suggestions. Drops candidates with too much punctuation, candidates similar to a seed, and candidates similar to an earlier candidate. Rate-limited per client_token."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", seeds = params.seeds.len()))]
    async fn filter_suggestions(
        &self,
        Parameters(params): Parameters<FilterSuggestionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let candidates = split_input(params.candidates, params.generated);
        let input_bytes = candidates
            .iter()
            .chain(&params.seeds)
            .map(String::len)
            .sum();
        self.check_size(input_bytes)?;

        let status = match self.limiter.check(&params.client_token, self.limit) {
            Ok(status) => status,
            Err(denied) => return rate_limited(&denied),
        };

        let report = self
            .engine
            .filter_report(&candidates, &params.seeds)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let result = FilterSuggestionsResult {
            kept: report.kept(),
            rate_limit: status,
            report: params.explain.then_some(report),
        };
        tracing::info!(
            tool = "filter_suggestions",
            kept = result.kept.len(),
            remaining = status.remaining,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&result)?)]))
    }

    /// Keep the well-formed next steps.
    #[tool(
        description = "Keep the well-formed items of a generated next-steps list (punctuation check only, no deduplication). Rate-limited per client_token."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn filter_next_steps(
        &self,
        Parameters(params): Parameters<FilterNextStepsParams>,
    ) -> Result<CallToolResult, McpError> {
        let items = split_input(params.steps, params.generated);
        self.check_size(items.iter().map(String::len).sum())?;

        let status = match self.limiter.check(&params.client_token, self.limit) {
            Ok(status) => status,
            Err(denied) => return rate_limited(&denied),
        };

        let result = FilterNextStepsResult {
            steps: generation::filter_next_steps(&items),
            rate_limit: status,
        };
        Ok(CallToolResult::success(vec![Content::text(to_json(&result)?)]))
    }

    fn check_size(&self, bytes: usize) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if bytes > max => Err(McpError::invalid_params(
                format!("input too large: {bytes} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }
}

/// Parse `generated` when present, else use the pre-split list.
fn split_input(items: Vec<String>, generated: Option<String>) -> Vec<String> {
    generated.map_or(items, |text| generation::parse_generated_list(&text))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// Error tool result describing a rate-limit denial.
fn rate_limited(denied: &RateLimitExceeded) -> Result<CallToolResult, McpError> {
    tracing::info!(limit = denied.limit, "MCP call rate limited");
    let headers: serde_json::Map<String, serde_json::Value> = denied
        .headers()
        .into_iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::String(value)))
        .collect();
    let json = to_json(&serde_json::json!({
        "error": denied.to_string(),
        "limit": denied.limit,
        "remaining": denied.remaining,
        "headers": headers,
    }))?;
    Ok(CallToolResult::error(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Send generated suggestions to filter_suggestions with the \
                 user's existing items as seeds; quota headers are {LIMIT_HEADER} and \
                 {REMAINING_HEADER}.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use std::time::Duration;

    fn server_with_limit(limit: u32) -> ProjectServer {
        ProjectServer::new(
            DedupEngine::default(),
            RateLimiter::new(Duration::from_secs(60), 100),
            limit,
            Some(1024),
        )
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(extract_text(result).expect("should have text content"))
            .expect("valid JSON")
    }

    fn books_request(token: &str) -> FilterSuggestionsParams {
        FilterSuggestionsParams {
            client_token: token.to_string(),
            candidates: vec![
                "Read more books".to_string(),
                "Read books more often".to_string(),
                "Exercise daily".to_string(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::default();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains("filter_suggestions"));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = server_with_limit(4);
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["rate_limit"], 4);
    }

    #[tokio::test]
    async fn normalize_phrase_tool_works() {
        let server = server_with_limit(4);
        let params = Parameters(NormalizePhraseParams {
            phrase: "Save more money".to_string(),
        });

        let result = server.normalize_phrase(params).await.unwrap();
        assert_eq!(json_of(&result)["normalized"], "money");
    }

    #[tokio::test]
    async fn filter_suggestions_keeps_first_of_similar_pair() {
        let server = server_with_limit(4);
        let result = server
            .filter_suggestions(Parameters(books_request("client-a")))
            .await
            .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        let json = json_of(&result);
        assert_eq!(
            json["kept"],
            serde_json::json!(["Read more books", "Exercise daily"])
        );
        assert_eq!(json["rate_limit"]["remaining"], 3);
        assert!(json["report"].is_null());
    }

    #[tokio::test]
    async fn filter_suggestions_parses_generated_text() {
        let server = server_with_limit(4);
        let params = FilterSuggestionsParams {
            client_token: "client-a".to_string(),
            generated: Some("\n- Save money each week\n- Adopt a cat\n-----\n- Junk".to_string()),
            seeds: vec!["Save more money".to_string()],
            explain: true,
            ..Default::default()
        };

        let result = server.filter_suggestions(Parameters(params)).await.unwrap();
        let json = json_of(&result);
        assert_eq!(json["kept"], serde_json::json!(["Adopt a cat"]));
        assert_eq!(json["report"]["candidates"].as_array().unwrap().len(), 2);
        assert_eq!(json["report"]["candidates"][0]["suppressed"]["kind"], "seed");
    }

    #[tokio::test]
    async fn filter_suggestions_is_rate_limited_per_token() {
        let server = server_with_limit(2);
        for _ in 0..2 {
            let ok = server
                .filter_suggestions(Parameters(books_request("client-a")))
                .await
                .unwrap();
            assert!(!ok.is_error.unwrap_or(false));
        }

        let denied = server
            .filter_suggestions(Parameters(books_request("client-a")))
            .await
            .unwrap();
        assert!(denied.is_error.unwrap_or(false));
        let json = json_of(&denied);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["remaining"], 0);
        assert_eq!(json["headers"][REMAINING_HEADER], "0");

        let other = server
            .filter_suggestions(Parameters(books_request("client-b")))
            .await
            .unwrap();
        assert!(!other.is_error.unwrap_or(false));
    }

    #[tokio::test]
    async fn oversized_input_is_rejected_before_counting() {
        let server = server_with_limit(1);
        let params = FilterSuggestionsParams {
            client_token: "client-a".to_string(),
            candidates: vec!["x".repeat(2048)],
            ..Default::default()
        };
        assert!(server.filter_suggestions(Parameters(params)).await.is_err());

        // The rejected call did not use the quota.
        let ok = server
            .filter_suggestions(Parameters(books_request("client-a")))
            .await
            .unwrap();
        assert!(!ok.is_error.unwrap_or(false));
    }

    #[test]
    fn filter_next_steps_drops_malformed_items() {
        let server = server_with_limit(4);
        let params = FilterNextStepsParams {
            client_token: "client-a".to_string(),
            steps: vec![
                "Create a budget".to_string(),
                "$$$ ###".to_string(),
                "Track spending".to_string(),
            ],
            generated: None,
        };

        let result = server.filter_next_steps(Parameters(params)).unwrap();
        let json = json_of(&result);
        assert_eq!(
            json["steps"],
            serde_json::json!(["Create a budget", "Track spending"])
        );
        assert_eq!(json["rate_limit"]["remaining"], 3);
    }
}
