//! MCP server implementation - JSON-RPC dispatch over stdio

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::enhancers::EnhancerRegistry;
use crate::tools::enhance_prompt::{EnhancePromptArgs, EnhancePromptToolDef, ENHANCE_PROMPT_TOOL};
use crate::tools::list_enhancers::{ListEnhancersToolDef, LIST_ENHANCERS_TOOL};
use crate::tools::{EnhancePromptTool, ListEnhancersTool};

use super::types::*;

/// Framing used on stdio: newline-delimited JSON or LSP Content-Length
/// headers, auto-detected from the first non-empty line when unset.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TransportMode {
    Lsp,
    Line,
}

/// Maximum accepted message/line size (10MB)
const MAX_MESSAGE_SIZE: usize = 10 * 1024 * 1024;
/// Maximum accepted header line length
const MAX_HEADER_LENGTH: usize = 1024;

pub fn is_header_line(line: &str) -> bool {
    match line.split_once(':') {
        Some((name, _)) => {
            let name = name.trim();
            name.eq_ignore_ascii_case("content-length") || name.eq_ignore_ascii_case("content-type")
        }
        None => false,
    }
}

pub fn parse_content_length(line: &str) -> Result<Option<usize>> {
    let (name, value) = match line.split_once(':') {
        Some(parts) => parts,
        None => return Ok(None),
    };

    if !name.trim().eq_ignore_ascii_case("content-length") {
        return Ok(None);
    }

    let length = value
        .trim()
        .parse::<usize>()
        .map_err(|e| anyhow!("Invalid Content-Length header: {}", e))?;
    Ok(Some(length))
}

/// Read the next non-empty line, stripped of trailing newline characters
async fn read_nonempty_line(reader: &mut BufReader<tokio::io::Stdin>) -> Result<Option<String>> {
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).await?;
        if bytes == 0 {
            return Ok(None);
        }

        if line.len() > MAX_MESSAGE_SIZE {
            return Err(anyhow!(
                "Line length {} exceeds maximum allowed size of {} bytes",
                line.len(),
                MAX_MESSAGE_SIZE
            ));
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}

/// Read an LSP-framed message. `first_line` is a header already consumed
/// during transport auto-detection.
async fn read_lsp_message(
    reader: &mut BufReader<tokio::io::Stdin>,
    first_line: Option<String>,
) -> Result<Option<String>> {
    let mut content_length: Option<usize> = None;
    let mut pending = first_line;

    loop {
        let line = if let Some(line) = pending.take() {
            line
        } else {
            let mut header = String::new();
            let bytes = reader.read_line(&mut header).await?;
            if bytes == 0 {
                return Ok(None);
            }
            if header.len() > MAX_HEADER_LENGTH {
                return Err(anyhow!(
                    "Header line length {} exceeds maximum allowed size of {} bytes",
                    header.len(),
                    MAX_HEADER_LENGTH
                ));
            }
            header.trim_end_matches(&['\r', '\n'][..]).to_string()
        };

        if line.is_empty() {
            break;
        }

        if let Some(len) = parse_content_length(&line)? {
            content_length = Some(len);
        }
    }

    let length =
        content_length.ok_or_else(|| anyhow!("Missing Content-Length header in LSP message"))?;

    if length > MAX_MESSAGE_SIZE {
        return Err(anyhow!(
            "Content-Length {} exceeds maximum allowed size of {} bytes",
            length,
            MAX_MESSAGE_SIZE
        ));
    }

    let mut buf = vec![0u8; length];
    reader.read_exact(&mut buf).await?;
    let message = String::from_utf8(buf).map_err(|e| anyhow!("Invalid UTF-8 payload: {}", e))?;
    Ok(Some(message))
}

async fn read_message(
    reader: &mut BufReader<tokio::io::Stdin>,
    mode: &mut Option<TransportMode>,
) -> Result<Option<String>> {
    match mode {
        Some(TransportMode::Line) => read_nonempty_line(reader).await,
        Some(TransportMode::Lsp) => read_lsp_message(reader, None).await,
        None => {
            let line = match read_nonempty_line(reader).await? {
                Some(line) => line,
                None => return Ok(None),
            };

            if parse_content_length(&line)?.is_some() || is_header_line(&line) {
                *mode = Some(TransportMode::Lsp);
                read_lsp_message(reader, Some(line)).await
            } else {
                *mode = Some(TransportMode::Line);
                Ok(Some(line))
            }
        }
    }
}

async fn write_message(
    stdout: &mut tokio::io::Stdout,
    mode: TransportMode,
    payload: &str,
) -> Result<()> {
    let mut buffer = Vec::new();

    match mode {
        TransportMode::Line => {
            buffer.extend_from_slice(payload.as_bytes());
            buffer.push(b'\n');
        }
        TransportMode::Lsp => {
            let header = format!("Content-Length: {}\r\n\r\n", payload.len());
            buffer.extend_from_slice(header.as_bytes());
            buffer.extend_from_slice(payload.as_bytes());
        }
    }

    stdout.write_all(&buffer).await?;
    stdout.flush().await?;
    Ok(())
}

/// MCP server exposing the enhancement tools over stdio
pub struct McpServer {
    config: Arc<Config>,
    registry: Arc<EnhancerRegistry>,
    initial_transport_mode: Option<TransportMode>,
}

impl McpServer {
    /// Build the server; the enhancer registry is constructed once here from
    /// the injected configuration.
    pub fn new(config: Arc<Config>, transport_mode: Option<TransportMode>) -> Self {
        let registry = Arc::new(EnhancerRegistry::from_config(&config));
        Self {
            config,
            registry,
            initial_transport_mode: transport_mode,
        }
    }

    /// Run the request loop until stdin closes
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut transport_mode = self.initial_transport_mode;

        info!("MCP server started, waiting for requests...");

        loop {
            let message = match read_message(&mut reader, &mut transport_mode).await {
                Ok(Some(message)) => message,
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read message: {}", e);
                    continue;
                }
            };

            debug!("Received: {}", message);
            let mode = transport_mode.unwrap_or(TransportMode::Line);

            match serde_json::from_str::<JsonRpcRequest>(&message) {
                Ok(request) => {
                    if let Some(resp) = self.handle_request(request).await {
                        let resp_json = serde_json::to_string(&resp)?;
                        debug!("Sending: {}", resp_json);
                        write_message(&mut stdout, mode, &resp_json).await?;
                    }
                }
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    let error_response =
                        JsonRpcResponse::error(None, -32700, format!("Parse error: {}", e));
                    let resp_json = serde_json::to_string(&error_response)?;
                    write_message(&mut stdout, mode, &resp_json).await?;
                }
            }
        }

        Ok(())
    }

    /// Dispatch a JSON-RPC request. Requests without an id are notifications
    /// and must not receive a response.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.id.is_none() {
            debug!("Received notification: {}", request.method);
            return None;
        }

        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(request.id)),
            "tools/list" => Some(self.handle_list_tools(request.id)),
            "tools/call" => Some(self.handle_call_tool(request.id, request.params).await),
            "ping" => Some(JsonRpcResponse::success(request.id, json!({}))),
            _ => Some(JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            )),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
            server_info: ServerInfo {
                name: "prompt-boost".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e)),
        }
    }

    fn handle_list_tools(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools = vec![
            Tool {
                name: ENHANCE_PROMPT_TOOL.name.to_string(),
                description: ENHANCE_PROMPT_TOOL.description.to_string(),
                input_schema: EnhancePromptToolDef::get_input_schema(&self.registry),
            },
            Tool {
                name: LIST_ENHANCERS_TOOL.name.to_string(),
                description: LIST_ENHANCERS_TOOL.description.to_string(),
                input_schema: ListEnhancersToolDef::get_input_schema(),
            },
        ];

        let result = ListToolsResult { tools };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e)),
        }
    }

    async fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params = match params {
            Some(p) => p,
            None => {
                return JsonRpcResponse::error(id, -32602, "Missing params".to_string());
            }
        };

        let call_params: CallToolParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(id, -32602, format!("Invalid params: {}", e));
            }
        };

        match call_params.name.as_str() {
            "enhance_prompt" => {
                let args: EnhancePromptArgs = match call_params.arguments {
                    Some(args) => match serde_json::from_value(args) {
                        Ok(a) => a,
                        Err(e) => {
                            return JsonRpcResponse::error(
                                id,
                                -32602,
                                format!("Invalid arguments: {}", e),
                            );
                        }
                    },
                    None => EnhancePromptArgs::default(),
                };

                let tool = EnhancePromptTool::new(self.registry.clone());
                let result = tool.execute(args).await;
                self.tool_response(id, result.text)
            }
            "list_enhancers" => {
                let tool = ListEnhancersTool::new(self.registry.clone());
                let result = tool.execute().await;
                self.tool_response(id, result.text)
            }
            _ => JsonRpcResponse::error(id, -32602, format!("Unknown tool: {}", call_params.name)),
        }
    }

    fn tool_response(&self, id: Option<Value>, text: String) -> JsonRpcResponse {
        let call_result = CallToolResult {
            content: vec![TextContent::new(text)],
            is_error: None,
        };

        match serde_json::to_value(call_result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e)),
        }
    }

    /// Configuration injected at construction time
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}
