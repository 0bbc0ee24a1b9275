//! MCP (Model Context Protocol) server exposing the content analyzers.
//!
//! Exposes tools: score_content, analyze_seo, revision_prompt, analyze_file.

use crate::analyzer::{ContentAnalyzer, ContentScorer, SeoOptimizer};
use crate::config::EffectiveConfig;
use crate::suggestions::{BrandVoice, RevisionPromptBuilder};
use crate::{ContentType, Error};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

type Arguments = serde_json::Map<String, serde_json::Value>;

/// MCP JSON-RPC request
#[derive(Debug, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,
    pub id: Option<serde_json::Value>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

/// Tool definition for MCP tools/list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDef {
    name: &'static str,
    description: &'static str,
    input_schema: InputSchema,
}

#[derive(Debug, Serialize)]
struct InputSchema {
    #[serde(rename = "type")]
    typ: &'static str,
    properties: serde_json::Value,
    required: Vec<&'static str>,
}

fn tool_definitions() -> Vec<ToolDef> {
    let content_type = serde_json::json!({
        "type": "string",
        "enum": ["blog", "short_form", "general", "linkedin"],
        "description": "Content type (default: general)"
    });
    let keywords = serde_json::json!({
        "type": "array",
        "items": { "type": "string" },
        "description": "Target SEO keywords"
    });

    vec![
        ToolDef {
            name: "score_content",
            description: "Score content across the quality dimensions of its type and return grade, strengths and improvements",
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({
                    "text": { "type": "string", "description": "Content to score" },
                    "contentType": content_type
                }),
                required: vec!["text"],
            },
        },
        ToolDef {
            name: "analyze_seo",
            description: "Analyze keyword density and placement, readability and heading structure; returns a 0-100 SEO score",
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({
                    "text": { "type": "string", "description": "Content to analyze" },
                    "keywords": keywords
                }),
                required: vec!["text", "keywords"],
            },
        },
        ToolDef {
            name: "revision_prompt",
            description: "Build a prompt asking a language model to revise the content based on its scores",
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({
                    "text": { "type": "string", "description": "Content to revise" },
                    "contentType": content_type,
                    "keywords": keywords,
                    "brandVoice": {
                        "type": "object",
                        "additionalProperties": { "type": "string" },
                        "description": "Brand guidelines, category to guideline (e.g. formality, emotion, voice, perspective)"
                    }
                }),
                required: vec!["text"],
            },
        },
        ToolDef {
            name: "analyze_file",
            description: "Analyze a content file using the nearest .contentblitzrc.json",
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({
                    "file": { "type": "string", "description": "Path to a markdown or text file" }
                }),
                required: vec!["file"],
            },
        },
    ]
}

/// Handle a single JSON-RPC request and return a response.
/// Extracted from `run_mcp_server` for testability.
pub fn handle_request(req: &JsonRpcRequest) -> JsonRpcResponse {
    let id = req.id.clone();
    let result = match req.method.as_str() {
        "initialize" => Some(serde_json::json!({
            "protocolVersion": "2024-11-05",
            "capabilities": { "tools": {} },
            "serverInfo": { "name": "contentblitz", "version": env!("CARGO_PKG_VERSION") }
        })),
        "tools/list" => Some(serde_json::json!({ "tools": tool_definitions() })),
        "tools/call" => {
            let (name, args) = req
                .params
                .as_ref()
                .and_then(|p| p.get("params").or(Some(p)))
                .map(|p| {
                    let name = p.get("name").and_then(|n| n.as_str()).unwrap_or("");
                    let args = p
                        .get("arguments")
                        .and_then(|a| a.as_object())
                        .cloned()
                        .unwrap_or_default();
                    (name, args)
                })
                .unwrap_or(("", Arguments::new()));

            let result = match name {
                "score_content" => run_score(&args),
                "analyze_seo" => run_seo(&args),
                "revision_prompt" => run_revision_prompt(&args),
                "analyze_file" => run_analyze_file(&args),
                _ => Err(anyhow::anyhow!("Unknown tool: {}", name)),
            };

            match result {
                Ok(val) => Some(serde_json::json!({
                    "content": [{ "type": "text", "text": serde_json::to_string(&val).unwrap_or_else(|_| "{}".to_string()) }]
                })),
                Err(e) => Some(serde_json::json!({
                    "content": [{ "type": "text", "text": format!("Error: {}", e) }],
                    "isError": true
                })),
            }
        }
        _ => None,
    };

    JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result,
        error: None,
    }
}

/// Run the MCP server loop (stdin / stdout).
pub fn run_mcp_server() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let req: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(_) => continue,
        };

        let response = handle_request(&req);
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn required_str<'a>(args: &'a Arguments, name: &'static str) -> Result<&'a str, Error> {
    match args.get(name) {
        None | Some(serde_json::Value::Null) => Err(Error::MissingArgument(name)),
        Some(value) => value.as_str().ok_or(Error::InvalidArgument {
            name,
            expected: "a string",
        }),
    }
}

fn content_type_arg(args: &Arguments) -> Result<ContentType, Error> {
    match args.get("contentType") {
        None | Some(serde_json::Value::Null) => Ok(ContentType::General),
        Some(value) => value
            .as_str()
            .ok_or(Error::InvalidArgument {
                name: "contentType",
                expected: "a string",
            })?
            .parse(),
    }
}

fn keywords_arg(args: &Arguments, required: bool) -> Result<Vec<String>, Error> {
    let invalid = Error::InvalidArgument {
        name: "keywords",
        expected: "an array of strings",
    };
    match args.get("keywords") {
        None | Some(serde_json::Value::Null) if required => Err(Error::MissingArgument("keywords")),
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| invalid.clone())?
            .iter()
            .map(|k| k.as_str().map(str::to_string).ok_or_else(|| invalid.clone()))
            .collect(),
    }
}

fn brand_voice_arg(args: &Arguments) -> Result<BrandVoice, Error> {
    match args.get("brandVoice") {
        None | Some(serde_json::Value::Null) => Ok(BrandVoice::default()),
        Some(value) => BrandVoice::deserialize(value).map_err(|_| Error::InvalidArgument {
            name: "brandVoice",
            expected: "an object of string guidelines",
        }),
    }
}

fn run_score(args: &Arguments) -> anyhow::Result<serde_json::Value> {
    let text = required_str(args, "text")?;
    let content_type = content_type_arg(args)?;
    let report = ContentScorer::new().score(text, content_type);
    Ok(serde_json::to_value(&report)?)
}

fn run_seo(args: &Arguments) -> anyhow::Result<serde_json::Value> {
    let text = required_str(args, "text")?;
    let keywords = keywords_arg(args, true)?;
    let report = SeoOptimizer::new().analyze(text, &keywords);
    Ok(serde_json::to_value(&report)?)
}

fn run_revision_prompt(args: &Arguments) -> anyhow::Result<serde_json::Value> {
    let text = required_str(args, "text")?;
    let config = EffectiveConfig::new(content_type_arg(args)?).with_keywords(keywords_arg(args, false)?);
    let report = ContentAnalyzer::new().analyze_text("<mcp>", text, &config);
    let prompt = RevisionPromptBuilder::new()
        .brand_voice(brand_voice_arg(args)?)
        .build(&report, text);
    Ok(serde_json::json!({ "prompt": prompt }))
}

fn run_analyze_file(args: &Arguments) -> anyhow::Result<serde_json::Value> {
    let file = required_str(args, "file")?;
    let path = Path::new(file);
    if !path.is_file() {
        anyhow::bail!("File not found: {}", file);
    }
    let work_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let report = crate::analyze_file(path, work_dir, None)?;
    Ok(serde_json::to_value(&report)?)
}
