use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::schema::registry::DEFAULT_FORM_TYPE;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "dynamic-form",
    version,
    about = "Schema-driven form renderer with progress tracking and required-field validation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: dynamic-form.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL trace of session events to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available form types
    Types,

    /// Render an untouched form
    Render {
        /// Form type to render
        #[arg(long)]
        form_type: Option<String>,

        /// Output format: console, html, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replay session scripts from YAML files
    Run {
        /// Path to a script YAML file or a directory of them
        #[arg(long)]
        script: String,

        /// Output format: console, html, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Fill in a form from the terminal
    Interactive {
        /// Form type selected at start
        #[arg(long)]
        form_type: Option<String>,

        /// Where accepted submissions go: table, json, none
        #[arg(long)]
        sink: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `dynamic-form.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_form_type")]
    pub initial_form_type: String,

    #[serde(default = "default_sink")]
    pub sink: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_form_type: default_form_type(),
            sink: default_sink(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: default_console(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_form_type() -> String { DEFAULT_FORM_TYPE.to_string() }
fn default_sink() -> String { "table".to_string() }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("dynamic-form.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI flag > config file > default)
// ============================================================================

/// Settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub form_type: String,
    pub format: String,
    pub sink: String,
    pub trace_path: Option<String>,
}

pub fn resolve(
    config: &AppConfig,
    form_type: Option<&str>,
    format: Option<&str>,
    sink: Option<&str>,
    trace: Option<&str>,
) -> Resolved {
    Resolved {
        form_type: form_type
            .unwrap_or(&config.session.initial_form_type)
            .to_string(),
        format: format.unwrap_or(&config.render.format).to_string(),
        sink: sink.unwrap_or(&config.session.sink).to_string(),
        trace_path: trace
            .map(String::from)
            .or_else(|| config.trace.path.clone()),
    }
}
