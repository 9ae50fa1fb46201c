use std::path::PathBuf;

use beautyai_core::{
    domain::{
        common::{BeautyAiConfig, LLMConfig},
        skin_analysis::entities::ProviderKind,
    },
    infrastructure::llm::{
        gemini_client::DEFAULT_GEMINI_BASE_URL, openai_client::DEFAULT_OPENAI_BASE_URL,
    },
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "beautyai-api", version, about = "Beauty AI skin analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Five 5MB images encoded as base64 need roughly 35MB.
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 40 * 1024 * 1024)]
    pub max_body_bytes: usize,

    #[arg(long, env = "TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long, env = "TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "openai-api-base", env = "OPENAI_API_BASE", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-api-base", env = "GEMINI_API_BASE", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    /// Provider tried first when a request states no preference.
    #[arg(long, env = "DEFAULT_PROVIDER", default_value = "openai")]
    pub default_provider: ProviderKind,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for BeautyAiConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_base_url: args.llm.openai_base_url,
                openai_model: args.llm.openai_model,
                gemini_api_key: args.llm.gemini_api_key,
                gemini_base_url: args.llm.gemini_base_url,
                gemini_model: args.llm.gemini_model,
                default_provider: args.llm.default_provider,
            },
        }
    }
}
