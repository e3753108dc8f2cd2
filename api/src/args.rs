use std::{
    net::{SocketAddr, ToSocketAddrs},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use spooltag_core::domain::common::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, LLMConfig, SpoolTagConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "spooltag", version, about = "Reads filament spool labels into openspool records")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address to listen on; a bare `:port` binds every interface
    #[arg(long, env = "LISTEN_ADDR", default_value = ":8080")]
    pub listen_addr: String,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8080"
    )]
    pub allowed_origins: Vec<String>,

    /// Directory served for every path not handled by the API
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: Url,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl ServerArgs {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        };

        addr.to_socket_addrs()
            .with_context(|| format!("invalid listen address {:?}", self.listen_addr))?
            .next()
            .with_context(|| format!("listen address {:?} resolved to nothing", self.listen_addr))
    }
}

impl From<Args> for SpoolTagConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                openai_base_url: args.llm.openai_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_all_set() {
        let args = Args::try_parse_from([
            "spooltag",
            "--openai-api-key",
            "sk-test",
            "--listen-addr",
            ":9090",
            "--openai-model",
            "gpt-4o-mini",
            "--openai-base-url",
            "http://localhost:4000",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(args.llm.openai_api_key, "sk-test");
        assert_eq!(args.server.listen_addr, ":9090");
        assert_eq!(args.llm.openai_model, "gpt-4o-mini");
        assert_eq!(args.llm.openai_base_url.as_str(), "http://localhost:4000/");
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["spooltag", "--openai-api-key", "sk-test"]).unwrap();

        assert_eq!(args.server.listen_addr, ":8080");
        assert_eq!(args.llm.openai_model, "gpt-4o");
        assert_eq!(args.llm.openai_base_url.as_str(), "https://api.openai.com/");
        assert_eq!(args.log.log_filter, "info");
        assert!(!args.log.log_json);
    }

    #[test]
    fn test_args_missing_api_key() {
        if std::env::var_os("OPENAI_API_KEY").is_some() {
            return;
        }

        assert!(Args::try_parse_from(["spooltag"]).is_err());
    }

    #[test]
    fn test_socket_addr_port_only() {
        let args = Args::try_parse_from([
            "spooltag",
            "--openai-api-key",
            "sk-test",
            "--listen-addr",
            ":9090",
        ])
        .unwrap();

        assert_eq!(
            args.server.socket_addr().unwrap(),
            "0.0.0.0:9090".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_socket_addr_invalid() {
        let args = Args::try_parse_from([
            "spooltag",
            "--openai-api-key",
            "sk-test",
            "--listen-addr",
            "not an address",
        ])
        .unwrap();

        assert!(args.server.socket_addr().is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from(["spooltag", "--openai-api-key", "sk-test"]).unwrap();
        let config = SpoolTagConfig::from(args);

        assert_eq!(config.llm.openai_api_key, "sk-test");
        assert_eq!(config.llm.openai_model, "gpt-4o");
    }
}
