use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use chatsearch::{ContainerConfig, SearchFailurePolicy};

#[derive(Debug, Parser)]
#[command(name = "chatsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer with in-process mock services instead of Azure
    #[arg(long, global = true)]
    pub mock_services: bool,

    #[command(flatten)]
    pub services: ServiceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP chat endpoint
    Serve {
        #[arg(long, env = "CHATSEARCH_HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        #[arg(short, long, env = "CHATSEARCH_PORT", default_value = "5000")]
        port: u16,
    },

    /// Ask a single question and print the answer
    Ask { text: String },
}

#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// File containing the Azure Cognitive Search API key
    #[arg(
        long,
        global = true,
        env = "AZURE_SEARCH_KEY_FILE",
        default_value = "azure_search_key.txt"
    )]
    pub search_key_file: PathBuf,

    /// Search service name, expanded to https://{name}.search.windows.net
    #[arg(long, global = true, env = "AZURE_SEARCH_SERVICE")]
    pub search_service: Option<String>,

    /// Full search endpoint; takes precedence over --search-service
    #[arg(long, global = true, env = "AZURE_SEARCH_ENDPOINT")]
    pub search_endpoint: Option<String>,

    #[arg(long, global = true, env = "AZURE_SEARCH_INDEX")]
    pub search_index: Option<String>,

    #[arg(
        long,
        global = true,
        env = "AZURE_SEARCH_API_VERSION",
        default_value = chatsearch::connector::DEFAULT_SEARCH_API_VERSION
    )]
    pub search_api_version: String,

    #[arg(long, global = true, env = "AZURE_OPENAI_ENDPOINT")]
    pub openai_endpoint: Option<String>,

    #[arg(long, global = true, env = "AZURE_OPENAI_DEPLOYMENT_NAME")]
    pub openai_deployment: Option<String>,

    #[arg(long, global = true, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "AZURE_OPENAI_API_VERSION",
        default_value = chatsearch::connector::DEFAULT_OPENAI_API_VERSION
    )]
    pub openai_api_version: String,

    /// Timeout for each outbound request, in seconds
    #[arg(long, global = true, env = "CHATSEARCH_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// What a failed search does to a triggered query: degrade or fail
    #[arg(
        long,
        global = true,
        env = "CHATSEARCH_SEARCH_FAILURE",
        default_value = "degrade"
    )]
    pub search_failure: SearchFailurePolicy,
}

impl Cli {
    pub fn container_config(&self) -> ContainerConfig {
        let services = &self.services;
        ContainerConfig {
            mock_services: self.mock_services,
            search_key_file: services.search_key_file.clone(),
            search_service: services.search_service.clone(),
            search_endpoint: services.search_endpoint.clone(),
            search_index: services.search_index.clone(),
            search_api_version: services.search_api_version.clone(),
            openai_endpoint: services.openai_endpoint.clone(),
            openai_deployment: services.openai_deployment.clone(),
            openai_api_key: services.openai_api_key.clone(),
            openai_api_version: services.openai_api_version.clone(),
            timeout_secs: services.timeout_secs,
            search_failure: services.search_failure,
        }
    }
}
