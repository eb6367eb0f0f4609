// src/cli.rs
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::services::summary_lookup::LookupVariant;

#[derive(Debug, Parser)]
#[command(name = "rigaudchat", version, about = "RigaudChat health-triage assistant client and relay")]
pub struct Cli {
    /// Backend base URL (overrides RIGAUD_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Relay base URL (overrides RIGAUD_RELAY_URL)
    #[arg(long, global = true)]
    pub relay_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the relay server (`/api/chat`, `/api/summary`)
    Serve {
        /// Listen address (overrides RIGAUD_BIND_ADDR)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Chat with the assistant in the terminal
    Chat {
        /// Phone number identifying this conversation
        #[arg(long)]
        phone: Option<String>,
    },
    /// Look up a triage summary
    Summary {
        /// Conversation ID or phone number, depending on `--via`
        identifier: String,

        #[arg(long, value_enum, default_value_t = Via::Relay)]
        via: Via,

        /// Also print the raw triage narrative
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Via {
    /// POST to the relay by conversation ID
    Relay,
    /// GET the backend by conversation ID
    ConversationId,
    /// GET the backend by phone number
    Phone,
}

impl From<Via> for LookupVariant {
    fn from(via: Via) -> Self {
        match via {
            Via::Relay => LookupVariant::Relay,
            Via::ConversationId => LookupVariant::ByConversationId,
            Via::Phone => LookupVariant::ByPhoneNumber,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the environment config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(url) = &self.relay_url {
            config.relay_url = url.clone();
        }
        if let Command::Serve { bind: Some(bind) } = &self.command {
            config.bind_addr = bind.clone();
        }
    }
}
