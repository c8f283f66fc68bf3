// src/cli/mod.rs — CLI definition (clap derive)

pub mod agents;
pub mod call;

use clap::{Parser, Subcommand};

use crate::core::agents::AgentKind;

#[derive(Parser)]
#[command(name = "voicedial", about = "Live demo calls through a voice-AI call API", version)]
pub struct Cli {
    /// Config file path (defaults to ~/.config/voicedial/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Place a demo call and watch its status live (Ctrl-C hangs up)
    Call {
        /// Destination phone number; spaces are allowed and stripped
        phone: String,

        /// Agent that runs the call
        #[arg(short, long, value_enum, default_value_t = AgentKind::Priya)]
        agent: AgentKind,
    },
    /// List the available demo agents
    Agents,
}
