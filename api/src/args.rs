use std::path::PathBuf;

use canteen_core::domain::common::{CanteenConfig, SelectionStorageConfig, SessionConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "canteen-api", about = "Karmic Canteen dashboard API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub selections: SelectionArgs,

    /// Emit logs as JSON.
    #[arg(long, env = "CANTEEN_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "CANTEEN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "CANTEEN_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "CANTEEN_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "CANTEEN_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    /// HS256 secret used to sign session tokens.
    #[arg(
        long = "session-secret",
        env = "CANTEEN_SESSION_SECRET",
        default_value = "karmic-canteen-dev-secret"
    )]
    pub secret: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SelectionArgs {
    /// Directory holding the per-user meal selection documents.
    #[arg(
        long = "selections-dir",
        env = "CANTEEN_SELECTIONS_DIR",
        default_value = "./data/selections"
    )]
    pub data_dir: PathBuf,
}

impl From<Args> for CanteenConfig {
    fn from(args: Args) -> Self {
        Self {
            session: SessionConfig {
                secret: args.session.secret,
            },
            selections: SelectionStorageConfig {
                data_dir: args.selections.data_dir,
            },
        }
    }
}
