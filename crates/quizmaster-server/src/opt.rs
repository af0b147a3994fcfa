use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use quizmaster_core::quiz::DEFAULT_MIN_QUESTIONS;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "quizmaster", about = "Run the quizmaster backend")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Db {
    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgres:// url of the document store")]
    pub(crate) db_url: Url,

    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) db: Db,

    #[arg(long, value_delimiter = ',', help = "Origins allowed to call the api from a browser")]
    pub(crate) origins: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_MIN_QUESTIONS, help = "Questions a quiz needs to be accepted")]
    pub(crate) min_questions: usize,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment used by sentry")]
    pub(crate) env: String,
}
