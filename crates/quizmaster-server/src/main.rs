use crate::opt::{Commands, Db, Run};
use anyhow::{Result, bail};
use axum::serve;
use clap::Parser;
use quizmaster_core::quiz::QuizRules;
use quizmaster_utils::net::create_listener;
use quizmaster_utils::tracing::TracingConfig;
use sea_orm::{ConnectOptions, Database};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

mod app;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    quiz_rules: QuizRules,
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    fn new(quiz_rules: QuizRules) -> Self {
        Self(Arc::new(InnerAppConfig { quiz_rules }))
    }

    pub fn quiz_rules(&self) -> &QuizRules {
        &self.0.quiz_rules
    }
}

async fn run(opt: Run) -> Result<()> {
    let _guard = quizmaster_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn.clone())
            .env(opt.env.clone())
            .build(),
    )?;

    let db_type = opt.db.db_url.scheme();
    match db_type {
        "sqlite" | "postgres" | "postgresql" => {}
        _ => bail!("unsupported database type {db_type}"),
    }

    tracing::info!(db_type, "connecting to database");
    let conn = Database::connect(build_connect_options(&opt.db))
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to connect to database"))?;
    quizmaster_db::schema::setup_schema(&conn)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to set up document table"))?;

    let Run {
        host,
        port,
        origins,
        min_questions,
        ..
    } = opt;

    tracing::info!(min_questions, "quiz rules");
    let app_config = AppConfig::new(QuizRules::new(min_questions));
    let app = app::create_app(app_config, &origins, conn)?;

    let listener = create_listener((host, port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db) -> ConnectOptions {
    let mut connect_options = ConnectOptions::new(db_options.db_url.as_str());
    if let Some(min_connections) = db_options.db_min_connections {
        connect_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        connect_options.max_connections(max_connections);
    }
    connect_options.sqlx_logging_level(log::LevelFilter::Debug);
    connect_options
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
