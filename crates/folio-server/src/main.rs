// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Folio portfolio site server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_server::{create_router, AppState};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// Folio server - locale-aware portfolio site.
#[derive(Parser, Debug)]
#[command(name = "folio-server", about = "Folio portfolio site server", version)]
struct Args {
	/// TOML configuration file, layered over /etc/folio/server.toml
	#[arg(long, env = "FOLIO_SERVER_CONFIG")]
	config: Option<PathBuf>,

	/// Subcommands for folio-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => folio_server_config::load_config_with_file(path)?,
		None => folio_server_config::load_config()?,
	};

	let json_logs = config.logging.json;
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
		.with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		locales = ?config.i18n.locales.as_slice(),
		base_locale = %config.i18n.locales.base(),
		"starting folio-server"
	);

	let state = AppState::new(&config);
	let app = create_router(state).layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!(%addr, "listening");
	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
