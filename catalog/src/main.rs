#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use axum::Extension;

mod config;
mod database;
mod error;
mod routes;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("reading configuration: {0}")]
	Config(#[from] figment::Error),
	#[error("invalid pagination parameters: {0}")]
	Pagination(#[from] paginate::ParamsError),
	#[error("connecting to database: {0}")]
	ConnectDb(#[from] sqlx::Error),
	#[error("running migrations: {0}")]
	Migrate(#[from] sqlx::migrate::MigrateError),
	#[error("running server: {0}")]
	RunServer(#[from] hyper::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let config = config::config()?;
	config.pagination.validate()?;
	let config = Arc::new(config);

	init_logging(config.log_level);

	let database = database::connect(&config.database_url)
		.await
		.map(Arc::new)?;

	let mut app = routes::configure();
	app = app.layer(Extension(database));
	app = app.layer(Extension(Arc::clone(&config)));
	app = app.layer(tower_http::trace::TraceLayer::new_for_http());

	tracing::info!(address = %config.address, "listening");
	axum::Server::bind(&config.address)
		.serve(app.into_make_service())
		.await?;
	Ok(())
}

fn init_logging(log_level: config::LogLevel) {
	use tracing_subscriber::filter::FilterFn;
	use tracing_subscriber::layer::{Layer, SubscriberExt};
	use tracing_subscriber::util::SubscriberInitExt;

	let filter = FilterFn::new(move |metadata| {
		let internal = metadata
			.module_path()
			.and_then(|path| path.split("::").next())
			.map_or(false, |krate| {
				krate == env!("CARGO_PKG_NAME") || krate == "paginate"
			});
		let required_level = if internal {
			log_level.internal
		} else {
			log_level.external
		};
		// more verbose levels compare greater
		metadata.level() <= &required_level
	});

	let layer = tracing_subscriber::fmt::layer()
		.with_file(true)
		.with_line_number(true)
		.with_writer(std::io::stderr);

	tracing_subscriber::registry()
		.with(layer.with_filter(filter))
		.init();
}
