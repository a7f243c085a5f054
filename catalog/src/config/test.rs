use figment::providers::{Format as _, Toml};
use figment::{Figment, Jail};
use tracing::level_filters::LevelFilter;

use super::{Config, LogLevel};

fn parse(toml: &str) -> Result<Config, figment::Error> {
	Figment::from(Toml::string(toml)).extract()
}

#[test]
fn minimal() {
	let config = parse(
		r#"
		address = "127.0.0.1:8080"
		database_url = "postgres://localhost/catalog"
		"#,
	)
	.unwrap();

	assert_eq!(config.address.port(), 8080);
	assert_eq!(config.log_level, super::default_log_level());
	assert_eq!(config.pagination, paginate::Params::default());
}

#[test]
fn log_level_together() {
	let config = parse(
		r#"
		address = "127.0.0.1:8080"
		database_url = "postgres://localhost/catalog"
		log_level = "debug"
		"#,
	)
	.unwrap();

	assert_eq!(
		config.log_level,
		LogLevel {
			internal: LevelFilter::DEBUG,
			external: LevelFilter::DEBUG,
		}
	);
}

#[test]
fn log_level_separate() {
	let config = parse(
		r#"
		address = "127.0.0.1:8080"
		database_url = "postgres://localhost/catalog"
		log_level = { internal = "trace" }
		"#,
	)
	.unwrap();

	assert_eq!(config.log_level.internal, LevelFilter::TRACE);
	assert_eq!(config.log_level.external, LevelFilter::WARN);
}

#[test]
fn bad_log_level() {
	assert!(parse(
		r#"
		address = "127.0.0.1:8080"
		database_url = "postgres://localhost/catalog"
		log_level = "loud"
		"#,
	)
	.is_err());
}

#[test]
fn partial_pagination() {
	let config = parse(
		r#"
		address = "127.0.0.1:8080"
		database_url = "postgres://localhost/catalog"

		[pagination]
		page = "p"
		"#,
	)
	.unwrap();

	assert_eq!(config.pagination.page, "p");
	assert_eq!(config.pagination.per_page, "per_page");
	assert_eq!(config.pagination.default_per_page, 25);
}

#[test]
fn file_and_environment() {
	Jail::expect_with(|jail| {
		jail.create_file(
			"catalog.toml",
			r#"
			address = "0.0.0.0:80"
			database_url = "postgres://localhost/catalog"
			"#,
		)?;
		jail.set_env("CATALOG_ADDRESS", "127.0.0.1:3000");
		jail.set_env("CATALOG_PAGINATION__DEFAULT_PER_PAGE", "50");

		let config = super::config()?;
		assert_eq!(config.address.port(), 3000);
		assert_eq!(config.pagination.default_per_page, 50);
		Ok(())
	});
}
