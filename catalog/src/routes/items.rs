use std::sync::Arc;

use axum::extract::{self, OriginalUri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use paginate::{Paginator, TotalSource};

use crate::config::Config;
use crate::database::items::{Item, ItemsQuery};
use crate::database::Database;
use crate::error;

#[derive(serde::Deserialize)]
pub struct Query {
	pub tag: Option<String>,
}

#[derive(serde::Serialize)]
struct Listing<'r> {
	items: Vec<Item>,
	#[serde(flatten)]
	pagination: Paginator<'r>,
}

pub async fn get_handler(
	OriginalUri(uri): OriginalUri,
	extract::Query(Query { tag }): extract::Query<Query>,
	extract::Extension(database): extract::Extension<Arc<Database>>,
	extract::Extension(config): extract::Extension<Arc<Config>>,
) -> Result<Response, error::Sqlx> {
	let query = ItemsQuery::new(&database).tagged(tag.as_deref());
	let pagination = Paginator::builder(&uri)
		.params(&config.pagination)
		.build(TotalSource::Query(&query))
		.await;

	let items = pagination
		.paginate(query)
		.fetch_all()
		.await
		.map_err(error::Sqlx)?;

	Ok(Json(Listing { items, pagination }).into_response())
}

pub fn configure() -> Router {
	Router::new().route("/", axum::routing::get(get_handler))
}

#[cfg(test)]
mod test;
