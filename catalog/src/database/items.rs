use paginate::{BoxError, PageNum, QueryHandle};

use super::Database;

pub type Id = i32;

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct Item {
	pub id: Id,
	pub name: String,
	pub tag: Option<String>,
}

/// Items, optionally filtered by tag, in id order. Nothing runs until [`count`](QueryHandle::count) or [`ItemsQuery::fetch_all`].
#[derive(Debug, Clone, Copy)]
pub struct ItemsQuery<'a> {
	database: &'a Database,
	tag: Option<&'a str>,
	offset: PageNum,
	limit: Option<PageNum>,
}

impl<'a> ItemsQuery<'a> {
	pub fn new(database: &'a Database) -> Self {
		Self {
			database,
			tag: None,
			offset: 0,
			limit: None,
		}
	}

	pub fn tagged(mut self, tag: Option<&'a str>) -> Self {
		self.tag = tag;
		self
	}

	pub async fn fetch_all(self) -> sqlx::Result<Vec<Item>> {
		// a NULL limit means no limit
		sqlx::query_as(
			"SELECT id, name, tag FROM items WHERE $1::text IS NULL OR tag = $1 ORDER BY id OFFSET $2 LIMIT $3",
		)
		.bind(self.tag)
		.bind(self.offset)
		.bind(self.limit)
		.fetch_all(self.database)
		.await
	}
}

#[async_trait::async_trait]
impl QueryHandle for ItemsQuery<'_> {
	async fn count(&self) -> Result<PageNum, BoxError> {
		let count: i64 =
			sqlx::query_scalar("SELECT count(*) FROM items WHERE $1::text IS NULL OR tag = $1")
				.bind(self.tag)
				.fetch_one(self.database)
				.await?;
		Ok(count)
	}

	fn offset(mut self, offset: PageNum) -> Self {
		self.offset = offset;
		self
	}

	fn limit(mut self, limit: PageNum) -> Self {
		self.limit = Some(limit);
		self
	}
}
