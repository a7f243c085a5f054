use paginate::Paginator;

use super::Listing;
use crate::database::items::Item;

#[test]
fn listing_flattens_pagination() {
	let uri = "/items?tag=a&page=2".parse().unwrap();
	let listing = Listing {
		items: vec![Item {
			id: 26,
			name: "twenty-sixth".to_owned(),
			tag: Some("a".to_owned()),
		}],
		pagination: Paginator::builder(&uri).with_total(26),
	};

	assert_eq!(
		serde_json::to_value(&listing).unwrap(),
		serde_json::json!({
			"items": [{ "id": 26, "name": "twenty-sixth", "tag": "a" }],
			"per_page": 25,
			"last_page": 2,
			"first": "/items?tag=a",
			"prev": "/items?tag=a",
			"last": "/items?tag=a&page=2",
		})
	);
}
