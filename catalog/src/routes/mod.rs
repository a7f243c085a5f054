use axum::Router;

mod items;

macro_rules! sub {
	($app:ident, $name:ident) => {
		$app = $app.nest(concat!("/", stringify!($name)), $name::configure())
	};
	($app:ident; $($name:ident),+) => {
		$(sub!($app, $name));+
	};
}

pub fn configure() -> Router {
	let mut app = Router::new();

	sub!(app; items);

	app
}
