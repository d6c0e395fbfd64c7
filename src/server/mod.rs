mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::api::API;
use crate::error::{server_error, Error};
use crate::server::handlers::{categories, google_places, stops, trips};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/categories", get(categories::list))
        .route("/trips", post(trips::create))
        .route("/trips/:id", get(trips::find))
        .route("/trips/:id/origin", patch(trips::update_origin))
        .route("/trips/:id/destination", patch(trips::update_destination))
        .route("/trips/:id/categories", put(trips::update_categories))
        .route("/trips/:id/categories/:category", patch(trips::toggle_category))
        .route("/trips/:id/search", post(stops::search))
        .route("/trips/:id/stops", post(stops::add))
        .route("/trips/:id/stops/:place_id", delete(stops::remove))
        .route(
            "/google_places/suggestions",
            get(google_places::find_suggestions),
        )
        .route("/google_places/details/:id", get(google_places::find))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    let server = axum::Server::try_bind(&addr).map_err(server_error)?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
