use axum::{Router, routing::get};

use crate::{AppState, controllers::setups_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/query_setups", get(setups_controller::get_query_setups))
}
