use axum::{Router, routing::post};

use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/submit_alert", post(alerts_controller::post_submit_alert))
}
