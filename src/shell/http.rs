use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::gatherings::use_cases::add_time_slot::inbound::http as add_slot_http;
use crate::modules::gatherings::use_cases::browse_gatherings::inbound::http as browse_http;
use crate::modules::gatherings::use_cases::cancel_reservation::inbound::http as cancel_http;
use crate::modules::gatherings::use_cases::change_reservation::inbound::http as change_http;
use crate::modules::gatherings::use_cases::create_gathering::inbound::http as create_http;
use crate::modules::gatherings::use_cases::list_guests::inbound::http as guests_http;
use crate::modules::gatherings::use_cases::list_reservations::inbound::http as list_res_http;
use crate::modules::gatherings::use_cases::lookup_reservation::inbound::http as lookup_http;
use crate::modules::gatherings::use_cases::place_reservation::inbound::http as place_http;
use crate::modules::gatherings::use_cases::remove_gathering::inbound::http as remove_http;
use crate::modules::gatherings::use_cases::remove_time_slot::inbound::http as remove_slot_http;
use crate::modules::gatherings::use_cases::send_mailing::inbound::http as mailing_http;
use crate::modules::gatherings::use_cases::update_gathering::inbound::http as update_http;
use crate::modules::gatherings::use_cases::update_time_slot::inbound::http as update_slot_http;
use crate::modules::gatherings::use_cases::upload_media::inbound::http as media_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/gatherings", get(browse_http::handle_list_public))
        .route("/gatherings/{id}", get(browse_http::handle_get_public))
        .route("/gatherings/{id}/reservations", post(place_http::handle))
        .route("/reservations/lookup", post(lookup_http::handle))
        .route("/reservations/cancel", post(cancel_http::handle_holder));

    let admin = Router::new()
        .route(
            "/gatherings",
            get(browse_http::handle_list_admin).post(create_http::handle),
        )
        .route(
            "/gatherings/{id}",
            get(browse_http::handle_get_admin)
                .put(update_http::handle)
                .delete(remove_http::handle),
        )
        .route("/gatherings/{id}/slots", post(add_slot_http::handle))
        .route(
            "/gatherings/{id}/slots/{slot_id}",
            put(update_slot_http::handle).delete(remove_slot_http::handle),
        )
        .route(
            "/gatherings/{id}/reservations",
            get(list_res_http::handle).post(place_http::handle),
        )
        .route(
            "/gatherings/{id}/reservations/{reservation_id}",
            put(change_http::handle).delete(cancel_http::handle),
        )
        .route("/guests", get(guests_http::handle))
        .route("/mailings", post(mailing_http::handle))
        .route("/media/{filename}", put(media_http::handle));

    Router::new()
        .merge(public)
        .nest("/admin", admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
