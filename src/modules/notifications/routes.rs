use axum::{routing::post, Router};

use super::handlers::{
    booking_cancellation, complaint, friend_request, match_join, new_booking, payout_success,
    register_token, venue_verification_request, venue_verified,
};
use crate::app_state::AppState;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/venue-verified", post(venue_verified))
        .route(
            "/venue-verification-request",
            post(venue_verification_request),
        )
        .route("/booking-cancellation", post(booking_cancellation))
        .route("/complaint", post(complaint))
        .route("/friend-request", post(friend_request))
        .route("/match-join", post(match_join))
        .route("/new-booking", post(new_booking))
        .route("/payout-success", post(payout_success))
        .route("/token", post(register_token))
}
