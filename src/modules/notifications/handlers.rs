use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use super::dispatch;
use super::events::{Notice, NoticeKind};
use crate::app_state::AppState;
use crate::db::Profile;
use crate::error::{AppError, AppResult};

// Required fields arrive as `Option` so a missing one is our 400, not the
// extractor's rejection status.

fn parse_id(field: &str, value: &Option<String>) -> AppResult<Uuid> {
    let raw = value
        .as_deref()
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("{field} is not a valid id")))
}

fn required(field: &str, value: &Option<String>) -> AppResult<String> {
    value
        .clone()
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

fn validated<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

async fn profile_or_404(state: &AppState, id: Uuid, what: &str) -> AppResult<Profile> {
    state
        .store
        .profile_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{what} not found")))
}

/// Admin profiles that can actually be pushed to.
async fn tokened_admins(state: &AppState) -> AppResult<Vec<Profile>> {
    Ok(state
        .store
        .admin_profiles()
        .await?
        .into_iter()
        .filter(|admin| admin.fcm_token.is_some())
        .collect())
}

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenueVerifiedRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
}

pub async fn venue_verified(
    State(state): State<AppState>,
    Json(req): Json<VenueVerifiedRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let user_id = parse_id("userId", &req.user_id)?;

    let owner = profile_or_404(&state, user_id, "User").await?;

    let notice = Notice::new(
        NoticeKind::VenueVerified,
        "Venue verified",
        format!(
            "Congratulations {}, your venue has been verified.",
            owner.first_name
        ),
    )
    .with_data("userId", owner.id.to_string());

    dispatch::deliver(&state, &owner, &notice).await?;
    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenueVerificationRequestRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
    #[validate(required(message = "venueName is required"))]
    pub venue_name: Option<String>,
}

pub async fn venue_verification_request(
    State(state): State<AppState>,
    Json(req): Json<VenueVerificationRequestRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let user_id = parse_id("userId", &req.user_id)?;
    let venue_name = required("venueName", &req.venue_name)?;

    let requester = profile_or_404(&state, user_id, "User").await?;
    let admins = tokened_admins(&state).await?;

    dispatch::deliver_all(&state, &admins, |_admin| {
        Notice::new(
            NoticeKind::VenueVerificationRequest,
            "Venue verification requested",
            format!(
                "{} requested verification for venue \"{}\".",
                requester.full_name(),
                venue_name
            ),
        )
        .with_data("userId", requester.id.to_string())
        .with_data("venueName", venue_name.clone())
    })
    .await;

    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingCancellationRequest {
    #[validate(required(message = "bookingId is required"))]
    pub booking_id: Option<String>,
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
    pub reason: Option<String>,
}

pub async fn booking_cancellation(
    State(state): State<AppState>,
    Json(req): Json<BookingCancellationRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let booking_id = parse_id("bookingId", &req.booking_id)?;
    let user_id = parse_id("userId", &req.user_id)?;

    let canceller = profile_or_404(&state, user_id, "User").await?;
    let booking = state
        .store
        .booking_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
    let venue = state
        .store
        .venue_by_id(booking.venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;
    let owner = profile_or_404(&state, venue.owner_id, "Venue owner").await?;

    let mut body = format!(
        "{} cancelled their booking at {} on {} from {} to {}.",
        canceller.full_name(),
        venue.name,
        booking.date,
        booking.start_time.format("%H:%M"),
        booking.end_time.format("%H:%M"),
    );
    if let Some(reason) = req.reason.as_deref().filter(|r| !r.is_empty()) {
        body.push_str(&format!(" Reason: {reason}"));
    }

    let notice = Notice::new(NoticeKind::BookingCancellation, "Booking cancelled", body)
        .with_data("bookingId", booking.id.to_string())
        .with_data("userId", canceller.id.to_string());

    dispatch::deliver(&state, &owner, &notice).await?;
    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    #[validate(required(message = "type is required"))]
    pub complaint_type: Option<String>,
    #[validate(required(message = "description is required"))]
    pub description: Option<String>,
}

pub async fn complaint(
    State(state): State<AppState>,
    Json(req): Json<ComplaintRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let user_id = parse_id("userId", &req.user_id)?;
    let complaint_type = required("type", &req.complaint_type)?;
    let description = required("description", &req.description)?;

    let complainant = profile_or_404(&state, user_id, "User").await?;
    let admins = tokened_admins(&state).await?;

    dispatch::deliver_all(&state, &admins, |_admin| {
        Notice::new(
            NoticeKind::Complaint,
            "New complaint",
            format!(
                "{} filed a {} complaint: {}",
                complainant.full_name(),
                complaint_type,
                description
            ),
        )
        .with_data("userId", complainant.id.to_string())
        .with_data("complaintType", complaint_type.clone())
    })
    .await;

    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestRequest {
    #[validate(required(message = "senderId is required"))]
    pub sender_id: Option<String>,
    #[validate(required(message = "receiverId is required"))]
    pub receiver_id: Option<String>,
}

pub async fn friend_request(
    State(state): State<AppState>,
    Json(req): Json<FriendRequestRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let sender_id = parse_id("senderId", &req.sender_id)?;
    let receiver_id = parse_id("receiverId", &req.receiver_id)?;

    let sender = profile_or_404(&state, sender_id, "Sender").await?;
    let receiver = profile_or_404(&state, receiver_id, "Receiver").await?;

    let notice = Notice::new(
        NoticeKind::FriendRequest,
        "New friend request",
        format!("{} sent you a friend request.", sender.full_name()),
    )
    .with_data("senderId", sender.id.to_string());

    dispatch::deliver(&state, &receiver, &notice).await?;
    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchJoinRequest {
    #[validate(required(message = "matchId is required"))]
    pub match_id: Option<String>,
    #[validate(required(message = "joinerId is required"))]
    pub joiner_id: Option<String>,
}

pub async fn match_join(
    State(state): State<AppState>,
    Json(req): Json<MatchJoinRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let match_id = parse_id("matchId", &req.match_id)?;
    let joiner_id = parse_id("joinerId", &req.joiner_id)?;

    let game = state
        .store
        .match_by_id(match_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;
    let joiner = profile_or_404(&state, joiner_id, "Joiner").await?;
    let creator = profile_or_404(&state, game.creator_id, "Match creator").await?;

    let notice = Notice::new(
        NoticeKind::MatchJoin,
        "Player joined your match",
        format!("{} joined your match.", joiner.first_name),
    )
    .with_data("matchId", game.id.to_string())
    .with_data("joinerId", joiner.id.to_string());

    dispatch::deliver(&state, &creator, &notice).await?;
    Ok(Json(json!({ "message": "Notification sent" })))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
    #[validate(required(message = "venueId is required"))]
    pub venue_id: Option<String>,
    #[validate(required(message = "matchId is required"))]
    pub match_id: Option<String>,
}

pub async fn new_booking(
    State(state): State<AppState>,
    Json(req): Json<NewBookingRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let user_id = parse_id("userId", &req.user_id)?;
    let venue_id = parse_id("venueId", &req.venue_id)?;
    let match_id = parse_id("matchId", &req.match_id)?;

    let booker = profile_or_404(&state, user_id, "User").await?;
    let venue = state
        .store
        .venue_by_id(venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;
    let owner = profile_or_404(&state, venue.owner_id, "Venue owner").await?;

    let notice = Notice::new(
        NoticeKind::NewBooking,
        "New booking",
        format!("{} booked {}.", booker.full_name(), venue.name),
    )
    .with_data("userId", booker.id.to_string())
    .with_data("venueId", venue.id.to_string())
    .with_data("matchId", match_id.to_string());

    dispatch::deliver(&state, &owner, &notice).await?;
    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSuccessRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
    #[validate(required(message = "amount is required"))]
    pub amount: Option<f64>,
}

pub async fn payout_success(
    State(state): State<AppState>,
    Json(req): Json<PayoutSuccessRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let user_id = parse_id("userId", &req.user_id)?;
    let amount = req
        .amount
        .ok_or_else(|| AppError::Validation("amount is required".to_string()))?;

    let recipient = profile_or_404(&state, user_id, "User").await?;

    let notice = Notice::new(
        NoticeKind::PayoutSuccess,
        "Payout processed",
        format!("Your payout of {amount:.2} has been processed."),
    )
    .with_data("userId", recipient.id.to_string())
    .with_data("amount", format!("{amount:.2}"));

    dispatch::deliver(&state, &recipient, &notice).await?;
    Ok(success())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTokenRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<String>,
    #[validate(required(message = "token is required"))]
    pub token: Option<String>,
}

/// The one write path: upsert the profile's device token, last write wins.
pub async fn register_token(
    State(state): State<AppState>,
    Json(req): Json<RegisterTokenRequest>,
) -> AppResult<Json<Value>> {
    validated(&req)?;
    let user_id = parse_id("userId", &req.user_id)?;
    let token = required("token", &req.token)?;

    state.store.set_fcm_token(user_id, &token).await?;

    Ok(Json(json!({ "message": "Token saved successfully" })))
}
