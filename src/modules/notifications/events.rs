use std::collections::HashMap;
use uuid::Uuid;

/// The dispatchable event kinds, with their wire names and deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    VenueVerified,
    VenueVerificationRequest,
    BookingCancellation,
    Complaint,
    FriendRequest,
    MatchJoin,
    NewBooking,
    PayoutSuccess,
}

impl NoticeKind {
    /// Wire name carried in the push payload's `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::VenueVerified => "venue-verified",
            NoticeKind::VenueVerificationRequest => "venue-verification-request",
            NoticeKind::BookingCancellation => "booking-cancellation",
            NoticeKind::Complaint => "complaint",
            NoticeKind::FriendRequest => "friend-request",
            NoticeKind::MatchJoin => "match-join",
            NoticeKind::NewBooking => "new-booking",
            NoticeKind::PayoutSuccess => "payout-success",
        }
    }

    /// Deep-link path scoped to the recipient's own user id.
    pub fn link_for(&self, recipient_id: Uuid) -> String {
        match self {
            NoticeKind::VenueVerified => format!("/venue/{recipient_id}/home"),
            NoticeKind::VenueVerificationRequest => {
                format!("/admin/{recipient_id}/venues/pending")
            }
            NoticeKind::BookingCancellation => format!("/venue/{recipient_id}/bookings"),
            NoticeKind::Complaint => format!("/admin/{recipient_id}/complaints"),
            NoticeKind::FriendRequest => format!("/player/{recipient_id}/friends"),
            NoticeKind::MatchJoin => format!("/player/{recipient_id}/matches"),
            NoticeKind::NewBooking => format!("/venue/{recipient_id}/bookings"),
            NoticeKind::PayoutSuccess => format!("/venue/{recipient_id}/wallet"),
        }
    }
}

/// One formatted notification, built per recipient, sent once, discarded.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
    data: HashMap<String, String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// Full push payload for one recipient: the event identifiers plus
    /// `type` and a `link` scoped to that recipient.
    pub fn payload_for(&self, recipient_id: Uuid) -> HashMap<String, String> {
        let mut data = self.data.clone();
        data.insert("type".to_string(), self.kind.as_str().to_string());
        data.insert("link".to_string(), self.kind.link_for(recipient_id));
        data
    }
}
