use futures_util::future::join_all;
use tracing::{error, info};

use super::events::Notice;
use crate::app_state::AppState;
use crate::db::Profile;
use crate::error::AppResult;

/// What happened to one recipient's delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    SkippedNoToken,
    Failed,
}

/// Deliver one notice to one recipient.
///
/// A recipient without a token is an explicit, logged skip, never an error.
/// A gateway failure propagates; single-recipient endpoints surface it as a
/// 500 while fan-out wraps this call and isolates it.
pub async fn deliver(
    state: &AppState,
    recipient: &Profile,
    notice: &Notice,
) -> AppResult<DeliveryOutcome> {
    let Some(token) = recipient.fcm_token.as_deref() else {
        info!(
            recipient = %recipient.id,
            kind = notice.kind.as_str(),
            "skipped: no token"
        );
        return Ok(DeliveryOutcome::SkippedNoToken);
    };

    let data = notice.payload_for(recipient.id);
    state
        .push
        .send(token, &notice.title, &notice.body, &data)
        .await?;

    info!(
        recipient = %recipient.id,
        kind = notice.kind.as_str(),
        "notification sent"
    );
    Ok(DeliveryOutcome::Sent)
}

/// Deliver one event to many recipients, a notice built per recipient.
///
/// All sends start together and the call returns once every one has
/// settled. Each attempt is isolated: one recipient's failure is only
/// logged and never aborts or fails the others.
pub async fn deliver_all(
    state: &AppState,
    recipients: &[Profile],
    notice_for: impl Fn(&Profile) -> Notice,
) -> Vec<DeliveryOutcome> {
    let attempts = recipients.iter().map(|recipient| {
        let notice = notice_for(recipient);
        async move {
            match deliver(state, recipient, &notice).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(
                        recipient = %recipient.id,
                        error = %err,
                        "notification delivery failed"
                    );
                    DeliveryOutcome::Failed
                }
            }
        }
    });

    join_all(attempts).await
}
