//! Newsletter signup.

use crate::api::{Ack, Backend};
use crate::config::{GENERIC_ERROR, NEWSLETTER_PATH};
use crate::notify::Notification;
use crate::utils::is_valid_email;

pub const MISSING_EMAIL: &str = "Please enter your email address";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SUBSCRIBED: &str = "Thank you for subscribing to our newsletter!";

/// Result of a signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeOutcome {
    pub notification: Notification,
    /// Whether the input should be cleared.
    pub subscribed: bool,
}

impl SubscribeOutcome {
    fn rejected(notification: Notification) -> Self {
        SubscribeOutcome {
            notification,
            subscribed: false,
        }
    }
}

/// Client-side check; `Err` carries the notice to show instead of sending.
pub fn precheck(email: &str) -> Result<&str, Notification> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Notification::warning(MISSING_EMAIL));
    }
    if !is_valid_email(email) {
        return Err(Notification::error(INVALID_EMAIL));
    }
    Ok(email)
}

pub async fn subscribe<B: Backend>(backend: &B, email: &str) -> SubscribeOutcome {
    let email = match precheck(email) {
        Ok(email) => email,
        Err(notice) => return SubscribeOutcome::rejected(notice),
    };

    let body = serde_json::json!({ "email": email });
    let ack = backend
        .post_json(NEWSLETTER_PATH, &body)
        .await
        .and_then(|reply| reply.json::<Ack>());

    match ack {
        Ok(Ack { success: true, .. }) => {
            log::info!("newsletter subscription accepted");
            SubscribeOutcome {
                notification: Notification::success(SUBSCRIBED),
                subscribed: true,
            }
        }
        Ok(Ack { error, .. }) => SubscribeOutcome::rejected(Notification::error(
            error.unwrap_or_else(|| GENERIC_ERROR.to_string()),
        )),
        Err(e) => {
            log::warn!("newsletter signup failed: {}", e);
            SubscribeOutcome::rejected(Notification::error(GENERIC_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{ScriptedBackend, Sent};
    use crate::error::ApiError;
    use crate::notify::NoticeLevel;
    use futures::executor::block_on;

    #[test]
    fn malformed_email_sends_nothing() {
        let backend = ScriptedBackend::new();
        let outcome = block_on(subscribe(&backend, "not-an-email"));
        assert_eq!(outcome.notification, Notification::error(INVALID_EMAIL));
        assert!(backend.sent().is_empty());
    }

    #[test]
    fn blank_email_warns() {
        let backend = ScriptedBackend::new();
        let outcome = block_on(subscribe(&backend, "   "));
        assert_eq!(outcome.notification.level, NoticeLevel::Warning);
        assert!(backend.sent().is_empty());
    }

    #[test]
    fn valid_email_posts_and_succeeds() {
        let backend = ScriptedBackend::new().reply_json(r#"{"success":true}"#);
        let outcome = block_on(subscribe(&backend, " a@b.com "));
        assert_eq!(
            backend.sent(),
            vec![Sent::Json(
                NEWSLETTER_PATH.into(),
                serde_json::json!({ "email": "a@b.com" })
            )]
        );
        assert_eq!(outcome.notification, Notification::success(SUBSCRIBED));
        assert!(outcome.subscribed);
    }

    #[test]
    fn server_error_text_is_shown() {
        let backend = ScriptedBackend::new()
            .reply_json(r#"{"success":false,"error":"Email already subscribed"}"#);
        let outcome = block_on(subscribe(&backend, "a@b.com"));
        assert_eq!(
            outcome.notification,
            Notification::error("Email already subscribed")
        );
        assert!(!outcome.subscribed);
    }

    #[test]
    fn transport_failure_gives_generic_error() {
        let backend = ScriptedBackend::new().reply(Err(ApiError::Network("offline".into())));
        let outcome = block_on(subscribe(&backend, "a@b.com"));
        assert_eq!(outcome.notification, Notification::error(GENERIC_ERROR));
    }
}
