//! Contact form: field rules, submission payload and interpretation of the
//! server's reply to the async submit.

use crate::api::{Ack, Backend};
use crate::forms::{FieldError, FieldKind, FieldRule};
use crate::error::ApiError;

/// Inputs validated on the contact page, with their form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        }
    }

    pub fn rule(self) -> FieldRule {
        match self {
            ContactField::FirstName | ContactField::LastName => {
                FieldRule::required(FieldKind::Text)
            }
            ContactField::Email => FieldRule::required(FieldKind::Email),
            ContactField::Phone => FieldRule::required(FieldKind::Phone),
        }
    }
}

/// Everything the contact form posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub investment_budget: String,
    pub investment_type: String,
    pub preferred_location: String,
    pub timeline: String,
    pub message: String,
    pub property_interests: Vec<String>,
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    /// Every failing required field, in form order.
    pub fn validate(&self) -> Vec<(ContactField, FieldError)> {
        ContactField::REQUIRED
            .iter()
            .filter_map(|&field| {
                field
                    .rule()
                    .check(self.value(field))
                    .err()
                    .map(|err| (field, err))
            })
            .collect()
    }

    /// Name/value pairs in the order the server form expects. Interests are
    /// repeated under one name like checkbox groups.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = [
            ("firstName", self.first_name.trim()),
            ("lastName", self.last_name.trim()),
            ("email", self.email.trim()),
            ("phone", self.phone.trim()),
            ("investmentBudget", self.investment_budget.as_str()),
            ("investmentType", self.investment_type.as_str()),
            ("preferredLocation", self.preferred_location.as_str()),
            ("timeline", self.timeline.as_str()),
            ("message", self.message.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        fields.extend(
            self.property_interests
                .iter()
                .map(|interest| ("propertyInterest".to_string(), interest.clone())),
        );
        fields
    }
}

/// What to do after an async submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The server redirected (classic Django flow); follow it.
    Redirect(String),
    /// Accepted; show the message and reset the form.
    Sent(String),
    /// Refused with a message to show.
    Refused(String),
    /// JSON without a message; nothing to show.
    Silent,
    /// The async path failed; submit the form natively instead.
    Fallback(ApiError),
    /// Required fields failed their rules; nothing was sent.
    Invalid(Vec<(ContactField, FieldError)>),
}

pub const DEFAULT_SENT: &str = "Thank you for your inquiry! Our team will contact you within 24 hours.";

pub async fn submit<B: Backend>(
    backend: &B,
    action: &str,
    submission: &ContactSubmission,
) -> ContactOutcome {
    let problems = submission.validate();
    if !problems.is_empty() {
        log::debug!("contact submit blocked by {} invalid field(s)", problems.len());
        return ContactOutcome::Invalid(problems);
    }

    let reply = match backend.post_form(action, &submission.form_fields()).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("contact submission failed: {}", e);
            return ContactOutcome::Fallback(e);
        }
    };

    if let Some(url) = reply.redirected_to {
        return ContactOutcome::Redirect(url);
    }

    // Rejections come back as 400 with a JSON message, so status is not
    // checked here.
    match serde_json::from_str::<Ack>(&reply.body) {
        Ok(Ack {
            success: true,
            message,
            ..
        }) => ContactOutcome::Sent(message.unwrap_or_else(|| DEFAULT_SENT.to_string())),
        Ok(Ack {
            message: Some(message),
            ..
        }) => ContactOutcome::Refused(message),
        Ok(_) => ContactOutcome::Silent,
        Err(e) => {
            log::error!("unreadable contact reply (status {}): {}", reply.status, e);
            ContactOutcome::Fallback(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{ScriptedBackend, Sent};
    use crate::api::HttpReply;
    use futures::executor::block_on;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            first_name: "Amal".into(),
            last_name: "Haddad".into(),
            email: "amal@example.com".into(),
            phone: "+971 50 123 4567".into(),
            property_interests: vec!["villa".into(), "apartment".into()],
            ..Default::default()
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let submission = ContactSubmission {
            first_name: "Amal".into(),
            email: "nope".into(),
            phone: "12".into(),
            ..Default::default()
        };
        assert_eq!(
            submission.validate(),
            vec![
                (ContactField::LastName, FieldError::Required),
                (ContactField::Email, FieldError::InvalidEmail),
                (ContactField::Phone, FieldError::InvalidPhone),
            ]
        );
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn missing_required_field_sends_nothing() {
        let backend = ScriptedBackend::new().reply_json(r#"{"success":true}"#);
        let outcome = block_on(submit(&backend, "/contact/", &ContactSubmission::default()));
        let ContactOutcome::Invalid(problems) = outcome else {
            panic!("expected invalid outcome, got {:?}", outcome);
        };
        assert_eq!(problems.len(), 4);
        assert!(backend.sent().is_empty());

        let no_phone = ContactSubmission {
            phone: String::new(),
            ..filled()
        };
        assert_eq!(
            block_on(submit(&backend, "/contact/", &no_phone)),
            ContactOutcome::Invalid(vec![(ContactField::Phone, FieldError::Required)])
        );
        assert!(backend.sent().is_empty());
    }

    #[test]
    fn interests_repeat_under_one_name() {
        let fields = filled().form_fields();
        let interests: Vec<&str> = fields
            .iter()
            .filter(|(k, _)| k == "propertyInterest")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(interests, vec!["villa", "apartment"]);
        assert_eq!(fields[0], ("firstName".to_string(), "Amal".to_string()));
    }

    #[test]
    fn json_success_is_sent() {
        let backend = ScriptedBackend::new()
            .reply_json(r#"{"success":true,"message":"Thanks, we'll be in touch."}"#);
        let outcome = block_on(submit(&backend, "/contact/", &filled()));
        assert_eq!(outcome, ContactOutcome::Sent("Thanks, we'll be in touch.".into()));
        assert!(matches!(&backend.sent()[0], Sent::Form(action, _) if action == "/contact/"));
    }

    #[test]
    fn bad_request_message_is_refused() {
        let backend = ScriptedBackend::new().reply(Ok(HttpReply {
            status: 400,
            redirected_to: None,
            body: r#"{"success":false,"message":"Please fill in all required fields."}"#.into(),
        }));
        let outcome = block_on(submit(&backend, "/contact/", &filled()));
        assert_eq!(
            outcome,
            ContactOutcome::Refused("Please fill in all required fields.".into())
        );
    }

    #[test]
    fn redirect_is_followed() {
        let backend = ScriptedBackend::new().reply(Ok(HttpReply {
            status: 200,
            redirected_to: Some("/contact/?sent=1".into()),
            body: "<html></html>".into(),
        }));
        let outcome = block_on(submit(&backend, "/contact/", &filled()));
        assert_eq!(outcome, ContactOutcome::Redirect("/contact/?sent=1".into()));
    }

    #[test]
    fn html_reply_or_network_error_falls_back() {
        let html = ScriptedBackend::new().reply_json("<html>csrf failure</html>");
        assert!(matches!(
            block_on(submit(&html, "/contact/", &filled())),
            ContactOutcome::Fallback(ApiError::Malformed(_))
        ));

        let offline = ScriptedBackend::new().reply(Err(ApiError::Network("offline".into())));
        assert!(matches!(
            block_on(submit(&offline, "/contact/", &filled())),
            ContactOutcome::Fallback(ApiError::Network(_))
        ));
    }
}
