use chrono::{DateTime, Utc};
use futures::future::try_join;
use serde::Serialize;

use crate::mailer::{MailConfig, MailError, Mailer};

/// Which contact tab is pre-activated when the dialog opens. A UI default
/// only; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactIntent {
    #[default]
    Collaboration,
    MediaKit,
    General,
}

impl ContactIntent {
    pub const ALL: [ContactIntent; 3] = [
        ContactIntent::Collaboration,
        ContactIntent::MediaKit,
        ContactIntent::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactIntent::Collaboration => "Collaboration",
            ContactIntent::MediaKit => "Media Kit",
            ContactIntent::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    Under5k,
    Between5kAnd15k,
    Between15kAnd30k,
    Over30k,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::Under5k,
        Budget::Between5kAnd15k,
        Budget::Between15kAnd30k,
        Budget::Over30k,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Budget::Under5k => "under-5k",
            Budget::Between5kAnd15k => "5k-15k",
            Budget::Between15kAnd30k => "15k-30k",
            Budget::Over30k => "30k-plus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Under5k => "Under $5k",
            Budget::Between5kAnd15k => "$5k - $15k",
            Budget::Between15kAnd30k => "$15k - $30k",
            Budget::Over30k => "$30k+",
        }
    }

    pub fn from_value(value: &str) -> Option<Budget> {
        Budget::ALL.into_iter().find(|b| b.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeline {
    Asap,
    TwoToFourWeeks,
    OneToTwoMonths,
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Asap,
        Timeline::TwoToFourWeeks,
        Timeline::OneToTwoMonths,
        Timeline::Flexible,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Timeline::Asap => "asap",
            Timeline::TwoToFourWeeks => "2-4-weeks",
            Timeline::OneToTwoMonths => "1-2-months",
            Timeline::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Asap => "ASAP",
            Timeline::TwoToFourWeeks => "2-4 weeks",
            Timeline::OneToTwoMonths => "1-2 months",
            Timeline::Flexible => "Flexible",
        }
    }

    pub fn from_value(value: &str) -> Option<Timeline> {
        Timeline::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Brand,
    Budget,
    Timeline,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Brand,
        Field::Budget,
        Field::Timeline,
        Field::Message,
    ];
}

const MESSAGE_MIN_CHARS: usize = 10;

/// The lead-capture form. Created empty when the contact dialog opens and
/// discarded when it closes; the submit action is only enabled once every
/// field validates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub brand: String,
    pub budget: Option<Budget>,
    pub timeline: Option<Timeline>,
    pub message: String,
}

impl LeadForm {
    /// Inline error for one field, or `None` when that field validates.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name if self.name.trim().is_empty() => Some("Full name is required"),
            Field::Email if self.email.trim().is_empty() => Some("Email is required"),
            Field::Email if !email_shape_ok(self.email.trim()) => Some("Enter a valid email"),
            Field::Brand if self.brand.trim().is_empty() => Some("Brand or agency is required"),
            Field::Budget if self.budget.is_none() => Some("Budget is required"),
            Field::Timeline if self.timeline.is_none() => Some("Timeline is required"),
            Field::Message if self.message.trim().is_empty() => Some("Tell us about the project"),
            Field::Message if self.message.trim().chars().count() < MESSAGE_MIN_CHARS => {
                Some("Add more detail (10+ characters)")
            }
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.field_error(f).is_none())
    }
}

/// Simple `local@domain.tld` shape check, no whitespace anywhere.
fn email_shape_ok(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Submission lifecycle for one open contact-dialog session:
/// idle -> submitting -> {success, error}; error -> submitting on retry;
/// any state -> idle when the dialog is reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// The template parameters sent with both notification sends. Beyond the form
/// fields this carries the active intent, an ISO-8601 timestamp, and a set of
/// alias keys repeating the name/email values under the synonymous parameter
/// names the receiving templates use. The aliases are part of the external
/// template contract, not a business rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub brand: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub intent: ContactIntent,
    pub submitted_at: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub user_name: String,
    pub user_email: String,
    pub to_name: String,
    pub to_email: String,
}

impl LeadPayload {
    /// Precondition: `form.is_valid()`.
    pub fn new(form: &LeadForm, intent: ContactIntent, submitted_at: DateTime<Utc>) -> Self {
        let budget = form.budget.map(|b| b.value()).unwrap_or_default();
        let timeline = form.timeline.map(|t| t.value()).unwrap_or_default();
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            brand: form.brand.clone(),
            budget: budget.to_string(),
            timeline: timeline.to_string(),
            message: form.message.clone(),
            intent,
            submitted_at: submitted_at.to_rfc3339(),
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            reply_to: form.email.clone(),
            user_name: form.name.clone(),
            user_email: form.email.clone(),
            to_name: form.name.clone(),
            to_email: form.email.clone(),
        }
    }
}

/// Dispatch the owner notification and the submitter confirmation as one
/// logical operation: both sends run jointly and the whole submission
/// succeeds only if both do. No retry, no partial success.
pub async fn submit_lead<M: Mailer>(
    mailer: &M,
    config: &MailConfig,
    payload: &LeadPayload,
) -> Result<(), MailError> {
    try_join(
        mailer.send(config.owner_template, payload),
        mailer.send(config.confirmation_template, payload),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    fn valid_form() -> LeadForm {
        LeadForm {
            name: "Ava Laurent".to_string(),
            email: "ava@brand.com".to_string(),
            brand: "Laurent & Co".to_string(),
            budget: Some(Budget::Between5kAnd15k),
            timeline: Some(Timeline::TwoToFourWeeks),
            message: "Product launch across three platforms.".to_string(),
        }
    }

    fn test_config() -> MailConfig {
        MailConfig {
            service_id: "service_test",
            owner_template: "template_owner",
            confirmation_template: "template_confirmation",
            public_key: "public_test",
        }
    }

    /// Records every send and fails any call whose template id matches
    /// `fail_template`.
    struct RecordingMailer {
        calls: RefCell<Vec<(String, serde_json::Value)>>,
        fail_template: Option<&'static str>,
    }

    impl RecordingMailer {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_template: None,
            }
        }

        fn failing_on(template: &'static str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_template: Some(template),
            }
        }
    }

    impl Mailer for RecordingMailer {
        async fn send(&self, template_id: &str, params: &LeadPayload) -> Result<(), MailError> {
            self.calls.borrow_mut().push((
                template_id.to_string(),
                serde_json::to_value(params).expect("payload should serialize"),
            ));
            if self.fail_template == Some(template_id) {
                Err(MailError::Rejected(400))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_empty_form_fails_every_validator() {
        let form = LeadForm::default();
        assert!(!form.is_valid());
        for field in Field::ALL {
            assert!(form.field_error(field).is_some(), "{field:?} should error");
        }
    }

    #[test]
    fn test_valid_form_passes_every_validator() {
        let form = valid_form();
        assert!(form.is_valid());
        for field in Field::ALL {
            assert_eq!(form.field_error(field), None, "{field:?} should pass");
        }
    }

    #[test]
    fn test_submit_enabled_iff_all_fields_valid() {
        // Break each field in turn; one failing validator must disable the
        // whole form while the other five still pass.
        let breakers: [(Field, fn(&mut LeadForm)); 6] = [
            (Field::Name, |f| f.name = "  ".to_string()),
            (Field::Email, |f| f.email = "not-an-email".to_string()),
            (Field::Brand, |f| f.brand = String::new()),
            (Field::Budget, |f| f.budget = None),
            (Field::Timeline, |f| f.timeline = None),
            (Field::Message, |f| f.message = "too short".to_string()),
        ];
        for (field, breaker) in breakers {
            let mut form = valid_form();
            breaker(&mut form);
            assert!(!form.is_valid(), "{field:?} should invalidate the form");
            assert!(form.field_error(field).is_some());
            for other in Field::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(form.field_error(other), None);
            }
        }
    }

    #[test]
    fn test_email_shape() {
        for good in ["a@b.co", "name@brand.com", "first.last@sub.domain.org"] {
            assert!(email_shape_ok(good), "{good} should pass");
        }
        for bad in ["", "plain", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.d"] {
            assert!(!email_shape_ok(bad), "{bad} should fail");
        }
    }

    #[test]
    fn test_message_length_boundary() {
        let mut form = valid_form();
        form.message = "123456789".to_string();
        assert_eq!(
            form.field_error(Field::Message),
            Some("Add more detail (10+ characters)")
        );
        form.message = "1234567890".to_string();
        assert_eq!(form.field_error(Field::Message), None);
    }

    #[test]
    fn test_budget_timeline_select_values_round_trip() {
        for budget in Budget::ALL {
            assert_eq!(Budget::from_value(budget.value()), Some(budget));
        }
        assert_eq!(Budget::from_value(""), None);
        for timeline in Timeline::ALL {
            assert_eq!(Timeline::from_value(timeline.value()), Some(timeline));
        }
        assert_eq!(Timeline::from_value("someday"), None);
    }

    #[test]
    fn test_payload_carries_aliases_and_intent() {
        let form = valid_form();
        let submitted_at = "2026-08-29T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let payload = LeadPayload::new(&form, ContactIntent::MediaKit, submitted_at);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["intent"], "media-kit");
        assert_eq!(value["budget"], "5k-15k");
        assert_eq!(value["timeline"], "2-4-weeks");
        assert_eq!(value["submitted_at"], "2026-08-29T12:00:00+00:00");
        for key in ["name", "from_name", "user_name", "to_name"] {
            assert_eq!(value[key], "Ava Laurent", "{key}");
        }
        for key in ["email", "from_email", "reply_to", "user_email", "to_email"] {
            assert_eq!(value[key], "ava@brand.com", "{key}");
        }
    }

    #[test]
    fn test_dual_send_success_issues_two_identical_sends() {
        let mailer = RecordingMailer::succeeding();
        let config = test_config();
        let payload = LeadPayload::new(&valid_form(), ContactIntent::Collaboration, Utc::now());

        block_on(submit_lead(&mailer, &config, &payload)).expect("both sends succeed");

        let calls = mailer.calls.borrow();
        assert_eq!(calls.len(), 2);
        let templates: Vec<&str> = calls.iter().map(|(t, _)| t.as_str()).collect();
        assert!(templates.contains(&"template_owner"));
        assert!(templates.contains(&"template_confirmation"));
        // Same payload content on both sends.
        assert_eq!(calls[0].1, calls[1].1);
    }

    #[test]
    fn test_dual_send_fails_if_either_send_rejects() {
        for failing in ["template_owner", "template_confirmation"] {
            let mailer = RecordingMailer::failing_on(failing);
            let config = test_config();
            let payload = LeadPayload::new(&valid_form(), ContactIntent::General, Utc::now());

            let result = block_on(submit_lead(&mailer, &config, &payload));
            assert!(matches!(result, Err(MailError::Rejected(400))));
        }
    }

    #[test]
    fn test_submission_status_starts_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }
}
