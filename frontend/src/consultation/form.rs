use thiserror::Error;

use super::request::{
    is_known_calling_code, ConsultationRequest, DestinationCountry, RequiredField, SelectOption,
    StartWindow, StudyLevel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Submitted,
}

/// Where the verification widget is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeState {
    NotLoaded,
    LoadedUnsolved,
    LoadedSolved,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Please fill in the required fields: {}", field_list(.0))]
    MissingFields(Vec<RequiredField>),
    #[error("The verification check has not loaded yet. Please wait a moment and try again.")]
    ChallengeNotLoaded,
    #[error("Please complete the verification check before sending your request.")]
    ChallengeUnsolved,
    #[error("Your request is already being sent.")]
    AlreadyInFlight,
    #[error("Something went wrong while sending your request: {0}")]
    Intake(String),
}

fn field_list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    CallingCode,
    Destination,
    StudyLevel,
    StartWindow,
    Message,
}

/// A request that passed both gates, ready to hand to the intake.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub request: ConsultationRequest,
    pub verification_token: String,
}

/// State of one consultation form for one page visit.
///
/// Owns the visitor's input and the two small state machines around it:
/// the submission status and the verification challenge. The component
/// drives it with messages; nothing here touches the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationForm {
    request: ConsultationRequest,
    status: FormStatus,
    challenge: ChallengeState,
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self {
            request: ConsultationRequest::default(),
            status: FormStatus::Idle,
            challenge: ChallengeState::NotLoaded,
        }
    }

    pub fn request(&self) -> &ConsultationRequest {
        &self.request
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn challenge(&self) -> ChallengeState {
        self.challenge
    }

    /// Inputs are read-only while a request is in flight.
    pub fn is_locked(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Whether the submit button is enabled. Stays false for as long as the
    /// verification widget has not loaded.
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Idle && self.challenge != ChallengeState::NotLoaded
    }

    pub fn challenge_loaded(&mut self) {
        if self.challenge == ChallengeState::NotLoaded {
            self.challenge = ChallengeState::LoadedUnsolved;
        }
    }

    /// The widget went away or could not be rendered. Submission stays
    /// blocked until a new one is loaded.
    pub fn challenge_lost(&mut self) {
        self.challenge = ChallengeState::NotLoaded;
    }

    /// Applies one edit. Select values arrive as slugs; an empty or unknown
    /// slug clears the choice. Returns false when the edit was dropped.
    pub fn edit(&mut self, field: FormField, value: String) -> bool {
        if self.status != FormStatus::Idle {
            return false;
        }
        let request = &mut self.request;
        match field {
            FormField::Name => request.name = value,
            FormField::Email => request.email = value,
            FormField::Phone => request.phone = value,
            FormField::Message => request.message = value,
            FormField::CallingCode => {
                if !is_known_calling_code(&value) {
                    return false;
                }
                request.country_calling_code = value;
            }
            FormField::Destination => {
                request.destination_country = DestinationCountry::from_slug(&value)
            }
            FormField::StudyLevel => request.study_level = StudyLevel::from_slug(&value),
            FormField::StartWindow => {
                request.preferred_start_window = StartWindow::from_slug(&value)
            }
        }
        true
    }

    /// Gatekeeper for `Idle -> Submitting`.
    ///
    /// `token` is whatever the widget reports at the moment of the attempt.
    /// Required fields are checked first, then the challenge. On rejection
    /// the status and all field values are left as they were.
    pub fn begin_submit(&mut self, token: &str) -> Result<Submission, SubmitError> {
        if self.status != FormStatus::Idle {
            return Err(SubmitError::AlreadyInFlight);
        }

        let missing = self.request.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        if self.challenge == ChallengeState::NotLoaded {
            return Err(SubmitError::ChallengeNotLoaded);
        }

        let token = token.trim();
        if token.is_empty() {
            self.challenge = ChallengeState::LoadedUnsolved;
            return Err(SubmitError::ChallengeUnsolved);
        }

        self.challenge = ChallengeState::LoadedSolved;
        self.status = FormStatus::Submitting;
        Ok(Submission {
            request: self.request.clone(),
            verification_token: token.to_string(),
        })
    }

    /// `Submitting -> Submitted`. Clears every field and leaves the
    /// challenge unsolved for the next request.
    pub fn complete_submission(&mut self) {
        if self.status != FormStatus::Submitting {
            return;
        }
        self.request = ConsultationRequest::default();
        self.challenge = ChallengeState::LoadedUnsolved;
        self.status = FormStatus::Submitted;
    }

    /// Back to `Idle` after an intake failure, keeping what was typed so the
    /// visitor can retry.
    pub fn fail_submission(&mut self) {
        if self.status != FormStatus::Submitting {
            return;
        }
        self.challenge = ChallengeState::LoadedUnsolved;
        self.status = FormStatus::Idle;
    }

    /// `Submitted -> Idle` ("send another message").
    pub fn start_over(&mut self) {
        if self.status != FormStatus::Submitted {
            return;
        }
        self.request = ConsultationRequest::default();
        self.challenge = ChallengeState::LoadedUnsolved;
        self.status = FormStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "10000000-aaaa-bbbb-cccc-000000000001";

    fn loaded_form() -> ConsultationForm {
        let mut form = ConsultationForm::new();
        form.challenge_loaded();
        form
    }

    fn fill_jane(form: &mut ConsultationForm) {
        form.edit(FormField::Name, "Jane Doe".to_string());
        form.edit(FormField::Email, "jane@example.com".to_string());
        form.edit(FormField::Phone, "98765432".to_string());
        form.edit(FormField::Message, "Interested in UK programs".to_string());
    }

    #[test]
    fn test_initial_state() {
        let form = ConsultationForm::new();
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.challenge(), ChallengeState::NotLoaded);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_each_missing_required_field_blocks_submit() {
        let fields = [
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::Message,
        ];
        for field in fields {
            let mut form = loaded_form();
            fill_jane(&mut form);
            form.edit(FormField::Destination, "uk".to_string());
            form.edit(FormField::StudyLevel, "postgraduate".to_string());
            form.edit(field, String::new());
            let before = form.clone();

            let result = form.begin_submit(TOKEN);

            assert!(matches!(result, Err(SubmitError::MissingFields(ref f)) if f.len() == 1));
            assert_eq!(form, before);
        }
    }

    #[test]
    fn test_unsolved_challenge_blocks_submit() {
        let mut form = loaded_form();
        fill_jane(&mut form);

        assert_eq!(form.begin_submit(""), Err(SubmitError::ChallengeUnsolved));
        assert_eq!(form.begin_submit("   "), Err(SubmitError::ChallengeUnsolved));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.challenge(), ChallengeState::LoadedUnsolved);
        assert_eq!(form.request().name, "Jane Doe");
    }

    #[test]
    fn test_challenge_not_loaded_blocks_submit_forever() {
        let mut form = ConsultationForm::new();
        fill_jane(&mut form);

        for _ in 0..3 {
            assert!(!form.can_submit());
            assert_eq!(form.begin_submit(TOKEN), Err(SubmitError::ChallengeNotLoaded));
        }
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_fields_checked_before_challenge() {
        let mut form = ConsultationForm::new();
        assert!(matches!(
            form.begin_submit(""),
            Err(SubmitError::MissingFields(_))
        ));
    }

    #[test]
    fn test_successful_submission_resets_form() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.edit(FormField::CallingCode, "+65".to_string());
        form.edit(FormField::StartWindow, "next-year".to_string());

        let submission = form.begin_submit(TOKEN).unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(form.challenge(), ChallengeState::LoadedSolved);
        assert!(form.is_locked());
        assert!(!form.can_submit());
        assert_eq!(submission.verification_token, TOKEN);
        assert_eq!(submission.request.name, "Jane Doe");
        assert_eq!(submission.request.country_calling_code, "+65");
        assert_eq!(
            submission.request.preferred_start_window,
            Some(StartWindow::NextYear)
        );

        form.complete_submission();
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.challenge(), ChallengeState::LoadedUnsolved);
        assert_eq!(*form.request(), ConsultationRequest::default());
    }

    #[test]
    fn test_empty_message_keeps_state() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.edit(FormField::Message, String::new());

        let err = form.begin_submit(TOKEN).unwrap_err();

        assert_eq!(err, SubmitError::MissingFields(vec![RequiredField::Message]));
        assert_eq!(err.to_string(), "Please fill in the required fields: Message");
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.request().name, "Jane Doe");
        assert_eq!(form.request().email, "jane@example.com");
        assert_eq!(form.request().phone, "98765432");
    }

    #[test]
    fn test_no_duplicate_submission() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.begin_submit(TOKEN).unwrap();

        assert_eq!(form.begin_submit(TOKEN), Err(SubmitError::AlreadyInFlight));
        assert!(!form.edit(FormField::Name, "Someone Else".to_string()));
        assert_eq!(form.request().name, "Jane Doe");
    }

    #[test]
    fn test_submit_ignored_once_submitted() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.begin_submit(TOKEN).unwrap();
        form.complete_submission();
        let before = form.clone();

        assert_eq!(form.begin_submit(TOKEN), Err(SubmitError::AlreadyInFlight));
        assert!(!form.can_submit());
        assert_eq!(form, before);
        assert_eq!(form.status(), FormStatus::Submitted);
    }

    #[test]
    fn test_lost_challenge_disables_submit() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        assert!(form.can_submit());

        form.challenge_lost();

        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(TOKEN), Err(SubmitError::ChallengeNotLoaded));
        assert_eq!(form.status(), FormStatus::Idle);

        form.challenge_loaded();
        assert!(form.can_submit());
    }

    #[test]
    fn test_start_over_from_submitted() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.begin_submit(TOKEN).unwrap();
        form.complete_submission();

        form.start_over();

        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.challenge(), ChallengeState::LoadedUnsolved);
        assert_eq!(*form.request(), ConsultationRequest::default());
        assert!(form.can_submit());
    }

    #[test]
    fn test_start_over_ignored_outside_submitted() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.start_over();
        assert_eq!(form.request().name, "Jane Doe");
    }

    #[test]
    fn test_failed_intake_returns_to_idle_with_data() {
        let mut form = loaded_form();
        fill_jane(&mut form);
        form.begin_submit(TOKEN).unwrap();

        form.fail_submission();

        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.request().message, "Interested in UK programs");
        assert!(form.can_submit());
    }

    #[test]
    fn test_select_edits() {
        let mut form = loaded_form();
        form.edit(FormField::Destination, "mauritius".to_string());
        assert_eq!(
            form.request().destination_country,
            Some(DestinationCountry::Mauritius)
        );
        form.edit(FormField::Destination, String::new());
        assert_eq!(form.request().destination_country, None);

        assert!(!form.edit(FormField::CallingCode, "+000".to_string()));
        assert_eq!(form.request().country_calling_code, "+91");
    }

    #[test]
    fn test_missing_fields_message_lists_all() {
        let err = SubmitError::MissingFields(vec![RequiredField::Name, RequiredField::Email]);
        assert_eq!(
            err.to_string(),
            "Please fill in the required fields: Full name, Email"
        );
    }
}
