use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;

use super::form::{SubmitError, Submission};
use super::request::{ConsultationRequest, SelectOption};
use crate::config;

/// Body a form-intake endpoint would receive.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IntakePayload<'a> {
    #[serde(flatten)]
    request: &'a ConsultationRequest,
    verification_token: &'a str,
}

pub fn payload_json(submission: &Submission) -> Result<String, SubmitError> {
    serde_json::to_string(&IntakePayload {
        request: &submission.request,
        verification_token: &submission.verification_token,
    })
    .map_err(|e| SubmitError::Intake(e.to_string()))
}

/// Hands the request to the intake.
///
/// There is no intake service behind the site yet, so the payload is built
/// and then a fixed delay stands in for the round trip.
pub async fn submit(submission: Submission) -> Result<(), SubmitError> {
    let body = payload_json(&submission)?;
    debug!("Consultation payload ready ({} bytes)", body.len());

    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;

    info!(
        "Consultation request accepted (destination: {})",
        submission
            .request
            .destination_country
            .map(|country| country.slug())
            .unwrap_or("unspecified")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultation::request::{DestinationCountry, StudyLevel};
    use serde_json::Value;

    #[test]
    fn test_payload_shape() {
        let submission = Submission {
            request: ConsultationRequest {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "98765432".to_string(),
                country_calling_code: "+44".to_string(),
                destination_country: Some(DestinationCountry::Uk),
                study_level: Some(StudyLevel::Postgraduate),
                preferred_start_window: None,
                message: "Interested in UK programs".to_string(),
            },
            verification_token: "token-123".to_string(),
        };

        let json: Value = serde_json::from_str(&payload_json(&submission).unwrap()).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["phone"], "98765432");
        assert_eq!(json["countryCallingCode"], "+44");
        assert_eq!(json["destinationCountry"], "uk");
        assert_eq!(json["studyLevel"], "postgraduate");
        assert_eq!(json["preferredStartWindow"], Value::Null);
        assert_eq!(json["message"], "Interested in UK programs");
        assert_eq!(json["verificationToken"], "token-123");
    }
}
