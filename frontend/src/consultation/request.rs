use serde::{Deserialize, Serialize};

/// A closed set of choices rendered as a `<select>`.
///
/// `slug` is the value used in the `<option value>` attribute and in the
/// serialized request; `label` is what the visitor sees.
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn slug(self) -> &'static str;
    fn label(self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DestinationCountry {
    Singapore,
    Dubai,
    Mauritius,
    Uk,
    Europe,
    NotSure,
}

impl SelectOption for DestinationCountry {
    const ALL: &'static [Self] = &[
        Self::Singapore,
        Self::Dubai,
        Self::Mauritius,
        Self::Uk,
        Self::Europe,
        Self::NotSure,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Singapore => "singapore",
            Self::Dubai => "dubai",
            Self::Mauritius => "mauritius",
            Self::Uk => "uk",
            Self::Europe => "europe",
            Self::NotSure => "not-sure",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Singapore => "Singapore",
            Self::Dubai => "Dubai (UAE)",
            Self::Mauritius => "Mauritius",
            Self::Uk => "United Kingdom",
            Self::Europe => "Europe",
            Self::NotSure => "Not sure yet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyLevel {
    Undergraduate,
    Postgraduate,
    Phd,
    Diploma,
    Other,
}

impl SelectOption for StudyLevel {
    const ALL: &'static [Self] = &[
        Self::Undergraduate,
        Self::Postgraduate,
        Self::Phd,
        Self::Diploma,
        Self::Other,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Postgraduate => "postgraduate",
            Self::Phd => "phd",
            Self::Diploma => "diploma",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::Postgraduate => "Postgraduate / Masters",
            Self::Phd => "PhD / Doctorate",
            Self::Diploma => "Diploma / Foundation",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartWindow {
    Asap,
    #[serde(rename = "within-3-months")]
    Within3Months,
    #[serde(rename = "within-6-months")]
    Within6Months,
    NextYear,
    Exploring,
}

impl SelectOption for StartWindow {
    const ALL: &'static [Self] = &[
        Self::Asap,
        Self::Within3Months,
        Self::Within6Months,
        Self::NextYear,
        Self::Exploring,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::Within3Months => "within-3-months",
            Self::Within6Months => "within-6-months",
            Self::NextYear => "next-year",
            Self::Exploring => "exploring",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Asap => "As soon as possible",
            Self::Within3Months => "Within 3 months",
            Self::Within6Months => "Within 6 months",
            Self::NextYear => "Next academic year",
            Self::Exploring => "Just exploring",
        }
    }
}

/// Dialing codes offered next to the phone field, as (code, country).
/// The first entry is the default.
pub const CALLING_CODES: &[(&str, &str)] = &[
    ("+91", "India"),
    ("+65", "Singapore"),
    ("+971", "United Arab Emirates"),
    ("+230", "Mauritius"),
    ("+44", "United Kingdom"),
    ("+94", "Sri Lanka"),
    ("+880", "Bangladesh"),
    ("+977", "Nepal"),
    ("+92", "Pakistan"),
    ("+234", "Nigeria"),
    ("+254", "Kenya"),
    ("+60", "Malaysia"),
    ("+1", "USA / Canada"),
];

pub fn default_calling_code() -> String {
    CALLING_CODES[0].0.to_string()
}

pub fn is_known_calling_code(code: &str) -> bool {
    CALLING_CODES.iter().any(|(known, _)| *known == code)
}

/// The four fields a request cannot be sent without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Message,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Message => "Message",
        }
    }
}

/// Everything the visitor typed into the consultation form.
///
/// Lives only for one form-fill session and is reset to `Default` once the
/// request has gone through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_calling_code: String,
    pub destination_country: Option<DestinationCountry>,
    pub study_level: Option<StudyLevel>,
    pub preferred_start_window: Option<StartWindow>,
    pub message: String,
}

impl Default for ConsultationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            country_calling_code: default_calling_code(),
            destination_country: None,
            study_level: None,
            preferred_start_window: None,
            message: String::new(),
        }
    }
}

impl ConsultationRequest {
    /// Required fields that are empty or whitespace only, in form order.
    /// Presence is all that is checked; the email and phone shapes are not.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Phone, &self.phone),
            (RequiredField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ConsultationRequest {
        ConsultationRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "98765432".to_string(),
            message: "Interested in UK programs".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_empty_with_default_calling_code() {
        let request = ConsultationRequest::default();
        assert!(request.name.is_empty());
        assert!(request.message.is_empty());
        assert_eq!(request.country_calling_code, "+91");
        assert_eq!(request.destination_country, None);
        assert_eq!(request.study_level, None);
        assert_eq!(request.preferred_start_window, None);
    }

    #[test]
    fn test_default_reports_all_required_missing() {
        assert_eq!(
            ConsultationRequest::default().missing_fields(),
            vec![
                RequiredField::Name,
                RequiredField::Email,
                RequiredField::Phone,
                RequiredField::Message
            ]
        );
    }

    #[test]
    fn test_complete_request() {
        assert!(jane().missing_fields().is_empty());
    }

    #[test]
    fn test_optional_fields_do_not_affect_completeness() {
        let mut request = jane();
        request.destination_country = Some(DestinationCountry::Uk);
        request.study_level = Some(StudyLevel::Postgraduate);
        assert!(request.missing_fields().is_empty());

        request.message.clear();
        request.destination_country = Some(DestinationCountry::Europe);
        assert_eq!(request.missing_fields(), vec![RequiredField::Message]);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut request = jane();
        request.phone = "   ".to_string();
        assert_eq!(request.missing_fields(), vec![RequiredField::Phone]);
    }

    #[test]
    fn test_no_format_validation() {
        let mut request = jane();
        request.email = "not-an-email".to_string();
        request.phone = "abc".to_string();
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn test_slug_lookup() {
        assert_eq!(
            DestinationCountry::from_slug("not-sure"),
            Some(DestinationCountry::NotSure)
        );
        assert_eq!(
            StartWindow::from_slug("within-6-months"),
            Some(StartWindow::Within6Months)
        );
        assert_eq!(StudyLevel::from_slug("phd"), Some(StudyLevel::Phd));
        assert_eq!(StudyLevel::from_slug(""), None);
        assert_eq!(DestinationCountry::from_slug("canada"), None);
    }

    #[test]
    fn test_serde_uses_slugs() {
        for window in StartWindow::ALL {
            let json = serde_json::to_string(window).unwrap();
            assert_eq!(json, format!("\"{}\"", window.slug()));
        }
        for country in DestinationCountry::ALL {
            let json = serde_json::to_string(country).unwrap();
            assert_eq!(json, format!("\"{}\"", country.slug()));
        }
    }

    #[test]
    fn test_calling_codes() {
        assert!(is_known_calling_code("+44"));
        assert!(!is_known_calling_code("+999"));
        assert_eq!(default_calling_code(), CALLING_CODES[0].0);
    }
}
