//! Form field identifiers, values, and validation rules

/// Every field of the rental application, across all steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    CurrentAddress,
    Employer,
    Income,
    MoveInDate,
    HasCoApplicant,
    CoApplicantName,
    CoApplicantEmail,
    Consent,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }
}

impl FieldId {
    /// Label shown next to the input control
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CurrentAddress => "Current Address",
            Self::Employer => "Current Employer",
            Self::Income => "Annual Income ($)",
            Self::MoveInDate => "Desired Move-in Date",
            Self::HasCoApplicant => "Applying with a co-applicant",
            Self::CoApplicantName => "Co-applicant Name",
            Self::CoApplicantEmail => "Co-applicant Email",
            Self::Consent => "I authorize verification of the information provided",
        }
    }

    /// Whether the field holds a boolean rather than text
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::HasCoApplicant | Self::Consent)
    }

    /// Validate a value against this field's rule.
    ///
    /// Rules are pure functions of the value; the co-applicant fields are
    /// validated here as if required, and whether they participate at all
    /// is decided by the step's owned-field set, not by the rule.
    pub fn validate(&self, value: &FieldValue) -> Result<(), &'static str> {
        match self {
            Self::FirstName => min_len(value.as_text(), 2, "First name is required"),
            Self::LastName => min_len(value.as_text(), 2, "Last name is required"),
            Self::Email => email_shape(value.as_text(), "Invalid email address"),
            Self::Phone => min_len(value.as_text(), 10, "Phone number is required"),
            Self::CurrentAddress => min_len(value.as_text(), 5, "Current address is required"),
            Self::Employer => min_len(value.as_text(), 2, "Employer name is required"),
            Self::Income => min_len(value.as_text(), 1, "Annual income is required"),
            Self::MoveInDate => min_len(value.as_text(), 1, "Move-in date is required"),
            Self::HasCoApplicant => Ok(()),
            Self::CoApplicantName => min_len(value.as_text(), 1, "Co-applicant name is required"),
            Self::CoApplicantEmail => {
                email_shape(value.as_text(), "Invalid co-applicant email address")
            }
            Self::Consent => {
                if value.as_flag() {
                    Ok(())
                } else {
                    Err("You must agree to the terms")
                }
            }
        }
    }
}

fn min_len(text: &str, min: usize, message: &'static str) -> Result<(), &'static str> {
    if text.chars().count() >= min {
        Ok(())
    } else {
        Err(message)
    }
}

/// Minimal email-shape check: one `@` with a non-empty local part and a
/// dotted domain, no whitespace.
fn email_shape(text: &str, message: &'static str) -> Result<(), &'static str> {
    if text.contains(char::is_whitespace) {
        return Err(message);
    }
    let mut parts = text.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let domain_ok = domain.split('.').count() >= 2 && domain.split('.').all(|s| !s.is_empty());
    if !local.is_empty() && domain_ok {
        Ok(())
    } else {
        Err(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    mod name_rules {
        use super::*;

        #[test]
        fn test_first_name_requires_two_chars() {
            assert!(FieldId::FirstName.validate(&text("")).is_err());
            assert!(FieldId::FirstName.validate(&text("J")).is_err());
            assert!(FieldId::FirstName.validate(&text("Jo")).is_ok());
        }

        #[test]
        fn test_last_name_error_message() {
            let err = FieldId::LastName.validate(&text("")).unwrap_err();
            assert_eq!(err, "Last name is required");
        }
    }

    mod email_rule {
        use super::*;

        #[test]
        fn test_valid_emails_pass() {
            assert!(FieldId::Email.validate(&text("john@x.com")).is_ok());
            assert!(FieldId::Email.validate(&text("a.b@mail.example.org")).is_ok());
        }

        #[test]
        fn test_invalid_emails_fail() {
            assert!(FieldId::Email.validate(&text("")).is_err());
            assert!(FieldId::Email.validate(&text("john")).is_err());
            assert!(FieldId::Email.validate(&text("john@")).is_err());
            assert!(FieldId::Email.validate(&text("john@localhost")).is_err());
            assert!(FieldId::Email.validate(&text("@x.com")).is_err());
            assert!(FieldId::Email.validate(&text("jo hn@x.com")).is_err());
            assert!(FieldId::Email.validate(&text("john@x.")).is_err());
        }
    }

    mod length_rules {
        use super::*;

        #[test]
        fn test_phone_any_ten_characters_pass() {
            // Digit content is deliberately not enforced
            assert!(FieldId::Phone.validate(&text("5551234567")).is_ok());
            assert!(FieldId::Phone.validate(&text("call me ok")).is_ok());
            assert!(FieldId::Phone.validate(&text("555")).is_err());
        }

        #[test]
        fn test_address_requires_five_chars() {
            assert!(FieldId::CurrentAddress.validate(&text("123")).is_err());
            assert!(FieldId::CurrentAddress.validate(&text("123 Main St")).is_ok());
        }

        #[test]
        fn test_income_and_move_in_date_non_empty() {
            assert!(FieldId::Income.validate(&text("")).is_err());
            assert!(FieldId::Income.validate(&text("50000")).is_ok());
            assert!(FieldId::MoveInDate.validate(&text("")).is_err());
            assert!(FieldId::MoveInDate.validate(&text("2026-10-01")).is_ok());
        }
    }

    mod flag_rules {
        use super::*;

        #[test]
        fn test_consent_must_be_true() {
            assert!(FieldId::Consent.validate(&FieldValue::Flag(false)).is_err());
            assert!(FieldId::Consent.validate(&FieldValue::Flag(true)).is_ok());
        }

        #[test]
        fn test_co_applicant_toggle_always_valid() {
            assert!(FieldId::HasCoApplicant
                .validate(&FieldValue::Flag(false))
                .is_ok());
            assert!(FieldId::HasCoApplicant
                .validate(&FieldValue::Flag(true))
                .is_ok());
        }
    }

    mod field_kinds {
        use super::*;

        #[test]
        fn test_flag_fields() {
            assert!(FieldId::HasCoApplicant.is_flag());
            assert!(FieldId::Consent.is_flag());
            assert!(!FieldId::Email.is_flag());
        }

        #[test]
        fn test_value_accessors() {
            assert_eq!(text("hi").as_text(), "hi");
            assert!(!text("hi").as_flag());
            assert_eq!(FieldValue::Flag(true).as_text(), "");
            assert!(FieldValue::Flag(true).as_flag());
        }
    }
}
