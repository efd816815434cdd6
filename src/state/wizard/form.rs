//! The single application record shared by every wizard step

use super::field::{FieldId, FieldValue};
use std::collections::HashSet;

/// One logical rental application, mutated field-by-field as the user types.
///
/// Created empty when the wizard mounts and discarded when it unmounts;
/// nothing is persisted. Validation is recomputed on demand from the current
/// value, so there is no cached validity to go stale.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_address: String,
    pub employer: String,
    pub income: String,
    pub move_in_date: String,
    pub has_co_applicant: bool,
    pub co_applicant_name: String,
    pub co_applicant_email: String,
    pub consent: bool,

    /// Fields whose errors may be shown. Errors stay hidden until a refused
    /// step transition marks the step's owned fields touched.
    touched: HashSet<FieldId>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn value(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldId::LastName => FieldValue::Text(self.last_name.clone()),
            FieldId::Email => FieldValue::Text(self.email.clone()),
            FieldId::Phone => FieldValue::Text(self.phone.clone()),
            FieldId::CurrentAddress => FieldValue::Text(self.current_address.clone()),
            FieldId::Employer => FieldValue::Text(self.employer.clone()),
            FieldId::Income => FieldValue::Text(self.income.clone()),
            FieldId::MoveInDate => FieldValue::Text(self.move_in_date.clone()),
            FieldId::HasCoApplicant => FieldValue::Flag(self.has_co_applicant),
            FieldId::CoApplicantName => FieldValue::Text(self.co_applicant_name.clone()),
            FieldId::CoApplicantEmail => FieldValue::Text(self.co_applicant_email.clone()),
            FieldId::Consent => FieldValue::Flag(self.consent),
        }
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::CurrentAddress => Some(&mut self.current_address),
            FieldId::Employer => Some(&mut self.employer),
            FieldId::Income => Some(&mut self.income),
            FieldId::MoveInDate => Some(&mut self.move_in_date),
            FieldId::CoApplicantName => Some(&mut self.co_applicant_name),
            FieldId::CoApplicantEmail => Some(&mut self.co_applicant_email),
            FieldId::HasCoApplicant | FieldId::Consent => None,
        }
    }

    /// Push a character into a text field (no-op for flag fields)
    pub fn push_char(&mut self, field: FieldId, c: char) {
        if let Some(s) = self.text_mut(field) {
            s.push(c);
        }
    }

    /// Remove the last character of a text field (no-op for flag fields)
    pub fn pop_char(&mut self, field: FieldId) {
        if let Some(s) = self.text_mut(field) {
            s.pop();
        }
    }

    /// Toggle a flag field (no-op for text fields)
    pub fn toggle(&mut self, field: FieldId) {
        match field {
            FieldId::HasCoApplicant => self.has_co_applicant = !self.has_co_applicant,
            FieldId::Consent => self.consent = !self.consent,
            _ => {}
        }
    }

    pub fn is_valid(&self, field: FieldId) -> bool {
        field.validate(&self.value(field)).is_ok()
    }

    /// The field's error, regardless of touched state
    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        field.validate(&self.value(field)).err()
    }

    /// The field's error, only once the field has been touched
    pub fn visible_error(&self, field: FieldId) -> Option<&'static str> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Make errors for the given fields eligible for display
    pub fn mark_touched(&mut self, fields: &[FieldId]) {
        self.touched.extend(fields.iter().copied());
    }
}
