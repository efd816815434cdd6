//! The wizard aggregate: one form, one step cursor, one staging list, one
//! submission flag, all owned exclusively by the mounted wizard instance.

use super::attachments::AttachmentList;
use super::field::FieldId;
use super::form::ApplicationForm;
use super::step::WizardStep;

/// One-way submission flag. Returning to NotSubmitted requires a fresh
/// wizard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    Submitted,
}

/// Outcome of a forward transition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    Refused,
}

/// Read-only projection rendered on the Review step, always computed fresh
/// from the live aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub move_in_date: String,
    pub income: String,
    pub co_applicant: Option<String>,
    pub attachment_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationWizard {
    pub form: ApplicationForm,
    pub attachments: AttachmentList,
    step: WizardStep,
    submission: SubmissionState,
    /// Focus position within the current step's visible field list
    active_field_index: usize,
    /// Selection within the attachment list on the Documents step
    pub selected_attachment: usize,
}

impl ApplicationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitted(&self) -> bool {
        self.submission == SubmissionState::Submitted
    }

    /// Attempt to leave the current step going forward.
    ///
    /// The owned-field set is consulted at this moment, not at mount time, so
    /// a toggle flipped after entering the step still changes the gate. On
    /// refusal every owned field's error becomes visible and the step holds.
    pub fn try_next(&mut self) -> StepOutcome {
        if self.is_submitted() {
            return StepOutcome::Refused;
        }
        let owned = self.step.owned_fields(&self.form);
        if owned.iter().all(|f| self.form.is_valid(*f)) {
            self.step = self.step.next();
            self.active_field_index = 0;
            StepOutcome::Advanced
        } else {
            self.form.mark_touched(&owned);
            StepOutcome::Refused
        }
    }

    /// Move back one step. Never validates; a no-op on the first step.
    pub fn back(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.step = self.step.back();
        self.active_field_index = 0;
    }

    /// Fields rendered for the current step, in focus order
    pub fn visible_fields(&self) -> Vec<FieldId> {
        self.step.visible_fields(&self.form)
    }

    /// The currently focused field, if the step has any
    pub fn active_field(&self) -> Option<FieldId> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    pub fn next_field(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 {
            self.active_field_index = (self.active_field_index + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 {
            self.active_field_index = (self.active_field_index + count - 1) % count;
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if self.is_submitted() {
            return;
        }
        if let Some(field) = self.active_field() {
            if !field.is_flag() {
                self.form.push_char(field, c);
            }
        }
    }

    /// Backspace in the focused field
    pub fn backspace(&mut self) {
        if self.is_submitted() {
            return;
        }
        if let Some(field) = self.active_field() {
            self.form.pop_char(field);
        }
    }

    /// Toggle the focused flag field. Turning the co-applicant toggle off can
    /// shrink the visible list, so the focus index is re-clamped; stale
    /// co-applicant values are deliberately retained.
    pub fn toggle_active(&mut self) {
        if self.is_submitted() {
            return;
        }
        if let Some(field) = self.active_field() {
            if field.is_flag() {
                self.form.toggle(field);
                let count = self.visible_fields().len();
                if count > 0 {
                    self.active_field_index = self.active_field_index.min(count - 1);
                }
            }
        }
    }

    /// Whether final submission is permitted: on the terminal step, every
    /// field across the whole form valid under the current toggle, and
    /// consent given.
    pub fn can_submit(&self) -> bool {
        if self.step != WizardStep::Review || self.is_submitted() {
            return false;
        }
        let all_steps = [
            WizardStep::Personal,
            WizardStep::Employment,
            WizardStep::Documents,
            WizardStep::Review,
        ];
        all_steps
            .iter()
            .flat_map(|s| s.owned_fields(&self.form))
            .all(|f| self.form.is_valid(f))
    }

    /// Transition to Submitted. No-op unless `can_submit()`; re-entrant calls
    /// after success are no-ops. Freezes the form against further edits.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.submission = SubmissionState::Submitted;
        tracing::info!(
            applicant = %self.summary().full_name,
            attachments = self.attachments.len(),
            "application submitted"
        );
        true
    }

    /// Fresh read-only projection for the Review step
    pub fn summary(&self) -> ApplicationSummary {
        ApplicationSummary {
            full_name: format!("{} {}", self.form.first_name, self.form.last_name)
                .trim()
                .to_string(),
            email: self.form.email.clone(),
            phone: self.form.phone.clone(),
            move_in_date: self.form.move_in_date.clone(),
            income: self.form.income.clone(),
            co_applicant: self
                .form
                .has_co_applicant
                .then(|| self.form.co_applicant_name.clone()),
            attachment_count: self.attachments.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(wizard: &mut ApplicationWizard, field: FieldId, s: &str) {
        for c in s.chars() {
            wizard.form.push_char(field, c);
        }
    }

    /// Fill step 1 with the reference scenario values
    fn fill_personal(wizard: &mut ApplicationWizard) {
        type_into(wizard, FieldId::FirstName, "John");
        type_into(wizard, FieldId::LastName, "Doe");
        type_into(wizard, FieldId::Email, "john@x.com");
        type_into(wizard, FieldId::Phone, "5551234567");
        type_into(wizard, FieldId::CurrentAddress, "123 Main St");
    }

    fn fill_employment(wizard: &mut ApplicationWizard) {
        type_into(wizard, FieldId::Employer, "Acme Corp");
        type_into(wizard, FieldId::Income, "50000");
        type_into(wizard, FieldId::MoveInDate, "2026-10-01");
    }

    /// Drive a fresh wizard to the Review step with everything valid
    fn wizard_on_review() -> ApplicationWizard {
        let mut wizard = ApplicationWizard::new();
        fill_personal(&mut wizard);
        assert_eq!(wizard.try_next(), StepOutcome::Advanced);
        fill_employment(&mut wizard);
        assert_eq!(wizard.try_next(), StepOutcome::Advanced);
        assert_eq!(wizard.try_next(), StepOutcome::Advanced); // Documents owns nothing
        assert_eq!(wizard.step(), WizardStep::Review);
        wizard
    }

    mod gating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_personal_step_advances() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            assert_eq!(wizard.try_next(), StepOutcome::Advanced);
            assert_eq!(wizard.step(), WizardStep::Employment);
        }

        #[test]
        fn test_short_phone_refuses_and_shows_error() {
            let mut wizard = ApplicationWizard::new();
            type_into(&mut wizard, FieldId::FirstName, "John");
            type_into(&mut wizard, FieldId::LastName, "Doe");
            type_into(&mut wizard, FieldId::Email, "john@x.com");
            type_into(&mut wizard, FieldId::Phone, "555");
            type_into(&mut wizard, FieldId::CurrentAddress, "123 Main St");

            assert_eq!(wizard.try_next(), StepOutcome::Refused);
            assert_eq!(wizard.step(), WizardStep::Personal);
            assert_eq!(
                wizard.form.visible_error(FieldId::Phone),
                Some("Phone number is required")
            );
        }

        #[test]
        fn test_errors_stay_hidden_before_first_attempt() {
            let wizard = ApplicationWizard::new();
            assert_eq!(wizard.form.visible_error(FieldId::FirstName), None);
        }

        #[test]
        fn test_refusal_surfaces_all_owned_errors() {
            let mut wizard = ApplicationWizard::new();
            assert_eq!(wizard.try_next(), StepOutcome::Refused);
            for field in WizardStep::Personal.owned_fields(&wizard.form) {
                assert!(wizard.form.visible_error(field).is_some());
            }
        }

        #[test]
        fn test_documents_step_always_advances() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.try_next();
            fill_employment(&mut wizard);
            wizard.try_next();
            assert_eq!(wizard.step(), WizardStep::Documents);
            assert_eq!(wizard.try_next(), StepOutcome::Advanced);
        }

        #[test]
        fn test_back_never_validates() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.try_next();
            // Employment is entirely empty, back is still permitted
            wizard.back();
            assert_eq!(wizard.step(), WizardStep::Personal);
        }

        #[test]
        fn test_back_from_first_step_is_noop() {
            let mut wizard = ApplicationWizard::new();
            wizard.back();
            assert_eq!(wizard.step(), WizardStep::Personal);
        }
    }

    mod co_applicant {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_on_blocks_until_co_fields_valid() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.try_next();
            fill_employment(&mut wizard);
            wizard.form.toggle(FieldId::HasCoApplicant);

            assert_eq!(wizard.try_next(), StepOutcome::Refused);
            type_into(&mut wizard, FieldId::CoApplicantName, "Jane Doe");
            type_into(&mut wizard, FieldId::CoApplicantEmail, "jane@x.com");
            assert_eq!(wizard.try_next(), StepOutcome::Advanced);
        }

        #[test]
        fn test_toggle_off_retains_values_but_drops_gating() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.try_next();
            fill_employment(&mut wizard);
            wizard.form.toggle(FieldId::HasCoApplicant);
            type_into(&mut wizard, FieldId::CoApplicantName, "Jane Doe");

            // Email still missing, so the gate holds
            assert_eq!(wizard.try_next(), StepOutcome::Refused);

            wizard.form.toggle(FieldId::HasCoApplicant);
            assert_eq!(wizard.try_next(), StepOutcome::Advanced);
            // Stale value retained for a later re-toggle
            assert_eq!(wizard.form.co_applicant_name, "Jane Doe");
        }

        #[test]
        fn test_gate_consulted_at_call_time_not_entry_time() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.try_next();
            fill_employment(&mut wizard);
            // Toggle changes after the step was entered
            wizard.form.toggle(FieldId::HasCoApplicant);
            assert_eq!(wizard.try_next(), StepOutcome::Refused);
        }

        #[test]
        fn test_toggle_off_reclamps_focus() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.try_next();
            wizard.form.toggle(FieldId::HasCoApplicant);
            // Focus the last visible field (co-applicant email)
            while wizard.active_field() != Some(FieldId::HasCoApplicant) {
                wizard.next_field();
            }
            wizard.next_field();
            wizard.next_field();
            assert_eq!(wizard.active_field(), Some(FieldId::CoApplicantEmail));

            // Toggling off shrinks the list; focus must stay in range
            while wizard.active_field() != Some(FieldId::HasCoApplicant) {
                wizard.prev_field();
            }
            wizard.toggle_active();
            assert!(wizard.active_field().is_some());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cannot_submit_without_consent() {
            let mut wizard = wizard_on_review();
            assert!(!wizard.can_submit());
            assert!(!wizard.submit());
            assert_eq!(wizard.submission(), SubmissionState::NotSubmitted);
        }

        #[test]
        fn test_consent_flips_can_submit_immediately() {
            let mut wizard = wizard_on_review();
            wizard.form.toggle(FieldId::Consent);
            assert!(wizard.can_submit());
            wizard.form.toggle(FieldId::Consent);
            assert!(!wizard.can_submit());
        }

        #[test]
        fn test_cannot_submit_off_terminal_step() {
            let mut wizard = ApplicationWizard::new();
            fill_personal(&mut wizard);
            wizard.form.toggle(FieldId::Consent);
            assert!(!wizard.can_submit());
        }

        #[test]
        fn test_double_submit_transitions_once() {
            let mut wizard = wizard_on_review();
            wizard.form.toggle(FieldId::Consent);
            assert!(wizard.submit());
            assert!(!wizard.submit());
            assert_eq!(wizard.submission(), SubmissionState::Submitted);
        }

        #[test]
        fn test_submitted_form_is_frozen() {
            let mut wizard = wizard_on_review();
            wizard.form.toggle(FieldId::Consent);
            wizard.submit();

            wizard.input_char('x');
            wizard.backspace();
            wizard.toggle_active();
            wizard.back();
            assert_eq!(wizard.step(), WizardStep::Review);
            assert!(wizard.form.consent);
        }

        #[test]
        fn test_whole_form_checked_not_just_review_subset() {
            let mut wizard = wizard_on_review();
            wizard.form.toggle(FieldId::Consent);
            // Invalidate a step-1 field after reaching Review
            wizard.form.email.clear();
            assert!(!wizard.can_submit());
        }
    }

    mod summary {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_summary_reflects_live_state() {
            let mut wizard = wizard_on_review();
            wizard.attachments.add("paystub.pdf", "application/pdf");

            let summary = wizard.summary();
            assert_eq!(summary.full_name, "John Doe");
            assert_eq!(summary.email, "john@x.com");
            assert_eq!(summary.attachment_count, 1);
            assert_eq!(summary.co_applicant, None);

            // Never a cached snapshot: a later edit shows up
            wizard.attachments.add("id.png", "image/png");
            assert_eq!(wizard.summary().attachment_count, 2);
        }

        #[test]
        fn test_summary_includes_co_applicant_when_toggled() {
            let mut wizard = ApplicationWizard::new();
            wizard.form.toggle(FieldId::HasCoApplicant);
            type_into(&mut wizard, FieldId::CoApplicantName, "Jane Doe");
            assert_eq!(wizard.summary().co_applicant.as_deref(), Some("Jane Doe"));
        }
    }
}
