//! Wizard steps and the owned-field gating sets

use super::field::FieldId;
use super::form::ApplicationForm;

/// The four stages of the application wizard, ordered 1..4.
///
/// A tagged enum keeps "two current steps" unrepresentable; transitions only
/// move to adjacent steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Personal,
    Employment,
    Documents,
    Review,
}

impl WizardStep {
    pub const COUNT: usize = 4;

    /// 1-based position for the progress header
    pub fn index(&self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Employment => 2,
            Self::Documents => 3,
            Self::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Employment => "Employment & Financial",
            Self::Documents => "Documents",
            Self::Review => "Review & Submit",
        }
    }

    /// The next step, capped at Review
    pub fn next(&self) -> Self {
        match self {
            Self::Personal => Self::Employment,
            Self::Employment => Self::Documents,
            Self::Documents | Self::Review => Self::Review,
        }
    }

    /// The previous step, floored at Personal
    pub fn back(&self) -> Self {
        match self {
            Self::Personal | Self::Employment => Self::Personal,
            Self::Documents => Self::Employment,
            Self::Review => Self::Documents,
        }
    }

    /// Fields this step must see valid before it may be left going forward.
    ///
    /// Re-derived from the live form on every call: the co-applicant fields
    /// join Employment's set only while the toggle is on, so flipping the
    /// toggle after entering the step still changes the gate.
    pub fn owned_fields(&self, form: &ApplicationForm) -> Vec<FieldId> {
        match self {
            Self::Personal => vec![
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::CurrentAddress,
            ],
            Self::Employment => {
                let mut fields = vec![FieldId::Employer, FieldId::Income, FieldId::MoveInDate];
                if form.has_co_applicant {
                    fields.push(FieldId::CoApplicantName);
                    fields.push(FieldId::CoApplicantEmail);
                }
                fields
            }
            Self::Documents => vec![],
            Self::Review => vec![FieldId::Consent],
        }
    }

    /// Fields rendered on this step, in focus order. A superset of the owned
    /// set: the toggle itself is shown on Employment, and the co-applicant
    /// inputs appear only while it is on.
    pub fn visible_fields(&self, form: &ApplicationForm) -> Vec<FieldId> {
        match self {
            Self::Employment => {
                let mut fields = vec![
                    FieldId::Employer,
                    FieldId::Income,
                    FieldId::MoveInDate,
                    FieldId::HasCoApplicant,
                ];
                if form.has_co_applicant {
                    fields.push(FieldId::CoApplicantName);
                    fields.push(FieldId::CoApplicantEmail);
                }
                fields
            }
            _ => self.owned_fields(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_steps_are_ordered_one_to_four() {
        assert_eq!(WizardStep::Personal.index(), 1);
        assert_eq!(WizardStep::Employment.index(), 2);
        assert_eq!(WizardStep::Documents.index(), 3);
        assert_eq!(WizardStep::Review.index(), 4);
    }

    #[test]
    fn test_next_caps_at_review() {
        assert_eq!(WizardStep::Personal.next(), WizardStep::Employment);
        assert_eq!(WizardStep::Documents.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
    }

    #[test]
    fn test_back_floors_at_personal() {
        assert_eq!(WizardStep::Review.back(), WizardStep::Documents);
        assert_eq!(WizardStep::Employment.back(), WizardStep::Personal);
        assert_eq!(WizardStep::Personal.back(), WizardStep::Personal);
    }

    #[test]
    fn test_owned_fields_are_disjoint_without_toggle() {
        let form = ApplicationForm::new();
        let all: Vec<_> = [
            WizardStep::Personal,
            WizardStep::Employment,
            WizardStep::Documents,
            WizardStep::Review,
        ]
        .iter()
        .flat_map(|s| s.owned_fields(&form))
        .collect();
        let mut deduped = all.clone();
        deduped.sort_by_key(|f| format!("{f:?}"));
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn test_documents_owns_nothing() {
        let form = ApplicationForm::new();
        assert!(WizardStep::Documents.owned_fields(&form).is_empty());
    }

    #[test]
    fn test_toggle_extends_employment_gate() {
        let mut form = ApplicationForm::new();
        let before = WizardStep::Employment.owned_fields(&form);
        assert!(!before.contains(&FieldId::CoApplicantName));

        form.toggle(FieldId::HasCoApplicant);
        let after = WizardStep::Employment.owned_fields(&form);
        assert!(after.contains(&FieldId::CoApplicantName));
        assert!(after.contains(&FieldId::CoApplicantEmail));
    }

    #[test]
    fn test_visible_fields_include_toggle_on_employment() {
        let form = ApplicationForm::new();
        let visible = WizardStep::Employment.visible_fields(&form);
        assert!(visible.contains(&FieldId::HasCoApplicant));
        assert!(!visible.contains(&FieldId::CoApplicantName));
    }
}
