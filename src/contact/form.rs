use super::{check, validate, Errors, Field, FieldError, Fields, Transmission};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Editing,
    /// Waiting out the hand-off pause. Submit is disabled.
    Sending,
    /// Handed off. `fallback` carries the link when the new tab was blocked.
    Sent { fallback: Option<String> },
}

/// Field values, inline errors and submission phase of the contact form.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactForm {
    fields: Fields,
    errors: Errors,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Stores a keystroke. A field that is showing an error is re-checked and
    /// its error cleared as soon as the value passes.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.phase != Phase::Editing {
            return;
        }
        self.fields.set(field, value);
        if self.errors.contains_key(&field) {
            match check(field, self.fields.get(field)) {
                Some(error) => {
                    self.errors.insert(field, error);
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
    }

    /// Validates and, if everything passes, moves to [`Phase::Sending`] and
    /// returns the message to hand off. Returns `None` while a submission is
    /// already in flight.
    pub fn submit(&mut self) -> Option<Transmission> {
        if self.phase != Phase::Editing {
            return None;
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return None;
        }
        self.phase = Phase::Sending;
        Some(Transmission::compose(&self.fields))
    }

    /// Completes an in-flight submission and clears the form.
    pub fn finish(&mut self, fallback: Option<String>) {
        if self.phase != Phase::Sending {
            return;
        }
        self.fields = Fields::default();
        self.errors.clear();
        self.phase = Phase::Sent { fallback };
    }

    /// Leaves the success display for a fresh, empty form.
    pub fn reset(&mut self) {
        if matches!(self.phase, Phase::Sent { .. }) {
            self.phase = Phase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Peter".into());
        form.edit(Field::Email, "peter@example.com".into());
        form.edit(Field::Subject, "x".into());
        form.edit(Field::Message, "y".into());
        form
    }

    #[test]
    fn invalid_submit_shows_errors_and_stays_editing() {
        let mut form = ContactForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), 4);
        assert_eq!(form.phase(), &Phase::Editing);
    }

    #[test]
    fn typing_clears_error_once_field_passes() {
        let mut form = ContactForm::new();
        form.submit();
        form.edit(Field::Name, "P".into());
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.errors().len(), 3);

        form.edit(Field::Email, "peter".into());
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailMalformed));
        form.edit(Field::Email, "peter@example.com".into());
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn typing_never_adds_errors_before_submit() {
        let mut form = ContactForm::new();
        form.edit(Field::Email, "nope".into());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn error_keys_stay_within_required_fields() {
        let mut form = ContactForm::new();
        form.submit();
        for key in form.errors().keys() {
            assert!(Field::ALL.contains(key));
        }
    }

    #[test]
    fn valid_submit_enters_sending_with_transmission() {
        let mut form = filled();
        let transmission = form.submit().unwrap();
        assert!(form.is_sending());
        assert!(transmission.text.contains("*Identity:* Peter"));
        // Fields survive until the hand-off completes.
        assert_eq!(form.fields().name, "Peter");
    }

    #[test]
    fn submitting_while_in_flight_is_a_no_op() {
        let mut form = filled();
        form.submit().unwrap();
        let before = form.clone();
        assert!(form.submit().is_none());
        form.edit(Field::Name, "Mary Jane".into());
        assert_eq!(form, before);
    }

    #[test]
    fn finishing_clears_fields_and_shows_success() {
        let mut form = filled();
        form.submit().unwrap();
        form.finish(None);
        assert_eq!(form.fields(), &Fields::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), &Phase::Sent { fallback: None });
    }

    #[test]
    fn blocked_popup_keeps_fallback_link() {
        let mut form = filled();
        let t = form.submit().unwrap();
        form.finish(Some(t.url.clone()));
        assert_eq!(form.phase(), &Phase::Sent { fallback: Some(t.url) });
    }

    #[test]
    fn finish_without_submission_is_ignored() {
        let mut form = filled();
        form.finish(None);
        assert_eq!(form.phase(), &Phase::Editing);
        assert_eq!(form.fields().name, "Peter");
    }

    #[test]
    fn reset_returns_to_empty_form() {
        let mut form = filled();
        form.submit().unwrap();
        form.finish(None);
        form.reset();
        assert_eq!(form, ContactForm::new());
    }
}
