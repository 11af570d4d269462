use guardview_domain::{FieldValue, ValidationResult};

use super::fields::filter_url;

/// Visual state of an input in the "add filter" dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Valid,
    Invalid,
}

/// Contents of the "add filter" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFilterForm {
    pub name: String,
    pub url: String,
}

impl NewFilterForm {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn url_error(&self) -> ValidationResult {
        filter_url(&FieldValue::Text(self.url.clone()))
    }

    pub fn url_state(&self) -> FieldState {
        if self.url.is_empty() {
            FieldState::Untouched
        } else if self.url_error().is_ok() {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }

    /// An empty name is never flagged, only left unconfirmed.
    pub fn name_state(&self) -> FieldState {
        if self.name.is_empty() {
            FieldState::Untouched
        } else {
            FieldState::Valid
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.url_state() == FieldState::Valid && self.name_state() == FieldState::Valid
    }

    /// Back to the blank state the dialog opens with
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
