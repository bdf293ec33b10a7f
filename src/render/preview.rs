//! End-user view of the working copy. Nothing entered here is captured.

use super::field::{Surface, display_label, widget_for, FieldWidget};
use crate::form::Form;

pub const EMPTY_HINT: &str = "Add fields to see preview";
pub const SUBMIT_LABEL: &str = "Submit Form";
pub const SUBMIT_ACK: &str = "Form submitted! (Demo)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub label: String,
    pub widget: FieldWidget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewModel {
    Empty,
    Form {
        title: String,
        fields: Vec<PreviewItem>,
    },
}

pub fn derive(form: Option<&Form>) -> PreviewModel {
    match form {
        Some(form) if !form.fields.is_empty() => PreviewModel::Form {
            title: form.name.clone(),
            fields: form
                .fields
                .iter()
                .map(|field| PreviewItem {
                    label: display_label(field),
                    widget: widget_for(field, Surface::Preview),
                })
                .collect(),
        },
        _ => PreviewModel::Empty,
    }
}
