//! # Form / Field Data Model
//!
//! In-memory representation of a form and its fields. Every edit made in the
//! builder funnels through the methods here; callers re-render afterwards.

pub mod catalog;
pub mod collection;

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;

pub use collection::FormCollection;

/// Name given to freshly created forms until the user picks one.
pub const DEFAULT_FORM_NAME: &str = "Untitled Form";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Date,
    File,
    /// Tag written by something other than this app; kept so the rest of
    /// the stored form still loads.
    #[serde(other)]
    Unknown,
}

impl FieldType {
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::File,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Unknown => "unknown",
        }
    }

    /// Select, radio and checkbox fields carry an options list.
    pub fn has_options(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    pub fn is_file(self) -> bool {
        self == FieldType::File
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single configurable field of a form.
///
/// `options` is present iff the type has options; `file_types` and
/// `max_file_size` are present iff the type is `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub file_types: Option<String>,
    #[serde(default)]
    pub max_file_size: Option<String>,
}

impl Field {
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or_default()
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Checks the presence rules for the type-specific properties.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.kind.has_options() != self.options.is_some() {
            return Err(format!(
                "field '{}' of type {} has mismatched options",
                self.id, self.kind
            ));
        }
        if !self.kind.is_file() && (self.file_types.is_some() || self.max_file_size.is_some()) {
            return Err(format!(
                "field '{}' of type {} carries file settings",
                self.id, self.kind
            ));
        }
        Ok(())
    }
}

/// A typed edit of one field property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Label(String),
    Placeholder(String),
    Required(bool),
    FileTypes(String),
    MaxFileSize(String),
}

impl FieldEdit {
    pub fn property(&self) -> &'static str {
        match self {
            FieldEdit::Label(_) => "label",
            FieldEdit::Placeholder(_) => "placeholder",
            FieldEdit::Required(_) => "required",
            FieldEdit::FileTypes(_) => "fileTypes",
            FieldEdit::MaxFileSize(_) => "maxFileSize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
    pub created_at: DateTime<Utc>,
    pub submissions: u32,
}

impl Form {
    pub fn new() -> Self {
        Self {
            id: new_id("form"),
            name: DEFAULT_FORM_NAME.to_string(),
            fields: Vec::new(),
            created_at: Utc::now(),
            submissions: 0,
        }
    }

    pub fn has_default_name(&self) -> bool {
        self.name == DEFAULT_FORM_NAME
    }

    /// Appends a field with catalog defaults and returns its index.
    pub fn push_field(&mut self, kind: FieldType) -> usize {
        self.fields.push(catalog::new_field(kind));
        self.fields.len() - 1
    }

    pub fn field(&self, index: usize) -> Result<&Field, FormError> {
        self.fields.get(index).ok_or(FormError::FieldNotFound {
            index,
            len: self.fields.len(),
        })
    }

    fn field_mut(&mut self, index: usize) -> Result<&mut Field, FormError> {
        let len = self.fields.len();
        self.fields
            .get_mut(index)
            .ok_or(FormError::FieldNotFound { index, len })
    }

    pub fn apply_edit(&mut self, index: usize, edit: FieldEdit) -> Result<(), FormError> {
        let property = edit.property();
        let field = self.field_mut(index)?;
        match edit {
            FieldEdit::Label(value) => field.label = value,
            FieldEdit::Placeholder(value) => field.placeholder = Some(value),
            FieldEdit::Required(value) => field.required = value,
            FieldEdit::FileTypes(_) | FieldEdit::MaxFileSize(_) if !field.kind.is_file() => {
                return Err(FormError::PropertyNotApplicable {
                    property,
                    kind: field.kind,
                });
            }
            FieldEdit::FileTypes(value) => field.file_types = Some(value),
            FieldEdit::MaxFileSize(value) => field.max_file_size = Some(value),
        }
        Ok(())
    }

    /// Replaces the options of an option-bearing field from one-per-line text.
    pub fn set_options(&mut self, index: usize, raw: &str) -> Result<(), FormError> {
        let field = self.field_mut(index)?;
        if !field.kind.has_options() {
            return Err(FormError::PropertyNotApplicable {
                property: "options",
                kind: field.kind,
            });
        }
        field.options = Some(parse_options(raw));
        Ok(())
    }

    pub fn remove_field(&mut self, index: usize) -> Result<Field, FormError> {
        if index >= self.fields.len() {
            return Err(FormError::FieldNotFound {
                index,
                len: self.fields.len(),
            });
        }
        Ok(self.fields.remove(index))
    }

    pub fn check_shape(&self) -> Result<(), String> {
        self.fields.iter().try_for_each(Field::check_shape)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits one-option-per-line text, dropping blank and whitespace-only lines.
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}
