//! Static per-type defaults for newly added fields.

use super::{new_id, Field, FieldType};

pub const DEFAULT_OPTIONS: &[&str] = &["Option 1", "Option 2", "Option 3"];
pub const DEFAULT_UPLOAD_INSTRUCTIONS: &str = "Click to upload or drag and drop";
pub const DEFAULT_FILE_TYPES: &str = ".pdf,.doc,.docx,.jpg,.png";
pub const DEFAULT_MAX_FILE_SIZE: &str = "5MB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub options: Option<&'static [&'static str]>,
    pub file_types: Option<&'static str>,
    pub max_file_size: Option<&'static str>,
}

/// Entry used for type tags the catalog does not know.
const FALLBACK: CatalogEntry = CatalogEntry {
    label: "Field",
    placeholder: None,
    options: None,
    file_types: None,
    max_file_size: None,
};

pub fn entry(kind: FieldType) -> CatalogEntry {
    let label = match kind {
        FieldType::Text => "Text Input",
        FieldType::Email => "Email Address",
        FieldType::Number => "Number",
        FieldType::Textarea => "Text Area",
        FieldType::Select => "Dropdown",
        FieldType::Radio => "Radio Buttons",
        FieldType::Checkbox => "Checkboxes",
        FieldType::Date => "Date",
        FieldType::File => "File Upload",
        FieldType::Unknown => return FALLBACK,
    };

    if kind.is_file() {
        return CatalogEntry {
            label,
            placeholder: Some(DEFAULT_UPLOAD_INSTRUCTIONS),
            options: None,
            file_types: Some(DEFAULT_FILE_TYPES),
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        };
    }

    CatalogEntry {
        label,
        options: kind.has_options().then_some(DEFAULT_OPTIONS),
        ..FALLBACK
    }
}

pub fn new_field(kind: FieldType) -> Field {
    let defaults = entry(kind);
    Field {
        id: new_id("field"),
        kind,
        label: defaults.label.to_string(),
        placeholder: defaults.placeholder.map(str::to_string),
        required: false,
        options: defaults
            .options
            .map(|options| options.iter().map(|option| option.to_string()).collect()),
        file_types: defaults.file_types.map(str::to_string),
        max_file_size: defaults.max_file_size.map(str::to_string),
    }
}
