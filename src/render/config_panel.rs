//! Property editor for the selected field.

use crate::form::catalog::DEFAULT_UPLOAD_INSTRUCTIONS;
use crate::form::{FieldType, Form};

pub const UNSELECTED_HINT: &str = "Select a field to configure";
pub const FILE_TYPES_EXAMPLE: &str = ".pdf,.doc,.jpg,.png";
pub const FILE_TYPES_HELP: &str = "Separate with commas (e.g., .pdf,.doc,.jpg)";

/// A text input bound to the field's `placeholder` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderInput {
    pub caption: &'static str,
    pub hint: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettings {
    pub file_types: String,
    pub max_file_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub index: usize,
    pub kind: FieldType,
    pub label: String,
    /// Absent for radio and checkbox fields.
    pub placeholder: Option<PlaceholderInput>,
    /// Options joined by newline; present for option-bearing fields.
    pub options_text: Option<String>,
    pub file: Option<FileSettings>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigModel {
    Unselected,
    Editing(FieldConfig),
}

pub fn derive(form: Option<&Form>, selection: Option<usize>) -> ConfigModel {
    let Some((index, field)) =
        selection.and_then(|index| Some((index, form?.fields.get(index)?)))
    else {
        return ConfigModel::Unselected;
    };

    let placeholder = match field.kind {
        FieldType::Radio | FieldType::Checkbox => None,
        FieldType::File => Some(PlaceholderInput {
            caption: "Upload Instructions",
            hint: DEFAULT_UPLOAD_INSTRUCTIONS,
            value: field.placeholder().to_string(),
        }),
        _ => Some(PlaceholderInput {
            caption: "Placeholder",
            hint: "",
            value: field.placeholder().to_string(),
        }),
    };

    ConfigModel::Editing(FieldConfig {
        index,
        kind: field.kind,
        label: field.label.clone(),
        placeholder,
        options_text: field.options.as_ref().map(|options| options.join("\n")),
        file: field.kind.is_file().then(|| FileSettings {
            file_types: field.file_types.clone().unwrap_or_default(),
            max_file_size: field.max_file_size.clone().unwrap_or_default(),
        }),
        required: field.required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(form: &Form, index: usize) -> FieldConfig {
        match derive(Some(form), Some(index)) {
            ConfigModel::Editing(config) => config,
            ConfigModel::Unselected => panic!("expected an editor for field {index}"),
        }
    }

    #[test]
    fn unselected_without_valid_selection() {
        let mut form = Form::new();
        form.push_field(FieldType::Text);

        assert_eq!(derive(None, Some(0)), ConfigModel::Unselected);
        assert_eq!(derive(Some(&form), None), ConfigModel::Unselected);
        assert_eq!(derive(Some(&form), Some(5)), ConfigModel::Unselected);
    }

    #[test]
    fn text_field_has_placeholder_but_no_options() {
        let mut form = Form::new();
        form.push_field(FieldType::Text);
        let config = editing(&form, 0);

        assert_eq!(config.label, "Text Input");
        assert_eq!(config.placeholder.unwrap().caption, "Placeholder");
        assert!(config.options_text.is_none());
        assert!(config.file.is_none());
    }

    #[test]
    fn choice_fields_edit_options_without_placeholder() {
        let mut form = Form::new();
        form.push_field(FieldType::Radio);
        form.push_field(FieldType::Select);

        let radio = editing(&form, 0);
        assert!(radio.placeholder.is_none());
        assert_eq!(radio.options_text.as_deref(), Some("Option 1\nOption 2\nOption 3"));

        let select = editing(&form, 1);
        assert!(select.placeholder.is_some());
        assert!(select.options_text.is_some());
    }

    #[test]
    fn file_field_has_upload_settings() {
        let mut form = Form::new();
        form.push_field(FieldType::File);
        let config = editing(&form, 0);

        let placeholder = config.placeholder.unwrap();
        assert_eq!(placeholder.caption, "Upload Instructions");
        assert_eq!(placeholder.value, "Click to upload or drag and drop");
        assert_eq!(
            config.file,
            Some(FileSettings {
                file_types: ".pdf,.doc,.docx,.jpg,.png".into(),
                max_file_size: "5MB".into(),
            })
        );
        assert!(config.options_text.is_none());
    }
}
