//! Per-type rendering rules shared by the builder canvas and the preview.

use crate::form::catalog::{DEFAULT_MAX_FILE_SIZE, DEFAULT_UPLOAD_INSTRUCTIONS};
use crate::form::{Field, FieldType};

pub const SELECT_PROMPT: &str = "Select...";
pub const ALL_FILE_TYPES: &str = "All file types";

/// Where a field is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Canvas,
    Preview,
}

/// Semantic type of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Date,
}

impl InputKind {
    pub fn hint(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWidget {
    SingleLine {
        input: InputKind,
        placeholder: String,
    },
    MultiLine {
        rows: u16,
        placeholder: String,
    },
    Dropdown {
        prompt: &'static str,
        options: Vec<String>,
    },
    /// One radio button per option; at most one of them is picked.
    RadioGroup { choices: Vec<String> },
    CheckboxList { choices: Vec<String> },
    /// Static upload affordance; no file I/O happens.
    UploadBox {
        instructions: String,
        file_types: String,
        max_size: String,
    },
    /// Type the catalog does not know; only the label is drawn.
    LabelOnly,
}

pub fn widget_for(field: &Field, surface: Surface) -> FieldWidget {
    let placeholder = field.placeholder().to_string();

    match field.kind {
        FieldType::Text => single_line(InputKind::Text, placeholder),
        FieldType::Email => single_line(InputKind::Email, placeholder),
        FieldType::Number => single_line(InputKind::Number, placeholder),
        FieldType::Date => single_line(InputKind::Date, placeholder),
        FieldType::Textarea => FieldWidget::MultiLine {
            rows: match surface {
                Surface::Canvas => 3,
                Surface::Preview => 4,
            },
            placeholder,
        },
        FieldType::Select => FieldWidget::Dropdown {
            prompt: SELECT_PROMPT,
            options: field.options().to_vec(),
        },
        FieldType::Radio => FieldWidget::RadioGroup {
            choices: field.options().to_vec(),
        },
        FieldType::Checkbox => FieldWidget::CheckboxList {
            choices: field.options().to_vec(),
        },
        FieldType::File => FieldWidget::UploadBox {
            instructions: non_empty(field.placeholder.as_deref(), DEFAULT_UPLOAD_INSTRUCTIONS),
            file_types: non_empty(field.file_types.as_deref(), ALL_FILE_TYPES),
            max_size: non_empty(field.max_file_size.as_deref(), DEFAULT_MAX_FILE_SIZE),
        },
        FieldType::Unknown => FieldWidget::LabelOnly,
    }
}

/// Field label with the required marker appended.
pub fn display_label(field: &Field) -> String {
    if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    }
}

fn single_line(input: InputKind, placeholder: String) -> FieldWidget {
    FieldWidget::SingleLine { input, placeholder }
}

fn non_empty(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::catalog::new_field;

    #[test]
    fn single_line_types_carry_semantics() {
        let mut field = new_field(FieldType::Email);
        field.placeholder = Some("you@example.com".into());

        assert_eq!(
            widget_for(&field, Surface::Canvas),
            FieldWidget::SingleLine {
                input: InputKind::Email,
                placeholder: "you@example.com".into(),
            }
        );
        assert!(matches!(
            widget_for(&new_field(FieldType::Date), Surface::Preview),
            FieldWidget::SingleLine { input: InputKind::Date, .. }
        ));
    }

    #[test]
    fn textarea_rows_depend_on_surface() {
        let field = new_field(FieldType::Textarea);
        assert!(matches!(widget_for(&field, Surface::Canvas), FieldWidget::MultiLine { rows: 3, .. }));
        assert!(matches!(widget_for(&field, Surface::Preview), FieldWidget::MultiLine { rows: 4, .. }));
    }

    #[test]
    fn dropdown_leads_with_prompt() {
        let mut field = new_field(FieldType::Select);
        field.options = Some(vec!["Red".into(), "Blue".into()]);

        match widget_for(&field, Surface::Canvas) {
            FieldWidget::Dropdown { prompt, options, .. } => {
                assert_eq!(prompt, "Select...");
                assert_eq!(options, ["Red", "Blue"]);
            }
            other => panic!("unexpected widget {other:?}"),
        }
    }

    #[test]
    fn radio_and_checkbox_list_options_in_order() {
        let field = new_field(FieldType::Radio);
        assert_eq!(
            widget_for(&field, Surface::Canvas),
            FieldWidget::RadioGroup {
                choices: vec!["Option 1".into(), "Option 2".into(), "Option 3".into()],
            }
        );

        let mut field = new_field(FieldType::Checkbox);
        field.options = Some(vec!["Email me".into()]);
        assert_eq!(
            widget_for(&field, Surface::Preview),
            FieldWidget::CheckboxList {
                choices: vec!["Email me".into()],
            }
        );
    }

    #[test]
    fn unknown_type_draws_label_only() {
        let field = new_field(FieldType::Unknown);
        assert_eq!(widget_for(&field, Surface::Canvas), FieldWidget::LabelOnly);
        assert_eq!(display_label(&field), "Field");
    }

    #[test]
    fn upload_box_falls_back_when_unset() {
        let mut field = new_field(FieldType::File);
        field.file_types = Some(String::new());
        field.max_file_size = None;
        field.placeholder = Some("Attach your CV".into());

        assert_eq!(
            widget_for(&field, Surface::Preview),
            FieldWidget::UploadBox {
                instructions: "Attach your CV".into(),
                file_types: "All file types".into(),
                max_size: "5MB".into(),
            }
        );
    }

    #[test]
    fn required_marker() {
        let mut field = new_field(FieldType::Number);
        assert_eq!(display_label(&field), "Number");
        field.required = true;
        assert_eq!(display_label(&field), "Number *");
    }
}
