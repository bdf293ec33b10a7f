//! Builder canvas: the working copy's fields in order, with the selection.

use super::field::{Surface, display_label, widget_for, FieldWidget};
use crate::form::Form;

pub const EMPTY_TITLE: &str = "Click a field type to add it";
pub const EMPTY_HINT: &str = "Build your form by adding fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasItem {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    pub widget: FieldWidget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasModel {
    Empty,
    Fields(Vec<CanvasItem>),
}

pub fn derive(form: Option<&Form>, selection: Option<usize>) -> CanvasModel {
    let Some(form) = form.filter(|form| !form.fields.is_empty()) else {
        return CanvasModel::Empty;
    };

    CanvasModel::Fields(
        form.fields
            .iter()
            .enumerate()
            .map(|(index, field)| CanvasItem {
                index,
                label: display_label(field),
                selected: selection == Some(index),
                widget: widget_for(field, Surface::Canvas),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldType;

    #[test]
    fn no_form_or_no_fields_is_empty() {
        assert_eq!(derive(None, None), CanvasModel::Empty);
        assert_eq!(derive(Some(&Form::new()), Some(0)), CanvasModel::Empty);
    }

    #[test]
    fn marks_only_selected_field() {
        let mut form = Form::new();
        form.push_field(FieldType::Text);
        form.push_field(FieldType::Checkbox);
        form.push_field(FieldType::File);

        let CanvasModel::Fields(items) = derive(Some(&form), Some(1)) else {
            panic!("expected fields");
        };
        let selected: Vec<bool> = items.iter().map(|item| item.selected).collect();
        assert_eq!(selected, [false, true, false]);
        assert_eq!(items[2].index, 2);
        assert_eq!(items[2].label, "File Upload");
    }
}
