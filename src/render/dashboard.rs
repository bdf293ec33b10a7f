//! Dashboard totals and the saved-form list.

use super::local_date;
use crate::form::FormCollection;

pub const EMPTY_TITLE: &str = "No forms yet";
pub const EMPTY_HINT: &str = "Create your first form to get started";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub forms: u64,
    pub fields: u64,
    pub submissions: u64,
}

impl Totals {
    pub fn of(forms: &FormCollection) -> Self {
        forms.iter().fold(
            Totals {
                forms: forms.len() as u64,
                ..Totals::default()
            },
            |totals, form| Totals {
                fields: totals.fields + form.fields.len() as u64,
                submissions: totals.submissions + u64::from(form.submissions),
                ..totals
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub id: String,
    pub name: String,
    pub field_count: usize,
    pub submissions: u32,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormList {
    Empty,
    Rows(Vec<FormRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardModel {
    pub totals: Totals,
    pub list: FormList,
}

pub fn derive(forms: &FormCollection) -> DashboardModel {
    let list = if forms.is_empty() {
        FormList::Empty
    } else {
        FormList::Rows(
            forms
                .iter()
                .map(|form| FormRow {
                    id: form.id.clone(),
                    name: form.name.clone(),
                    field_count: form.fields.len(),
                    submissions: form.submissions,
                    created: local_date(&form.created_at),
                })
                .collect(),
        )
    };

    DashboardModel {
        totals: Totals::of(forms),
        list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldType, Form};

    #[test]
    fn empty_collection_takes_empty_path() {
        let model = derive(&FormCollection::new());
        assert_eq!(model.totals, Totals::default());
        assert_eq!(model.list, FormList::Empty);
    }

    #[test]
    fn totals_sum_over_forms() {
        let mut a = Form::new();
        a.push_field(FieldType::Text);
        a.push_field(FieldType::Email);
        a.submissions = 4;
        let mut b = Form::new();
        b.push_field(FieldType::Date);
        b.submissions = 9;
        let forms = FormCollection::from(vec![a.clone(), b]);

        let model = derive(&forms);
        assert_eq!(
            model.totals,
            Totals {
                forms: 2,
                fields: 3,
                submissions: 13
            }
        );

        let FormList::Rows(rows) = model.list else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, a.id);
        assert_eq!(rows[0].field_count, 2);
        assert_eq!(rows[1].submissions, 9);
    }
}
