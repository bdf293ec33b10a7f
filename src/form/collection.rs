use serde::{Deserialize, Serialize};

use super::Form;
use crate::error::FormError;

/// Outcome of [`FormCollection::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Ordered collection of saved forms, keyed by form id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormCollection {
    forms: Vec<Form>,
}

impl FormCollection {
    pub fn new() -> Self {
        Self { forms: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn as_slice(&self) -> &[Form] {
        &self.forms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Form> {
        self.forms.iter()
    }

    pub fn get(&self, id: &str) -> Result<&Form, FormError> {
        self.forms
            .iter()
            .find(|form| form.id == id)
            .ok_or_else(|| FormError::FormNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Form, FormError> {
        self.forms
            .iter_mut()
            .find(|form| form.id == id)
            .ok_or_else(|| FormError::FormNotFound(id.to_string()))
    }

    /// Replaces the form with the same id in place, or appends it.
    pub fn upsert(&mut self, form: Form) -> Upsert {
        match self.forms.iter_mut().find(|existing| existing.id == form.id) {
            Some(existing) => {
                *existing = form;
                Upsert::Replaced
            }
            None => {
                self.forms.push(form);
                Upsert::Inserted
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<Form, FormError> {
        let position = self
            .forms
            .iter()
            .position(|form| form.id == id)
            .ok_or_else(|| FormError::FormNotFound(id.to_string()))?;
        Ok(self.forms.remove(position))
    }
}

impl From<Vec<Form>> for FormCollection {
    fn from(forms: Vec<Form>) -> Self {
        Self { forms }
    }
}

impl<'a> IntoIterator for &'a FormCollection {
    type Item = &'a Form;
    type IntoIter = std::slice::Iter<'a, Form>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}
