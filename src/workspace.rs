//! Application state and the single entry point for every mutation.
//!
//! The shell forwards user intents to [`Workspace`] methods and re-renders
//! afterwards. Errors never escape: each one becomes a notice in the outbox,
//! which the shell drains with [`Workspace::take_notices`].

use std::fmt::{self, Display};

use tracing::{debug, error, info, warn};

use crate::demo::DemoData;
use crate::error::FormError;
use crate::form::{FieldEdit, FieldType, Form, FormCollection};
use crate::render::preview::SUBMIT_ACK;
use crate::storage::FormStore;

pub const UNREADABLE_STATE_NOTICE: &str = "Saved forms could not be read; starting fresh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Builder,
    Preview,
    Analytics,
}

impl View {
    pub const ALL: [View; 4] = [View::Dashboard, View::Builder, View::Preview, View::Analytics];
}

impl Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            View::Dashboard => "Dashboard",
            View::Builder => "Builder",
            View::Preview => "Preview",
            View::Analytics => "Analytics",
        };
        write!(f, "{label}")
    }
}

/// A question waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    ConfirmDeleteForm { id: String, name: String },
    ConfirmDeleteField { index: usize, label: String },
    /// Offered on the first save of a form that still has the default name.
    NameForm { draft: String },
}

pub struct Workspace {
    store: FormStore,
    demo: DemoData,
    forms: FormCollection,
    working: Option<Form>,
    selection: Option<usize>,
    view: View,
    prompt: Option<Prompt>,
    notices: Vec<String>,
}

impl Workspace {
    /// Loads the saved collection; unreadable state starts an empty one.
    pub fn open(store: FormStore, mut demo: DemoData) -> Self {
        let mut notices = Vec::new();
        let forms = match store.load_forms(&mut demo) {
            Ok(forms) => {
                info!(count = forms.len(), "loaded saved forms");
                forms
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable saved forms");
                notices.push(UNREADABLE_STATE_NOTICE.to_string());
                FormCollection::new()
            }
        };

        Self {
            store,
            demo,
            forms,
            working: None,
            selection: None,
            view: View::Dashboard,
            prompt: None,
            notices,
        }
    }

    pub fn forms(&self) -> &FormCollection {
        &self.forms
    }

    pub fn working(&self) -> Option<&Form> {
        self.working.as_ref()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    #[cfg(test)]
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    #[cfg(test)]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    pub fn switch_view(&mut self, view: View) {
        debug!(%view, "switching view");
        self.view = view;
    }

    pub fn create_form(&mut self) {
        let form = Form::new();
        info!(id = %form.id, "created form");
        self.replace_working(form);
        self.notify("New form created!");
    }

    /// Opens a deep copy of a saved form in the builder.
    pub fn edit_form(&mut self, id: &str) {
        match self.forms.get(id) {
            Ok(form) => {
                let copy = form.clone();
                debug!(id, "editing form");
                self.replace_working(copy);
            }
            Err(err) => self.report(err),
        }
    }

    /// Appends a catalog field to the working copy and selects it.
    pub fn add_field(&mut self, kind: FieldType) -> Option<usize> {
        let index = self.with_working(|form| Ok(form.push_field(kind)))?;
        self.selection = Some(index);
        self.notify("Field added!");
        Some(index)
    }

    pub fn select_field(&mut self, index: usize) {
        if self.with_working(|form| form.field(index).map(|_| ())).is_some() {
            debug!(index, "selected field");
            self.selection = Some(index);
        }
    }

    pub fn update_field(&mut self, index: usize, edit: FieldEdit) {
        self.with_working(|form| form.apply_edit(index, edit));
    }

    pub fn update_field_options(&mut self, index: usize, raw: &str) {
        self.with_working(|form| form.set_options(index, raw));
    }

    pub fn request_delete_field(&mut self, index: usize) {
        let label = self.with_working(|form| form.field(index).map(|field| field.label.clone()));
        if let Some(label) = label {
            self.prompt = Some(Prompt::ConfirmDeleteField { index, label });
        }
    }

    pub fn delete_field(&mut self, index: usize) {
        if self.with_working(|form| form.remove_field(index)).is_some() {
            self.selection = None;
            self.notify("Field deleted");
        }
    }

    /// Saves the working copy, asking for a name first if it has none.
    pub fn request_save(&mut self) {
        match &self.working {
            None => self.notify("No form to save"),
            Some(form) if form.has_default_name() => {
                self.prompt = Some(Prompt::NameForm {
                    draft: form.name.clone(),
                });
            }
            Some(_) => self.save_working_copy(),
        }
    }

    /// Upserts the working copy into the collection and persists it.
    pub fn save_working_copy(&mut self) {
        let Some(form) = self.working.clone() else {
            self.notify("No form to save");
            return;
        };

        let id = form.id.clone();
        let outcome = self.forms.upsert(form);
        info!(%id, ?outcome, "saved form");
        if self.persist() {
            self.notify("Form saved successfully!");
        }
    }

    pub fn request_delete_form(&mut self, id: &str) {
        match self.forms.get(id) {
            Ok(form) => {
                self.prompt = Some(Prompt::ConfirmDeleteForm {
                    id: form.id.clone(),
                    name: form.name.clone(),
                });
            }
            Err(err) => self.report(err),
        }
    }

    pub fn delete_form(&mut self, id: &str) {
        match self.forms.remove(id) {
            Ok(form) => {
                info!(id = %form.id, "deleted form");
                if self.persist() {
                    self.notify("Form deleted");
                }
            }
            Err(err) => self.report(err),
        }
    }

    /// Adds a random batch of synthetic submissions to a saved form.
    pub fn generate_submissions(&mut self, id: &str) {
        let batch = self.demo.test_batch();
        match self.forms.get_mut(id) {
            Ok(form) => {
                form.submissions = form.submissions.saturating_add(batch);
                info!(id, batch, total = form.submissions, "generated test submissions");
                if self.persist() {
                    self.notify(format!("Added {batch} test submissions"));
                }
            }
            Err(err) => self.report(err),
        }
    }

    pub fn set_prompt_draft(&mut self, value: String) {
        if let Some(Prompt::NameForm { draft }) = &mut self.prompt {
            *draft = value;
        }
    }

    /// Answers the pending prompt affirmatively.
    pub fn confirm_prompt(&mut self) {
        match self.prompt.take() {
            Some(Prompt::ConfirmDeleteForm { id, .. }) => self.delete_form(&id),
            Some(Prompt::ConfirmDeleteField { index, .. }) => self.delete_field(index),
            Some(Prompt::NameForm { draft }) => {
                let name = draft.trim();
                if !name.is_empty() {
                    if let Some(form) = self.working.as_mut() {
                        form.name = name.to_string();
                    }
                }
                self.save_working_copy();
            }
            None => {}
        }
    }

    /// Cancels the pending prompt. Declining to name a form still saves it.
    pub fn dismiss_prompt(&mut self) {
        if let Some(Prompt::NameForm { .. }) = self.prompt.take() {
            self.save_working_copy();
        }
    }

    pub fn submit_preview(&mut self) {
        self.notify(SUBMIT_ACK);
    }

    fn replace_working(&mut self, form: Form) {
        self.working = Some(form);
        self.selection = None;
        self.prompt = None;
        self.view = View::Builder;
    }

    fn with_working<T>(
        &mut self,
        op: impl FnOnce(&mut Form) -> Result<T, FormError>,
    ) -> Option<T> {
        let result = match self.working.as_mut() {
            Some(form) => op(form),
            None => Err(FormError::NoWorkingCopy),
        };
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    fn persist(&mut self) -> bool {
        match self.store.save_forms(&self.forms) {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "failed to persist forms");
                self.notify(format!("Could not save forms: {err}"));
                false
            }
        }
    }

    fn report(&mut self, err: FormError) {
        warn!(error = %err, "operation rejected");
        let message = match err {
            FormError::FormNotFound(_) => "Form not found".to_string(),
            FormError::FieldNotFound { .. } => "Field not found".to_string(),
            FormError::NoWorkingCopy => "Please create a form first".to_string(),
            FormError::PropertyNotApplicable { .. } => err.to_string(),
        };
        self.notify(message);
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::TEST_BATCH;

    fn workspace() -> Workspace {
        Workspace::open(FormStore::open_in_memory().unwrap(), DemoData::seeded(11))
    }

    fn reload(workspace: &Workspace) -> FormCollection {
        workspace
            .store()
            .load_forms(&mut DemoData::seeded(0))
            .unwrap()
    }

    fn saved_form(workspace: &mut Workspace, name: &str) -> String {
        workspace.create_form();
        workspace.add_field(FieldType::Text);
        workspace.request_save();
        workspace.set_prompt_draft(name.to_string());
        workspace.confirm_prompt();
        workspace.take_notices();
        workspace.working().unwrap().id.clone()
    }

    #[test]
    fn starts_on_dashboard_with_nothing_open() {
        let workspace = workspace();
        assert_eq!(workspace.view(), View::Dashboard);
        assert!(workspace.working().is_none());
        assert!(workspace.forms().is_empty());
        assert!(workspace.notices().is_empty());
    }

    #[test]
    fn unreadable_state_starts_empty_and_keeps_stored_value() {
        let store = FormStore::open_in_memory().unwrap();
        store.put(crate::storage::FORMS_KEY, "[{broken").unwrap();

        let workspace = Workspace::open(store, DemoData::seeded(1));
        assert!(workspace.forms().is_empty());
        assert_eq!(workspace.notices(), [UNREADABLE_STATE_NOTICE]);
        assert_eq!(
            workspace.store().get(crate::storage::FORMS_KEY).unwrap().as_deref(),
            Some("[{broken")
        );
    }

    #[test]
    fn create_form_opens_builder() {
        let mut workspace = workspace();
        workspace.create_form();

        assert_eq!(workspace.view(), View::Builder);
        assert!(workspace.working().unwrap().fields.is_empty());
        assert_eq!(workspace.selection(), None);
        assert_eq!(workspace.take_notices(), ["New form created!"]);
    }

    #[test]
    fn add_field_without_form_is_rejected() {
        let mut workspace = workspace();
        assert_eq!(workspace.add_field(FieldType::Text), None);
        assert_eq!(workspace.take_notices(), ["Please create a form first"]);
    }

    #[test]
    fn add_field_appends_and_selects() {
        let mut workspace = workspace();
        workspace.create_form();

        assert_eq!(workspace.add_field(FieldType::Text), Some(0));
        assert_eq!(workspace.add_field(FieldType::Radio), Some(1));
        assert_eq!(workspace.selection(), Some(1));
        assert_eq!(workspace.working().unwrap().fields.len(), 2);
    }

    #[test]
    fn out_of_bounds_edit_is_a_reported_no_op() {
        let mut workspace = workspace();
        workspace.create_form();
        workspace.add_field(FieldType::Text);
        let before = workspace.working().cloned();
        workspace.take_notices();

        workspace.update_field(4, FieldEdit::Label("ghost".into()));
        workspace.update_field_options(4, "a\nb");

        assert_eq!(workspace.working().cloned(), before);
        assert_eq!(workspace.take_notices(), ["Field not found", "Field not found"]);
    }

    #[test]
    fn delete_field_clears_selection_and_shifts() {
        let mut workspace = workspace();
        workspace.create_form();
        workspace.add_field(FieldType::Text);
        workspace.add_field(FieldType::Email);
        workspace.add_field(FieldType::Date);
        let third = workspace.working().unwrap().fields[2].id.clone();
        workspace.select_field(1);

        workspace.request_delete_field(1);
        assert!(matches!(
            workspace.prompt(),
            Some(Prompt::ConfirmDeleteField { index: 1, .. })
        ));
        workspace.confirm_prompt();

        let form = workspace.working().unwrap();
        assert_eq!(workspace.selection(), None);
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields[1].id, third);
        assert!(workspace.prompt().is_none());
    }

    #[test]
    fn cancelled_field_delete_keeps_field() {
        let mut workspace = workspace();
        workspace.create_form();
        workspace.add_field(FieldType::Text);

        workspace.request_delete_field(0);
        workspace.dismiss_prompt();

        assert_eq!(workspace.working().unwrap().fields.len(), 1);
        assert!(workspace.prompt().is_none());
    }

    #[test]
    fn first_save_prompts_for_name() {
        let mut workspace = workspace();
        workspace.create_form();
        workspace.request_save();
        assert_eq!(
            workspace.prompt(),
            Some(&Prompt::NameForm {
                draft: "Untitled Form".into()
            })
        );
        assert!(workspace.forms().is_empty());

        workspace.set_prompt_draft("  Contact us  ".into());
        workspace.confirm_prompt();

        assert_eq!(workspace.forms().len(), 1);
        assert_eq!(workspace.forms().as_slice()[0].name, "Contact us");
        assert_eq!(workspace.working().unwrap().name, "Contact us");
    }

    #[test]
    fn blank_or_cancelled_name_keeps_default_and_still_saves() {
        let mut workspace = workspace();
        workspace.create_form();
        workspace.request_save();
        workspace.set_prompt_draft("   ".into());
        workspace.confirm_prompt();
        assert_eq!(workspace.forms().as_slice()[0].name, "Untitled Form");

        workspace.create_form();
        workspace.request_save();
        workspace.dismiss_prompt();
        assert_eq!(workspace.forms().len(), 2);
        assert_eq!(workspace.forms().as_slice()[1].name, "Untitled Form");
    }

    #[test]
    fn save_without_form() {
        let mut workspace = workspace();
        workspace.request_save();
        assert_eq!(workspace.take_notices(), ["No form to save"]);
    }

    #[test]
    fn repeated_save_is_idempotent() {
        let mut workspace = workspace();
        saved_form(&mut workspace, "Survey");
        let after_first = workspace.forms().clone();

        workspace.request_save();
        workspace.request_save();

        assert_eq!(workspace.forms(), &after_first);
        assert_eq!(reload(&workspace), after_first);
    }

    #[test]
    fn working_copy_is_decoupled_until_saved() {
        let mut workspace = workspace();
        let id = saved_form(&mut workspace, "Survey");

        workspace.edit_form(&id);
        workspace.update_field(0, FieldEdit::Label("Changed".into()));
        assert_eq!(workspace.forms().get(&id).unwrap().fields[0].label, "Text Input");

        workspace.request_save();
        assert_eq!(workspace.forms().get(&id).unwrap().fields[0].label, "Changed");
        assert_eq!(workspace.forms().len(), 1);
    }

    #[test]
    fn select_options_survive_save_and_reload() {
        let mut workspace = workspace();
        workspace.create_form();
        let index = workspace.add_field(FieldType::Select).unwrap();
        workspace.update_field_options(index, "A\nB\n\nC");
        workspace.request_save();
        workspace.confirm_prompt();

        let reloaded = reload(&workspace);
        assert_eq!(reloaded.len(), 1);
        let form = &reloaded.as_slice()[0];
        assert_eq!(form.fields.len(), 1);
        assert_eq!(form.fields[0].kind, FieldType::Select);
        assert_eq!(form.fields[0].options(), ["A", "B", "C"]);
    }

    #[test]
    fn edit_unknown_form_is_reported() {
        let mut workspace = workspace();
        workspace.edit_form("form_gone");
        assert!(workspace.working().is_none());
        assert_eq!(workspace.view(), View::Dashboard);
        assert_eq!(workspace.take_notices(), ["Form not found"]);
    }

    #[test]
    fn deleting_stale_form_changes_nothing() {
        let mut workspace = workspace();
        saved_form(&mut workspace, "Keep");
        let before = workspace.forms().clone();

        workspace.delete_form("form_stale");

        assert_eq!(workspace.forms(), &before);
        assert_eq!(reload(&workspace), before);
        assert_eq!(workspace.take_notices().len(), 1);
    }

    #[test]
    fn delete_form_after_confirmation() {
        let mut workspace = workspace();
        let id = saved_form(&mut workspace, "Gone soon");

        workspace.request_delete_form(&id);
        assert!(matches!(
            workspace.prompt(),
            Some(Prompt::ConfirmDeleteForm { name, .. }) if name == "Gone soon"
        ));
        workspace.confirm_prompt();

        assert!(workspace.forms().is_empty());
        assert!(reload(&workspace).is_empty());
        assert_eq!(workspace.take_notices(), ["Form deleted"]);
    }

    #[test]
    fn request_delete_of_unknown_form_does_not_prompt() {
        let mut workspace = workspace();
        workspace.request_delete_form("form_missing");
        assert!(workspace.prompt().is_none());
        assert_eq!(workspace.take_notices(), ["Form not found"]);
    }

    #[test]
    fn generated_submissions_are_persisted() {
        let mut workspace = workspace();
        let id = saved_form(&mut workspace, "Busy");

        workspace.generate_submissions(&id);

        let submissions = workspace.forms().get(&id).unwrap().submissions;
        assert!(TEST_BATCH.contains(&submissions));
        assert_eq!(reload(&workspace).get(&id).unwrap().submissions, submissions);
        assert_eq!(
            workspace.take_notices(),
            [format!("Added {submissions} test submissions")]
        );
    }

    #[test]
    fn preview_submit_only_acknowledges() {
        let mut workspace = workspace();
        workspace.create_form();
        workspace.take_notices();

        workspace.submit_preview();
        assert!(workspace.forms().is_empty());
        assert_eq!(workspace.take_notices(), ["Form submitted! (Demo)"]);
    }
}
