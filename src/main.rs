mod config;
mod demo;
mod error;
mod form;
mod render;
mod storage;
mod ui;
mod workspace;

use std::time::Duration;

use config::AppConfig;
use demo::DemoData;
use form::{FieldEdit, FieldType};
use iced::time::Instant;
use iced::widget::{column, container, stack, text_editor};
use iced::{Element, Length, Subscription, Task};
use storage::FormStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::style;
use ui::toast::Toast;
use workspace::{View, Workspace};

const DEFAULT_LOG_FILTER: &str = "formcraft=info";
const EPHEMERAL_NOTICE: &str = "Storage unavailable; changes will not be kept";
const TOAST_TICK: Duration = Duration::from_millis(200);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "invalid configuration, using defaults");
        AppConfig::default()
    });
    info!(data_dir = %config.data_dir.display(), "starting FormCraft");

    let (store, fallback_notice) = open_store(&config)?;
    let workspace = Workspace::open(store, DemoData::from_seed(config.demo_seed));
    let toast_duration = config.toast_duration;

    iced::application("FormCraft", update, view)
        .subscription(subscription)
        .theme(|_| style::app_theme())
        .window_size((1280.0, 860.0))
        .run_with(move || {
            let mut app = App::new(workspace, toast_duration);
            if let Some(notice) = fallback_notice {
                app.show(notice.to_string());
            }
            (app, Task::none())
        })?;

    Ok(())
}

/// Opens the on-disk store, falling back to an in-memory one.
fn open_store(config: &AppConfig) -> Result<(FormStore, Option<&'static str>), error::StorageError> {
    let path = config.database_path();
    match FormStore::open(&path) {
        Ok(store) => Ok((store, None)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not open database, keeping forms in memory");
            Ok((FormStore::open_in_memory()?, Some(EPHEMERAL_NOTICE)))
        }
    }
}

struct App {
    workspace: Workspace,
    options_editor: text_editor::Content,
    /// Form id and field index the options editor currently mirrors.
    options_target: Option<(String, usize)>,
    toast: Option<Toast>,
    toast_duration: Duration,
}

impl App {
    fn new(workspace: Workspace, toast_duration: Duration) -> Self {
        let mut app = Self {
            workspace,
            options_editor: text_editor::Content::new(),
            options_target: None,
            toast: None,
            toast_duration,
        };
        app.show_notices();
        app
    }

    fn show(&mut self, message: String) {
        self.toast = Some(Toast::new(message, Instant::now()));
    }

    /// Only the latest notice is visible; earlier ones are replaced.
    fn show_notices(&mut self) {
        if let Some(message) = self.workspace.take_notices().pop() {
            self.show(message);
        }
    }

    /// Reloads the options editor when a different choice field is selected.
    fn sync_options_editor(&mut self) {
        let current = self
            .workspace
            .working()
            .zip(self.workspace.selection())
            .and_then(|(form, index)| {
                let options = form.fields.get(index)?.options.as_ref()?;
                Some(((form.id.clone(), index), options.join("\n")))
            });

        match current {
            Some((target, text)) => {
                if self.options_target.as_ref() != Some(&target) {
                    self.options_editor = text_editor::Content::with_text(&text);
                    self.options_target = Some(target);
                }
            }
            None => self.options_target = None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ViewSelected(View),
    NewFormPressed,
    SavePressed,
    EditFormPressed(String),
    DeleteFormPressed(String),
    GenerateSubmissionsPressed(String),
    AddFieldPressed(FieldType),
    FieldSelected(usize),
    DeleteFieldPressed(usize),
    FieldEdited(usize, FieldEdit),
    OptionsEdited(text_editor::Action),
    PromptDraftChanged(String),
    PromptConfirmed,
    PromptDismissed,
    PreviewInteracted,
    PreviewSubmitted,
    ToastTick(Instant),
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ViewSelected(view) => app.workspace.switch_view(view),
        Message::NewFormPressed => app.workspace.create_form(),
        Message::SavePressed => app.workspace.request_save(),
        Message::EditFormPressed(id) => app.workspace.edit_form(&id),
        Message::DeleteFormPressed(id) => app.workspace.request_delete_form(&id),
        Message::GenerateSubmissionsPressed(id) => app.workspace.generate_submissions(&id),
        Message::AddFieldPressed(kind) => {
            app.workspace.add_field(kind);
        }
        Message::FieldSelected(index) => app.workspace.select_field(index),
        Message::DeleteFieldPressed(index) => app.workspace.request_delete_field(index),
        Message::FieldEdited(index, edit) => app.workspace.update_field(index, edit),
        Message::OptionsEdited(action) => {
            let is_edit = action.is_edit();
            app.options_editor.perform(action);
            if is_edit {
                if let Some((_, index)) = app.options_target {
                    app.workspace
                        .update_field_options(index, &app.options_editor.text());
                }
            }
        }
        Message::PromptDraftChanged(value) => app.workspace.set_prompt_draft(value),
        Message::PromptConfirmed => app.workspace.confirm_prompt(),
        Message::PromptDismissed => app.workspace.dismiss_prompt(),
        Message::PreviewInteracted => {}
        Message::PreviewSubmitted => app.workspace.submit_preview(),
        Message::ToastTick(now) => {
            if app
                .toast
                .as_ref()
                .is_some_and(|toast| toast.expired(now, app.toast_duration))
            {
                app.toast = None;
            }
        }
    }

    app.sync_options_editor();
    app.show_notices();
    Task::none()
}

fn subscription(app: &App) -> Subscription<Message> {
    if app.toast.is_some() {
        iced::time::every(TOAST_TICK).map(Message::ToastTick)
    } else {
        Subscription::none()
    }
}

fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view(app.workspace.view());

    let body = match app.workspace.view() {
        View::Dashboard => ui::dashboard::view(render::dashboard::derive(app.workspace.forms())),
        View::Builder => ui::builder::view(&app.workspace, &app.options_editor),
        View::Preview => ui::preview::view(render::preview::derive(app.workspace.working())),
        View::Analytics => ui::analytics::view(render::analytics::derive(app.workspace.forms())),
    };

    let layout = container(
        column![header, body]
            .spacing(1)
            .height(Length::Fill)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_| style::flat_surface_style(style::BG));

    let mut layers = stack![layout].width(Length::Fill).height(Length::Fill);
    if let Some(prompt) = app.workspace.prompt() {
        layers = layers.push(ui::prompt::view(prompt));
    }
    if let Some(toast) = &app.toast {
        layers = layers.push(ui::toast::view(toast));
    }

    layers.into()
}
