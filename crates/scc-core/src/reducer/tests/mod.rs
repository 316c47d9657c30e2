pub(super) use super::reduce;
pub(super) use super::ConsoleEffect;
pub(super) use super::COMMAND_CENTER_LOADED;
pub(super) use super::CONTACT_FAILED;
pub(super) use super::CONTACT_SENT;
pub(super) use super::NETWORK_LOADING;
pub(super) use super::RESOURCES_OPTIMIZED;
pub(super) use crate::actions::ConsoleAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::config::Config;
pub(super) use crate::config::DeliveryMode;
pub(super) use crate::contact::ContactField;
pub(super) use crate::contact::ContactStatus;
pub(super) use crate::notifications::NotificationKind;
pub(super) use crate::notifications::NOTIFICATION_CAP;
pub(super) use crate::state::ConsoleOverlay;
pub(super) use crate::state::ConsoleState;
pub(super) use crate::state::Section;
pub(super) use crate::telemetry::GaugeKind;
pub(super) use crate::telemetry::TelemetrySample;
pub(super) use crate::terminal::TerminalEntry;
pub(super) use crate::terminal::CLEARED_BANNER;

mod contact;
mod navigation;
mod terminal;

/// An online console, as if the boot sequence had already finished.
fn state() -> ConsoleState {
    let mut config = Config::default();
    config.boot.skip = true;
    ConsoleState::new(&config)
}

fn booting_state() -> ConsoleState {
    ConsoleState::new(&Config::default())
}

fn run_user(state: &mut ConsoleState, action: UserAction) -> Vec<ConsoleEffect> {
    reduce(state, ConsoleAction::User(action))
}

fn run_runtime(state: &mut ConsoleState, action: RuntimeAction) -> Vec<ConsoleEffect> {
    reduce(state, ConsoleAction::Runtime(action))
}

fn notify(state: &mut ConsoleState, message: &str, kind: NotificationKind) {
    let effects = run_runtime(
        state,
        RuntimeAction::AddNotification {
            message: message.to_string(),
            kind,
            at: chrono::Local::now(),
        },
    );
    assert!(effects.is_empty());
}

fn messages(state: &ConsoleState) -> Vec<String> {
    state
        .notifications
        .iter()
        .map(|notification| notification.message.clone())
        .collect()
}

fn type_text(state: &mut ConsoleState, text: &str) {
    for ch in text.chars() {
        run_user(state, UserAction::TerminalInput(ch));
    }
}

fn submit(state: &mut ConsoleState, command: &str) -> Vec<ConsoleEffect> {
    type_text(state, command);
    run_user(state, UserAction::TerminalSubmit)
}

fn fill_contact(state: &mut ConsoleState, values: [&str; 4]) {
    for (field, value) in [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ]
    .into_iter()
    .zip(values)
    {
        *state.contact.field_mut(field) = value.to_string();
    }
}
