use chrono::Local;

use super::actions::ConsoleAction;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::config::DeliveryMode;
use super::contact::ContactFormError;
use super::contact::ContactMessage;
use super::contact::ContactStatus;
use super::content::FEATURED_PROJECTS;
use super::content::NETWORK_PROJECTS;
use super::content::SKILL_CATEGORIES;
use super::interpreter::interpret;
use super::interpreter::CommandOutcome;
use super::notifications::NotificationKind;
use super::state::ConsoleOverlay;
use super::state::ConsoleState;
use super::state::DashboardView;
use super::state::NetworkView;
use super::state::ProjectsListView;
use super::state::Section;
use super::state::SkillsView;
use super::state::TerminalView;
use super::terminal::TerminalEntry;

pub const COMMAND_CENTER_LOADED: &str = "Command Center interface loaded";
pub const RESOURCES_OPTIMIZED: &str = "System resources optimized";
pub const NETWORK_LOADING: &str = "Loading project network data";
pub const CONTACT_SENT: &str = "Message sent successfully";
pub const CONTACT_FAILED: &str = "Failed to send message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEffect {
    RequestFrame,
    OpenUrl(String),
    SubmitContact {
        submission_id: u64,
        message: ContactMessage,
        mode: DeliveryMode,
        recipient: String,
    },
    /// Lifecycle signals consumed by the store to arm and cancel view timers.
    Mount(Section),
    Unmount(Section),
    CommandCenterReady,
    Quit,
}

impl ConsoleEffect {
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::Mount(_) | Self::Unmount(_) | Self::CommandCenterReady
        )
    }
}

pub fn reduce(state: &mut ConsoleState, action: ConsoleAction) -> Vec<ConsoleEffect> {
    match action {
        ConsoleAction::User(user) => reduce_user(state, user),
        ConsoleAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut ConsoleState, action: UserAction) -> Vec<ConsoleEffect> {
    if !state.boot.is_online() {
        return match action {
            UserAction::Quit => vec![ConsoleEffect::Quit],
            _ => Vec::new(),
        };
    }

    match action {
        UserAction::Navigate(section) => {
            notify(
                state,
                format!("Navigated to {}", section.id()),
                NotificationKind::Info,
            );
            let mut effects = switch_section(state, section);
            effects.push(ConsoleEffect::RequestFrame);
            effects
        }
        UserAction::NextSection => {
            let next = state.navigation.active.next();
            reduce_user(state, UserAction::Navigate(next))
        }
        UserAction::PrevSection => {
            let prev = state.navigation.active.prev();
            reduce_user(state, UserAction::Navigate(prev))
        }
        UserAction::ToggleNotifications => {
            state.overlay = match state.overlay {
                ConsoleOverlay::Notifications { .. } => ConsoleOverlay::None,
                _ => ConsoleOverlay::Notifications {
                    selected: state.notifications.get(0).map(|n| n.id),
                },
            };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ToggleHelp => {
            state.overlay = match state.overlay {
                ConsoleOverlay::Help => ConsoleOverlay::None,
                _ => ConsoleOverlay::Help,
            };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::CloseOverlay => {
            state.overlay = ConsoleOverlay::None;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::OverlayMoveUp => move_overlay_cursor(state, false),
        UserAction::OverlayMoveDown => move_overlay_cursor(state, true),
        UserAction::DismissSelectedNotification => {
            let ConsoleOverlay::Notifications { selected: Some(id) } = state.overlay else {
                return Vec::new();
            };
            let Some(index) = state.notifications.position(id) else {
                return Vec::new();
            };
            state.notifications.dismiss(id);
            let next = index.min(state.notifications.len().saturating_sub(1));
            state.overlay = ConsoleOverlay::Notifications {
                selected: state.notifications.get(next).map(|n| n.id),
            };
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::DashboardMoveUp => {
            let len = DashboardView::VIEW_ALL + 1;
            state.dashboard.cursor = (state.dashboard.cursor + len - 1) % len;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::DashboardMoveDown => {
            let len = DashboardView::VIEW_ALL + 1;
            state.dashboard.cursor = (state.dashboard.cursor + 1) % len;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::DashboardActivate => {
            if state.dashboard.on_view_all() {
                let mut effects = switch_section(state, Section::Projects);
                effects.push(ConsoleEffect::RequestFrame);
                return effects;
            }
            let Some(project) = FEATURED_PROJECTS.get(state.dashboard.cursor).copied() else {
                return Vec::new();
            };
            open_featured(state, project.name, project.live_url())
        }
        UserAction::SkillsNextCategory => {
            let next = (state.skills.category + 1) % SKILL_CATEGORIES.len();
            reduce_user(state, UserAction::SelectCategory(next))
        }
        UserAction::SkillsPrevCategory => {
            let len = SKILL_CATEGORIES.len();
            let prev = (state.skills.category + len - 1) % len;
            reduce_user(state, UserAction::SelectCategory(prev))
        }
        UserAction::SelectCategory(index) => {
            let Some(category) = SKILL_CATEGORIES.get(index).copied() else {
                return Vec::new();
            };
            let changed = state.skills.category != index;
            state.skills = SkillsView {
                category: index,
                cursor: 0,
                selected: None,
            };
            notify(
                state,
                format!("Selected category: {}", category.name),
                NotificationKind::Info,
            );
            if changed {
                notify(
                    state,
                    format!("Loading {} skill data", category.name),
                    NotificationKind::Info,
                );
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::SkillsMoveUp => {
            let len = current_skill_count(state);
            if len > 0 {
                state.skills.cursor = (state.skills.cursor + len - 1) % len;
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::SkillsMoveDown => {
            let len = current_skill_count(state);
            if len > 0 {
                state.skills.cursor = (state.skills.cursor + 1) % len;
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::SelectSkill => {
            let SkillsView {
                category, cursor, ..
            } = state.skills;
            let Some(skill) = SKILL_CATEGORIES
                .get(category)
                .and_then(|category| category.skills.get(cursor).copied())
            else {
                return Vec::new();
            };
            state.skills.selected = Some((category, cursor));
            notify(
                state,
                format!("Selected skill: {}", skill.name),
                NotificationKind::Info,
            );
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ClearSkillSelection => {
            state.skills.selected = None;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::NetworkSelectNext => {
            let len = NETWORK_PROJECTS.len();
            let next = state
                .network
                .selected
                .map(|index| (index + 1) % len)
                .unwrap_or(0);
            select_network_project(state, next, false);
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::NetworkSelectPrev => {
            let len = NETWORK_PROJECTS.len();
            let prev = state
                .network
                .selected
                .map(|index| (index + len - 1) % len)
                .unwrap_or(len - 1);
            select_network_project(state, prev, false);
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::NetworkClearSelection => {
            state.network.selected = None;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ProjectsMoveUp => {
            let len = FEATURED_PROJECTS.len();
            state.projects_list.cursor = (state.projects_list.cursor + len - 1) % len;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ProjectsMoveDown => {
            let len = FEATURED_PROJECTS.len();
            state.projects_list.cursor = (state.projects_list.cursor + 1) % len;
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::OpenLiveDemo => {
            let Some(project) = state
                .featured_under_cursor()
                .and_then(|index| FEATURED_PROJECTS.get(index).copied())
            else {
                return Vec::new();
            };
            open_featured(state, project.name, project.live_url())
        }
        UserAction::ViewProjectDetails => {
            let Some(index) = state.featured_under_cursor() else {
                return Vec::new();
            };
            if state.projects_list.details == Some(index) {
                state.projects_list.details = None;
            } else {
                state.projects_list.details = Some(index);
                notify(
                    state,
                    format!("Viewing {} details", FEATURED_PROJECTS[index].name),
                    NotificationKind::Info,
                );
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::TerminalInput(ch) => {
            state.terminal.input.push(ch);
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::TerminalBackspace => {
            state.terminal.input.pop();
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::TerminalPaste(text) => {
            state
                .terminal
                .input
                .extend(text.chars().filter(|ch| !matches!(ch, '\n' | '\r')));
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::TerminalSubmit => {
            if state.terminal.input.trim().is_empty() {
                return Vec::new();
            }
            let input = std::mem::take(&mut state.terminal.input);
            let mut effects = submit_command(state, input);
            effects.push(ConsoleEffect::RequestFrame);
            effects
        }
        UserAction::TerminalScrollUp => {
            let max = state.transcript.len().saturating_sub(1);
            state.terminal.scroll_back = (state.terminal.scroll_back + 1).min(max);
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::TerminalScrollDown => {
            state.terminal.scroll_back = state.terminal.scroll_back.saturating_sub(1);
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactInput(ch) => {
            let focus = state.contact.focus;
            state.contact.field_mut(focus).push(ch);
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactBackspace => {
            let focus = state.contact.focus;
            state.contact.field_mut(focus).pop();
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactNewline => {
            let focus = state.contact.focus;
            if focus.multiline() {
                state.contact.field_mut(focus).push('\n');
            } else {
                state.contact.focus = focus.next();
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactPaste(text) => {
            let focus = state.contact.focus;
            let field = state.contact.field_mut(focus);
            if focus.multiline() {
                field.push_str(&text.replace("\r\n", "\n"));
            } else {
                field.extend(text.chars().filter(|ch| !matches!(ch, '\n' | '\r')));
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactFocusNext => {
            state.contact.focus = state.contact.focus.next();
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactFocusPrev => {
            state.contact.focus = state.contact.focus.prev();
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::ContactSubmit => match state.contact.validate() {
            Ok(message) => {
                let submission_id = state.contact.begin_submission();
                vec![
                    ConsoleEffect::SubmitContact {
                        submission_id,
                        message,
                        mode: state.delivery,
                        recipient: state.contact_recipient.clone(),
                    },
                    ConsoleEffect::RequestFrame,
                ]
            }
            Err(ContactFormError::InFlight) => Vec::new(),
            Err(ContactFormError::MissingField(field)) => {
                state.contact.focus = field;
                state.contact.status = ContactStatus::Failed {
                    reason: ContactFormError::MissingField(field).to_string(),
                };
                vec![ConsoleEffect::RequestFrame]
            }
        },
        UserAction::DismissContactStatus => {
            if matches!(
                state.contact.status,
                ContactStatus::Sent | ContactStatus::Failed { .. }
            ) {
                state.contact.status = ContactStatus::Idle;
            }
            vec![ConsoleEffect::RequestFrame]
        }
        UserAction::Quit => vec![ConsoleEffect::Quit],
    }
}

fn reduce_runtime(state: &mut ConsoleState, action: RuntimeAction) -> Vec<ConsoleEffect> {
    match action {
        RuntimeAction::SetActiveSection(id) => match Section::parse(&id) {
            Some(section) => switch_section(state, section),
            None => Vec::new(),
        },
        RuntimeAction::AddNotification { message, kind, at } => {
            state.notifications.push(message, kind, at);
            repair_overlay_selection(state);
            Vec::new()
        }
        RuntimeAction::DismissNotification(id) => {
            if state.notifications.dismiss(id) {
                repair_overlay_selection(state);
            }
            Vec::new()
        }
        RuntimeAction::AddTerminalEntry(entry) => {
            state.transcript.push(entry);
            Vec::new()
        }
        RuntimeAction::ClearTerminal => {
            state.transcript.clear();
            state.terminal.scroll_back = 0;
            Vec::new()
        }
        RuntimeAction::RunCommand(input) => {
            if input.trim().is_empty() {
                return Vec::new();
            }
            submit_command(state, input)
        }
        RuntimeAction::SampleTelemetry(sample) => {
            state.telemetry.apply(sample);
            Vec::new()
        }
        RuntimeAction::AdvanceBootMessage => {
            state.boot.advance_message();
            Vec::new()
        }
        RuntimeAction::AdvanceBootProgress => {
            state.boot.advance_progress();
            Vec::new()
        }
        RuntimeAction::CompleteBoot => {
            state.boot.phase = super::boot::BootPhase::Online;
            notify(state, COMMAND_CENTER_LOADED, NotificationKind::Info);
            let mut effects = vec![ConsoleEffect::CommandCenterReady];
            let active = state.navigation.active;
            effects.extend(mount_section(state, active));
            effects
        }
        RuntimeAction::SetClock(now) => {
            state.header.clock = now;
            Vec::new()
        }
        RuntimeAction::DashboardNotice => {
            if state.navigation.active == Section::Dashboard {
                notify(state, RESOURCES_OPTIMIZED, NotificationKind::Success);
            }
            Vec::new()
        }
        RuntimeAction::NetworkAutoSelect(index) => {
            if state.navigation.active == Section::Projects
                && state.network.selected.is_none()
                && index < NETWORK_PROJECTS.len()
            {
                select_network_project(state, index, true);
            }
            Vec::new()
        }
        RuntimeAction::ContactResolved {
            submission_id,
            outcome,
        } => {
            if state.contact.in_flight_id() != Some(submission_id) {
                return Vec::new();
            }
            match outcome {
                Ok(()) => {
                    state.contact.clear_fields();
                    state.contact.status = ContactStatus::Sent;
                    notify(state, CONTACT_SENT, NotificationKind::Success);
                }
                Err(reason) => {
                    state.contact.status = ContactStatus::Failed { reason };
                    notify(state, CONTACT_FAILED, NotificationKind::Error);
                }
            }
            Vec::new()
        }
    }
}

fn notify(state: &mut ConsoleState, message: impl Into<String>, kind: NotificationKind) {
    state.notifications.push(message, kind, Local::now());
    repair_overlay_selection(state);
}

fn move_overlay_cursor(state: &mut ConsoleState, forward: bool) -> Vec<ConsoleEffect> {
    if !matches!(state.overlay, ConsoleOverlay::Notifications { .. }) {
        return Vec::new();
    }
    let len = state.notifications.len();
    let next = match state.selected_notification_index() {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None => 0,
    };
    state.overlay = ConsoleOverlay::Notifications {
        selected: state.notifications.get(next).map(|n| n.id),
    };
    vec![ConsoleEffect::RequestFrame]
}

/// Re-points the panel cursor at the newest entry once its entry is gone.
fn repair_overlay_selection(state: &mut ConsoleState) {
    let ConsoleOverlay::Notifications { selected } = state.overlay else {
        return;
    };
    if selected.and_then(|id| state.notifications.position(id)).is_none() {
        state.overlay = ConsoleOverlay::Notifications {
            selected: state.notifications.get(0).map(|n| n.id),
        };
    }
}

fn current_skill_count(state: &ConsoleState) -> usize {
    SKILL_CATEGORIES
        .get(state.skills.category)
        .map(|category| category.skills.len())
        .unwrap_or(0)
}

fn select_network_project(state: &mut ConsoleState, index: usize, automatic: bool) {
    let Some(project) = NETWORK_PROJECTS.get(index).copied() else {
        return;
    };
    state.network.selected = Some(index);
    state.network.auto_selected = automatic;
    notify(
        state,
        format!("Selected project: {}", project.name),
        NotificationKind::Info,
    );
}

fn open_featured(state: &mut ConsoleState, name: &str, url: String) -> Vec<ConsoleEffect> {
    notify(state, format!("Opening {name}"), NotificationKind::Info);
    vec![ConsoleEffect::OpenUrl(url), ConsoleEffect::RequestFrame]
}

fn submit_command(state: &mut ConsoleState, input: String) -> Vec<ConsoleEffect> {
    let outcome = interpret(&input, &state.profile);
    state.transcript.push(TerminalEntry::input(input));
    state.terminal.scroll_back = 0;

    match outcome {
        CommandOutcome::Entry(entry) => {
            state.transcript.push(entry);
            Vec::new()
        }
        CommandOutcome::Clear => {
            state.transcript.clear();
            Vec::new()
        }
        CommandOutcome::OpenExternal { entry, url } => {
            state.transcript.push(entry);
            vec![ConsoleEffect::OpenUrl(url)]
        }
    }
}

fn switch_section(state: &mut ConsoleState, target: Section) -> Vec<ConsoleEffect> {
    let current = state.navigation.active;
    if current == target {
        return Vec::new();
    }
    let mut effects = unmount_section(state, current);
    state.navigation.active = target;
    effects.extend(mount_section(state, target));
    effects
}

fn mount_section(state: &mut ConsoleState, section: Section) -> Vec<ConsoleEffect> {
    if section == Section::Projects {
        notify(state, NETWORK_LOADING, NotificationKind::Info);
    }
    vec![ConsoleEffect::Mount(section)]
}

/// Leaving a view drops its local state.
fn unmount_section(state: &mut ConsoleState, section: Section) -> Vec<ConsoleEffect> {
    match section {
        Section::Dashboard => state.dashboard = DashboardView::default(),
        Section::Skills => state.skills = SkillsView::default(),
        Section::Projects => state.network = NetworkView::default(),
        Section::ProjectsList => state.projects_list = ProjectsListView::default(),
        Section::Terminal => state.terminal = TerminalView::default(),
        Section::Contact => state.contact.abandon(),
    }
    vec![ConsoleEffect::Unmount(section)]
}

#[cfg(test)]
mod tests;
