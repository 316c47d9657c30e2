use chrono::DateTime;
use chrono::Local;

use super::notifications::NotificationId;
use super::notifications::NotificationKind;
use super::state::Section;
use super::telemetry::TelemetrySample;
use super::terminal::TerminalEntry;

#[derive(Debug, Clone)]
pub enum ConsoleAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    /// Sidebar navigation: switches section and posts a notice.
    Navigate(Section),
    NextSection,
    PrevSection,

    ToggleNotifications,
    ToggleHelp,
    CloseOverlay,
    OverlayMoveUp,
    OverlayMoveDown,
    DismissSelectedNotification,

    DashboardMoveUp,
    DashboardMoveDown,
    DashboardActivate,

    SkillsNextCategory,
    SkillsPrevCategory,
    SelectCategory(usize),
    SkillsMoveUp,
    SkillsMoveDown,
    SelectSkill,
    ClearSkillSelection,

    NetworkSelectNext,
    NetworkSelectPrev,
    NetworkClearSelection,

    ProjectsMoveUp,
    ProjectsMoveDown,
    OpenLiveDemo,
    ViewProjectDetails,

    TerminalInput(char),
    TerminalBackspace,
    TerminalPaste(String),
    TerminalSubmit,
    TerminalScrollUp,
    TerminalScrollDown,

    ContactInput(char),
    ContactBackspace,
    ContactNewline,
    ContactPaste(String),
    ContactFocusNext,
    ContactFocusPrev,
    ContactSubmit,
    DismissContactStatus,

    Quit,
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    /// Programmatic switch by identifier; unknown identifiers are ignored.
    SetActiveSection(String),
    AddNotification {
        message: String,
        kind: NotificationKind,
        at: DateTime<Local>,
    },
    DismissNotification(NotificationId),
    AddTerminalEntry(TerminalEntry),
    ClearTerminal,
    RunCommand(String),
    SampleTelemetry(TelemetrySample),
    AdvanceBootMessage,
    AdvanceBootProgress,
    CompleteBoot,
    SetClock(DateTime<Local>),
    DashboardNotice,
    NetworkAutoSelect(usize),
    ContactResolved {
        submission_id: u64,
        outcome: Result<(), String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: &'static str,
    pub description: &'static str,
}

pub const KEY_HINTS: [KeyHint; 10] = [
    KeyHint {
        keys: "Tab / Shift-Tab",
        description: "Next / previous section",
    },
    KeyHint {
        keys: "1-6",
        description: "Jump to a section",
    },
    KeyHint {
        keys: "Up / Down",
        description: "Move the cursor in the active view",
    },
    KeyHint {
        keys: "Left / Right",
        description: "Switch skill category or network node",
    },
    KeyHint {
        keys: "Enter",
        description: "Open, select or submit",
    },
    KeyHint {
        keys: "d",
        description: "Project details (projects list)",
    },
    KeyHint {
        keys: "n",
        description: "Toggle the notifications panel",
    },
    KeyHint {
        keys: "x",
        description: "Dismiss the selected notification",
    },
    KeyHint {
        keys: "?",
        description: "Toggle this help",
    },
    KeyHint {
        keys: "Esc / q / Ctrl-C",
        description: "Close overlay / quit",
    },
];
