use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;

use super::boot::BootSequence;
use super::config::Config;
use super::config::DeliveryMode;
use super::contact::ContactForm;
use super::content::Profile;
use super::content::FEATURED_PROJECTS;
use super::content::NETWORK_PROJECTS;
use super::content::SKILL_CATEGORIES;
use super::notifications::NotificationId;
use super::notifications::NotificationKind;
use super::notifications::NotificationQueue;
use super::telemetry::Telemetry;
use super::terminal::Transcript;

pub const WELCOME_MESSAGE: &str = "Welcome to the Server Control Center";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Skills,
    Projects,
    ProjectsList,
    Terminal,
    Contact,
}

pub const SECTIONS: [Section; 6] = [
    Section::Dashboard,
    Section::Skills,
    Section::Projects,
    Section::ProjectsList,
    Section::Terminal,
    Section::Contact,
];

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::ProjectsList => "projects-list",
            Self::Terminal => "terminal",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Skills => "Skills Matrix",
            Self::Projects => "Projects Network",
            Self::ProjectsList => "Projects List",
            Self::Terminal => "Terminal",
            Self::Contact => "Contact",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        SECTIONS.into_iter().find(|section| section.id() == id)
    }

    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Skills,
            Self::Skills => Self::Projects,
            Self::Projects => Self::ProjectsList,
            Self::ProjectsList => Self::Terminal,
            Self::Terminal => Self::Contact,
            Self::Contact => Self::Dashboard,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Dashboard => Self::Contact,
            Self::Skills => Self::Dashboard,
            Self::Projects => Self::Skills,
            Self::ProjectsList => Self::Projects,
            Self::Terminal => Self::ProjectsList,
            Self::Contact => Self::Terminal,
        }
    }

    /// Views that read keyboard input as text instead of shortcuts.
    pub fn captures_text(self) -> bool {
        matches!(self, Self::Terminal | Self::Contact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub cursor: usize,
}

impl DashboardView {
    pub const VIEW_ALL: usize = FEATURED_PROJECTS.len();

    pub fn on_view_all(&self) -> bool {
        self.cursor == Self::VIEW_ALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillsView {
    pub category: usize,
    pub cursor: usize,
    pub selected: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkView {
    pub selected: Option<usize>,
    pub auto_selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectsListView {
    pub cursor: usize,
    pub details: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalView {
    pub input: String,
    pub scroll_back: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOverlay {
    None,
    /// The cursor follows an entry, not a row, so new posts never shift it.
    Notifications { selected: Option<NotificationId> },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleHeader {
    pub clock: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub navigation: NavigationState,
    pub boot: BootSequence,
    pub header: ConsoleHeader,
    pub telemetry: Telemetry,
    pub notifications: NotificationQueue,
    pub transcript: Transcript,
    pub overlay: ConsoleOverlay,
    pub dashboard: DashboardView,
    pub skills: SkillsView,
    pub network: NetworkView,
    pub projects_list: ProjectsListView,
    pub terminal: TerminalView,
    pub contact: ContactForm,
    pub profile: Profile,
    pub delivery: DeliveryMode,
    pub contact_recipient: String,
}

impl ConsoleState {
    pub fn new(config: &Config) -> Self {
        let mut notifications = NotificationQueue::default();
        notifications.push(WELCOME_MESSAGE, NotificationKind::Info, welcome_timestamp());

        Self {
            navigation: NavigationState::default(),
            boot: if config.boot.skip {
                BootSequence::online()
            } else {
                BootSequence::default()
            },
            header: ConsoleHeader {
                clock: Local::now(),
            },
            telemetry: Telemetry::default(),
            notifications,
            transcript: Transcript::default(),
            overlay: ConsoleOverlay::None,
            dashboard: DashboardView::default(),
            skills: SkillsView::default(),
            network: NetworkView::default(),
            projects_list: ProjectsListView::default(),
            terminal: TerminalView::default(),
            contact: ContactForm::default(),
            profile: config.profile.clone(),
            delivery: config.contact.delivery,
            contact_recipient: config.contact_recipient(),
        }
    }

    pub fn active_section(&self) -> Section {
        self.navigation.active
    }

    pub fn selected_notification_index(&self) -> Option<usize> {
        match self.overlay {
            ConsoleOverlay::Notifications { selected: Some(id) } => self.notifications.position(id),
            _ => None,
        }
    }

    pub fn selected_category_name(&self) -> &'static str {
        SKILL_CATEGORIES
            .get(self.skills.category)
            .map(|category| category.name)
            .unwrap_or_default()
    }

    pub fn selected_network_name(&self) -> Option<&'static str> {
        self.network
            .selected
            .and_then(|index| NETWORK_PROJECTS.get(index))
            .map(|project| project.name)
    }

    pub fn featured_under_cursor(&self) -> Option<usize> {
        (self.projects_list.cursor < FEATURED_PROJECTS.len()).then_some(self.projects_list.cursor)
    }

    pub fn text_input_focused(&self) -> bool {
        self.boot.is_online()
            && self.overlay == ConsoleOverlay::None
            && self.navigation.active.captures_text()
    }
}

/// Fixed stamp for the seeded welcome entry so the first frame is stable.
fn welcome_timestamp() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .earliest()
        .unwrap_or_else(Local::now)
}
