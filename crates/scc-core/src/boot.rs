use std::time::Duration;

pub const BOOT_MESSAGES: [&str; 12] = [
    "Initializing system kernel...",
    "Loading system modules...",
    "Mounting virtual file systems...",
    "Starting network services...",
    "Initializing database connections...",
    "Loading API endpoints...",
    "Starting authentication services...",
    "Configuring security protocols...",
    "Initializing real-time event system...",
    "Loading developer profile...",
    "Preparing command center interface...",
    "System boot sequence complete.",
];

pub const BOOT_MESSAGE_PERIOD: Duration = Duration::from_millis(300);
pub const BOOT_PROGRESS_PERIOD: Duration = Duration::from_millis(300);
pub const BOOT_PROGRESS_STEP: u8 = 10;
/// The switch to the command center ignores how far the message list got.
pub const BOOT_DEADLINE: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Booting,
    Online,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSequence {
    pub phase: BootPhase,
    next_message: usize,
    progress: u8,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self {
            phase: BootPhase::Booting,
            next_message: 0,
            progress: 0,
        }
    }
}

impl BootSequence {
    pub fn online() -> Self {
        Self {
            phase: BootPhase::Online,
            next_message: BOOT_MESSAGES.len(),
            progress: 100,
        }
    }

    /// Reveals the next message. Returns `false` once every message is shown.
    pub fn advance_message(&mut self) -> bool {
        if self.next_message >= BOOT_MESSAGES.len() {
            return false;
        }
        self.next_message += 1;
        true
    }

    pub fn advance_progress(&mut self) {
        self.progress = self.progress.saturating_add(BOOT_PROGRESS_STEP).min(100);
    }

    pub fn visible_messages(&self) -> &'static [&'static str] {
        &BOOT_MESSAGES[..self.next_message]
    }

    pub fn messages_done(&self) -> bool {
        self.next_message >= BOOT_MESSAGES.len()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn progress_done(&self) -> bool {
        self.progress >= 100
    }

    pub fn is_online(&self) -> bool {
        self.phase == BootPhase::Online
    }
}
