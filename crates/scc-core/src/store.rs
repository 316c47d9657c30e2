use std::time::Duration;
use std::time::Instant;

use chrono::Local;
use log::debug;
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::actions::ConsoleAction;
use super::actions::RuntimeAction;
use super::boot::BOOT_DEADLINE;
use super::boot::BOOT_MESSAGE_PERIOD;
use super::boot::BOOT_PROGRESS_PERIOD;
use super::content::NETWORK_PROJECTS;
use super::notifications::NotificationId;
use super::notifications::NotificationKind;
use super::reducer::reduce;
use super::reducer::ConsoleEffect;
use super::schedule::Schedule;
use super::schedule::TimerId;
use super::state::ConsoleState;
use super::state::Section;
use super::telemetry::TelemetrySample;
use super::telemetry::TELEMETRY_PERIOD;
use super::terminal::TerminalEntry;

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);
pub const DASHBOARD_NOTICE_DELAY: Duration = Duration::from_secs(5);
pub const NETWORK_AUTO_SELECT_DELAY: Duration = Duration::from_millis(1500);

pub struct ConsoleStore {
    state: ConsoleState,
    schedule: Schedule,
    rng: StdRng,
    now: Instant,
    disposed: bool,
}

impl ConsoleStore {
    /// `seed` pins the random source; `None` seeds from the OS.
    pub fn new(state: ConsoleState, seed: Option<u64>, now: Instant) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut store = Self {
            state,
            schedule: Schedule::default(),
            rng,
            now,
            disposed: false,
        };

        store
            .schedule
            .every_latest(TimerId::Telemetry, TELEMETRY_PERIOD, now);
        if store.state.boot.is_online() {
            store.apply(RuntimeAction::CompleteBoot);
        } else {
            store.schedule.every(TimerId::BootMessage, BOOT_MESSAGE_PERIOD, now);
            store.schedule.every(TimerId::BootProgress, BOOT_PROGRESS_PERIOD, now);
            store.schedule.once(TimerId::BootDeadline, BOOT_DEADLINE, now);
        }
        info!(
            "event=store_created seeded={} booting={}",
            seed.is_some(),
            !store.state.boot.is_online()
        );
        store
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_timer_armed(&self, id: TimerId) -> bool {
        self.schedule.is_armed(id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_deadline()
    }

    pub fn dispatch(&mut self, action: ConsoleAction) -> Vec<ConsoleEffect> {
        if self.disposed {
            debug!("event=dispatch_after_dispose action={action:?}");
            return Vec::new();
        }
        let effects = reduce(&mut self.state, action);
        self.absorb(effects)
    }

    pub fn set_active_section(&mut self, id: &str) -> Vec<ConsoleEffect> {
        if Section::parse(id).is_none() {
            debug!("event=unknown_section id={id}");
        }
        self.apply(RuntimeAction::SetActiveSection(id.to_string()))
    }

    pub fn add_notification(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.apply(RuntimeAction::AddNotification {
            message: message.into(),
            kind,
            at: Local::now(),
        });
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) {
        self.apply(RuntimeAction::DismissNotification(id));
    }

    pub fn add_terminal_entry(&mut self, entry: TerminalEntry) {
        self.apply(RuntimeAction::AddTerminalEntry(entry));
    }

    pub fn clear_terminal(&mut self) {
        self.apply(RuntimeAction::ClearTerminal);
    }

    pub fn run_command(&mut self, input: &str) -> Vec<ConsoleEffect> {
        self.apply(RuntimeAction::RunCommand(input.to_string()))
    }

    pub fn resolve_contact(&mut self, submission_id: u64, outcome: Result<(), String>) {
        if self.disposed {
            debug!("event=contact_result_dropped submission_id={submission_id} reason=disposed");
            return;
        }
        if self.state.contact.in_flight_id() != Some(submission_id) {
            info!("event=contact_result_dropped submission_id={submission_id} reason=stale");
            return;
        }
        match &outcome {
            Ok(()) => info!("event=contact_resolved submission_id={submission_id} ok=true"),
            Err(reason) => {
                info!("event=contact_resolved submission_id={submission_id} ok=false reason={reason}")
            }
        }
        self.apply(RuntimeAction::ContactResolved {
            submission_id,
            outcome,
        });
    }

    pub fn advance(&mut self, now: Instant) -> Vec<ConsoleEffect> {
        if self.disposed {
            return Vec::new();
        }
        self.now = now;

        let mut effects = Vec::new();
        for id in self.schedule.take_due(now) {
            let action = match id {
                TimerId::Telemetry => {
                    RuntimeAction::SampleTelemetry(TelemetrySample::draw(&mut self.rng))
                }
                TimerId::BootMessage => RuntimeAction::AdvanceBootMessage,
                TimerId::BootProgress => RuntimeAction::AdvanceBootProgress,
                TimerId::BootDeadline => RuntimeAction::CompleteBoot,
                TimerId::Clock => RuntimeAction::SetClock(Local::now()),
                TimerId::DashboardNotice => RuntimeAction::DashboardNotice,
                TimerId::NetworkAutoSelect => {
                    RuntimeAction::NetworkAutoSelect(self.rng.gen_range(0..NETWORK_PROJECTS.len()))
                }
            };
            effects.extend(self.apply(action));
        }

        if self.state.boot.messages_done() {
            self.schedule.cancel(TimerId::BootMessage);
        }
        if self.state.boot.progress_done() {
            self.schedule.cancel(TimerId::BootProgress);
        }
        effects
    }

    /// Cancels every owned timer. Results that arrive afterwards are dropped.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.schedule.cancel_all();
        self.disposed = true;
        info!(
            "event=store_disposed telemetry_ticks={} transcript_len={}",
            self.state.telemetry.ticks,
            self.state.transcript.len()
        );
    }

    fn apply(&mut self, action: RuntimeAction) -> Vec<ConsoleEffect> {
        self.dispatch(ConsoleAction::Runtime(action))
    }

    fn absorb(&mut self, effects: Vec<ConsoleEffect>) -> Vec<ConsoleEffect> {
        let mut rest = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                ConsoleEffect::CommandCenterReady => {
                    self.schedule.cancel(TimerId::BootMessage);
                    self.schedule.cancel(TimerId::BootProgress);
                    self.schedule.cancel(TimerId::BootDeadline);
                    self.schedule
                        .every_latest(TimerId::Clock, CLOCK_PERIOD, self.now);
                    info!("event=command_center_ready");
                }
                ConsoleEffect::Mount(section) => {
                    match section {
                        Section::Dashboard => self.schedule.once(
                            TimerId::DashboardNotice,
                            DASHBOARD_NOTICE_DELAY,
                            self.now,
                        ),
                        Section::Projects => self.schedule.once(
                            TimerId::NetworkAutoSelect,
                            NETWORK_AUTO_SELECT_DELAY,
                            self.now,
                        ),
                        _ => {}
                    }
                    info!("event=view_mounted section={}", section.id());
                }
                ConsoleEffect::Unmount(section) => {
                    match section {
                        Section::Dashboard => self.schedule.cancel(TimerId::DashboardNotice),
                        Section::Projects => self.schedule.cancel(TimerId::NetworkAutoSelect),
                        _ => {}
                    }
                    debug!("event=view_unmounted section={}", section.id());
                }
                other => rest.push(other),
            }
        }
        rest
    }
}
