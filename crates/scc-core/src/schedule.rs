use std::time::Duration;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    Telemetry,
    BootMessage,
    BootProgress,
    BootDeadline,
    Clock,
    DashboardNotice,
    NetworkAutoSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    Every(Duration),
    Latest(Duration),
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    deadline: Instant,
    repeat: Repeat,
}

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    timers: Vec<Timer>,
}

impl Schedule {
    /// Arms (or re-arms) a repeating timer whose first firing is one period out.
    pub fn every(&mut self, id: TimerId, period: Duration, now: Instant) {
        self.arm(Timer {
            id,
            deadline: now + period,
            repeat: Repeat::Every(period),
        });
    }

    /// Like [`Schedule::every`], but a late poll fires once and skips the
    /// periods it missed.
    pub fn every_latest(&mut self, id: TimerId, period: Duration, now: Instant) {
        self.arm(Timer {
            id,
            deadline: now + period,
            repeat: Repeat::Latest(period),
        });
    }

    pub fn once(&mut self, id: TimerId, delay: Duration, now: Instant) {
        self.arm(Timer {
            id,
            deadline: now + delay,
            repeat: Repeat::Once,
        });
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|timer| timer.id != id);
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|timer| timer.deadline).min()
    }

    /// Returns the timers due at `now` in deadline order. `every` timers
    /// report each elapsed period; one-shots are disarmed.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired: Vec<(Instant, TimerId)> = Vec::new();
        self.timers.retain_mut(|timer| {
            while timer.deadline <= now {
                fired.push((timer.deadline, timer.id));
                match timer.repeat {
                    Repeat::Once => return false,
                    Repeat::Every(period) => timer.deadline += period,
                    Repeat::Latest(period) => {
                        let behind = now.duration_since(timer.deadline).as_nanos();
                        let steps = behind / period.as_nanos().max(1) + 1;
                        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
                        timer.deadline += period.saturating_mul(steps);
                        return true;
                    }
                }
            }
            true
        });
        fired.sort_by_key(|(deadline, _)| *deadline);
        fired.into_iter().map(|(_, id)| id).collect()
    }

    fn arm(&mut self, timer: Timer) {
        self.cancel(timer.id);
        self.timers.push(timer);
    }
}
