use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

pub const TELEMETRY_PERIOD: Duration = Duration::from_secs(3);
pub const TELEMETRY_HISTORY_CAP: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeKind {
    Cpu,
    Memory,
    Network,
    Storage,
}

pub const GAUGE_KINDS: [GaugeKind; 4] = [
    GaugeKind::Cpu,
    GaugeKind::Memory,
    GaugeKind::Network,
    GaugeKind::Storage,
];

impl GaugeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Network => "Network",
            Self::Storage => "Storage",
        }
    }

    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Cpu => (5.0, 100.0),
            Self::Memory => (20.0, 100.0),
            Self::Network => (10.0, 100.0),
            Self::Storage => (50.0, 100.0),
        }
    }

    pub fn amplitude(self) -> f64 {
        match self {
            Self::Cpu => 10.0,
            Self::Memory => 5.0,
            Self::Network => 15.0,
            Self::Storage => 2.0,
        }
    }

    pub fn initial(self) -> f64 {
        match self {
            Self::Cpu => 20.0,
            Self::Memory => 45.0,
            Self::Network => 35.0,
            Self::Storage => 70.0,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Cpu => 0,
            Self::Memory => 1,
            Self::Network => 2,
            Self::Storage => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Nominal,
    Elevated,
    Critical,
}

impl Severity {
    pub fn of(value: f64) -> Self {
        if value < 30.0 {
            Self::Nominal
        } else if value < 70.0 {
            Self::Elevated
        } else {
            Self::Critical
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub kind: GaugeKind,
    pub value: f64,
    history: VecDeque<u64>,
}

impl Gauge {
    fn new(kind: GaugeKind) -> Self {
        let value = kind.initial();
        let mut history = VecDeque::with_capacity(TELEMETRY_HISTORY_CAP);
        history.push_back(value.round() as u64);
        Self {
            kind,
            value,
            history,
        }
    }

    /// `unit` is a draw from `[0, 1)`; values outside are clamped too.
    pub fn step(&mut self, unit: f64) {
        let (lo, hi) = self.kind.bounds();
        let next = self.value + (unit - 0.5) * self.kind.amplitude();
        self.value = next.clamp(lo, hi);
        if self.history.len() == TELEMETRY_HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(self.value.round() as u64);
    }

    pub fn percent(&self) -> u16 {
        self.value.round().clamp(0.0, 100.0) as u16
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.value)
    }

    pub fn history(&self) -> Vec<u64> {
        self.history.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample(pub [f64; 4]);

impl TelemetrySample {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self([rng.gen(), rng.gen(), rng.gen(), rng.gen()])
    }

    pub fn uniform(unit: f64) -> Self {
        Self([unit; 4])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    gauges: [Gauge; 4],
    pub ticks: u64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            gauges: GAUGE_KINDS.map(Gauge::new),
            ticks: 0,
        }
    }
}

impl Telemetry {
    pub fn apply(&mut self, sample: TelemetrySample) {
        for (gauge, unit) in self.gauges.iter_mut().zip(sample.0) {
            gauge.step(unit);
        }
        self.ticks += 1;
    }

    pub fn gauge(&self, kind: GaugeKind) -> &Gauge {
        &self.gauges[kind.index()]
    }

    pub fn gauges(&self) -> &[Gauge; 4] {
        &self.gauges
    }
}
