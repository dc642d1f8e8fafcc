// Playback console state: which mix is on the bench, whether it is
// transmitting, and where the position cursor sits.

/// One archived mix as catalogued by the vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mix {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub runtime: &'static str,
}

pub const ARCHIVE_MIXES: [Mix; 4] = [
    Mix {
        id: 1,
        title: "REPLICANT DREAMS",
        artist: "DJ DIEHARD",
        runtime: "72:34",
    },
    Mix {
        id: 2,
        title: "NEON PULSE",
        artist: "4D + DR NO1",
        runtime: "58:16",
    },
    Mix {
        id: 3,
        title: "BASELINE TEST",
        artist: "MSL B2B STATELESS",
        runtime: "81:42",
    },
    Mix {
        id: 4,
        title: "DUB EXPLORATION",
        artist: "YETI",
        runtime: "60:00",
    },
];

/// Parse a catalogue runtime (`"MM:SS"`, minutes unbounded) into seconds.
pub fn parse_runtime(runtime: &str) -> Option<f64> {
    let (m, s) = runtime.split_once(':')?;
    let minutes: u64 = m.parse().ok()?;
    let seconds: u64 = s.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some((minutes * 60 + seconds) as f64)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleStatus {
    Loading,
    Standby,
    Transmitting,
}

impl ConsoleStatus {
    /// Status readout text, exactly as the console displays it.
    pub fn label(self) -> &'static str {
        match self {
            ConsoleStatus::Loading => "LOADING...",
            ConsoleStatus::Standby => "STANDBY",
            ConsoleStatus::Transmitting => "TRANSMITTING",
        }
    }
}

pub struct ConsoleState {
    status: ConsoleStatus,
    position_sec: f64,
    duration_sec: f64,
    volume: f32,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            status: ConsoleStatus::Loading,
            position_sec: 0.0,
            duration_sec: 0.0,
            volume: 0.7,
        }
    }

    pub fn status(&self) -> ConsoleStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == ConsoleStatus::Transmitting
    }

    pub fn position_sec(&self) -> f64 {
        self.position_sec
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn volume_percent(&self) -> u32 {
        (self.volume * 100.0).round() as u32
    }

    /// The source reported its duration; leaves `Loading`.
    pub fn loaded(&mut self, duration_sec: f64) {
        self.duration_sec = duration_sec.max(0.0);
        if self.status == ConsoleStatus::Loading {
            self.status = ConsoleStatus::Standby;
        }
    }

    /// Play/pause. A no-op while the source is still loading.
    pub fn toggle_play(&mut self) {
        self.status = match self.status {
            ConsoleStatus::Loading => ConsoleStatus::Loading,
            ConsoleStatus::Standby => ConsoleStatus::Transmitting,
            ConsoleStatus::Transmitting => ConsoleStatus::Standby,
        };
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_position(&mut self, position_sec: f64) {
        self.position_sec = position_sec.clamp(0.0, self.duration_sec);
    }

    /// Advance the position cursor while transmitting. Reaching the end of
    /// the mix drops back to standby with the cursor parked at the end.
    pub fn tick(&mut self, dt_sec: f64) {
        if self.status != ConsoleStatus::Transmitting {
            return;
        }
        self.position_sec = (self.position_sec + dt_sec.max(0.0)).min(self.duration_sec);
        if self.position_sec >= self.duration_sec {
            self.status = ConsoleStatus::Standby;
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}
