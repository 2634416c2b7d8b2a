//! The face state machine.
//!
//! ```text
//! host event ──▶ WatchFace::handle ──▶ Reactions (vibe / redraw / subscribe)
//!                     │
//!                     └─ state: config, local + zulu time, battery,
//!                        connection, chrono alarm, inverter layer
//! redraw ──▶ WatchFace::render(host): paint face ─▶ inverter layer
//! ```

use effects::{inverter_layer, Capture, EffectLayer, FrameHost};
use heapless::Vec;

use crate::battery::BatteryState;
use crate::clock::{ClockTime, TimeUnits};
use crate::config::{ConfigKey, Style, WatchConfig};
use crate::connection::ConnectionState;
use crate::draw::{draw_face, DISPLAY_FRAME};
use crate::vibe::{ChronoAlarm, Vibe};

/// Inputs delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The clock advanced; `units` says which fields changed.
    Tick {
        /// Current local time.
        time: ClockTime,
        /// Changed units.
        units: TimeUnits,
    },
    /// New battery reading.
    Battery {
        /// Charge in percent.
        percent: u8,
        /// On the charger.
        charging: bool,
    },
    /// Phone connection changed.
    Bluetooth {
        /// Connected after the change.
        connected: bool,
    },
    /// One configuration message.
    Config {
        /// Raw message id.
        key: u32,
        /// Raw value.
        value: i32,
    },
}

/// How often the host should deliver ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Granularity {
    /// Every second (seconds shown).
    Second,
    /// Every minute.
    Minute,
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reaction {
    /// Play a vibration pattern.
    Vibe(Vibe),
    /// Call [`WatchFace::render`].
    Redraw,
    /// Re-subscribe to ticks at this granularity.
    Subscribe(Granularity),
}

/// Reactions to one event, in the order they should run.
pub type Reactions = Vec<Reaction, 4>;

fn reactions(items: &[Reaction]) -> Reactions {
    // Callers pass at most three items.
    Vec::from_slice(items).unwrap_or_default()
}

/// Aviator face state.
#[derive(Debug)]
pub struct WatchFace {
    config: WatchConfig,
    is_24h: bool,
    local: ClockTime,
    zulu: ClockTime,
    battery: BatteryState,
    connection: ConnectionState,
    alarm: ChronoAlarm,
    inverter: Option<EffectLayer<'static>>,
}

impl WatchFace {
    /// Face with `config`, before [`WatchFace::start`].
    #[must_use]
    pub fn new(config: WatchConfig, is_24h: bool) -> Self {
        Self {
            config,
            is_24h,
            local: ClockTime::default(),
            zulu: ClockTime::default(),
            battery: BatteryState::default(),
            connection: ConnectionState::new(),
            alarm: ChronoAlarm::new(config.vibe_minutes),
            inverter: config.invert.then(|| inverter_layer(DISPLAY_FRAME)),
        }
    }

    /// First paint: take the current time, battery and connection without
    /// alerting, then start reacting to disconnects.
    pub fn start(&mut self, now: ClockTime, percent: u8, charging: bool, connected: bool) -> Reactions {
        self.set_time(now);
        self.battery.update(percent, charging);
        self.connection.on_connection(connected, self.config.bluetooth_vibe);
        self.connection.on_started();
        info!("face started at {}:{}, 24h {}", now.hour, now.minute, self.is_24h);
        reactions(&[Reaction::Subscribe(self.granularity()), Reaction::Redraw])
    }

    /// React to one host event.
    pub fn handle(&mut self, event: Event) -> Reactions {
        match event {
            Event::Tick { time, units } => self.on_tick(time, units),
            Event::Battery { percent, charging } => {
                if self.battery.update(percent, charging) {
                    reactions(&[Reaction::Redraw])
                } else {
                    Reactions::new()
                }
            }
            Event::Bluetooth { connected } => {
                match self.connection.on_connection(connected, self.config.bluetooth_vibe) {
                    Some(vibe) => reactions(&[Reaction::Vibe(vibe)]),
                    None => Reactions::new(),
                }
            }
            Event::Config { key, value } => self.on_config(key, value),
        }
    }

    fn set_time(&mut self, time: ClockTime) {
        self.local = time;
        self.zulu = time.offset_by(self.config.timezone_offset);
    }

    fn on_tick(&mut self, time: ClockTime, units: TimeUnits) -> Reactions {
        self.set_time(time);
        let mut out = Reactions::new();
        if units.contains(TimeUnits::MINUTE) {
            if let Some(vibe) = self.alarm.on_minute() {
                out.push(Reaction::Vibe(vibe)).ok();
            }
        }
        let visible = units.contains(TimeUnits::MINUTE)
            || (self.config.seconds && units.contains(TimeUnits::SECOND));
        if visible {
            out.push(Reaction::Redraw).ok();
        }
        out
    }

    fn on_config(&mut self, key: u32, value: i32) -> Reactions {
        let key = match self.config.apply(key, value) {
            Ok(key) => key,
            Err(err) => {
                warn!("config rejected: {}", err);
                return Reactions::new();
            }
        };
        info!("config: {} = {}", key, value);
        match key {
            ConfigKey::Seconds => {
                reactions(&[Reaction::Subscribe(self.granularity()), Reaction::Redraw])
            }
            ConfigKey::Invert => {
                self.inverter = self.config.invert.then(|| inverter_layer(DISPLAY_FRAME));
                reactions(&[Reaction::Redraw])
            }
            ConfigKey::BluetoothVibe => Reactions::new(),
            ConfigKey::VibeMinutes => {
                self.alarm.set_period(self.config.vibe_minutes);
                reactions(&[Reaction::Redraw])
            }
            ConfigKey::Style | ConfigKey::TimezoneOffset => {
                self.set_time(self.local);
                reactions(&[Reaction::Redraw])
            }
            ConfigKey::Hands | ConfigKey::Background => reactions(&[Reaction::Redraw]),
        }
    }

    /// Paint the face onto `host`, then run the inverter layer over it.
    ///
    /// A host that refuses the capture skips the paint; the layer tries its
    /// own capture regardless.
    pub fn render<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        match Capture::begin(host) {
            Ok(mut capture) => match capture.frame() {
                Some(mut frame) => draw_face(self, &mut frame),
                None => warn!("face paint skipped: {}", "no frame while captured"),
            },
            Err(err) => warn!("face paint skipped: {}", err),
        }
        if let Some(layer) = self.inverter.as_mut() {
            layer.render(host);
        }
    }

    /// Current settings.
    #[must_use]
    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// `true` for a 24-hour clock.
    #[must_use]
    pub fn is_24h(&self) -> bool {
        self.is_24h
    }

    /// Last local time.
    #[must_use]
    pub fn local_time(&self) -> ClockTime {
        self.local
    }

    /// Local time shifted by the timezone offset.
    #[must_use]
    pub fn zulu_time(&self) -> ClockTime {
        self.zulu
    }

    /// Battery reading.
    #[must_use]
    pub fn battery(&self) -> &BatteryState {
        &self.battery
    }

    /// Phone connection.
    #[must_use]
    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    /// Chronograph alarm.
    #[must_use]
    pub fn alarm(&self) -> &ChronoAlarm {
        &self.alarm
    }

    /// `true` while the inverter layer is installed.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverter.is_some()
    }

    /// Tick granularity for the current seconds setting.
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        if self.config.seconds {
            Granularity::Second
        } else {
            Granularity::Minute
        }
    }

    /// `true` when the lower half shows the zulu clock instead of the date.
    #[must_use]
    pub fn shows_zulu(&self) -> bool {
        self.config.style == Style::Zulu
    }
}
