use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// Short falling tone played when a wheel stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chime {
    pub start_hz: f32,
    pub end_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_secs: f64,
}

pub const LANDING_CHIME: Chime = Chime {
    start_hz: 400.0,
    end_hz: 100.0,
    start_gain: 0.1,
    end_gain: 0.01,
    duration_secs: 0.1,
};

impl Chime {
    /// Exponential ramps reject zero and negative targets.
    pub fn is_playable(&self) -> bool {
        [self.start_hz, self.end_hz, self.start_gain, self.end_gain]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
            && self.duration_secs > 0.0
    }

    fn schedule(&self) -> Result<(), JsValue> {
        if !self.is_playable() {
            return Err(JsValue::from_str("chime envelope must stay above zero"));
        }
        let context = AudioContext::new()?;
        let oscillator = context.create_oscillator()?;
        let gain = context.create_gain()?;
        let now = context.current_time();
        let end = now + self.duration_secs;

        oscillator.set_type(OscillatorType::Triangle);
        oscillator.frequency().set_value_at_time(self.start_hz, now)?;
        oscillator
            .frequency()
            .exponential_ramp_to_value_at_time(self.end_hz, end)?;
        gain.gain().set_value_at_time(self.start_gain, now)?;
        gain.gain().exponential_ramp_to_value_at_time(self.end_gain, end)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;
        oscillator.start()?;
        oscillator.stop_with_when(end)?;
        Ok(())
    }
}

pub fn play() {
    if let Err(e) = LANDING_CHIME.schedule() {
        log::warn!("Could not play chime: {:?}", e);
    }
}
