use super::constants::{
    TONE_DURATION_SEC, TONE_END_GAIN, TONE_END_HZ, TONE_START_GAIN, TONE_START_HZ,
};
use super::error::ViewerResult;

/// Envelope of a synthesized sine blip. Frequency and gain both ramp
/// exponentially from their start to end values over `duration_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f64,
}

impl ToneSpec {
    pub const UI_CLICK: ToneSpec = ToneSpec {
        start_hz: TONE_START_HZ,
        end_hz: TONE_END_HZ,
        start_gain: TONE_START_GAIN,
        end_gain: TONE_END_GAIN,
        duration_sec: TONE_DURATION_SEC,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Started,
    /// A sample was already in flight.
    Dropped,
    /// Sound is globally disabled.
    Muted,
    /// No sample loaded.
    Unavailable,
    /// The sample could not start; the UI tone played instead.
    FellBack,
}

/// Port onto the browser's media element and audio graph.
pub trait SoundOut {
    fn sample_available(&self) -> bool;
    /// Stop the sample and seek to its start.
    fn rewind_sample(&mut self);
    /// Begin playback. An `Err` is an immediate failure; asynchronous
    /// rejections arrive later through [`AudioFeedback::sample_rejected`].
    fn play_sample(&mut self) -> ViewerResult<()>;
    fn pause_sample(&mut self);
    /// Build and fire a one-shot oscillator. Nothing is reused between calls.
    fn play_tone(&mut self, tone: &ToneSpec) -> ViewerResult<()>;
}

/// Primary-sample gate plus the fire-and-forget UI tone.
///
/// At most one sample plays at a time; extra requests are dropped, not queued.
#[derive(Debug, Default)]
pub struct AudioFeedback {
    sample_in_flight: bool,
}

impl AudioFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sample_playing(&self) -> bool {
        self.sample_in_flight
    }

    pub fn play_primary(&mut self, enabled: bool, out: &mut impl SoundOut) -> PlaybackOutcome {
        if !enabled {
            log::info!("[audio] sound disabled; skipping sample");
            return PlaybackOutcome::Muted;
        }
        if !out.sample_available() {
            log::warn!("[audio] penguin sample not available");
            return PlaybackOutcome::Unavailable;
        }
        if self.sample_in_flight {
            log::info!("[audio] sample already playing; ignoring request");
            return PlaybackOutcome::Dropped;
        }

        self.sample_in_flight = true;
        out.rewind_sample();
        match out.play_sample() {
            Ok(()) => {
                log::info!("[audio] playing penguin sample");
                PlaybackOutcome::Started
            }
            Err(e) => {
                log::error!("[audio] sample play failed: {}", e);
                self.sample_in_flight = false;
                self.play_tone(enabled, out);
                PlaybackOutcome::FellBack
            }
        }
    }

    pub fn sample_started(&self) {
        log::info!("[audio] penguin sample started");
    }

    /// Playback was rejected after the request (e.g. autoplay policy).
    pub fn sample_rejected(
        &mut self,
        reason: &str,
        enabled: bool,
        out: &mut impl SoundOut,
    ) -> PlaybackOutcome {
        if !self.sample_in_flight {
            log::info!("[audio] stale sample rejection ignored: {}", reason);
            return PlaybackOutcome::Dropped;
        }
        log::error!("[audio] penguin sample rejected: {}", reason);
        self.sample_in_flight = false;
        match self.play_tone(enabled, out) {
            PlaybackOutcome::Started => PlaybackOutcome::FellBack,
            other => other,
        }
    }

    pub fn sample_ended(&mut self) {
        self.sample_in_flight = false;
        log::info!("[audio] penguin sample finished");
    }

    pub fn play_tone(&self, enabled: bool, out: &mut impl SoundOut) -> PlaybackOutcome {
        if !enabled {
            return PlaybackOutcome::Muted;
        }
        if let Err(e) = out.play_tone(&ToneSpec::UI_CLICK) {
            log::warn!("[audio] tone error: {}", e);
            return PlaybackOutcome::Unavailable;
        }
        PlaybackOutcome::Started
    }

    pub fn pause(&mut self, out: &mut impl SoundOut) {
        out.pause_sample();
        self.sample_in_flight = false;
    }
}
