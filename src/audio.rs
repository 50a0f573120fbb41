use crate::constants::SAMPLE_SRC;
use crate::core::constants::SAMPLE_VOLUME;
use crate::core::{ToneSpec, ViewerError, ViewerResult};
use crate::scene::js_to_viewer;
use web_sys as web;

/// Browser side of the audio feedback: one preloaded media element for the
/// penguin call and a lazily created context for synthesized clicks.
pub struct WebSound {
    sample: Option<web::HtmlAudioElement>,
    audio_ctx: Option<web::AudioContext>,
}

impl WebSound {
    pub fn new() -> Self {
        let sample = match web::HtmlAudioElement::new_with_src(SAMPLE_SRC) {
            Ok(a) => {
                a.set_preload("auto");
                a.set_volume(SAMPLE_VOLUME);
                Some(a)
            }
            Err(e) => {
                log::error!("[audio] cannot create sample element: {:?}", e);
                None
            }
        };
        Self {
            sample,
            audio_ctx: None,
        }
    }

    pub fn sample(&self) -> Option<&web::HtmlAudioElement> {
        self.sample.as_ref()
    }

    pub fn rewind(&self) {
        if let Some(a) = &self.sample {
            _ = a.pause();
            a.set_current_time(0.0);
        }
    }

    pub fn pause(&self) {
        if let Some(a) = &self.sample {
            _ = a.pause();
        }
    }

    /// Start the sample. The returned promise settles once the browser has
    /// accepted or rejected playback.
    pub fn start(&self) -> ViewerResult<js_sys::Promise> {
        let a = self
            .sample
            .as_ref()
            .ok_or(ViewerError::MissingElement("penguin sample"))?;
        a.play()
            .map_err(|e| ViewerError::Playback(format!("{:?}", e)))
    }

    fn context(&mut self) -> ViewerResult<&web::AudioContext> {
        if self.audio_ctx.is_none() {
            let ctx = web::AudioContext::new().map_err(js_to_viewer)?;
            self.audio_ctx = Some(ctx);
        }
        match &self.audio_ctx {
            Some(ctx) => Ok(ctx),
            None => Err(ViewerError::Playback("no audio context".into())),
        }
    }

    // Fresh oscillator + gain per call; the nodes are discarded once stopped.
    pub fn play_tone(&mut self, tone: &ToneSpec) -> ViewerResult<()> {
        let audio_ctx = self.context()?;
        _ = audio_ctx.resume();

        let osc = web::OscillatorNode::new(audio_ctx).map_err(js_to_viewer)?;
        let gain = web::GainNode::new(audio_ctx).map_err(js_to_viewer)?;
        osc.set_type(web::OscillatorType::Sine);

        let now = audio_ctx.current_time();
        let end = now + tone.duration_sec;
        osc.frequency()
            .set_value_at_time(tone.start_hz, now)
            .and_then(|p| p.exponential_ramp_to_value_at_time(tone.end_hz, end))
            .map_err(js_to_viewer)?;
        gain.gain()
            .set_value_at_time(tone.start_gain, now)
            .and_then(|p| p.exponential_ramp_to_value_at_time(tone.end_gain, end))
            .map_err(js_to_viewer)?;

        osc.connect_with_audio_node(&gain).map_err(js_to_viewer)?;
        gain.connect_with_audio_node(&audio_ctx.destination())
            .map_err(js_to_viewer)?;
        osc.start_with_when(now).map_err(js_to_viewer)?;
        osc.stop_with_when(end).map_err(js_to_viewer)?;
        Ok(())
    }
}
