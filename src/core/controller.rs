use glam::Vec3;

use super::audio::{AudioFeedback, PlaybackOutcome, SoundOut};
use super::catalog::{Catalog, ContentEntry};
use super::constants::*;
use super::error::{ViewerError, ViewerResult};
use super::readiness::{self, Admission, GestureEvent, SceneLifecycle};
use super::scene::{AnimatedProperty, Animation, AnimationSlot, Easing, SceneGraph, SceneNode};
use super::state::AppState;

/// Page overlays shown during start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    LoadingScreen,
    Instructions,
}

/// Port onto the info panel and start-up overlays.
pub trait InfoPanel {
    /// Write title and body. Fails only when the panel itself is missing.
    fn render_entry(&mut self, entry: &ContentEntry) -> ViewerResult<()>;
    fn set_panel_active(&mut self, active: bool) -> ViewerResult<()>;
    /// Mark navigation controls for `topic` active and all others inactive.
    fn highlight_nav(&mut self, topic: &str);
    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) -> ViewerResult<()>;
}

/// One-shot work the controller asks the host to run later.
#[derive(Clone, Debug, PartialEq)]
pub enum Deferred {
    EndTapCooldown,
    FinishRotation { target_y: f32, generation: u32 },
    ReorientReset,
    HideLoadingScreen,
    HideInstructions,
}

/// Port onto the host's timers. Tasks are never cancelled; the controller
/// turns stale ones into no-ops.
pub trait Scheduler {
    fn defer(&mut self, delay_ms: u32, task: Deferred);
}

/// Everything the controller touches.
pub trait ViewerIo: SceneGraph + InfoPanel + SoundOut + Scheduler {}

impl<T: SceneGraph + InfoPanel + SoundOut + Scheduler> ViewerIo for T {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    Accepted(PlaybackOutcome),
    /// Within the cooldown window of a previous tap.
    Ignored,
}

pub struct InteractionController {
    state: AppState,
    catalog: Catalog,
    audio: AudioFeedback,
    tap_cooldown: bool,
    pending_rotation: Option<f32>,
    rotation_generation: u32,
}

impl InteractionController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: AppState::default(),
            catalog,
            audio: AudioFeedback::new(),
            tap_cooldown: false,
            pending_rotation: None,
            rotation_generation: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn audio(&self) -> &AudioFeedback {
        &self.audio
    }

    pub fn is_tap_cooling_down(&self) -> bool {
        self.tap_cooldown
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.state.sound_enabled = enabled;
        log::info!("[audio] sound enabled={}", enabled);
    }

    /// Schedule the loading screen to go away once the page script is live.
    pub fn boot(&mut self, io: &mut impl ViewerIo) {
        log::info!("[view] initializing penguin viewer");
        io.defer(LOADING_SCREEN_DELAY_MS, Deferred::HideLoadingScreen);
    }

    pub fn scene_event(&mut self, event: SceneLifecycle) -> Admission {
        readiness::admit(&mut self.state, event)
    }

    // ---------------- Model interaction ----------------

    pub fn tap_model(&mut self, io: &mut impl ViewerIo) -> TapOutcome {
        if self.tap_cooldown {
            log::info!("[tap] cooldown active; ignoring tap");
            return TapOutcome::Ignored;
        }
        self.tap_cooldown = true;
        log::info!("[tap] penguin tapped");

        let playback = self.audio.play_primary(self.state.sound_enabled, io);

        let rest = Vec3::splat(MODEL_REST_SCALE);
        let bounce = Animation::new(
            AnimationSlot::Click,
            AnimatedProperty::Scale,
            rest * TAP_BOUNCE_FACTOR,
            TAP_BOUNCE_DURATION_MS,
        )
        .starting_at(rest)
        .alternate(1);
        if let Err(e) = io.animate(SceneNode::Model, &bounce) {
            log::warn!("[tap] bounce skipped: {}", e);
        }

        io.defer(TAP_COOLDOWN_MS, Deferred::EndTapCooldown);
        TapOutcome::Accepted(playback)
    }

    pub fn hover_enter(&mut self, io: &mut impl ViewerIo) {
        self.hover_to(io, MODEL_REST_SCALE * HOVER_SCALE_FACTOR);
    }

    pub fn hover_leave(&mut self, io: &mut impl ViewerIo) {
        self.hover_to(io, MODEL_REST_SCALE);
    }

    fn hover_to(&mut self, io: &mut impl ViewerIo, scale: f32) {
        let anim = Animation::new(
            AnimationSlot::Hover,
            AnimatedProperty::Scale,
            Vec3::splat(scale),
            HOVER_DURATION_MS,
        );
        if let Err(e) = io.animate(SceneNode::Model, &anim) {
            log::debug!("[tap] hover skipped: {}", e);
        }
    }

    pub fn gesture(&self, gesture: GestureEvent) {
        log::info!("[gesture] {}", gesture.describe());
    }

    // ---------------- View commands ----------------

    /// Restore both nodes to their rest pose and drop any running tweens.
    pub fn reset_view(&mut self, io: &mut impl ViewerIo) -> ViewerResult<()> {
        log::info!("[view] resetting penguin pose");
        self.pending_rotation = None;
        self.rotation_generation = self.rotation_generation.wrapping_add(1);

        let result = apply_rest_pose(io);
        if let Err(e) = &result {
            log::warn!("[view] reset skipped: {}", e);
        }
        result
    }

    /// Turn the wrapper a further quarter turn about Y. Returns the target
    /// angle in degrees. Angles accumulate without wrapping.
    pub fn rotate_90(&mut self, io: &mut impl ViewerIo) -> ViewerResult<f32> {
        let current_y = match self.pending_rotation {
            Some(target) => target,
            None => match io.rotation(SceneNode::Wrapper) {
                Ok(r) => r.y,
                Err(e) => {
                    log::warn!("[view] rotate skipped: {}", e);
                    return Err(e);
                }
            },
        };
        let target_y = current_y + ROTATE_STEP_DEG;
        log::info!("[view] rotating from {}° to {}°", current_y, target_y);

        let anim = Animation::new(
            AnimationSlot::Rotate,
            AnimatedProperty::Rotation,
            Vec3::new(0.0, target_y, 0.0),
            ROTATE_DURATION_MS,
        )
        .easing(Easing::EaseInOutQuad);
        if let Err(e) = io.animate(SceneNode::Wrapper, &anim) {
            log::warn!("[view] rotate skipped: {}", e);
            return Err(e);
        }

        self.rotation_generation = self.rotation_generation.wrapping_add(1);
        self.pending_rotation = Some(target_y);
        io.defer(
            ROTATE_DURATION_MS,
            Deferred::FinishRotation {
                target_y,
                generation: self.rotation_generation,
            },
        );
        Ok(target_y)
    }

    // ---------------- Info panel ----------------

    /// Show `topic`, or the default topic when `topic` is unknown.
    pub fn show_panel(&mut self, topic: &str, io: &mut impl ViewerIo) -> ViewerResult<()> {
        log::info!("[panel] showing '{}'", topic);
        let Some((resolved, entry)) = self.catalog.resolve(topic) else {
            let e = ViewerError::MissingContent(topic.to_string());
            log::error!("[panel] {}", e);
            return Err(e);
        };
        if resolved != topic {
            log::warn!("[panel] unknown topic '{}', using '{}'", topic, resolved);
        }

        if let Err(e) = io.render_entry(entry) {
            log::error!("[panel] {}", e);
            return Err(e);
        }
        io.set_panel_active(true)?;
        self.state.current_topic = resolved.to_string();
        io.highlight_nav(resolved);
        Ok(())
    }

    pub fn hide_panel(&mut self, io: &mut impl ViewerIo) {
        log::info!("[panel] hiding");
        if let Err(e) = io.set_panel_active(false) {
            log::warn!("[panel] {}", e);
        }
    }

    /// Clicks on the panel close it only when they land on the backdrop.
    pub fn panel_clicked(&mut self, on_backdrop: bool, io: &mut impl ViewerIo) -> bool {
        if on_backdrop {
            log::info!("[panel] backdrop clicked");
            self.hide_panel(io);
        }
        on_backdrop
    }

    // ---------------- Buttons ----------------

    pub fn info_button(&mut self, io: &mut impl ViewerIo) {
        let topic = self.state.current_topic.clone();
        _ = self.show_panel(&topic, io);
        self.click_tone(io);
    }

    pub fn nav_button(&mut self, topic: &str, io: &mut impl ViewerIo) {
        _ = self.show_panel(topic, io);
        self.click_tone(io);
    }

    pub fn close_button(&mut self, io: &mut impl ViewerIo) {
        self.hide_panel(io);
    }

    pub fn reset_button(&mut self, io: &mut impl ViewerIo) {
        _ = self.reset_view(io);
        self.click_tone(io);
    }

    pub fn rotate_button(&mut self, io: &mut impl ViewerIo) {
        _ = self.rotate_90(io);
        self.click_tone(io);
    }

    pub fn click_tone(&mut self, io: &mut impl ViewerIo) -> PlaybackOutcome {
        self.audio.play_tone(self.state.sound_enabled, io)
    }

    // ---------------- Media callbacks ----------------

    pub fn sample_started(&self) {
        self.audio.sample_started();
    }

    pub fn sample_rejected(&mut self, reason: &str, io: &mut impl ViewerIo) -> PlaybackOutcome {
        self.audio.sample_rejected(reason, self.state.sound_enabled, io)
    }

    pub fn sample_ended(&mut self) {
        self.audio.sample_ended();
    }

    // ---------------- Page signals ----------------

    pub fn visibility_changed(&mut self, hidden: bool, io: &mut impl ViewerIo) {
        if hidden {
            log::info!("[view] page hidden; pausing audio");
            self.audio.pause(io);
        } else {
            log::info!("[view] page visible");
        }
    }

    pub fn orientation_changed(&mut self, io: &mut impl ViewerIo) {
        io.defer(ORIENTATION_RESET_DELAY_MS, Deferred::ReorientReset);
    }

    // ---------------- Deferred work ----------------

    pub fn run_deferred(&mut self, task: Deferred, io: &mut impl ViewerIo) {
        match task {
            Deferred::EndTapCooldown => {
                self.tap_cooldown = false;
                if let Err(e) = io.clear_animation(SceneNode::Model, AnimationSlot::Click) {
                    log::debug!("[tap] {}", e);
                }
            }
            Deferred::FinishRotation {
                target_y,
                generation,
            } => {
                if generation != self.rotation_generation {
                    log::debug!("[view] stale rotation to {}° ignored", target_y);
                    return;
                }
                self.pending_rotation = None;
                let snapped = io
                    .set_rotation(SceneNode::Wrapper, Vec3::new(0.0, target_y, 0.0))
                    .and_then(|_| io.clear_animation(SceneNode::Wrapper, AnimationSlot::Rotate));
                if let Err(e) = snapped {
                    log::warn!("[view] rotation snap skipped: {}", e);
                }
            }
            Deferred::ReorientReset => {
                if self.state.scene_loaded {
                    log::info!("[view] orientation changed; resetting view");
                    _ = self.reset_view(io);
                }
            }
            Deferred::HideLoadingScreen => {
                if let Err(e) = io.set_overlay_visible(Overlay::LoadingScreen, false) {
                    log::warn!("[view] {}", e);
                    return;
                }
                io.defer(INSTRUCTIONS_VISIBLE_MS, Deferred::HideInstructions);
            }
            Deferred::HideInstructions => {
                if let Err(e) = io.set_overlay_visible(Overlay::Instructions, false) {
                    log::debug!("[view] {}", e);
                }
            }
        }
    }
}

fn apply_rest_pose(io: &mut impl ViewerIo) -> ViewerResult<()> {
    io.set_rotation(SceneNode::Wrapper, Vec3::from_array(WRAPPER_REST_ROTATION_DEG))?;
    io.set_scale(SceneNode::Wrapper, Vec3::splat(WRAPPER_REST_SCALE))?;
    io.set_rotation(SceneNode::Model, Vec3::from_array(MODEL_REST_ROTATION_DEG))?;
    io.set_scale(SceneNode::Model, Vec3::splat(MODEL_REST_SCALE))?;

    for slot in [AnimationSlot::Default, AnimationSlot::Rotate] {
        io.clear_animation(SceneNode::Wrapper, slot)?;
    }
    for slot in [AnimationSlot::Click, AnimationSlot::Hover] {
        io.clear_animation(SceneNode::Model, slot)?;
    }
    Ok(())
}
