// Shared host-side harness. The main crate is wasm-only, so the pure-Rust
// core modules are included directly and driven through in-memory ports.
#![allow(dead_code)]

pub mod core {
    pub mod audio {
        include!("../../src/core/audio.rs");
    }
    pub mod catalog {
        include!("../../src/core/catalog.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod controller {
        include!("../../src/core/controller.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod readiness {
        include!("../../src/core/readiness.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod state {
        include!("../../src/core/state.rs");
    }
}

use self::core::audio::{SoundOut, ToneSpec};
use self::core::catalog::{Catalog, ContentEntry};
use self::core::controller::{Deferred, InfoPanel, InteractionController, Overlay, Scheduler};
use self::core::error::{ViewerError, ViewerResult};
use self::core::scene::{Animation, AnimationSlot, SceneGraph, SceneNode};
use glam::Vec3;
use std::collections::HashMap;

/// In-memory scene, panel, speaker and timer wheel.
pub struct FakeIo {
    pub now_ms: u64,
    queue: Vec<(u64, u64, Deferred)>,
    seq: u64,

    pub nodes_present: bool,
    pub animations_rejected: bool,
    pub rotations: HashMap<SceneNode, Vec3>,
    pub scales: HashMap<SceneNode, Vec3>,
    pub animations: HashMap<(SceneNode, AnimationSlot), Animation>,

    pub panel_present: bool,
    pub panel_active: bool,
    pub rendered: Option<ContentEntry>,
    pub highlighted: Option<String>,
    pub overlays_hidden: Vec<Overlay>,

    pub sample_loaded: bool,
    pub sample_fails_immediately: bool,
    pub sample_plays: u32,
    pub sample_rewinds: u32,
    pub sample_pauses: u32,
    pub tones: Vec<ToneSpec>,
}

impl Default for FakeIo {
    fn default() -> Self {
        let mut rotations = HashMap::new();
        rotations.insert(SceneNode::Wrapper, Vec3::ZERO);
        rotations.insert(SceneNode::Model, Vec3::new(-90.0, 0.0, 0.0));
        let mut scales = HashMap::new();
        scales.insert(SceneNode::Wrapper, Vec3::ONE);
        scales.insert(SceneNode::Model, Vec3::splat(5.0));
        Self {
            now_ms: 0,
            queue: Vec::new(),
            seq: 0,
            nodes_present: true,
            animations_rejected: false,
            rotations,
            scales,
            animations: HashMap::new(),
            panel_present: true,
            panel_active: false,
            rendered: None,
            highlighted: None,
            overlays_hidden: Vec::new(),
            sample_loaded: true,
            sample_fails_immediately: false,
            sample_plays: 0,
            sample_rewinds: 0,
            sample_pauses: 0,
            tones: Vec::new(),
        }
    }
}

impl FakeIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<Deferred> {
        let mut q = self.queue.clone();
        q.sort_by_key(|(due, seq, _)| (*due, *seq));
        q.into_iter().map(|(_, _, t)| t).collect()
    }

    /// Move the virtual clock forward, running every task that comes due.
    pub fn advance(&mut self, ctl: &mut InteractionController, ms: u64) {
        let target = self.now_ms + ms;
        loop {
            let next = self
                .queue
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= target)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(i, _)| i);
            let Some(i) = next else {
                break;
            };
            let (due, _, task) = self.queue.remove(i);
            self.now_ms = due;
            ctl.run_deferred(task, self);
        }
        self.now_ms = target;
    }

    pub fn advance_to(&mut self, ctl: &mut InteractionController, t_ms: u64) {
        let ms = t_ms.saturating_sub(self.now_ms);
        self.advance(ctl, ms);
    }

    pub fn wrapper_y(&self) -> f32 {
        self.rotations[&SceneNode::Wrapper].y
    }

    pub fn has_animation(&self, node: SceneNode, slot: AnimationSlot) -> bool {
        self.animations.contains_key(&(node, slot))
    }

    fn require_nodes(&self, node: SceneNode) -> ViewerResult<()> {
        if self.nodes_present {
            Ok(())
        } else {
            Err(ViewerError::MissingElement(node.element_id()))
        }
    }
}

impl SceneGraph for FakeIo {
    fn rotation(&self, node: SceneNode) -> ViewerResult<Vec3> {
        self.require_nodes(node)?;
        Ok(self.rotations.get(&node).copied().unwrap_or(Vec3::ZERO))
    }

    fn set_rotation(&mut self, node: SceneNode, degrees: Vec3) -> ViewerResult<()> {
        self.require_nodes(node)?;
        self.rotations.insert(node, degrees);
        Ok(())
    }

    fn set_scale(&mut self, node: SceneNode, scale: Vec3) -> ViewerResult<()> {
        self.require_nodes(node)?;
        self.scales.insert(node, scale);
        Ok(())
    }

    fn animate(&mut self, node: SceneNode, animation: &Animation) -> ViewerResult<()> {
        self.require_nodes(node)?;
        if self.animations_rejected {
            return Err(ViewerError::Js(format!(
                "{} refused {}",
                node.element_id(),
                animation.slot.attribute_name()
            )));
        }
        self.animations.insert((node, animation.slot), animation.clone());
        Ok(())
    }

    fn clear_animation(&mut self, node: SceneNode, slot: AnimationSlot) -> ViewerResult<()> {
        self.require_nodes(node)?;
        self.animations.remove(&(node, slot));
        Ok(())
    }
}

impl InfoPanel for FakeIo {
    fn render_entry(&mut self, entry: &ContentEntry) -> ViewerResult<()> {
        if !self.panel_present {
            return Err(ViewerError::MissingElement("infoPanel"));
        }
        self.rendered = Some(entry.clone());
        Ok(())
    }

    fn set_panel_active(&mut self, active: bool) -> ViewerResult<()> {
        if !self.panel_present {
            return Err(ViewerError::MissingElement("infoPanel"));
        }
        self.panel_active = active;
        Ok(())
    }

    fn highlight_nav(&mut self, topic: &str) {
        self.highlighted = Some(topic.to_string());
    }

    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) -> ViewerResult<()> {
        if visible {
            self.overlays_hidden.retain(|o| *o != overlay);
        } else {
            self.overlays_hidden.push(overlay);
        }
        Ok(())
    }
}

impl SoundOut for FakeIo {
    fn sample_available(&self) -> bool {
        self.sample_loaded
    }

    fn rewind_sample(&mut self) {
        self.sample_rewinds += 1;
    }

    fn play_sample(&mut self) -> ViewerResult<()> {
        if self.sample_fails_immediately {
            return Err(ViewerError::Playback("NotAllowedError".into()));
        }
        self.sample_plays += 1;
        Ok(())
    }

    fn pause_sample(&mut self) {
        self.sample_pauses += 1;
    }

    fn play_tone(&mut self, tone: &ToneSpec) -> ViewerResult<()> {
        self.tones.push(*tone);
        Ok(())
    }
}

impl Scheduler for FakeIo {
    fn defer(&mut self, delay_ms: u32, task: Deferred) {
        self.seq += 1;
        self.queue.push((self.now_ms + delay_ms as u64, self.seq, task));
    }
}

pub fn controller() -> InteractionController {
    InteractionController::new(Catalog::penguins())
}
