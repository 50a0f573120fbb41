use crate::audio::WebSound;
use crate::core::{
    Animation, AnimationSlot, Catalog, ContentEntry, Deferred, InfoPanel, InteractionController,
    Overlay, SceneGraph, SceneNode, Scheduler, SoundOut, ToneSpec, ViewerResult,
};
use crate::dom;
use crate::panel::DomPanel;
use crate::scene::AframeScene;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type AppHandle = Rc<RefCell<App>>;

pub struct App {
    pub controller: InteractionController,
    pub io: WebIo,
}

impl App {
    pub fn create(document: &web::Document) -> AppHandle {
        Rc::new_cyclic(|weak| {
            RefCell::new(App {
                controller: InteractionController::new(Catalog::penguins()),
                io: WebIo {
                    handle: weak.clone(),
                    scene: AframeScene::new(document.clone()),
                    panel: DomPanel::locate(document),
                    sound: WebSound::new(),
                },
            })
        })
    }
}

/// Run `f` against the controller and its browser ports.
///
/// Callbacks run on the single event-loop thread, so a failed borrow can only
/// mean a handler fired synchronously from inside another one; it is dropped.
pub fn dispatch<R>(
    handle: &AppHandle,
    f: impl FnOnce(&mut InteractionController, &mut WebIo) -> R,
) -> Option<R> {
    match handle.try_borrow_mut() {
        Ok(mut app) => {
            let App { controller, io } = &mut *app;
            Some(f(controller, io))
        }
        Err(_) => {
            log::warn!("[app] re-entrant dispatch dropped");
            None
        }
    }
}

/// Browser implementation of every port the controller drives.
pub struct WebIo {
    handle: Weak<RefCell<App>>,
    scene: AframeScene,
    panel: DomPanel,
    sound: WebSound,
}

impl WebIo {
    pub fn panel(&self) -> &DomPanel {
        &self.panel
    }

    pub fn sample_element(&self) -> Option<web::HtmlAudioElement> {
        self.sound.sample().cloned()
    }
}

impl SceneGraph for WebIo {
    fn rotation(&self, node: SceneNode) -> ViewerResult<Vec3> {
        self.scene.rotation(node)
    }

    fn set_rotation(&mut self, node: SceneNode, degrees: Vec3) -> ViewerResult<()> {
        self.scene.set_rotation(node, degrees)
    }

    fn set_scale(&mut self, node: SceneNode, scale: Vec3) -> ViewerResult<()> {
        self.scene.set_scale(node, scale)
    }

    fn animate(&mut self, node: SceneNode, animation: &Animation) -> ViewerResult<()> {
        self.scene.animate(node, animation)
    }

    fn clear_animation(&mut self, node: SceneNode, slot: AnimationSlot) -> ViewerResult<()> {
        self.scene.clear_animation(node, slot)
    }
}

impl InfoPanel for WebIo {
    fn render_entry(&mut self, entry: &ContentEntry) -> ViewerResult<()> {
        self.panel.render_entry(entry)
    }

    fn set_panel_active(&mut self, active: bool) -> ViewerResult<()> {
        self.panel.set_active(active)
    }

    fn highlight_nav(&mut self, topic: &str) {
        self.panel.highlight_nav(topic)
    }

    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) -> ViewerResult<()> {
        self.panel.set_overlay_visible(overlay, visible)
    }
}

impl SoundOut for WebIo {
    fn sample_available(&self) -> bool {
        self.sound.sample().is_some()
    }

    fn rewind_sample(&mut self) {
        self.sound.rewind();
    }

    fn play_sample(&mut self) -> ViewerResult<()> {
        let promise = self.sound.start()?;
        let handle = self.handle.clone();
        spawn_local(async move {
            let result = JsFuture::from(promise).await;
            let Some(app) = handle.upgrade() else {
                return;
            };
            match result {
                Ok(_) => {
                    dispatch(&app, |c, _| c.sample_started());
                }
                Err(e) => {
                    let reason = format!("{:?}", e);
                    dispatch(&app, |c, io| c.sample_rejected(&reason, io));
                }
            }
        });
        Ok(())
    }

    fn pause_sample(&mut self) {
        self.sound.pause();
    }

    fn play_tone(&mut self, tone: &ToneSpec) -> ViewerResult<()> {
        self.sound.play_tone(tone)
    }
}

impl Scheduler for WebIo {
    fn defer(&mut self, delay_ms: u32, task: Deferred) {
        let handle = self.handle.clone();
        let scheduled = dom::set_timeout(delay_ms, move || {
            if let Some(app) = handle.upgrade() {
                dispatch(&app, |c, io| c.run_deferred(task, io));
            }
        });
        if let Err(e) = scheduled {
            log::error!("[app] cannot schedule task: {}", e);
        }
    }
}
