use super::state::AppState;

/// Lifecycle notifications emitted by the external scene root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneLifecycle {
    Loaded,
    RenderStart,
    CameraReady,
}

impl SceneLifecycle {
    pub const EVENT_NAMES: [&'static str; 3] = ["loaded", "renderstart", "arjs-video-loaded"];

    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "loaded" => Some(SceneLifecycle::Loaded),
            "renderstart" => Some(SceneLifecycle::RenderStart),
            "arjs-video-loaded" => Some(SceneLifecycle::CameraReady),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// First readiness signal: bind model interactions now.
    Initialize,
    AlreadyInitialized,
    /// Logged only.
    Informational,
}

/// Decide what a lifecycle event means, flipping `scene_loaded` on the first
/// `loaded` or `renderstart`. Both may fire; only one initializes.
pub fn admit(state: &mut AppState, event: SceneLifecycle) -> Admission {
    match event {
        SceneLifecycle::CameraReady => {
            log::info!("[scene] AR camera initialized");
            Admission::Informational
        }
        SceneLifecycle::Loaded | SceneLifecycle::RenderStart => {
            if state.scene_loaded {
                log::debug!("[scene] {:?} after initialization", event);
                return Admission::AlreadyInitialized;
            }
            state.scene_loaded = true;
            log::info!("[scene] ready via {:?}", event);
            Admission::Initialize
        }
    }
}

/// Multi-touch gestures reported on the model node. Only logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEvent {
    GrabStart,
    GrabEnd,
    PinchStart,
    PinchEnd,
    RotateStart,
    RotateEnd,
}

impl GestureEvent {
    pub const EVENT_NAMES: [&'static str; 6] = [
        "grab-start",
        "grab-end",
        "pinchstarted",
        "pinchended",
        "rotatestarted",
        "rotateended",
    ];

    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "grab-start" => Some(GestureEvent::GrabStart),
            "grab-end" => Some(GestureEvent::GrabEnd),
            "pinchstarted" => Some(GestureEvent::PinchStart),
            "pinchended" => Some(GestureEvent::PinchEnd),
            "rotatestarted" => Some(GestureEvent::RotateStart),
            "rotateended" => Some(GestureEvent::RotateEnd),
            _ => None,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            GestureEvent::GrabStart => "started - grab",
            GestureEvent::GrabEnd => "ended - grab",
            GestureEvent::PinchStart => "started - pinch",
            GestureEvent::PinchEnd => "ended - pinch",
            GestureEvent::RotateStart => "started - rotate",
            GestureEvent::RotateEnd => "ended - rotate",
        }
    }
}
