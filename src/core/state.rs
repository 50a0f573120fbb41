use super::constants::DEFAULT_TOPIC;

/// Page-lifetime UI state owned by the interaction controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub scene_loaded: bool,
    pub sound_enabled: bool,
    pub current_topic: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene_loaded: false,
            sound_enabled: true,
            current_topic: DEFAULT_TOPIC.to_string(),
        }
    }
}
