// DOM ids, selectors and event names of the page shell.

// Scene graph
pub const SCENE_SELECTOR: &str = "a-scene";
pub const MODEL_SELECTOR: &str = "#penguin";

// Overlays
pub const LOADING_SCREEN_ID: &str = "loadingScreen";
pub const INSTRUCTIONS_ID: &str = "instructions";

// Controls
pub const INFO_BUTTON_ID: &str = "infoBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";
pub const ROTATE_BUTTON_ID: &str = "rotateBtn";
pub const CLOSE_BUTTON_ID: &str = "closeBtn";
pub const NAV_BUTTON_SELECTOR: &str = ".nav-btn";
pub const NAV_TOPIC_ATTR: &str = "data-info"; // holds the catalog key

// Info panel
pub const INFO_PANEL_ID: &str = "infoPanel";
pub const INFO_CONTENT_ID: &str = "infoContent";
pub const INFO_TITLE_SELECTOR: &str = "h3"; // inside #infoContent
pub const INFO_TEXT_ID: &str = "infoText";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const CLICKABLE_CLASS: &str = "clickable";

// Media
pub const SAMPLE_SRC: &str = "assets/african_penguin_sound.mp3";
