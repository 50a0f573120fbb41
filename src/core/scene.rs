use glam::Vec3;

use super::error::ViewerResult;

/// Scene-graph nodes the viewer addresses by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneNode {
    /// Intermediate node carrying user rotation, isolated from the model pose.
    Wrapper,
    /// The penguin model itself.
    Model,
}

impl SceneNode {
    pub fn element_id(self) -> &'static str {
        match self {
            SceneNode::Wrapper => "penguin-wrapper",
            SceneNode::Model => "penguin",
        }
    }
}

/// Named animation attributes. Each slot holds at most one animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationSlot {
    Default,
    Click,
    Hover,
    Rotate,
}

impl AnimationSlot {
    pub const ALL: [AnimationSlot; 4] = [
        AnimationSlot::Default,
        AnimationSlot::Click,
        AnimationSlot::Hover,
        AnimationSlot::Rotate,
    ];

    pub fn attribute_name(self) -> &'static str {
        match self {
            AnimationSlot::Default => "animation",
            AnimationSlot::Click => "animation__click",
            AnimationSlot::Hover => "animation__hover",
            AnimationSlot::Rotate => "animation__rotate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedProperty {
    Scale,
    Rotation,
}

impl AnimatedProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimatedProperty::Scale => "scale",
            AnimatedProperty::Rotation => "rotation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOutQuad,
    EaseInOutQuad,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
        }
    }
}

/// A declarative, renderer-driven tween. The renderer owns its progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub slot: AnimationSlot,
    pub property: AnimatedProperty,
    pub from: Option<Vec3>,
    pub to: Vec3,
    pub duration_ms: u32,
    pub easing: Easing,
    /// Play forward then back (`dir: alternate`).
    pub alternate: bool,
    pub loops: Option<u32>,
}

impl Animation {
    pub fn new(slot: AnimationSlot, property: AnimatedProperty, to: Vec3, duration_ms: u32) -> Self {
        Self {
            slot,
            property,
            from: None,
            to,
            duration_ms,
            easing: Easing::EaseOutQuad,
            alternate: false,
            loops: None,
        }
    }

    pub fn starting_at(mut self, from: Vec3) -> Self {
        self.from = Some(from);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn alternate(mut self, loops: u32) -> Self {
        self.alternate = true;
        self.loops = Some(loops);
        self
    }

    /// Render as a component property string, e.g.
    /// `property: scale; to: 5.1 5.1 5.1; dur: 150; easing: easeOutQuad`.
    pub fn to_attribute_value(&self) -> String {
        let mut parts = vec![format!("property: {}", self.property.as_str())];
        if let Some(from) = self.from {
            parts.push(format!("from: {}", format_vec3(from)));
        }
        parts.push(format!("to: {}", format_vec3(self.to)));
        parts.push(format!("dur: {}", self.duration_ms));
        if self.alternate {
            parts.push("dir: alternate".to_string());
        }
        if let Some(n) = self.loops {
            parts.push(format!("loop: {}", n));
        }
        parts.push(format!("easing: {}", self.easing.as_str()));
        parts.join("; ")
    }
}

/// Format a vector the way scene attributes expect it: `"x y z"`.
pub fn format_vec3(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Parse a whitespace separated `"x y z"` triple. Missing trailing
/// components default to zero; garbage yields `None`.
pub fn parse_vec3(s: &str) -> Option<Vec3> {
    let mut out = [0.0_f32; 3];
    let mut count = 0usize;
    for (i, tok) in s.split_whitespace().enumerate() {
        if i >= 3 {
            return None;
        }
        out[i] = tok.parse::<f32>().ok()?;
        count += 1;
    }
    (count > 0).then(|| Vec3::from_array(out))
}

/// Port onto the external renderer's node attributes.
///
/// Transform values are always read back from the renderer; implementations
/// must not cache them.
pub trait SceneGraph {
    fn rotation(&self, node: SceneNode) -> ViewerResult<Vec3>;
    fn set_rotation(&mut self, node: SceneNode, degrees: Vec3) -> ViewerResult<()>;
    fn set_scale(&mut self, node: SceneNode, scale: Vec3) -> ViewerResult<()>;
    fn animate(&mut self, node: SceneNode, animation: &Animation) -> ViewerResult<()>;
    fn clear_animation(&mut self, node: SceneNode, slot: AnimationSlot) -> ViewerResult<()>;
}
