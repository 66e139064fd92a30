// Animation catalog for the warrior sprite set

/// The nine animations the warrior sprite sheets provide.
///
/// Doubles as the discriminant for the controller's current state: every
/// state the character can be in maps to exactly one of these strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Idle,
    Walk,
    Run,
    RunAttack,
    Attack1,
    Attack2,
    Attack3,
    Jump,
    Defend,
}

impl Default for AnimationKind {
    fn default() -> Self {
        Self::Idle
    }
}

/// Horizontal direction the character is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacingDirection {
    Right,
    Left,
}

impl Default for FacingDirection {
    fn default() -> Self {
        Self::Right
    }
}

impl FacingDirection {
    /// Horizontal scale sign for rendering (facing left mirrors the quad
    /// about its own center)
    pub fn mirror_x(&self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// Static timing data for one animation strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Number of frames in the horizontal strip
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
}

impl AnimationSpec {
    /// Total duration of one pass through the strip
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Per-kind specs, indexed by enum ordinal. Frame counts match the sprite
/// sheets shipped with the demo.
const CATALOG: [AnimationSpec; 9] = [
    AnimationSpec { frame_count: 4, frame_duration: 0.2 },  // Idle
    AnimationSpec { frame_count: 8, frame_duration: 0.12 }, // Walk
    AnimationSpec { frame_count: 7, frame_duration: 0.08 }, // Run
    AnimationSpec { frame_count: 6, frame_duration: 0.1 },  // RunAttack
    AnimationSpec { frame_count: 5, frame_duration: 0.08 }, // Attack1
    AnimationSpec { frame_count: 4, frame_duration: 0.08 }, // Attack2
    AnimationSpec { frame_count: 4, frame_duration: 0.08 }, // Attack3
    AnimationSpec { frame_count: 6, frame_duration: 0.1 },  // Jump
    AnimationSpec { frame_count: 5, frame_duration: 0.15 }, // Defend
];

impl AnimationKind {
    /// All kinds, in ordinal order
    pub const ALL: [AnimationKind; 9] = [
        Self::Idle,
        Self::Walk,
        Self::Run,
        Self::RunAttack,
        Self::Attack1,
        Self::Attack2,
        Self::Attack3,
        Self::Jump,
        Self::Defend,
    ];

    /// Look up the static spec for this kind.
    ///
    /// Total over the enum; an out-of-range ordinal falls back to Idle's
    /// spec instead of panicking.
    pub fn spec(&self) -> AnimationSpec {
        *CATALOG.get(*self as usize).unwrap_or(&CATALOG[0])
    }

    /// Attack animations play once and hold their final frame; everything
    /// else loops continuously.
    pub fn is_attack(&self) -> bool {
        matches!(
            self,
            Self::Attack1 | Self::Attack2 | Self::Attack3 | Self::RunAttack
        )
    }

    /// Sprite sheet file for this animation (one horizontal strip per file)
    pub fn texture_file(&self) -> &'static str {
        match self {
            Self::Idle => "Idle.png",
            Self::Walk => "Walk.png",
            Self::Run => "Run.png",
            Self::RunAttack => "Run+Attack.png",
            Self::Attack1 => "Attack 1.png",
            Self::Attack2 => "Attack 2.png",
            Self::Attack3 => "Attack 3.png",
            Self::Jump => "Jump.png",
            Self::Defend => "Defend.png",
        }
    }

    /// UV rect for a frame of this animation's strip, as (x, y, width,
    /// height) in normalized [0, 1] coordinates.
    ///
    /// Frames are laid out left to right in a single row, so each frame is
    /// an equal division of the texture width and spans the full height.
    /// The frame index wraps modulo the frame count.
    pub fn frame_uv(&self, frame: usize) -> (f32, f32, f32, f32) {
        let frame_count = self.spec().frame_count;
        let frame = frame % frame_count;

        let w = 1.0 / frame_count as f32;
        let x = frame as f32 * w;

        (x, 0.0, w, 1.0)
    }
}
