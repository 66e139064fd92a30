// Character system
//
// Everything owned by the playable character:
// - Animation catalog (static frame counts and timings per state)
// - Tuning constants for movement, physics, and combat
// - The controller itself: state machine, physics, pose projection

pub mod animation;
pub mod character;
pub mod tuning;

// Re-export commonly used types
pub use animation::{AnimationKind, AnimationSpec, FacingDirection};
pub use character::{CharacterController, Pose};
pub use tuning::{CharacterTuning, WARRIOR_TUNING};
