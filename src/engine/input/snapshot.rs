// Per-tick input snapshot handed to the character controller

/// One tick's worth of sampled player input.
///
/// Owned by the caller for the duration of a tick and read-only from the
/// controller's perspective. The `*_pressed` flags are edge-triggered: true
/// only on the tick where that logical direction went from not-held to
/// held. Computing them is the input manager's job, not the controller's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    // Held state
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    pub attack: bool,
    pub defend: bool,

    // Press edges (this tick only)
    pub left_pressed: bool,
    pub right_pressed: bool,
}
