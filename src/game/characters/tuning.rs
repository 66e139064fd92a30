// Movement, physics, and combat tuning for the warrior

/// Fixed tuning values for the playable character.
///
/// Kept as plain data so tests can construct variants, but the demo always
/// uses [`WARRIOR_TUNING`].
#[derive(Debug, Clone)]
pub struct CharacterTuning {
    // Movement
    /// Horizontal speed while walking (units/second)
    pub walk_speed: f32,
    /// Horizontal speed while running or run-attacking
    pub run_speed: f32,
    /// Horizontal control multiplier while airborne
    pub air_control: f32,

    // Vertical physics
    /// Upward velocity applied on jump
    pub jump_force: f32,
    /// Downward acceleration while airborne
    pub gravity: f32,
    /// World-space y of the ground plane
    pub ground_level: f32,

    // Scene boundaries
    /// Leftmost x the character may occupy
    pub min_x: f32,
    /// Rightmost x the character may occupy
    pub max_x: f32,

    // Combat
    /// Minimum time between new attack starts (seconds)
    pub attack_cooldown: f32,
}

/// The tuning the demo ships with
pub const WARRIOR_TUNING: CharacterTuning = CharacterTuning {
    walk_speed: 150.0,
    run_speed: 300.0,
    air_control: 0.7,

    jump_force: 500.0,
    gravity: 1200.0,
    ground_level: 150.0,

    min_x: 50.0,
    max_x: 1500.0,

    attack_cooldown: 0.5,
};

impl Default for CharacterTuning {
    fn default() -> Self {
        WARRIOR_TUNING
    }
}
