// Warrior character controller: state machine, vertical physics, and
// animation progress

use glam::Vec2;
use log::debug;

use crate::core::math::clamp;
use crate::engine::input::InputSnapshot;

use super::animation::{AnimationKind, FacingDirection};
use super::tuning::CharacterTuning;

/// Renderable projection of the character after a tick.
///
/// The renderer picks the sprite sheet by `animation`, the UV rect by
/// `frame`, and positions/mirrors the quad with `position` and `facing`.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub position: Vec2,
    pub facing: FacingDirection,
    pub animation: AnimationKind,
    pub frame: usize,
}

/// Player-controlled character for the side-scrolling demo.
///
/// Owns all mutable character state and advances it exactly once per tick
/// via [`update`](Self::update). Single-threaded, never aliased; the caller
/// supplies an [`InputSnapshot`] and a delta time, and reads the resulting
/// [`Pose`] afterwards. No rendering types leak in here.
#[derive(Debug)]
pub struct CharacterController {
    tuning: CharacterTuning,

    // Physics
    position: Vec2,
    velocity_y: f32,
    is_grounded: bool,

    // State machine
    animation: AnimationKind,
    facing: FacingDirection,

    // Animation progress
    current_frame: usize,
    frame_timer: f32,

    // Combat
    attack_cooldown: f32,
    attack_combo: usize,
}

impl CharacterController {
    /// Create a grounded, idle character facing right at `start`
    pub fn new(start: Vec2) -> Self {
        Self::with_tuning(start, CharacterTuning::default())
    }

    pub fn with_tuning(start: Vec2, tuning: CharacterTuning) -> Self {
        Self {
            tuning,
            position: start,
            velocity_y: 0.0,
            is_grounded: true,
            animation: AnimationKind::Idle,
            facing: FacingDirection::Right,
            current_frame: 0,
            frame_timer: 0.0,
            attack_cooldown: 0.0,
            attack_combo: 0,
        }
    }

    /// Advance the character by one tick.
    ///
    /// Runs, in order: attack cooldown decay, vertical physics, the state
    /// transition cascade, state-gated horizontal movement, and frame
    /// advancement. A non-positive `dt` leaves all state untouched.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        if dt <= 0.0 {
            return;
        }

        let previous = self.animation;

        // Cooldown only gates new attack starts; it is sign-tested, never
        // renormalized, so it may drift fractionally below zero.
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= dt;
        }

        self.step_physics(dt, input.jump);
        self.decide_state(input);

        // Horizontal movement only applies in the moving states
        if matches!(
            self.animation,
            AnimationKind::Walk | AnimationKind::Run | AnimationKind::RunAttack | AnimationKind::Jump
        ) {
            self.step_movement(dt, input);
        }

        // Every state change restarts its animation from frame zero
        if self.animation != previous {
            self.current_frame = 0;
            self.frame_timer = 0.0;
            debug!("animation {:?} -> {:?}", previous, self.animation);
        }

        self.advance_frames(dt);
    }

    /// Gravity, jump, and ground collision
    fn step_physics(&mut self, dt: f32, jump_held: bool) {
        if !self.is_grounded {
            self.velocity_y -= self.tuning.gravity * dt;
        }

        // Jump only from the ground; no double jump, no buffering
        if jump_held && self.is_grounded {
            self.velocity_y = self.tuning.jump_force;
            self.is_grounded = false;
        }

        self.position.y += self.velocity_y * dt;

        if self.position.y <= self.tuning.ground_level {
            self.position.y = self.tuning.ground_level;
            self.velocity_y = 0.0;
            self.is_grounded = true;
        }
    }

    /// Pick the animation state for this tick.
    ///
    /// Strict priority cascade; the first matching rule wins and the rest
    /// are skipped. The order is load-bearing: an in-progress attack must
    /// win over every movement rule.
    fn decide_state(&mut self, input: &InputSnapshot) {
        // 1. Let a started attack play out
        if self.animation.is_attack()
            && self.current_frame < self.animation.spec().frame_count - 1
        {
            return;
        }

        // 2. New attack
        if input.attack && self.attack_cooldown <= 0.0 {
            self.attack_cooldown = self.tuning.attack_cooldown;

            if input.left || input.right {
                self.animation = AnimationKind::RunAttack;
            } else {
                // Standing attacks cycle Attack1 -> Attack2 -> Attack3; the
                // counter persists across other states
                self.animation = match self.attack_combo {
                    0 => AnimationKind::Attack1,
                    1 => AnimationKind::Attack2,
                    _ => AnimationKind::Attack3,
                };
                self.attack_combo = (self.attack_combo + 1) % 3;
            }
            return;
        }

        // 3. Defend beats movement and idle
        if input.defend {
            self.animation = AnimationKind::Defend;
            return;
        }

        // 4. Turn in place: a single direction tap while standing still
        // flips facing without walking. Both edges at once is no turn.
        if self.is_grounded
            && !input.left
            && !input.right
            && (input.left_pressed ^ input.right_pressed)
        {
            self.facing = if input.left_pressed {
                FacingDirection::Left
            } else {
                FacingDirection::Right
            };
            self.animation = AnimationKind::Idle;
            return;
        }

        // 5. Airborne always shows the jump strip
        if !self.is_grounded {
            self.animation = AnimationKind::Jump;
            return;
        }

        // 6. Grounded movement
        if input.left || input.right {
            self.animation = if input.sprint {
                AnimationKind::Run
            } else {
                AnimationKind::Walk
            };
            return;
        }

        // 7. Default
        self.animation = AnimationKind::Idle;
    }

    /// Apply horizontal movement and facing for the moving states.
    ///
    /// Speed is input-driven every tick; there is no horizontal momentum,
    /// so holding neither direction mid-air simply stops x.
    fn step_movement(&mut self, dt: f32, input: &InputSnapshot) {
        let base_speed = match self.animation {
            AnimationKind::Run | AnimationKind::RunAttack => self.tuning.run_speed,
            _ => self.tuning.walk_speed,
        };

        // Reduced control while airborne
        let speed = if self.is_grounded {
            base_speed
        } else {
            base_speed * self.tuning.air_control
        };

        if input.right {
            self.facing = FacingDirection::Right;
            self.position.x += speed * dt;
        } else if input.left {
            self.facing = FacingDirection::Left;
            self.position.x -= speed * dt;
        }

        self.position.x = clamp(self.position.x, self.tuning.min_x, self.tuning.max_x);
    }

    /// Advance the frame timer, stepping as many frames as the elapsed time
    /// covers. The loop (rather than a single comparison) keeps oversized
    /// deltas from lagging the animation behind real time.
    fn advance_frames(&mut self, dt: f32) {
        let spec = self.animation.spec();

        self.frame_timer += dt;

        while self.frame_timer >= spec.frame_duration {
            self.frame_timer -= spec.frame_duration;
            self.current_frame += 1;

            if self.animation.is_attack() {
                // Attack strips hold their last frame
                if self.current_frame >= spec.frame_count {
                    self.current_frame = spec.frame_count - 1;
                }
            } else {
                self.current_frame %= spec.frame_count;
            }
        }
    }

    /// Renderable state after the last tick
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            facing: self.facing,
            animation: self.animation,
            frame: self.current_frame,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn animation(&self) -> AnimationKind {
        self.animation
    }

    pub fn facing(&self) -> FacingDirection {
        self.facing
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }
}
