// Game action definitions and key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    Sprint,

    // Combat
    Attack,
    Defend,
}

/// Default keyboard bindings.
///
/// Several physical keys may map to one logical action (arrows and WASD
/// both steer); the input manager treats an action as held while any of
/// its keys is held.
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (arrows or WASD)
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::ShiftLeft, Action::Sprint),
        (KeyCode::ShiftRight, Action::Sprint),
        // Combat
        (KeyCode::KeyJ, Action::Attack),
        (KeyCode::KeyZ, Action::Attack),
        (KeyCode::KeyK, Action::Defend),
        (KeyCode::KeyX, Action::Defend),
    ]
}
