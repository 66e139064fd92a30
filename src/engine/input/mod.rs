// Input handling
//
// Keyboard events come in from winit, the manager tracks which logical
// actions are held (any bound key counts), and once per tick the game
// samples an `InputSnapshot` with direction press edges already computed.
// The character controller only ever sees snapshots.

pub mod action;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use snapshot::InputSnapshot;
