// Game-side modules: the character and the side-scrolling camera

pub mod camera;
pub mod characters;
