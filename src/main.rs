use anyhow::Result;
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::KeyCode,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::frame_clock::FrameClock;
use engine::input::InputManager;
use game::camera::FollowCamera;
use game::characters::CharacterController;

const VIEW_WIDTH: f32 = 800.0;
const VIEW_HEIGHT: f32 = 600.0;
const SCENE_WIDTH: f32 = 1600.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Sprite Warrior...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Sprite Warrior")
        .with_inner_size(winit::dpi::LogicalSize::new(
            VIEW_WIDTH as u32,
            VIEW_HEIGHT as u32,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::with_default_bindings();
    let mut clock = FrameClock::new();
    let mut character = CharacterController::new(Vec2::new(400.0, 150.0));
    let mut camera = FollowCamera::new(VIEW_WIDTH, SCENE_WIDTH);

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => {
                    if event.state.is_pressed() && !event.repeat {
                        if let winit::keyboard::PhysicalKey::Code(KeyCode::KeyP) =
                            event.physical_key
                        {
                            clock.toggle_pause();
                        }
                    }
                    input.process_keyboard_event(&event);
                }
                Event::WindowEvent {
                    event: WindowEvent::Focused(false),
                    ..
                } => {
                    // Dropped focus means missed key releases
                    input.reset();
                }
                Event::WindowEvent {
                    event: WindowEvent::Resized(physical_size),
                    ..
                } => {
                    info!("Window resized to {:?}", physical_size);
                }
                Event::WindowEvent {
                    event: WindowEvent::RedrawRequested,
                    ..
                } => {
                    // Rendering is handled by the graphics layer; nothing to
                    // draw in the headless demo shell
                    window.request_redraw();
                }
                Event::AboutToWait => {
                    let dt = clock.tick();
                    let snapshot = input.snapshot();

                    character.update(dt, &snapshot);
                    camera.follow(character.position().x, dt);

                    if clock.frame_count() % 60 == 0 {
                        let pose = character.pose();
                        let (u, _, w, _) = pose.animation.frame_uv(pose.frame);
                        let (view_left, view_right) = camera.view_range();
                        debug!(
                            "{} frame {} (uv x {:.3} w {:.3}, mirror {:+.0}) at ({:.1}, {:.1}), \
                             view [{:.1}, {:.1}], {:.0} fps",
                            pose.animation.texture_file(),
                            pose.frame,
                            u,
                            w,
                            pose.facing.mirror_x(),
                            pose.position.x,
                            pose.position.y,
                            view_left,
                            view_right,
                            clock.fps()
                        );
                    }

                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
