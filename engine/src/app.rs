use std::error::Error;
use std::time::Instant;

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::surface::SurfaceSize;

pub struct AppConfig {
    pub title: String,
    /// Fixed pixel-buffer size. The window opens at this size and is not
    /// resizable; if the platform resizes it anyway, the buffer is scaled,
    /// never reallocated.
    pub surface_size: SurfaceSize,
    pub vsync: Option<bool>,
}

/// An application driven by the host surface's callbacks.
///
/// `on_frame` is one scheduling opportunity: the host fires it continuously
/// for as long as the session lives. `on_key_pressed` is delivered
/// out-of-band, as soon as the event arrives, and the frame is presented
/// immediately afterwards rather than waiting for the next `on_frame`.
pub trait EventApp {
    /// Called once, after the surface exists and before the first frame.
    fn init(&mut self, frame: &mut [u8]);

    fn on_frame(&mut self, now: Instant, frame: &mut [u8]);

    fn on_key_pressed(&mut self, key: VirtualKeyCode, frame: &mut [u8]);
}

pub fn run_app<A: EventApp + 'static>(config: AppConfig, mut app: A) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let size = config.surface_size;
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(size.width, size.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut builder = PixelsBuilder::new(size.width, size.height, surface_texture);
    if let Some(vsync) = config.vsync {
        builder = builder.enable_vsync(vsync);
    }
    let mut pixels = builder.build()?;

    app.init(pixels.frame_mut());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    // Buffer stays fixed; only the on-screen scale changes.
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        eprintln!("surface resize failed: {err}");
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    app.on_key_pressed(*key, pixels.frame_mut());
                    if let Err(err) = pixels.render() {
                        eprintln!("present failed: {err}");
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                app.on_frame(Instant::now(), pixels.frame_mut());
                if let Err(err) = pixels.render() {
                    eprintln!("present failed: {err}");
                }
            }
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    });

    #[allow(unreachable_code)]
    Ok(())
}
