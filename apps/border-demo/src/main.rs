use std::cell::Cell;
use std::rc::Rc;

use anyhow::Context;
use decor_app_shell::{AppOptions, AppShell};
use decor_render_pixels::{draw_scene, load_font};
use decor_ui::{conditional_view, content_view};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoScreen {
    Static,
    Conditional(bool),
}

impl DemoScreen {
    fn next_screen(self) -> Self {
        match self {
            DemoScreen::Static => DemoScreen::Conditional(true),
            DemoScreen::Conditional(_) => DemoScreen::Static,
        }
    }

    fn toggle_flag(self) -> Self {
        match self {
            DemoScreen::Static => DemoScreen::Static,
            DemoScreen::Conditional(flag) => DemoScreen::Conditional(!flag),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info,decor_ui=debug");
    env_logger::Builder::from_env(env).init();

    let options = AppOptions::from_env().context("invalid configuration")?;
    match options.font_path() {
        Some(path) => {
            load_font(path).with_context(|| format!("failed to load {}", path.display()))?;
        }
        None => log::warn!(
            "{} is not set; borders will render without text",
            decor_app_shell::FONT_VAR
        ),
    }

    println!("=== Border Demo ===");
    println!("  Tab    switch between the static and the conditional screen");
    println!("  Space  flip the flag driving the conditional screen");
    println!("  D      dump layout and render scene to the log");
    println!("  Esc    quit");
    println!();

    let (initial_width, initial_height) = options.initial_size();
    let event_loop = EventLoopBuilder::new().build();
    let window = WindowBuilder::new()
        .with_title(options.title())
        .with_inner_size(LogicalSize::new(
            initial_width as f64,
            initial_height as f64,
        ))
        .build(&event_loop)
        .context("failed to create window")?;
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)
        .context("failed to create pixel buffer")?;

    let screen = Rc::new(Cell::new(DemoScreen::Static));
    let mut app = AppShell::new({
        let screen = Rc::clone(&screen);
        move || match screen.get() {
            DemoScreen::Static => content_view(),
            DemoScreen::Conditional(flag) => conditional_view(flag),
        }
    });
    app.set_buffer_size(size.width, size.height);
    app.set_viewport(size.width as f32, size.height as f32);
    let background = options.background();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    app.set_buffer_size(new_size.width, new_size.height);
                    app.set_viewport(new_size.width as f32, new_size.height as f32);
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    if let Err(err) =
                        pixels.resize_surface(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) =
                        pixels.resize_buffer(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    app.set_buffer_size(new_inner_size.width, new_inner_size.height);
                    app.set_viewport(new_inner_size.width as f32, new_inner_size.height as f32);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    let Some(keycode) = input.virtual_keycode else {
                        return;
                    };
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match keycode {
                        VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                        VirtualKeyCode::D => app.log_debug_info(),
                        VirtualKeyCode::Tab => {
                            screen.set(screen.get().next_screen());
                            app.invalidate();
                        }
                        VirtualKeyCode::Space => {
                            screen.set(screen.get().toggle_flag());
                            app.invalidate();
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if app.should_render() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let (buffer_width, buffer_height) = app.buffer_size();
                if let Err(err) = draw_scene(
                    pixels.frame_mut(),
                    buffer_width,
                    buffer_height,
                    app.scene(),
                    background,
                ) {
                    log::error!("failed to draw scene: {err}");
                }
                app.mark_rendered();
                if let Err(err) = pixels.render() {
                    log::error!("pixels render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
