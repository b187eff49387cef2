use std::any::Any;
use std::num::NonZeroU32;
use std::time::Duration;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
/// Winit implementation of the window trait object.
use proto_render::core::windowing::events::{Event, Type};
use proto_render::core::windowing::{Window, WindowDyn, WindowPtr};
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window as winit_Window, WindowBuilder as WinitWindowBuilder};

use crate::app::App;

pub struct WinitWindow {
    width: u32,
    height: u32,
    title: String,
    pub(crate) window: winit_Window,
    pub(crate) surface: Surface<WindowSurface>,
    pub(crate) context: PossiblyCurrentContext,
    event_loop: EventLoop<()>,
    use_vsync: bool,
}

// The window is created and driven from the main thread only, but it lives
// inside the window manager singleton which requires these bounds
unsafe impl Send for WinitWindow {}
unsafe impl Sync for WinitWindow {}

impl WindowDyn for WinitWindow {
    fn get_height(&self) -> u32 {
        self.height
    }

    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_title(&self) -> &str {
        &self.title
    }

    fn handle_window_events(&mut self, app: &mut App) {
        let mut events = Vec::new();
        self.event_loop.pump_events(Some(Duration::ZERO), |event, _target| {
            if let winit::event::Event::WindowEvent { event, .. } = event {
                if let Some(translated) = translate_event(&event) {
                    events.push(translated);
                }
            }
        });

        for mut event in events {
            if let Type::WindowResize { width, height } = event.event_type() {
                self.resize_surface(width, height);
            }
            app.on_event(&mut event);
        }
    }

    fn get_vsync(&self) -> bool {
        self.use_vsync
    }

    fn set_vsync(&mut self, is_vsync_active: bool) {
        if self.use_vsync == is_vsync_active {
            return;
        }

        let interval = swap_interval(is_vsync_active);
        match self.surface.set_swap_interval(&self.context, interval) {
            Ok(()) => self.use_vsync = is_vsync_active,
            Err(error) => log::warn!("Could not change vsync mode: {}", error),
        }
    }

    fn on_update(&mut self) {
        self.window.request_redraw();
        self.surface
            .swap_buffers(&self.context)
            .expect("Error swapping buffers");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Window for WinitWindow {
    fn create(window_builder: crate::core::windowing::WindowBuilder) -> WindowPtr {
        let props = window_builder;
        let window_builder = WinitWindowBuilder::new()
            .with_title(props.title.clone())
            .with_inner_size(LogicalSize::new(props.width, props.height))
            .with_decorations(true);

        let event_loop =
            EventLoop::new().expect("Could not build event loop for winit window");

        // Window creation. The config template asks for a depth buffer,
        // required by the depth test during 3D rendering
        let (window, cfg) = glutin_winit::DisplayBuilder::new()
            .with_window_builder(Some(window_builder))
            .build(
                &event_loop,
                ConfigTemplateBuilder::new().with_depth_size(24),
                |mut configs| configs.next().unwrap(),
            )
            .expect("Failed to create Winit Window");

        let window = window.expect("Failed to create Winit Window");

        // Context Creation
        let context_attrs = ContextAttributesBuilder::new().build(Some(window.raw_window_handle()));

        let context = unsafe {
            cfg.display()
                .create_context(&cfg, &context_attrs)
                .expect("Failed to create OpenGL Winit context")
        };

        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new()
            .with_srgb(Some(true))
            .build(
                window.raw_window_handle(),
                NonZeroU32::new(props.width).unwrap(),
                NonZeroU32::new(props.height).unwrap(),
            );
        let surface = unsafe {
            cfg.display()
                .create_window_surface(&cfg, &surface_attrs)
                .expect("Failed to create OpenGL surface for window")
        };

        let context = context
            .make_current(&surface)
            .expect("Error making OpenGL context the current context");

        if let Err(error) = surface.set_swap_interval(&context, swap_interval(true)) {
            log::warn!("Could not enable vsync: {}", error);
        }

        Box::new(WinitWindow {
            width: props.width,
            height: props.height,
            title: props.title,
            window,
            surface,
            context,
            event_loop,
            use_vsync: true,
        })
    }
}

impl WinitWindow {
    fn resize_surface(&mut self, width: u32, height: u32) {
        // Minimized windows report a zero-sized surface, which is not a
        // valid GL surface size
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;
        self.surface.resize(
            &self.context,
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );
    }
}

fn swap_interval(use_vsync: bool) -> SwapInterval {
    if use_vsync {
        SwapInterval::Wait(NonZeroU32::new(1).unwrap())
    } else {
        SwapInterval::DontWait
    }
}

fn translate_event(event: &winit::event::WindowEvent) -> Option<Event> {
    match event {
        winit::event::WindowEvent::CloseRequested => Some(Event::new(Type::WindowClose)),
        winit::event::WindowEvent::Resized(new_size) => Some(Event::new(Type::WindowResize {
            width: new_size.width,
            height: new_size.height,
        })),
        _ => None,
    }
}
