use std::time::Instant;

use crate::core::layer::{LayerID, LayerManager, LayerPtr};
use crate::core::locking::RwLock;
use crate::core::rendering::render_api::RenderCommand;
use crate::core::rendering::Render;
use crate::core::time::Time;
use crate::core::windowing::events::{Event, Type};
use crate::core::windowing::window_manager::WindowManager;
/// This module implements the entire Application workflow.
/// Put any glue code between parts of our application here
use lazy_static::lazy_static;

pub struct App {
    is_initialized: bool,
    time: Time,
    running: bool,
    layer_manager: LayerManager,
}

lazy_static! {
    static ref APP: RwLock<App> = RwLock::new(App::new());
}

impl App {
    fn new() -> Self {
        App {
            is_initialized: false,
            time: Time::new(Instant::now()),
            running: false,
            layer_manager: Default::default(),
        }
    }

    /// Initialize the application state. Expected to run before the window
    /// and the render backend are created
    pub fn initialize() {
        let mut global_app = APP.write();
        if global_app.is_initialized {
            // Already initialized
            return;
        }

        log::info!("Initializing app!");
        global_app.init();
    }

    pub fn is_initialized() -> bool {
        App::get().read().is_initialized
    }

    pub fn get() -> &'static RwLock<App> {
        &APP
    }

    pub fn run_application() {
        let mut global_app = APP.write();
        log::info!("Starting to run application!");
        global_app.run();
    }

    pub fn add_layer(layer: LayerPtr) -> LayerID {
        let mut global_app = APP.write();
        global_app.layer_manager.attach_layer(layer)
    }

    /// Entry point for events coming from the windowing system
    pub fn on_event(&mut self, event: &mut Event) {
        match event.event_type() {
            Type::WindowClose => {
                self.running = false;
                event.mark_handled();
            }
            Type::WindowResize { width, height } => {
                Render::on_window_resize(width, height);
            }
        }

        for layer in self.layer_manager.layers_iter_mut() {
            if event.is_handled() {
                break;
            }
            layer.layer.on_event(event);
        }
    }

    fn init(&mut self) {
        self.is_initialized = true;
        self.running = true;
        self.time = Time::new(Instant::now());
    }

    fn run(&mut self) {
        while self.running {
            self.time.step(Instant::now());
            let delta_time = self.time.delta_seconds();

            // If layers were requested in runtime, add them just before the
            // next frame. Most of the time this returns immediately
            self.layer_manager.attach_pending_layers();

            {
                let mut window_manager = WindowManager::get().write();
                window_manager.get_window_mut().handle_window_events(self);
            }

            for layer in self.layer_manager.layers_iter_mut() {
                layer.layer.update(delta_time);
            }

            // Draw the next frame and present it
            RenderCommand::clear();
            for layer in self.layer_manager.layers_iter_mut() {
                layer.layer.render();
            }

            {
                let mut window_manager = WindowManager::get().write();
                window_manager.get_window_mut().on_update();
            }

            self.layer_manager.detach_pending_layers();
        }

        // Closing the application, detach all layers
        self.layer_manager.detach_all_layers();
    }
}
