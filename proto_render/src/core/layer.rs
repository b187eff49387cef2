use core::slice::{Iter, IterMut};
/// Layers implement user behavior. They provide an API
/// that is called by the engine each iteration. A proto-render application
/// is basically a collection of layers provided by the user.
///
/// Layers take care of events, updates and drawing.
use proto_render::core::windowing::events::Event;
use scc::Queue;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

pub type LayerPtr = Box<dyn Layer>;

pub trait Layer: Send + Sync {
    fn on_attach(&mut self);

    fn on_detach(&mut self);

    fn update(&mut self, delta_time: f32);

    /// Issue the draw calls for this layer. Called once per frame after
    /// every layer has been updated and the framebuffer has been cleared
    fn render(&mut self);

    fn on_event(&mut self, event: &mut Event);
}

pub struct LayerContainer {
    pub layer: LayerPtr,
    pub id: LayerID,
}
pub type LayerStack = Vec<LayerContainer>;
pub type LayerID = u32;

#[derive(Default)]
pub struct LayerManager {
    layers: LayerStack,
    layers_to_attach: Queue<(LayerID, LayerPtr)>,
    next_layer_id: AtomicU32,
    layers_to_detach: Queue<LayerID>,
}

impl LayerManager {
    pub fn attach_layer(&mut self, layer: LayerPtr) -> LayerID {
        let id = self.next_layer_id.fetch_add(1, Ordering::Relaxed);
        self.layers_to_attach.push((id, layer));
        id
    }

    pub fn attach_pending_layers(&mut self) {
        while let Some(mut entry) = self.layers_to_attach.pop() {
            let (id, mut layer) = unsafe { entry.get_mut().unwrap().take_inner() };
            layer.on_attach();
            self.layers.push(LayerContainer { layer, id });
        }
    }

    pub fn detach_layer(&mut self, layer_id: LayerID) {
        self.layers_to_detach.push(layer_id);
    }

    pub fn detach_pending_layers(&mut self) {
        let mut to_detach = vec![];
        while let Some(entry) = self.layers_to_detach.pop() {
            let layer_id = **entry.as_ref();
            to_detach.push(layer_id);

            for layer in self.layers.iter_mut() {
                if layer.id == layer_id {
                    layer.layer.on_detach();
                }
            }
        }

        self.layers.retain(|layer| !to_detach.contains(&layer.id));
    }

    /// Detach every layer, used when the application shuts down
    pub fn detach_all_layers(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.layer.on_detach();
        }
        self.layers.clear();
    }

    #[inline(always)]
    pub fn layers_iter(&self) -> Iter<'_, LayerContainer> {
        self.layers.iter()
    }

    #[inline(always)]
    pub fn layers_iter_mut(&mut self) -> IterMut<'_, LayerContainer> {
        self.layers.iter_mut()
    }
}
