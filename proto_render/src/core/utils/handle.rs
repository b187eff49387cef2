use std::fmt::Debug;

/// Handles for GPU resources like buffers, vertex arrays and shaders.
///
/// We use a concrete type to ensure that resource handles are always of the
/// same type no matter the backend. The generation counter detects stale
/// handles after a slot has been freed and reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    #[inline(always)]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline(always)]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[inline(always)]
    fn array_index(&self) -> usize {
        self.index as usize
    }
}

struct AllocatorEntry<V> {
    value: Option<V>,
    generation: u32,
}

/// Generational index allocator backing every resource handle the render
/// backend gives out
pub struct Allocator<V> {
    entries: Vec<AllocatorEntry<V>>,
    free: Vec<usize>,
}

impl<V> Default for Allocator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Allocator<V> {
    const INITIAL_SIZE: usize = 64;

    pub fn new() -> Self {
        Allocator {
            entries: Vec::with_capacity(Self::INITIAL_SIZE),
            free: Vec::new(),
        }
    }

    pub fn allocate(&mut self, value: V) -> Handle {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index];
            entry.value = Some(value);
            return Handle {
                index: index as u32,
                generation: entry.generation,
            };
        }

        let index = self.entries.len();
        self.entries.push(AllocatorEntry {
            value: Some(value),
            generation: 0,
        });

        Handle {
            index: index as u32,
            generation: 0,
        }
    }

    /// A handle is live when its slot still holds a value from the same
    /// allocation that produced the handle
    #[inline(always)]
    pub fn is_live(&self, key: Handle) -> bool {
        match self.entries.get(key.array_index()) {
            Some(entry) => entry.generation == key.generation() && entry.value.is_some(),
            None => false,
        }
    }

    pub fn free(&mut self, key: Handle) {
        debug_assert!(self.is_live(key), "Trying to free dead handle");

        let index = key.array_index();
        let entry = &mut self.entries[index];
        entry.value = None;
        entry.generation += 1;
        self.free.push(index);
    }

    pub fn get(&self, key: Handle) -> &V {
        debug_assert!(self.is_live(key), "Trying to access dead handle");
        self.entries[key.array_index()]
            .value
            .as_ref()
            .expect("Trying to access dead handle")
    }

    pub fn get_mut(&mut self, key: Handle) -> &mut V {
        debug_assert!(self.is_live(key), "Trying to access dead handle");
        self.entries[key.array_index()]
            .value
            .as_mut()
            .expect("Trying to access dead handle")
    }
}
