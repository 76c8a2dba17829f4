// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::MAX_IMAGE_SIZE;
use crate::config::FuelConfig;
use crate::errors::{RuntimeError, RuntimeResult, StagingError, StagingResult};
use crate::runtime::loader::load_module_bytes;
use crate::traits::RenderRuntime;
use std::path::Path;
use wasmtime::*;

/// The renderer module, instantiated and ready to accept file images.
///
/// Owns the wasmtime store, the module's exported linear memory, and the
/// typed entry points. All pointers handed out by [`RenderRuntime`]
/// methods are offsets into that linear memory and stay inside this type
/// and the staging layer.
pub struct WasmRenderer {
    store: Store<()>,
    memory: Memory,
    allocate: TypedFunc<i32, i32>,
    deallocate: TypedFunc<i32, ()>,
    load_file_image: TypedFunc<(i32, i32, i32, i32), i32>,
    clear_scene: TypedFunc<(), ()>,
    reset_view: TypedFunc<(), ()>,
    render: TypedFunc<(), ()>,
}

impl WasmRenderer {
    /// Load, compile, and instantiate a renderer module from disk.
    pub fn from_file<P: AsRef<Path>>(path: P, fuel: &FuelConfig) -> RuntimeResult<Self> {
        let bytes = load_module_bytes(path)?;
        Self::from_bytes(&bytes, fuel)
    }

    /// Compile and instantiate a renderer module from raw bytes.
    ///
    /// The module must export `memory`, `allocate`, `deallocate`,
    /// `load_file_image`, `clear_scene`, `reset_view`, and `render` with
    /// the expected signatures.
    pub fn from_bytes(bytes: &[u8], fuel: &FuelConfig) -> RuntimeResult<Self> {
        let engine = Self::create_engine()?;
        let module =
            Module::new(&engine, bytes).map_err(|e| RuntimeError::Module(e.to_string()))?;

        let mut store = Store::new(&engine, ());
        store.set_fuel(fuel.validate_and_clamp(fuel.get_default()))?;

        let instance = Instance::new(&mut store, &module, &[])
            .map_err(|e| RuntimeError::Module(e.to_string()))?;

        let memory = instance
            .get_memory(&mut store, "memory")
            .ok_or(RuntimeError::MissingExport("memory"))?;
        let allocate = instance
            .get_typed_func::<i32, i32>(&mut store, "allocate")
            .map_err(|_| RuntimeError::MissingExport("allocate"))?;
        let deallocate = instance
            .get_typed_func::<i32, ()>(&mut store, "deallocate")
            .map_err(|_| RuntimeError::MissingExport("deallocate"))?;
        let load_file_image = instance
            .get_typed_func::<(i32, i32, i32, i32), i32>(&mut store, "load_file_image")
            .map_err(|_| RuntimeError::MissingExport("load_file_image"))?;
        let clear_scene = instance
            .get_typed_func::<(), ()>(&mut store, "clear_scene")
            .map_err(|_| RuntimeError::MissingExport("clear_scene"))?;
        let reset_view = instance
            .get_typed_func::<(), ()>(&mut store, "reset_view")
            .map_err(|_| RuntimeError::MissingExport("reset_view"))?;
        let render = instance
            .get_typed_func::<(), ()>(&mut store, "render")
            .map_err(|_| RuntimeError::MissingExport("render"))?;

        Ok(Self {
            store,
            memory,
            allocate,
            deallocate,
            load_file_image,
            clear_scene,
            reset_view,
            render,
        })
    }

    fn create_engine() -> RuntimeResult<Engine> {
        let mut config = Config::new();
        config.consume_fuel(true);
        Engine::new(&config).map_err(|e| RuntimeError::Engine(e.to_string()))
    }
}

impl RenderRuntime for WasmRenderer {
    fn allocate(&mut self, size: usize) -> StagingResult<u32> {
        let len = i32::try_from(size).map_err(|_| StagingError::SizeLimit {
            size: size as u64,
            max: MAX_IMAGE_SIZE,
        })?;
        let ptr = self
            .allocate
            .call(&mut self.store, len)
            .map_err(|e| StagingError::Allocation(format!("allocate({}) failed: {}", len, e)))?;
        u32::try_from(ptr).map_err(|_| {
            StagingError::Allocation(format!("allocate({}) returned invalid pointer {}", len, ptr))
        })
    }

    fn write(&mut self, ptr: u32, offset: usize, bytes: &[u8]) -> StagingResult<()> {
        let start = (ptr as usize)
            .checked_add(offset)
            .ok_or_else(|| StagingError::Memory("destination address overflow".to_string()))?;
        self.memory
            .write(&mut self.store, start, bytes)
            .map_err(|e| {
                StagingError::Memory(format!(
                    "write of {} bytes at {:#x} failed: {}",
                    bytes.len(),
                    start,
                    e
                ))
            })
    }

    fn release(&mut self, ptr: u32) -> StagingResult<()> {
        self.deallocate
            .call(&mut self.store, ptr as i32)
            .map_err(|e| StagingError::Memory(format!("deallocate({:#x}) failed: {}", ptr, e)))
    }

    fn load_file_image(&mut self, name: &str, ptr: u32, len: usize) -> StagingResult<()> {
        let name_bytes = name.as_bytes();
        let data_len = i32::try_from(len).map_err(|_| StagingError::SizeLimit {
            size: len as u64,
            max: MAX_IMAGE_SIZE,
        })?;
        let name_len = i32::try_from(name_bytes.len()).map_err(|_| {
            StagingError::Memory(format!(
                "file name of {} bytes cannot be passed to the runtime",
                name_bytes.len()
            ))
        })?;

        // The name travels through runtime memory too.
        let name_ptr = if name_bytes.is_empty() {
            0
        } else {
            let ptr = RenderRuntime::allocate(self, name_bytes.len())?;
            if ptr == 0 {
                return Err(StagingError::Allocation(
                    "runtime allocator returned a null pointer for the file name".to_string(),
                ));
            }
            if let Err(error) = self.write(ptr, 0, name_bytes) {
                let _ = self.release(ptr);
                return Err(error);
            }
            ptr
        };

        let called = self
            .load_file_image
            .call(&mut self.store, (name_ptr as i32, name_len, ptr as i32, data_len));
        if name_ptr != 0 {
            let _ = self.release(name_ptr);
        }

        let status =
            called.map_err(|e| StagingError::Runtime(format!("load_file_image failed: {}", e)))?;
        if status == 0 {
            return Err(StagingError::Consumer(format!(
                "renderer rejected file image '{}'",
                name
            )));
        }
        Ok(())
    }

    fn clear_scene(&mut self) -> StagingResult<()> {
        self.clear_scene
            .call(&mut self.store, ())
            .map_err(|e| StagingError::Runtime(format!("clear_scene failed: {}", e)))
    }

    fn reset_view(&mut self) -> StagingResult<()> {
        self.reset_view
            .call(&mut self.store, ())
            .map_err(|e| StagingError::Runtime(format!("reset_view failed: {}", e)))
    }

    fn render(&mut self) -> StagingResult<()> {
        self.render
            .call(&mut self.store, ())
            .map_err(|e| StagingError::Runtime(format!("render failed: {}", e)))
    }
}
