use wasm_bindgen::prelude::*;

use crate::core::SimError;
use crate::domain::config::PhysicsConfig;
use crate::domain::pages::Page;
use crate::domain::shape::{Bounds, ShapeDescriptor};

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn js_err(e: SimError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn page(name: &str) -> Result<Page, JsValue> {
    Page::parse(name).ok_or_else(|| JsValue::from_str(&format!("unknown page '{name}'")))
}

fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u64 ^ (js_sys::Date::now() as u64)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5eed_f1a7
    }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default tunables
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::with_seed(PhysicsConfig::default(), session_seed()),
        }
    }

    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(json: &str) -> Result<Simulation, JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(js_err)?;
        Ok(Self {
            core: SimulationCore::with_seed(config, session_seed()),
        })
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            core: SimulationCore::with_seed(PhysicsConfig::default(), seed as u64),
        }
    }

    /// Build bodies from a JSON array of `{left, top, width, height, color}`.
    /// Returns the number of bodies created (0 if already initialized).
    pub fn initialize(&mut self, shapes_json: &str, width: f32, height: f32) -> Result<u32, JsValue> {
        let shapes = ShapeDescriptor::list_from_json(shapes_json).map_err(js_err)?;
        let bounds = Bounds::new(width, height).map_err(js_err)?;
        let created = self.core.initialize(&shapes, bounds).map_err(js_err)?;
        Ok(created as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame_count() }

    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.core.config()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(js_err)?;
        self.core.set_config(config).map_err(js_err)
    }

    /// Enable or disable per-step perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === LOOP ===

    pub fn start(&mut self) -> bool {
        self.core.start()
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn resume(&mut self) {
        self.core.resume();
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.core.state() == super::LoopState::Paused
    }

    /// Call from `requestAnimationFrame`; keep scheduling while it returns true
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.core.frame(now_ms)
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let bounds = Bounds::new(width, height).map_err(js_err)?;
        self.core.resize(bounds);
        Ok(())
    }

    pub fn request_resize(&mut self, width: f32, height: f32, now_ms: f64) -> Result<(), JsValue> {
        self.core.request_resize(width, height, now_ms).map_err(js_err)
    }

    // === POINTER ===

    pub fn pointer_down(&mut self, id: u32, pointer_id: i32, x: f32, y: f32) -> Result<bool, JsValue> {
        self.core.pointer_down(id, pointer_id, x, y).map_err(js_err)
    }

    pub fn pointer_move(&mut self, id: u32, pointer_id: i32, x: f32, y: f32, now_ms: f64) -> Result<bool, JsValue> {
        self.core.pointer_move(id, pointer_id, x, y, now_ms).map_err(js_err)
    }

    /// Returns whether this pointer released the body
    pub fn pointer_up(&mut self, id: u32, pointer_id: i32) -> Result<bool, JsValue> {
        Ok(self.core.pointer_up(id, pointer_id).map_err(js_err)?.is_some())
    }

    pub fn pointer_cancel(&mut self, id: u32, pointer_id: i32) -> Result<bool, JsValue> {
        self.pointer_up(id, pointer_id)
    }

    pub fn pointer_enter(&mut self, id: u32, pointer_type: &str, now_ms: f64) -> Result<bool, JsValue> {
        self.core.pointer_enter(id, pointer_type, now_ms).map_err(js_err)
    }

    pub fn pointer_leave(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.pointer_leave(id).map_err(js_err)
    }

    // === PAGES ===

    pub fn switch_page(&mut self, from: &str, to: &str, now_ms: f64) -> Result<(), JsValue> {
        self.core.switch_page(page(from)?, page(to)?, now_ms).map_err(js_err)
    }

    pub fn active_page(&self) -> Option<String> {
        self.core.active_page().map(|p| p.name().to_string())
    }

    pub fn set_gallery_cards(&mut self, count: u32) {
        self.core.set_gallery_cards(count as usize);
    }

    /// True only the first time a card is revealed
    pub fn reveal_card(&mut self, card: u32) -> bool {
        self.core.reveal_card(card as usize)
    }

    // === OUTPUT ===

    /// Pointer to `[x, y, rotation]` triples (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms().as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms().len()
    }

    pub fn transform_css(&self, id: u32) -> Result<String, JsValue> {
        self.core.transform_css(id).map_err(js_err)
    }

    /// Queued particle bursts as JSON; empties the queue
    pub fn drain_effects_json(&mut self) -> Result<String, JsValue> {
        let bursts = self.core.drain_effects();
        serde_json::to_string(&bursts).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
