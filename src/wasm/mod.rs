use std::ops::ControlFlow;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::mesh::SphereMesh;
use crate::random;
use crate::{InstanceBuffer, InstanceSlot, ParticleField, WaveConfig};

mod frame;
mod render;

use render::Renderer;

const CANVAS_ID: &str = "c";
const SPHERE_SEGMENTS: u16 = 12;
const SPHERE_RINGS: u16 = 8;

/// Everything the frame loop owns.
struct Wave {
    field: ParticleField<InstanceSlot>,
    scene: InstanceBuffer,
    renderer: Renderer,
}

impl Wave {
    fn frame(&mut self, timestamp: f64) -> ControlFlow<()> {
        self.field.tick(timestamp, &mut self.scene);
        match self.renderer.draw(&self.scene) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                log::error!("draw failed, stopping: {err:?}");
                ControlFlow::Break(())
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("canvas not found")?
        .dyn_into::<HtmlCanvasElement>()?;

    let config = read_config(&canvas);
    // rAF timestamps share performance.now()'s origin
    let now = window.performance().ok_or("no performance")?.now();

    let mut scene = InstanceBuffer::with_capacity(config.particle_count);
    let field = match config.seed {
        Some(seed) => ParticleField::spawn(&config, &mut random::seeded(seed), now, &mut scene),
        None => ParticleField::spawn(&config, &mut rand::thread_rng(), now, &mut scene),
    };

    let mesh = SphereMesh::uv(SPHERE_SEGMENTS, SPHERE_RINGS);
    let renderer = Renderer::new(canvas, &mesh, scene.len())?;

    let wave = Wave {
        field,
        scene,
        renderer,
    };
    frame::run(wave, Wave::frame)
}

fn read_config(canvas: &HtmlCanvasElement) -> WaveConfig {
    let Some(src) = canvas.get_attribute("data-config") else {
        return WaveConfig::default();
    };
    match WaveConfig::from_json(&src) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring data-config ({err}), using defaults");
            WaveConfig::default()
        }
    }
}
