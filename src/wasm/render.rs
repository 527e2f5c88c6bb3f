use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::camera::Camera;
use crate::mesh::{SphereMesh, VERTEX_STRIDE};
use crate::scene::{InstanceBuffer, INSTANCE_STRIDE};

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec4 a_instance; // xyz = centre, w = scale

uniform mat4 u_view_proj;

out vec3 v_normal;

void main() {
    v_normal = a_normal * sign(a_instance.w);
    vec3 world = a_position * a_instance.w + a_instance.xyz;
    gl_Position = u_view_proj * vec4(world, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec3 v_normal;

uniform vec3 u_color;
uniform vec3 u_light_dir;

out vec4 out_color;

void main() {
    float diffuse = max(dot(normalize(v_normal), u_light_dir), 0.0);
    out_color = vec4(u_color * (0.35 + 0.65 * diffuse), 1.0);
}
"#;

const PARTICLE_COLOR: [f32; 3] = [0.55, 0.75, 1.0];
const CLEAR_COLOR: [f32; 4] = [0.02, 0.03, 0.07, 1.0];

const FLOAT_BYTES: i32 = 4;

/// Draws every particle as an instance of one shared sphere.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    instances: WebGlBuffer,
    index_count: i32,
    u_view_proj: Option<WebGlUniformLocation>,
    camera: Camera,
    viewport: (u32, u32),
}

impl Renderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        mesh: &SphereMesh,
        capacity: usize,
    ) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        fit_to_window(&canvas)?;
        watch_resize(&canvas)?;

        gl.enable(GL::DEPTH_TEST);
        gl.disable(GL::CULL_FACE);

        let program = link_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let vao = gl.create_vertex_array().ok_or("failed to create VAO")?;
        gl.bind_vertex_array(Some(&vao));

        let vertices = gl.create_buffer().ok_or("failed to create vertex buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertices));
        gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &Float32Array::from(mesh.vertices.as_slice()),
            GL::STATIC_DRAW,
        );
        let stride = VERTEX_STRIDE as i32 * FLOAT_BYTES;
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(1, 3, GL::FLOAT, false, stride, 3 * FLOAT_BYTES);
        gl.enable_vertex_attrib_array(1);

        let indices = gl.create_buffer().ok_or("failed to create index buffer")?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &Uint16Array::from(mesh.indices.as_slice()),
            GL::STATIC_DRAW,
        );

        let instances = gl.create_buffer().ok_or("failed to create instance buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&instances));
        gl.buffer_data_with_i32(
            GL::ARRAY_BUFFER,
            (capacity * INSTANCE_STRIDE) as i32 * FLOAT_BYTES,
            GL::DYNAMIC_DRAW,
        );
        gl.vertex_attrib_pointer_with_i32(2, 4, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_divisor(2, 1);

        gl.bind_vertex_array(None);

        gl.use_program(Some(&program));
        let u_view_proj = gl.get_uniform_location(&program, "u_view_proj");
        let [r, g, b] = PARTICLE_COLOR;
        gl.uniform3f(gl.get_uniform_location(&program, "u_color").as_ref(), r, g, b);
        let light = glam::Vec3::new(0.4, 0.8, 0.6).normalize();
        gl.uniform3f(
            gl.get_uniform_location(&program, "u_light_dir").as_ref(),
            light.x,
            light.y,
            light.z,
        );

        let viewport = (canvas.width(), canvas.height());
        gl.viewport(0, 0, viewport.0 as i32, viewport.1 as i32);
        let camera = Camera::for_viewport(viewport.0 as f32, viewport.1 as f32);
        log::info!(
            "renderer ready: {}x{}, camera at z={:.1}",
            viewport.0,
            viewport.1,
            camera.distance
        );

        Ok(Self {
            canvas,
            gl,
            program,
            vao,
            instances,
            index_count: mesh.indices.len() as i32,
            u_view_proj,
            camera,
            viewport,
        })
    }

    /// Uploads this frame's instance data and draws it.
    pub fn draw(&mut self, scene: &InstanceBuffer) -> Result<(), JsValue> {
        self.sync_viewport();

        let gl = &self.gl;
        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            self.u_view_proj.as_ref(),
            false,
            &self.camera.view_projection().to_cols_array(),
        );

        gl.bind_vertex_array(Some(&self.vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.instances));
        gl.buffer_sub_data_with_i32_and_array_buffer_view(
            GL::ARRAY_BUFFER,
            0,
            &Float32Array::from(scene.as_slice()),
        );
        gl.draw_elements_instanced_with_i32(
            GL::TRIANGLES,
            self.index_count,
            GL::UNSIGNED_SHORT,
            0,
            scene.len() as i32,
        );
        gl.bind_vertex_array(None);

        match gl.get_error() {
            GL::NO_ERROR => Ok(()),
            code => Err(JsValue::from_str(&format!("WebGL error 0x{code:04x}"))),
        }
    }

    /// Picks up canvas size changes made by the resize listener.
    fn sync_viewport(&mut self) {
        let size = (self.canvas.width(), self.canvas.height());
        if size == self.viewport {
            return;
        }
        self.viewport = size;
        self.camera = Camera::for_viewport(size.0 as f32, size.1 as f32);
        self.gl.viewport(0, 0, size.0 as i32, size.1 as i32);
        log::debug!("viewport resized to {}x{}", size.0, size.1);
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let w = window.inner_width()?.as_f64().unwrap_or(1.0);
    let h = window.inner_height()?.as_f64().unwrap_or(1.0);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
    Ok(())
}

// Resize canvas to fit window
fn watch_resize(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = fit_to_window(&canvas) {
                log::warn!("resize failed: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    Ok(())
}

fn link_program(gl: &GL, vertex_src: &str, fragment_src: &str) -> Result<WebGlProgram, JsValue> {
    let vertex = compile_shader(gl, GL::VERTEX_SHADER, vertex_src)?;
    let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_src)?;
    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));
    if linked {
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown link error".to_string());
        Err(JsValue::from_str(&format!("failed to link program: {info}")))
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown compile error".to_string());
        Err(JsValue::from_str(&format!("failed to compile shader: {info}")))
    }
}
