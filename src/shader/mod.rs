//! Full-screen WebGL canvas running the hero terrain shader.

pub mod clock;
pub mod source;
pub mod viewport;

use log::info;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

use crate::motion::FrameLoop;
use clock::ShaderClock;

/// Two triangles covering clip space, drawn as a strip.
const QUAD: [f32; 8] = [-1.0, 1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0];

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("WebGL not supported")]
    Unsupported,
    #[error("canvas refused a webgl context: {0}")]
    Context(String),
    #[error("could not allocate {0}")]
    Allocation(&'static str),
    #[error("shader compilation failed: {0}")]
    Compile(String),
    #[error("unable to initialize the shader program: {0}")]
    Link(String),
    #[error("program has no attribute {0}")]
    MissingAttribute(&'static str),
}

/// GL objects owned by a running canvas. Released when the frame loop that
/// owns the scene is dropped.
struct Scene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    buffer: WebGlBuffer,
    position: u32,
    resolution: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    clock: ShaderClock,
}

impl Scene {
    fn draw(&mut self, now_ms: f64) {
        let gl = &self.gl;
        let current = (self.canvas.width(), self.canvas.height());
        if let Some((width, height)) = viewport::resize_target(
            self.canvas.client_width(),
            self.canvas.client_height(),
            current,
        ) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            gl.viewport(0, 0, gl.drawing_buffer_width(), gl.drawing_buffer_height());
        }

        gl.use_program(Some(&self.program));
        gl.enable_vertex_attrib_array(self.position);
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        gl.vertex_attrib_pointer_with_i32(self.position, 2, GL::FLOAT, false, 0, 0);

        gl.uniform3f(
            self.resolution.as_ref(),
            self.canvas.width() as f32,
            self.canvas.height() as f32,
            1.0,
        );
        gl.uniform1f(self.time.as_ref(), self.clock.tick(now_ms));

        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
        self.gl.delete_program(Some(&self.program));
    }
}

/// Sets up the terrain shader on `canvas` and starts drawing every frame.
///
/// Nothing is scheduled unless setup succeeds, and every GL object created
/// before a failure is deleted again. Dropping the returned loop stops
/// rendering and frees the GL objects.
pub fn mount(canvas: HtmlCanvasElement) -> Result<FrameLoop, ShaderError> {
    let gl: GL = canvas
        .get_context("webgl")
        .map_err(|e| ShaderError::Context(format!("{:?}", e)))?
        .ok_or(ShaderError::Unsupported)?
        .dyn_into()
        .map_err(|_| ShaderError::Unsupported)?;

    let program = link_program(&gl, source::VERTEX, source::FRAGMENT)?;

    let position = gl.get_attrib_location(&program, "aVertexPosition");
    if position < 0 {
        gl.delete_program(Some(&program));
        return Err(ShaderError::MissingAttribute("aVertexPosition"));
    }
    let resolution = gl.get_uniform_location(&program, "iResolution");
    let time = gl.get_uniform_location(&program, "iTime");

    let Some(buffer) = gl.create_buffer() else {
        gl.delete_program(Some(&program));
        return Err(ShaderError::Allocation("vertex buffer"));
    };
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let vertices = js_sys::Float32Array::from(&QUAD[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

    let mut scene = Scene {
        gl,
        canvas,
        program,
        buffer,
        position: position as u32,
        resolution,
        time,
        clock: ShaderClock::new(),
    };
    info!("hero shader ready");
    Ok(FrameLoop::start(move |now| scene.draw(now)))
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, ShaderError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(ShaderError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown error".to_string());
        gl.delete_shader(Some(&shader));
        Err(ShaderError::Compile(log))
    }
}

fn link_program(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram, ShaderError> {
    let vs = compile_shader(gl, GL::VERTEX_SHADER, vertex)?;
    let fs = match compile_shader(gl, GL::FRAGMENT_SHADER, fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl.delete_shader(Some(&vs));
            return Err(e);
        }
    };

    let result = match gl.create_program() {
        Some(program) => {
            gl.attach_shader(&program, &vs);
            gl.attach_shader(&program, &fs);
            gl.link_program(&program);
            let linked = gl
                .get_program_parameter(&program, GL::LINK_STATUS)
                .as_bool()
                .unwrap_or(false);
            if linked {
                Ok(program)
            } else {
                let log = gl
                    .get_program_info_log(&program)
                    .unwrap_or_else(|| "unknown error".to_string());
                gl.delete_program(Some(&program));
                Err(ShaderError::Link(log))
            }
        }
        None => Err(ShaderError::Allocation("program")),
    };

    // The linked program keeps what it needs.
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));
    result
}
