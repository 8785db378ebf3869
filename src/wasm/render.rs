use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer};

use super::shader::WaveProgram;
use super::texture::{self, Texture};
use crate::error::RenderError;
use crate::frame::FrameClock;
use crate::grid::Grid;
use crate::mesh::{build_mesh, Mesh, Vertex, VERTEX_COUNT};
use crate::Config;

/// Everything the frame loop needs. Owned by the animation-frame closure.
pub struct Renderer {
    gl: GL,
    program: WaveProgram,
    vbo: WebGlBuffer,
    texture: Texture,
    clock: FrameClock,
}

/// Sets up geometry and the shader program, then starts the frame loop once
/// the atlas has loaded.
pub fn start(canvas: HtmlCanvasElement, config: Config) -> Result<(), RenderError> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or(RenderError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| RenderError::ContextUnavailable)?;

    canvas.set_width(config.canvas_size);
    canvas.set_height(config.canvas_size);
    gl.viewport(0, 0, config.canvas_size as i32, config.canvas_size as i32);

    let seed = config
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
    log::info!("wave offsets seeded with {seed}");

    let grid = Grid::generate(&mut fastrand::Rng::with_seed(seed));
    let mesh = build_mesh(&grid).assign_texels(config.texel_mapping);

    let program = WaveProgram::new(&gl)?;
    gl.use_program(Some(&program.program));
    let vbo = upload_mesh(&gl, &mesh)?;
    bind_attributes(&gl, &program);
    gl.uniform1i(Some(&program.uniforms.texmap), 0);

    gl.enable(GL::BLEND);
    gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

    let clock = FrameClock::new(config.quadrant_period);
    texture::load(gl.clone(), &config.texture_url, move |loaded| {
        let texture = match loaded {
            Ok(texture) => texture,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };
        log::info!("atlas loaded ({}x{})", texture.width, texture.height);

        let renderer = Renderer {
            gl,
            program,
            vbo,
            texture,
            clock,
        };
        if let Err(e) = run(renderer) {
            log::error!("{e}");
        }
    })
}

fn upload_mesh(gl: &GL, mesh: &Mesh) -> Result<WebGlBuffer, RenderError> {
    let vbo = gl.create_buffer().ok_or(RenderError::Creation("buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
    gl.buffer_data_with_u8_array(GL::ARRAY_BUFFER, mesh.as_bytes(), GL::STATIC_DRAW);
    log::info!("uploaded {} vertices", mesh.len());
    Ok(vbo)
}

fn bind_attributes(gl: &GL, program: &WaveProgram) {
    let attrs = program.attributes;
    for (location, size, offset) in [
        (attrs.position, 2, Vertex::POSITION_OFFSET),
        (attrs.texel, 2, Vertex::TEXEL_OFFSET),
        (attrs.offset, 1, Vertex::OFFSET_OFFSET),
    ] {
        gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, Vertex::STRIDE, offset);
        gl.enable_vertex_attrib_array(location);
    }
}

/// Writes this frame's uniforms and draws the strip.
pub fn draw_frame(renderer: &mut Renderer) {
    if renderer.clock.quadrant_changed() {
        log::debug!(
            "frame {}: atlas quadrant {}",
            renderer.clock.frame_count(),
            renderer.clock.quadrant(renderer.clock.frame_count())
        );
    }
    let uniforms = renderer.clock.tick();
    let gl = &renderer.gl;

    gl.clear_color(0.0, 0.0, 0.0, 1.0);
    gl.clear(GL::COLOR_BUFFER_BIT);

    gl.use_program(Some(&renderer.program.program));
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&renderer.vbo));
    gl.active_texture(GL::TEXTURE0);
    gl.bind_texture(GL::TEXTURE_2D, Some(&renderer.texture.texture));

    let [shift_s, shift_t] = uniforms.shift;
    gl.uniform1f(Some(&renderer.program.uniforms.angle), uniforms.angle);
    gl.uniform2f(Some(&renderer.program.uniforms.shift), shift_s, shift_t);

    gl.draw_arrays(GL::TRIANGLE_STRIP, 0, VERTEX_COUNT as i32);
}

fn run(mut renderer: Renderer) -> Result<(), RenderError> {
    let window = window().ok_or(RenderError::MissingWindow)?;

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        draw_frame(&mut renderer);

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("animation loop stopped: {}", RenderError::from(e));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }
    Ok(())
}
