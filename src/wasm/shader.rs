use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::{RenderError, Stage};

/// Displaces each vertex around its rest position on a small circle whose
/// phase is the frame angle plus the vertex's own offset.
pub const VERTEX_SHADER: &str = r#"
attribute vec2 a_position;
attribute vec2 a_texel;
attribute float a_offset;

uniform float u_angle;

varying vec2 v_texel;

void main() {
    v_texel = a_texel;
    float phase = radians(u_angle + a_offset);
    vec2 pos = a_position + vec2(cos(phase), sin(phase)) / 32.0;
    gl_Position = vec4(pos, 0.0, 1.1);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
precision mediump float;

varying vec2 v_texel;

uniform sampler2D u_texmap;
uniform vec2 u_shift;

void main() {
    gl_FragColor = texture2D(u_texmap, v_texel + u_shift);
}
"#;

/// Attribute locations of the wave program.
#[derive(Debug, Clone, Copy)]
pub struct Attributes {
    pub position: u32,
    pub texel: u32,
    pub offset: u32,
}

#[derive(Debug)]
pub struct Uniforms {
    pub angle: WebGlUniformLocation,
    pub shift: WebGlUniformLocation,
    pub texmap: WebGlUniformLocation,
}

#[derive(Debug)]
pub struct WaveProgram {
    pub program: WebGlProgram,
    pub attributes: Attributes,
    pub uniforms: Uniforms,
}

impl WaveProgram {
    pub fn new(gl: &GL) -> Result<Self, RenderError> {
        let vert = compile_shader(gl, Stage::Vertex, VERTEX_SHADER)?;
        let frag = compile_shader(gl, Stage::Fragment, FRAGMENT_SHADER)?;
        let program = link_program(gl, &vert, &frag)?;

        // the program keeps its own reference to the compiled stages
        gl.delete_shader(Some(&vert));
        gl.delete_shader(Some(&frag));

        let attributes = Attributes {
            position: attrib_location(gl, &program, "a_position")?,
            texel: attrib_location(gl, &program, "a_texel")?,
            offset: attrib_location(gl, &program, "a_offset")?,
        };
        let uniforms = Uniforms {
            angle: uniform_location(gl, &program, "u_angle")?,
            shift: uniform_location(gl, &program, "u_shift")?,
            texmap: uniform_location(gl, &program, "u_texmap")?,
        };

        Ok(Self {
            program,
            attributes,
            uniforms,
        })
    }
}

pub fn compile_shader(gl: &GL, stage: Stage, source: &str) -> Result<WebGlShader, RenderError> {
    let shader_type = match stage {
        Stage::Vertex => GL::VERTEX_SHADER,
        Stage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(shader_type)
        .ok_or(RenderError::Creation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| String::from("unknown error creating shader"));
        gl.delete_shader(Some(&shader));
        Err(RenderError::Compile { stage, log })
    }
}

pub fn link_program(
    gl: &GL,
    vert_shader: &WebGlShader,
    frag_shader: &WebGlShader,
) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::Creation("program"))?;

    gl.attach_shader(&program, vert_shader);
    gl.attach_shader(&program, frag_shader);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| String::from("unknown error creating program object"));
        gl.delete_program(Some(&program));
        Err(RenderError::Link(log))
    }
}

fn attrib_location(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<u32, RenderError> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location).map_err(|_| RenderError::MissingAttribute(name))
}

fn uniform_location(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, RenderError> {
    gl.get_uniform_location(program, name)
        .ok_or(RenderError::MissingUniform(name))
}
