#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::WebGl2RenderingContext as GL;

use waves_wasm::error::{RenderError, Stage};
use waves_wasm::wasm::shader::{compile_shader, WaveProgram};

wasm_bindgen_test_configure!(run_in_browser);

fn context() -> GL {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas
        .get_context("webgl2")
        .unwrap()
        .expect("WebGL2 not supported")
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn wave_program_links() {
    let gl = context();
    let program = WaveProgram::new(&gl).expect("wave program");
    let attrs = program.attributes;
    let max = gl
        .get_parameter(GL::MAX_VERTEX_ATTRIBS)
        .unwrap()
        .as_f64()
        .unwrap() as u32;
    let mut locations = vec![attrs.position, attrs.texel, attrs.offset];
    assert!(locations.iter().all(|&l| l < max));
    locations.sort();
    locations.dedup();
    assert_eq!(locations.len(), 3);
}

#[wasm_bindgen_test]
fn compile_failure_reports_log() {
    let gl = context();
    let err = compile_shader(&gl, Stage::Fragment, "void main() { undeclared; }").unwrap_err();
    match err {
        RenderError::Compile { stage, log } => {
            assert_eq!(stage, Stage::Fragment);
            assert!(!log.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}
