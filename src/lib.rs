#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod mesh;

pub use config::Config;
pub use error::RenderError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::{Config, RenderError};

    mod render;
    pub mod shader;
    mod texture;

    impl From<JsValue> for RenderError {
        fn from(value: JsValue) -> Self {
            RenderError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
        }
    }

    impl From<RenderError> for JsValue {
        fn from(err: RenderError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or(RenderError::MissingWindow)?;
        let query = window.location().search().unwrap_or_default();
        let (config, errors) = Config::from_query(&query);

        console_log::init_with_level(config.log_level).ok();
        for e in &errors {
            log::warn!("{e}, using default");
        }

        let document = window.document().ok_or(RenderError::MissingDocument)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| RenderError::MissingCanvas(config.canvas_id.clone()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        render::start(canvas, config).map_err(|e| {
            log::error!("{e}");
            e.into()
        })
    }
}
