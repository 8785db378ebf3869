use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlImageElement, WebGl2RenderingContext as GL, WebGlTexture};

use crate::error::RenderError;

/// The atlas, uploaded once and never replaced.
#[derive(Debug)]
pub struct Texture {
    pub texture: WebGlTexture,
    pub width: u32,
    pub height: u32,
}

/// Lets the browser decode the image at `url`, then uploads it and hands the
/// result to `on_ready`. `on_ready` runs exactly once, on success or failure.
pub fn load<F>(gl: GL, url: &str, on_ready: F) -> Result<(), RenderError>
where
    F: FnOnce(Result<Texture, RenderError>) + 'static,
{
    let image = HtmlImageElement::new()?;
    let on_ready = Rc::new(RefCell::new(Some(on_ready)));

    let onload = {
        let image = image.clone();
        let on_ready = on_ready.clone();
        Closure::once_into_js(move || {
            if let Some(on_ready) = on_ready.borrow_mut().take() {
                on_ready(upload(&gl, &image));
            }
        })
    };
    let onerror = {
        let url = url.to_owned();
        Closure::once_into_js(move || {
            if let Some(on_ready) = on_ready.borrow_mut().take() {
                on_ready(Err(RenderError::TextureLoad(url)));
            }
        })
    };

    image.set_onload(Some(onload.unchecked_ref()));
    image.set_onerror(Some(onerror.unchecked_ref()));
    image.set_src(url);
    Ok(())
}

fn upload(gl: &GL, image: &HtmlImageElement) -> Result<Texture, RenderError> {
    let texture = gl.create_texture().ok_or(RenderError::Creation("texture"))?;

    gl.active_texture(GL::TEXTURE0);
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    )?;

    Ok(Texture {
        texture,
        width: image.natural_width(),
        height: image.natural_height(),
    })
}
