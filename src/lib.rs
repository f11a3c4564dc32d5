#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod state;
pub mod trail;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod dom;
    mod render;
    mod theme;
    mod video;
    mod zoom;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        theme::init(&document)?;
        video::init(&document)?;
        zoom::init(&document)?;
        render::start(&document)?;

        log::info!("portfolio chrome ready");
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
