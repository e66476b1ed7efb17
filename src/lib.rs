// ============================================================================
// ALIF MENTORSHIP HUB - FRONT-END (RUST + WASM, MVVM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: page state + UI logic
// - Services: API communication only
// - State: session, router, caches (Rc + interior mutability)
// - Models: shapes shared with the backend
// Everything except app/dom/views builds natively, so `cargo test` runs the
// logic without a browser.
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use wasm_entry::*;

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    thread_local! {
        static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
        log::info!("🚀 Alif Mentorship Hub - API at {}", CONFIG.api_base_url());

        let app = Rc::new(App::new()?);
        app.render()?;
        App::wire(&app)?;

        log::info!(
            "✅ [MAIN] Mounted (signed in: {})",
            app.state().session.is_authenticated()
        );

        APP.with(|cell| *cell.borrow_mut() = Some(app));
        Ok(())
    }

    /// Full re-render, callable from JavaScript
    #[wasm_bindgen]
    pub fn rerender_app() {
        APP.with(|cell| {
            if let Some(app) = cell.borrow().as_ref() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App not initialised");
            }
        });
    }
}
