// ============================================================================
// APP - Root scope: owns AppState and the two mount points
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, StorageEvent};

use crate::dom::{
    append_child, clear_children, current_path, get_element_by_id, on_window_event, push_history,
    replace_children, ElementBuilder,
};
use crate::state::{is_session_key, AppState, Route, SessionSignal};
use crate::viewmodels::{NavBarModel, NavBarViewModel};
use crate::views::{render_navbar, render_page};

pub struct App {
    state: AppState,
    navbar_root: Element,
    page_root: Element,
}

impl App {
    /// Mount into `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
        clear_children(&root);

        let navbar_root = ElementBuilder::new("header")?.id("navbar-root")?.build();
        let page_root = ElementBuilder::new("main")?.id("page-root")?.class("page-root").build();
        append_child(&root, &navbar_root)?;
        append_child(&root, &page_root)?;

        Ok(Self {
            state: AppState::from_browser(),
            navbar_root,
            page_root,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Redraw navbar and page from current state
    pub fn render(&self) -> Result<(), JsValue> {
        self.render_navbar(&NavBarViewModel::new(&self.state).model())?;
        self.render_page()
    }

    pub fn render_navbar(&self, model: &NavBarModel) -> Result<(), JsValue> {
        let navbar = render_navbar(&self.state, model)?;
        replace_children(&self.navbar_root, &navbar)
    }

    pub fn render_page(&self) -> Result<(), JsValue> {
        let page = render_page(&self.state)?;
        replace_children(&self.page_root, &page)
    }

    /// Navbar follows the session and route; route changes also sync the URL
    /// and swap the page. Register once.
    pub fn wire(app: &Rc<App>) -> Result<(), JsValue> {
        {
            let weak = Rc::downgrade(app);
            NavBarViewModel::new(&app.state).watch(move |model| {
                if let Some(app) = weak.upgrade() {
                    if let Err(e) = app.render_navbar(&model) {
                        log::error!("❌ [APP] Navbar render failed: {:?}", e);
                    }
                }
            });
        }

        {
            let weak = Rc::downgrade(app);
            app.state.routes.subscribe(move |route: &Route| {
                if current_path() != route.path() {
                    if let Err(e) = push_history(route.path()) {
                        log::warn!("⚠️ [APP] pushState failed: {:?}", e);
                    }
                }
                if let Some(app) = weak.upgrade() {
                    if let Err(e) = app.render_page() {
                        log::error!("❌ [APP] Render failed: {:?}", e);
                    }
                }
            });
        }

        // Token changes made by another tab
        {
            let session = app.state.session.clone();
            on_window_event("storage", move |event: Event| {
                let relevant = event
                    .dyn_ref::<StorageEvent>()
                    .map(|storage| is_session_key(storage.key().as_deref()))
                    .unwrap_or(true);
                if relevant {
                    session.publish(SessionSignal::StorageChanged);
                }
            })?;
        }

        // Back / forward
        {
            let routes = app.state.routes.clone();
            on_window_event("popstate", move |_| routes.navigate(Route::from_path(&current_path())))?;
        }

        Ok(())
    }
}
