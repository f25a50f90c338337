//! Browser glue: location hash, history, scrolling, clipboard, colour scheme.
//!
//! Native builds get inert fallbacks so the shared UI still compiles and can
//! be rendered outside a browser.

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    pub fn current_hash() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn go_back() {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.back() {
                tracing::warn!("history.back failed: {e:?}");
            }
        }
    }

    pub fn system_prefers_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    pub fn set_dark_class(dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(e) = result {
            tracing::warn!("failed to update theme class: {e:?}");
        }
    }

    pub async fn copy_text(text: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("clipboard write failed: {e:?}");
                false
            }
        }
    }

    /// A `hashchange` listener, removed on drop.
    pub struct HashListener {
        closure: Closure<dyn FnMut()>,
    }

    impl HashListener {
        pub fn install(mut on_change: impl FnMut(String) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let closure = Closure::<dyn FnMut()>::new(move || on_change(current_hash()));
            window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
                .map_err(|e| tracing::error!("failed to listen for hashchange: {e:?}"))
                .ok()?;
            Some(Self { closure })
        }
    }

    impl Drop for HashListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "hashchange",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod web {
    pub fn current_hash() -> String {
        String::new()
    }

    pub fn scroll_to_top() {}

    pub fn go_back() {}

    pub fn system_prefers_dark() -> bool {
        false
    }

    pub fn set_dark_class(_dark: bool) {}

    pub async fn copy_text(_text: &str) -> bool {
        false
    }

    pub struct HashListener;

    impl HashListener {
        pub fn install(_on_change: impl FnMut(String) + 'static) -> Option<Self> {
            None
        }
    }
}

pub use web::*;
