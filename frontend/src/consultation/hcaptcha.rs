use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, window, Event, HtmlScriptElement};

const SCRIPT_ELEMENT_ID: &str = "hcaptcha-api";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = hcaptcha, js_name = render, catch)]
    fn hcaptcha_render(container: &str, params: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = hcaptcha, js_name = getResponse, catch)]
    fn hcaptcha_get_response(widget_id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = hcaptcha, js_name = reset, catch)]
    fn hcaptcha_reset(widget_id: &str) -> Result<(), JsValue>;
}

/// Handle returned by `hcaptcha.render`.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetId(String);

#[derive(Serialize)]
pub struct RenderOptions<'a> {
    pub sitekey: &'a str,
    pub theme: &'a str,
}

/// True once the provider script has run and `window.hcaptcha` exists.
pub fn is_available() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("hcaptcha")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn render(container_id: &str, options: &RenderOptions) -> Result<WidgetId, JsValue> {
    let params = serde_wasm_bindgen::to_value(options)?;
    let id = hcaptcha_render(container_id, &params)?;
    // Widget ids are strings, but the first widget on a page is "0" in
    // some provider versions and comes back as a number.
    let id = id
        .as_string()
        .or_else(|| id.as_f64().map(|n| n.to_string()))
        .ok_or_else(|| JsValue::from_str("hcaptcha.render returned no widget id"))?;
    Ok(WidgetId(id))
}

/// The solved token, or an empty string while unsolved.
pub fn get_response(widget: &WidgetId) -> String {
    match hcaptcha_get_response(&widget.0) {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(e) => {
            gloo_console::error!("hcaptcha.getResponse failed:", e);
            String::new()
        }
    }
}

pub fn reset(widget: &WidgetId) {
    if let Err(e) = hcaptcha_reset(&widget.0) {
        gloo_console::error!("hcaptcha.reset failed:", e);
    }
}

/// A pending provider script load. Dropping it detaches the listeners so a
/// torn-down component is never called back.
pub struct ScriptLoad {
    script: HtmlScriptElement,
    on_load: Closure<dyn FnMut(Event)>,
    on_error: Closure<dyn FnMut(Event)>,
}

impl Drop for ScriptLoad {
    fn drop(&mut self) {
        let _ = self
            .script
            .remove_event_listener_with_callback("load", self.on_load.as_ref().unchecked_ref());
        let _ = self
            .script
            .remove_event_listener_with_callback("error", self.on_error.as_ref().unchecked_ref());
    }
}

/// Loads the provider script once per page.
///
/// If the provider is already on the page `on_ready` runs immediately and
/// `Ok(None)` is returned. A script tag left by an earlier mount is reused
/// rather than appended again.
pub fn load_script<R, E>(url: &str, on_ready: R, on_error: E) -> Result<Option<ScriptLoad>, JsValue>
where
    R: FnOnce() + 'static,
    E: FnOnce() + 'static,
{
    if is_available() {
        on_ready();
        return Ok(None);
    }

    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let script: HtmlScriptElement = match document.get_element_by_id(SCRIPT_ELEMENT_ID) {
        Some(existing) => existing.dyn_into()?,
        None => {
            let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
            script.set_id(SCRIPT_ELEMENT_ID);
            script.set_src(url);
            script.set_async(true);
            script.set_defer(true);
            let head = document
                .head()
                .ok_or_else(|| JsValue::from_str("no <head> element"))?;
            head.append_child(&script)?;
            script
        }
    };

    let mut on_ready = Some(on_ready);
    let on_load = Closure::wrap(Box::new(move |_: Event| {
        if let Some(callback) = on_ready.take() {
            callback();
        }
    }) as Box<dyn FnMut(Event)>);

    let mut on_failure = Some(on_error);
    let on_error = Closure::wrap(Box::new(move |_: Event| {
        if let Some(callback) = on_failure.take() {
            callback();
        }
    }) as Box<dyn FnMut(Event)>);

    script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    script.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;

    Ok(Some(ScriptLoad {
        script,
        on_load,
        on_error,
    }))
}
