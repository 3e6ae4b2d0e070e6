//! Binding to the PostHog browser SDK loaded by `index.html`.

use std::fmt;

use gloo_utils::format::JsValueSerdeExt;
use once_cell::sync::OnceCell;
use shared::constants::ANALYTICS_UNAVAILABLE_ERROR;
use shared::AnalyticsConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = posthog, js_name = init, catch)]
    fn posthog_init(api_key: Option<String>, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = posthog, js_name = capture, catch)]
    fn posthog_capture(event: &str) -> Result<JsValue, JsValue>;
}

static CLIENT: OnceCell<AnalyticsConfig> = OnceCell::new();

#[derive(Debug)]
pub enum AnalyticsError {
    Unavailable,
    Options(serde_json::Error),
    Sdk(String),
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::Unavailable => write!(f, "{}", ANALYTICS_UNAVAILABLE_ERROR),
            AnalyticsError::Options(e) => write!(f, "Invalid analytics options: {}", e),
            AnalyticsError::Sdk(msg) => write!(f, "Analytics SDK error: {}", msg),
        }
    }
}

impl std::error::Error for AnalyticsError {}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Options(err)
    }
}

fn sdk_loaded() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("posthog"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

fn describe(err: JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

pub fn init(config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
    if !sdk_loaded() {
        return Err(AnalyticsError::Unavailable);
    }

    let options = JsValue::from_serde(&config.options)?;
    posthog_init(config.api_key.clone(), &options)
        .map_err(|e| AnalyticsError::Sdk(describe(e)))?;

    if CLIENT.set(config.clone()).is_err() {
        log::warn!("Analytics client already registered; keeping the first configuration");
    }
    Ok(())
}

/// The configuration the page-wide client was registered with, if any.
pub fn client() -> Option<&'static AnalyticsConfig> {
    CLIENT.get()
}

pub fn capture(event: &str) {
    if client().is_none() {
        return;
    }
    if let Err(e) = posthog_capture(event) {
        log::warn!("Failed to capture {}: {}", event, describe(e));
    }
}
