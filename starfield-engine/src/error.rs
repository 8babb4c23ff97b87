// error.rs - Failure modes
//
// Only the drawing surface can really be missing; everything else on the
// page is optional and skipped quietly by the web layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StarfieldError {
    #[error("no window object")]
    MissingWindow,

    #[error("canvas #{0} not found")]
    MissingCanvas(String),

    #[error("2d context unavailable")]
    MissingContext,

    #[error("bad config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("js: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for StarfieldError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        StarfieldError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

impl From<StarfieldError> for wasm_bindgen::JsValue {
    fn from(e: StarfieldError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StarfieldError>;
