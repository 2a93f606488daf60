use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(format!("{:?}", value))
    }
}
