use js_sys::Promise;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
export async function jsGraphqlPost(endpoint, body) {
  const response = await fetch(endpoint, {
    method: 'POST',
    credentials: 'same-origin',
    headers: {
      'Accept': 'application/json',
      'Content-Type': 'application/json',
    },
    body,
  });
  const text = await response.text();
  return { status: response.status, body: text };
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsGraphqlPost)]
    fn js_graphql_post(endpoint: &str, body: &str) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn graphql_post(endpoint: &str, body: &str) -> Result<HttpResponse, String> {
    let value = await_promise(js_graphql_post(endpoint, body)).await?;
    from_value(value).map_err(|e| e.to_string())
}
