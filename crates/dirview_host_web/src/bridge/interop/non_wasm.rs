use super::*;

fn unsupported() -> String {
    "Browser fetch is only available when compiled for wasm32".to_string()
}

pub async fn graphql_post(_endpoint: &str, _body: &str) -> Result<HttpResponse, String> {
    Err(unsupported())
}
