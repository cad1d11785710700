use std::time::Duration;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        USER_AGENT,
    },
    Client,
    Response,
};

use crate::core::CloudError;

pub fn http_client(timeout: Option<Duration>) -> Result<Client, CloudError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("wordcloud3d/0.1 (+reqwest)"));

    let mut builder = Client::builder().default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| CloudError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn ensure_success(resp: &Response) -> Result<(), CloudError> {
    if !resp.status().is_success() {
        return Err(CloudError::Custom(format!(
            "HTTP error {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
