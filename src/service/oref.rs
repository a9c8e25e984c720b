use log::{debug, info};
use reqwest::header::REFERER;
use reqwest::{Client, Request};

use crate::Result;

pub static ORIGIN: &str = "https://www.oref.org.il/";
pub static AREAS_PAGE: &str = "https://www.oref.org.il/12481-he/Pakar.aspx";
pub static DISTRICTS_ENDPOINT: &str = "https://www.oref.org.il/Shared/Ajax/GetDistricts.aspx";

pub static AREAS_FILE: &str = "generated_areas.json";
pub static DISTRICTS_FILE: &str = "generated_districts.json";

/// The site refuses requests that don't carry its own origin as `Referer`.
pub fn areas_request(client: &Client) -> reqwest::Result<Request> {
    client.get(AREAS_PAGE).header(REFERER, ORIGIN).build()
}

pub fn districts_request(client: &Client) -> reqwest::Result<Request> {
    client
        .get(DISTRICTS_ENDPOINT)
        .query(&[("lang", "he")])
        .build()
}

/// Fetches the page embedding the area list.
pub async fn fetch_areas_page(client: &Client) -> Result<String> {
    fetch(client, areas_request(client)?).await
}

pub async fn fetch_districts(client: &Client) -> Result<String> {
    fetch(client, districts_request(client)?).await
}

/// Sends `request` and returns the body. Non-success statuses are errors.
pub async fn fetch(client: &Client, request: Request) -> Result<String> {
    info!("Fetching {}", request.url());

    let response = client.execute(request).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    debug!("received {} bytes", bytes.len());

    decode(&bytes)
}

// `Response::text` would replace invalid sequences silently.
pub fn decode(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
