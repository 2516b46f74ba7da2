use serde::{Deserialize, Serialize};

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub link: String,
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryPageResp {
    pub photos: Vec<ImageRecord>,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
}

// messages

// fetch one page of gallery photos
//
// this endpoint predates the JSON api and takes a form-encoded POST with
// a single 1-based page field, so it does not go through endpoint!
pub async fn fetch_gallery_page(page: u32) -> anyhow::Result<GalleryPageResp> {
    let resp = gloo_net::http::Request::post("/gallery-page/")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!("page={page}"))?
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}
