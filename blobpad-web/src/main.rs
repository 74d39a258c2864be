#![allow(non_snake_case)]

use blobpad_api_schema::error::ErrorResponse;
use blobpad_api_schema::read_blob::ReadBlobResponse;
use blobpad_api_schema::store::{StoreRequest, StoreResponse};
use dioxus::prelude::*;
use tracing::Level;

const API_BASE_URL: &str = "http://localhost:3001";

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

async fn store_text(content: String) -> Result<StoreResponse, String> {
    let response = gloo_net::http::Request::post(&format!("{API_BASE_URL}/api/store"))
        .json(&StoreRequest { content })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|_| "Failed to connect to backend.".to_string())?;

    if response.ok() {
        response
            .json::<StoreResponse>()
            .await
            .map_err(|e| e.to_string())
    } else {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(message)
    }
}

async fn read_blob(blob_id: String) -> Result<ReadBlobResponse, String> {
    let response = gloo_net::http::Request::get(&format!("{API_BASE_URL}/api/blob/{blob_id}"))
        .send()
        .await
        .map_err(|_| "Failed to connect to backend.".to_string())?;

    if response.ok() {
        response
            .json::<ReadBlobResponse>()
            .await
            .map_err(|e| e.to_string())
    } else {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "Unknown error while reading blob".to_string());
        Err(message)
    }
}

#[component]
fn Home() -> Element {
    let mut text = use_signal(String::new);
    let mut blob_id = use_signal(|| None::<String>);
    let mut store_error = use_signal(|| None::<String>);
    let mut storing = use_signal(|| false);

    let mut read_id = use_signal(String::new);
    let mut read_result = use_signal(|| None::<String>);
    let mut read_error = use_signal(|| None::<String>);

    rsx! {
        div { style: "padding: 2rem; max-width: 600px; margin: 0 auto;",
            h1 { "Blobpad" }

            textarea {
                rows: 5,
                style: "width: 100%; margin-bottom: 1rem; padding: 1rem;",
                placeholder: "Type something to store...",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }

            button {
                disabled: text().is_empty() || storing(),
                onclick: move |_| {
                    spawn(async move {
                        storing.set(true);
                        store_error.set(None);
                        blob_id.set(None);
                        match store_text(text()).await {
                            Ok(res) => blob_id.set(Some(res.blob_id)),
                            Err(e) => store_error.set(Some(e)),
                        }
                        storing.set(false);
                    });
                },
                if storing() { "Storing..." } else { "Store blob" }
            }

            {blob_id().map(|id| rsx! {
                p { style: "margin-top: 1rem; color: green;",
                    "Blob stored! ID: "
                    code { "{id}" }
                }
            })}

            {store_error().map(|e| rsx! {
                p { style: "margin-top: 1rem; color: red;", "Error: {e}" }
            })}

            hr { style: "margin: 2rem 0;" }

            h2 { "Read blob by ID" }

            input {
                r#type: "text",
                style: "width: 100%; padding: 0.75rem; margin-bottom: 1rem;",
                placeholder: "Enter blob ID...",
                value: "{read_id}",
                oninput: move |e| read_id.set(e.value()),
            }

            button {
                disabled: read_id().is_empty(),
                onclick: move |_| {
                    spawn(async move {
                        read_error.set(None);
                        read_result.set(None);
                        match read_blob(read_id()).await {
                            Ok(res) => read_result.set(Some(res.content)),
                            Err(e) => read_error.set(Some(e)),
                        }
                    });
                },
                "Read blob"
            }

            {read_result().map(|content| rsx! {
                div { style: "margin-top: 1rem; padding: 1rem; background: #f3f3f3;",
                    strong { "Blob content:" }
                    pre { "{content}" }
                }
            })}

            {read_error().map(|e| rsx! {
                p { style: "margin-top: 1rem; color: red;", "Error: {e}" }
            })}
        }
    }
}
