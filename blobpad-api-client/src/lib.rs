//! Blocking HTTP client for the blobpad API.

use blobpad_api_schema::error::ErrorResponse;
use blobpad_api_schema::health::HealthResponse;
use blobpad_api_schema::read_blob::ReadBlobResponse;
use blobpad_api_schema::store::{StoreRequest, StoreResponse};

#[derive(Debug, Clone)]
pub struct BlobpadApiClient {
    pub base_url: String,
}

#[derive(Debug)]
pub enum BlobpadApiClientError {
    Ureq(Box<ureq::Error>),
    IO(Box<std::io::Error>),
    /// The server answered with a non-2xx status and a JSON error body.
    Api { status: u16, message: String },
}

impl BlobpadApiClient {
    pub fn new(base_url: String) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn health(&self) -> Result<HealthResponse, BlobpadApiClientError> {
        let url = format!("{}/", self.base_url);
        let health_res: HealthResponse = ureq::get(&url)
            .call()
            .map_err(Self::request_error)?
            .into_json()
            .map_err(|e| BlobpadApiClientError::IO(Box::new(e)))?;
        Ok(health_res)
    }

    pub fn store(&self, request: StoreRequest) -> Result<StoreResponse, BlobpadApiClientError> {
        let url = format!("{}/api/store", self.base_url);
        let store_res: StoreResponse = ureq::post(&url)
            .send_json(request)
            .map_err(Self::request_error)?
            .into_json()
            .map_err(|e| BlobpadApiClientError::IO(Box::new(e)))?;
        Ok(store_res)
    }

    pub fn read_blob(&self, blob_id: &str) -> Result<ReadBlobResponse, BlobpadApiClientError> {
        let url = format!("{}/api/blob/{}", self.base_url, blob_id);
        let read_blob_res: ReadBlobResponse = ureq::get(&url)
            .call()
            .map_err(Self::request_error)?
            .into_json()
            .map_err(|e| BlobpadApiClientError::IO(Box::new(e)))?;
        Ok(read_blob_res)
    }

    fn request_error(e: ureq::Error) -> BlobpadApiClientError {
        match e {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_json::<ErrorResponse>()
                    .map(|body| body.error)
                    .unwrap_or_else(|_| "unexpected error".to_string());
                BlobpadApiClientError::Api { status, message }
            }
            other => BlobpadApiClientError::Ureq(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = BlobpadApiClient::new("http://localhost:3001/".to_string());
        assert_eq!(client.base_url, "http://localhost:3001");
    }

    #[test]
    fn new_keeps_url_without_slash() {
        let client = BlobpadApiClient::new("http://localhost:3001".to_string());
        assert_eq!(client.base_url, "http://localhost:3001");
    }
}
