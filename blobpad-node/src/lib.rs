//! Thin wrapper around the iroh-blobs storage network SDK.
//!
//! This crate owns the network-facing pieces the HTTP handlers delegate to:
//! an iroh endpoint, a blob store (persistent on disk, or in-memory when no
//! data directory is configured), and a protocol router so that stored blobs
//! are served to other nodes on the iroh-blobs ALPN. Content addressing,
//! deduplication, and transfer are all the SDK's business; nothing here does
//! more than pass bytes through.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bytes::Bytes;
use iroh::protocol::Router;
use iroh::{Endpoint, EndpointId};
use iroh_blobs::api::Store;
use iroh_blobs::store::fs::FsStore;
use iroh_blobs::store::mem::MemStore;
use iroh_blobs::BlobsProtocol;

pub use iroh::SecretKey;
pub use iroh_blobs::Hash;

/// Configuration for a [`StorageNode`].
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Blob store directory. `None` keeps everything in memory.
    pub storage_dir: Option<PathBuf>,
    /// Endpoint identity. `None` generates a fresh key on every start.
    pub secret_key: Option<SecretKey>,
}

enum Backend {
    Mem(MemStore),
    Fs(FsStore),
}

impl Backend {
    fn store(&self) -> &Store {
        match self {
            Backend::Mem(store) => store,
            Backend::Fs(store) => store,
        }
    }
}

/// A running storage node: endpoint + blob store + protocol router.
pub struct StorageNode {
    endpoint: Endpoint,
    router: Router,
    backend: Backend,
}

impl StorageNode {
    /// Bind the endpoint, open the blob store, and start serving blobs.
    pub async fn start(config: NodeConfig) -> Result<Self> {
        let mut builder = Endpoint::builder();
        if let Some(secret_key) = config.secret_key {
            builder = builder.secret_key(secret_key);
        }
        let endpoint = builder.bind().await.context("failed to bind iroh endpoint")?;

        let backend = match &config.storage_dir {
            Some(dir) => {
                let store = FsStore::load(dir).await.with_context(|| {
                    format!("failed to open blob store at {}", dir.display())
                })?;
                Backend::Fs(store)
            }
            None => Backend::Mem(MemStore::new()),
        };

        let blobs = BlobsProtocol::new(backend.store(), None);
        let router = Router::builder(endpoint.clone())
            .accept(iroh_blobs::ALPN, blobs)
            .spawn();

        log::info!("storage node online, endpoint id {}", endpoint.id());

        Ok(Self {
            endpoint,
            router,
            backend,
        })
    }

    /// Write a blob and return its content hash.
    pub async fn store_blob(&self, data: impl Into<Bytes>) -> Result<Hash> {
        let tag = self
            .backend
            .store()
            .blobs()
            .add_bytes(data.into())
            .await
            .context("failed to write blob to store")?;
        log::info!("stored blob {}", tag.hash);
        Ok(tag.hash)
    }

    /// Read a blob from the node's own store.
    pub async fn read_blob(&self, hash: Hash) -> Result<Bytes> {
        let data = self
            .backend
            .store()
            .blobs()
            .get_bytes(hash)
            .await
            .with_context(|| format!("failed to read blob {hash}"))?;
        Ok(data)
    }

    pub fn endpoint_id(&self) -> EndpointId {
        self.endpoint.id()
    }

    pub async fn shutdown(&self) -> Result<()> {
        log::info!("shutting down storage node");
        self.router
            .shutdown()
            .await
            .context("failed to shut down protocol router")?;
        self.endpoint.close().await;
        Ok(())
    }
}
