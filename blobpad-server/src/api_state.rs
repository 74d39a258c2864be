use std::sync::Arc;
use std::time::SystemTime;

use blobpad_common::clock::Clock;
use blobpad_node::StorageNode;

#[derive(Clone)]
pub struct ApiState {
    pub node: Arc<StorageNode>,
    pub clock: Clock,
    pub started_at: SystemTime,
}

impl ApiState {
    pub fn new(node: Arc<StorageNode>, clock: Clock) -> Self {
        let started_at = clock.now();
        Self {
            node,
            clock,
            started_at,
        }
    }
}
