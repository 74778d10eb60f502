pub mod domain;
pub mod infra;
pub mod ui;

use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global Tokio runtime handle for async operations throughout the application
static RUNTIME: OnceLock<Runtime> = OnceLock::new();

pub fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime")
    })
}
