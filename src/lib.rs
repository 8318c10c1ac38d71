pub mod content;
pub mod cycler;
pub mod particles;
pub mod progress;
pub mod sections;
pub mod theme;
pub mod view_state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
