//! Browser runtime for the Sportscope dashboard.
//!
//! Bridges the [`Dashboard`](sportscope_core::Dashboard) to the DOM and a
//! Canvas2D radar chart.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod logging;

// Cross-platform modules
pub mod markup;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub use app::App;
#[cfg(target_arch = "wasm32")]
pub use canvas2d::RadarRenderer;
#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
pub use session::{Session, Surface};
