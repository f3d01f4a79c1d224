//! Sportscope: a sortable sports-ranking table with a radar chart.
//!
//! This crate binds [`sportscope_core`] to the browser. The core owns all
//! behavior; this crate only fetches the score sheet, renders projections
//! into the DOM and a canvas, and forwards clicks to the [`Dashboard`].
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { App } from './sportscope.js';
//!
//! async function main() {
//!     await init();
//!     const app = new App('{"data_url": "./sports.csv"}');
//!     await app.start();
//!     console.log(JSON.parse(app.snapshotJson()).rows.length);
//! }
//! ```

pub use sportscope_core::*;

pub mod browser;
mod error;

pub use error::{AppError, LoadError};

#[cfg(target_arch = "wasm32")]
pub use browser::App;
