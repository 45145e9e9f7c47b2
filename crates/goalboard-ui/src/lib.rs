//! Leptos 0.7 CSR front end for Goalboard
//!
//! A personal goal list: add a goal with a title and description, remove
//! one, or clear them all. Goals persist in `window.localStorage`.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), built with Trunk
//! - Store and view logic live in `goalboard-core`; this crate binds them
//!   to the DOM
//!
//! ## Module Structure
//! - `app`: Root component
//! - `components`: Form, list, and banner components
//! - `state`: Shared reactive state and the banner queue
//! - `storage`: `localStorage` backend for the goal store
//! - `logging`: tracing subscriber writing to the browser console
//! - `config`: Embedded configuration
//! - `utils`: Time zone, timer, and prompt helpers
//! - `error`: Error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod storage;
pub mod utils;

pub use app::App;

#[cfg(test)]
mod tests;
