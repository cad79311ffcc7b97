//! Shared Dioxus components and browser glue for the card recommender apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js, tablesorter and Bootstrap calls via `js_sys::eval()`
//! - `page`: bootstrap data from the host page and DOM hydration of server-rendered rows
//! - `state`: the page's repeating sections as a reactive signal
//! - `components`: reusable RSX components (repeating sections, rows, fields, chart canvas)

pub mod components;
pub mod js_bridge;
pub mod page;
pub mod state;
