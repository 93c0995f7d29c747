//! Offline lookup of GTFOBins techniques.
//!
//! The pipeline for one lookup is: binary name → [`mirror`] (raw document) →
//! [`document`] (structure tree) → [`extract`] (ordered entries) → filter by
//! [`models::Selector`] → [`render`].

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod mirror;
pub mod models;
pub mod render;
