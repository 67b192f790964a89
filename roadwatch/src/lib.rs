//! RoadWatch - navigation-guard and hazard-map core
//!
//! This library provides the core functionality for a citizen road-hazard
//! (pothole) reporting application: an access-control navigation guard and an
//! interactive map view that owns a stateful rendering-engine resource.
//!
//! # High-Level API
//!
//! The [`canvas`] module provides the map view facade:
//!
//! ```ignore
//! use roadwatch::canvas::MapCanvas;
//! use roadwatch::config::MapConfig;
//! use roadwatch::engine::MemoryLoader;
//!
//! let canvas = MapCanvas::new(MapConfig::default(), MemoryLoader::new());
//!
//! // Create the engine resource lazily on first mount
//! let engine = canvas.mount().await?;
//! canvas.render_hazards(&hazard_records)?;
//! ```
//!
//! Navigation access control is a pure function over the static route table:
//!
//! ```ignore
//! use roadwatch::route::{decide, Decision, RouteTable};
//! use roadwatch::session::Session;
//!
//! let table = RouteTable::standard();
//! let decision = table.decide_path("/report", &Session::anonymous());
//! assert_eq!(decision, Some(Decision::RedirectTo("/login")));
//! ```

pub mod canvas;
pub mod config;
pub mod coord;
pub mod engine;
pub mod geolocate;
pub mod hazard;
pub mod logging;
pub mod marker;
pub mod route;
pub mod session;

/// Version of the RoadWatch library.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
