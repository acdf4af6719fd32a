//! Version layer: registry access and release catalog resolution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Catalog   │────▶│  commands   │
//! │  (fetch)    │     │  (resolve)  │     │ (init/patch)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │    (npm)    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Reduces raw published versions to release descriptors
//! - [`registry`]: Registry trait for fetching versions from remote sources
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`triple`]: `MAJOR.MINOR.PATCH` triples used by manifests
//! - [`error`]: Error types for version parsing and registry operations
//! - [`types`]: Common types like `PackageVersions`

pub mod catalog;
pub mod error;
pub mod registries;
pub mod registry;
pub mod triple;
pub mod types;
