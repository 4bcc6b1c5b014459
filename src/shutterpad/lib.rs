//! # Shutterpad Architecture
//!
//! Shutterpad is a **UI-agnostic photo gallery library**. The CLI that ships
//! in this repository is one client of the library, not the library itself,
//! and that distinction drives the layering.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders the grid, prompts for          │
//! │    confirmation, handles terminal I/O and exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Facade (view.rs)                                      │
//! │  - Normalizes display indexes (1 = newest) into records     │
//! │  - Owns the transient selection state for the delete        │
//! │    confirmation flow (Idle → Selected → Idle)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gallery Core (gallery.rs)                                  │
//! │  - Authoritative in-memory photo list, newest first         │
//! │  - capture → save → prepend → persist; delete → filter →    │
//! │    persist; one-time load-and-hydrate at startup            │
//! │  - Returns structured Result types, never touches stdout    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (camera.rs, storage/, platform.rs)           │
//! │  - Camera, FileStorage, PreferenceStore, UriResolver traits │
//! │  - Disk-backed production impls, in-memory test impls       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `view.rs` inward, code takes regular Rust arguments, returns
//! `Result<T, GalleryError>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could sit behind a webview shell or a
//! REST endpoint.
//!
//! ## Persistence Model
//!
//! The gallery mirrors its entire list as one JSON array under a single
//! preference key. Every add or delete rewrites the whole value; there is no
//! incremental update and no versioning. Images themselves live as files in
//! the application's private data directory, addressed by the record's
//! `filepath`.
//!
//! ## Module Overview
//!
//! - [`gallery`]: The photo store (capture, load, delete)
//! - [`view`]: Index resolution and the delete-confirmation state machine
//! - [`model`]: The `PhotoRecord` entity
//! - [`camera`]: Capture collaborator trait and the external-command camera
//! - [`storage`]: File and preference storage traits plus implementations
//! - [`platform`]: Runtime (hybrid vs. web) and webview URI resolution
//! - [`config`]: Persisted CLI configuration
//! - [`error`]: Error types

pub mod camera;
pub mod config;
pub mod error;
pub mod gallery;
pub mod model;
pub mod platform;
pub mod storage;
pub mod view;
