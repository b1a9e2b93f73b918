//! Projects Module
//!
//! This module handles project management: creation, joining, and persistence
//! of each project's shared code document. A project is a named, password
//! protected container for exactly one code document; its name doubles as
//! the realtime room name.
//!
//! # Architecture
//!
//! The projects module is organized into focused submodules:
//!
//! - **`db`** - Project data model and database operations
//! - **`handlers`** - HTTP handlers for project endpoints
//!
//! # Module Structure
//!
//! ```text
//! projects/
//! ├── mod.rs          - Module exports and documentation
//! ├── db.rs           - Project model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── create.rs   - Project creation handler
//!     ├── join.rs     - Project join handler
//!     ├── save_code.rs   - Code save handler
//!     ├── unsave_code.rs - Code revert handler
//!     └── fetch_code.rs  - Credentialed code fetch handler
//! ```
//!
//! # Persistence Model
//!
//! A project row holds one code document as a single string. Saves replace
//! the whole document; the revert endpoint restores the fixed initial
//! content. Realtime code events never touch this table, so the stored
//! document only changes through an explicit save or revert.

/// Project data model and database operations
pub mod db;

/// HTTP handlers for project endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::{Project, INITIAL_CODE};
pub use handlers::{create_project, fetch_code, join_project, save_code, unsave_code};
