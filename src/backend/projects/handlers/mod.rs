//! Project Handlers Module
//!
//! This module contains all HTTP handlers for project endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Request and response types
//! ├── create.rs       - Project creation handler
//! ├── join.rs         - Project join handler
//! ├── save_code.rs    - Code save handler
//! ├── unsave_code.rs  - Code revert handler
//! └── fetch_code.rs   - Credentialed code fetch handler
//! ```
//!
//! # Handlers
//!
//! - **`create_project`** - POST /api/projects/create - Create a project (auth required)
//! - **`join_project`** - POST /api/projects/join - Join a project (auth required)
//! - **`save_code`** - POST /api/projects/saveCode - Save the code document (auth required)
//! - **`unsave_code`** - POST /api/projects/unsaveCode - Revert the code document (auth required)
//! - **`fetch_code`** - GET /api/projects/{projectName}/{pjpassword} - Fetch code (no token)

/// Request and response types
pub mod types;

/// Project creation handler
pub mod create;

/// Project join handler
pub mod join;

/// Code save handler
pub mod save_code;

/// Code revert handler
pub mod unsave_code;

/// Credentialed code fetch handler
pub mod fetch_code;

// Re-export commonly used types
pub use types::{
    CodeResponse, CreateProjectRequest, JoinProjectRequest, MessageResponse, ProjectCodeResponse,
    SaveCodeRequest, UnsaveCodeRequest,
};

// Re-export handlers
pub use create::create_project;
pub use fetch_code::fetch_code;
pub use join::join_project;
pub use save_code::save_code;
pub use unsave_code::unsave_code;
