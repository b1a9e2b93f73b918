/**
 * Project Handler Types
 *
 * This module defines the request and response types used by project handlers.
 *
 * Request fields are `Option<String>` on purpose: a field that is absent,
 * null, or an empty string is treated the same way and rejected with a 400,
 * so the handlers own that check instead of the deserializer.
 */

use serde::{Deserialize, Serialize};

/// Create project request
///
/// Contains the project name and password for project creation.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateProjectRequest {
    /// Name of the project to create (unique)
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
    /// Password protecting the project
    pub pjpassword: Option<String>,
}

/// Join project request
///
/// Contains the project name and password for joining an existing project.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct JoinProjectRequest {
    /// Name of the project to join
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
    /// Password protecting the project
    pub pjpassword: Option<String>,
}

/// Save code request
///
/// Contains the project name and the full code document to store.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SaveCodeRequest {
    /// Name of the project to save into
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
    /// Full replacement code document
    pub code: Option<String>,
}

/// Unsave code request
///
/// Contains the project name whose code should be reverted.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UnsaveCodeRequest {
    /// Name of the project to revert
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
}

/// Response carrying a status message and the project code
///
/// Returned by create (201) and join (200).
#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectCodeResponse {
    /// Human-readable status message
    pub message: String,
    /// The project's current code document
    pub code: String,
}

/// Response carrying only a status message
///
/// Returned by save and unsave.
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    /// Human-readable status message
    pub message: String,
}

/// Response carrying only the project code
///
/// Returned by the credentialed fetch endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct CodeResponse {
    /// The project's current code document
    pub code: String,
}

/// Reduce an optional request field to its usable value
///
/// Returns `None` for an absent, null, or empty field so callers can reject
/// all three the same way.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
