/**
 * Project Model and Database Operations
 *
 * This module handles project data and database operations. A project is a
 * named, password-protected container for one shared code document. The
 * project name doubles as its identifier, both in the database and as the
 * realtime room name.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Code every new project starts with, and the content `unsaveCode` reverts to
pub const INITIAL_CODE: &str = "console.log(\"Initial code for project\");";

/// Project struct representing a project in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Project name (unique, doubles as the realtime room name)
    pub name: String,
    /// Hashed project password (bcrypt)
    pub password_hash: String,
    /// ID of the user who created the project
    pub owner_id: String,
    /// The shared code document
    pub code: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new project
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Project name
/// * `password_hash` - Hashed project password
/// * `owner_id` - ID of the creating user
/// * `code` - Initial code document
///
/// # Returns
/// Created project or error
pub async fn insert_project(
    pool: &SqlitePool,
    name: String,
    password_hash: String,
    owner_id: String,
    code: String,
) -> Result<Project, sqlx::Error> {
    let project = Project {
        name,
        password_hash,
        owner_id,
        code,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO projects (name, password_hash, owner_id, code, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&project.name)
    .bind(&project.password_hash)
    .bind(&project.owner_id)
    .bind(&project.code)
    .bind(project.created_at)
    .execute(pool)
    .await?;

    Ok(project)
}

/// Get project by name
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Project name
///
/// # Returns
/// Project or None if not found
pub async fn find_project_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<Project>, sqlx::Error> {
    let project = sqlx::query_as::<_, Project>(
        r#"
        SELECT name, password_hash, owner_id, code, created_at
        FROM projects
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(project)
}

/// Replace a project's code document
///
/// Callers are expected to have checked that the project exists; updating a
/// missing project affects zero rows and is not reported as an error.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Project name
/// * `code` - New code document
pub async fn update_project_code(
    pool: &SqlitePool,
    name: &str,
    code: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE projects
        SET code = ?
        WHERE name = ?
        "#,
    )
    .bind(code)
    .bind(name)
    .execute(pool)
    .await?;

    Ok(())
}
