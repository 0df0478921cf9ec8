//! The "My Files" dashboard: cached file list, per-row delete with a busy
//! marker, and refresh of the list after a successful delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/dashboard` | HTML file list |
//! | POST | `/dashboard/files/{id}/delete` | Delete, then redirect to `/dashboard` |
//! | GET | `/api/files` | File list state (`?fetch=false` reads the cache only) |
//! | POST | `/api/files/delete` | Delete a file by id |
//! | GET | `/api/files/deleting` | Current deletion marker |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use handlers::FilesState;
pub use routes::routes;
pub use services::FileListController;
