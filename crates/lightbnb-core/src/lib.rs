//! Plain records exchanged with the LightBnB store, together with the search
//! options and the shared constants used across the workspace.
pub mod params;
pub mod types;
