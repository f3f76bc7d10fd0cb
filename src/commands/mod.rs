//! CLI commands for waypoint

pub mod dispatch;
pub mod neighbors;
pub mod nodes;
pub mod paths;
pub mod route;
