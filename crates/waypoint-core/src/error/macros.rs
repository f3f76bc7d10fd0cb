//! Error macros for waypoint

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WaypointError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a malformed `FROM:TO:WEIGHT` argument
#[macro_export]
macro_rules! bail_edge_spec {
    ($spec:expr) => {
        return Err($crate::error::WaypointError::InvalidEdgeSpec(
            $spec.to_string(),
        ))
    };
}
