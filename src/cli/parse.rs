use std::str::FromStr;

use waypoint_core::bail_edge_spec;
use waypoint_core::error::WaypointError;
use waypoint_core::format::OutputFormat;

/// Edge given on the command line as `FROM:TO:WEIGHT`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = WaypointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [from, to, weight] = parts.as_slice() else {
            bail_edge_spec!(s);
        };
        if from.is_empty() || to.is_empty() {
            bail_edge_spec!(s);
        }
        let Ok(weight) = weight.parse::<f64>() else {
            bail_edge_spec!(s);
        };

        // Range checks (negative, infinite) happen when the edge is added
        Ok(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

/// Parse an edge spec from string
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    s.parse::<EdgeSpec>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
