use super::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lawn {
    pub id: String,

    /// **Unit:** square metres
    pub area: f64,

    pub grass_type: String,
    pub health_status: String,

    /// Outline of the lawn, in drawing order.
    pub positions: Vec<Coordinates>,
}
