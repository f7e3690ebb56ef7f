use serde::{Deserialize, Serialize};

/// `[latitude, longitude]`
pub type Coordinates = [f64; 2];

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Client supplied primary key.
    pub id: String,

    /// Category of the plant. **Example:** `"tree"`, or `"bush"`
    #[serde(rename = "type")]
    pub kind: String,

    pub species: String,

    /// Age in years.
    pub age: i32,

    /// **Unit:** metres
    pub crown_diameter: f64,

    /// **Unit:** metres
    pub height: f64,

    /// Free text description of damages, empty when none were noted.
    #[serde(default)]
    pub damages: String,

    /// **Example:** `"healthy"`, `"satisfactory"`, or `"unsatisfactory"`
    pub health_status: String,

    pub position: Coordinates,
}
