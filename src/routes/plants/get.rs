use crate::domain::Plant;
use crate::error::HandlerError;
use crate::event::GatewayResponse;
use crate::routes::common::to_float;
use bigdecimal::BigDecimal;
use serde_json::json;
use sqlx::PgConnection;

#[derive(sqlx::FromRow)]
struct PlantRow {
    id: String,
    #[sqlx(rename = "type")]
    kind: String,
    species: String,
    age: i32,
    crown_diameter: BigDecimal,
    height: BigDecimal,
    damages: Option<String>,
    health_status: String,
    position_lat: BigDecimal,
    position_lng: BigDecimal,
}

impl TryFrom<PlantRow> for Plant {
    type Error = HandlerError;

    fn try_from(row: PlantRow) -> Result<Self, Self::Error> {
        Ok(Plant {
            crown_diameter: to_float(&row.crown_diameter, "crown_diameter")?,
            height: to_float(&row.height, "height")?,
            position: [
                to_float(&row.position_lat, "position_lat")?,
                to_float(&row.position_lng, "position_lng")?,
            ],
            id: row.id,
            kind: row.kind,
            species: row.species,
            age: row.age,
            damages: row.damages.unwrap_or_default(),
            health_status: row.health_status,
        })
    }
}

pub async fn select_plants(connection: &mut PgConnection) -> Result<GatewayResponse, HandlerError> {
    let plants = sqlx::query_as::<_, PlantRow>(
        r#"select
             id,
             "type",
             species,
             age,
             crown_diameter,
             height,
             damages,
             health_status,
             position_lat,
             position_lng
           from plants
           order by created_at desc"#,
    )
    .fetch_all(connection)
    .await?
    .into_iter()
    .map(Plant::try_from)
    .collect::<Result<Vec<Plant>, HandlerError>>()?;

    Ok(GatewayResponse::json(200, json!({ "plants": plants })))
}
