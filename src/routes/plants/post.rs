use crate::domain::Plant;
use crate::error::HandlerError;
use crate::event::GatewayResponse;
use crate::routes::common::to_decimal;
use serde_json::json;
use sqlx::PgConnection;

pub async fn insert_plant(
    connection: &mut PgConnection,
    plant: Plant,
) -> Result<GatewayResponse, HandlerError> {
    let crown_diameter = to_decimal(plant.crown_diameter, "crownDiameter")?;
    let height = to_decimal(plant.height, "height")?;
    let [lat, lng] = plant.position;
    let position_lat = to_decimal(lat, "position")?;
    let position_lng = to_decimal(lng, "position")?;

    sqlx::query(
        r#"insert into plants
             (id, "type", species, age, crown_diameter, height,
              damages, health_status, position_lat, position_lng)
           values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
    )
    .bind(&plant.id)
    .bind(&plant.kind)
    .bind(&plant.species)
    .bind(plant.age)
    .bind(crown_diameter)
    .bind(height)
    .bind(&plant.damages)
    .bind(&plant.health_status)
    .bind(position_lat)
    .bind(position_lng)
    .execute(connection)
    .await?;

    tracing::info!(plant_id = %plant.id, "plant created");

    Ok(GatewayResponse::json(
        201,
        json!({ "success": true, "id": plant.id }),
    ))
}
