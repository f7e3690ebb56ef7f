use crate::domain::Lawn;
use crate::error::HandlerError;
use crate::event::GatewayResponse;
use crate::routes::common::to_decimal;
use serde_json::json;
use sqlx::PgConnection;
use sqlx::types::Json;

pub async fn insert_lawn(
    connection: &mut PgConnection,
    lawn: Lawn,
) -> Result<GatewayResponse, HandlerError> {
    let area = to_decimal(lawn.area, "area")?;

    sqlx::query(
        "insert into lawns (id, area, grass_type, health_status, positions)
         values ($1, $2, $3, $4, $5)",
    )
    .bind(&lawn.id)
    .bind(area)
    .bind(&lawn.grass_type)
    .bind(&lawn.health_status)
    .bind(Json(&lawn.positions))
    .execute(connection)
    .await?;

    tracing::info!(lawn_id = %lawn.id, points = lawn.positions.len(), "lawn created");

    Ok(GatewayResponse::json(
        201,
        json!({ "success": true, "id": lawn.id }),
    ))
}
