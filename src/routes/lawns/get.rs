use crate::domain::{Coordinates, Lawn};
use crate::error::HandlerError;
use crate::event::GatewayResponse;
use crate::routes::common::to_float;
use bigdecimal::BigDecimal;
use serde_json::json;
use sqlx::PgConnection;
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
struct LawnRow {
    id: String,
    area: BigDecimal,
    grass_type: String,
    health_status: String,
    positions: Json<Vec<Coordinates>>,
}

impl TryFrom<LawnRow> for Lawn {
    type Error = HandlerError;

    fn try_from(row: LawnRow) -> Result<Self, Self::Error> {
        Ok(Lawn {
            area: to_float(&row.area, "area")?,
            id: row.id,
            grass_type: row.grass_type,
            health_status: row.health_status,
            positions: row.positions.0,
        })
    }
}

pub async fn select_lawns(connection: &mut PgConnection) -> Result<GatewayResponse, HandlerError> {
    let lawns = sqlx::query_as::<_, LawnRow>(
        "select id, area, grass_type, health_status, positions
         from lawns
         order by created_at desc",
    )
    .fetch_all(connection)
    .await?
    .into_iter()
    .map(Lawn::try_from)
    .collect::<Result<Vec<Lawn>, HandlerError>>()?;

    Ok(GatewayResponse::json(200, json!({ "lawns": lawns })))
}
