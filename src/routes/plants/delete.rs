use crate::error::HandlerError;
use crate::event::GatewayResponse;
use serde_json::json;
use sqlx::PgConnection;

/// Deleting an unknown id is not an error, the statement simply affects no rows.
pub async fn delete_plant(
    connection: &mut PgConnection,
    plant_id: &str,
) -> Result<GatewayResponse, HandlerError> {
    let result = sqlx::query("delete from plants where id = $1")
        .bind(plant_id)
        .execute(connection)
        .await?;

    tracing::debug!(
        plant_id,
        rows_affected = result.rows_affected(),
        "plant deleted"
    );

    Ok(GatewayResponse::json(200, json!({ "success": true })))
}
