use crate::error::HandlerError;
use crate::event::GatewayResponse;
use serde_json::json;
use sqlx::PgConnection;

pub async fn delete_lawn(
    connection: &mut PgConnection,
    lawn_id: &str,
) -> Result<GatewayResponse, HandlerError> {
    let result = sqlx::query("delete from lawns where id = $1")
        .bind(lawn_id)
        .execute(connection)
        .await?;

    tracing::debug!(lawn_id, rows_affected = result.rows_affected(), "lawn deleted");

    Ok(GatewayResponse::json(200, json!({ "success": true })))
}
