use crate::domain::{Lawn, NewRecord, Plant};
use crate::error::HandlerError;
use crate::event::{GatewayEvent, GatewayResponse};
use crate::routes::{
    delete_lawn, delete_plant, insert_lawn, insert_plant, select_lawns, select_plants,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

/// A single database statement, decided from the event before any connection is opened.
#[derive(Debug, PartialEq)]
pub enum Operation {
    ListPlants,
    ListLawns,
    InsertPlant(Plant),
    InsertLawn(Lawn),
    DeletePlant(String),
    DeleteLawn(String),
}

/// Stateless request handler. The only thing carried between invocations is the
/// connection configuration it was built with; every invocation opens and closes
/// its own connection.
pub struct Handler {
    connect_options: Option<PgConnectOptions>,
}

impl Handler {
    pub fn new(connect_options: Option<PgConnectOptions>) -> Self {
        Self { connect_options }
    }

    #[tracing::instrument(
        name = "Handling gateway event",
        skip(self, event),
        fields(method = %event.http_method)
    )]
    pub async fn handle(&self, event: GatewayEvent) -> GatewayResponse {
        match self.try_handle(&event).await {
            Ok(response) => response,
            Err(error) => {
                if error.is_internal() {
                    tracing::error!(error = %error, "request failed");
                } else {
                    tracing::warn!(error = %error, "request rejected");
                }
                error.into()
            }
        }
    }

    async fn try_handle(&self, event: &GatewayEvent) -> Result<GatewayResponse, HandlerError> {
        if event.http_method.eq_ignore_ascii_case("OPTIONS") {
            return Ok(GatewayResponse::preflight());
        }

        let Some(connect_options) = &self.connect_options else {
            return Err(HandlerError::NotConfigured);
        };

        let operation = route(event)?;

        // Dropped on every early return, closed gracefully otherwise.
        let mut connection = PgConnection::connect_with(connect_options).await?;
        let result = execute(&mut connection, operation).await;
        if let Err(e) = connection.close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }

        result
    }
}

pub fn route(event: &GatewayEvent) -> Result<Operation, HandlerError> {
    match event.http_method.to_ascii_uppercase().as_str() {
        "GET" => match event.query("type").unwrap_or("plants") {
            "plants" => Ok(Operation::ListPlants),
            "lawns" => Ok(Operation::ListLawns),
            _ => Err(HandlerError::MethodNotAllowed),
        },
        "POST" => route_new_record(event.body.as_deref()),
        "DELETE" => {
            let id = event
                .query("id")
                .filter(|id| !id.is_empty())
                .ok_or(HandlerError::MissingId)?;

            match event.query("type").unwrap_or("plant") {
                "plant" => Ok(Operation::DeletePlant(id.to_string())),
                "lawn" => Ok(Operation::DeleteLawn(id.to_string())),
                _ => Err(HandlerError::MethodNotAllowed),
            }
        }
        _ => Err(HandlerError::MethodNotAllowed),
    }
}

fn route_new_record(body: Option<&str>) -> Result<Operation, HandlerError> {
    let body = body.filter(|b| !b.trim().is_empty()).unwrap_or("{}");
    let record: NewRecord =
        serde_json::from_str(body).map_err(|e| HandlerError::InvalidInput(e.to_string()))?;

    match record.kind.as_deref() {
        Some("plant") => Ok(Operation::InsertPlant(decode(record.data)?)),
        Some("lawn") => Ok(Operation::InsertLawn(decode(record.data)?)),
        _ => Err(HandlerError::MethodNotAllowed),
    }
}

fn decode<T: DeserializeOwned>(data: Option<Value>) -> Result<T, HandlerError> {
    let data = data.ok_or_else(|| HandlerError::InvalidInput("missing field `data`".into()))?;
    serde_json::from_value(data).map_err(|e| HandlerError::InvalidInput(e.to_string()))
}

async fn execute(
    connection: &mut PgConnection,
    operation: Operation,
) -> Result<GatewayResponse, HandlerError> {
    match operation {
        Operation::ListPlants => select_plants(connection).await,
        Operation::ListLawns => select_lawns(connection).await,
        Operation::InsertPlant(plant) => insert_plant(connection, plant).await,
        Operation::InsertLawn(lawn) => insert_lawn(connection, lawn).await,
        Operation::DeletePlant(id) => delete_plant(connection, &id).await,
        Operation::DeleteLawn(id) => delete_lawn(connection, &id).await,
    }
}
