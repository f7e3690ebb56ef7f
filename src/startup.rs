use crate::configuration::Settings;
use crate::error::HandlerError;
use crate::event::{GatewayEvent, GatewayResponse};
use crate::handler::Handler;
use actix_web::dev::Server;
use actix_web::http::{Method, StatusCode};
use actix_web::web::{Bytes, Data, Json, Query};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, middleware, web};
use std::collections::HashMap;
use std::net::TcpListener;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connect_options = configuration.database.connect_options()?;
        if connect_options.is_none() {
            tracing::warn!("No database url configured, only preflight requests will succeed");
        }
        let handler = Handler::new(connect_options);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, handler).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(listener: TcpListener, handler: Handler) -> Result<Server, anyhow::Error> {
    tracing::info!(address = %listener.local_addr()?, "starting gateway");

    let handler = Data::new(handler);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/invoke", web::post().to(invoke))
            .default_service(web::to(gateway))
            .app_data(handler.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Direct invocation with a raw gateway event, the way a serverless runtime hands
/// events to a function.
async fn invoke(handler: Data<Handler>, event: Json<GatewayEvent>) -> HttpResponse {
    let response = handler.handle(event.into_inner()).await;
    HttpResponse::Ok().json(response)
}

async fn gateway(handler: Data<Handler>, request: HttpRequest, body: Bytes) -> HttpResponse {
    let response = match to_event(&request, &body) {
        Ok(event) => handler.handle(event).await,
        Err(error) => {
            tracing::warn!(error = %error, "request rejected");
            error.into()
        }
    };
    to_http_response(response)
}

fn to_event(request: &HttpRequest, body: &Bytes) -> Result<GatewayEvent, HandlerError> {
    let http_method = request.method().as_str().to_string();

    // Preflights are answered regardless of what they carry.
    if *request.method() == Method::OPTIONS {
        return Ok(GatewayEvent::new(http_method));
    }

    let query_string_parameters = if request.query_string().is_empty() {
        None
    } else {
        let query = Query::<HashMap<String, String>>::from_query(request.query_string())
            .map_err(|e| HandlerError::InvalidInput(format!("malformed query string: {}", e)))?;
        Some(query.into_inner())
    };

    let body = if body.is_empty() {
        None
    } else {
        let body = String::from_utf8(body.to_vec())
            .map_err(|_| HandlerError::InvalidInput("body is not valid UTF-8".into()))?;
        Some(body)
    };

    let headers = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();

    Ok(GatewayEvent {
        http_method,
        query_string_parameters,
        body,
        headers,
    })
}

fn to_http_response(response: GatewayResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }

    if response.body.is_empty() {
        builder.finish()
    } else {
        builder.body(response.body)
    }
}
