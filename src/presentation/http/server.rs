use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::presentation::http::{
    handlers::{
        ConsultantHandler, DashboardHandler, EmailHandler, HealthHandler, JobRequirementHandler,
    },
    routes::{
        consultant_routes, dashboard_routes, email_routes, health_routes, job_requirement_routes,
    },
};

pub struct HttpServer {
    health_handler: Arc<HealthHandler>,
    dashboard_handler: Arc<DashboardHandler>,
    consultant_handler: Arc<ConsultantHandler>,
    job_requirement_handler: Arc<JobRequirementHandler>,
    email_handler: Arc<EmailHandler>,
    port: u16,
}

impl HttpServer {
    pub fn new(
        health_handler: Arc<HealthHandler>,
        dashboard_handler: Arc<DashboardHandler>,
        consultant_handler: Arc<ConsultantHandler>,
        job_requirement_handler: Arc<JobRequirementHandler>,
        email_handler: Arc<EmailHandler>,
        port: u16,
    ) -> Self {
        Self {
            health_handler,
            dashboard_handler,
            consultant_handler,
            job_requirement_handler,
            email_handler,
            port,
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes(self.health_handler.clone()))
            .merge(dashboard_routes(self.dashboard_handler.clone()))
            .merge(consultant_routes(self.consultant_handler.clone()))
            .merge(job_requirement_routes(self.job_requirement_handler.clone()))
            .merge(email_routes(self.email_handler.clone()))
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Dashboard API listening on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
