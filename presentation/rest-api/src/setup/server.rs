use poem::{EndpointExt, Server as PoemServer, listener::TcpListener, middleware::Tracing};

use crate::{
    config::app_config::AppConfig,
    setup::{dependency_injection::DependencyContainer, router::build_router},
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_router(container, &format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
