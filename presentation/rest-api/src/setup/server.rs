use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use business::domain::logo::use_cases::fetch_domain_logo::FetchDomainLogoUseCase;

use crate::api::logo::proxy::logo_proxy;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.logo_api, container.bin_api),
            "Bank Logo API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let api = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors);
        let app = with_public_logo_proxy(api, container.fetch_logo_use_case).with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Mounts `/logos/:domain` next to `api`, outside its CORS middleware.
///
/// The proxy answers any origin with `Access-Control-Allow-Origin: *`, which
/// the CORS layer would otherwise rewrite or reject.
pub fn with_public_logo_proxy<E>(
    api: E,
    fetch_logo_use_case: Arc<dyn FetchDomainLogoUseCase>,
) -> Route
where
    E: Endpoint + 'static,
{
    Route::new()
        .at("/logos/:domain", get(logo_proxy).data(fetch_logo_use_case))
        .nest("/", api)
}
