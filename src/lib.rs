#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::{PoemReader, TrpcRepository};
    use crate::routes;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo: Arc<dyn PoemReader> = Arc::new(
            TrpcRepository::new(&server_config.backend_url)
                .with_superjson(server_config.backend_superjson),
        );
        let reader = web::Data::from(repo);

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
        let tera = web::Data::new(tera);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving tag pages on {}:{} from backend {}",
            bind_address.0,
            bind_address.1,
            server_config.backend_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .configure(routes::configure)
                .app_data(reader.clone())
                .app_data(tera.clone())
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
