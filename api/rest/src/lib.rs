use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use eb_config::app::AppConfigMode;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    configure::configure, context::ApiRestCtx, error_handler::default_error_handler,
    logger::logger_format,
};

pub mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;
mod session;

pub struct ApiRestServer {
    app_mode: AppConfigMode,
    address: String,
    allowed_origin: String,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(
        app_mode: &AppConfigMode,
        host: &str,
        port: &str,
        allowed_origin: &str,
        ctx: ApiRestCtx,
    ) -> Self {
        eb_log::info(Some("⚡"), "ApiRestServer: Initializing component");

        let address = format!("{host}:{port}");
        let context = web::Data::new(ctx);

        Self {
            app_mode: *app_mode,
            address,
            allowed_origin: allowed_origin.to_owned(),
            context,
        }
    }

    pub fn run(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        eb_log::info(Some("💫"), "ApiRestServer: Running component");

        tokio::spawn((|| async move {
            let app_mode = self.app_mode;
            let allowed_origin = self.allowed_origin;
            let context = self.context;

            let server = match HttpServer::new(move || {
                let cors = match allowed_origin.as_str() {
                    "*" => Cors::permissive(),
                    origin => Cors::default()
                        .allowed_origin(origin)
                        .allow_any_method()
                        .allow_any_header(),
                };
                App::new()
                    .wrap(Logger::new(logger_format(&app_mode)))
                    .wrap(cors)
                    .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                    .app_data(context.clone())
                    .configure(configure)
            })
            .bind(&self.address)
            {
                Ok(server) => server.run(),
                Err(err) => {
                    eb_log::panic(
                        None,
                        format!("ApiRestServer: Failed to bind {}: {err}", self.address),
                    );
                    return;
                }
            };

            let server_handle = server.handle();

            tokio::select! {
                _ = cancel_token.cancelled() => {}
                s = server => {
                    if let Err(err) = s {
                        eb_log::error(None, format!("ApiRestServer: Error running server: {err}"));
                    }
                }
            }

            eb_log::info(None, "ApiRestServer: Shutting down component");
            server_handle.stop(true).await;
        })())
    }
}
