use std::sync::Arc;

use eb_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx, ApiRestUploadCtx},
    ApiRestServer,
};
use eb_dao::{admin::AdminDao, Db};
use eb_db_postgresql::db::PostgresDb;
use eb_db_sqlite::db::SqliteDb;
use eb_hash_argon2::argon2::Argon2Hash;
use eb_token_jwt::token::JwtToken;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = eb_config::from_path(&config_path);

    eb_log::init(config.log().display_level(), config.log().level_filter());

    eb_log::info(Some("🚀"), "[Estatebase] Starting");

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    );

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let db = if let Some(postgres) = config.db().postgres() {
        Arc::new(Db::PostgresqlDb(
            PostgresDb::new(
                postgres.user(),
                postgres.password(),
                postgres.host(),
                postgres.port(),
                postgres.db_name(),
                postgres.max_connections(),
            )
            .await,
        ))
    } else if let Some(sqlite) = config.db().sqlite() {
        Arc::new(Db::SqliteDb(
            SqliteDb::new(sqlite.path(), sqlite.max_connections()).await,
        ))
    } else {
        eb_log::panic(None, "[Estatebase] No database configuration is specified");
        return;
    };

    let admin_password_hash =
        match argon2_hash.hash_password(config.auth().admin_password().as_bytes()) {
            Ok(hash) => hash.to_string(),
            Err(err) => {
                eb_log::panic(
                    None,
                    format!("[Estatebase] Failed to hash the default admin password: {err}"),
                );
                return;
            }
        };
    if let Err(err) = AdminDao::db_bootstrap(
        &db,
        config.auth().admin_username(),
        config.auth().admin_email(),
        &admin_password_hash,
    )
    .await
    {
        eb_log::panic(
            None,
            format!("[Estatebase] Failed to bootstrap the default admin account: {err}"),
        );
        return;
    }

    if let Err(err) = tokio::fs::create_dir_all(config.upload().path()).await {
        eb_log::panic(
            None,
            format!("[Estatebase] Failed to create the uploads directory: {err}"),
        );
        return;
    }

    let api_rest_server = ApiRestServer::new(
        config.app().mode(),
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash),
            ApiRestTokenCtx::new(jwt_token),
            ApiRestDaoCtx::new(db),
            ApiRestUploadCtx::new(config.upload().path(), config.upload().max_size()),
        ),
    );

    let cancel_token = CancellationToken::new();

    match tokio::try_join!(api_rest_server.run(cancel_token.clone())) {
        Ok(_) => eb_log::info(Some("👋"), "[Estatebase] Turned off"),
        Err(err) => {
            eb_log::warn(None, "[Estatebase] Shutting down all running components");
            cancel_token.cancel();
            eb_log::warn(
                Some("👋"),
                format!("[Estatebase] Turned off with error: {err}"),
            );
        }
    }
}
