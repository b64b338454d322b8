use sea_orm::DatabaseConnection;

use crate::server::{
    config::{AdminBootstrap, Config},
    error::{config::ConfigError, AppError},
    service::auth::AuthService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured staff account if no user with that name exists yet.
///
/// Existing accounts are left untouched, including their password.
///
/// # Arguments
/// - `db` - Database connection
/// - `admin` - Bootstrap credentials, if configured
///
/// # Returns
/// - `Ok(())` - Account exists or nothing was configured
/// - `Err(AppError)` - Database or hashing failure
pub async fn ensure_admin(
    db: &DatabaseConnection,
    admin: Option<&AdminBootstrap>,
) -> Result<(), AppError> {
    let Some(admin) = admin else {
        return Ok(());
    };

    let created = AuthService::new(db)
        .ensure_staff_user(&admin.username, &admin.email, &admin.password)
        .await?;

    if created {
        tracing::info!("Created staff account '{}'", admin.username);
    }

    Ok(())
}

/// Builds the CORS layer: a single configured origin, or any origin when unset.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(AppError::ConfigErr)` - Configured origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<tower_http::cors::CorsLayer, AppError> {
    use axum::http::{header, HeaderValue, Method};
    use tower_http::cors::CorsLayer;

    let Some(origin) = config.cors_allowed_origin.as_deref() else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
