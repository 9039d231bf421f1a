use std::{net::TcpListener, time::Duration};

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Pool;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{DatabaseSettings, Settings},
    routes::{
        customer::{create_customer, get_customer, get_customer_orders, top_customers},
        health_check,
        json_error_handler,
        menu::{patch_menu_item, top_menu_items},
        order::{get_order, post_order, update_order},
        path_error_handler,
        restaurant::{add_menu_item, create_restaurant, get_menu, get_revenue}
    },
    telemetry::spawn_blocking_with_tracing,
    utils::DbPool
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    // Port 0 binds a random free port, the bound port is kept in `port`
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)
                        .context("Failed to build connection pool")?;

        run_migrations(&pool).await?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
                        .context("Failed to bind address")?;
        let port = listener.local_addr()?.port();

        let server = run(listener, pool)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }
}

pub fn get_connection_pool(settings: &DatabaseSettings) -> Result<DbPool, r2d2::Error>{
    Pool::builder()
        .max_size(settings.max_connections)
        .connection_timeout(Duration::from_secs(settings.connection_timeout_secs))
        .build(ConnectionManager::<PgConnection>::new(settings.get_database_url()))
}

#[tracing::instrument(
    "Running pending migrations",
    skip_all
)]
pub async fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let pool = pool.clone();

    spawn_blocking_with_tracing(move || {
        let mut conn = pool.get()
                        .context("Failed to get connection from pool")?;

        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to run migrations")?;

        Ok::<(), anyhow::Error>(())
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(())
}

// `/customers/top` and `/menu/top-items` must be registered before their `{id}` siblings
pub fn run(listener: TcpListener, pool: DbPool) -> Result<Server, std::io::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route("/health", web::get().to(health_check))
            .route("/customers", web::post().to(create_customer))
            .route("/customers/top", web::get().to(top_customers))
            .route("/customers/{id}", web::get().to(get_customer))
            .route("/customers/{id}/orders", web::get().to(get_customer_orders))
            .route("/restaurants", web::post().to(create_restaurant))
            .service(
                web::resource("/restaurants/{id}/menu")
                    .route(web::get().to(get_menu))
                    .route(web::post().to(add_menu_item))
            )
            .route("/restaurants/{id}/revenue", web::get().to(get_revenue))
            .route("/menu/top-items", web::get().to(top_menu_items))
            .route("/menu/{id}", web::patch().to(patch_menu_item))
            .route("/orders", web::post().to(post_order))
            .route("/orders/{id}", web::get().to(get_order))
            .route("/orders/{id}/status", web::patch().to(update_order))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
