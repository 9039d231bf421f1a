use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::{r2d2::ConnectionManager, PgConnection};
use r2d2::{Pool, PooledConnection};

use crate::telemetry::spawn_blocking_with_tracing;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

// Writes every `source()` below the error, one "Caused By" block each
pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t{:?}", error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Checkout blocks for up to the pool's connection timeout, so it runs on the blocking threadpool
#[tracing::instrument(
    "Checking out database connection",
    skip_all
)]
pub async fn get_pooled_connection(pool: &DbPool) -> Result<DbConnection, anyhow::Error>{
    let pool = pool.clone();

    spawn_blocking_with_tracing(move || pool.get())
        .await
        .context("Failed due to threadpool error")?
        .context("Failed to get connection from pool")
}
