use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lookbook_db=info,lookbook_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = lookbook_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    lookbook_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = lookbook_db::seed::seed(&pool).await?;
    tracing::info!(
        products = summary.product_ids.len(),
        looks = summary.look_ids.len(),
        "Database seeded"
    );

    Ok(())
}
