//! GalaxyForge Engine - Main entry point.
//!
//! Builds one demo galaxy over the in-memory store, reports what was
//! generated, then tears it down again.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galaxyforge_domain::UserId;
use galaxyforge_engine::infrastructure::{
    config::EngineConfig, memory::InMemoryStore, random::random_source,
};
use galaxyforge_engine::use_cases::galaxy::CreateGalaxyInput;
use galaxyforge_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "galaxyforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GalaxyForge Engine");

    let config = EngineConfig::from_env();
    match config.seed {
        Some(seed) => tracing::info!(seed, "Using seeded random source"),
        None => tracing::info!("Using entropy-seeded random source"),
    }
    let mut rng = random_source(config.seed);

    let store = InMemoryStore::new();
    let app = App::in_memory(&store);

    let galaxy = app
        .use_cases
        .galaxy
        .create
        .execute(CreateGalaxyInput {
            owner_id: UserId::new(),
            name: config.demo_name.clone(),
            shape: config.demo_shape.to_string(),
            system_count: config.demo_systems,
        })
        .await?;

    let created = app
        .use_cases
        .galaxy
        .create_tree
        .execute_atomic(&galaxy, app.unit_of_work.as_ref(), &mut rng)
        .await?;
    tracing::info!(
        galaxy = %galaxy.name(),
        bodies = created.bodies(),
        "Demo galaxy populated"
    );
    println!("{}", serde_json::to_string_pretty(&created)?);

    let systems = app.repositories.systems.list_in_galaxy(galaxy.id()).await?;
    if let Some(first) = systems.first() {
        let stars = app.repositories.stars.list_in_system(first.id()).await?;
        let planets = app.repositories.planets.list_in_system(first.id()).await?;
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "system": first,
                "stars": stars,
                "planets": planets,
            }))?
        );
    }

    let deleted = app
        .use_cases
        .galaxy
        .delete_tree
        .execute(galaxy.id(), &app.repositories)
        .await?;
    tracing::info!(
        galaxy_id = %deleted.galaxy_id,
        bodies = deleted.bodies(),
        remaining = ?store.counts().await,
        "Demo galaxy deleted"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
