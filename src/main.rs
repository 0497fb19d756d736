//! kuki_cache sample
//!
//! Builds a cache from the environment, persists it to disk, restores it into
//! a fresh cache and reads the values back.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kuki_cache::{Cache, CacheConfig, FilePersistence};

/// Sample entry point.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create a cache and store a couple of values
/// 4. Save the cache to the snapshot file
/// 5. Load the snapshot into a second cache
/// 6. Read the values back and report statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kuki_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: max_size={}, default_ttl={}s, policy={}, snapshot={}",
        config.max_size,
        config.default_ttl.as_secs(),
        config.policy,
        config.snapshot_path.display()
    );

    let cache = Cache::<String>::from_config(&config)?.with_eviction_listener(|key, value| {
        info!(key, value = %value, "entry removed");
    });
    cache.set("key1", "value1".to_string(), None);
    cache.set("key2", "value2".to_string(), None);

    let persistence = FilePersistence::new(&config.snapshot_path);
    persistence
        .save_cache(&cache)
        .await
        .context("failed to save cache snapshot")?;
    info!("Cache saved to {}", persistence.path().display());

    let restored: Cache<String> = Cache::from_config(&config)?;
    persistence
        .restore_into(&restored)
        .await
        .context("failed to load cache snapshot")?;

    for key in ["key1", "key2"] {
        match restored.get(key) {
            Some(value) => info!("{key}: {value}, found: true"),
            None => info!("{key}: <none>, found: false"),
        }
    }

    let stats = restored.stats();
    info!(
        "Restored cache stats: hits={}, misses={}, expired={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.expired,
        stats.total_entries,
        stats.hit_rate()
    );

    Ok(())
}
