//! Background job scheduler.
//!
//! Owns the periodic "recommended products" sampler: a fixed-interval job
//! that picks a small random subset of the catalog, stateless between
//! ticks, with no ordering dependency on the derivation pipeline. Dropping
//! the returned scheduler handle stops the job.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::IndexedRandom;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use shopfront_core::{AppConfig, CatalogState, Product};

use crate::api::AppState;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process — dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    state: AppState,
    config: Arc<AppConfig>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_recommended_job(&scheduler, state, &config).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Registers the fixed-interval recommended-products refresh job.
async fn register_recommended_job(
    scheduler: &JobScheduler,
    state: AppState,
    config: &AppConfig,
) -> Result<(), JobSchedulerError> {
    let interval = Duration::from_secs(config.recommended_interval_secs);
    let count = config.recommended_count;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            tracing::debug!("scheduler: refreshing recommended products");
            refresh_recommended(&state, count).await;
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

/// Samples a fresh recommended subset from the loaded catalog.
///
/// A no-op while the catalog is loading or errored; the previous sample (if
/// any) is left in place.
pub(crate) async fn refresh_recommended(state: &AppState, count: usize) {
    let catalog: Vec<Product> = {
        let session = state.session.lock().await;
        match session.catalog_state() {
            CatalogState::Ready(products) => products.clone(),
            CatalogState::Loading | CatalogState::Errored(_) => return,
        }
    };

    let sample = sample_products(&catalog, count);
    *state.recommended.lock().await = sample;
}

/// Picks up to `count` distinct random products; catalogs of `count` or
/// fewer products are returned whole in catalog order.
fn sample_products(catalog: &[Product], count: usize) -> Vec<Product> {
    if catalog.len() <= count {
        return catalog.to_vec();
    }
    let mut rng = rand::rng();
    catalog
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}
