//! Per-entry processing pipeline.
//!
//! Each forecast entry runs start-to-finish before the next begins:
//! decode, derive, resample, serialize, publish. There is no concurrent
//! access to shared mutable state and no retry; a failing step aborts
//! the entry and surfaces per the configured failure policy.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use tracing::{error, info, instrument};

use wind_common::{
    ProductKey, ProductPublisher, SampleSet, WindDecoder, WindError, WindResult,
    CSV_CONTENT_TYPE, GEOJSON_CONTENT_TYPE,
};
use wind_products::{
    resample, wind_direction, wind_speed, wind_table, FeatureCollection, TargetMesh,
    TinInterpolator,
};

use crate::config::ProcessorConfig;
use crate::jobs::{batches, ForecastEntry};

/// Outcome of a processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Sequential processing pipeline for forecast entries.
pub struct ProcessorPipeline<D, P> {
    decoder: D,
    publisher: P,
    config: ProcessorConfig,
}

impl<D, P> ProcessorPipeline<D, P> {
    pub fn new(decoder: D, publisher: P, config: ProcessorConfig) -> Self {
        Self {
            decoder,
            publisher,
            config,
        }
    }

    /// Get a reference to the publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}

impl<D: WindDecoder, P: ProductPublisher> ProcessorPipeline<D, P> {
    /// Process all entries in fixed-size batches, strictly one entry at
    /// a time.
    ///
    /// A failing entry aborts the run unless `continue_on_error` is
    /// set, in which case remaining entries are still processed and the
    /// failure count is reported in the summary.
    pub async fn run(&self, entries: &[ForecastEntry]) -> WindResult<RunSummary> {
        let mut summary = RunSummary {
            total: entries.len(),
            ..RunSummary::default()
        };
        let mut index = 0usize;

        for (batch_number, batch) in batches(entries, self.config.batch_size).enumerate() {
            info!(
                batch = batch_number + 1,
                entries = batch.len(),
                "Processing batch"
            );

            for entry in batch {
                match self.process_entry(index, entry).await {
                    Ok(()) => summary.succeeded += 1,
                    Err(e) => {
                        error!(
                            entry = index,
                            timestamp = %entry.timestamp,
                            error = %e,
                            "Entry failed"
                        );
                        summary.failed += 1;
                        if !self.config.continue_on_error {
                            return Err(e);
                        }
                    }
                }
                index += 1;
            }
        }

        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Run complete"
        );
        Ok(summary)
    }

    /// Run one entry through decode → derive → resample → serialize →
    /// publish.
    #[instrument(skip(self, entry), fields(entry = index, timestamp = %entry.timestamp))]
    async fn process_entry(&self, index: usize, entry: &ForecastEntry) -> WindResult<()> {
        let payload = BASE64
            .decode(entry.base64_encoded_response.as_bytes())
            .map_err(|e| WindError::decode(format!("invalid base64 payload: {}", e)))?;

        let field = self.decoder.decode(&payload)?;
        field.validate()?;

        let speed = wind_speed(&field.u, &field.v)?;
        let direction = wind_direction(&field.u, &field.v)?;

        // densified direction product
        let samples = SampleSet::new(
            field.lons.clone(),
            field.lats.clone(),
            direction.clone(),
        )?;
        let mesh = TargetMesh::from_source(&field.lons, &field.lats, self.config.densify_factor)?;
        let interpolator = TinInterpolator::new(&samples)?;
        let points = resample(&interpolator, &mesh);
        let geojson = FeatureCollection::from_direction_points(&points).to_json()?;
        self.publisher
            .put(
                &ProductKey::geojson(&entry.timestamp),
                Bytes::from(geojson),
                GEOJSON_CONTENT_TYPE,
            )
            .await?;

        // tabular product at source resolution
        let table = wind_table(&field, &speed, &direction)?;
        self.publisher
            .put(
                &ProductKey::csv(&entry.timestamp),
                Bytes::from(table),
                CSV_CONTENT_TYPE,
            )
            .await?;

        info!(
            grid_points = field.len(),
            mesh_points = mesh.len(),
            kept_points = points.len(),
            "Published products"
        );
        Ok(())
    }
}
