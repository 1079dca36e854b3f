//! End-to-end tests for the processing pipeline, using in-memory
//! decoder and publisher fakes.

use std::io::Write;

use test_utils::{
    assert_approx_eq, uniform_wind_field, FailingDecoder, MemoryPublisher, StaticDecoder,
};
use wind_common::WindError;
use wind_products::parse_wind_table;

use forecast_processor::config::ProcessorConfig;
use forecast_processor::jobs::{self, ForecastEntry};
use forecast_processor::pipeline::ProcessorPipeline;

fn entry(timestamp: &str) -> ForecastEntry {
    ForecastEntry {
        // payload is ignored by the static decoder but must be valid base64
        base64_encoded_response: "QUJDRA==".to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn test_config() -> ProcessorConfig {
    ProcessorConfig::default()
}

#[tokio::test]
async fn both_products_published_per_entry() {
    let decoder = StaticDecoder::new(uniform_wind_field(2, 2, 1.0, 0.0));
    let publisher = MemoryPublisher::new();
    let pipeline = ProcessorPipeline::new(decoder, publisher, test_config());

    let summary = pipeline.run(&[entry("2024-01-01 12:00:00")]).await.unwrap();
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn published_keys_and_content_types() {
    let decoder = StaticDecoder::new(uniform_wind_field(2, 2, 1.0, 0.0));
    let publisher = MemoryPublisher::new();
    let pipeline = ProcessorPipeline::new(decoder, publisher, test_config());

    pipeline.run(&[entry("2024-01-01 12:00:00")]).await.unwrap();

    let objects = pipeline_objects(&pipeline);
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].key, "geojson/2024_01_01_12_00_00.geojson");
    assert_eq!(objects[0].content_type, "application/json");
    assert_eq!(objects[1].key, "csv/2024_01_01_12_00_00.csv");
    assert_eq!(objects[1].content_type, "text/csv");
}

#[tokio::test]
async fn tabular_product_for_uniform_westerly() {
    // 2x2 grid, U=1 m/s, V=0 over the unit square
    let decoder = StaticDecoder::new(uniform_wind_field(2, 2, 1.0, 0.0));
    let publisher = MemoryPublisher::new();
    let pipeline = ProcessorPipeline::new(decoder, publisher, test_config());

    pipeline.run(&[entry("2024-01-01 12:00:00")]).await.unwrap();

    let objects = pipeline_objects(&pipeline);
    let csv_payload = std::str::from_utf8(&objects[1].payload).unwrap();
    let rows = parse_wind_table(csv_payload).unwrap();

    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_approx_eq!(row.wind_speed, 1.94384, 1e-9);
        // a westerly wind blows from 270 degrees
        assert_approx_eq!(row.wind_direction, 270.0, 1e-9);
    }
}

#[tokio::test]
async fn geojson_product_covers_densified_mesh() {
    let decoder = StaticDecoder::new(uniform_wind_field(2, 2, 1.0, 0.0));
    let publisher = MemoryPublisher::new();
    let pipeline = ProcessorPipeline::new(decoder, publisher, test_config());

    pipeline.run(&[entry("2024-01-01 12:00:00")]).await.unwrap();

    let objects = pipeline_objects(&pipeline);
    let geojson: serde_json::Value =
        serde_json::from_slice(&objects[0].payload).unwrap();

    assert_eq!(geojson["type"], "FeatureCollection");
    // 2 distinct coordinates per axis, factor 4 -> 8x8 mesh over the
    // square hull; every point is inside, so all 64 survive
    let features = geojson["features"].as_array().unwrap();
    assert_eq!(features.len(), 64);
    for feature in features {
        assert_eq!(feature["geometry"]["type"], "Point");
        let direction = feature["properties"]["wind_direction"].as_f64().unwrap();
        assert_approx_eq!(direction, 270.0, 1e-9);
    }
}

#[tokio::test]
async fn failure_aborts_run_by_default() {
    let publisher = MemoryPublisher::new();
    let pipeline = ProcessorPipeline::new(FailingDecoder, publisher, test_config());

    let entries = vec![entry("t1"), entry("t2")];
    let err = pipeline.run(&entries).await.unwrap_err();
    assert!(matches!(err, WindError::Decode(_)));
}

#[tokio::test]
async fn continue_on_error_processes_remaining_entries() {
    let publisher = MemoryPublisher::new();
    let config = ProcessorConfig {
        continue_on_error: true,
        ..test_config()
    };
    let pipeline = ProcessorPipeline::new(FailingDecoder, publisher, config);

    let entries = vec![entry("t1"), entry("t2"), entry("t3")];
    let summary = pipeline.run(&entries).await.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.failed, 3);
    assert_eq!(summary.succeeded, 0);
}

#[tokio::test]
async fn invalid_base64_is_a_decode_error() {
    let decoder = StaticDecoder::new(uniform_wind_field(2, 2, 1.0, 0.0));
    let publisher = MemoryPublisher::new();
    let pipeline = ProcessorPipeline::new(decoder, publisher, test_config());

    let bad = ForecastEntry {
        base64_encoded_response: "not base64 !!!".to_string(),
        timestamp: "t".to_string(),
    };
    let err = pipeline.run(&[bad]).await.unwrap_err();
    assert!(matches!(err, WindError::Decode(_)));
}

#[test]
fn load_entries_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"base64EncodedResponse": "QUJD", "timestamp": "2024-01-01 12:00:00"}}]"#
    )
    .unwrap();

    let entries = jobs::load_entries(file.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].timestamp, "2024-01-01 12:00:00");
}

#[test]
fn load_entries_rejects_malformed_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();

    let err = jobs::load_entries(file.path()).unwrap_err();
    assert!(matches!(err, WindError::Decode(_)));
}

/// Helper to reach into the pipeline's publisher.
fn pipeline_objects<D>(
    pipeline: &ProcessorPipeline<D, MemoryPublisher>,
) -> Vec<test_utils::PublishedObject> {
    pipeline.publisher().objects()
}
