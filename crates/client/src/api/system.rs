use crate::{ApiClient, ApiError};
use shared_types::{HealthStatus, LogEntry, MemoryUsage, MetricResponse};

/// Micrometer metric holding JVM memory in use, split by the `area` tag.
pub const MEMORY_METRIC: &str = "jvm.memory.used";
pub const HEAP_TAG: &str = "area:heap";
pub const NON_HEAP_TAG: &str = "area:nonheap";

pub async fn health(client: &ApiClient) -> Result<HealthStatus, ApiError> {
    client.get("/actuator/health").await
}

/// Fetch one metric, optionally narrowed by a `key:value` tag.
pub async fn metric(
    client: &ApiClient,
    name: &str,
    tag: Option<&str>,
) -> Result<MetricResponse, ApiError> {
    let path = format!("/actuator/metrics/{}", urlencoding::encode(name));
    match tag {
        Some(tag) => client.get_query(&path, &[("tag", tag)]).await,
        None => client.get(&path).await,
    }
}

/// Heap and non-heap usage. Each area is requested with its own tag so the
/// two figures are not the same untagged total.
pub async fn memory_usage(client: &ApiClient) -> Result<MemoryUsage, ApiError> {
    let (heap, non_heap) = futures::try_join!(
        metric(client, MEMORY_METRIC, Some(HEAP_TAG)),
        metric(client, MEMORY_METRIC, Some(NON_HEAP_TAG)),
    )?;
    Ok(MemoryUsage {
        heap_bytes: heap.statistic("VALUE").unwrap_or_default(),
        non_heap_bytes: non_heap.statistic("VALUE").unwrap_or_default(),
    })
}

pub async fn recent_logs(client: &ApiClient) -> Result<Vec<LogEntry>, ApiError> {
    client.get("/api/logging/recent").await
}
