// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{SearchError, SearchType};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

pub fn init_metrics(listen_addr: &str) {
    let addr: SocketAddr = match listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次发往索引库的搜索
pub fn record_search(kind: SearchType, elapsed: Duration) {
    metrics::counter!("search_requests_total", "strategy" => kind.name()).increment(1);
    metrics::histogram!("search_duration_seconds", "strategy" => kind.name())
        .record(elapsed.as_secs_f64());
}

/// 记录一次降级为空结果的搜索失败
pub fn record_failure(kind: SearchType, error: &SearchError) {
    metrics::counter!(
        "search_failures_total",
        "strategy" => kind.name(),
        "kind" => error.kind()
    )
    .increment(1);
}
