// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use sitesearch::config::settings::Settings;
use sitesearch::infrastructure::search::{create_dispatcher, create_index_store};
use sitesearch::presentation::routes;
use sitesearch::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责组装索引库客户端、搜索策略和HTTP服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting sitesearch...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if settings.metrics.enabled {
        sitesearch::infrastructure::metrics::init_metrics(&settings.metrics.listen_addr);
    }

    // 3. Index store client, shared by every strategy
    let store = create_index_store(&settings)?;

    // 4. Strategies
    let dispatcher = Arc::new(create_dispatcher(store, &settings.search)?);

    // 5. Start HTTP server
    let app = routes::routes(dispatcher);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
