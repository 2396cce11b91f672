// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索基础设施模块
///
/// 提供索引库客户端（Elasticsearch、内存）、各实体的精确匹配搜索策略，
/// 以及按类型分发和聚合结果的分发器
pub mod dispatcher;
pub mod elasticsearch;
pub mod factory;
pub mod memory;
pub mod strategy;

pub use dispatcher::SearchDispatcher;
pub use factory::{create_dispatcher, create_index_store};
