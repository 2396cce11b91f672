// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含与外部系统交互的实现：
/// - 指标（metrics）：Prometheus 导出和搜索计数
/// - 搜索（search）：索引库客户端、搜索策略和分发器
pub mod metrics;
pub mod search;
