// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含对外接口的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含搜索结果模型、搜索策略与索引库接口、查询构建和结果映射
pub mod domain;

/// 基础设施模块
///
/// 提供索引库客户端、搜索策略实现、分发器和指标
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
