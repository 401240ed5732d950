// src/config/protocol.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::openrtb::currency::Currency;
use crate::openrtb::nbr::NoBidReason;

static GLOBAL_CONFIG: Lazy<ProtocolConfig> = Lazy::new(ProtocolConfig::default);

/// 协议级静态配置：默认货币代码与合法的 no-bid reason 集合。
/// 这些是协议常量，由配置提供给校验逻辑，而不是在校验时计算。
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProtocolConfig {
    pub default_currency: Currency,
    pub valid_no_bid_reasons: Vec<NoBidReason>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::default(),
            valid_no_bid_reasons: NoBidReason::ALL.to_vec(),
        }
    }
}

impl ProtocolConfig {
    /// 进程级共享实例
    pub fn global() -> &'static ProtocolConfig {
        &GLOBAL_CONFIG
    }

    /// 从 JSON 配置文件读取，文件缺失或解析失败时回退到默认值
    pub fn from_file(path: &str) -> Self {
        let content = fs::read_to_string(path).unwrap_or_else(|_| "{}".to_string());
        serde_json::from_str(&content).unwrap_or_default()
    }

    pub fn is_valid_no_bid_reason(&self, nbr: NoBidReason) -> bool {
        self.valid_no_bid_reasons.contains(&nbr)
    }
}
