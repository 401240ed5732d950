// src/openrtb/currency.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 协议默认货币代码（ISO 4217），请求和响应双方都未指定货币时使用
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// 已知的货币代码集合（ISO 4217）
static KNOWN_CURRENCY_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "USD", "CNY", "EUR", "GBP", "JPY", "KRW", "RUB", "INR", "BRL", "AUD", "CAD", "HKD",
        "SGD", "TWD", "MXN",
    ]
    .into_iter()
    .collect()
});

/// ISO 4217 货币代码。
/// 校验阶段只在默认替换之后做整体比较，不做汇率换算。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Currency(pub String);

impl Currency {
    pub fn new(code: &str) -> Self {
        Currency(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否属于已知货币代码集合
    pub fn is_known(&self) -> bool {
        KNOWN_CURRENCY_CODES.contains(self.0.as_str())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency(DEFAULT_CURRENCY_CODE.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}
