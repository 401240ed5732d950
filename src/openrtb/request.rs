use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use simd_json::OwnedValue;

use crate::openrtb::currency::Currency;

/// OpenRTB BidRequest 结构体。
/// imp 直接解析为 Impression 列表（响应校验需要读取每个广告位的底价），
/// app / device 上下文采用延迟解析方式存储为 OwnedValue（owned, 'static），
/// 并提供 lazy 缓存字段和 getter 方法。
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BidRequest {
    pub id: String,

    /// 广告展示请求列表（imp）
    #[serde(default)]
    pub imp: Vec<Impression>,

    /// 应用信息
    pub app: Option<Box<OwnedValue>>,
    #[serde(skip)]
    pub app_detail: OnceCell<AppDetail>,

    /// 设备信息
    pub device: Option<Box<OwnedValue>>,
    #[serde(skip)]
    pub device_detail: OnceCell<DeviceDetail>,

    // 其它简单字段
    pub test: Option<i32>,
    pub at: Option<i32>,
    pub tmax: Option<u64>,
    pub cur: Option<Vec<Currency>>,
}

/// Impression 表示一次广告展示机会（广告位）
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Impression {
    /// 广告位 ID，在同一个请求内唯一
    pub id: String,
    /// 底价，未设置视为 0
    pub bidfloor: Option<f64>,
    /// 底价货币（ISO 4217），未设置时使用协议默认货币
    pub bidfloorcur: Option<Currency>,
    /// banner 信息
    pub banner: Option<Banner>,
}

/// Banner 表示横幅广告位的尺寸信息
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Banner {
    pub w: Option<i32>,
    pub h: Option<i32>,
}

/// AppDetail 表示应用信息解析后的数据结构
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub bundle: Option<String>,
}

/// DeviceDetail 表示设备信息解析后的数据结构
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeviceDetail {
    pub ua: Option<String>,
    pub ip: Option<String>,
}

// Getter 方法实现
impl BidRequest {
    /// 根据广告位 ID 查找对应的 Impression
    pub fn find_impression(&self, imp_id: &str) -> Option<&Impression> {
        self.imp.iter().find(|imp| imp.id == imp_id)
    }

    pub fn get_app_detail(&self) -> Option<&AppDetail> {
        self.app.as_ref().map(|raw| {
            self.app_detail.get_or_init(|| {
                let s = serde_json::to_string(&*raw)
                    .expect("Failed to convert app to JSON string");
                serde_json::from_str(&s)
                    .expect("Failed to parse app into AppDetail")
            })
        })
    }

    pub fn get_device_detail(&self) -> Option<&DeviceDetail> {
        self.device.as_ref().map(|raw| {
            self.device_detail.get_or_init(|| {
                let s = serde_json::to_string(&*raw)
                    .expect("Failed to convert device to JSON string");
                serde_json::from_str(&s)
                    .expect("Failed to parse device into DeviceDetail")
            })
        })
    }
}

impl Impression {
    /// 底价，未设置视为 0
    pub fn floor_price(&self) -> f64 {
        self.bidfloor.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_with_floor_and_context() {
        let raw = r#"{
            "id": "req-001",
            "imp": [
                { "id": "imp-1", "bidfloor": 1.5, "bidfloorcur": "CNY", "banner": { "w": 300, "h": 250 } }
            ],
            "app": { "id": "app-9", "name": "news_app", "bundle": "com.example.news" },
            "device": { "ua": "Mozilla/5.0", "ip": "203.0.113.7" },
            "tmax": 250
        }"#;

        let request: BidRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.id, "req-001");
        assert_eq!(request.imp.len(), 1);

        let imp = request.find_impression("imp-1").unwrap();
        assert_eq!(imp.floor_price(), 1.5);
        assert_eq!(imp.bidfloorcur, Some(Currency::new("CNY")));
        assert_eq!(imp.banner.as_ref().unwrap().w, Some(300));

        let app = request.get_app_detail().unwrap();
        assert_eq!(app.bundle.as_deref(), Some("com.example.news"));
        let device = request.get_device_detail().unwrap();
        assert_eq!(device.ip.as_deref(), Some("203.0.113.7"));
        assert!(request.find_impression("imp-2").is_none());
    }

    #[test]
    fn missing_imp_defaults_to_empty_list() {
        let request: BidRequest = serde_json::from_str(r#"{ "id": "req-002" }"#).unwrap();
        assert!(request.imp.is_empty());
        assert!(request.get_app_detail().is_none());
        assert!(request.get_device_detail().is_none());
    }
}
