// src/openrtb/nbr.rs

use serde::{Deserialize, Serialize};

/// OpenRTB No-Bid Reason（nbr）代码。
/// 线上数据可能携带枚举集合之外的整数，因此用透明 newtype 保存原始值，
/// 合法性由 `is_valid` 判断，而不是在反序列化阶段直接拒绝。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NoBidReason(pub i32);

impl NoBidReason {
    pub const UNKNOWN_ERROR: NoBidReason = NoBidReason(0);
    pub const TECHNICAL_ERROR: NoBidReason = NoBidReason(1);
    pub const INVALID_REQUEST: NoBidReason = NoBidReason(2);
    pub const KNOWN_WEB_SPIDER: NoBidReason = NoBidReason(3);
    pub const SUSPECTED_NON_HUMAN_TRAFFIC: NoBidReason = NoBidReason(4);
    pub const CLOUD_DATACENTER_PROXY_IP: NoBidReason = NoBidReason(5);
    pub const UNSUPPORTED_DEVICE: NoBidReason = NoBidReason(6);
    pub const BLOCKED_PUBLISHER: NoBidReason = NoBidReason(7);
    pub const UNMATCHED_USER: NoBidReason = NoBidReason(8);

    /// 协议枚举的全部合法取值
    pub const ALL: [NoBidReason; 9] = [
        NoBidReason::UNKNOWN_ERROR,
        NoBidReason::TECHNICAL_ERROR,
        NoBidReason::INVALID_REQUEST,
        NoBidReason::KNOWN_WEB_SPIDER,
        NoBidReason::SUSPECTED_NON_HUMAN_TRAFFIC,
        NoBidReason::CLOUD_DATACENTER_PROXY_IP,
        NoBidReason::UNSUPPORTED_DEVICE,
        NoBidReason::BLOCKED_PUBLISHER,
        NoBidReason::UNMATCHED_USER,
    ];

    /// 是否属于协议枚举的合法取值
    pub fn is_valid(self) -> bool {
        Self::ALL.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerated_codes_are_valid() {
        for reason in NoBidReason::ALL {
            assert!(reason.is_valid(), "{:?} should be valid", reason);
        }
    }

    #[test]
    fn out_of_range_codes_are_invalid() {
        assert!(!NoBidReason(-1).is_valid());
        assert!(!NoBidReason(9).is_valid());
        assert!(!NoBidReason(1000).is_valid());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&NoBidReason::KNOWN_WEB_SPIDER).unwrap();
        assert_eq!(json, "3");
        let back: NoBidReason = serde_json::from_str("1000").unwrap();
        assert_eq!(back, NoBidReason(1000));
        assert!(!back.is_valid());
    }
}
