// src/testutil.rs

use once_cell::sync::OnceCell;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use uuid::Uuid;

use crate::openrtb::currency::Currency;
use crate::openrtb::nbr::NoBidReason;
use crate::openrtb::request::{BidRequest, Impression};
use crate::openrtb::response::{Bid, BidResponse, SeatBid};

/// 构造用于测试的 BidRequest，带一个无底价的广告位和 app / device 上下文。
pub fn new_bid_request_for_testing(id: &str, imp_id: &str) -> BidRequest {
    make_bid_request(id, imp_id, None)
}

/// 构造用于测试的 BidRequest，并为广告位指定底价。
pub fn new_bid_request_with_floor_price_for_testing(
    id: &str,
    imp_id: &str,
    floor: f64,
) -> BidRequest {
    make_bid_request(id, imp_id, Some(floor))
}

fn make_bid_request(id: &str, imp_id: &str, bidfloor: Option<f64>) -> BidRequest {
    BidRequest {
        id: id.to_string(),
        imp: vec![Impression {
            id: imp_id.to_string(),
            bidfloor,
            bidfloorcur: None,
            banner: None,
        }],
        app: Some(Box::new(simd_json::json!({
            "id": "test-app",
            "name": "test_app",
            "bundle": "com.example.test"
        }))),
        device: Some(Box::new(simd_json::json!({
            "ua": "test-agent",
            "ip": "127.0.0.1"
        }))),
        app_detail: OnceCell::new(),
        device_detail: OnceCell::new(),
        test: Some(1),
        at: None,
        tmax: None,
        cur: None,
    }
}

/// 构造与 bid_request 匹配的合法单 bid 响应（一个 seatbid、一个 bid）。
pub fn new_bid_response_for_testing(bid_request: &BidRequest, price: f64) -> BidResponse {
    let imp_id = bid_request
        .imp
        .first()
        .map(|imp| imp.id.clone())
        .unwrap_or_default();
    BidResponse {
        id: bid_request.id.clone(),
        seatbid: Some(vec![SeatBid {
            bid: vec![Bid {
                id: format!("bid-{}", Uuid::new_v4()),
                impid: imp_id,
                price,
                adm: None,
                nurl: None,
                adomain: None,
                crid: None,
                dealid: None,
                w: None,
                h: None,
            }],
            seat: Some("test_seat".to_string()),
            group: Some(0),
        }]),
        bidid: None,
        cur: Some(Currency::default()),
        customdata: None,
        nbr: None,
    }
}

/// 使用 proptest 生成随机的 Impression
fn generate_impression() -> impl Strategy<Value = Impression> {
    ("[a-z0-9]{6,12}", proptest::option::of(0.0f64..10.0)).prop_map(|(id, bidfloor)| Impression {
        id: format!("imp-{}", id),
        bidfloor,
        bidfloorcur: None,
        banner: None,
    })
}

/// 使用 proptest 生成随机的单广告位 BidRequest
pub fn generate_bid_request() -> impl Strategy<Value = BidRequest> {
    ("[a-z0-9]{8,16}", generate_impression()).prop_map(|(id, imp)| BidRequest {
        id: format!("req-{}", id),
        imp: vec![imp],
        app: None,
        device: None,
        app_detail: OnceCell::new(),
        device_detail: OnceCell::new(),
        test: None,
        at: None,
        tmax: Some(250),
        cur: None,
    })
}

/// 使用 proptest 生成 seatbid 从未赋值的 no-bid 响应，
/// nbr 或者缺省或者取枚举内的合法值。
pub fn generate_no_bid_response() -> impl Strategy<Value = BidResponse> {
    ("[a-z0-9]{0,16}", proptest::option::of(0i32..=8)).prop_map(|(id, nbr)| BidResponse {
        id,
        seatbid: None,
        bidid: None,
        cur: None,
        customdata: None,
        nbr: nbr.map(NoBidReason),
    })
}

/// 取一个随机的 BidRequest 样本（示例与联调用）。
pub fn random_bid_request() -> BidRequest {
    let mut runner = proptest::test_runner::TestRunner::default();
    generate_bid_request()
        .new_tree(&mut runner)
        .unwrap()
        .current()
}
