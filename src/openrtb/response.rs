use serde::{Deserialize, Serialize};

use crate::openrtb::currency::Currency;
use crate::openrtb::nbr::NoBidReason;

/// OpenRTB Bid Response。
/// seatbid 使用 Option<Vec<..>> 区分「从未赋值」与「赋值为空列表」两种状态：
/// None 表示响应方完全没有给出 seatbid 字段（权威 no-bid），
/// Some(vec![]) 表示字段存在但没有条目。两种状态在 JSON 往返中保持不变。
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BidResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seatbid: Option<Vec<SeatBid>>,
    pub bidid: Option<String>,
    pub cur: Option<Currency>,
    pub customdata: Option<String>,
    pub nbr: Option<NoBidReason>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeatBid {
    pub bid: Vec<Bid>,
    pub seat: Option<String>,
    pub group: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Bid {
    pub id: String,
    /// 该出价应答的广告位 ID（BidRequest.imp 中的 id）
    pub impid: String,
    pub price: f64,
    pub adm: Option<String>, // Ad markup (HTML or URL)
    pub nurl: Option<String>,
    pub adomain: Option<Vec<String>>,
    pub crid: Option<String>,
    pub dealid: Option<String>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}
