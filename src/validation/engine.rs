// src/validation/engine.rs

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::protocol::ProtocolConfig;
use crate::openrtb::request::BidRequest;
use crate::openrtb::response::{Bid, BidResponse};

/// 响应校验失败的全部类别。
/// 这些都是正常的业务判定结果而不是异常：输入不可变，重新校验得到同样的结果，
/// 因此全部为终态、不可重试，调用方直接对类别做分支即可。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no-bid reason is not one of the enumerated values")]
    InvalidNoBidReason,
    #[error("bid response id is missing")]
    MissingResponseId,
    #[error("bid response id does not match the bid request id")]
    IncorrectResponseId,
    #[error("bid response must contain exactly one seatbid")]
    IncorrectSeatCount,
    #[error("seatbid must contain exactly one bid")]
    IncorrectBidCount,
    #[error("bid response currency does not match the impression currency")]
    IncorrectResponseCurrency,
    #[error("bid price is below the impression bid floor")]
    BidBelowFloor,
}

impl BidResponse {
    /// 校验 BidResponse 是否为对 bid_request 的合法应答。
    /// 检查顺序固定：nbr 枚举 -> 未赋值 seatbid 短路 -> id 存在/匹配 ->
    /// seatbid/bid 数量 -> 货币 -> 底价，第一个违反的规则即为结果，不做累积。
    pub fn validate(&self, bid_request: &BidRequest) -> Result<(), ValidationError> {
        let result = self.run_checks(bid_request);
        if let Err(reason) = result {
            warn!(
                response_id = %self.id,
                request_id = %bid_request.id,
                %reason,
                "bid_rejected"
            );
        }
        result
    }

    fn run_checks(&self, bid_request: &BidRequest) -> Result<(), ValidationError> {
        let config = ProtocolConfig::global();

        // nbr 枚举检查先于任何形状短路
        if let Some(nbr) = self.nbr {
            if !config.is_valid_no_bid_reason(nbr) {
                return Err(ValidationError::InvalidNoBidReason);
            }
        }

        // seatbid 从未赋值：权威 no-bid，跳过包括 id 在内的全部后续检查。
        // 注意赋值为空列表不走这条路径。
        let seatbids = match &self.seatbid {
            None => {
                debug!(response_id = %self.id, request_id = %bid_request.id, "no_bid_response");
                return Ok(());
            }
            Some(seatbids) => seatbids,
        };

        if self.id.is_empty() {
            return Err(ValidationError::MissingResponseId);
        }
        if self.id != bid_request.id {
            return Err(ValidationError::IncorrectResponseId);
        }
        if seatbids.len() != 1 {
            return Err(ValidationError::IncorrectSeatCount);
        }
        let bids = &seatbids[0].bid;
        if bids.len() != 1 {
            return Err(ValidationError::IncorrectBidCount);
        }
        let bid = &bids[0];

        // 货币检查先于底价检查：货币不一致时不允许被底价违规掩盖。
        // 未匹配到 impid 对应的广告位时，货币与底价检查都不适用。
        if let Some(imp) = bid_request.find_impression(&bid.impid) {
            let expected = imp.bidfloorcur.as_ref().unwrap_or(&config.default_currency);
            let offered = self.cur.as_ref().unwrap_or(&config.default_currency);
            if offered != expected {
                return Err(ValidationError::IncorrectResponseCurrency);
            }
            if bid.price < imp.floor_price() {
                return Err(ValidationError::BidBelowFloor);
            }
        }

        Ok(())
    }

    /// 响应是否不携带任何出价。seatbid 未赋值或赋值为空列表都算 no-bid，
    /// 比 validate 的短路条件更宽：validate 只对未赋值的 seatbid 放行。
    pub fn is_no_bid(&self) -> bool {
        match &self.seatbid {
            None => true,
            Some(seatbids) => seatbids.is_empty(),
        }
    }

    /// 取出响应中唯一的一个 Bid 的引用，不做任何拷贝。
    /// 仅当恰好一个 seatbid 且其中恰好一个 bid 时成功。
    pub fn get_only_bid(&self) -> Result<&Bid, ValidationError> {
        let seatbids = self.seatbid.as_deref().unwrap_or(&[]);
        if seatbids.len() != 1 {
            return Err(ValidationError::IncorrectSeatCount);
        }
        let bids = &seatbids[0].bid;
        if bids.len() != 1 {
            return Err(ValidationError::IncorrectBidCount);
        }
        Ok(&bids[0])
    }
}
