pub mod earnings;
pub mod stocks;

pub use earnings::{
    DateRange, EarningsEvent, EarningsFeedItem, EpsInfo, RawEarningsRecord, SessionTime,
};
pub use stocks::{MarketIndex, Stock, StockChart};
