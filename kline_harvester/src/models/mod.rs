pub mod kline;
pub mod run;
pub mod symbol;
pub mod timeframe;
