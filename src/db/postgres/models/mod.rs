pub mod candlestick;
pub mod stock_tick;
