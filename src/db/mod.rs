pub mod stock_data_queries;
pub mod stock_queries;
