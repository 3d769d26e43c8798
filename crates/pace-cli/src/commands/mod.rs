pub mod dispatch;
pub mod forecast_item;
pub mod project;
pub mod schema;
pub mod team_load;
pub mod throughput;
pub mod variance;
