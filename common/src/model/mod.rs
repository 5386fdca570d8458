pub mod dashboard;
pub mod kind;
pub mod prices;
pub mod sales;
pub mod stored;
pub mod summary;
pub mod tank;
