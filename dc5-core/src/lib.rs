pub mod models;
pub mod pool;
pub mod sums;
pub mod filters;
pub mod dedup;
pub mod score;
pub mod pipeline;
