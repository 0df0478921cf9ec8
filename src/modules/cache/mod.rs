//! Client-side query cache shared by every view of the dashboard

mod query_cache;

pub use query_cache::{QueryCache, QueryFetcher, QuerySnapshot, Refresher};
