pub mod worker_count_resolver;

pub use worker_count_resolver::{
    resolve, WorkerCountResolver, DEFAULT_CONNECTION_LIMIT, DEFAULT_THREAD_COUNT,
    FALLBACK_WORKER_COUNT,
};
