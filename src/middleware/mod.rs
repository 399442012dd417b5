mod tracing;

pub use self::tracing::observability_middleware;
