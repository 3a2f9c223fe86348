/// Receives the name of every operation a `TelegramBot` performs.
pub trait CallLog: Send + Sync {
    fn call(&self, operation: &str);
}

/// Default: records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl CallLog for NoopLog {
    fn call(&self, _operation: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl CallLog for TracingLog {
    fn call(&self, operation: &str) {
        tracing::info!(operation, "telegram call");
    }
}

impl<F> CallLog for F
where
    F: Fn(&str) + Send + Sync,
{
    fn call(&self, operation: &str) {
        self(operation)
    }
}
