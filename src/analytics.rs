use tracing::info;

/// Fire-and-forget event sink. Implementations must not fail the caller.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &str, category: &str, label: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &str, category: &str, label: &str) {
        info!(target: "analytics", event, category, label, "track");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _event: &str, _category: &str, _label: &str) {}
}
