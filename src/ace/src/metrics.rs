//! Decision metrics for engine observability

use std::sync::Arc;
use tokio::sync::RwLock;

/// Snapshot of engine decision counters
#[derive(Debug, Clone, Default)]
pub struct DecisionMetrics {
    /// Total authorization checks
    pub total_checks: u64,

    /// Allowed decisions
    pub allowed: u64,

    /// Denied decisions
    pub denied: u64,

    /// Bypasses on the internal trusted channel
    pub internal_bypasses: u64,

    /// Bypasses on public handlers
    pub public_bypasses: u64,

    /// Bypasses for admin-tier staff
    pub admin_bypasses: u64,

    /// Fail-closed denials on handlers with no usable ACE configuration
    pub unresolved_denials: u64,
}

impl DecisionMetrics {
    /// Fraction of checks that were allowed
    pub fn allow_rate(&self) -> f64 {
        if self.total_checks == 0 {
            0.0
        } else {
            self.allowed as f64 / self.total_checks as f64
        }
    }
}

/// Which short-circuit rule bypassed the decision procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bypass {
    /// Internal trusted channel
    Internal,
    /// Public handler
    Public,
    /// Admin-tier staff caller
    AdminTier,
}

/// Collects decision counters across concurrent checks
#[derive(Clone, Default)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<DecisionMetrics>>,
}

impl MetricsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a final decision
    pub async fn record_decision(&self, allowed: bool) {
        let mut metrics = self.metrics.write().await;
        metrics.total_checks += 1;

        if allowed {
            metrics.allowed += 1;
        } else {
            metrics.denied += 1;
        }
    }

    /// Record a short-circuit bypass
    pub async fn record_bypass(&self, bypass: Bypass) {
        let mut metrics = self.metrics.write().await;
        match bypass {
            Bypass::Internal => metrics.internal_bypasses += 1,
            Bypass::Public => metrics.public_bypasses += 1,
            Bypass::AdminTier => metrics.admin_bypasses += 1,
        }
    }

    /// Record a fail-closed denial caused by an unresolved member id
    pub async fn record_unresolved_denial(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.unresolved_denials += 1;
    }

    /// Snapshot the current counters
    pub async fn snapshot(&self) -> DecisionMetrics {
        self.metrics.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decision_counters() {
        let collector = MetricsCollector::new();
        collector.record_decision(true).await;
        collector.record_decision(true).await;
        collector.record_decision(false).await;

        let snapshot = collector.snapshot().await;
        assert_eq!(snapshot.total_checks, 3);
        assert_eq!(snapshot.allowed, 2);
        assert_eq!(snapshot.denied, 1);
        assert!((snapshot.allow_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_bypass_counters() {
        let collector = MetricsCollector::new();
        collector.record_bypass(Bypass::Internal).await;
        collector.record_bypass(Bypass::Public).await;
        collector.record_bypass(Bypass::AdminTier).await;
        collector.record_bypass(Bypass::AdminTier).await;

        let snapshot = collector.snapshot().await;
        assert_eq!(snapshot.internal_bypasses, 1);
        assert_eq!(snapshot.public_bypasses, 1);
        assert_eq!(snapshot.admin_bypasses, 2);
    }

    #[test]
    fn test_allow_rate_empty() {
        assert_eq!(DecisionMetrics::default().allow_rate(), 0.0);
    }
}
