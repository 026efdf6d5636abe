//! # Collector de Métricas
//! src/metrics/collector.rs
//!
//! Contadores del loop de atención. El servidor es de un solo thread, así
//! que alcanza con un struct mutable plano, sin locks.

use std::time::Instant;

/// Contadores acumulados del servidor
pub struct ServerMetrics {
    /// Intercambios completados con el archivo enviado
    served: u64,

    /// Intercambios que fallaron al leer el archivo
    failed: u64,

    /// Total de bytes escritos a clientes
    bytes_sent: u64,

    /// Momento del arranque
    start_time: Instant,
}

impl ServerMetrics {
    /// Crea un collector con todos los contadores en cero
    pub fn new() -> Self {
        Self {
            served: 0,
            failed: 0,
            bytes_sent: 0,
            start_time: Instant::now(),
        }
    }

    /// Registra un intercambio exitoso
    pub fn record_served(&mut self, bytes: u64) {
        self.served += 1;
        self.bytes_sent += bytes;
    }

    /// Registra un intercambio fallido (archivo ilegible)
    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Obtiene un snapshot de las métricas
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            served: self.served,
            failed: self.failed,
            bytes_sent: self.bytes_sent,
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }

    /// Obtiene las métricas actuales en formato JSON (una línea)
    pub fn to_json(&self) -> String {
        let snapshot = self.snapshot();

        format!(
            r#"{{"uptime_seconds": {}, "served": {}, "failed": {}, "total": {}, "bytes_sent": {}}}"#,
            snapshot.uptime_secs,
            snapshot.served,
            snapshot.failed,
            snapshot.served + snapshot.failed,
            snapshot.bytes_sent
        )
    }
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot de métricas (para uso externo)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub served: u64,
    pub failed: u64,
    pub bytes_sent: u64,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_at_zero() {
        let metrics = ServerMetrics::new();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.served, 0);
        assert_eq!(snapshot.failed, 0);
        assert_eq!(snapshot.bytes_sent, 0);
    }

    #[test]
    fn test_record_served() {
        let mut metrics = ServerMetrics::new();
        metrics.record_served(100);
        metrics.record_served(50);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.served, 2);
        assert_eq!(snapshot.failed, 0);
        assert_eq!(snapshot.bytes_sent, 150);
    }

    #[test]
    fn test_record_failed() {
        let mut metrics = ServerMetrics::new();
        metrics.record_failed();
        metrics.record_served(10);
        metrics.record_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.served, 1);
        assert_eq!(snapshot.failed, 2);
        assert_eq!(snapshot.bytes_sent, 10);
    }

    #[test]
    fn test_to_json_contains_counters() {
        let mut metrics = ServerMetrics::new();
        metrics.record_served(42);
        metrics.record_failed();

        let json = metrics.to_json();
        assert!(json.contains(r#""served": 1"#));
        assert!(json.contains(r#""failed": 1"#));
        assert!(json.contains(r#""total": 2"#));
        assert!(json.contains(r#""bytes_sent": 42"#));
        assert!(json.contains("uptime_seconds"));
    }

    #[test]
    fn test_served_empty_file() {
        // Un archivo vacío cuenta como intercambio servido con cero bytes
        let mut metrics = ServerMetrics::new();
        metrics.record_served(0);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.served, 1);
        assert_eq!(snapshot.bytes_sent, 0);
    }
}
