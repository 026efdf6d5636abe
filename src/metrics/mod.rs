//! # Módulo de Métricas
//! src/metrics/mod.rs
//!
//! Contadores de observabilidad del servidor: cuántos intercambios se
//! atendieron, cuántos fallaron y cuántos bytes salieron. Se imprimen
//! como JSON después de cada conexión.

pub mod collector;

pub use collector::{MetricsSnapshot, ServerMetrics};
