//! Village readiness scoring and priority ranking.
//!
//! House surveys are scored indicator by indicator, folded into per-domain
//! averages and an overall readiness percentage, and classified into priority
//! tiers that drive the district dashboard and project recommendations.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
