//! TUI widgets, one module per view

pub mod chat;
pub mod cve_hub;
pub mod dashboard;
pub mod disclaimer;
pub mod header_audit;
pub mod owasp;
pub mod settings;
pub mod vuln_explainer;
