//! Built-in component vocabulary and icon keys.
//!
//! The core never renders icons; it stores string keys and resolves them
//! here with a fixed fallback so every node has something to draw.

use crate::constants::{DEFAULT_ICON, GENERIC_KIND};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// A palette entry for a built-in component kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentKind {
    pub kind: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
}

const fn entry(
    category: &'static str,
    kind: &'static str,
    label: &'static str,
    icon: &'static str,
) -> ComponentKind {
    ComponentKind {
        kind,
        label,
        category,
        icon,
    }
}

/// Palette order: grouped by category, categories in display order.
pub const COMPONENTS: &[ComponentKind] = &[
    entry("Client", "client", "Client (Web / Mobile)", "Globe"),
    entry("Client", "mobile", "Mobile App", "Smartphone"),
    entry("Networking", "dns", "DNS", "Route"),
    entry("Networking", "cdn", "CDN", "Cloud"),
    entry("Networking", "loadbalancer", "Load Balancer", "Layers"),
    entry("Networking", "firewall", "Firewall", "Shield"),
    entry("Networking", "waf", "WAF", "ShieldAlert"),
    entry("Application", "server", "API Server", "Server"),
    entry("Application", "microservice", "Microservices", "Cpu"),
    entry("Application", "worker", "Background Workers", "Calculator"),
    entry("Application", "scheduler", "Scheduler", "Clock"),
    entry("Data Storage", "database", "Database", "Database"),
    entry("Data Storage", "storage", "Object Storage", "Box"),
    entry("Data Storage", "filestorage", "File Storage", "File"),
    entry("Data Storage", "warehouse", "Data Warehouse", "Archive"),
    entry("Data Storage", "datalake", "Data Lake", "Layers"),
    entry("Data Storage", "backup", "Backup Storage", "Save"),
    entry("Caching", "cache", "Cache", "HardDrive"),
    entry("Caching", "cdncache", "CDN Cache", "Zap"),
    entry("Async & Messaging", "queue", "Message Queue", "LayoutGrid"),
    entry("Async & Messaging", "taskqueue", "Task Queue", "List"),
    entry("Async & Messaging", "pubsub", "Pub-Sub System", "Radio"),
    entry("Async & Messaging", "stream", "Event Stream", "Zap"),
    entry("Security & Access", "auth", "Authentication", "Lock"),
    entry("Security & Access", "authorization", "Authorization", "Key"),
    entry("Security & Access", "gateway", "API Gateway", "Router"),
    entry("Security & Access", "ratelimiter", "Rate Limiter", "Gauge"),
    entry("Security & Access", "secrets", "Secrets Manager", "Key"),
    entry("Reliability & Scaling", "registry", "Service Registry", "Book"),
    entry("Reliability & Scaling", "autoscaler", "Auto Scaler", "TrendingUp"),
    entry("Reliability & Scaling", "replica", "Replicas", "Copy"),
    entry("Reliability & Scaling", "failover", "Failover System", "Shuffle"),
    entry("Reliability & Scaling", "circuitbreaker", "Circuit Breaker", "ToggleRight"),
    entry("Observability", "logging", "Logging System", "FileText"),
    entry("Observability", "metrics", "Metrics System", "BarChart"),
    entry("Observability", "tracing", "Tracing System", "Activity"),
    entry("Observability", "alerts", "Alert Manager", "Bell"),
    entry("Deployment & Ops", "config", "Config Service", "Settings"),
    entry("Deployment & Ops", "cicd", "CI/CD Pipeline", "GitBranch"),
    entry("Deployment & Ops", "container", "Container Runtime", "Container"),
    entry("Deployment & Ops", "orchestrator", "Orchestrator", "Ship"),
    entry("Search & Analytics", "search", "Search Engine", "Search"),
    entry("Search & Analytics", "indexing", "Indexing Service", "ListStart"),
    entry("Search & Analytics", "analytics", "Analytics Engine", "PieChart"),
    entry("External Services", "notification", "Notification Service", "Mail"),
    entry("External Services", "payment", "Payment Gateway", "CreditCard"),
    entry("External Services", "external", "Third-Party APIs", "LinkIcon"),
];

/// Icon keys available to custom kinds and the properties panel, sorted.
pub static ICON_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names: Vec<&'static str> = COMPONENTS
        .iter()
        .map(|c| c.icon)
        .chain([
            "ChevronDown",
            "ChevronRight",
            "Plus",
            "Trash2",
            "User",
            "Hexagon",
            "Component",
            "Package",
        ])
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    names.sort_unstable();
    names
});

static BY_KIND: Lazy<HashMap<&'static str, &'static ComponentKind>> =
    Lazy::new(|| COMPONENTS.iter().map(|c| (c.kind, c)).collect());

pub fn lookup(kind: &str) -> Option<&'static ComponentKind> {
    BY_KIND.get(kind).copied()
}

pub fn is_builtin(kind: &str) -> bool {
    BY_KIND.contains_key(kind)
}

pub fn is_known_icon(name: &str) -> bool {
    ICON_NAMES.binary_search(&name).is_ok()
}

/// The catalog entry for `kind`, or the generic kind when unknown.
pub fn resolve_kind(kind: &str) -> &'static ComponentKind {
    lookup(kind)
        .or_else(|| lookup(GENERIC_KIND))
        .unwrap_or(&COMPONENTS[0])
}

/// Icon key to draw for a node: its own `iconName` when known, then the
/// kind's icon, then [`DEFAULT_ICON`].
pub fn icon_for(kind: &str, icon_name: Option<&str>) -> &'static str {
    if let Some(idx) = icon_name.and_then(|n| ICON_NAMES.binary_search(&n).ok()) {
        return ICON_NAMES[idx];
    }
    lookup(kind).map(|c| c.icon).unwrap_or(DEFAULT_ICON)
}

/// Categories in palette order with their entries.
pub fn categories() -> Vec<(&'static str, Vec<&'static ComponentKind>)> {
    let mut out: Vec<(&'static str, Vec<&'static ComponentKind>)> = Vec::new();
    for component in COMPONENTS {
        match out.last_mut() {
            Some((category, items)) if *category == component.category => items.push(component),
            _ => out.push((component.category, vec![component])),
        }
    }
    out
}
