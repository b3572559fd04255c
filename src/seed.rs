// Fixed roster the process starts with

use chrono::{DateTime, Utc};

use crate::models::{Server, ServerStatus};

/// The three demo hosts, in display order, all online and stamped `now`.
pub fn default_roster(now: DateTime<Utc>) -> Vec<Server> {
    let host = |id, name: &str, ip: &str, cpu, ram, disk, network, uptime| Server {
        id,
        name: name.to_string(),
        ip: ip.to_string(),
        status: ServerStatus::Online,
        cpu,
        ram,
        disk,
        network,
        uptime,
        last_update: now,
    };
    vec![
        host(1, "Server Local - Prometheus", "192.168.1.100", 45.0, 62.0, 78.0, 125.0, 45),
        host(2, "Server Backup", "192.168.1.101", 28.0, 41.0, 55.0, 89.0, 120),
        host(3, "Database Server", "192.168.1.102", 72.0, 85.0, 92.0, 234.0, 240),
    ]
}
