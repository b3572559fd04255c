// Wire format tests (camelCase JSON, enum spellings)

use chrono::{TimeZone, Utc};
use monitor_mock::models::*;
use monitor_mock::seed::default_roster;

#[test]
fn test_server_serializes_camel_case_with_lowercase_status() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let server = &default_roster(at)[0];
    let json = serde_json::to_value(server).unwrap();
    assert_eq!(json["name"], "Server Local - Prometheus");
    assert_eq!(json["ip"], "192.168.1.100");
    assert_eq!(json["status"], "online");
    assert_eq!(json["cpu"], 45.0);
    assert_eq!(json["uptime"], 45);
    assert_eq!(json["lastUpdate"], "2024-05-01T12:00:00Z");
    assert!(json.get("last_update").is_none());
}

#[test]
fn test_alert_serializes_type_field_and_uppercase_kind() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let alert = Alert::new("Database Server", AlertType::Ram, 86.456, at);
    let json = serde_json::to_value(&alert).unwrap();
    assert_eq!(json["type"], "RAM");
    assert_eq!(json["value"], "86.46");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["server"], "Database Server");
    assert_eq!(json["id"], at.timestamp_millis());
    assert!(json.get("kind").is_none());

    let cpu = serde_json::to_value(AlertType::Cpu).unwrap();
    assert_eq!(cpu, "CPU");
}

#[test]
fn test_alert_value_keeps_trailing_zeros() {
    let alert = Alert::new("x", AlertType::Cpu, 81.5, Utc::now());
    assert_eq!(alert.value, "81.50");
}

#[test]
fn test_metrics_update_reads_server_name() {
    let body = r#"{"serverName":"Server Backup","cpu":12.5,"ram":40,"disk":55.25,"network":101}"#;
    let update: MetricsUpdate = serde_json::from_str(body).unwrap();
    assert_eq!(update.server_name, "Server Backup");
    assert_eq!(update.ram, 40.0);
    assert_eq!(update.network, 101.0);
}

#[test]
fn test_metrics_update_requires_all_readings() {
    let body = r#"{"serverName":"Server Backup","cpu":12.5}"#;
    assert!(serde_json::from_str::<MetricsUpdate>(body).is_err());
}

#[test]
fn test_history_default_has_four_empty_series() {
    let json = serde_json::to_value(History::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "cpu": [], "ram": [], "disk": [], "network": [] })
    );
}
