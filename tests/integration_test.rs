//! Integration tests for subnet-inspect
//!
//! These tests drive the public API from raw strings through to the saved report.

use std::io::Cursor;
use std::path::PathBuf;
use subnet_inspect::config::{Config, ReportFormat};
use subnet_inspect::models::{AddressClass, AnalyzeError, ValidationError};
use subnet_inspect::{analyze, session::run_session};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("subnet-inspect-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

#[test]
fn test_analyze_class_c_example() {
    let info = analyze("192.168.1.10", "255.255.255.0").expect("Failed to analyze");

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["network_address"], "192.168.1.0");
    assert_eq!(json["broadcast_address"], "192.168.1.255");
    assert_eq!(info.usable_hosts, 254);
    assert_eq!(info.prefix_length, 24);
    assert_eq!(info.address_class, AddressClass::C);
    assert!(info.is_classful);
}

#[test]
fn test_analyze_class_a_masks() {
    let classful = analyze("10.0.0.1", "255.0.0.0").unwrap();
    assert_eq!(classful.address_class, AddressClass::A);
    assert!(classful.is_classful);

    let classless = analyze("10.0.0.1", "255.255.255.0").unwrap();
    assert!(!classless.is_classful);
    assert_eq!(classless.classification(), "Classless");
}

#[test]
fn test_analyze_host_and_point_to_point_routes() {
    assert_eq!(analyze("10.1.2.3", "255.255.255.255").unwrap().usable_hosts, 0);
    assert_eq!(analyze("10.1.2.3", "255.255.255.254").unwrap().usable_hosts, 0);
    assert_eq!(analyze("10.1.2.3", "255.255.255.252").unwrap().usable_hosts, 2);
}

#[test]
fn test_analyze_invalid_inputs() {
    assert_eq!(
        analyze("256.1.1.1", "255.255.255.0").unwrap_err(),
        AnalyzeError::Address(ValidationError::InvalidOctetValue {
            segment: "256".to_string()
        })
    );
    assert_eq!(
        analyze("10.0.0.1", "255.0.255.0").unwrap_err(),
        AnalyzeError::Mask(ValidationError::InvalidMaskContiguity {
            mask: "255.0.255.0".to_string()
        })
    );
}

#[test]
fn test_session_writes_text_report() {
    let dir = scratch_dir("text");
    let config = Config {
        output_dir: dir.clone(),
        student_id: "555".to_string(),
        ..Config::default()
    };

    let mut input = Cursor::new("192.168.1.10\n255.255.255.0\n");
    let mut output = Vec::new();
    let info = run_session(&mut input, &mut output, &config).expect("Session failed");
    assert_eq!(info.classification(), "Class C");

    let path = dir.join("subnet_info_192.168.1.10_555.txt");
    let report = std::fs::read_to_string(&path).expect("Report file missing");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].ends_with("192.168.1.10"));
    assert!(lines[2].ends_with("Class C"));
    assert!(lines[5].ends_with("254"));
    assert!(lines[6].ends_with("/24"));

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Output file generated"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_session_writes_json_report_after_reprompt() {
    let dir = scratch_dir("json");
    let config = Config {
        output_dir: dir.clone(),
        report_format: ReportFormat::Json,
        ..Config::default()
    };

    let mut input = Cursor::new("10.0.0.300\n10.20.30.40\n255.255.0.255\n255.255.240.0\n");
    let mut output = Vec::new();
    run_session(&mut input, &mut output, &config).expect("Session failed");

    let path = dir.join("subnet_info_10.20.30.40_123456789.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("Report file missing"))
            .unwrap();
    assert_eq!(json["network_address"], "10.20.16.0");
    assert_eq!(json["broadcast_address"], "10.20.31.255");
    assert_eq!(json["prefix_length"], 20);
    assert_eq!(json["usable_hosts"], 4094);
    assert_eq!(json["is_classful"], false);

    std::fs::remove_dir_all(&dir).ok();
}
