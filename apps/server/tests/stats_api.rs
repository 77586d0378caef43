mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{app_with, get_json, PolicyBuilder};

#[tokio::test]
async fn stats_report_sorted_status_counts_and_distinct_lines() {
    let app = app_with(vec![
        PolicyBuilder::new("POL001", "Acme Corporation")
            .lines(&["Commercial Auto"])
            .status("ACTIVE")
            .build(),
        PolicyBuilder::new("POL002", "XYZ Industries")
            .lines(&["General Liability"])
            .status("ACTIVE")
            .build(),
        PolicyBuilder::new("POL003", "ABC Company")
            .lines(&["Workers Compensation"])
            .status("PENDING")
            .build(),
    ]);

    let (status, body) = get_json(&app, "/api/line-of-business-stats").await;

    assert_eq!(status, StatusCode::OK);

    // Neither ACTIVE nor PENDING is in the label enumeration.
    assert_eq!(
        body["statuses"],
        json!([
            { "id": "ACTIVE", "count": 2, "name": "Unknown" },
            { "id": "PENDING", "count": 1, "name": "Unknown" }
        ])
    );

    let mut lines: Vec<String> = body["linesOfBusiness"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line.as_str().unwrap().to_string())
        .collect();
    lines.sort();
    assert_eq!(
        lines,
        vec!["Commercial Auto", "General Liability", "Workers Compensation"]
    );
}

#[tokio::test]
async fn known_status_codes_carry_display_labels() {
    let app = app_with(vec![
        PolicyBuilder::new("POL001", "Acme Corporation")
            .status("BOUND")
            .build(),
        PolicyBuilder::new("POL002", "XYZ Industries")
            .status("PENDING_RENEWAL")
            .build(),
    ]);

    let (status, body) = get_json(&app, "/api/line-of-business-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["statuses"],
        json!([
            { "id": "BOUND", "count": 1, "name": "Bound" },
            { "id": "PENDING_RENEWAL", "count": 1, "name": "Pending Renewal" }
        ])
    );
}

#[tokio::test]
async fn shared_lines_are_reported_once() {
    let app = app_with(vec![
        PolicyBuilder::new("POL001", "Acme Corporation")
            .lines(&["Commercial Auto", "Cargo"])
            .build(),
        PolicyBuilder::new("POL002", "XYZ Industries")
            .lines(&["Commercial Auto"])
            .build(),
    ]);

    let (_, body) = get_json(&app, "/api/line-of-business-stats").await;

    let mut lines: Vec<String> = body["linesOfBusiness"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line.as_str().unwrap().to_string())
        .collect();
    lines.sort();
    assert_eq!(lines, vec!["Cargo", "Commercial Auto"]);
}

#[tokio::test]
async fn empty_collection_yields_empty_stats() {
    let app = app_with(Vec::new());

    let (status, body) = get_json(&app, "/api/line-of-business-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statuses"], json!([]));
    assert_eq!(body["linesOfBusiness"], json!([]));
}
