mod common;

use common::builders::{myapp_origins, policy, request};
use insta::assert_json_snapshot;
use origin_gate::{CorsPolicy, HeaderSet};
use serde::Serialize;

#[derive(Serialize)]
struct HeaderSnapshot {
    name: String,
    value: String,
}

fn capture(headers: HeaderSet) -> Vec<HeaderSnapshot> {
    headers
        .into_iter()
        .map(|(name, value)| HeaderSnapshot {
            name: name.to_string(),
            value,
        })
        .collect()
}

fn capture_for(policy: &CorsPolicy, origin: &str) -> Vec<HeaderSnapshot> {
    capture(request().origin(origin).decide(policy))
}

#[test]
fn default_exposed_headers_snapshot() {
    let policy = policy().origins(myapp_origins()).build();

    let snapshot = capture_for(&policy, "http://api.myapp.com");

    assert_json_snapshot!(snapshot, @r#"
    [
      {
        "name": "Access-Control-Allow-Origin",
        "value": "http://api.myapp.com"
      },
      {
        "name": "Access-Control-Expose-Headers",
        "value": "api-version, content-length, content-md5, content-type, date, request-id, response-time"
      }
    ]
    "#);
}

#[test]
fn credentialed_custom_headers_snapshot() {
    let policy = policy()
        .origins(["http://api.myapp.com"])
        .credentials(true)
        .expose_headers(["HeaderA", "HeaderB"])
        .vary_origin(true)
        .build();

    let snapshot = capture_for(&policy, "http://api.myapp.com");

    assert_json_snapshot!(snapshot, @r#"
    [
      {
        "name": "Access-Control-Allow-Origin",
        "value": "http://api.myapp.com"
      },
      {
        "name": "Access-Control-Allow-Credentials",
        "value": "true"
      },
      {
        "name": "Access-Control-Expose-Headers",
        "value": "api-version, content-length, content-md5, content-type, date, request-id, response-time, HeaderA, HeaderB"
      },
      {
        "name": "Vary",
        "value": "Origin"
      }
    ]
    "#);
}

#[test]
fn rejected_origin_snapshot() {
    let policy = policy().origins(myapp_origins()).credentials(true).build();

    let snapshot = capture_for(&policy, "http://random-website.com");

    assert_json_snapshot!(snapshot, @"[]");
}
