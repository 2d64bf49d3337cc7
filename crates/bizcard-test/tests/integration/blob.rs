//! Tests for temporary object lifetimes.

use std::time::Duration;

use salvo::http::StatusCode;

use super::helpers::{TestRequest, create_test_service, handoff_settings};

/// ## Summary
/// A handed-off object is released once the delay has passed.
#[test_log::test(tokio::test)]
async fn handoff_object_expires() {
    let service = create_test_service(&handoff_settings(50));

    let response = TestRequest::get("/contact/open").send(&service).await;
    let location = response
        .get_location()
        .expect("Location header")
        .to_string();

    let _ = TestRequest::get(&location)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(300)).await;

    let _ = TestRequest::get(&location)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Ids that were never issued are not found.
#[test_log::test(tokio::test)]
async fn unknown_object_not_found() {
    let service = create_test_service(&handoff_settings(2_000));

    let _ = TestRequest::get(&format!("/blob/{}", uuid::Uuid::new_v4()))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
