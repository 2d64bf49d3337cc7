//! Tests for profile image uploads.

use salvo::http::StatusCode;

use super::helpers::{TestRequest, create_test_service, test_settings};

/// ## Summary
/// An upload becomes the image on the card page.
#[test_log::test(tokio::test)]
async fn upload_updates_card() {
    let service = create_test_service(&test_settings());

    let response = TestRequest::post("/profile-image")
        .image_body("image/gif", b"GIF89a")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    let src = response.body_json()["src"]
        .as_str()
        .expect("src field")
        .to_string();
    assert_eq!(src, "data:image/gif;base64,R0lGODlh");

    let _ = TestRequest::get("/")
        .send(&service)
        .await
        .assert_body_contains(&format!("src=\"{src}\""));
}

/// ## Summary
/// The latest of several uploads is the one displayed.
#[test_log::test(tokio::test)]
async fn last_upload_wins() {
    let service = create_test_service(&test_settings());

    for bytes in [&b"first"[..], &b"second"[..], &b"third"[..]] {
        let _ = TestRequest::post("/profile-image")
            .image_body("image/png", bytes)
            .send(&service)
            .await
            .assert_status(StatusCode::OK);
    }

    let _ = TestRequest::get("/")
        .send(&service)
        .await
        .assert_body_contains("data:image/png;base64,dGhpcmQ=");
}

/// ## Summary
/// Non-image and oversized uploads are rejected and leave the card unchanged.
#[test_log::test(tokio::test)]
async fn rejected_uploads() {
    let mut settings = test_settings();
    settings.image.max_bytes = 8;
    let service = create_test_service(&settings);

    let _ = TestRequest::post("/profile-image")
        .image_body("application/pdf", b"%PDF")
        .send(&service)
        .await
        .assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let _ = TestRequest::post("/profile-image")
        .image_body("image/png", &[0; 64])
        .send(&service)
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    let _ = TestRequest::get("/")
        .send(&service)
        .await
        .assert_body_contains("data:image/svg+xml;base64,");
}
