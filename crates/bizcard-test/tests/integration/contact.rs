//! Tests for saving the card as a contact file.

use bizcard_test::rfc::rfc::vcard::verify;
use salvo::http::StatusCode;

use super::helpers::{
    TestRequest, create_test_service, handoff_settings, name_only_settings, test_settings,
};

const FULL_CARD: &str = "BEGIN:VCARD\r\n\
    VERSION:3.0\r\n\
    FN:Jane Doe\r\n\
    ORG:Acme\r\n\
    TEL;TYPE=CELL:+1 (555) 123-4567\r\n\
    EMAIL;TYPE=INTERNET:jane@x.com\r\n\
    URL:https://www.linkedin.com/in/janedoe\r\n\
    ADR;TYPE=WORK:;;1 Main St, Springfield\r\n\
    END:VCARD";

/// ## Summary
/// The forced download carries the exact vCard, media type and filename.
#[test_log::test(tokio::test)]
async fn download_full_card() {
    let service = create_test_service(&test_settings());

    let response = TestRequest::get("/contact.vcf")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard; charset=utf-8")
        .assert_header("Content-Disposition", "attachment; filename=\"Jane_Doe.vcf\"");

    assert_eq!(response.body_string(), FULL_CARD);
}

/// ## Summary
/// A name-only card produces the four mandatory lines.
#[test_log::test(tokio::test)]
async fn download_name_only() {
    let service = create_test_service(&name_only_settings("Ada Lovelace King"));

    let response = TestRequest::get("/contact.vcf")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header(
            "Content-Disposition",
            "attachment; filename=\"Ada_Lovelace_King.vcf\"",
        );

    let body = response.body_string();
    assert_eq!(
        body,
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Ada Lovelace King\r\nEND:VCARD"
    );
    assert!(verify(&body).is_ok());
}

/// ## Summary
/// Repeated downloads are byte-identical.
#[test_log::test(tokio::test)]
async fn download_is_deterministic() {
    let service = create_test_service(&test_settings());

    let first = TestRequest::get("/contact.vcf").send(&service).await;
    let second = TestRequest::get("/contact.vcf").send(&service).await;

    assert_eq!(first.body, second.body);
}

/// ## Summary
/// The handoff redirects to a temporary object that serves the same vCard.
#[test_log::test(tokio::test)]
async fn open_hands_off_same_card() {
    let service = create_test_service(&handoff_settings(2_000));

    let response = TestRequest::get("/contact/open")
        .send(&service)
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let location = response
        .get_location()
        .expect("Location header")
        .to_string();
    assert!(location.starts_with("/blob/"), "{location}");

    let blob = TestRequest::get(&location)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/vcard");
    assert_eq!(blob.body_string(), FULL_CARD);
}

/// ## Summary
/// Each handoff issues a distinct temporary object.
#[test_log::test(tokio::test)]
async fn open_issues_distinct_handles() {
    let service = create_test_service(&handoff_settings(2_000));

    let first = TestRequest::get("/contact/open").send(&service).await;
    let second = TestRequest::get("/contact/open").send(&service).await;

    assert_ne!(first.get_location(), second.get_location());
}
