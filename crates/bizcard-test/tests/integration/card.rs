//! Tests for the card page.

use salvo::http::StatusCode;

use super::helpers::{
    TestRequest, create_test_service, handoff_settings, name_only_settings, test_settings,
};

/// ## Summary
/// The page shows every configured field and action in order.
#[test_log::test(tokio::test)]
async fn card_page_shows_all_fields() {
    let service = create_test_service(&test_settings());

    let response = TestRequest::get("/")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("Content-Type", "text/html")
        .assert_body_contains("<h1>Jane Doe</h1>")
        .assert_body_contains("Staff Engineer")
        .assert_body_contains("Acme")
        .assert_body_contains("1 Main St, Springfield")
        .assert_body_contains("href=\"tel:+1 (555) 123-4567\"")
        .assert_body_contains("href=\"https://wa.me/15551234567\"")
        .assert_body_contains("href=\"mailto:jane@x.com\"")
        .assert_body_contains("href=\"https://www.linkedin.com/in/janedoe\"")
        .assert_body_contains("<a class=\"save\" href=\"/contact.vcf\">");

    let body = response.body_string();
    let call = body.find(">Call<").expect("call action");
    let whatsapp = body.find(">WhatsApp<").expect("whatsapp action");
    let email = body.find(">Email<").expect("email action");
    let linkedin = body.find(">LinkedIn<").expect("linkedin action");
    assert!(call < whatsapp && whatsapp < email && email < linkedin);
}

/// ## Summary
/// A name-only card renders no action links and the initials placeholder.
#[test_log::test(tokio::test)]
async fn card_page_name_only() {
    let service = create_test_service(&name_only_settings("Ada King"));

    let _ = TestRequest::get("/")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<h1>Ada King</h1>")
        .assert_body_contains("data:image/svg+xml;base64,")
        .assert_body_not_contains("class=\"action\"");
}

/// ## Summary
/// Under the handoff policy the save button points at the open route.
#[test_log::test(tokio::test)]
async fn card_page_handoff_button() {
    let service = create_test_service(&handoff_settings(2_000));

    let _ = TestRequest::get("/")
        .send(&service)
        .await
        .assert_body_contains("<a class=\"save\" href=\"/contact/open\">");
}

#[test_log::test(tokio::test)]
async fn healthcheck() {
    let service = create_test_service(&test_settings());

    let response = TestRequest::get("/app/healthcheck")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body_string(), "OK");
}
