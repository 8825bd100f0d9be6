use corsvalve::http::names;
use corsvalve::{HeaderNameError, HttpHeaders, format_canonical, parse_multiple_values, serialize};
use indexmap::IndexSet;
use rstest::rstest;
use std::collections::BTreeSet;

#[test]
fn serialize_empty_set_is_empty_string() {
    let set: IndexSet<String> = IndexSet::new();
    assert_eq!(serialize(&set, ", "), "");
}

#[test]
fn serialize_single_item_has_no_separator() {
    let set: IndexSet<&str> = ["GET"].into_iter().collect();
    assert_eq!(serialize(&set, ", "), "GET");
}

#[test]
fn serialize_follows_set_iteration_order() {
    let ordered: BTreeSet<&str> = ["PUT", "GET", "DELETE"].into_iter().collect();
    assert_eq!(serialize(&ordered, ","), "DELETE,GET,PUT");

    let inserted: IndexSet<&str> = ["PUT", "GET", "DELETE"].into_iter().collect();
    assert_eq!(serialize(&inserted, " "), "PUT GET DELETE");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[case(Some("\t\r\n"))]
fn parse_absent_or_blank_is_empty(#[case] value: Option<&str>) {
    assert!(parse_multiple_values(value).is_empty());
}

#[rstest]
#[case("a, b ,c")]
#[case("a,b,c")]
#[case("a b c")]
#[case("a b  c")]
#[case("  a ,\tb  c  ")]
fn parse_mixed_separators(#[case] value: &str) {
    assert_eq!(parse_multiple_values(Some(value)), ["a", "b", "c"]);
}

#[test]
fn parse_keeps_order_and_duplicates() {
    assert_eq!(
        parse_multiple_values(Some("X-B, X-A, X-B")),
        ["X-B", "X-A", "X-B"]
    );
}

#[rstest]
#[case("content-type", "Content-Type")]
#[case("X-CUSTOM-header", "X-Custom-Header")]
#[case("X-Forwarded-For", "X-Forwarded-For")]
#[case("  origin\t", "Origin")]
#[case("etag", "Etag")]
#[case("x_api.key", "X_api.key")]
#[case("access-control-request-headers", names::ACCESS_CONTROL_REQUEST_HEADERS)]
fn canonical_form(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(format_canonical(name).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn canonical_rejects_empty_name(#[case] name: &str) {
    assert_eq!(format_canonical(name), Err(HeaderNameError::Empty));
}

#[rstest]
#[case("Invalid Header", ' ')]
#[case("Invalid:Header", ':')]
#[case("a(b)", '(')]
#[case("x=y", '=')]
#[case("caf\u{e9}", '\u{e9}')]
#[case("ctl\u{1}", '\u{1}')]
fn canonical_rejects_non_token(#[case] name: &str, #[case] invalid: char) {
    match format_canonical(name) {
        Err(HeaderNameError::InvalidSyntax { invalid: got, .. }) => assert_eq!(got, invalid),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn error_messages_distinguish_causes() {
    let empty = format_canonical("").unwrap_err().to_string();
    let syntax = format_canonical("a b").unwrap_err().to_string();
    assert!(empty.contains("empty"));
    assert!(syntax.contains("RFC 2616"));
}

#[test]
fn headers_are_addressed_case_insensitively() {
    let mut headers = HttpHeaders::new();
    headers.set("access-control-request-method", "PUT").unwrap();

    assert_eq!(headers.get(names::ACCESS_CONTROL_REQUEST_METHOD), Some("PUT"));
    assert_eq!(headers.get("ACCESS-CONTROL-REQUEST-METHOD"), Some("PUT"));
    assert!(headers.contains(" Access-Control-Request-Method "));
    assert_eq!(headers.len(), 1);
}

#[test]
fn headers_reject_invalid_names() {
    let mut headers = HttpHeaders::new();
    assert_eq!(headers.set(" ", "x"), Err(HeaderNameError::Empty));
    assert!(headers.set("bad name", "x").is_err());
    assert!(headers.is_empty());
    assert_eq!(headers.get("bad name"), None);
}

#[test]
fn headers_multi_value_round_trip() {
    let mut headers = HttpHeaders::new();
    headers
        .set("access-control-request-headers", "content-type , x-requested-with")
        .unwrap();
    assert_eq!(
        headers.get_values(names::ACCESS_CONTROL_REQUEST_HEADERS),
        ["content-type", "x-requested-with"]
    );
    assert!(headers.get_values(names::ORIGIN).is_empty());

    let exposed: IndexSet<&str> = ["X-Total", "X-Page"].into_iter().collect();
    headers
        .set_values(names::ACCESS_CONTROL_EXPOSE_HEADERS, &exposed, ", ")
        .unwrap();
    assert_eq!(
        headers.stringify(),
        "Access-Control-Request-Headers: content-type , x-requested-with\r\n\
         Access-Control-Expose-Headers: X-Total, X-Page\r\n"
    );
}
