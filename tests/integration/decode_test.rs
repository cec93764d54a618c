//! End-to-end decoding scenarios, one per message format.

use crate::common::{decoder, s3_event_notification, sns_notification};
use qp_decoder::Resolved;
use qp_error::ParseError;
use qp_types::{DecoderConfig, S3_OBJECT_CREATED_EXPRESSION};

#[test]
fn test_plain_message() {
    let decoder = decoder("plain", "");
    assert_eq!(
        decoder.decode("s3://some-bucket/with/stuff/inside").unwrap(),
        "s3://some-bucket/with/stuff/inside"
    );
}

#[test]
fn test_plain_is_identity_for_any_payload() {
    let decoder = decoder("plain", "");
    let payloads = [
        "s3://bucket/key",
        "",
        " ",
        "not a path at all",
        r#"{"Message":"s3://b/k"}"#,
        "s3://bucket/ünïcödé/key",
    ];
    for payload in payloads {
        assert_eq!(decoder.decode(payload).unwrap(), payload);
    }
}

#[test]
fn test_sns_message() {
    let decoder = decoder("sns", "");
    let payload = r#"{"Type":"Notification","Message":"s3://bucket/path/to/file"}"#;
    assert_eq!(decoder.decode(payload).unwrap(), "s3://bucket/path/to/file");
}

#[test]
fn test_sns_ignores_other_members() {
    let decoder = decoder("sns", "");
    for path in ["s3://another-bucket/path/to/file", "s3://b/k with spaces", ""] {
        assert_eq!(decoder.decode(&sns_notification(path)).unwrap(), path);
    }
}

#[test]
fn test_json_expression() {
    let decoder = decoder("json", "Foo.Bar");
    assert_eq!(
        decoder.decode(r#"{"Foo":{"Bar":"s3://b/p"}}"#).unwrap(),
        "s3://b/p"
    );
}

#[test]
fn test_json_field_not_found() {
    let decoder = decoder("json", "Foo.Bar");
    assert_eq!(
        decoder.decode(r#"{"Foo":{}}"#).unwrap_err(),
        ParseError::NotFound {
            expression: "Foo.Bar".to_string()
        }
    );
}

#[test]
fn test_json_field_of_wrong_type() {
    let decoder = decoder("json", "Foo.Bar");
    assert_eq!(
        decoder.decode(r#"{"Foo":{"Bar":123456}}"#).unwrap_err(),
        ParseError::WrongType {
            expression: "Foo.Bar".to_string(),
            found: "number"
        }
    );
}

#[test]
fn test_json_invalid_payload() {
    let decoder = decoder("json", "Foo.Bar");
    let payload = r#"
    {
        "Type": "Notification",
        "Foo": {
          "Bar":
        }
    }"#;
    assert!(matches!(
        decoder.decode(payload),
        Err(ParseError::InvalidJson(_))
    ));
}

#[test]
fn test_s3_object_created_preset() {
    let decoder = decoder("s3::ObjectCreated", "");
    let payload = s3_event_notification("mybucket", "path/to/file.csv");
    assert_eq!(
        decoder.decode(&payload).unwrap(),
        "s3://mybucket/path/to/file.csv"
    );
}

#[test]
fn test_s3_object_created_explicit_expression() {
    let decoder = decoder("s3::ObjectCreated", S3_OBJECT_CREATED_EXPRESSION);
    let payload = s3_event_notification(
        "mybucket",
        "path/to/a/csv/file/in/a/bucket/file.csv.log.zst",
    );
    assert_eq!(
        decoder.decode(&payload).unwrap(),
        "s3://mybucket/path/to/a/csv/file/in/a/bucket/file.csv.log.zst"
    );
}

#[test]
fn test_json_format_with_s3_event_expression() {
    let decoder = decoder("json", S3_OBJECT_CREATED_EXPRESSION);
    let payload = s3_event_notification("mybucket", "logs/file.csv.log.zst");
    assert_eq!(
        decoder.decode(&payload).unwrap(),
        "s3://mybucket/logs/file.csv.log.zst"
    );
}

#[test]
fn test_s3_event_without_records() {
    let decoder = decoder("s3::ObjectCreated", "");
    assert!(matches!(
        decoder.decode(r#"{"Records":[]}"#),
        Err(ParseError::NotFound { .. })
    ));
    // S3 sends a test event when a notification is first configured
    assert!(matches!(
        decoder.decode(r#"{"Service":"Amazon S3","Event":"s3:TestEvent","Bucket":"mybucket"}"#),
        Err(ParseError::NotFound { .. })
    ));
}

#[test]
fn test_resolve_applies_path_filter() {
    let config = DecoderConfig::new("s3::ObjectCreated").with_path_filter("s3://mybucket/*.zst");
    let decoder = qp_decoder::MessageDecoder::new(&config).unwrap();

    let accepted = decoder
        .resolve(&s3_event_notification("mybucket", "logs/a.log.zst"))
        .unwrap();
    assert_eq!(
        accepted,
        Resolved::Accepted("s3://mybucket/logs/a.log.zst".to_string())
    );

    let skipped = decoder
        .resolve(&s3_event_notification("mybucket", "logs/a.log.gz"))
        .unwrap();
    assert!(!skipped.is_accepted());
}
