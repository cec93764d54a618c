//! Message body fixtures.

use qp_decoder::MessageDecoder;
use qp_types::DecoderConfig;

/// Build a decoder, treating an empty expression as "none".
pub fn decoder(format: &str, expression: &str) -> MessageDecoder {
    let config = DecoderConfig::new(format).with_expression(expression);
    MessageDecoder::new(&config).expect("valid decoder configuration")
}

/// An SNS notification envelope as delivered to a subscribed queue.
pub fn sns_notification(message: &str) -> String {
    serde_json::json!({
        "Type": "Notification",
        "MessageId": "22b80b92-fdea-4c2c-8f9d-bdfb0c7bf324",
        "TopicArn": "arn:aws:sns:us-west-2:123456789012:uploads",
        "Message": message,
        "Timestamp": "2023-05-22T23:21:09.550Z",
        "SignatureVersion": "1"
    })
    .to_string()
}

/// A standard S3 `ObjectCreated:Put` event notification with one record.
pub fn s3_event_notification(bucket: &str, key: &str) -> String {
    format!(
        r#"
        {{
            "Records": [
                {{
                    "eventVersion": "2.1",
                    "eventSource": "aws:s3",
                    "awsRegion": "us-west-2",
                    "eventTime": "2021-08-29T11:52:17.371Z",
                    "eventName": "ObjectCreated:Put",
                    "userIdentity": {{
                        "principalId": "EXAMPLE"
                    }},
                    "requestParameters": {{
                        "sourceIPAddress": "172.18.206.6"
                    }},
                    "responseElements": {{
                        "x-amz-request-id": "EXAMPLE123456789",
                        "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
                    }},
                    "s3": {{
                        "s3SchemaVersion": "1.0",
                        "configurationId": "tf-s3-topic-20210825",
                        "bucket": {{
                            "name": "{bucket}",
                            "ownerIdentity": {{
                                "principalId": "A3SX25GZ0Y2AT2"
                            }},
                            "arn": "arn:aws:s3:::{bucket}"
                        }},
                        "object": {{
                            "key": "{key}",
                            "size": 88190,
                            "eTag": "9103b07ce4308641b8b7dd6491155eae",
                            "sequencer": "00612B74F551DAD52A"
                        }}
                    }}
                }}
            ]
        }}"#
    )
}
