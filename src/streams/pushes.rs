use super::fields::{self, flag, text};
use super::StreamDefinition;
use crate::schema::{JsonSchema, Property, SchemaProperty};
use serde_json::json;

pub const NAME: &str = "pushes";

const SAMPLE_IDEN: &str = "ujpah72o0sjAoRtnM0jc";

/// Notes, links and files sent between devices and users
///
/// Only active pushes are requested; deleted pushes never reach the output.
pub fn definition() -> StreamDefinition {
    let mut properties = fields::common();
    properties.extend([
        Property::new(
            "type",
            SchemaProperty::string()
                .with_description(r#"Type of the push, one of `"note"`, `"file"`, `"link"`."#)
                .with_example("note")
                .with_allowed_values(&["note", "file", "link"]),
        ),
        flag("dismissed", "Whether the push has been dismissed"),
        text(
            "guid",
            "Unique identifier set by the client, used to identify a push in case \
             you receive it from `/v2/everything` before the call to `/v2/pushes` \
             has completed. This should be a unique value. Pushes with `guid` set \
             are mostly idempotent, meaning that sending another push with the \
             same guid is unlikely to create another push (it will return the \
             previously created push).",
            Some("993aaa48567d91068e96c75a74644159"),
        ),
        Property::new(
            "direction",
            SchemaProperty::string()
                .with_description(
                    r#"Direction the push was sent in, can be `"self"`, `"outgoing"`, or `"incoming"`"#,
                )
                .with_example("self")
                .with_allowed_values(&["self", "outgoing", "incoming"]),
        ),
        text("sender_iden", "The push's sender's ID", None),
        fields::email("sender_email"),
        fields::normalized_email("sender_email_normalized"),
        text("sender_name", "Name of the sender", Some("Elon Musk")),
        text("receiver_iden", "The push's receiver's ID", None),
        fields::email("receiver_email"),
        fields::normalized_email("receiver_email_normalized"),
        text(
            "target_device_iden",
            "Device iden of the target device, if sending to a single device",
            Some(SAMPLE_IDEN),
        ),
        text(
            "source_device_iden",
            "Device iden of the sending device. Optionally set by the sender when \
             creating a push",
            Some(SAMPLE_IDEN),
        ),
        text(
            "client_iden",
            "If the push was created by a client, set to the iden of that client.",
            Some(SAMPLE_IDEN),
        ),
        text(
            "channel_iden",
            "If the push was created by a channel, set to the iden of that channel",
            Some(SAMPLE_IDEN),
        ),
        Property::new(
            "awake_app_guids",
            SchemaProperty::array(SchemaProperty::string())
                .with_description(
                    "List of `guids` (client side identifiers, not the `guid` field on \
                     pushes) for awake apps at the time the push was sent. If the length \
                     of this list is > 0, `dismissed` will be set to `true` and the awake \
                     app(s) must decide what to do with the notification",
                )
                .with_example(json!(["web-2d8cdf2a2b9b", "web-cdb2313c74e"])),
        ),
        text(
            "title",
            "Title of the push, used for all types of pushes",
            Some("Space Travel Ideas"),
        ),
        text(
            "body",
            "Body of the push, used for all types of pushes",
            Some("Space Elevator, Mars Hyperloop, Space Model S (Model Space?)"),
        ),
        text(
            "url",
            r#"URL field, used for `type="link"` pushes"#,
            Some("https://www.teslamotors.com/"),
        ),
        text(
            "file_name",
            r#"File name, used for `type="file"` pushes"#,
            Some("john.jpg"),
        ),
        text(
            "file_type",
            r#"File mime type, used for `type="file"` pushes"#,
            Some("image/jpeg"),
        ),
        text(
            "file_url",
            r#"File download url, used for `type="file"` pushes"#,
            Some("https://dl.pushbulletusercontent.com/abc/john.jpg"),
        ),
        text(
            "image_url",
            r#"URL to an image to use for this push, present on `type="file"` pushes if file_type matches image/*"#,
            Some("https://lh3.googleusercontent.com/abc"),
        ),
        Property::new(
            "image_width",
            SchemaProperty::integer()
                .with_description("Width of image in pixels, only present if `image_url` is set")
                .with_example(322),
        ),
        Property::new(
            "image_height",
            SchemaProperty::integer()
                .with_description("Height of image in pixels, only present if `image_url` is set")
                .with_example(484),
        ),
    ]);

    StreamDefinition::new(NAME, "/v2/pushes", JsonSchema::from_properties(properties))
        .with_param("active", "true")
}
