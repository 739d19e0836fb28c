use super::fields::{self, flag, text};
use super::StreamDefinition;
use crate::schema::{JsonSchema, Property, SchemaProperty};

pub const NAME: &str = "chats";

/// Chats with other users or email addresses
pub fn definition() -> StreamDefinition {
    let mut properties = fields::common();
    properties.push(flag(
        "muted",
        "If `true`, notifications from this chat will not be shown",
    ));
    properties.push(Property::new(
        "with",
        SchemaProperty::object([
            fields::email("email"),
            fields::normalized_email("email_normalized"),
            text(
                "iden",
                "If this is a user, the iden of that user",
                Some("ujlMns72k"),
            ),
            text(
                "image_url",
                "Image to display for the person",
                Some("https://dl.pushbulletusercontent.com/abc/john.jpg"),
            ),
            Property::new(
                "type",
                SchemaProperty::string()
                    .with_description(r#"`"email"` or `"user"`"#)
                    .with_example("user")
                    .with_allowed_values(&["email", "user"]),
            ),
            text("name", "Name of the person", Some("John Carmack")),
        ])
        .with_description("The user or email that the chat is with"),
    ));

    StreamDefinition::new(NAME, "/v2/chats", JsonSchema::from_properties(properties))
}
