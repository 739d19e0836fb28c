use super::fields::{self, flag, text};
use super::StreamDefinition;
use crate::schema::{JsonSchema, Property, SchemaProperty};

pub const NAME: &str = "subscriptions";

/// Channel subscriptions
pub fn definition() -> StreamDefinition {
    let mut properties = fields::common();
    properties.push(flag(
        "muted",
        "If `true`, notifications from this subscription will not be shown",
    ));
    properties.push(Property::new(
        "channel",
        SchemaProperty::object([
            text(
                "iden",
                "Unique identifier for the channel",
                Some("ujpah72o0sjAoRtnM0jc"),
            ),
            text("tag", "Unique tag for this channel", Some("elonmusknews")),
            text("name", "Name of the channel", Some("Elon Musk News")),
            text(
                "description",
                "Description of the channel",
                Some("News about Elon Musk"),
            ),
            text(
                "image_url",
                "Image for the channel",
                Some("https://dl.pushbulletusercontent.com/abc/musk.jpg"),
            ),
            text(
                "website_url",
                "Link to a website for the channel",
                Some("https://twitter.com/elonmusk"),
            ),
        ])
        .with_description("Information about the channel that is being subscribed to"),
    ));

    StreamDefinition::new(
        NAME,
        "/v2/subscriptions",
        JsonSchema::from_properties(properties),
    )
}
