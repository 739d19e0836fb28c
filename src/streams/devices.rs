use super::fields::{self, flag, text};
use super::StreamDefinition;
use crate::schema::{JsonSchema, Property, SchemaProperty};

pub const NAME: &str = "devices";

/// Devices registered to the account
pub fn definition() -> StreamDefinition {
    let mut properties = fields::common();
    properties.extend([
        Property::new(
            "icon",
            SchemaProperty::string()
                .with_description(
                    "Icon to use for this device, can be an arbitrary string. \
                     Commonly used values are: \"desktop\", \"browser\", \"website\", \
                     \"laptop\", \"tablet\", \"phone\", \"watch\", \"system\"",
                )
                .with_example("ios"),
        ),
        text(
            "nickname",
            "Name to use when displaying the device",
            Some("Elon Musk's iPhone"),
        ),
        flag(
            "generated_nickname",
            "`true` if the nickname was automatically generated from the \
             `manufacturer` and `model` fields (only used for some android phones)",
        ),
        text("manufacturer", "Manufacturer of the device", Some("Apple")),
        text("model", "Model of the device", Some("iPhone 5s (GSM(")),
        Property::new(
            "app_version",
            SchemaProperty::integer()
                .with_description(
                    "Version of the Pushbullet application installed on the device",
                )
                .with_example(8623),
        ),
        text(
            "fingerprint",
            "String fingerprint for the device, used by apps to avoid duplicate \
             devices. Value is platform-specific.",
            Some("nLN19IRNzS5xidPF+X8mKGNRpQo2X6XBgyO30FL6OiQ="),
        ),
        text(
            "key_fingerprint",
            "Fingerprint for the device's end-to-end encryption key, used to \
             determine which devices the current device (based on its own key \
             fingerprint) will be able to talk to.",
            Some("5ae6ec7e1fe681861b0cc85c53accc13bf94c11db7461a2808903f7469bfda56"),
        ),
        text(
            "push_token",
            "Platform-specific push token. If you are making your own device, \
             leave this blank and you can listen for events on the \
             [Realtime Event Stream](https://docs.pushbullet.com/#realtime-event-stream).",
            Some("production:f73be0ee7877c8c7fa69b1468cde764f"),
        ),
        Property::new(
            "has_sms",
            SchemaProperty::boolean()
                .with_description(
                    "`true` if the devices has SMS capability, currently only true for \
                     `type=\"android\"` devices",
                )
                .with_example(true),
        ),
    ]);

    StreamDefinition::new(NAME, "/v2/devices", JsonSchema::from_properties(properties))
}
