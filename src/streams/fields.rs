//! Field groups shared by every Pushbullet object

use crate::schema::{Property, SchemaProperty};

const UNIX_TIME_LINK: &str = "([unix timestamp](https://en.wikipedia.org/wiki/Unix_time))";

pub fn iden() -> Property {
    Property::new(
        "iden",
        SchemaProperty::string()
            .with_description("Unique identifier for this object")
            .with_example("ujpah72o0sjAoRtnM0jc"),
    )
}

pub fn active() -> Property {
    Property::new(
        "active",
        SchemaProperty::boolean()
            .with_description("`false` if the item has been deleted")
            .with_example(false),
    )
}

pub fn created() -> Property {
    Property::new(
        "created",
        SchemaProperty::number()
            .with_description(format!(
                "Creation time in floating point seconds {UNIX_TIME_LINK}"
            ))
            .with_example("1381092887.398433"),
    )
}

pub fn modified() -> Property {
    Property::new(
        "modified",
        SchemaProperty::number()
            .with_description(format!(
                "Last modified time in floating point seconds {UNIX_TIME_LINK}"
            ))
            .with_example("1441054560.741007"),
    )
}

/// `iden`, `active`, `created`, `modified`, in that order
pub fn common() -> Vec<Property> {
    vec![iden(), active(), created(), modified()]
}

pub fn email(name: &str) -> Property {
    Property::new(
        name,
        SchemaProperty::string()
            .with_description("Email address of the person")
            .with_example("carmack@idsoftware.com"),
    )
}

pub fn normalized_email(name: &str) -> Property {
    Property::new(
        name,
        SchemaProperty::string()
            .with_description("Canonical email address of the person")
            .with_example("carmack@idsoftware.com"),
    )
}

/// A nullable string field with a description and an optional example
pub(crate) fn text(name: &str, description: &str, example: Option<&str>) -> Property {
    let mut schema = SchemaProperty::string().with_description(description);
    if let Some(example) = example {
        schema = schema.with_example(example);
    }
    Property::new(name, schema)
}

pub(crate) fn flag(name: &str, description: &str) -> Property {
    Property::new(name, SchemaProperty::boolean().with_description(description))
}
