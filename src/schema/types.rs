//! Schema types

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// JSON type can be a single type or array of types (for nullable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JsonTypeOrArray {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl JsonTypeOrArray {
    /// Create a single type
    pub fn single(t: JsonType) -> Self {
        JsonTypeOrArray::Single(t)
    }

    /// Create a nullable type
    pub fn nullable(t: JsonType) -> Self {
        if t == JsonType::Null {
            JsonTypeOrArray::Single(JsonType::Null)
        } else {
            JsonTypeOrArray::Multiple(vec![t, JsonType::Null])
        }
    }

    /// Check if this type is nullable
    pub fn is_nullable(&self) -> bool {
        match self {
            JsonTypeOrArray::Single(JsonType::Null) => true,
            JsonTypeOrArray::Multiple(types) => types.contains(&JsonType::Null),
            JsonTypeOrArray::Single(_) => false,
        }
    }

    /// Get the primary (non-null) type
    pub fn primary_type(&self) -> Option<JsonType> {
        match self {
            JsonTypeOrArray::Single(t) => Some(*t),
            JsonTypeOrArray::Multiple(types) => {
                types.iter().copied().find(|t| *t != JsonType::Null)
            }
        }
    }

    /// Drop `null` from the accepted types
    pub fn non_null(&self) -> Self {
        match self.primary_type() {
            Some(t) => JsonTypeOrArray::Single(t),
            None => self.clone(),
        }
    }
}

// ============================================================================
// Schema Property
// ============================================================================

/// JSON Schema property definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaProperty {
    /// Property type(s)
    #[serde(rename = "type")]
    pub json_type: JsonTypeOrArray,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,

    /// Allowed values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Example values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
}

impl SchemaProperty {
    /// Create a nullable property of the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type: JsonTypeOrArray::nullable(json_type),
            properties: None,
            items: None,
            enum_values: None,
            description: None,
            examples: None,
        }
    }

    pub fn string() -> Self {
        Self::new(JsonType::String)
    }

    pub fn number() -> Self {
        Self::new(JsonType::Number)
    }

    pub fn integer() -> Self {
        Self::new(JsonType::Integer)
    }

    pub fn boolean() -> Self {
        Self::new(JsonType::Boolean)
    }

    /// Create an object property with nested properties
    pub fn object(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: Some(properties.into_iter().collect()),
            ..Self::new(JsonType::Object)
        }
    }

    /// Create an array property with item schema
    pub fn array(items: SchemaProperty) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(JsonType::Array)
        }
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add one example value
    #[must_use]
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.examples
            .get_or_insert_with(Vec::new)
            .push(example.into());
        self
    }

    /// Restrict the property to a fixed set of string values
    #[must_use]
    pub fn with_allowed_values(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| Value::from(*v)).collect());
        self
    }

    /// Check if nullable
    pub fn is_nullable(&self) -> bool {
        self.json_type.is_nullable()
    }
}

// ============================================================================
// Properties
// ============================================================================

/// A named property within an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub schema: SchemaProperty,
    pub required: bool,
}

impl Property {
    /// Create an optional (nullable) property
    pub fn new(name: impl Into<String>, schema: SchemaProperty) -> Self {
        Self {
            name: name.into(),
            schema,
            required: false,
        }
    }

    /// Mark the property required, which also makes it non-nullable
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self.schema.json_type = self.schema.json_type.non_null();
        self
    }
}

/// Ordered property list, serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<Property>);

impl Properties {
    /// Look up a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.0.iter()
    }

    /// Property names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }
}

impl FromIterator<Property> for Properties {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in &self.0 {
            map.serialize_entry(&property.name, &property.schema)?;
        }
        map.end()
    }
}

// ============================================================================
// Top-level Schema
// ============================================================================

/// Full JSON Schema document for a stream or for the settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchema {
    /// Schema type (always "object" for top-level)
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Object properties
    pub properties: Properties,

    /// Required properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl JsonSchema {
    /// Build an object schema from an ordered property list
    pub fn from_properties(properties: impl IntoIterator<Item = Property>) -> Self {
        let properties: Properties = properties.into_iter().collect();
        let required = properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.clone())
            .collect();
        Self {
            json_type: JsonType::Object,
            properties,
            required,
        }
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.get(name).map(|p| &p.schema)
    }

    /// Check if a top-level property exists
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    /// Check if a property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|n| n == name)
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
