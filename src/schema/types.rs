//! Schema types

use serde_json::{json, Map, Value};

/// Type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Whole number
    Integer,
    /// Floating point number
    Number,
    /// Boolean
    Boolean,
    /// ISO-8601 timestamp string
    DateTime,
    /// Array kept verbatim from the vendor payload
    Array,
    /// Vendor sends either a number or a numeric string
    NumberOrString,
}

impl FieldType {
    /// JSON schema type fragment for this field type
    fn json_types(self) -> Vec<&'static str> {
        match self {
            Self::String | Self::DateTime => vec!["string"],
            Self::Integer => vec!["integer"],
            Self::Number => vec!["number"],
            Self::Boolean => vec!["boolean"],
            Self::Array => vec!["array"],
            Self::NumberOrString => vec!["number", "string"],
        }
    }
}

/// One field in a stream's flat target schema
#[derive(Debug, Clone)]
pub struct Field {
    /// Flattened field name
    pub name: String,
    /// Field type
    pub field_type: FieldType,
    /// Whether the vendor always sends this field
    pub required: bool,
}

/// Fixed flat schema for one stream
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Declared fields, in declaration order
    pub fields: Vec<Field>,
}

impl Schema {
    /// Start building a schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All declared field names
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Render the schema as a JSON schema document for the catalog
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();

        for field in &self.fields {
            let mut types: Vec<&str> = field.field_type.json_types();
            if !field.required {
                types.push("null");
            }

            let mut prop = Map::new();
            if types.len() == 1 {
                prop.insert("type".to_string(), json!(types[0]));
            } else {
                prop.insert("type".to_string(), json!(types));
            }
            if field.field_type == FieldType::DateTime {
                prop.insert("format".to_string(), json!("date-time"));
            }
            if field.field_type == FieldType::Array {
                prop.insert("items".to_string(), json!({}));
            }

            properties.insert(field.name.clone(), Value::Object(prop));
        }

        json!({
            "type": "object",
            "properties": properties,
        })
    }
}

/// Builder for stream schemas
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Add a required field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            field_type,
            required: true,
        });
        self
    }

    /// Add an optional (nullable) field
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            field_type,
            required: false,
        });
        self
    }

    /// Finish the schema
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}
