//! Shops stream

use super::StreamSpec;
use crate::flatten::FlattenRule;
use crate::schema::{FieldType, Schema};
use crate::window::WindowVariant;

const RULES: &[FlattenRule] = &[
    FlattenRule::FlattenInto {
        source: "type",
        prefix: "type_",
    },
    FlattenRule::FlattenInto {
        source: "subType",
        prefix: "subType_",
    },
    FlattenRule::FlattenInto {
        source: "language",
        prefix: "language_",
    },
    FlattenRule::FlattenInto {
        source: "country",
        prefix: "country_",
    },
];

pub fn spec() -> StreamSpec {
    StreamSpec {
        name: "shops",
        path: "/shopapi/production/shops",
        primary_keys: &["tilroyId"],
        replication_key: None,
        page_size: 100,
        window: WindowVariant::OpenEnded,
        rules: RULES,
        schema: Schema::builder()
            .field("tilroyId", FieldType::String)
            .optional("sourceId", FieldType::String)
            .field("number", FieldType::String)
            .field("name", FieldType::String)
            .field("type_tilroyId", FieldType::String)
            .field("type_code", FieldType::String)
            .field("subType_tilroyId", FieldType::String)
            .field("subType_code", FieldType::String)
            .field("language_tilroyId", FieldType::String)
            .field("language_code", FieldType::String)
            .optional("latitude", FieldType::String)
            .optional("longitude", FieldType::String)
            .optional("postalCode", FieldType::String)
            .optional("street", FieldType::String)
            .optional("houseNumber", FieldType::String)
            .field("legalEntityId", FieldType::Integer)
            .field("country_tilroyId", FieldType::String)
            .field("country_countryCode", FieldType::String)
            .build(),
    }
}
