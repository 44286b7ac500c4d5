//! Products stream
//!
//! Brand is flattened; its `descriptions` are a one-to-many relationship
//! and stay an array under `brand_descriptions`.

use super::StreamSpec;
use crate::flatten::FlattenRule;
use crate::schema::{FieldType, Schema};
use crate::window::WindowVariant;

const RULES: &[FlattenRule] = &[FlattenRule::FlattenInto {
    source: "brand",
    prefix: "brand_",
}];

pub fn spec() -> StreamSpec {
    StreamSpec {
        name: "products",
        path: "/product-bulk/production/products",
        primary_keys: &["tilroyId"],
        replication_key: None,
        page_size: 1000,
        window: WindowVariant::OpenEnded,
        rules: RULES,
        schema: Schema::builder()
            .field("tilroyId", FieldType::String)
            .optional("sourceId", FieldType::String)
            .field("code", FieldType::String)
            .field("descriptions", FieldType::Array)
            .field("brand_code", FieldType::String)
            .field("brand_descriptions", FieldType::Array)
            .field("colours", FieldType::Array)
            .field("isUsed", FieldType::Boolean)
            .build(),
    }
}
