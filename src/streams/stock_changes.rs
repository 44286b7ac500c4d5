//! Stock changes stream
//!
//! Replicates on `saleDate`. The vendor has shipped an older shape of
//! this export keyed on `timestamp` with a `modificationType` field; the
//! current stockdeltas export uses `saleDate` and that is what this
//! connector follows.

use super::StreamSpec;
use crate::flatten::FlattenRule;
use crate::schema::{FieldType, Schema};
use crate::window::WindowVariant;

const RULES: &[FlattenRule] = &[
    FlattenRule::FlattenInto {
        source: "shop",
        prefix: "shop_",
    },
    FlattenRule::FlattenInto {
        source: "product",
        prefix: "product_",
    },
    FlattenRule::FlattenInto {
        source: "colour",
        prefix: "colour_",
    },
    FlattenRule::FlattenInto {
        source: "size",
        prefix: "size_",
    },
    FlattenRule::FlattenInto {
        source: "sku",
        prefix: "sku_",
    },
];

pub fn spec() -> StreamSpec {
    StreamSpec {
        name: "stock_changes",
        path: "/stockapi/production/export/stockdeltas",
        primary_keys: &["tilroyId"],
        replication_key: Some("saleDate"),
        page_size: 500,
        window: WindowVariant::OpenEnded,
        rules: RULES,
        schema: Schema::builder()
            .field("tilroyId", FieldType::String)
            .field("saleDate", FieldType::DateTime)
            .field("sourceId", FieldType::String)
            .field("reason", FieldType::String)
            .field("shop_number", FieldType::Integer)
            .optional("shop_sourceId", FieldType::String)
            .field("product_code", FieldType::String)
            .field("product_sourceId", FieldType::String)
            .field("colour_code", FieldType::String)
            .field("colour_sourceId", FieldType::String)
            .field("size_code", FieldType::String)
            .field("sku_barcode", FieldType::String)
            .field("sku_sourceId", FieldType::String)
            .field("qtyDelta", FieldType::Integer)
            .field("qtyTransferredDelta", FieldType::Integer)
            .field("qtyReservedDelta", FieldType::Integer)
            .field("qtyRequestedDelta", FieldType::Integer)
            .optional("cause", FieldType::String)
            .build(),
    }
}
