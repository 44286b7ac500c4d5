//! Purchase orders stream
//!
//! The `prices` object nests per-currency amounts two levels deep, so two
//! rules target its branches directly. `created` and `modified` audit
//! blocks contribute a fixed set of fields; anything else in them is
//! dropped.

use super::StreamSpec;
use crate::flatten::FlattenRule;
use crate::schema::{FieldType, Schema};
use crate::window::WindowVariant;

const RULES: &[FlattenRule] = &[
    FlattenRule::FlattenInto {
        source: "supplier",
        prefix: "supplier_",
    },
    FlattenRule::FlattenInto {
        source: "warehouse",
        prefix: "warehouse_",
    },
    FlattenRule::FlattenInto {
        source: "currency",
        prefix: "currency_",
    },
    FlattenRule::FlattenInto {
        source: "prices.tenantCurrency",
        prefix: "prices_tenantCurrency_",
    },
    FlattenRule::FlattenInto {
        source: "prices.supplierCurrency",
        prefix: "prices_supplierCurrency_",
    },
    FlattenRule::ExtractFields {
        source: "created",
        fields: &[
            ("user.login", "created_user_login"),
            ("user.sourceId", "created_user_sourceId"),
            ("timestamp", "created_timestamp"),
        ],
    },
    FlattenRule::ExtractFields {
        source: "modified",
        fields: &[
            ("user.login", "modified_user_login"),
            ("user.sourceId", "modified_user_sourceId"),
            ("timestamp", "modified_timestamp"),
        ],
    },
];

pub fn spec() -> StreamSpec {
    StreamSpec {
        name: "purchase_orders",
        path: "/purchaseapi/production/purchaseorders",
        primary_keys: &["tilroyId"],
        replication_key: Some("orderDate"),
        page_size: 100,
        window: WindowVariant::OpenEnded,
        rules: RULES,
        schema: Schema::builder()
            .field("tilroyId", FieldType::String)
            .field("number", FieldType::String)
            .field("orderDate", FieldType::String)
            .field("supplier_tilroyId", FieldType::Integer)
            .field("supplier_code", FieldType::String)
            .field("supplier_name", FieldType::String)
            .optional("supplierReference", FieldType::String)
            .field("requestedDeliveryDate", FieldType::String)
            .field("warehouse_number", FieldType::Integer)
            .field("warehouse_name", FieldType::String)
            .field("currency_code", FieldType::String)
            .field("prices_tenantCurrency_standardVatExc", FieldType::NumberOrString)
            .field("prices_tenantCurrency_standardVatInc", FieldType::NumberOrString)
            .field("prices_tenantCurrency_vatExc", FieldType::NumberOrString)
            .field("prices_tenantCurrency_vatInc", FieldType::NumberOrString)
            .field("prices_supplierCurrency_standardVatExc", FieldType::NumberOrString)
            .field("prices_supplierCurrency_standardVatInc", FieldType::NumberOrString)
            .field("prices_supplierCurrency_vatExc", FieldType::NumberOrString)
            .field("prices_supplierCurrency_vatInc", FieldType::NumberOrString)
            .field("status", FieldType::String)
            .field("created_user_login", FieldType::String)
            .optional("created_user_sourceId", FieldType::String)
            .field("created_timestamp", FieldType::String)
            .field("modified_user_login", FieldType::String)
            .optional("modified_user_sourceId", FieldType::String)
            .field("modified_timestamp", FieldType::String)
            .field("lines", FieldType::Array)
            .build(),
    }
}
