//! Sales stream
//!
//! The only stream with a bounded window: the export endpoint expects an
//! explicit `dateTo` alongside `dateFrom`. The `lines`, `payments` and
//! `vat` arrays are line-level detail and stay verbatim.

use super::StreamSpec;
use crate::flatten::FlattenRule;
use crate::schema::{FieldType, Schema};
use crate::window::WindowVariant;

const RULES: &[FlattenRule] = &[
    FlattenRule::FlattenInto {
        source: "customer",
        prefix: "customer_",
    },
    FlattenRule::FlattenInto {
        source: "shop",
        prefix: "shop_",
    },
    FlattenRule::FlattenInto {
        source: "till",
        prefix: "till_",
    },
    FlattenRule::FlattenInto {
        source: "legalEntity",
        prefix: "legalEntity_",
    },
    FlattenRule::FlattenInto {
        source: "vatTypeCalculation",
        prefix: "vatTypeCalculation_",
    },
];

pub fn spec() -> StreamSpec {
    StreamSpec {
        name: "sales",
        path: "/saleapi/production/export/sales",
        primary_keys: &["idTilroySale"],
        replication_key: Some("saleDate"),
        page_size: 500,
        window: WindowVariant::BoundedToToday,
        rules: RULES,
        schema: Schema::builder()
            .field("idTilroySale", FieldType::String)
            .field("idTenant", FieldType::String)
            .field("idSession", FieldType::String)
            .optional("customer_idTilroy", FieldType::String)
            .optional("customer_idSource", FieldType::String)
            .optional("idSourceCustomer", FieldType::String)
            .field("vatTypeCalculation_UseCalculation", FieldType::Boolean)
            .field("vatTypeCalculation_IdVatType", FieldType::String)
            .field("vatTypeCalculation_VatTypeCode", FieldType::String)
            .field("vatTypeCalculation_VatExempt", FieldType::Boolean)
            .field("vatTypeCalculation_IsVatIncl", FieldType::Boolean)
            .field("vatTypeCalculation_IsIntraComm", FieldType::Boolean)
            .field("vatTypeCalculation_IsExport", FieldType::Boolean)
            .field("vatTypeCalculation_IsCustom", FieldType::Boolean)
            .field("vatTypeCalculation_IdCountryFrom", FieldType::Integer)
            .field("vatTypeCalculation_CountryFromIsIntrastat", FieldType::Boolean)
            .field("vatTypeCalculation_IdCountryTo", FieldType::Integer)
            .field("vatTypeCalculation_CountryToIsIntrastat", FieldType::Boolean)
            .field("vatTypeCalculation_Invoice", FieldType::Boolean)
            .field("vatTypeCalculation_VatNumber", FieldType::String)
            .field("vatTypeCalculation_IdCustomer", FieldType::String)
            .field("shop_idTilroy", FieldType::String)
            .optional("shop_idSource", FieldType::String)
            .field("shop_number", FieldType::Integer)
            .field("shop_name", FieldType::String)
            .field("shop_country", FieldType::String)
            .field("till_idTilroy", FieldType::String)
            .field("till_number", FieldType::Integer)
            .optional("till_idSource", FieldType::String)
            .field("saleDate", FieldType::DateTime)
            .field("eTicket", FieldType::Boolean)
            .optional("orderDate", FieldType::String)
            .field("totalAmountStandard", FieldType::Number)
            .field("totalAmountSell", FieldType::Number)
            .field("totalAmountDiscount", FieldType::Number)
            .field("totalAmountSellRounded", FieldType::Number)
            .field("totalAmountSellRoundedPart", FieldType::Number)
            .field("totalAmountSellNotRoundedPart", FieldType::Number)
            .field("totalAmountOutstanding", FieldType::Number)
            .field("lines", FieldType::Array)
            .field("totalAmountPaid", FieldType::Number)
            .field("payments", FieldType::Array)
            .field("vat", FieldType::Array)
            .field("legalEntity_idTilroy", FieldType::String)
            .field("legalEntity_code", FieldType::String)
            .field("legalEntity_name", FieldType::String)
            .field("legalEntity_vatNr", FieldType::String)
            .build(),
    }
}
