use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEntityType {
    Transaction,
    PaymentMethod,
}

impl From<AuditEntityType> for &str {
    fn from(val: AuditEntityType) -> Self {
        match val {
            AuditEntityType::Transaction => "TRANSACTION",
            AuditEntityType::PaymentMethod => "PAYMENT_METHOD",
        }
    }
}

/// Records that can be linked to an audit log
pub trait HasEntityType {
    const ENTITY_TYPE: AuditEntityType;
}
