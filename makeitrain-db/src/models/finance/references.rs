use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::Color;
use crate::models::identifiable::Identifiable;

/// Reference from a transaction to its category.
///
/// The display fields are a local copy for rendering only; change detection
/// looks at `id` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Uuid,
    pub title: HeaplessString<50>,
    pub emoji: Option<HeaplessString<16>>,
    pub color: Color,
}

impl CategoryRef {
    pub fn display_name(&self) -> String {
        match &self.emoji {
            Some(emoji) => format!("{} {}", emoji.as_str(), self.title.as_str()),
            None => self.title.as_str().to_string(),
        }
    }
}

impl Identifiable for CategoryRef {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Reference from a transaction to the payment method it was paid with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRef {
    pub id: Uuid,
    pub title: HeaplessString<50>,
}

impl Identifiable for PaymentMethodRef {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: Uuid,
    pub title: HeaplessString<30>,
}

impl Identifiable for TagRef {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
