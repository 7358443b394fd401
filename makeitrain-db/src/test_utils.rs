//! Fixtures shared by unit tests and, through the `test-utils` feature, by
//! dependent crates.

use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::finance::color::Color;
use crate::models::finance::common_enums::{AccountType, TransactionStatus};
use crate::models::finance::location::LocationModel;
use crate::models::finance::payment_method::{PaymentMethodField, PaymentMethodModel};
use crate::models::finance::references::{CategoryRef, PaymentMethodRef, TagRef};
use crate::models::finance::transaction::{TransactionField, TransactionModel};

pub fn text<const N: usize>(value: &str) -> HeaplessString<N> {
    HeaplessString::try_from(value).unwrap()
}

pub fn amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn create_test_category(title: &str) -> CategoryRef {
    CategoryRef {
        id: Uuid::new_v4(),
        title: text(title),
        emoji: None,
        color: Color::default(),
    }
}

pub fn create_test_payment_method_ref(title: &str) -> PaymentMethodRef {
    PaymentMethodRef {
        id: Uuid::new_v4(),
        title: text(title),
    }
}

pub fn create_test_tag(title: &str) -> TagRef {
    TagRef {
        id: Uuid::new_v4(),
        title: text(title),
    }
}

pub fn create_test_location(title: &str, latitude: &str, longitude: &str) -> LocationModel {
    LocationModel {
        id: Uuid::new_v4(),
        title: text(title),
        latitude: Some(amount(latitude)),
        longitude: Some(amount(longitude)),
    }
}

pub fn create_test_transaction(title: &str, value: &str) -> TransactionModel {
    let mut tx = TransactionModel::new();
    tx.title = text(title);
    tx.amount = amount(value);
    tx.date = NaiveDate::from_ymd_opt(2024, 5, 1);
    tx.category = Some(create_test_category("Food"));
    tx.payment_method = Some(create_test_payment_method_ref("Visa"));
    tx.locations.push(create_test_location("Blue Bottle", "37.7763", "-122.4232"));
    tx
}

pub fn create_test_payment_method(title: &str) -> PaymentMethodModel {
    let mut method = PaymentMethodModel::new();
    method.title = text(title);
    method.account_type = AccountType::Credit;
    method.due_date = Some(15);
    method.limit = Some(amount("2500"));
    method
}

/// Give `field` a value different from its current one
pub fn mutate_transaction_field(tx: &mut TransactionModel, field: TransactionField) {
    match field {
        TransactionField::Title => tx.title = text(&format!("{} (edited)", tx.title.as_str())),
        TransactionField::Amount => tx.amount += Decimal::ONE,
        TransactionField::PaymentMethod => tx.payment_method = Some(create_test_payment_method_ref("Amex")),
        TransactionField::Category => tx.category = Some(create_test_category("Travel")),
        TransactionField::Date => {
            tx.date = Some(tx.date.map_or(NaiveDate::MIN, |d| d.succ_opt().unwrap_or(NaiveDate::MIN)))
        }
        TransactionField::Notes => tx.notes = text(&format!("{}!", tx.notes.as_str())),
        TransactionField::FactorInCalculations => tx.factor_in_calculations = !tx.factor_in_calculations,
        TransactionField::Color => {
            tx.color = if tx.color.name() == Some("red") {
                Color::from_hex("#007AFF").unwrap()
            } else {
                Color::from_hex("#FF3B30").unwrap()
            }
        }
        TransactionField::Tags => tx.tags.push(create_test_tag("reimbursable")),
        TransactionField::Locations => tx.locations.push(create_test_location("Office", "40.7128", "-74.0060")),
        TransactionField::TrackingNumber => {
            tx.tracking_number = match tx.tracking_number {
                Some(_) => None,
                None => Some(text("1Z999AA10123456784")),
            }
        }
        TransactionField::Status => {
            tx.status = match tx.status {
                TransactionStatus::Pending => TransactionStatus::Posted,
                _ => TransactionStatus::Pending,
            }
        }
        TransactionField::Url => {
            tx.url = match tx.url {
                Some(_) => None,
                None => Some(text("https://example.com/receipt")),
            }
        }
        TransactionField::NotifyOnDueDate => tx.notify_on_due_date = !tx.notify_on_due_date,
        TransactionField::NotificationOffset => tx.notification_offset += 1,
    }
}

/// Give `field` a value different from its current one
pub fn mutate_payment_method_field(method: &mut PaymentMethodModel, field: PaymentMethodField) {
    match field {
        PaymentMethodField::Title => method.title = text(&format!("{}+", method.title.as_str())),
        PaymentMethodField::AccountType => {
            method.account_type = match method.account_type {
                AccountType::Credit => AccountType::Checking,
                _ => AccountType::Credit,
            }
        }
        PaymentMethodField::DueDate => method.due_date = Some(method.due_date.map_or(1, |d| d % 28 + 1)),
        PaymentMethodField::Limit => method.limit = Some(method.limit.unwrap_or_default() + Decimal::ONE),
        PaymentMethodField::LastFourDigits => {
            method.last_four_digits = match method.last_four_digits {
                Some(_) => None,
                None => Some(text("4242")),
            }
        }
        PaymentMethodField::Color => {
            method.color = if method.color.name() == Some("green") {
                Color::from_hex("#AF52DE").unwrap()
            } else {
                Color::from_hex("#34C759").unwrap()
            }
        }
        PaymentMethodField::IsPrivate => method.is_private = !method.is_private,
        PaymentMethodField::IsViewingDefault => method.is_viewing_default = !method.is_viewing_default,
        PaymentMethodField::NotifyOnDueDate => method.notify_on_due_date = !method.notify_on_due_date,
        PaymentMethodField::NotificationOffset => method.notification_offset += 1,
    }
}
