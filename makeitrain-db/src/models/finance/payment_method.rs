use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::Color;
use super::common_enums::AccountType;
use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::audit::entity_type::{AuditEntityType, HasEntityType};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;
use crate::models::snapshot::SnapshotProvider;
use crate::models::trackable::{Trackable, TrackedField};
use crate::tracker::compare::ComparisonPolicy;
use crate::tracker::render::FieldRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodField {
    Title,
    AccountType,
    DueDate,
    Limit,
    LastFourDigits,
    Color,
    IsPrivate,
    IsViewingDefault,
    NotifyOnDueDate,
    NotificationOffset,
}

impl TrackedField for PaymentMethodField {
    const ALL: &'static [Self] = &[
        PaymentMethodField::Title,
        PaymentMethodField::AccountType,
        PaymentMethodField::DueDate,
        PaymentMethodField::Limit,
        PaymentMethodField::LastFourDigits,
        PaymentMethodField::Color,
        PaymentMethodField::IsPrivate,
        PaymentMethodField::IsViewingDefault,
        PaymentMethodField::NotifyOnDueDate,
        PaymentMethodField::NotificationOffset,
    ];

    fn name(&self) -> &'static str {
        match self {
            PaymentMethodField::Title => "title",
            PaymentMethodField::AccountType => "account_type",
            PaymentMethodField::DueDate => "due_date",
            PaymentMethodField::Limit => "limit",
            PaymentMethodField::LastFourDigits => "last_four_digits",
            PaymentMethodField::Color => "color",
            PaymentMethodField::IsPrivate => "is_private",
            PaymentMethodField::IsViewingDefault => "is_viewing_default",
            PaymentMethodField::NotifyOnDueDate => "notify_on_due_date",
            PaymentMethodField::NotificationOffset => "notification_offset",
        }
    }
}

/// A card, account or cash wallet transactions are paid with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodModel {
    pub id: Uuid,
    pub title: HeaplessString<50>,
    pub account_type: AccountType,

    /// Day of the month the statement is due (1-31)
    pub due_date: Option<u8>,

    /// Credit limit or budget
    pub limit: Option<Decimal>,

    pub last_four_digits: Option<HeaplessString<4>>,
    pub color: Color,

    /// Hidden behind the biometric gate
    pub is_private: bool,

    /// Selected by default when the dashboard opens
    pub is_viewing_default: bool,

    pub notify_on_due_date: bool,
    pub notification_offset: i32,

    /// Hash of the stored version with this field set to 0
    pub hash: i64,
    pub audit_log_id: Option<Uuid>,

    #[serde(skip)]
    pub change_log: Vec<ChangeLogEntry<PaymentMethodField>>,
}

impl PaymentMethodModel {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: HeaplessString::new(),
            account_type: AccountType::default(),
            due_date: None,
            limit: None,
            last_four_digits: None,
            color: Color::default(),
            is_private: false,
            is_viewing_default: false,
            notify_on_due_date: false,
            notification_offset: 0,
            hash: 0,
            audit_log_id: None,
            change_log: Vec::new(),
        }
    }
}

impl Default for PaymentMethodModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Identifiable for PaymentMethodModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl HasEntityType for PaymentMethodModel {
    const ENTITY_TYPE: AuditEntityType = AuditEntityType::PaymentMethod;
}

impl Auditable for PaymentMethodModel {
    type Field = PaymentMethodField;

    fn get_audit_log_id(&self) -> Option<Uuid> {
        self.audit_log_id
    }

    fn set_audit_log_id(&mut self, audit_log_id: Option<Uuid>) {
        self.audit_log_id = audit_log_id;
    }

    fn get_hash(&self) -> i64 {
        self.hash
    }

    fn set_hash(&mut self, hash: i64) {
        self.hash = hash;
    }

    fn change_log(&self) -> &[ChangeLogEntry<PaymentMethodField>] {
        &self.change_log
    }

    fn append_change_log(&mut self, entries: Vec<ChangeLogEntry<PaymentMethodField>>) {
        self.change_log.extend(entries);
    }
}

impl SnapshotProvider for PaymentMethodModel {
    fn snapshot(&self) -> Self {
        Self {
            change_log: Vec::new(),
            ..self.clone()
        }
    }
}

impl Trackable for PaymentMethodModel {
    const SIGNIFICANT: &'static [PaymentMethodField] = &[
        PaymentMethodField::Title,
        PaymentMethodField::AccountType,
        PaymentMethodField::Limit,
        PaymentMethodField::DueDate,
    ];

    fn field_differs(&self, baseline: &Self, field: PaymentMethodField, _policy: &ComparisonPolicy) -> bool {
        match field {
            PaymentMethodField::Title => self.title != baseline.title,
            PaymentMethodField::AccountType => self.account_type != baseline.account_type,
            PaymentMethodField::DueDate => self.due_date != baseline.due_date,
            PaymentMethodField::Limit => self.limit != baseline.limit,
            PaymentMethodField::LastFourDigits => self.last_four_digits != baseline.last_four_digits,
            PaymentMethodField::Color => self.color != baseline.color,
            PaymentMethodField::IsPrivate => self.is_private != baseline.is_private,
            PaymentMethodField::IsViewingDefault => self.is_viewing_default != baseline.is_viewing_default,
            PaymentMethodField::NotifyOnDueDate => self.notify_on_due_date != baseline.notify_on_due_date,
            PaymentMethodField::NotificationOffset => self.notification_offset != baseline.notification_offset,
        }
    }

    fn render_field(&self, field: PaymentMethodField, renderer: &FieldRenderer) -> Option<String> {
        match field {
            PaymentMethodField::Title => renderer.non_empty_text(&self.title),
            PaymentMethodField::AccountType => Some(renderer.display(self.account_type)),
            PaymentMethodField::DueDate => self.due_date.map(|day| renderer.display(day)),
            PaymentMethodField::Limit => renderer.optional_amount(self.limit),
            PaymentMethodField::LastFourDigits => renderer.optional_text(self.last_four_digits.as_deref()),
            PaymentMethodField::Color => Some(renderer.color(&self.color)),
            PaymentMethodField::IsPrivate => Some(renderer.flag(self.is_private)),
            PaymentMethodField::IsViewingDefault => Some(renderer.flag(self.is_viewing_default)),
            PaymentMethodField::NotifyOnDueDate => Some(renderer.flag(self.notify_on_due_date)),
            PaymentMethodField::NotificationOffset => Some(renderer.display(self.notification_offset)),
        }
    }

    fn restore_field(&mut self, source: &Self, field: PaymentMethodField) {
        match field {
            PaymentMethodField::Title => self.title = source.title.clone(),
            PaymentMethodField::AccountType => self.account_type = source.account_type,
            PaymentMethodField::DueDate => self.due_date = source.due_date,
            PaymentMethodField::Limit => self.limit = source.limit,
            PaymentMethodField::LastFourDigits => self.last_four_digits = source.last_four_digits.clone(),
            PaymentMethodField::Color => self.color = source.color.clone(),
            PaymentMethodField::IsPrivate => self.is_private = source.is_private,
            PaymentMethodField::IsViewingDefault => self.is_viewing_default = source.is_viewing_default,
            PaymentMethodField::NotifyOnDueDate => self.notify_on_due_date = source.notify_on_due_date,
            PaymentMethodField::NotificationOffset => self.notification_offset = source.notification_offset,
        }
    }

    fn clear_field(&mut self, field: PaymentMethodField) {
        match field {
            PaymentMethodField::Title => self.title.clear(),
            PaymentMethodField::AccountType => self.account_type = AccountType::default(),
            PaymentMethodField::DueDate => self.due_date = None,
            PaymentMethodField::Limit => self.limit = None,
            PaymentMethodField::LastFourDigits => self.last_four_digits = None,
            PaymentMethodField::Color => self.color = Color::default(),
            PaymentMethodField::IsPrivate => self.is_private = false,
            PaymentMethodField::IsViewingDefault => self.is_viewing_default = false,
            PaymentMethodField::NotifyOnDueDate => self.notify_on_due_date = false,
            PaymentMethodField::NotificationOffset => self.notification_offset = 0,
        }
    }
}
