use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::Color;
use super::common_enums::TransactionStatus;
use super::location::LocationModel;
use super::references::{CategoryRef, PaymentMethodRef, TagRef};
use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::audit::entity_type::{AuditEntityType, HasEntityType};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;
use crate::models::snapshot::SnapshotProvider;
use crate::models::trackable::{Trackable, TrackedField};
use crate::tracker::compare::ComparisonPolicy;
use crate::tracker::render::FieldRenderer;

/// Tracked fields of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionField {
    Title,
    Amount,
    PaymentMethod,
    Category,
    Date,
    Notes,
    FactorInCalculations,
    Color,
    Tags,
    Locations,
    TrackingNumber,
    Status,
    Url,
    NotifyOnDueDate,
    NotificationOffset,
}

impl TrackedField for TransactionField {
    const ALL: &'static [Self] = &[
        TransactionField::Title,
        TransactionField::Amount,
        TransactionField::PaymentMethod,
        TransactionField::Category,
        TransactionField::Date,
        TransactionField::Notes,
        TransactionField::FactorInCalculations,
        TransactionField::Color,
        TransactionField::Tags,
        TransactionField::Locations,
        TransactionField::TrackingNumber,
        TransactionField::Status,
        TransactionField::Url,
        TransactionField::NotifyOnDueDate,
        TransactionField::NotificationOffset,
    ];

    fn name(&self) -> &'static str {
        match self {
            TransactionField::Title => "title",
            TransactionField::Amount => "amount",
            TransactionField::PaymentMethod => "payment_method",
            TransactionField::Category => "category",
            TransactionField::Date => "date",
            TransactionField::Notes => "notes",
            TransactionField::FactorInCalculations => "factor_in_calculations",
            TransactionField::Color => "color",
            TransactionField::Tags => "tags",
            TransactionField::Locations => "locations",
            TransactionField::TrackingNumber => "tracking_number",
            TransactionField::Status => "status",
            TransactionField::Url => "url",
            TransactionField::NotifyOnDueDate => "notify_on_due_date",
            TransactionField::NotificationOffset => "notification_offset",
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionModel {
    pub id: Uuid,
    pub title: HeaplessString<100>,

    /// Signed amount: negative for expenses
    pub amount: Decimal,

    pub payment_method: Option<PaymentMethodRef>,
    pub category: Option<CategoryRef>,
    pub date: Option<NaiveDate>,
    pub notes: HeaplessString<500>,

    /// Whether the amount counts towards budgets and totals
    pub factor_in_calculations: bool,

    pub color: Color,
    pub tags: Vec<TagRef>,
    pub locations: Vec<LocationModel>,
    pub tracking_number: Option<HeaplessString<50>>,
    pub status: TransactionStatus,
    pub url: Option<HeaplessString<200>>,
    pub notify_on_due_date: bool,

    /// Days before `date` the reminder fires
    pub notification_offset: i32,

    /// Hash of the stored version with this field set to 0
    /// - 0: not yet stored
    pub hash: i64,

    /// Audit log of the last stored version
    /// - None: not yet stored
    pub audit_log_id: Option<Uuid>,

    /// Persisted separately through the change log repository
    #[serde(skip)]
    pub change_log: Vec<ChangeLogEntry<TransactionField>>,
}

impl TransactionModel {
    /// New, unsaved transaction with empty fields
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: HeaplessString::new(),
            amount: Decimal::ZERO,
            payment_method: None,
            category: None,
            date: None,
            notes: HeaplessString::new(),
            factor_in_calculations: true,
            color: Color::default(),
            tags: Vec::new(),
            locations: Vec::new(),
            tracking_number: None,
            status: TransactionStatus::default(),
            url: None,
            notify_on_due_date: false,
            notification_offset: 0,
            hash: 0,
            audit_log_id: None,
            change_log: Vec::new(),
        }
    }
}

impl Default for TransactionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Identifiable for TransactionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl HasEntityType for TransactionModel {
    const ENTITY_TYPE: AuditEntityType = AuditEntityType::Transaction;
}

impl Auditable for TransactionModel {
    type Field = TransactionField;

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

    fn change_log(&self) -> &[ChangeLogEntry<TransactionField>] {
        &self.change_log
    }

    fn append_change_log(&mut self, entries: Vec<ChangeLogEntry<TransactionField>>) {
        self.change_log.extend(entries);
    }
}

impl SnapshotProvider for TransactionModel {
    fn snapshot(&self) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            amount: self.amount,
            payment_method: self.payment_method.clone(),
            category: self.category.clone(),
            date: self.date,
            notes: self.notes.clone(),
            factor_in_calculations: self.factor_in_calculations,
            color: self.color.clone(),
            tags: self.tags.clone(),
            locations: self.locations.snapshot(),
            tracking_number: self.tracking_number.clone(),
            status: self.status,
            url: self.url.clone(),
            notify_on_due_date: self.notify_on_due_date,
            notification_offset: self.notification_offset,
            hash: self.hash,
            audit_log_id: self.audit_log_id,
            change_log: Vec::new(),
        }
    }
}

impl Trackable for TransactionModel {
    const SIGNIFICANT: &'static [TransactionField] = &[
        TransactionField::Title,
        TransactionField::Amount,
        TransactionField::Category,
        TransactionField::PaymentMethod,
        TransactionField::Date,
    ];

    fn field_differs(&self, baseline: &Self, field: TransactionField, policy: &ComparisonPolicy) -> bool {
        match field {
            TransactionField::Title => self.title != baseline.title,
            TransactionField::Amount => self.amount != baseline.amount,
            TransactionField::PaymentMethod => {
                !policy.same_reference(self.payment_method.as_ref(), baseline.payment_method.as_ref())
            }
            TransactionField::Category => {
                !policy.same_reference(self.category.as_ref(), baseline.category.as_ref())
            }
            TransactionField::Date => self.date != baseline.date,
            TransactionField::Notes => self.notes != baseline.notes,
            TransactionField::FactorInCalculations => {
                self.factor_in_calculations != baseline.factor_in_calculations
            }
            TransactionField::Color => self.color != baseline.color,
            TransactionField::Tags => !policy.same_references(&self.tags, &baseline.tags),
            TransactionField::Locations => !policy.same_collection(&self.locations, &baseline.locations),
            TransactionField::TrackingNumber => self.tracking_number != baseline.tracking_number,
            TransactionField::Status => self.status != baseline.status,
            TransactionField::Url => self.url != baseline.url,
            TransactionField::NotifyOnDueDate => self.notify_on_due_date != baseline.notify_on_due_date,
            TransactionField::NotificationOffset => self.notification_offset != baseline.notification_offset,
        }
    }

    fn render_field(&self, field: TransactionField, renderer: &FieldRenderer) -> Option<String> {
        match field {
            TransactionField::Title => renderer.non_empty_text(&self.title),
            TransactionField::Amount => Some(renderer.amount(self.amount)),
            TransactionField::PaymentMethod => {
                self.payment_method.as_ref().map(|p| renderer.text(&p.title))
            }
            TransactionField::Category => self.category.as_ref().map(CategoryRef::display_name),
            TransactionField::Date => renderer.optional_date(self.date),
            TransactionField::Notes => renderer.non_empty_text(&self.notes),
            TransactionField::FactorInCalculations => Some(renderer.flag(self.factor_in_calculations)),
            TransactionField::Color => Some(renderer.color(&self.color)),
            TransactionField::Tags => {
                renderer.collection(self.tags.iter().map(|t| renderer.text(&t.title)))
            }
            TransactionField::Locations => {
                renderer.collection(self.locations.iter().map(LocationModel::display_name))
            }
            TransactionField::TrackingNumber => renderer.optional_text(self.tracking_number.as_deref()),
            TransactionField::Status => Some(renderer.display(self.status)),
            TransactionField::Url => renderer.optional_text(self.url.as_deref()),
            TransactionField::NotifyOnDueDate => Some(renderer.flag(self.notify_on_due_date)),
            TransactionField::NotificationOffset => Some(renderer.display(self.notification_offset)),
        }
    }

    fn restore_field(&mut self, source: &Self, field: TransactionField) {
        match field {
            TransactionField::Title => self.title = source.title.clone(),
            TransactionField::Amount => self.amount = source.amount,
            TransactionField::PaymentMethod => self.payment_method = source.payment_method.clone(),
            TransactionField::Category => self.category = source.category.clone(),
            TransactionField::Date => self.date = source.date,
            TransactionField::Notes => self.notes = source.notes.clone(),
            TransactionField::FactorInCalculations => {
                self.factor_in_calculations = source.factor_in_calculations
            }
            TransactionField::Color => self.color = source.color.clone(),
            TransactionField::Tags => self.tags = source.tags.clone(),
            TransactionField::Locations => self.locations = source.locations.snapshot(),
            TransactionField::TrackingNumber => self.tracking_number = source.tracking_number.clone(),
            TransactionField::Status => self.status = source.status,
            TransactionField::Url => self.url = source.url.clone(),
            TransactionField::NotifyOnDueDate => self.notify_on_due_date = source.notify_on_due_date,
            TransactionField::NotificationOffset => self.notification_offset = source.notification_offset,
        }
    }

    fn clear_field(&mut self, field: TransactionField) {
        match field {
            TransactionField::Title => self.title.clear(),
            TransactionField::Amount => self.amount = Decimal::ZERO,
            TransactionField::PaymentMethod => self.payment_method = None,
            TransactionField::Category => self.category = None,
            TransactionField::Date => self.date = None,
            TransactionField::Notes => self.notes.clear(),
            TransactionField::FactorInCalculations => self.factor_in_calculations = true,
            TransactionField::Color => self.color = Color::default(),
            TransactionField::Tags | TransactionField::Locations => {}
            TransactionField::TrackingNumber => self.tracking_number = None,
            TransactionField::Status => self.status = TransactionStatus::default(),
            TransactionField::Url => self.url = None,
            TransactionField::NotifyOnDueDate => self.notify_on_due_date = false,
            TransactionField::NotificationOffset => self.notification_offset = 0,
        }
    }
}
