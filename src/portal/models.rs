//! Record types for the property portal.
//!
//! Each collection gets an explicit struct with a stable numeric id. Raw
//! wire objects (`Api*` types) deserialize loosely and are validated into
//! the typed records at the data-access boundary; a record that fails
//! validation is skipped rather than failing the whole fetch.

use crate::view::{Record, SortKey, SortValue};
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Validation failure for a single wire record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required text field was empty
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// A date field did not parse as YYYY-MM-DD
    #[error("invalid date '{value}' in field '{field}'")]
    InvalidDate {
        /// Field name
        field: &'static str,
        /// Raw value from the wire
        value: String,
    },
    /// A monetary amount was negative
    #[error("negative amount {0} cents")]
    NegativeAmount(i64),
}

fn require(field: &'static str, value: String) -> Result<String, RecordError> {
    if value.trim().is_empty() {
        Err(RecordError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RecordError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn require_amount(cents: i64) -> Result<i64, RecordError> {
    if cents < 0 {
        Err(RecordError::NegativeAmount(cents))
    } else {
        Ok(cents)
    }
}

/// Format an amount in cents as a dollar string.
pub fn format_amount(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).unsigned_abs())
}

/// A property listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Listing id
    pub id: u64,
    /// Listing title
    pub name: String,
    /// Property kind (apartment, house, condo, townhouse)
    pub kind: String,
    /// City
    pub city: String,
    /// Street address
    pub street: String,
    /// Monthly rent in cents
    pub rent_cents: i64,
    /// Bedroom count
    pub bedrooms: u32,
    /// Bathroom count
    pub bathrooms: u32,
    /// Listing date
    pub listed_on: NaiveDate,
}

/// Wire shape of a property listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProperty {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
    pub street: String,
    pub rent_cents: i64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    pub listed_on: String,
}

impl TryFrom<ApiProperty> for Property {
    type Error = RecordError;

    fn try_from(raw: ApiProperty) -> Result<Self, Self::Error> {
        Ok(Property {
            id: raw.id,
            name: require("name", raw.name)?,
            kind: require("type", raw.kind)?,
            city: require("city", raw.city)?,
            street: raw.street,
            rent_cents: require_amount(raw.rent_cents)?,
            bedrooms: raw.bedrooms,
            bathrooms: raw.bathrooms,
            listed_on: parse_date("listedOn", &raw.listed_on)?,
        })
    }
}

impl Record for Property {
    fn id(&self) -> u64 {
        self.id
    }

    fn category(&self) -> &str {
        &self.kind
    }

    fn date(&self) -> NaiveDate {
        self.listed_on
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue> {
        match key {
            SortKey::Date => Some(SortValue::Date(self.listed_on)),
            SortKey::Amount => Some(SortValue::Amount(self.rent_cents)),
            SortKey::Title => Some(SortValue::Text(self.name.clone())),
            SortKey::Unread => None,
        }
    }
}

/// A broadcast notice from landlord to tenants or properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice id
    pub id: u64,
    /// Subject line
    pub title: String,
    /// Notice kind (maintenance, rent increase, eviction, general)
    pub kind: String,
    /// Target audience description
    pub audience: String,
    /// Workflow status (pending, approved, declined, acknowledged)
    pub status: String,
    /// Issue date
    pub date: NaiveDate,
    /// Body text
    pub body: String,
}

/// Wire shape of a notice.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNotice {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub status: String,
    pub date: String,
    #[serde(default)]
    pub body: String,
}

impl TryFrom<ApiNotice> for Notice {
    type Error = RecordError;

    fn try_from(raw: ApiNotice) -> Result<Self, Self::Error> {
        Ok(Notice {
            id: raw.id,
            title: require("title", raw.title)?,
            kind: require("type", raw.kind)?,
            audience: raw.audience,
            status: raw.status,
            date: parse_date("date", &raw.date)?,
            body: raw.body,
        })
    }
}

impl Record for Notice {
    fn id(&self) -> u64 {
        self.id
    }

    fn category(&self) -> &str {
        &self.kind
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue> {
        match key {
            SortKey::Date => Some(SortValue::Date(self.date)),
            SortKey::Title => Some(SortValue::Text(self.title.clone())),
            SortKey::Amount | SortKey::Unread => None,
        }
    }
}

/// A rent payment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Payment id
    pub id: u64,
    /// Tenant name
    pub tenant: String,
    /// Property name
    pub property: String,
    /// Amount in cents
    pub amount_cents: i64,
    /// Payment method (card, transfer, cash)
    pub method: String,
    /// Status (paid, pending, overdue)
    pub status: String,
    /// Payment date
    pub date: NaiveDate,
}

/// Wire shape of a payment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPayment {
    pub id: u64,
    pub tenant: String,
    pub property: String,
    pub amount_cents: i64,
    #[serde(default)]
    pub method: String,
    pub status: String,
    pub date: String,
}

impl TryFrom<ApiPayment> for Payment {
    type Error = RecordError;

    fn try_from(raw: ApiPayment) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: raw.id,
            tenant: require("tenant", raw.tenant)?,
            property: require("property", raw.property)?,
            amount_cents: require_amount(raw.amount_cents)?,
            method: raw.method,
            status: require("status", raw.status)?,
            date: parse_date("date", &raw.date)?,
        })
    }
}

impl Payment {
    /// Amount formatted for display.
    pub fn format_amount(&self) -> String {
        format_amount(self.amount_cents)
    }
}

impl Record for Payment {
    fn id(&self) -> u64 {
        self.id
    }

    // Payments filter by workflow status.
    fn category(&self) -> &str {
        &self.status
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue> {
        match key {
            SortKey::Date => Some(SortValue::Date(self.date)),
            SortKey::Amount => Some(SortValue::Amount(self.amount_cents)),
            SortKey::Title => Some(SortValue::Text(self.tenant.clone())),
            SortKey::Unread => None,
        }
    }
}

/// A tenant's active lease record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    /// Rental id
    pub id: u64,
    /// Property name
    pub property: String,
    /// Unit label within the property
    pub unit: String,
    /// Monthly rent in cents
    pub rent_cents: i64,
    /// Lease start date
    pub lease_start: NaiveDate,
    /// Lease end date
    pub lease_end: NaiveDate,
    /// Lease status (active, ending, ended)
    pub status: String,
}

/// Wire shape of a rental.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRental {
    pub id: u64,
    pub property: String,
    #[serde(default)]
    pub unit: String,
    pub rent_cents: i64,
    pub lease_start: String,
    pub lease_end: String,
    #[serde(default)]
    pub status: String,
}

impl TryFrom<ApiRental> for Rental {
    type Error = RecordError;

    fn try_from(raw: ApiRental) -> Result<Self, Self::Error> {
        Ok(Rental {
            id: raw.id,
            property: require("property", raw.property)?,
            unit: raw.unit,
            rent_cents: require_amount(raw.rent_cents)?,
            lease_start: parse_date("leaseStart", &raw.lease_start)?,
            lease_end: parse_date("leaseEnd", &raw.lease_end)?,
            status: raw.status,
        })
    }
}

impl Record for Rental {
    fn id(&self) -> u64 {
        self.id
    }

    fn category(&self) -> &str {
        &self.status
    }

    fn date(&self) -> NaiveDate {
        self.lease_start
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue> {
        match key {
            SortKey::Date => Some(SortValue::Date(self.lease_start)),
            SortKey::Amount => Some(SortValue::Amount(self.rent_cents)),
            SortKey::Title => Some(SortValue::Text(self.property.clone())),
            SortKey::Unread => None,
        }
    }
}

/// A notification shown in the inbox tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notification id
    pub id: u64,
    /// Kind (maintenance, payment, notice, eviction)
    pub kind: String,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Delivery date
    pub date: NaiveDate,
    /// Read flag; transitions unread -> read exactly once
    pub read: bool,
}

/// Wire shape of a notification.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNotification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub date: String,
    #[serde(default)]
    pub read: bool,
}

impl TryFrom<ApiNotification> for Notification {
    type Error = RecordError;

    fn try_from(raw: ApiNotification) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: raw.id,
            kind: require("type", raw.kind)?,
            title: require("title", raw.title)?,
            message: raw.message,
            date: parse_date("date", &raw.date)?,
            read: raw.read,
        })
    }
}

impl Notification {
    /// Mark one notification read, leaving every other record untouched.
    ///
    /// # Details
    /// Pure in-memory transition; persistence is the API collaborator's
    /// concern. Marking an already-read notification is a no-op.
    pub fn mark_read(items: &mut [Notification], id: u64) {
        if let Some(item) = items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    /// Count of unread notifications, for the tab badge.
    pub fn unread_count(items: &[Notification]) -> usize {
        items.iter().filter(|n| !n.read).count()
    }
}

impl Record for Notification {
    fn id(&self) -> u64 {
        self.id
    }

    fn category(&self) -> &str {
        &self.kind
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue> {
        match key {
            SortKey::Date => Some(SortValue::Date(self.date)),
            SortKey::Title => Some(SortValue::Text(self.title.clone())),
            SortKey::Unread => Some(SortValue::Flag(self.read)),
            SortKey::Amount => None,
        }
    }
}

/// Convert a batch of wire records, skipping the ones that fail validation.
///
/// # Details
/// Mirrors the fetch tolerance of the rest of the client: one malformed
/// record should not take down the whole list. Failures are reported on
/// stderr since the TUI owns the terminal.
pub fn validate_batch<R, T>(raw: Vec<R>) -> Vec<T>
where
    T: TryFrom<R, Error = RecordError>,
{
    let mut records = Vec::with_capacity(raw.len());
    for item in raw {
        match T::try_from(item) {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("Skipping malformed record: {}", e),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: u64, day: u32, read: bool) -> Notification {
        Notification {
            id,
            kind: "maintenance".to_string(),
            title: format!("Notification {}", id),
            message: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            read,
        }
    }

    #[test]
    fn test_mark_read_changes_only_target() {
        let mut items = vec![
            notification(1, 1, false),
            notification(2, 2, true),
            notification(3, 3, false),
            notification(4, 4, false),
        ];
        let before: Vec<Notification> = items.clone();

        Notification::mark_read(&mut items, 3);

        assert!(items[2].read);
        for (i, item) in items.iter().enumerate() {
            if item.id == 3 {
                continue;
            }
            assert_eq!(*item, before[i]);
        }
    }

    #[test]
    fn test_mark_read_missing_id_is_noop() {
        let mut items = vec![notification(1, 1, false)];
        Notification::mark_read(&mut items, 99);
        assert!(!items[0].read);
    }

    #[test]
    fn test_unread_count() {
        let items = vec![
            notification(1, 1, false),
            notification(2, 2, true),
            notification(3, 3, false),
        ];
        assert_eq!(Notification::unread_count(&items), 2);
    }

    #[test]
    fn test_property_validation_rejects_empty_name() {
        let raw = ApiProperty {
            id: 1,
            name: "  ".to_string(),
            kind: "apartment".to_string(),
            city: "Downtown".to_string(),
            street: "123 Main St".to_string(),
            rent_cents: 250_000,
            bedrooms: 2,
            bathrooms: 2,
            listed_on: "2024-03-01".to_string(),
        };
        assert!(Property::try_from(raw).is_err());
    }

    #[test]
    fn test_payment_validation_rejects_negative_amount() {
        let raw = ApiPayment {
            id: 1,
            tenant: "Jordan Miles".to_string(),
            property: "Oak Ave".to_string(),
            amount_cents: -100,
            method: "card".to_string(),
            status: "paid".to_string(),
            date: "2024-03-01".to_string(),
        };
        assert!(Payment::try_from(raw).is_err());
    }

    #[test]
    fn test_notice_validation_rejects_bad_date() {
        let raw = ApiNotice {
            id: 1,
            title: "Water shutoff".to_string(),
            kind: "maintenance".to_string(),
            audience: "All Tenants".to_string(),
            status: "Pending".to_string(),
            date: "next tuesday".to_string(),
            body: String::new(),
        };
        assert!(Notice::try_from(raw).is_err());
    }

    #[test]
    fn test_validate_batch_skips_bad_records() {
        let raw = vec![
            ApiNotification {
                id: 1,
                kind: "payment".to_string(),
                title: "Rent due".to_string(),
                message: String::new(),
                date: "2024-03-01".to_string(),
                read: false,
            },
            ApiNotification {
                id: 2,
                kind: String::new(),
                title: "Broken".to_string(),
                message: String::new(),
                date: "2024-03-02".to_string(),
                read: false,
            },
        ];
        let records: Vec<Notification> = validate_batch(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
    }

    #[test]
    fn test_notification_wire_parsing() {
        let json = r#"{"id": 7, "type": "eviction", "title": "Notice served",
                       "message": "Non-payment", "date": "2024-02-20", "read": true}"#;
        let raw: ApiNotification = serde_json::from_str(json).unwrap();
        let record = Notification::try_from(raw).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.kind, "eviction");
        assert!(record.read);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(250_000), "$2500.00");
        assert_eq!(format_amount(120_050), "$1200.50");
        assert_eq!(format_amount(5), "$0.05");
    }
}
