//! CRM record types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontor_shared::types::{ContactId, NoteId, OrganizationId, ProductId};

/// Lead funnel status of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    /// Untouched lead.
    Lead,
    /// First outreach done.
    Contacted,
    /// The lead reacted.
    Responded,
    /// Concrete interest signalled.
    Interested,
    /// An offer went out.
    OfferSent,
    /// Won: active customer.
    Customer,
    /// Lost: no interest.
    NoInterest,
    /// Parked for later.
    Paused,
}

impl LeadStatus {
    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Contacted => "Kontaktiert",
            Self::Responded => "Reagiert",
            Self::Interested => "Interesse",
            Self::OfferSent => "Angebot gesendet",
            Self::Customer => "Kunde",
            Self::NoInterest => "Kein Interesse",
            Self::Paused => "Pausiert",
        }
    }
}

/// Kind of a CRM note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    /// Internal remark.
    Internal,
    /// Phone call record.
    Call,
    /// On-site visit.
    Visit,
    /// Incoming e-mail.
    EmailIn,
    /// Outgoing e-mail.
    EmailOut,
    /// Anything else.
    Other,
}

impl NoteType {
    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Internal => "Intern",
            Self::Call => "Telefonnotiz",
            Self::Visit => "Besuch",
            Self::EmailIn => "E-Mail-Eingang",
            Self::EmailOut => "E-Mail-Ausgang",
            Self::Other => "Sonstige",
        }
    }
}

/// How a catalog product is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingType {
    /// Fixed one-time price.
    OneTime,
    /// Billed by effort.
    ByEffort,
}

impl BillingType {
    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "Einmalig",
            Self::ByEffort => "Nach Aufwand",
        }
    }
}

/// An organization (company) in the CRM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier.
    pub id: OrganizationId,
    /// Company name.
    pub name: String,
    /// Industry / branch.
    pub industry: String,
    /// Street and house number.
    pub address_street: String,
    /// Postal code.
    pub address_zip: String,
    /// City.
    pub address_city: String,
    /// Website URL.
    pub website: String,
    /// Phone number.
    pub phone: String,
    /// Position in the lead funnel.
    pub status: LeadStatus,
    /// Comma-separated free-form tags.
    pub tags: String,
}

/// A contact person at an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier.
    pub id: ContactId,
    /// Organization this person belongs to.
    pub organization: OrganizationId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role within the organization.
    pub role: String,
    /// E-mail address.
    pub email: String,
    /// Office phone.
    pub phone: String,
    /// Mobile phone.
    pub mobile: String,
    /// Whether this is the primary contact for the organization.
    pub is_primary: bool,
}

impl Contact {
    /// Display name, first name first.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.trim().to_string();
        let last = self.last_name.trim();
        if !name.is_empty() && !last.is_empty() {
            name.push(' ');
        }
        name.push_str(last);
        name
    }
}

/// A catalog product or service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Article number shown on documents.
    pub article_number: String,
    /// Product name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Catalog category.
    pub category: String,
    /// Billing mode.
    pub billing_type: BillingType,
    /// List price in euros; zero means "price on request".
    pub price: Decimal,
    /// Internal note.
    pub note: String,
    /// Whether the product is offered at all.
    pub active: bool,
}

impl Product {
    /// Whether the product carries a fixed list price.
    #[must_use]
    pub fn has_list_price(&self) -> bool {
        self.price > Decimal::ZERO
    }
}

/// A CRM note attached to an organization and optionally a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier.
    pub id: NoteId,
    /// Organization the note belongs to.
    pub organization: OrganizationId,
    /// Contact the note refers to, if any.
    pub contact: Option<ContactId>,
    /// Kind of note.
    #[serde(rename = "type")]
    pub note_type: NoteType,
    /// Note body.
    pub content: String,
    /// When the noted interaction happened.
    pub noted_at: NaiveDateTime,
    /// Author user name.
    pub created_by: String,
}
