//! CRM record vocabulary.
//!
//! Typed counterparts of the records the hosted store holds:
//! organizations with their lead funnel status, contact persons, catalog
//! products and notes. Their CRUD pages live outside this crate; the
//! types exist so documents and exports reference them safely.

pub mod types;


pub use types::{BillingType, Contact, LeadStatus, Note, NoteType, Organization, Product};
