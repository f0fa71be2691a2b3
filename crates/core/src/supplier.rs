//! Supplier records, form drafts, and the create/update form mode.
//!
//! Wire field names (including the PascalCase `CompanyName` and
//! `PhoneNumber`) are fixed by the dashboard backend and preserved via
//! serde renames.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Supplier
// ---------------------------------------------------------------------------

/// A supplier record as stored by the backend.
///
/// `supplier_id` is assigned server-side; every record returned by
/// `supplier_get` carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "supplierId")]
    pub supplier_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "supplierEmail")]
    pub email: String,
    #[serde(rename = "supplierNIC")]
    pub nic: String,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone: String,
    pub category: String,
}

// ---------------------------------------------------------------------------
// SupplierDraft
// ---------------------------------------------------------------------------

/// In-memory, not-yet-submitted supplier field values.
///
/// Doubles as the mutation payload: serialization omits `supplierId`
/// when absent, and that omission is the sole signal telling the
/// backend a submit is a create rather than an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    #[serde(rename = "supplierId", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "supplierEmail")]
    pub email: String,
    #[serde(rename = "supplierNIC")]
    pub nic: String,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone: String,
    pub category: String,
}

impl SupplierDraft {
    /// Build a draft pre-filled from an existing record, keeping its id.
    ///
    /// Used when the user picks a row to edit: every field, including
    /// `supplier_id`, is copied so an update round-trips unchanged
    /// values.
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            supplier_id: Some(supplier.supplier_id),
            first_name: supplier.first_name.clone(),
            last_name: supplier.last_name.clone(),
            email: supplier.email.clone(),
            nic: supplier.nic.clone(),
            company_name: supplier.company_name.clone(),
            phone: supplier.phone.clone(),
            category: supplier.category.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// FormMode
// ---------------------------------------------------------------------------

/// Which mutation the next submit performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Update,
}

impl FormMode {
    /// Suffix used to build the backend action name
    /// (`supplier_create` / `supplier_update`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_supplier() -> Supplier {
        Supplier {
            supplier_id: 7,
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            email: "nimal@acme.lk".into(),
            nic: "903456789V".into(),
            company_name: "Acme Foods".into(),
            phone: "0771234567".into(),
            category: "Food".into(),
        }
    }

    #[test]
    fn supplier_uses_backend_wire_names() {
        let json = serde_json::to_value(sample_supplier()).unwrap();
        assert_eq!(json["supplierId"], 7);
        assert_eq!(json["firstName"], "Nimal");
        assert_eq!(json["lastName"], "Perera");
        assert_eq!(json["supplierEmail"], "nimal@acme.lk");
        assert_eq!(json["supplierNIC"], "903456789V");
        assert_eq!(json["CompanyName"], "Acme Foods");
        assert_eq!(json["PhoneNumber"], "0771234567");
        assert_eq!(json["category"], "Food");
    }

    #[test]
    fn draft_without_id_omits_supplier_id_key() {
        let draft = SupplierDraft {
            first_name: "Nimal".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("supplierId").is_none());
    }

    #[test]
    fn draft_with_id_serializes_supplier_id() {
        let draft = SupplierDraft {
            supplier_id: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["supplierId"], 7);
    }

    #[test]
    fn from_supplier_copies_every_field_including_id() {
        let supplier = sample_supplier();
        let draft = SupplierDraft::from_supplier(&supplier);
        assert_eq!(draft.supplier_id, Some(7));
        assert_eq!(draft.first_name, supplier.first_name);
        assert_eq!(draft.last_name, supplier.last_name);
        assert_eq!(draft.email, supplier.email);
        assert_eq!(draft.nic, supplier.nic);
        assert_eq!(draft.company_name, supplier.company_name);
        assert_eq!(draft.phone, supplier.phone);
        assert_eq!(draft.category, supplier.category);
    }

    #[test]
    fn form_mode_round_trips_action_suffix() {
        assert_eq!(FormMode::Create.as_str(), "create");
        assert_eq!(FormMode::Update.as_str(), "update");
        assert_eq!(FormMode::default(), FormMode::Create);
    }
}
