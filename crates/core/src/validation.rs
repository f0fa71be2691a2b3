//! Draft validation — pure logic, no I/O.
//!
//! Applies the backend's field rules to a [`SupplierDraft`] in a single
//! pass and reports every violated field keyed by its wire name. A
//! required violation takes precedence over a format violation for the
//! same field, so each field carries at most one message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::supplier::SupplierDraft;

/// Basic `local@domain.tld` shape; the backend does the authoritative check.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Sri Lankan NIC: nine digits followed by a `v`/`x` suffix letter.
static NIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}[xXvV]$").expect("valid regex"));

/// Local numbers starting `0` or `7`, or international `+94`, then 9-10 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:7|0|(?:\+94))[0-9]{9,10}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// FieldErrors
// ---------------------------------------------------------------------------

/// Validation failures keyed by wire field name, one message per field.
///
/// Ordered (`BTreeMap`) so error listings render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a single field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterate `(wire field name, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Check a draft against every field rule.
///
/// Returns `Ok(())` for a submittable draft, or the full set of field
/// errors otherwise. Whitespace-only values count as missing. Format
/// rules only fire for fields that are present, so a blank email
/// reports "Email is required" rather than a format complaint.
pub fn validate(draft: &SupplierDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    require(&mut errors, "firstName", &draft.first_name, "First Name is required");
    require(&mut errors, "lastName", &draft.last_name, "Last Name is required");
    require(&mut errors, "CompanyName", &draft.company_name, "Company Name is required");
    require(&mut errors, "category", &draft.category, "Category is required");

    if draft.email.trim().is_empty() {
        errors.insert("supplierEmail", "Email is required");
    } else if !EMAIL_RE.is_match(draft.email.trim()) {
        errors.insert("supplierEmail", "Must be a valid email");
    }

    if draft.nic.trim().is_empty() {
        errors.insert("supplierNIC", "NIC is required");
    } else if !NIC_RE.is_match(draft.nic.trim()) {
        errors.insert("supplierNIC", "It is not a valid NIC");
    }

    if draft.phone.trim().is_empty() {
        errors.insert("PhoneNumber", "Phone Number is required");
    } else if !PHONE_RE.is_match(draft.phone.trim()) {
        errors.insert("PhoneNumber", "It is not a valid Phone Number");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A draft that passes every rule.
    fn valid_draft() -> SupplierDraft {
        SupplierDraft {
            supplier_id: None,
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            email: "a@b.com".into(),
            nic: "123456789V".into(),
            company_name: "Acme Foods".into(),
            phone: "0771234567".into(),
            category: "Food".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&SupplierDraft::default()).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get("firstName"), Some("First Name is required"));
        assert_eq!(errors.get("lastName"), Some("Last Name is required"));
        assert_eq!(errors.get("supplierEmail"), Some("Email is required"));
        assert_eq!(errors.get("supplierNIC"), Some("NIC is required"));
        assert_eq!(errors.get("CompanyName"), Some("Company Name is required"));
        assert_eq!(errors.get("PhoneNumber"), Some("Phone Number is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let draft = SupplierDraft {
            first_name: "   ".into(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("firstName"), Some("First Name is required"));
    }

    #[test]
    fn rejects_malformed_email() {
        let draft = SupplierDraft {
            email: "not-an-email".into(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("supplierEmail"), Some("Must be a valid email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn accepts_nic_with_either_suffix_case() {
        for nic in ["123456789V", "123456789v", "123456789X", "123456789x"] {
            let draft = SupplierDraft {
                nic: nic.into(),
                ..valid_draft()
            };
            assert_eq!(validate(&draft), Ok(()), "NIC {nic} should pass");
        }
    }

    #[test]
    fn rejects_short_nic() {
        let draft = SupplierDraft {
            nic: "12345678V".into(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("supplierNIC"), Some("It is not a valid NIC"));
    }

    #[test]
    fn rejects_nic_with_bad_suffix_letter() {
        let draft = SupplierDraft {
            nic: "123456789A".into(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("supplierNIC"), Some("It is not a valid NIC"));
    }

    #[test]
    fn accepts_local_and_international_phone_numbers() {
        for phone in ["0771234567", "+94771234567", "7712345678"] {
            let draft = SupplierDraft {
                phone: phone.into(),
                ..valid_draft()
            };
            assert_eq!(validate(&draft), Ok(()), "phone {phone} should pass");
        }
    }

    #[test]
    fn rejects_short_phone_number() {
        let draft = SupplierDraft {
            phone: "123".into(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get("PhoneNumber"),
            Some("It is not a valid Phone Number")
        );
    }

    #[test]
    fn display_joins_errors_in_field_order() {
        let draft = SupplierDraft {
            first_name: String::new(),
            phone: "123".into(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        let rendered = errors.to_string();
        assert_eq!(
            rendered,
            "PhoneNumber: It is not a valid Phone Number; firstName: First Name is required"
        );
    }
}
