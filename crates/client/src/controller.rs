//! Form-bound CRUD orchestration for the supplier screen.
//!
//! [`SupplierFormController`] owns the locally rendered supplier list,
//! the current draft, and the create/update mode, and keeps the list in
//! sync with the backend by re-fetching after every successful
//! mutation. The remote collection is the source of truth; the local
//! list is replaced wholesale, never patched.

use vendora_core::supplier::{FormMode, Supplier, SupplierDraft};
use vendora_core::validation::{self, FieldErrors};

use crate::api::{ApiError, DashboardApi};
use crate::config::DashboardConfig;

/// Why a submit did not go through.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The draft failed field validation; no request was issued.
    #[error("draft validation failed: {0}")]
    Validation(FieldErrors),

    /// The create/update request itself failed. The draft and mode are
    /// left untouched so the user can resubmit.
    #[error(transparent)]
    Transport(#[from] ApiError),
}

/// Controller behind the supplier admin screen.
///
/// Methods take `&mut self`, so one controller instance issues at most
/// one request at a time; there is no further guarding, matching the
/// screen's single event-handling turn.
pub struct SupplierFormController {
    api: DashboardApi,
    suppliers: Vec<Supplier>,
    mode: FormMode,
    draft: SupplierDraft,
}

impl SupplierFormController {
    /// Build a controller from explicit configuration. The supplier
    /// list starts empty; call [`refresh`](Self::refresh) to populate.
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            api: DashboardApi::new(config),
            suppliers: Vec::new(),
            mode: FormMode::Create,
            draft: SupplierDraft::default(),
        }
    }

    /// Currently rendered supplier list (last successful fetch).
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Current form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current draft values.
    pub fn draft(&self) -> &SupplierDraft {
        &self.draft
    }

    /// Mutable access to the draft, for the front end's field bindings.
    pub fn draft_mut(&mut self) -> &mut SupplierDraft {
        &mut self.draft
    }

    /// Re-fetch the collection and replace the local list.
    ///
    /// On failure the previously fetched list is kept as-is and the
    /// error is propagated for the caller to surface generically.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.api.list().await {
            Ok(suppliers) => {
                tracing::debug!(count = suppliers.len(), "Supplier list refreshed");
                self.suppliers = suppliers;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Supplier list fetch failed, keeping stale list");
                Err(e)
            }
        }
    }

    /// Validate the draft and issue the create or update selected by
    /// the current mode.
    ///
    /// Returns the server's confirmation message on success, after
    /// re-fetching the list. A refresh failure after a successful
    /// mutation does not fail the submit; the stale list is logged and
    /// kept. On transport failure the draft and mode are untouched so
    /// the same submit can be retried.
    pub async fn submit(&mut self) -> Result<String, SubmitError> {
        validation::validate(&self.draft).map_err(SubmitError::Validation)?;

        let message = match self.mode {
            FormMode::Create => self.api.create(&self.draft).await?,
            FormMode::Update => self.api.update(&self.draft).await?,
        };
        tracing::info!(mode = %self.mode, message = %message, "Supplier submit succeeded");

        if self.refresh().await.is_err() {
            tracing::warn!("List refresh after submit failed; showing stale data");
        }
        Ok(message)
    }

    /// Delete one supplier by id, then re-fetch the list.
    ///
    /// The record is not removed locally until the refresh confirms it;
    /// on failure the list is left intact.
    pub async fn delete_one(&mut self, supplier_id: i64) -> Result<String, ApiError> {
        let message = self.api.delete_one(supplier_id).await?;
        tracing::info!(supplier_id, message = %message, "Supplier deleted");
        if self.refresh().await.is_err() {
            tracing::warn!("List refresh after delete failed; showing stale data");
        }
        Ok(message)
    }

    /// Delete the entire collection, then re-fetch (expected empty).
    pub async fn delete_all(&mut self) -> Result<String, ApiError> {
        let message = self.api.delete_all().await?;
        tracing::info!(message = %message, "All suppliers deleted");
        if self.refresh().await.is_err() {
            tracing::warn!("List refresh after delete-all failed; showing stale data");
        }
        Ok(message)
    }

    /// Pre-fill the form from an existing record and switch to Update
    /// mode. Copies every field, including the id.
    pub fn begin_update(&mut self, supplier: &Supplier) {
        self.draft = SupplierDraft::from_supplier(supplier);
        self.mode = FormMode::Update;
    }

    /// Switch back to Create mode.
    ///
    /// Typed field values are kept, but any id picked up from a
    /// previous [`begin_update`](Self::begin_update) is dropped so a
    /// create never carries a `supplierId`.
    pub fn begin_create(&mut self) {
        self.draft.supplier_id = None;
        self.mode = FormMode::Create;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
