/// The currently selected pharmacy (tenant) for this page view.
///
/// Written by the location-selection flow at the navigation boundary, read
/// by every scoped repository call. Writes replace the whole value; there
/// is no partial update. Absence of a `pharmacy_id` is a precondition
/// failure for scoped reads, never a silent default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantContext {
    pharmacy_id: Option<String>,
}

impl TenantContext {
    /// No pharmacy selected.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn for_pharmacy(pharmacy_id: impl Into<String>) -> Self {
        Self {
            pharmacy_id: Some(pharmacy_id.into()),
        }
    }

    pub fn set(&mut self, pharmacy_id: impl Into<String>) {
        self.pharmacy_id = Some(pharmacy_id.into());
    }

    /// Cleared on logout.
    pub fn clear(&mut self) {
        self.pharmacy_id = None;
    }

    pub fn pharmacy_id(&self) -> Option<&str> {
        self.pharmacy_id.as_deref()
    }
}
