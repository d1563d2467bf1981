#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewWarning {
    /// An extent fell below the floor and was re-centred.
    ExtentClamped,
    /// The candidate region was not finite; the previous region was kept.
    NonFiniteRejected,
}

/// What a viewport mutation actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewUpdateReport {
    pub clamped: bool,
    pub warning: Option<ViewWarning>,
}

impl ViewUpdateReport {
    pub(crate) fn warn(warning: ViewWarning) -> Self {
        Self {
            clamped: true,
            warning: Some(warning),
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.clamped && self.warning.is_none()
    }
}
