pub mod use_fetch;
pub mod use_inspection;
pub mod use_inspections;
pub mod use_logout;
pub mod use_record;
pub mod use_records;
pub mod use_session_restore;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_inspection::use_inspection;
pub use use_inspections::use_inspections;
pub use use_logout::use_logout;
pub use use_record::use_record;
pub use use_records::use_records;
pub use use_session_restore::use_session_restore;

/// Distinguishes "not fetched yet" from "fetched but empty".
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}
