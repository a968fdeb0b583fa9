pub mod edit_record;
pub mod inspection_detail;
pub mod login;
pub mod not_found;
pub mod record_detail;
pub mod records;
pub mod upload;

pub use edit_record::EditRecordPage;
pub use inspection_detail::InspectionDetailPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use record_detail::RecordDetailPage;
pub use records::RecordsPage;
pub use upload::UploadPage;
