pub mod confirmation_modal;
pub mod error_banner;
pub mod existing_image_list;
pub mod image_field_editor;
pub mod image_preview_modal;
pub mod inspection_form;
pub mod layout;
pub mod location_picker;
pub mod pagination_controls;
pub mod record_card;
pub mod record_filter_bar;
pub mod record_form;
pub mod record_table;
pub mod require_auth;

pub use confirmation_modal::ConfirmationModal;
pub use error_banner::ErrorBanner;
pub use existing_image_list::ExistingImageList;
pub use image_field_editor::ImageFieldEditor;
pub use image_preview_modal::ImagePreviewModal;
pub use inspection_form::InspectionForm;
pub use location_picker::LocationPicker;
pub use pagination_controls::PaginationControls;
pub use record_card::RecordCard;
pub use record_filter_bar::RecordFilterBar;
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use require_auth::RequireAuth;
