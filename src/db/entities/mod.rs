pub mod progress_records;

pub use progress_records::ActiveModel as ProgressRecordActiveModel;
pub use progress_records::Entity as ProgressRecords;
pub use progress_records::Model as ProgressRecordModel;
