pub mod drive_file;

pub use drive_file::{DRIVE_FILE_FIELDS, DriveFile, DriveFileUpdate};
