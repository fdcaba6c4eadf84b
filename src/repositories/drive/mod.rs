pub mod drive_repository;

pub use drive_repository::{DriveRepository, GoogleDriveRepository};
