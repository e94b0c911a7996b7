//! Validation modules

pub mod upload;

pub use upload::{
    base_name, check_extension, check_size, destination_path, file_extension, validate_upload,
};
