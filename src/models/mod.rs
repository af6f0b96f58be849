pub mod dataset_types;
pub mod device_types;
