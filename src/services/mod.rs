pub mod dataset_service;
pub mod device_service;
pub mod fs_service;
pub mod report_service;
