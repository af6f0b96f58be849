use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct CudaStatus {
    pub cuda_available: bool,
    pub cuda_version: Option<String>,
    pub device_count: usize,
    pub device_names: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FrameworkStatus {
    pub framework_version: String,
    pub build_has_cuda: bool,
}
