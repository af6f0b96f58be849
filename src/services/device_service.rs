//! Device capability reporting.
//!
//! The auditor links no deep-learning framework. Anything that can answer
//! the questions below (a framework binding, a test double) implements
//! [`DeviceStatusProvider`] and is queried once per report.

use crate::models::device_types::{CudaStatus, FrameworkStatus};
use std::fmt::Write;

pub trait DeviceStatusProvider {
    fn cuda_status(&self) -> CudaStatus;
    fn framework_status(&self) -> FrameworkStatus;
}

/// Provider for a host with no GPU framework available.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProvider;

impl DeviceStatusProvider for HostProvider {
    fn cuda_status(&self) -> CudaStatus {
        CudaStatus::default()
    }

    fn framework_status(&self) -> FrameworkStatus {
        FrameworkStatus {
            framework_version: "none".to_string(),
            build_has_cuda: false,
        }
    }
}

pub fn render_device_report(provider: &dyn DeviceStatusProvider) -> String {
    let cuda = provider.cuda_status();
    let framework = provider.framework_status();
    let mut out = String::new();

    let _ = writeln!(out, "🔍 Checking for GPU...");
    let _ = writeln!(out, "{}", cuda.cuda_version.as_deref().unwrap_or("None"));
    let _ = writeln!(out, "{}", if cuda.cuda_available { "True" } else { "False" });
    let device = if cuda.cuda_available { "cuda" } else { "cpu" };
    let _ = writeln!(out, "Using device: {}", device);

    if cuda.device_count > 0 {
        let _ = writeln!(out, "✅ GPU detected: {} available", cuda.device_count);
        for i in 0..cuda.device_count {
            let name = cuda.device_names.get(i).map(String::as_str).unwrap_or("Unknown");
            let _ = writeln!(out);
            let _ = writeln!(out, " GPU {}:", i);
            let _ = writeln!(out, "  • Name: {}", name);
        }
    } else {
        let _ = writeln!(out, "❌ No GPU detected. Running on CPU.");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Framework version: {}", framework.framework_version);
    match (&cuda.cuda_version, framework.build_has_cuda) {
        (Some(version), true) => {
            let _ = writeln!(out, "CUDA version: {}", version);
        }
        _ => {
            let _ = writeln!(out, "⚠️ CUDA build not found, likely running on a CPU build.");
        }
    }

    out
}
