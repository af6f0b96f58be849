use crate::error::AppError;
use crate::services::device_service::{self, DeviceStatusProvider};
use std::io::Write;

pub fn device_status(provider: &dyn DeviceStatusProvider) -> Result<(), AppError> {
    let report = device_service::render_device_report(provider);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
