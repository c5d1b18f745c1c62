//! Disk partitioning via the OS partitioning utility.

use tokio::process::Command;

use crate::error::StepError;
use crate::system::encoding::decode_console;
use crate::system::paths::WorkDir;

/// Partitioning plan for the single-disk target image: one extended
/// partition holding one formatted logical partition on disk 0. The disk
/// index is a design constraint, not configuration.
const DISKPART_SCRIPT: &str = "select disk 0\n\
create partition extended\n\
create partition logical\n\
assign\n\
format fs=ntfs quick";

/// Write the partitioning script (overwriting any prior copy) and run the
/// partitioning utility against it.
pub async fn partition(work: &WorkDir) -> Result<(), StepError> {
    let script = work.diskpart_script();
    log::debug!("diskpart script:\n{DISKPART_SCRIPT}");

    std::fs::create_dir_all(work.root()).map_err(StepError::PartitionScript)?;
    std::fs::write(&script, DISKPART_SCRIPT).map_err(StepError::PartitionScript)?;

    let output = Command::new("diskpart")
        .arg("/s")
        .arg(&script)
        .output()
        .await
        .map_err(|e| StepError::PartitionFailed(e.to_string()))?;

    if !output.status.success() {
        return Err(StepError::PartitionFailed(format!(
            "diskpart exited with {}",
            output.status
        )));
    }

    log::debug!("{}", decode_console(&output.stdout).trim_end());
    Ok(())
}
