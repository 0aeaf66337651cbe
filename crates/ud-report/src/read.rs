use crate::error::ReportError;
use crate::parser::parse_report;
use crate::record::AgentUsageRecord;
use std::path::Path;

/// Read a file's raw bytes, refusing anything larger than `max_size`.
pub async fn read_asset(path: &Path, max_size: u64) -> Result<Vec<u8>, ReportError> {
    let metadata = tokio::fs::metadata(path).await?;
    let size = metadata.len();

    if size > max_size {
        return Err(ReportError::TooLarge {
            size,
            max: max_size,
        });
    }

    Ok(tokio::fs::read(path).await?)
}

/// Read a markdown report as UTF-8 text with a size limit.
pub async fn read_report(path: &Path, max_size: u64) -> Result<String, ReportError> {
    let bytes = read_asset(path, max_size).await?;
    String::from_utf8(bytes).map_err(|_| ReportError::InvalidUtf8)
}

/// Read and parse the report at `path`.
pub async fn load_report(path: &Path, max_size: u64) -> Result<Vec<AgentUsageRecord>, ReportError> {
    let content = read_report(path, max_size).await?;
    let records = parse_report(&content);
    tracing::debug!(
        "parsed {} agent rows from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
