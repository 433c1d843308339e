use crate::api::ApiClient;
use crate::error::ApiResult;

pub const DEFAULT_WEEKS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Excel,
    Pdf,
}

impl ReportFormat {
    fn query_value(self) -> &'static str {
        match self {
            ReportFormat::Excel => "excel",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Excel => "xlsx",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ReportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Pdf => "application/pdf",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn download_path(format: ReportFormat, weeks: u32) -> String {
    format!(
        "/reports/download?type={}&weeks={}",
        format.query_value(),
        weeks.max(1)
    )
}

/// Fetches the weekly spending report as a file.
pub async fn download(api: &ApiClient, format: ReportFormat, weeks: u32) -> ApiResult<ReportFile> {
    let file = api.download(&download_path(format, weeks)).await?;
    let file_name = file
        .file_name
        .unwrap_or_else(|| format!("Laporan_Mingguan.{}", format.extension()));
    log::info!("downloaded report {} ({} bytes)", file_name, file.bytes.len());

    Ok(ReportFile {
        file_name,
        mime_type: format.mime_type(),
        bytes: file.bytes,
    })
}
