use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use calamine::{Reader, Xlsx};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::configuration::{OutputSettings, SourceSettings};
use crate::domain::download_link::extract_download_url;
use crate::domain::worksheet::{select_data_sheet, sheet_rows, DATA_SHEET_MARKER};
use crate::error::ExtractError;

/// Outcome of one extraction run. Exactly one variant per run; failures
/// carry the human-readable reason that was logged.
#[derive(Debug, Clone, PartialEq)]
pub enum RunResult {
    Saved { output_path: PathBuf },
    Failed { reason: String },
}

#[derive(Clone)]
pub struct Extractor {
    client: Client,
    page_url: String,
    output_dir: PathBuf,
    output_file: String,
}

impl Extractor {
    pub fn new(source: SourceSettings, output: OutputSettings) -> Self {
        let client = Client::new();

        Extractor {
            client,
            page_url: source.page_url,
            output_dir: output.directory,
            output_file: output.file_name,
        }
    }

    /// Fetch the page, follow the embedded download link, and persist the
    /// data sheet as CSV. Every failure is converted into a [`RunResult`];
    /// nothing propagates to the scheduler.
    pub async fn run_extraction(&self) -> RunResult {
        log::info!("Starting data retrieval process.");
        println!("Starting data retrieval...");

        match self.extract().await {
            Ok(output_path) => {
                log::info!("Data saved to {}", output_path.display());
                println!("Data saved to: {}", output_path.display());
                RunResult::Saved { output_path }
            }
            Err(e) => {
                let reason = e.to_string();
                log::error!("{}", reason);
                println!("{}", reason);
                RunResult::Failed { reason }
            }
        }
    }

    async fn extract(&self) -> Result<PathBuf, ExtractError> {
        let response = self.client.get(&self.page_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Fetch(status.as_u16()));
        }
        let page = response.text().await?;

        let download_url = find_download_url_in_page(&page).ok_or(ExtractError::LinkNotFound)?;
        log::info!("Found download URL: {}", download_url);

        // Relative links resolve against the page; absolute ones pass through.
        let download_url = Url::parse(&self.page_url)?.join(&download_url)?;
        let download_response = self.client.get(download_url).send().await?;
        let download_status = download_response.status();
        if !download_status.is_success() {
            return Err(ExtractError::Unexpected(format!(
                "download request returned status code {}",
                download_status.as_u16()
            )));
        }
        let payload = download_response.bytes().await?;

        let mut workbook = Xlsx::new(Cursor::new(payload.as_ref()))?;
        let sheet_names = workbook.sheet_names().to_vec();
        let data_sheet = select_data_sheet(&sheet_names, DATA_SHEET_MARKER)
            .ok_or_else(|| ExtractError::SheetNotFound(DATA_SHEET_MARKER.to_string()))?
            .to_string();

        let range = workbook.worksheet_range(&data_sheet)?;
        let table = to_csv_bytes(&sheet_rows(&range))?;

        // The CSV is fully materialized before the file is touched; a failed
        // run leaves no partial output.
        fs::create_dir_all(&self.output_dir)?;
        let output_path = fs::canonicalize(&self.output_dir)?.join(&self.output_file);
        fs::write(&output_path, table)?;

        Ok(output_path)
    }
}

/// Scan every script block in document order; the first one whose text
/// yields a link supplies the download URL.
fn find_download_url_in_page(page: &str) -> Option<String> {
    let script_selector = Selector::parse("script").unwrap();
    let document = Html::parse_document(page);

    document
        .select(&script_selector)
        .find_map(|script| extract_download_url(&script.text().collect::<String>()))
}

fn to_csv_bytes(rows: &[Vec<String>]) -> Result<Vec<u8>, ExtractError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExtractError::Unexpected(e.to_string()))
}
