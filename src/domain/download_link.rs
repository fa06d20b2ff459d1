use regex::Regex;

/// Token identifying the script block that wires up the download button.
pub const DOWNLOAD_MARKER: &str = "ButtonDownload";

const LINK_ASSIGNMENT_PATTERN: &str = r#"link\.href\s*=\s*"([^"]+)""#;

/// Scan the text of one script block for the spreadsheet download link.
///
/// The block must contain [`DOWNLOAD_MARKER`]; the URL is the quoted
/// right-hand side of the first `link.href = "..."` assignment in it.
pub fn extract_download_url(script_text: &str) -> Option<String> {
    if !script_text.contains(DOWNLOAD_MARKER) {
        return None;
    }

    let link_assignment = Regex::new(LINK_ASSIGNMENT_PATTERN).unwrap();
    link_assignment
        .captures(script_text)
        .map(|captures| captures[1].to_string())
}
