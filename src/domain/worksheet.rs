use calamine::{Data, Range};

/// Sheet names containing this substring (case-insensitive) hold the table.
pub const DATA_SHEET_MARKER: &str = "data";

/// First sheet name containing `marker`, ignoring case.
pub fn select_data_sheet<'a>(sheet_names: &'a [String], marker: &str) -> Option<&'a str> {
    let marker = marker.to_lowercase();

    sheet_names
        .iter()
        .find(|name| name.to_lowercase().contains(&marker))
        .map(String::as_str)
}

/// Flatten a worksheet range into rows of display strings.
///
/// The first row is the header row and is kept as-is; cells keep whatever
/// the spreadsheet engine inferred, rendered without a trailing `.0` on
/// integral numbers.
pub fn sheet_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
