//! CSV ingest for the admissions table.
//!
//! The file is read once, fully, and the handle is dropped before any
//! computation starts. Any problem with the file is fatal: there is no row
//! skipping, since every row feeds the regression.
//!
//! Only headers and numeric cells are trimmed; `Impact_Reason` text is kept
//! exactly as written.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info};

use crate::domain::{AdmissionsTable, Specialization, REASON_COLUMN, YEAR_COLUMN};
use crate::error::AppError;

/// Load the admissions table from a CSV file on disk.
pub fn load_admissions(path: &Path) -> Result<AdmissionsTable, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    let table = read_admissions(file)?;
    info!(
        "loaded {} rows x {} specializations from {}",
        table.row_count(),
        table.specializations.len(),
        path.display()
    );
    Ok(table)
}

/// Parse an admissions table from any reader.
pub fn read_admissions<R: Read>(reader: R) -> Result<AdmissionsTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let year_idx = required_column(&header_map, YEAR_COLUMN)?;
    let reason_idx = required_column(&header_map, REASON_COLUMN)?;

    let (spec_idx, spec_names): (Vec<usize>, Vec<&str>) = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != year_idx && *idx != reason_idx)
        .map(|(idx, name)| (idx, normalize_header_name(name)))
        .unzip();
    let spec_columns: Vec<(usize, String)> = spec_idx
        .into_iter()
        .zip(unique_names(&spec_names))
        .collect();

    if spec_columns.is_empty() {
        return Err(AppError::input(
            "CSV has no specialization columns (only `Year` and `Impact_Reason`).",
        ));
    }

    let mut years = Vec::new();
    let mut reasons = Vec::new();
    let mut counts: Vec<Vec<u64>> = vec![Vec::new(); spec_columns.len()];

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header, and CSV lines are 1-based.
        let line = idx + 2;

        let record = result.map_err(|e| AppError::input(format!("CSV parse error on line {line}: {e}")))?;

        let year = get_field(&record, year_idx, YEAR_COLUMN, line)?;
        let year = year.parse::<i32>().map_err(|_| {
            AppError::input(format!("Line {line}: `{YEAR_COLUMN}` is not an integer: '{year}'"))
        })?;
        years.push(year);

        // The reason column is free text; an empty cell is a valid (blank) note.
        reasons.push(record.get(reason_idx).unwrap_or("").to_string());

        for ((col, name), column) in spec_columns.iter().zip(counts.iter_mut()) {
            let raw = get_field(&record, *col, name, line)?;
            column.push(parse_count(raw, name, line)?);
        }
    }

    if years.is_empty() {
        return Err(AppError::input("CSV contains a header but no data rows."));
    }

    debug!("years: {years:?}");

    let specializations = spec_columns
        .into_iter()
        .zip(counts)
        .map(|((_, name), counts)| Specialization { name, counts })
        .collect();

    Ok(AdmissionsTable {
        years,
        reasons,
        specializations,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name).to_string(), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> &str {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}')
}

/// Make repeated headers distinct: the second `A` becomes `A.1`, the third
/// `A.2`, skipping any suffix already taken by another column.
fn unique_names(names: &[&str]) -> Vec<String> {
    let mut taken: HashSet<String> = names.iter().map(|n| n.to_string()).collect();
    taken.insert(YEAR_COLUMN.to_string());
    taken.insert(REASON_COLUMN.to_string());

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::with_capacity(names.len());
    for &name in names {
        let count = seen.entry(name).or_insert(0);
        if *count == 0 {
            *count = 1;
            out.push(name.to_string());
            continue;
        }
        let mut candidate = format!("{name}.{count}");
        while taken.contains(&candidate) {
            *count += 1;
            candidate = format!("{name}.{count}");
        }
        *count += 1;
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::input(format!("Missing required column: `{name}`")))
}

fn get_field<'a>(record: &'a StringRecord, idx: usize, name: &str, line: usize) -> Result<&'a str, AppError> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::input(format!("Line {line}: missing value for `{name}`")))
}

fn parse_count(raw: &str, name: &str, line: usize) -> Result<u64, AppError> {
    raw.parse::<u64>().map_err(|_| {
        AppError::input(format!(
            "Line {line}: `{name}` must be a non-negative integer, got '{raw}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Year,A,B,Impact_Reason
2020,5,3,x
2021,7,4,y
";

    #[test]
    fn reads_reserved_and_specialization_columns() {
        let table = read_admissions(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.years, vec![2020, 2021]);
        assert_eq!(table.reasons, vec!["x", "y"]);
        assert_eq!(table.specialization_names(), vec!["A", "B"]);
        assert_eq!(table.specialization("A").unwrap().counts, vec![5, 7]);
        assert_eq!(table.specialization("B").unwrap().counts, vec![3, 4]);
    }

    #[test]
    fn reserved_columns_can_appear_anywhere() {
        let csv = "Impact_Reason,Cloud,Year\n\"Covid, remote\",12,2020\n";
        let table = read_admissions(csv.as_bytes()).unwrap();
        assert_eq!(table.years, vec![2020]);
        assert_eq!(table.reasons, vec!["Covid, remote"]);
        assert_eq!(table.specialization_names(), vec!["Cloud"]);
    }

    #[test]
    fn duplicate_headers_get_numbered_suffixes() {
        let csv = "Year,A,A,Impact_Reason\n2020,1,100,x\n2021,2,200,y\n";
        let table = read_admissions(csv.as_bytes()).unwrap();
        assert_eq!(table.specialization_names(), vec!["A", "A.1"]);
        assert_eq!(table.specialization("A").unwrap().counts, vec![1, 2]);
        assert_eq!(table.specialization("A.1").unwrap().counts, vec![100, 200]);
    }

    #[test]
    fn duplicate_suffix_skips_existing_names() {
        assert_eq!(unique_names(&["A", "A.1", "A"]), vec!["A", "A.1", "A.2"]);
        assert_eq!(unique_names(&["B", "B", "B"]), vec!["B", "B.1", "B.2"]);
    }

    #[test]
    fn reason_text_keeps_whitespace_but_numbers_are_trimmed() {
        let csv = "Year,A,Impact_Reason\n 2020 , 5 ,  Covid shift \n";
        let table = read_admissions(csv.as_bytes()).unwrap();
        assert_eq!(table.years, vec![2020]);
        assert_eq!(table.specialization("A").unwrap().counts, vec![5]);
        assert_eq!(table.reasons, vec!["  Covid shift "]);
    }

    #[test]
    fn strips_bom_from_first_header() {
        let csv = "\u{feff}Year,AI,Impact_Reason\n2022,9,boom\n";
        let table = read_admissions(csv.as_bytes()).unwrap();
        assert_eq!(table.years, vec![2022]);
    }

    #[test]
    fn missing_reason_column_is_rejected() {
        let err = read_admissions("Year,A\n2020,1\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().contains("Impact_Reason"));
    }

    #[test]
    fn no_specializations_is_rejected() {
        let err = read_admissions("Year,Impact_Reason\n2020,x\n".as_bytes()).unwrap_err();
        assert!(err.message().contains("no specialization columns"));
    }

    #[test]
    fn non_integer_count_reports_line() {
        let err = read_admissions("Year,A,Impact_Reason\n2020,1,x\n2021,abc,y\n".as_bytes()).unwrap_err();
        assert!(err.message().contains("Line 3"));
        assert!(err.message().contains("`A`"));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = read_admissions("Year,A,Impact_Reason\n2020,-1,x\n".as_bytes()).unwrap_err();
        assert!(err.message().contains("non-negative"));
    }

    #[test]
    fn short_row_is_rejected() {
        let err = read_admissions("Year,A,Impact_Reason\n2020,1\n".as_bytes()).unwrap_err();
        assert!(err.message().contains("CSV parse error on line 2"));
    }

    #[test]
    fn header_only_is_rejected() {
        let err = read_admissions("Year,A,Impact_Reason\n".as_bytes()).unwrap_err();
        assert!(err.message().contains("no data rows"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = load_admissions(file.path()).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_admissions(&dir.path().join("bca_admissions.csv")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().starts_with("Failed to open CSV"));
    }
}
