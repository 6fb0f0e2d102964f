/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! A1 notation helpers
//!
//! Ranges are addressed as `Sheet!A1`, `Sheet!A:A` or `Sheet!1:1`. Columns are
//! lettered (`A`..`Z`, `AA`..), rows and column indexes are 1-based.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

static PLAIN_SHEET_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

static CELL_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{1,3}[0-9]+$").expect("valid regex"));

static R1C1_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[Rr][0-9]+[Cc][0-9]+$").expect("valid regex"));

/// Converts a 1-based column index to its letters (`1` -> `A`, `27` -> `AA`)
pub fn column_letter(index: u32) -> Result<String, AppError> {
    if index == 0 {
        return Err(AppError::InvalidInput(
            "column index is 1-based, got 0".to_string(),
        ));
    }
    let mut n = index;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    Ok(letters.iter().rev().collect())
}

/// Converts column letters to a 1-based index (`A` -> `1`, `AA` -> `27`)
pub fn column_index(letters: &str) -> Result<u32, AppError> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::InvalidInput(format!(
            "invalid column letters: '{letters}'"
        )));
    }
    letters.chars().try_fold(0u32, |acc, c| {
        let digit = (c.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
        acc.checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| AppError::InvalidInput(format!("column out of range: '{letters}'")))
    })
}

/// Quotes a sheet name when A1 notation requires it
///
/// Names with spaces, punctuation, or that read like a cell reference are
/// wrapped in single quotes, with embedded quotes doubled.
pub fn quote_sheet_name(name: &str) -> String {
    if PLAIN_SHEET_NAME.is_match(name) && !CELL_LIKE.is_match(name) && !R1C1_LIKE.is_match(name)
    {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// Single cell reference, e.g. `Sheet1!B3`
pub fn cell_range(sheet_name: &str, col: &str, row: u32) -> String {
    format!("{}!{}{}", quote_sheet_name(sheet_name), col, row)
}

/// Whole column reference, e.g. `Sheet1!A:A`
pub fn column_range(sheet_name: &str, col: &str) -> String {
    format!("{}!{col}:{col}", quote_sheet_name(sheet_name))
}

/// Whole row reference, e.g. `Sheet1!1:1`
pub fn row_range(sheet_name: &str, row: u32) -> String {
    format!("{}!{row}:{row}", quote_sheet_name(sheet_name))
}
