use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use passlist_core::PersonalInfo;

use super::{OutputResult, write_bytes_atomic};

/// `<first>_<last>_<YYYY-MM-DD>.txt`, with unsafe characters replaced.
pub fn wordlist_file_name(info: &PersonalInfo, date: NaiveDate) -> String {
    let stem: Vec<String> = [&info.first_name, &info.last_name]
        .into_iter()
        .map(|name| sanitize(name.trim()))
        .filter(|name| !name.is_empty())
        .collect();
    let stem = if stem.is_empty() {
        "wordlist".to_string()
    } else {
        stem.join("_")
    };
    format!("{stem}_{}.txt", date.format("%Y-%m-%d"))
}

/// Writes one candidate per line and returns the final path.
pub fn write_wordlist(
    dir: &Path,
    info: &PersonalInfo,
    candidates: &[String],
    date: NaiveDate,
) -> OutputResult<PathBuf> {
    let path = dir.join(wordlist_file_name(info, date));
    let mut data = String::with_capacity(candidates.iter().map(|c| c.len() + 1).sum());
    for candidate in candidates {
        data.push_str(candidate);
        data.push('\n');
    }
    write_bytes_atomic(&path, data.as_bytes())?;
    Ok(path)
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}
