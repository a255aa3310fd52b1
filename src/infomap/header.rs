//! Comment-prologue metadata extraction

use log::{debug, trace};

use super::error::{ParseError, Result};
use super::models::Header;

/// The shortest valid result file: version tag, invocation line, five
/// annotation lines and a column header line.
pub(crate) const MIN_LINES: usize = 8;

/// Parse the comment prologue of a result file.
///
/// Prologue structure:
/// - line 0: `# v<major>.<minor>.<patch>` version tag
/// - line 1: `# <invocation string>`
/// - lines 2..: optional annotations, until the first non-comment line
///
/// Annotation lines carry a fixed label (`started at`, `completed in`,
/// `partitioned into`, `codelength`, `relative codelength savings`,
/// `bipartite start id`). Unrecognized comment lines are ignored so that
/// newer engine versions can add annotations without breaking readers.
///
/// # Errors
/// Fails when the input is shorter than [`MIN_LINES`] or when the version
/// or invocation line is missing or malformed.
pub(crate) fn parse(lines: &[&str]) -> Result<Header> {
    if lines.len() < MIN_LINES {
        return Err(ParseError::TooShort { found: lines.len() });
    }

    let version = parse_version(lines[0]).ok_or(ParseError::MissingVersion)?;
    let args = lines[1]
        .strip_prefix("# ")
        .filter(|rest| !rest.is_empty())
        .ok_or(ParseError::MissingArguments)?
        .to_string();

    let mut header = Header {
        version,
        args,
        started_at: None,
        completed_in: None,
        num_levels: None,
        num_top_modules: None,
        codelength: None,
        relative_codelength_savings: None,
        bipartite_start_id: None,
    };

    for line in &lines[2..] {
        if !line.starts_with('#') {
            break;
        }
        parse_annotation(line, &mut header);
    }

    debug!(
        "Header parsed: version={}, levels={:?}, top modules={:?}",
        header.version, header.num_levels, header.num_top_modules
    );

    Ok(header)
}

/// Extract the `v<major>.<minor>.<patch>` tag from the first prologue line.
///
/// Anything after the patch number (pre-release or build suffixes such as
/// `v2.4.0-1`) is not part of the stored version.
fn parse_version(line: &str) -> Option<String> {
    let rest = line.strip_prefix("# v")?;
    let mut parts = rest.splitn(3, '.');
    let major = digit_run(parts.next()?)?;
    let minor = digit_run(parts.next()?)?;
    let patch = digit_run(parts.next()?)?;
    Some(format!("v{}.{}.{}", major, minor, patch))
}

/// Leading run of ASCII digits, if non-empty.
fn digit_run(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}

/// Match one annotation line against the known label set.
///
/// A recognized label whose value fails to convert leaves its field unset,
/// the same as an unknown annotation.
fn parse_annotation(line: &str, header: &mut Header) {
    let rest = match line.strip_prefix("# ") {
        Some(rest) => rest,
        None => return,
    };

    if let Some(value) = rest.strip_prefix("started at ") {
        if !value.is_empty() {
            header.started_at = Some(value.to_string());
        }
    } else if let Some(value) = rest.strip_prefix("completed in ") {
        // The value carries a unit, as in `completed in 0.01 s`.
        if let Some(seconds) = strip_unit(value, " s") {
            header.completed_in = Some(seconds);
        }
    } else if let Some(value) = rest.strip_prefix("partitioned into ") {
        parse_partition(value, header);
    } else if let Some(value) = rest.strip_prefix("codelength ") {
        if let Some(bits) = strip_unit(value, " bits") {
            header.codelength = Some(bits);
        }
    } else if let Some(value) = rest.strip_prefix("relative codelength savings ") {
        if let Some((percent, _)) = value.rsplit_once('%') {
            if let Ok(percent) = percent.parse::<f64>() {
                header.relative_codelength_savings = Some(percent / 100.0);
            }
        }
    } else if let Some(value) = rest.strip_prefix("bipartite start id ") {
        if let Some(id) = digit_run(value).and_then(|digits| digits.parse().ok()) {
            header.bipartite_start_id = Some(id);
        }
    } else {
        trace!("Ignoring annotation line: {}", line);
    }
}

/// Numeric value followed by a unit suffix, as in `3.49842 bits`.
fn strip_unit(value: &str, unit: &str) -> Option<f64> {
    let (number, _) = value.rsplit_once(unit)?;
    number.parse().ok()
}

/// The `<levels> levels with <modules> top modules` annotation. Both counts
/// parse or neither field is set.
fn parse_partition(value: &str, header: &mut Header) {
    let Some((levels, rest)) = value.split_once(" levels with ") else {
        return;
    };
    let Some((top_modules, _)) = rest.split_once(" top modules") else {
        return;
    };

    if let (Ok(levels), Ok(top_modules)) = (levels.parse(), top_modules.parse()) {
        header.num_levels = Some(levels);
        header.num_top_modules = Some(top_modules);
    }
}
