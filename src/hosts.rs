//! Hosts file model: region lookup and comment toggling.
//!
//! Everything here is pure. Loading and saving live in [`crate::platform`].
//! Lines are kept as raw bytes so a hosts file in any 8-bit encoding
//! round-trips unchanged.

use std::ops::Range;
use std::sync::OnceLock;

use regex::bytes::Regex;
use tracing::debug;

use crate::error::ToggleError;

/// How the project name is embedded in the start marker pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternMode {
    /// Project name matches itself only (regex metacharacters escaped).
    #[default]
    Literal,
    /// Project name is spliced into the pattern as-is, so `.` or `+` keep
    /// their regex meaning.
    Verbatim,
}

/// Full hosts file content as an ordered line sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsFile {
    lines: Vec<Vec<u8>>,
}

impl HostsFile {
    /// Split on `\n` only, so a trailing newline becomes a trailing empty line
    /// and [`HostsFile::to_content`] gives back the exact input.
    pub fn parse(content: &[u8]) -> Self {
        Self {
            lines: content.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect(),
        }
    }

    /// Build from already split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// All lines, markers included.
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// Number of lines; a trailing newline counts as one empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Join lines with `\n`; N lines give N-1 separators.
    pub fn to_content(&self) -> Vec<u8> {
        self.lines.join(&b'\n')
    }

    /// Locate the project's region and flip every line inside it.
    ///
    /// On error the file is left unchanged.
    pub fn toggle(&mut self, project: &str, mode: PatternMode) -> Result<ToggleReport, ToggleError> {
        let region = locate(&self.lines, project, mode)?;
        debug!(project, start = region.start, end = region.end, "located region");
        Ok(toggle_region(self, region, project))
    }
}

/// Marker line indices; lines strictly between them are toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn inner(&self) -> Range<usize> {
        self.start + 1..self.end
    }
}

/// Lines changed by a toggle, each in ascending line order.
///
/// Display only: non-UTF-8 bytes are shown as U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleReport {
    pub project: String,
    pub uncommented: Vec<String>,
    pub commented: Vec<String>,
}

impl ToggleReport {
    pub fn is_empty(&self) -> bool {
        self.uncommented.is_empty() && self.commented.is_empty()
    }
}

/// Result of flipping one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggled {
    Uncommented(Vec<u8>),
    Commented(Vec<u8>),
}

/// Strip all leading `#`, or prepend one if there is none.
pub fn toggle_line(line: &[u8]) -> Toggled {
    match line.iter().position(|&b| b != b'#') {
        Some(0) => Toggled::Commented([b"#".as_slice(), line].concat()),
        Some(n) => Toggled::Uncommented(line[n..].to_vec()),
        None if line.is_empty() => Toggled::Commented(b"#".to_vec()),
        None => Toggled::Uncommented(Vec::new()),
    }
}

fn start_pattern(project: &str, mode: PatternMode) -> Result<Regex, ToggleError> {
    let name = match mode {
        PatternMode::Literal => regex::escape(project),
        PatternMode::Verbatim => project.to_string(),
    };
    Regex::new(&format!(r"^#\s?TOGGLE\s+{name}$")).map_err(|source| ToggleError::InvalidPattern {
        project: project.to_string(),
        source,
    })
}

fn end_pattern() -> &'static Regex {
    static END_REGEX: OnceLock<Regex> = OnceLock::new();
    END_REGEX.get_or_init(|| Regex::new(r"^#\s?END\s?TOGGLE$").expect("Invalid end marker regex"))
}

/// Index of the first start marker for `project`.
pub fn find_start(lines: &[Vec<u8>], project: &str, mode: PatternMode) -> Result<usize, ToggleError> {
    let re = start_pattern(project, mode)?;
    lines
        .iter()
        .position(|l| re.is_match(l))
        .ok_or_else(|| ToggleError::ProjectNotFound {
            project: project.to_string(),
        })
}

/// Index of the first end marker at or after `start`.
pub fn find_end(lines: &[Vec<u8>], start: usize) -> Result<usize, ToggleError> {
    let re = end_pattern();
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, l)| re.is_match(l))
        .map(|(i, _)| i)
        .ok_or(ToggleError::ProjectEndNotFound { start })
}

/// Start marker, then the first end marker from there on.
pub fn locate(lines: &[Vec<u8>], project: &str, mode: PatternMode) -> Result<Region, ToggleError> {
    let start = find_start(lines, project, mode)?;
    let end = find_end(lines, start)?;
    Ok(Region { start, end })
}

/// Flip every line strictly inside `region`; marker lines are not touched.
pub fn toggle_region(file: &mut HostsFile, region: Region, project: &str) -> ToggleReport {
    let mut report = ToggleReport {
        project: project.to_string(),
        ..Default::default()
    };

    for i in region.inner() {
        let line = match toggle_line(&file.lines[i]) {
            Toggled::Uncommented(line) => {
                report.uncommented.push(String::from_utf8_lossy(&line).into_owned());
                line
            }
            Toggled::Commented(line) => {
                report.commented.push(String::from_utf8_lossy(&line).into_owned());
                line
            }
        };
        file.lines[i] = line;
    }

    report
}
