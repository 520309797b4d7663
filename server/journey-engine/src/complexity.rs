//! Heuristic complexity metrics over the files linked to a journey.
//!
//! Every metric is a plain text scan, independent of source language:
//!
//! - lines of code: non-blank lines not starting with `//`, `/*` or `*`
//! - dependencies: captures of four import-statement patterns
//!   (ES module `from`, CommonJS `require`, CSS `@import`, bare `import`)
//! - decision points: raw counts of `if(`, `for(`, `while(`, `case `,
//!   ternaries, `&&`/`||` and `catch(`
//!
//! Keywords inside strings or comments are counted too; the numbers are a
//! directional signal, not a real cyclomatic complexity.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Complexity, ComplexityAnalysis, SourceFile};

static IMPORT_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
  [
    Regex::new(r#"import\s+.*from\s+['"]([^'"]+)['"]"#).expect("valid regex literal"),
    Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).expect("valid regex literal"),
    Regex::new(r#"@import\s+['"]([^'"]+)['"]"#).expect("valid regex literal"),
    Regex::new(r#"import\s+['"]([^'"]+)['"]"#).expect("valid regex literal"),
  ]
});

static DECISION_PATTERNS: LazyLock<[Regex; 7]> = LazyLock::new(|| {
  [
    Regex::new(r"(?-u:\b)if\s*\(").expect("valid regex literal"),
    Regex::new(r"(?-u:\b)for\s*\(").expect("valid regex literal"),
    Regex::new(r"(?-u:\b)while\s*\(").expect("valid regex literal"),
    Regex::new(r"(?-u:\b)case\s+").expect("valid regex literal"),
    Regex::new(r"\?.*:").expect("valid regex literal"),
    Regex::new(r"&&|\|\|").expect("valid regex literal"),
    Regex::new(r"(?-u:\b)catch\s*\(").expect("valid regex literal"),
  ]
});

/// Points per metric: (strictly greater than threshold, points), highest first.
const FILE_COUNT_POINTS: [(u64, u32); 3] = [(15, 3), (8, 2), (3, 1)];
const LOC_POINTS: [(u64, u32); 3] = [(2000, 3), (1000, 2), (500, 1)];
const DEPENDENCY_POINTS: [(u64, u32); 3] = [(20, 3), (10, 2), (5, 1)];
const CYCLOMATIC_POINTS: [(u64, u32); 3] = [(100, 3), (50, 2), (20, 1)];

/// Total score at or above which a journey is high / medium complexity.
const HIGH_COMPLEXITY_SCORE: u32 = 8;
const MEDIUM_COMPLEXITY_SCORE: u32 = 4;

/// Non-blank, non-comment lines. A leading byte-order mark is whitespace.
pub fn count_lines_of_code(content: &str) -> u64 {
  content
    .lines()
    .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
    .filter(|line| {
      !line.is_empty() && !line.starts_with("//") && !line.starts_with("/*") && !line.starts_with('*')
    })
    .count() as u64
}

/// Imported module identifiers found in `content`.
pub fn extract_dependencies(content: &str) -> BTreeSet<String> {
  IMPORT_PATTERNS
    .iter()
    .flat_map(|re| re.captures_iter(content))
    .filter_map(|caps| caps.get(1))
    .map(|m| m.as_str())
    .filter(|dep| !dep.is_empty())
    .map(str::to_string)
    .collect()
}

/// Raw decision-point tally.
pub fn count_decision_points(content: &str) -> u64 {
  DECISION_PATTERNS
    .iter()
    .map(|re| re.find_iter(content).count() as u64)
    .sum()
}

fn points(value: u64, table: &[(u64, u32); 3]) -> u32 {
  table
    .iter()
    .find(|(threshold, _)| value > *threshold)
    .map(|(_, pts)| *pts)
    .unwrap_or(0)
}

/// Accumulated points (0..=12) across the four metrics.
pub fn complexity_score(
  file_count: u64,
  lines_of_code: u64,
  dependency_count: u64,
  cyclomatic: u64,
) -> u32 {
  points(file_count, &FILE_COUNT_POINTS)
    + points(lines_of_code, &LOC_POINTS)
    + points(dependency_count, &DEPENDENCY_POINTS)
    + points(cyclomatic, &CYCLOMATIC_POINTS)
}

/// Bucket the metrics into a complexity tier.
pub fn determine_complexity(
  file_count: u64,
  lines_of_code: u64,
  dependency_count: u64,
  cyclomatic: u64,
) -> Complexity {
  let score = complexity_score(file_count, lines_of_code, dependency_count, cyclomatic);
  if score >= HIGH_COMPLEXITY_SCORE {
    Complexity::High
  } else if score >= MEDIUM_COMPLEXITY_SCORE {
    Complexity::Medium
  } else {
    Complexity::Low
  }
}

/// Metrics and tier over the matched files (already relevance-ranked).
pub fn estimate(files: &[&SourceFile]) -> ComplexityAnalysis {
  let mut dependencies = BTreeSet::new();
  let mut lines_of_code = 0;
  let mut cyclomatic_complexity = 0;

  for file in files {
    lines_of_code += count_lines_of_code(&file.content);
    cyclomatic_complexity += count_decision_points(&file.content);
    dependencies.extend(extract_dependencies(&file.content));
  }

  let complexity = determine_complexity(
    files.len() as u64,
    lines_of_code,
    dependencies.len() as u64,
    cyclomatic_complexity,
  );

  ComplexityAnalysis {
    files_involved: files.iter().map(|f| f.path.clone()).collect(),
    dependencies: dependencies.into_iter().collect(),
    lines_of_code,
    cyclomatic_complexity,
    complexity,
  }
}
