use crate::error::{ForgeError, Result};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Command,
    Service,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Command => "command",
            Kind::Service => "service",
        }
    }
}

impl FromStr for Kind {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "command" => Ok(Kind::Command),
            "service" => Ok(Kind::Service),
            other => Err(ForgeError::KindNotRecognized(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Node,
    Golang,
    Python,
    Bash,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Node => "node",
            Target::Golang => "golang",
            Target::Python => "python",
            Target::Bash => "bash",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names a template target can be asked for by. Earlier entries win ties.
const TARGET_NAMES: [(&str, Target); 5] = [
    ("Node.js", Target::Node),
    ("node", Target::Node),
    ("Golang", Target::Golang),
    ("Python", Target::Python),
    ("Bash", Target::Bash),
];

/// Largest edit distance still accepted as a match.
pub const MAX_TARGET_DISTANCE: usize = 7;

/// Resolve a loosely spelled target name ("golang", "Node.js", "pyhton")
/// to the closest known target.
pub fn match_target(from: &str) -> Result<Target> {
    let mut best: Option<(usize, Target)> = None;
    for (name, target) in TARGET_NAMES {
        let distance = edit_distance(name, from);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, target));
        }
    }

    match best {
        Some((distance, target)) if distance <= MAX_TARGET_DISTANCE => {
            tracing::debug!(from, %target, distance, "template target matched");
            Ok(target)
        }
        _ => Err(ForgeError::TemplateNotFound(from.to_string())),
    }
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
