use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Default number of decimals used when rendering a distance
pub const DEFAULT_PRECISION: usize = 2;

/// Tentative or final distance from the source node.
///
/// Unreached nodes carry [`Distance::INFINITY`]. Finite values are always
/// non-negative because edge weights are.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order used by the frontier (infinity sorts last)
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Render with at most `precision` decimals, trailing zeros trimmed.
    /// Infinite distances render as `∞`.
    pub fn format(&self, precision: usize) -> String {
        if !self.is_finite() {
            return "\u{221E}".to_string();
        }
        let fixed = format!("{:.*}", precision, self.0);
        if fixed.contains('.') {
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            fixed
        }
    }

    /// Same as [`Distance::format`] but ASCII-only (`inf` for unreached)
    pub fn format_ascii(&self, precision: usize) -> String {
        if self.is_finite() {
            self.format(precision)
        } else {
            "inf".to_string()
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<f64> for Distance {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Distance(self.0 + weight)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&self.format(precision))
    }
}

// JSON has no infinity; unreached nodes serialize as null
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Node → best known distance
pub type DistanceMap = BTreeMap<String, Distance>;

/// Node → node immediately before it on a shortest path
pub type PredecessorMap = BTreeMap<String, Option<String>>;

/// Whether an edge is stored one way or both ways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `u -- v` inserts u→v and v→u
    #[default]
    Undirected,
    /// `u -> v` inserts u→v only
    Directed,
}

impl Variant {
    /// Edge operator used by the graph description for this variant
    pub fn operator(&self) -> &'static str {
        match self {
            Variant::Undirected => "--",
            Variant::Directed => "->",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Undirected => "undirected",
            Variant::Directed => "directed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undirected" | "graph" => Ok(Variant::Undirected),
            "directed" | "digraph" => Ok(Variant::Directed),
            other => Err(format!(
                "unknown graph variant '{}' (expected: undirected, directed)",
                other
            )),
        }
    }
}

/// One parsed edge statement: `from OP to [weight=N]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        EdgeSpec {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
