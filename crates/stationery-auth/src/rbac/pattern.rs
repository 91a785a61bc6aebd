//! Route patterns: literal segments, `{param}` captures and a trailing `**`.

use std::fmt;

use stationery_core::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
}

/// A parsed route pattern such as `/api/pedidos/cliente/{id}` or
/// `/api/admin/**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_wildcard: bool,
}

/// Ordering key for "more specific". Compared lexicographically: literal
/// count, then param count, then exact (no trailing `**`).
pub type Specificity = (usize, usize, bool);

impl RoutePattern {
    /// Parse a pattern. `**` is only allowed as the last segment.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !raw.starts_with('/') {
            return Err(AppError::configuration(format!(
                "Route pattern '{raw}' must start with '/'"
            )));
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut trailing_wildcard = false;

        for (i, part) in parts.iter().enumerate() {
            if *part == "**" {
                if i + 1 != parts.len() {
                    return Err(AppError::configuration(format!(
                        "Route pattern '{raw}': '**' must be the last segment"
                    )));
                }
                trailing_wildcard = true;
            } else if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                if name.is_empty() || name.contains(['{', '}', '*']) {
                    return Err(AppError::configuration(format!(
                        "Route pattern '{raw}': bad capture '{part}'"
                    )));
                }
                segments.push(Segment::Param);
            } else if part.contains(['{', '}', '*']) {
                return Err(AppError::configuration(format!(
                    "Route pattern '{raw}': bad segment '{part}'"
                )));
            } else {
                segments.push(Segment::Literal((*part).to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            trailing_wildcard,
        })
    }

    /// Whether `path` (no query string) matches. Empty segments are ignored,
    /// so a trailing slash makes no difference.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let length_ok = if self.trailing_wildcard {
            parts.len() >= self.segments.len()
        } else {
            parts.len() == self.segments.len()
        };

        length_ok
            && self.segments.iter().zip(&parts).all(|(seg, part)| match seg {
                Segment::Literal(lit) => lit == part,
                Segment::Param => true,
            })
    }

    /// Ranking key used to pick the rules that apply to a path.
    ///
    /// Segment counts dominate: `/api/{section}/users` outranks
    /// `/api/admin/**` for `/api/admin/users`, so a capture row sitting next
    /// to a guarded prefix overrides it. Guard such paths with exact rows
    /// too (e.g. `/api/admin/users`), not only with the prefix.
    pub fn specificity(&self) -> Specificity {
        let literals = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();
        (
            literals,
            self.segments.len() - literals,
            !self.trailing_wildcard,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
