use std::fmt;

/// Skills shown per list in a batch table row.
pub const SKILL_PREVIEW_LIMIT: usize = 3;
/// Skills shown per list in the single-resume result.
pub const SINGLE_SKILL_LIMIT: usize = 10;

/// Upper-case the first character of every space-separated token and
/// lower-case the rest. Spacing is preserved and the result is stable under
/// repeated application.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_token(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(token.len());
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        // Characters like 'ß' expand when upper-cased; keep them as they are.
        _ => out.push(first),
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Capped view over a skill list: the first `limit` entries, capitalized,
/// and how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillPreview {
    None,
    Shown { skills: Vec<String>, remaining: usize },
}

impl SkillPreview {
    pub fn new(skills: &[String], limit: usize) -> Self {
        if skills.is_empty() {
            return SkillPreview::None;
        }
        SkillPreview::Shown {
            skills: skills
                .iter()
                .take(limit)
                .map(|s| capitalize_words(s))
                .collect(),
            remaining: skills.len().saturating_sub(limit),
        }
    }

    /// Row preview used by the batch table.
    pub fn row(skills: &[String]) -> Self {
        Self::new(skills, SKILL_PREVIEW_LIMIT)
    }

    pub fn remaining(&self) -> usize {
        match self {
            SkillPreview::None => 0,
            SkillPreview::Shown { remaining, .. } => *remaining,
        }
    }

    pub fn shown(&self) -> &[String] {
        match self {
            SkillPreview::None => &[],
            SkillPreview::Shown { skills, .. } => skills,
        }
    }
}

/// `"Python, Sql, Docker +2 more"` or `"None"`.
impl fmt::Display for SkillPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillPreview::None => f.write_str("None"),
            SkillPreview::Shown { skills, remaining } => {
                f.write_str(&skills.join(", "))?;
                if *remaining > 0 {
                    write!(f, " +{remaining} more")?;
                }
                Ok(())
            }
        }
    }
}

/// Full capitalized list, used by the detail view.
pub fn capitalize_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| capitalize_words(s)).collect()
}
