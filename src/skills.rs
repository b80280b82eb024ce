/*
 * Skills Module
 *
 * Skill relations shown when hovering a skill in the panel.
 */

pub const SKILLS: &[&str] = &[
    "python", "tensorflow", "keras", "opencv", "pandas", "numpy", "matplotlib", "aws", "docker", "gcp", "azure", "git",
];

const RELATIONS: &[(&str, &[&str])] = &[
    ("python", &["tensorflow", "keras", "pandas", "numpy", "opencv"]),
    ("tensorflow", &["keras", "python", "numpy"]),
    ("keras", &["tensorflow", "python"]),
    ("opencv", &["python", "numpy"]),
    ("pandas", &["python", "numpy", "matplotlib"]),
    ("numpy", &["python", "pandas", "tensorflow", "matplotlib"]),
    ("aws", &["docker", "gcp", "azure"]),
    ("git", &["python"]),
];

/// Skills related to `skill`; empty when it has no relations.
pub fn related(skill: &str) -> &'static [&'static str] {
    RELATIONS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// Hover state: the skill under the pointer and the ones it points at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillHighlight {
    hovered: Option<&'static str>,
}

impl SkillHighlight {
    pub fn hover(&mut self, skill: Option<&'static str>) {
        self.hovered = skill;
    }

    pub fn is_highlighted(&self, skill: &str) -> bool {
        self.hovered.map_or(false, |h| related(h).iter().any(|r| *r == skill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_relations() {
        assert_eq!(related("python"), &["tensorflow", "keras", "pandas", "numpy", "opencv"]);
    }

    #[test]
    fn unknown_or_leaf_skill_has_none() {
        assert!(related("cobol").is_empty());
        assert!(related("matplotlib").is_empty());
    }

    #[test]
    fn every_related_skill_is_listed() {
        for (_, rel) in RELATIONS {
            for skill in *rel {
                assert!(SKILLS.contains(skill), "{} missing", skill);
            }
        }
    }

    #[test]
    fn hover_highlights_related_only() {
        let mut highlight = SkillHighlight::default();
        assert!(!highlight.is_highlighted("docker"));
        highlight.hover(Some("aws"));
        assert!(highlight.is_highlighted("docker"));
        assert!(!highlight.is_highlighted("aws"));
        highlight.hover(None);
        assert!(!highlight.is_highlighted("docker"));
    }
}
