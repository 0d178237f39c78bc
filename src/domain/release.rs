use serde::Serialize;

/// The release submitted to the create-release endpoint.
///
/// Serializes to the JSON body GitHub expects. Draft and prerelease are
/// always false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDraft {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl ReleaseDraft {
    /// Build the draft for `version`, titled "Release <version>"
    pub fn new(version: &str, target_branch: impl Into<String>, body: impl Into<String>) -> Self {
        ReleaseDraft {
            tag_name: version.to_string(),
            target_commitish: target_branch.into(),
            name: format!("Release {}", version),
            body: body.into(),
            draft: false,
            prerelease: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_fields() {
        let draft = ReleaseDraft::new("1.4.0", "main", "notes");
        assert_eq!(draft.tag_name, "1.4.0");
        assert_eq!(draft.target_commitish, "main");
        assert_eq!(draft.name, "Release 1.4.0");
        assert_eq!(draft.body, "notes");
        assert!(!draft.draft);
        assert!(!draft.prerelease);
    }

    #[test]
    fn test_draft_json_shape() {
        let draft = ReleaseDraft::new("0.0.1", "main", "### Changes");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["tag_name"], "0.0.1");
        assert_eq!(json["target_commitish"], "main");
        assert_eq!(json["name"], "Release 0.0.1");
        assert_eq!(json["draft"], false);
        assert_eq!(json["prerelease"], false);
    }
}
