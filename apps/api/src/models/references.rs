use serde::{Deserialize, Serialize};

use super::{loose_string, null_as_default, Validate};

/// People who held a similar role at the company.
///
/// Only `name`, `linkedin_url` and `email` are kept; anything else the model
/// adds is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceList {
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub email: Option<String>,
}

impl Validate for ReferenceList {
    fn validate(&mut self) -> Result<(), String> {
        self.references
            .retain(|r| r.name.is_some() || r.linkedin_url.is_some());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_dropped() {
        let json = r#"{"references": [
            {"name": "Ada", "linkedin_url": "https://linkedin.com/in/ada", "email": null, "title": "SWE", "phone": "555"}
        ]}"#;
        let mut list: ReferenceList = serde_json::from_str(json).unwrap();
        list.validate().unwrap();

        let value = serde_json::to_value(&list).unwrap();
        let entry = value["references"][0].as_object().unwrap();
        let mut keys: Vec<_> = entry.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "linkedin_url", "name"]);
    }

    #[test]
    fn test_placeholder_entries_are_removed() {
        let json = r#"{"references": [{"name": "", "linkedin_url": "", "email": ""}]}"#;
        let mut list: ReferenceList = serde_json::from_str(json).unwrap();
        list.validate().unwrap();
        assert!(list.references.is_empty());
    }

    #[test]
    fn test_envelope_is_required() {
        assert!(serde_json::from_str::<ReferenceList>(r#"[{"name": "Ada"}]"#).is_err());
    }
}
