//! Household member credential records.

use serde::Deserialize;

/// Credentials of a household sub-account, listed in the welcome email sent
/// to the primary account holder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Session identifier used to log in, when one exists
    pub session_id: String,

    /// Username, used when no session identifier exists
    pub username: String,

    /// Password
    pub password: String,

    /// Role of the member within the household
    pub user_type: String,
}

impl Member {
    /// Decodes a JSON member list, leniently.
    ///
    /// Anything that is not a parseable JSON array yields `None`, which
    /// callers treat the same as "no members supplied". The email still
    /// goes out.
    pub fn parse_list(raw: &str) -> Option<Vec<Member>> {
        serde_json::from_str(raw).ok()
    }

    /// First and last name joined with a space, empty parts dropped.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The identifier the member logs in with: session id when present,
    /// username otherwise, empty when neither is set.
    pub fn login_identifier(&self) -> &str {
        if !self.session_id.is_empty() {
            &self.session_id
        } else {
            &self.username
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_accepts_an_array() {
        let members = Member::parse_list(
            r#"[{"firstName":"Emma","lastName":"Dupont","sessionId":"emma01","password":"pw","userType":"CHILD"}]"#,
        )
        .unwrap();

        assert_eq!(1, members.len());
        assert_eq!("Emma Dupont", members[0].full_name());
        assert_eq!("emma01", members[0].login_identifier());
    }

    #[test]
    fn test_parse_list_preserves_input_order() {
        let members = Member::parse_list(
            r#"[{"firstName":"B"},{"firstName":"A"},{"firstName":"C"}]"#,
        )
        .unwrap();

        let order: Vec<_> = members.iter().map(|m| m.first_name.as_str()).collect();
        assert_eq!(vec!["B", "A", "C"], order);
    }

    #[test]
    fn test_parse_list_rejects_non_arrays() {
        assert!(Member::parse_list(r#"{"firstName":"Emma"}"#).is_none());
        assert!(Member::parse_list("not json").is_none());
        assert!(Member::parse_list("42").is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let members = Member::parse_list(r#"[{}]"#).unwrap();

        assert_eq!("", members[0].full_name());
        assert_eq!("", members[0].login_identifier());
        assert_eq!("", members[0].password);
    }

    #[test]
    fn test_login_identifier_falls_back_to_username() {
        let members =
            Member::parse_list(r#"[{"username":"emma.d","firstName":"Emma"}]"#).unwrap();

        assert_eq!("emma.d", members[0].login_identifier());
    }

    #[test]
    fn test_full_name_drops_empty_parts() {
        let members = Member::parse_list(r#"[{"lastName":"Dupont"}]"#).unwrap();

        assert_eq!("Dupont", members[0].full_name());
    }
}
