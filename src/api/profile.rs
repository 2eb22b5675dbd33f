//! User profile API.

use crate::api::require;
use crate::client::GraphClient;
use crate::error::Result;
use crate::types::{Profile, ProfileField};

/// Fields requested when the caller does not name any.
const DEFAULT_FIELDS: [ProfileField; 4] = [
    ProfileField::Name,
    ProfileField::FirstName,
    ProfileField::LastName,
    ProfileField::ProfilePic,
];

/// User profile API client.
pub struct ProfileApi {
    client: GraphClient,
}

impl ProfileApi {
    pub(crate) fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Fetch a user's profile.
    ///
    /// An empty `fields` slice requests `name,first_name,last_name,profile_pic`.
    /// A non-empty slice is sent verbatim, in order.
    pub async fn get(
        &self,
        access_token: &str,
        user_id: &str,
        fields: &[ProfileField],
    ) -> Result<Profile> {
        require("user_id", user_id)?;
        require("access_token", access_token)?;

        let fields = if fields.is_empty() {
            &DEFAULT_FIELDS[..]
        } else {
            fields
        };
        let field_list = fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let url = self
            .client
            .url(&[user_id], &[("fields", &field_list)], access_token)?;
        self.client.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_list() {
        let joined = DEFAULT_FIELDS
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(joined, "name,first_name,last_name,profile_pic");
    }
}
