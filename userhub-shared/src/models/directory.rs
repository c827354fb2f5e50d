//! Bodies for the administrator user directory.

use serde::{Deserialize, Serialize};

use super::Identity;

/// Position of a page within the full user listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// One-based index of the page that was returned.
    pub current_page: u32,
    /// Number of pages at the requested page size; at least one.
    pub total_pages: u32,
    /// Number of accounts across all pages.
    pub total_users: u64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_users: 0,
        }
    }
}

/// One page of the user listing served by `GET users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPage {
    /// Accounts on this page, in service order.
    pub users: Vec<Identity>,
    /// Where this page sits in the listing.
    #[serde(default)]
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;

    #[test]
    fn test_user_page_deserialization() {
        let json = r#"{
            "users": [{
                "_id": "65f1c0ffee",
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "role": "user",
                "status": "inactive",
                "createdAt": "2024-01-15T10:00:00Z"
            }],
            "pagination": { "currentPage": 2, "totalPages": 3, "totalUsers": 21 }
        }"#;

        let page: UserPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].status, UserStatus::Inactive);
        assert_eq!(
            page.pagination,
            PageInfo {
                current_page: 2,
                total_pages: 3,
                total_users: 21,
            }
        );
    }

    #[test]
    fn test_missing_pagination_defaults_to_single_page() {
        let page: UserPage = serde_json::from_str(r#"{ "users": [] }"#).unwrap();
        assert_eq!(page.pagination, PageInfo::default());
        assert_eq!(page.pagination.total_pages, 1);
    }
}
