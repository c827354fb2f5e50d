//! Tests for the administrator directory
//!
//! Runs listing and status changes against the scripted service's in-memory
//! accounts through a signed-in session machine.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use shared::models::{UserRole, UserStatus};

    use crate::api::test_implementations::{FakeIdentityService, identity, member};
    use crate::directory::{PAGE_SIZE, StatusChange, apply, fetch_page};
    use crate::errors::AuthError;
    use crate::session::SessionMachine;
    use crate::store::{CredentialStore, MemoryCredentialStore};

    type TestMachine = SessionMachine<Rc<MemoryCredentialStore>, Rc<FakeIdentityService>>;

    async fn admin_with_members(
        count: u32,
    ) -> (TestMachine, Rc<MemoryCredentialStore>, Rc<FakeIdentityService>) {
        let service =
            FakeIdentityService::accepting("tok-admin", identity(UserRole::Admin)).with_members(count);
        let store = Rc::new(MemoryCredentialStore::new());
        let machine = SessionMachine::new(Rc::clone(&store), Rc::clone(&service));
        machine.bootstrap().await.unwrap();
        machine.login("ada@example.com", "Secret#123").await.unwrap();
        (machine, store, service)
    }

    #[tokio::test]
    async fn test_fetch_page_uses_managed_token_and_page_size() {
        let (machine, _, service) = admin_with_members(25).await;

        let page = fetch_page(&machine, &service, 2).await.unwrap();

        assert_eq!(service.calls().last().unwrap(), "users:tok-admin:2");
        assert_eq!(page.users.len(), PAGE_SIZE as usize);
        assert_eq!(page.users[0].id, "member-11");
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_users, 25);
    }

    #[tokio::test]
    async fn test_last_page_holds_the_remainder() {
        let (machine, _, service) = admin_with_members(25).await;

        let page = fetch_page(&machine, &service, 3).await.unwrap();

        assert_eq!(page.users.len(), 5);
        assert_eq!(page.users.last().unwrap().id, "member-25");
    }

    #[tokio::test]
    async fn test_page_zero_reads_first_page() {
        let (machine, _, service) = admin_with_members(3).await;

        let page = fetch_page(&machine, &service, 0).await.unwrap();

        assert_eq!(service.calls().last().unwrap(), "users:tok-admin:1");
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn test_empty_directory_is_one_empty_page() {
        let (machine, _, service) = admin_with_members(0).await;

        let page = fetch_page(&machine, &service, 1).await.unwrap();

        assert!(page.users.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.total_users, 0);
    }

    #[tokio::test]
    async fn test_fetch_when_signed_out_skips_the_service() {
        let service = FakeIdentityService::new().with_members(5);
        let machine = SessionMachine::new(Rc::new(MemoryCredentialStore::new()), Rc::clone(&service));
        machine.bootstrap().await.unwrap();

        let result = fetch_page(&machine, &service, 1).await;

        assert_eq!(result, Err(AuthError::Unauthorized));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_status_toggles_both_ways() {
        let (machine, _, service) = admin_with_members(4).await;

        let deactivate = StatusChange::toggle(member(3));
        assert_eq!(deactivate.target, UserStatus::Inactive);
        apply(&machine, &service, &deactivate).await.unwrap();
        assert_eq!(service.status_of("member-3"), Some(UserStatus::Inactive));

        let page = fetch_page(&machine, &service, 1).await.unwrap();
        let reloaded = page.users.into_iter().find(|user| user.id == "member-3").unwrap();
        let activate = StatusChange::toggle(reloaded);
        assert_eq!(activate.target, UserStatus::Active);
        apply(&machine, &service, &activate).await.unwrap();
        assert_eq!(service.status_of("member-3"), Some(UserStatus::Active));

        assert_eq!(service.call_count("deactivate:member-3"), 1);
        assert_eq!(service.call_count("activate:member-3"), 1);
        assert!(machine.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_change_keeps_session_and_status() {
        let (machine, _, service) = admin_with_members(2).await;
        *service.admin_error.borrow_mut() =
            Some(AuthError::Validation("Cannot deactivate the last admin".into()));
        let change = StatusChange::toggle(member(1));

        let err = apply(&machine, &service, &change).await.unwrap_err();

        assert_eq!(change.failure_message(&err), "Cannot deactivate the last admin");
        assert_eq!(service.status_of("member-1"), Some(UserStatus::Active));
        assert!(machine.is_authenticated());
    }

    #[tokio::test]
    async fn test_unauthorized_listing_ends_session() {
        let (machine, store, service) = admin_with_members(2).await;
        *service.admin_error.borrow_mut() = Some(AuthError::Unauthorized);

        let result = fetch_page(&machine, &service, 1).await;

        assert_eq!(result, Err(AuthError::Unauthorized));
        assert!(!machine.is_authenticated());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_confirmation_copy_follows_target_status() {
        let deactivate = StatusChange::toggle(member(7));
        assert_eq!(deactivate.title(), "Deactivate User");
        assert_eq!(deactivate.label(), "Deactivate");
        assert_eq!(
            deactivate.message(),
            "Are you sure you want to deactivate Member 7's account? They will no longer be able to log in."
        );
        assert!(deactivate.is_destructive());
        assert_eq!(deactivate.success_message(), "Member 7 has been deactivated");

        let mut inactive = member(7);
        inactive.status = UserStatus::Inactive;
        let activate = StatusChange::toggle(inactive);
        assert_eq!(activate.title(), "Activate User");
        assert!(!activate.is_destructive());
        assert_eq!(activate.success_message(), "Member 7 has been activated");
        assert_eq!(
            activate.failure_message(&AuthError::Network("offline".into())),
            "Failed to activate user"
        );
    }
}
