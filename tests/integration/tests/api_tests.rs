//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{DateTime, Utc};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

fn parse_time(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("invitationTime should be RFC 3339")
        .with_timezone(&Utc)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Guest CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_guest() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuestRequest {
        address: Some("Jl. Melati 3".to_string()),
        wedding_location: Some("Semarang".to_string()),
        invitation_time: Some("2026-07-25T10:00:00Z".to_string()),
        invitation_type: Some("digital".to_string()),
        guest_type: Some("sendiri".to_string()),
        ..CreateGuestRequest::unique()
    };

    let response = server.post("/guests", &request).await.unwrap();
    let created: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.name, request.name);
    assert_eq!(created.wedding_location.as_deref(), Some("Semarang"));
    assert_eq!(created.invitation_type.as_deref(), Some("digital"));
    assert_eq!(created.guest_type.as_deref(), Some("sendiri"));

    let response = server.get(&format!("/guests/{}", created.id)).await.unwrap();
    let fetched: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
}

#[tokio::test]
async fn test_create_guest_requires_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/guests", &json!({ "name": "   " })).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.error.contains("name"));
}

#[tokio::test]
async fn test_create_guest_rejects_wrong_content_type() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_raw("/guests", r#"{"name": "Sari"}"#, "text/plain")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_guest_normalizes_invalid_enums() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuestRequest {
        invitation_time: Some("not a timestamp".to_string()),
        invitation_type: Some("telegram".to_string()),
        guest_type: Some("everyone".to_string()),
        ..CreateGuestRequest::unique()
    };

    let response = server.post("/guests", &request).await.unwrap();
    let created: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.invitation_time, None);
    assert_eq!(created.invitation_type, None);
    assert_eq!(created.guest_type, None);
}

#[tokio::test]
async fn test_guest_not_found_and_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/guests/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/guests/abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.delete("/guests/0").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_guest_partial_semantics() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGuestRequest {
        address: Some("Jl. Kenanga 7".to_string()),
        wedding_location: Some("Magetan".to_string()),
        ..CreateGuestRequest::unique()
    };
    let response = server.post("/guests", &request).await.unwrap();
    let created: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Absent fields stay untouched
    let response = server
        .put(&format!("/guests/{}", created.id), &json!({ "address": "Jl. Mawar 1" }))
        .await
        .unwrap();
    let updated: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.address.as_deref(), Some("Jl. Mawar 1"));
    assert_eq!(updated.wedding_location.as_deref(), Some("Magetan"));
    assert_eq!(updated.name, created.name);

    // Explicit null clears
    let response = server
        .put(&format!("/guests/{}", created.id), &json!({ "address": null }))
        .await
        .unwrap();
    let updated: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.address, None);
    assert_eq!(updated.wedding_location.as_deref(), Some("Magetan"));
}

#[tokio::test]
async fn test_update_guest_rejects_blank_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/guests", &CreateGuestRequest::unique()).await.unwrap();
    let created: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(&format!("/guests/{}", created.id), &json!({ "name": "  " }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_guest() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/guests", &CreateGuestRequest::unique()).await.unwrap();
    let created: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete(&format!("/guests/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete(&format!("/guests/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Listing, Filtering, and Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_pagination_partitions_result_set() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("Pagination");

    let mut created_ids = Vec::new();
    for _ in 0..5 {
        let response = server
            .post("/guests", &CreateGuestRequest::in_group(&group))
            .await
            .unwrap();
        let guest: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        created_ids.push(guest.id);
    }
    created_ids.sort_unstable();

    // Walk pages of 2 and reassemble the set
    let mut seen_ids = Vec::new();
    for page in 1..=3 {
        let response = server
            .get(&format!("/guests?guestGroup={group}&limit=2&page={page}"))
            .await
            .unwrap();
        let listing: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(listing.total, 5);
        assert!(listing.data.len() <= 2);
        seen_ids.extend(listing.data.iter().map(|g| g.id));
    }

    assert_eq!(seen_ids, created_ids, "pages must partition the result set in order");
}

#[tokio::test]
async fn test_invalid_type_filter_equals_no_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("FilterNoop");

    for guest_type in ["sekaliyan", "sendiri"] {
        let request = CreateGuestRequest {
            guest_type: Some(guest_type.to_string()),
            ..CreateGuestRequest::in_group(&group)
        };
        let response = server.post("/guests", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get(&format!("/guests?guestGroup={group}")).await.unwrap();
    let unfiltered: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/guests?guestGroup={group}&guestType=bogus&invitationType=bogus"))
        .await
        .unwrap();
    let bogus: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(unfiltered.total, 2);
    assert_eq!(bogus.total, unfiltered.total);

    // A valid value does filter
    let response = server
        .get(&format!("/guests?guestGroup={group}&guestType=sendiri"))
        .await
        .unwrap();
    let filtered: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(filtered.total, 1);
}

#[tokio::test]
async fn test_total_and_total_all_consistency() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("Totals");

    let response = server
        .post("/guests", &CreateGuestRequest::in_group(&group))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Filtered: total counts the subset, totalAll everything
    let response = server.get(&format!("/guests?guestGroup={group}")).await.unwrap();
    let filtered: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(filtered.total, 1);
    assert!(filtered.total <= filtered.total_all);

    // Unfiltered: the two counts agree. Other tests insert concurrently,
    // so allow a few attempts at catching a quiet snapshot.
    let mut agreed = false;
    for _ in 0..5 {
        let response = server.get("/guests").await.unwrap();
        let unfiltered: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();
        if unfiltered.total == unfiltered.total_all {
            agreed = true;
            break;
        }
    }
    assert!(agreed, "unfiltered total must equal totalAll");
}

#[tokio::test]
async fn test_search_matches_across_fields_case_insensitive() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("Search");
    let marker = format!("xq{}", unique_suffix());

    // Marker in the name, uppercased
    let by_name = CreateGuestRequest {
        name: format!("Sari {}", marker.to_uppercase()),
        ..CreateGuestRequest::in_group(&group)
    };
    // Marker only in the address
    let by_address = CreateGuestRequest {
        address: Some(format!("Jl. {marker} 5")),
        ..CreateGuestRequest::in_group(&group)
    };
    // No marker anywhere
    let unmatched = CreateGuestRequest::in_group(&group);

    for request in [&by_name, &by_address, &unmatched] {
        let response = server.post("/guests", request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/guests?guestGroup={group}&search={marker}"))
        .await
        .unwrap();
    let listing: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.total, 2);
    let names: Vec<&str> = listing.data.iter().map(|g| g.name.as_str()).collect();
    assert!(names.contains(&by_name.name.as_str()));
    assert!(names.contains(&by_address.name.as_str()));
}

#[tokio::test]
async fn test_export_respects_filters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("Export");

    for _ in 0..3 {
        let response = server
            .post("/guests", &CreateGuestRequest::in_group(&group))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/guests/export?guestGroup={group}"))
        .await
        .unwrap();
    let export: ExportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(export.data.len(), 3);
    assert!(export.data.iter().all(|g| g.guest_group.as_deref() == Some(group.as_str())));

    // Exporting a group with no members is valid and empty
    let empty_group = unique_group_name("ExportEmpty");
    let response = server
        .get(&format!("/guests/export?guestGroup={empty_group}"))
        .await
        .unwrap();
    let export: ExportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(export.data.is_empty());
}

// ============================================================================
// Guest Group Tests
// ============================================================================

#[tokio::test]
async fn test_create_guest_auto_creates_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("AutoCreate");

    let response = server
        .post("/guests", &CreateGuestRequest::in_group(&group))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/guest-groups").await.unwrap();
    let groups: Vec<GroupWithCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = groups
        .iter()
        .find(|g| g.name == group)
        .expect("group should be auto-created");
    assert!(entry.guest_count >= 1);
}

#[tokio::test]
async fn test_duplicate_group_name_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group = unique_group_name("Duplicate");

    let response = server
        .post("/guest-groups", &GroupRequest::named(&group))
        .await
        .unwrap();
    let created: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/guest-groups", &GroupRequest::named(&group))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.error.contains("already in use"));

    // The existing group is untouched
    let response = server.get("/guest-groups").await.unwrap();
    let groups: Vec<GroupWithCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let matching: Vec<_> = groups.iter().filter(|g| g.name == group).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, created.id);
}

#[tokio::test]
async fn test_rename_group_cascades_to_guests() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let old_name = unique_group_name("CascadeOld");
    let new_name = unique_group_name("CascadeNew");

    let response = server
        .post("/guest-groups", &GroupRequest::named(&old_name))
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut guest_ids = Vec::new();
    for _ in 0..3 {
        let response = server
            .post("/guests", &CreateGuestRequest::in_group(&old_name))
            .await
            .unwrap();
        let guest: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        guest_ids.push(guest.id);
    }

    let response = server
        .put(&format!("/guest-groups/{}", group.id), &GroupRequest::named(&new_name))
        .await
        .unwrap();
    let renamed: GroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(renamed.name, new_name);

    // Every guest moved over; none keep the old name
    for id in &guest_ids {
        let response = server.get(&format!("/guests/{id}")).await.unwrap();
        let guest: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(guest.guest_group.as_deref(), Some(new_name.as_str()));
    }

    let response = server.get(&format!("/guests?guestGroup={old_name}")).await.unwrap();
    let listing: GuestListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.total, 0);
}

#[tokio::test]
async fn test_rename_group_with_shift_reassignment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let old_name = unique_group_name("ShiftOld");
    let new_name = unique_group_name("ShiftNew");

    let response = server
        .post("/guest-groups", &GroupRequest::named(&old_name))
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let scheduled = CreateGuestRequest {
        invitation_time: Some("2026-07-25T10:00:00Z".to_string()),
        ..CreateGuestRequest::in_group(&old_name)
    };
    let response = server.post("/guests", &scheduled).await.unwrap();
    let scheduled: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let unscheduled = CreateGuestRequest::in_group(&old_name);
    let response = server.post("/guests", &unscheduled).await.unwrap();
    let unscheduled: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = GroupRequest {
        name: new_name.clone(),
        shift: Some("shift3".to_string()),
    };
    let response = server
        .put(&format!("/guest-groups/{}", group.id), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Scheduled guest moves to 12:30 on the same date
    let response = server.get(&format!("/guests/{}", scheduled.id)).await.unwrap();
    let guest: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let ts = parse_time(guest.invitation_time.as_deref().unwrap());
    assert_eq!(ts, parse_time("2026-07-25T12:30:00Z"));

    // Unscheduled guest stays unscheduled
    let response = server.get(&format!("/guests/{}", unscheduled.id)).await.unwrap();
    let guest: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guest.invitation_time, None);
}

#[tokio::test]
async fn test_rename_group_to_taken_name_changes_nothing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let taken = unique_group_name("Taken");
    let victim = unique_group_name("Victim");

    for name in [&taken, &victim] {
        let response = server.post("/guest-groups", &GroupRequest::named(name)).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/guest-groups").await.unwrap();
    let groups: Vec<GroupWithCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let victim_id = groups.iter().find(|g| g.name == victim).unwrap().id;

    let response = server
        .post("/guests", &CreateGuestRequest::in_group(&victim))
        .await
        .unwrap();
    let guest: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(&format!("/guest-groups/{victim_id}"), &GroupRequest::named(&taken))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // The failed rename rolled back: the guest still points at the old name
    let response = server.get(&format!("/guests/{}", guest.id)).await.unwrap();
    let guest: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guest.guest_group.as_deref(), Some(victim.as_str()));
}

#[tokio::test]
async fn test_delete_group_orphans_guests() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let group_name = unique_group_name("Orphan");

    let response = server
        .post("/guest-groups", &GroupRequest::named(&group_name))
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut guest_ids = Vec::new();
    for _ in 0..2 {
        let response = server
            .post("/guests", &CreateGuestRequest::in_group(&group_name))
            .await
            .unwrap();
        let guest: GuestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        guest_ids.push(guest.id);
    }

    let response = server.delete(&format!("/guest-groups/{}", group.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Guests survive, unlabelled
    for id in &guest_ids {
        let response = server.get(&format!("/guests/{id}")).await.unwrap();
        let guest: GuestResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(guest.guest_group, None);
    }

    // The group is gone from the listing
    let response = server.get("/guest-groups").await.unwrap();
    let groups: Vec<GroupWithCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(groups.iter().all(|g| g.name != group_name));

    let response = server.delete(&format!("/guest-groups/{}", group.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
