//! Normalizer edge case tests.
//!
//! These tests verify parser behavior with malformed, partial, or unusually
//! shaped payloads from the different gateway forks.

mod account_info_edge_tests {
    use crate::error::NormalizeError;
    use crate::normalize::parse_account_info;

    #[test]
    fn test_success_without_data_is_unsuccessful() {
        let result = parse_account_info(r#"{"success": true}"#);
        assert!(matches!(result, Err(NormalizeError::Unsuccessful)));
    }

    #[test]
    fn test_success_false_with_data_is_unsuccessful() {
        let body = r#"{"success": false, "data": {"id": 7, "username": "u"}}"#;
        assert!(matches!(
            parse_account_info(body),
            Err(NormalizeError::Unsuccessful)
        ));
    }

    #[test]
    fn test_empty_object_is_unsuccessful() {
        assert!(matches!(
            parse_account_info("{}"),
            Err(NormalizeError::Unsuccessful)
        ));
    }

    #[test]
    fn test_non_json_body_is_json_error() {
        assert!(matches!(
            parse_account_info("<html>502</html>"),
            Err(NormalizeError::Json(_))
        ));
    }

    #[test]
    fn test_missing_fields_default() {
        // A sparse fork response still normalizes; absent numeric fields
        // read as zero.
        let body = r#"{"success": true, "data": {"id": 1, "username": "u"}}"#;
        let info = parse_account_info(body).unwrap();
        assert_eq!(info.remote_id, 1);
        assert_eq!(info.quota_total, 0);
        assert_eq!(info.group, "");
    }

    #[test]
    fn test_unlimited_quota_is_negative() {
        let body = r#"{"success": true, "data": {"id": 1, "username": "u", "quota": -1}}"#;
        let info = parse_account_info(body).unwrap();
        assert!(info.is_unlimited());
    }
}

mod key_list_edge_tests {
    use crate::normalize::{parse_api_key_list, ListShape};

    const ITEM: &str = r#"{
        "id": 3,
        "user_id": 7,
        "key": "sk-a",
        "name": "default",
        "status": 1,
        "created_time": 1700000000,
        "accessed_time": 1700000100,
        "expired_time": -1,
        "remain_quota": 500,
        "unlimited_quota": false,
        "used_quota": 20
    }"#;

    fn assert_single_canonical_record(body: &str, expected_shape: ListShape) {
        let outcome = parse_api_key_list(body);
        assert_eq!(outcome.shape, expected_shape);
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.id, 3);
        assert_eq!(record.owner_remote_id, 7);
        assert_eq!(record.secret_value, "sk-a");
        assert_eq!(record.label, "default");
        assert!(record.enabled);
        assert_eq!(record.created_at, 1_700_000_000);
        assert_eq!(record.accessed_at, 1_700_000_100);
        assert_eq!(record.expires_at, -1);
        assert_eq!(record.quota_remaining, 500);
        assert_eq!(record.quota_used, 20);
        assert!(!record.unlimited_quota);
    }

    #[test]
    fn test_all_four_shapes_normalize_identically() {
        assert_single_canonical_record(
            &format!(r#"{{"success": true, "data": [{ITEM}]}}"#),
            ListShape::BareArray,
        );
        assert_single_canonical_record(
            &format!(r#"{{"success": true, "data": {{"items": [{ITEM}]}}}}"#),
            ListShape::Items,
        );
        assert_single_canonical_record(
            &format!(r#"{{"success": true, "data": {{"records": [{ITEM}]}}}}"#),
            ListShape::Records,
        );
        assert_single_canonical_record(
            &format!(r#"{{"success": true, "data": {{"data": [{ITEM}]}}}}"#),
            ListShape::NestedData,
        );
    }

    #[test]
    fn test_items_wins_over_records() {
        // Precedence: items is checked before records and nested data.
        let body = format!(
            r#"{{"success": true, "data": {{"records": [], "items": [{ITEM}], "data": []}}}}"#
        );
        let outcome = parse_api_key_list(&body);
        assert_eq!(outcome.shape, ListShape::Items);
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_unrecognized_shape_is_empty_not_error() {
        let outcome = parse_api_key_list(r#"{"success": true, "data": {}}"#);
        assert_eq!(outcome.shape, ListShape::Unmatched);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_success_false_is_unmatched() {
        let body = format!(r#"{{"success": false, "data": [{ITEM}]}}"#);
        let outcome = parse_api_key_list(&body);
        assert_eq!(outcome.shape, ListShape::Unmatched);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_missing_data_is_unmatched() {
        let outcome = parse_api_key_list(r#"{"success": true}"#);
        assert_eq!(outcome.shape, ListShape::Unmatched);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_undecodable_body_is_unmatched() {
        let outcome = parse_api_key_list("not json at all");
        assert_eq!(outcome.shape, ListShape::Unmatched);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_empty_bare_array_matches_with_zero_records() {
        // An empty array is still a recognized shape - distinguishable from
        // Unmatched by the shape field.
        let outcome = parse_api_key_list(r#"{"success": true, "data": []}"#);
        assert_eq!(outcome.shape, ListShape::BareArray);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_disabled_status_maps_to_enabled_false() {
        let body = r#"{"success": true, "data": [{"id": 1, "status": 2}]}"#;
        let outcome = parse_api_key_list(body);
        assert!(!outcome.records[0].enabled);
    }

    #[test]
    fn test_server_order_is_preserved() {
        let body = r#"{"success": true, "data": [{"id": 5}, {"id": 2}, {"id": 9}]}"#;
        let ids: Vec<i64> = parse_api_key_list(body)
            .into_records()
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}

mod check_in_edge_tests {
    use crate::normalize::parse_check_in;

    #[test]
    fn test_refused_check_in() {
        let outcome = parse_check_in(r#"{"success": false, "message": "already checked in"}"#);
        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "already checked in");
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let outcome = parse_check_in(r#"{"success": true}"#);
        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "");
    }

    #[test]
    fn test_empty_body_is_failure() {
        let outcome = parse_check_in("");
        assert!(!outcome.succeeded);
        assert!(!outcome.message.is_empty());
    }
}

mod success_flag_edge_tests {
    use crate::normalize::parse_success_flag;

    #[test]
    fn test_success_without_data_validates() {
        // Validation only requires the flag, not a data object.
        assert!(parse_success_flag(r#"{"success": true}"#).unwrap());
    }

    #[test]
    fn test_missing_flag_defaults_to_false() {
        assert!(!parse_success_flag("{}").unwrap());
    }

    #[test]
    fn test_non_json_is_error() {
        assert!(parse_success_flag("oops").is_err());
    }
}
