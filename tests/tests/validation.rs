//! Authorization and existence checks.

use rstest::rstest;
use tenure_tests::prelude::*;

fn alice_technical() -> Vec<OwnerInput> {
    vec![OwnerInput::legacy(urn(ALICE), OwnerEntityKind::User, "TECHNICAL_OWNER")]
}

mod authorization {
    use super::*;

    #[rstest]
    #[case::denied_actor(StaticPolicy::allow_all().deny_actor(urn(INTRUDER)), INTRUDER)]
    #[case::denied_resource(StaticPolicy::allow_all().deny_resource(urn(DATASET)), ADMIN)]
    #[tokio::test]
    async fn test_unauthorized_makes_no_service_calls(
        #[case] policy: StaticPolicy,
        #[case] actor: &str,
    ) {
        Scenario::new("unauthorized")
            .entities(&[DATASET, ALICE, TECHNICAL_OWNER])
            .policy(policy)
            .add_owners(
                "add",
                actor,
                AddOwnersRequest::new(urn(DATASET), alice_technical()),
                |e| e.fails(ErrorKind::Unauthorized).service_calls(0),
            )
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_before_malformed_input() {
        // GIVEN an unknown role from an unauthorized actor
        let owners = vec![OwnerInput::legacy(urn(ALICE), OwnerEntityKind::User, "OVERLORD")];

        Scenario::new("unauthorized_first")
            .policy(StaticPolicy::allow_all().deny_actor(urn(INTRUDER)))
            .add_owners(
                "add",
                INTRUDER,
                AddOwnersRequest::new(urn(DATASET), owners),
                |e| e.fails(ErrorKind::Unauthorized).service_calls(0),
            )
            .run()
            .await
            .unwrap();
    }
}

mod existence {
    use super::*;

    #[tokio::test]
    async fn test_missing_resource_submits_nothing() {
        Scenario::new("missing_resource")
            .entities(&[ALICE, TECHNICAL_OWNER])
            .add_owners(
                "add",
                ADMIN,
                AddOwnersRequest::new(urn(DATASET), alice_technical()),
                |e| {
                    e.fails(ErrorKind::ResourceNotFound)
                        .exists_calls(&[DATASET])
                        .ingests(0)
                        .revision(DATASET, 0)
                },
            )
            .run()
            .await
            .unwrap();
    }

    #[rstest]
    #[case::first(&[ALICE, BOB, CAROL], &[DATASET, ALICE])]
    #[case::middle(&[BOB, ALICE, CAROL], &[DATASET, BOB, ALICE])]
    #[case::last(&[BOB, CAROL, ALICE], &[DATASET, BOB, CAROL, ALICE])]
    #[tokio::test]
    async fn test_missing_owner_submits_nothing(
        #[case] owners: &[&str],
        #[case] checked: &[&str],
    ) {
        // GIVEN alice does not exist, everyone else does
        let owners = owners
            .iter()
            .map(|o| OwnerInput::legacy(urn(o), OwnerEntityKind::User, "TECHNICAL_OWNER"))
            .collect();

        Scenario::new("missing_owner")
            .entities(&[DATASET, BOB, CAROL, TECHNICAL_OWNER])
            .add_owners("add", ADMIN, AddOwnersRequest::new(urn(DATASET), owners), |e| {
                e.fails(ErrorKind::OwnerNotFound)
                    .error_matches(r"Owner not found: urn:li:corpuser:alice")
                    .exists_calls(checked)
                    .ingests(0)
            })
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_ownership_type_checked_after_owners() {
        Scenario::new("missing_type")
            .entities(&[DATASET, ALICE])
            .add_owners(
                "add",
                ADMIN,
                AddOwnersRequest::new(urn(DATASET), alice_technical()),
                |e| {
                    e.fails(ErrorKind::OwnershipTypeNotFound)
                        .exists_calls(&[DATASET, ALICE, TECHNICAL_OWNER])
                        .ingests(0)
                },
            )
            .run()
            .await
            .unwrap();
    }
}

mod malformed {
    use super::*;

    #[tokio::test]
    async fn test_unknown_legacy_role_makes_no_service_calls() {
        let owners = vec![OwnerInput::legacy(urn(ALICE), OwnerEntityKind::User, "OVERLORD")];

        Scenario::new("unknown_role")
            .entities(&[DATASET, ALICE])
            .add_owners("add", ADMIN, AddOwnersRequest::new(urn(DATASET), owners), |e| {
                e.fails(ErrorKind::UnknownOwnershipType)
                    .error_matches("OVERLORD")
                    .service_calls(0)
            })
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_group_urn_declared_as_user() {
        let owners = vec![OwnerInput::legacy(
            urn(ENGINEERING),
            OwnerEntityKind::User,
            "TECHNICAL_OWNER",
        )];

        Scenario::new("kind_mismatch")
            .entities(&[DATASET, ENGINEERING, TECHNICAL_OWNER])
            .add_owners("add", ADMIN, AddOwnersRequest::new(urn(DATASET), owners), |e| {
                e.fails(ErrorKind::InvalidRequest)
                    .exists_calls(&[DATASET])
                    .ingests(0)
            })
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_owner_repeated_with_conflicting_kind() {
        // GIVEN alice as a user, then alice again as a group
        let owners = vec![
            OwnerInput::legacy(urn(ALICE), OwnerEntityKind::User, "TECHNICAL_OWNER"),
            OwnerInput::legacy(urn(ALICE), OwnerEntityKind::Group, "TECHNICAL_OWNER"),
        ];

        Scenario::new("repeated_owner_kind_mismatch")
            .entities(&[DATASET, ALICE, TECHNICAL_OWNER])
            .add_owners("add", ADMIN, AddOwnersRequest::new(urn(DATASET), owners), |e| {
                e.fails(ErrorKind::InvalidRequest)
                    .ingests(0)
                    .revision(DATASET, 0)
            })
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_kind_mismatch_tolerated_when_disabled() {
        let owners = vec![OwnerInput::legacy(
            urn(ENGINEERING),
            OwnerEntityKind::User,
            "TECHNICAL_OWNER",
        )];
        let config = PipelineConfig {
            enforce_owner_kind: false,
            ..PipelineConfig::default()
        };

        Scenario::new("kind_mismatch_disabled")
            .entities(&[DATASET, ENGINEERING, TECHNICAL_OWNER])
            .config(config)
            .add_owners("add", ADMIN, AddOwnersRequest::new(urn(DATASET), owners), |e| {
                e.succeeds().owners(DATASET, &[ENGINEERING])
            })
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_owner_list() {
        Scenario::new("no_owners")
            .entities(&[DATASET])
            .add_owners(
                "add",
                ADMIN,
                AddOwnersRequest::new(urn(DATASET), Vec::new()),
                |e| e.fails(ErrorKind::InvalidRequest).service_calls(0),
            )
            .run()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_request_decoded_from_json() {
        // GIVEN the request as the request layer sends it
        let request: AddOwnersRequest = serde_json::from_value(json!({
            "resourceUrn": DATASET,
            "owners": [
                { "ownerUrn": ALICE, "ownerEntityType": "USER", "type": "TECHNICAL_OWNER" }
            ]
        }))
        .unwrap();

        Scenario::new("decoded_request")
            .entities(&[DATASET, ALICE, TECHNICAL_OWNER])
            .add_owners("add", ADMIN, request, |e| {
                e.succeeds().owner_type(DATASET, ALICE, TECHNICAL_OWNER)
            })
            .run()
            .await
            .unwrap();
    }
}
