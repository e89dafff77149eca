use nodejs_semver::Version;
use pindep_core::{Action, BumpType};
use pindep_reconcile::reconcile;
use proptest::prelude::*;

fn range_like() -> impl Strategy<Value = String> {
    let operator = prop_oneof![
        Just(""),
        Just("^"),
        Just("~"),
        Just(">="),
        Just("<"),
        Just("="),
    ];
    (operator, 0u64..20, 0u64..20, 0u64..20)
        .prop_map(|(op, major, minor, patch)| format!("{op}{major}.{minor}.{patch}"))
}

fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        range_like(),
        "[ 0-9.^~<>=|xX*-]{0,24}",
    ]
}

proptest! {
    #[test]
    fn always_produces_four_rows(input in any_input()) {
        let rows = reconcile(&input).rows();

        prop_assert_eq!(rows.len(), 4);
        prop_assert!(rows[0].action.is_none());
        prop_assert!(rows[1..].iter().all(|row| row.action.is_some()));
    }

    #[test]
    fn reconciling_twice_is_identical(input in any_input()) {
        prop_assert_eq!(reconcile(&input), reconcile(&input));
    }

    #[test]
    fn bumps_are_ordered(input in any_input()) {
        let result = reconcile(&input);
        let patch = &result.projection(BumpType::Patch).release;
        let minor = &result.projection(BumpType::Minor).release;
        let major = &result.projection(BumpType::Major).release;

        prop_assert!(&result.pin < patch);
        prop_assert!(patch < minor);
        prop_assert!(minor < major);
    }

    #[test]
    fn actions_agree_with_range(input in any_input()) {
        let result = reconcile(&input);

        for projection in &result.projections {
            let satisfied = result.range.satisfies(&projection.release);
            match projection.action {
                Action::Upgrade => {
                    prop_assert!(satisfied);
                    prop_assert_eq!(&projection.resolved, &projection.release);
                }
                Action::Keep => {
                    prop_assert!(!satisfied);
                    prop_assert_eq!(&projection.resolved, &result.pin);
                }
            }
        }
    }

    #[test]
    fn plain_versions_without_operator_never_upgrade(
        major in 0u64..50,
        minor in 0u64..50,
        patch in 0u64..50,
    ) {
        let input = format!("{major}.{minor}.{patch}");
        let result = reconcile(&input);

        prop_assert_eq!(result.pin.clone(), Version::parse(&input).expect("valid version"));
        prop_assert!(result.projections.iter().all(|p| p.action == Action::Keep));
    }
}
