//! Sequence allocation properties of the registration service.

use letter_register::{Classification, LetterStatus, Register};
use time::macros::date;

#[test]
fn sequence_is_one_two_three_in_call_order() {
    let mut register = Register::in_memory();

    for expected in 1..=5u64 {
        let letter = register
            .issue(
                Classification::Outgoing,
                Some(date!(2024 - 03 - 01)),
                &format!("Letter {expected}"),
                None,
            )
            .expect("issue");
        assert_eq!(letter.number().get(), expected);
    }
}

#[test]
fn distinct_keys_are_independent() {
    let mut register = Register::in_memory();

    let out_a = register
        .issue(
            Classification::Outgoing,
            Some(date!(2024 - 01 - 10)),
            "Outgoing 2024",
            None,
        )
        .expect("issue");
    let ket_a = register
        .issue(
            Classification::Certificate,
            Some(date!(2024 - 01 - 10)),
            "Certificate 2024",
            None,
        )
        .expect("issue");
    let out_b = register
        .issue(
            Classification::Outgoing,
            Some(date!(2025 - 01 - 10)),
            "Outgoing 2025",
            None,
        )
        .expect("issue");
    let out_c = register
        .issue(
            Classification::Outgoing,
            Some(date!(2024 - 02 - 10)),
            "Outgoing 2024 again",
            None,
        )
        .expect("issue");

    // Issuing under one key never advances another.
    assert_eq!(out_a.number().get(), 1);
    assert_eq!(ket_a.number().get(), 1);
    assert_eq!(out_b.number().get(), 1);
    assert_eq!(out_c.number().get(), 2);
}

#[test]
fn year_comes_from_the_letter_date() {
    let mut register = Register::in_memory();
    let letter = register
        .issue(
            Classification::Outgoing,
            Some(date!(2023 - 12 - 31)),
            "Year boundary",
            None,
        )
        .expect("issue");
    assert_eq!(letter.year(), 2023);
    assert_eq!(letter.display(), "OUT/2023/0001");
}

#[test]
fn certificate_scenario_matches_expected_numbers() {
    let mut register = Register::in_memory();

    let first = register
        .issue(
            Classification::Certificate,
            Some(date!(2023 - 05 - 01)),
            "Domicile",
            None,
        )
        .expect("issue");
    assert_eq!(first.display(), "KET/2023/0001");
    assert_eq!(first.status(), LetterStatus::Active);

    assert!(register.void(first.id()).expect("void"));
    let voided = register.find(first.id()).expect("still recorded");
    assert_eq!(voided.status(), LetterStatus::Void);
    assert_eq!(voided.display(), "KET/2023/0001");

    let second = register
        .issue(
            Classification::Certificate,
            Some(date!(2023 - 06 - 01)),
            "Business permit",
            None,
        )
        .expect("issue");
    assert_eq!(second.display(), "KET/2023/0002");
}

#[test]
fn listing_is_newest_first() {
    let mut register = Register::in_memory();
    register
        .issue(
            Classification::Outgoing,
            Some(date!(2024 - 01 - 01)),
            "older",
            None,
        )
        .expect("issue");
    register
        .issue(
            Classification::Outgoing,
            Some(date!(2024 - 01 - 02)),
            "newer",
            None,
        )
        .expect("issue");

    let subjects: Vec<_> = register.letters().map(|l| l.subject().to_string()).collect();
    assert_eq!(subjects, ["newer", "older"]);
}

#[test]
fn rejected_issuance_allocates_nothing() {
    let mut register = Register::in_memory();
    assert!(
        register
            .issue(Classification::Outgoing, None, "  ", None)
            .is_err()
    );
    let letter = register
        .issue(
            Classification::Outgoing,
            Some(date!(2024 - 04 - 01)),
            "First real letter",
            None,
        )
        .expect("issue");
    // The failed call must not have burned a number.
    assert_eq!(letter.number().get(), 1);
}
