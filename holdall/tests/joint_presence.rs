//! End-to-end behaviour across containers, combinators, and faults.

use holdall::{Fault, Maybe, Outcome, combine_all, combine3};
use rstest::rstest;

#[derive(Debug, PartialEq, Eq)]
struct Profile {
    name: String,
    age: u32,
    city: String,
}

fn build_profile(
    name: Maybe<&str>,
    age: Maybe<u32>,
    city: Maybe<&str>,
) -> Outcome<Profile, Fault> {
    combine3(
        name,
        age,
        city,
        |full_name, years, home| {
            Outcome::Success(Profile {
                name: full_name.to_owned(),
                age: years,
                city: home.to_owned(),
            })
        },
        |missing| {
            Outcome::Failure(
                Fault::new("profile incomplete")
                    .caused_by(Fault::new(missing.describe_named(&["name", "age"]))),
            )
        },
    )
}

#[test]
fn full_presence_builds_the_value() {
    let profile = build_profile(Maybe::present("Ada"), Maybe::present(36), Maybe::present("London"));
    assert_eq!(
        profile,
        Outcome::Success(Profile {
            name: String::from("Ada"),
            age: 36,
            city: String::from("London"),
        }),
    );
}

#[rstest]
#[case(Maybe::absent(), Maybe::present(36), Maybe::present("London"), "name value is missing")]
#[case(Maybe::present("Ada"), Maybe::absent(), Maybe::present("London"), "age value is missing")]
#[case(Maybe::present("Ada"), Maybe::absent(), Maybe::absent(), "age and third values are missing")]
fn absences_surface_as_a_fault_chain(
    #[case] name: Maybe<&'static str>,
    #[case] age: Maybe<u32>,
    #[case] city: Maybe<&'static str>,
    #[case] detail: &str,
) {
    let outcome = build_profile(name, age, city);
    match outcome.try_error() {
        Ok(fault) => {
            assert_eq!(fault.to_string(), format!("profile incomplete: {detail}"));
            assert_eq!(fault.chain().count(), 2);
        }
        Err(unexpected) => panic!("expected a failure outcome: {unexpected}"),
    }
}

#[test]
fn a_single_middle_absence_reports_its_position() {
    let positions = combine3(
        Maybe::present(1),
        Maybe::<i32>::absent(),
        Maybe::present(3),
        |_, _, _| Vec::new(),
        |missing| missing.positions().to_vec(),
    );
    assert_eq!(positions, vec![1]);
}

#[test]
fn wide_collections_fall_back_to_the_placeholder_label() {
    let inputs: Vec<Maybe<i32>> = (0..7)
        .map(|n| if n == 6 { Maybe::absent() } else { Maybe::present(n) })
        .collect();
    let summary = combine_all(inputs, |_| String::new(), |missing| missing.describe());
    assert_eq!(summary, "<unspecified value> value is missing");
}
