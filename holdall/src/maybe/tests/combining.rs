//! Joint-presence dispatch across several containers.

use crate::maybe::{Maybe, combine_all, combine2, combine3, combine4, combine5};

#[test]
fn combine2_hands_over_both_values_in_order() {
    let joined = combine2(
        Maybe::present("left"),
        Maybe::present("right"),
        |first, second| format!("{first}/{second}"),
        |_| String::from("missing"),
    );
    assert_eq!(joined, "left/right");
}

#[test]
fn combine2_reports_the_absent_position() {
    let positions = combine2(
        Maybe::present(1),
        Maybe::<i32>::absent(),
        |_, _| Vec::new(),
        |missing| missing.positions().to_vec(),
    );
    assert_eq!(positions, vec![1]);
}

#[test]
fn combine3_reports_a_middle_absence() {
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
fn combine4_keeps_each_position_type() {
    let summary = combine4(
        Maybe::present(9_u8),
        Maybe::present("label"),
        Maybe::present(true),
        Maybe::present('!'),
        |count, label, flag, mark| format!("{count} {label} {flag} {mark}"),
        |_| String::from("missing"),
    );
    assert_eq!(summary, "9 label true !");
}

#[test]
fn combine5_collects_every_absent_position_in_ascending_order() {
    let positions = combine5(
        Maybe::<i32>::absent(),
        Maybe::present(2),
        Maybe::<i32>::absent(),
        Maybe::present(4),
        Maybe::<i32>::absent(),
        |_, _, _, _, _| Vec::new(),
        |missing| missing.positions().to_vec(),
    );
    assert_eq!(positions, vec![0, 2, 4]);
}

#[test]
fn on_values_is_not_invoked_when_any_input_is_absent() {
    let absences = combine2(
        Maybe::present(1),
        Maybe::<i32>::absent(),
        |_, _| panic!("on_values invoked despite an absent input"),
        |missing| missing.len(),
    );
    assert_eq!(absences, 1);
}

#[test]
fn on_missing_is_not_invoked_when_all_inputs_are_present() {
    let total = combine3(
        Maybe::present(1),
        Maybe::present(2),
        Maybe::present(3),
        |a_value, b_value, c_value| a_value + b_value + c_value,
        |_| panic!("on_missing invoked despite full presence"),
    );
    assert_eq!(total, 6);
}

#[test]
fn combine_all_hands_over_values_in_input_order() {
    let inputs = vec![Maybe::present(10), Maybe::present(20), Maybe::present(30)];
    let values = combine_all(inputs, |held| held, |_| Vec::new());
    assert_eq!(values, vec![10, 20, 30]);
}

#[test]
fn combine_all_reports_ascending_absent_positions() {
    let inputs = vec![
        Maybe::present(1),
        Maybe::absent(),
        Maybe::present(3),
        Maybe::absent(),
    ];
    let positions = combine_all(inputs, |_| Vec::new(), |missing| missing.positions().to_vec());
    assert_eq!(positions, vec![1, 3]);
}

#[test]
fn combine_all_with_no_inputs_is_vacuously_present() {
    let values = combine_all(Vec::<Maybe<i32>>::new(), |held| held, |_| vec![-1]);
    assert_eq!(values, Vec::<i32>::new());
}
