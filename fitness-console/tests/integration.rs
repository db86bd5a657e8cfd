use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use fitness_console::{console::MockConsole, FitnessCenter};
use fitness_model::{
    bmi::bmi,
    profile::{finalize_registration, Profile, Sex},
};

fn scripted_console(lines: &[&str]) -> (MockConsole, Arc<Mutex<String>>) {
    let mut input: VecDeque<String> = lines.iter().map(|line| line.to_string()).collect();
    let output = Arc::new(Mutex::new(String::new()));
    let captured = output.clone();

    let mut console = MockConsole::new();
    console
        .expect_read_line()
        .returning(move || Ok(input.pop_front()));
    console.expect_print().returning(move |text| {
        captured.lock().unwrap().push_str(text);
        Ok(())
    });
    console.expect_clear_screen().returning(|| Ok(()));
    console.expect_pause().returning(|_| Ok(()));
    (console, output)
}

#[test]
fn full_session() {
    let (console, output) = scripted_console(&[
        // registration
        "1", "m", "30", "1.75", "70", "65", "6",
        // BMI
        "2",
        // weight tracker
        "3", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69",
        // not on the menu
        "7",
        "4",
    ]);

    let profile = FitnessCenter::new(Box::new(console)).run().unwrap();
    assert_eq!(profile, finalize_registration(Sex::Male, 30, 1.75, 70.0, 65.0));

    let output = output.lock().unwrap();
    assert!(output.contains(&format!(
        "Your BMI is {:.2}.\n",
        bmi(70.0, 1.75, Sex::Male)
    )));
    assert!(output.contains("The mean weight is 64.50kg.\n"));
    assert!(output.contains("The standard deviation is 2.87kg.\n"));
    assert!(output.contains("100.00% of the values are within 2 standard deviations of the mean.\n"));
    assert_eq!(
        output
            .matches("Please enter a valid choice from the menu.")
            .count(),
        1
    );
    assert!(output.ends_with("Thank you for using the Fitness Center Application. Have a nice day.\n"));
}

#[test]
fn bmi_before_registration() {
    let (console, output) = scripted_console(&["2", "4"]);

    let profile = FitnessCenter::new(Box::new(console)).run().unwrap();
    assert_eq!(profile, Profile::Unregistered);
    assert!(output
        .lock()
        .unwrap()
        .contains("You have not registered yet. Please register before attempting to get your BMI."));
}

#[test]
fn registration_replaces_previous_profile() {
    let (console, _) = scripted_console(&[
        "1", "m", "30", "1.75", "70", "65", "6",
        "1", "female", "31", "1.70", "68", "60", "5", "62", "6",
        "4",
    ]);

    let profile = FitnessCenter::new(Box::new(console)).run().unwrap();
    assert_eq!(profile, finalize_registration(Sex::Female, 31, 1.7, 68.0, 62.0));
}

#[test]
fn end_of_input_ends_session() {
    let (console, output) = scripted_console(&["1", "m", "30"]);

    let profile = FitnessCenter::new(Box::new(console)).run().unwrap();
    assert_eq!(profile, Profile::Unregistered);
    assert!(!output.lock().unwrap().contains("Thank you for using"));
}

#[test]
fn malformed_menu_input_is_reprompted() {
    let (console, output) = scripted_console(&["abc", "", "3x", "4"]);

    FitnessCenter::new(Box::new(console)).run().unwrap();

    let output = output.lock().unwrap();
    assert_eq!(
        output
            .matches("Please enter a number corresponding to the menu's choices.")
            .count(),
        2
    );
    assert_eq!(
        output
            .matches("Please enter a valid choice from the menu.")
            .count(),
        1
    );
}
