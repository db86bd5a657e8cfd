use fitness_model::profile::RegistrationDraft;
use itertools::Itertools;
use num_derive::FromPrimitive;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

const BANNER: &str = "Welcome to the Fitness Center Application.\n\
                      ==========================================\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, Display, EnumIter, EnumCount)]
pub enum MainMenuChoice {
    #[strum(to_string = "Registration")]
    Registration = 1,
    #[strum(to_string = "Instant BMI calculation")]
    InstantBmi = 2,
    #[strum(to_string = "Statistical Weight Tracker")]
    WeightTracker = 3,
    #[strum(to_string = "Exit")]
    Exit = 4,
}

impl MainMenuChoice {
    pub fn range() -> std::ops::RangeInclusive<u32> {
        1..=Self::COUNT as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, EnumCount)]
pub enum RegistrationChoice {
    Sex = 1,
    Age = 2,
    Height = 3,
    CurrentWeight = 4,
    DesiredWeight = 5,
    Save = 6,
}

impl RegistrationChoice {
    pub fn range() -> std::ops::RangeInclusive<u32> {
        1..=Self::COUNT as u32
    }
}

/// Banner followed by a centered screen title.
pub fn header(title: &str) -> String {
    format!("{}{:^42}\n", BANNER, title)
}

pub fn main_menu() -> String {
    let choices = MainMenuChoice::iter()
        .map(|choice| format!("{}. {} ", choice as u32, choice))
        .join("\n");

    format!(
        "{}{:^42}\n\n{}\n\n> ",
        header("Main Menu"),
        "(Enter a number to select a choice)",
        choices
    )
}

pub fn finalize_registration_screen(draft: &RegistrationDraft) -> String {
    format!(
        "{}\n\
         Do you wish to change any of the following settings?\n\n\
         1. Gender: {}\n\
         2. Age: {}y/o \n\
         3. Height: {:.2}m\n\
         4. Current Weight: {:.2}kg \n\
         5. Desired Weight: {:.2}kg \n\
         6. Save and return to the Main Menu.\n\
         > ",
        header("Finalize Registration"),
        draft.sex,
        draft.age,
        draft.height_m,
        draft.current_weight_kg,
        draft.desired_weight_kg,
    )
}
