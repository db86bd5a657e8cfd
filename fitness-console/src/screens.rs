use fitness_model::{
    profile::{Profile, RegistrationDraft},
    statistics::{WeightSampleSet, WeightStatistics, SAMPLE_COUNT},
};
use log::{error, info};
use num::FromPrimitive;

use crate::console::Console;
use crate::input::{self, PRESS_ANY_KEY};
use crate::menu::{self, RegistrationChoice};
use crate::Result;

const NOT_REGISTERED: &str =
    "You have not registered yet. Please register before attempting to get your BMI.\n\n";
const UNEXPECTED_ERROR: &str = "An error occurred. Please report this error to the staff.\n";

/// Collects all registration fields, then lets the user revise them until
/// they choose to save. Nothing is registered before saving.
pub fn registration(console: &mut dyn Console) -> Result<Profile> {
    console.print(&format!("{}\n", menu::header("Registration")))?;

    let mut draft = RegistrationDraft {
        sex: input::read_sex(console)?,
        age: input::read_age(console)?,
        height_m: input::read_height(console)?,
        current_weight_kg: input::read_weight(console, "current")?,
        desired_weight_kg: input::read_weight(console, "desired")?,
    };

    loop {
        let screen = menu::finalize_registration_screen(&draft);
        let choice = input::read_menu_choice(console, &screen, RegistrationChoice::range())?;
        console.clear_screen()?;
        console.print(&format!("{}\n", menu::header("Editing Registration Data")))?;

        match RegistrationChoice::from_u32(choice) {
            Some(RegistrationChoice::Sex) => draft.sex = input::read_sex(console)?,
            Some(RegistrationChoice::Age) => draft.age = input::read_age(console)?,
            Some(RegistrationChoice::Height) => draft.height_m = input::read_height(console)?,
            Some(RegistrationChoice::CurrentWeight) => {
                draft.current_weight_kg = input::read_weight(console, "current")?
            }
            Some(RegistrationChoice::DesiredWeight) => {
                draft.desired_weight_kg = input::read_weight(console, "desired")?
            }
            Some(RegistrationChoice::Save) => {
                info!(
                    "Registered user: {}, {} years, {:.2}m, {:.2}kg (desired {:.2}kg)",
                    draft.sex,
                    draft.age,
                    draft.height_m,
                    draft.current_weight_kg,
                    draft.desired_weight_kg
                );
                return Ok(draft.finalize());
            }
            None => unexpected_choice(console, choice)?,
        }
    }
}

pub fn instant_bmi(console: &mut dyn Console, profile: &Profile) -> Result<()> {
    console.print(&format!("{}\n", menu::header("Instant BMI Calculator")))?;

    match profile.registration() {
        Some(registration) => {
            let bmi = registration.bmi();
            info!("Computed BMI {:.2}", bmi);
            console.print(&format!("Your BMI is {:.2}.\n", bmi))?;
        }
        None => console.print(NOT_REGISTERED)?,
    }

    console.pause(PRESS_ANY_KEY)?;
    Ok(())
}

pub fn weight_tracker(console: &mut dyn Console) -> Result<WeightStatistics> {
    console.print(&format!("{}\n", menu::header("Statistical Weight Tracker")))?;

    let mut weights = Vec::with_capacity(SAMPLE_COUNT);
    for number in 1..=SAMPLE_COUNT {
        weights.push(input::read_sample(console, number)?);
    }
    let statistics = WeightStatistics::from_samples(&WeightSampleSet::try_from(weights)?);
    info!("Weight statistics: {:?}", statistics);

    console.print(&format!(
        "The mean weight is {:.2}kg.\n\
         The standard deviation is {:.2}kg.\n\
         {:.2}% of the values are within 2 standard deviations of the mean.\n",
        statistics.mean, statistics.standard_deviation, statistics.percent_within_two_std_dev
    ))?;
    console.pause(PRESS_ANY_KEY)?;
    Ok(statistics)
}

/// A validated choice that maps to no menu entry means the menu is wired
/// wrong. The caller redraws its menu afterwards.
pub fn unexpected_choice(console: &mut dyn Console, choice: u32) -> Result<()> {
    error!("Menu choice {} has no handler", choice);
    console.print(UNEXPECTED_ERROR)?;
    console.pause(PRESS_ANY_KEY)?;
    Ok(())
}
