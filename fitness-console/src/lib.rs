pub mod config;
pub mod console;
pub mod input;
pub mod menu;
pub mod screens;

use fitness_model::{profile::Profile, statistics::SampleError};
use log::info;
use num::FromPrimitive;

use crate::console::{Console, ConsoleError};
use crate::input::InputError;
use crate::menu::MainMenuChoice;

const GOODBYE: &str = "Thank you for using the Fitness Center Application. Have a nice day.\n";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid weight samples: {0}")]
    Samples(#[from] SampleError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct FitnessCenter {
    console: Box<dyn Console>,
}

impl FitnessCenter {
    pub fn new(console: Box<dyn Console>) -> Self {
        Self { console }
    }

    /// Runs the main menu until the user exits or the input is closed.
    /// Returns the profile the session ended with.
    pub fn run(&mut self) -> Result<Profile> {
        let mut profile = Profile::default();
        match self.session(&mut profile) {
            Err(Error::Input(InputError::EndOfInput)) => {
                info!("Input closed, ending session");
                Ok(profile)
            }
            Err(e) => Err(e),
            Ok(()) => Ok(profile),
        }
    }

    fn session(&mut self, profile: &mut Profile) -> Result<()> {
        let console = self.console.as_mut();
        let main_menu = menu::main_menu();

        loop {
            let choice = input::read_menu_choice(console, &main_menu, MainMenuChoice::range())?;
            console.clear_screen()?;

            match MainMenuChoice::from_u32(choice) {
                Some(MainMenuChoice::Registration) => *profile = screens::registration(console)?,
                Some(MainMenuChoice::InstantBmi) => screens::instant_bmi(console, profile)?,
                Some(MainMenuChoice::WeightTracker) => {
                    screens::weight_tracker(console)?;
                }
                Some(MainMenuChoice::Exit) => {
                    info!("User chose to exit");
                    console.print(GOODBYE)?;
                    return Ok(());
                }
                None => screens::unexpected_choice(console, choice)?,
            }
        }
    }
}
