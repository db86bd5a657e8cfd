use strum::{Display, EnumString};

use crate::bmi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Sex {
    #[strum(to_string = "Male", serialize = "m", serialize = "male")]
    Male,
    #[strum(to_string = "Female", serialize = "f", serialize = "female")]
    Female,
}

/// Biometric data of a user that completed registration.
///
/// Only obtainable through [`finalize_registration`], so every field is
/// always populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    sex: Sex,
    age: u32,
    height_m: f64,
    current_weight_kg: f64,
    desired_weight_kg: f64,
}

impl Registration {
    pub fn sex(&self) -> Sex {
        self.sex
    }
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn height_m(&self) -> f64 {
        self.height_m
    }
    pub fn current_weight_kg(&self) -> f64 {
        self.current_weight_kg
    }
    pub fn desired_weight_kg(&self) -> f64 {
        self.desired_weight_kg
    }

    pub fn bmi(&self) -> f64 {
        bmi::bmi(self.current_weight_kg, self.height_m, self.sex)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Profile {
    #[default]
    Unregistered,
    Registered(Registration),
}

impl Profile {
    pub fn is_registered(&self) -> bool {
        matches!(self, Profile::Registered(_))
    }

    pub fn registration(&self) -> Option<&Registration> {
        match self {
            Profile::Registered(registration) => Some(registration),
            Profile::Unregistered => None,
        }
    }
}

/// Builds a registered profile out of a complete set of biometric fields.
pub fn finalize_registration(
    sex: Sex,
    age: u32,
    height_m: f64,
    current_weight_kg: f64,
    desired_weight_kg: f64,
) -> Profile {
    Profile::Registered(Registration {
        sex,
        age,
        height_m,
        current_weight_kg,
        desired_weight_kg,
    })
}

/// Registration data still being edited. Becomes a [`Profile`] only when
/// finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    pub sex: Sex,
    pub age: u32,
    pub height_m: f64,
    pub current_weight_kg: f64,
    pub desired_weight_kg: f64,
}

impl RegistrationDraft {
    pub fn finalize(self) -> Profile {
        finalize_registration(
            self.sex,
            self.age,
            self.height_m,
            self.current_weight_kg,
            self.desired_weight_kg,
        )
    }
}
