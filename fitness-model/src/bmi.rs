use crate::profile::Sex;

/// Body mass score used by the fitness center.
///
/// This is not the conventional `mass / height^2` index. The mass is divided
/// by `height^(3/2)` and modulated by `|1 - trig(mass / height)|`, where the
/// trig function is cosine for men and sine for women. Callers are expected to
/// pass a positive mass and height.
pub fn bmi(mass_kg: f64, height_m: f64, sex: Sex) -> f64 {
    let ratio = mass_kg / height_m;
    let modulation = match sex {
        Sex::Male => ratio.cos(),
        Sex::Female => ratio.sin(),
    };

    mass_kg / height_m.powi(3).sqrt() * (1.0 - modulation).abs()
}
