//! Text rendering for the system report.
//!
//! The line structure and numeric formatting here are the program's only
//! externally visible result, so they are part of the contract: moon lengths
//! carry one decimal, planet and sun lengths none, orbital values two, and
//! all kilometre values get thousands separators.

use std::fmt;

use crate::model::system::{Moon, Planet, Sun};

/// Renders `value` at the given precision with `,` grouping every three
/// integer digits, e.g. `1,392,700` and `3,474.8`.
fn group_digits(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moon: {}\nDiameter: {} km\nCircumference: {} km",
            self.body.name,
            group_digits(self.body.diameter, 1),
            group_digits(self.body.circumference, 1)
        )
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Planet: {}", self.body.name)?;
        writeln!(f, "Distance from sun: {:.2} au", self.distance_from_sun)?;
        writeln!(f, "Orbital period: {:.2} yr", self.orbital_period)?;
        writeln!(f, "Diameter: {} km", group_digits(self.body.diameter, 0))?;
        write!(
            f,
            "Circumference: {} km",
            group_digits(self.body.circumference, 0)
        )?;
        for moon in &self.moons {
            write!(f, "\n{moon}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sun: {}", self.body.name)?;
        writeln!(f, "Diameter: {} km", group_digits(self.body.diameter, 0))?;
        writeln!(
            f,
            "Circumference: {} km",
            group_digits(self.body.circumference, 0)
        )?;
        writeln!(f)?;
        for planet in &self.planets {
            writeln!(f, "{planet}")?;
            writeln!(f)?;
        }
        // Strict less-than: equal volumes do not fit.
        write!(
            f,
            "All the planets' volumes added together could fit in the Sun: {}",
            self.total_planets_volume() < self.volume()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::io::parse_system;
    use crate::model::system::{Moon, Planet, Sun};

    use super::group_digits;

    #[test]
    fn grouping_at_zero_decimals() {
        assert_eq!(group_digits(0.0, 0), "0");
        assert_eq!(group_digits(999.0, 0), "999");
        assert_eq!(group_digits(1000.0, 0), "1,000");
        assert_eq!(group_digits(12742.0, 0), "12,742");
        assert_eq!(group_digits(1_392_700.0, 0), "1,392,700");
    }

    #[test]
    fn grouping_keeps_the_fraction_ungrouped() {
        assert_eq!(group_digits(3474.8, 1), "3,474.8");
        assert_eq!(group_digits(0.0, 1), "0.0");
        assert_eq!(group_digits(1234567.891, 2), "1,234,567.89");
    }

    #[test]
    fn moon_block_is_three_lines() {
        let moon = Moon::new("Triton", 2706.8, 0.0);
        assert_eq!(
            moon.to_string(),
            "Moon: Triton\nDiameter: 2,706.8 km\nCircumference: 8,503.7 km"
        );
    }

    #[test]
    fn planet_block_appends_moon_blocks() {
        let mut sun = Sun::new("Sol", 0.0, 0.0);
        let moons = vec![Moon::new("Phobos", 22.2, 0.0)];
        sun.add_planet(Planet::new("Mars", 1.52, 0.0, 6792.0, 0.0, moons));

        assert_eq!(
            sun.planets[0].to_string(),
            "Planet: Mars\n\
             Distance from sun: 1.52 au\n\
             Orbital period: 1.87 yr\n\
             Diameter: 6,792 km\n\
             Circumference: 21,338 km\n\
             Moon: Phobos\n\
             Diameter: 22.2 km\n\
             Circumference: 69.7 km"
        );
    }

    #[test]
    fn full_report_for_a_small_system() {
        let mut sun = parse_system(
            r#"{"Name":"TestSun","Diameter":10,"Planets":[{"Name":"P1","Diameter":2,"Moons":[{"Name":"M1","Diameter":1}]}]}"#,
        )
        .unwrap();
        sun.derive_circumference();
        sun.derive_diameter();

        assert_eq!(
            sun.to_string(),
            "Sun: TestSun\n\
             Diameter: 10 km\n\
             Circumference: 31 km\n\
             \n\
             Planet: P1\n\
             Distance from sun: 0.00 au\n\
             Orbital period: 0.00 yr\n\
             Diameter: 2 km\n\
             Circumference: 6 km\n\
             Moon: M1\n\
             Diameter: 1.0 km\n\
             Circumference: 3.1 km\n\
             \n\
             All the planets' volumes added together could fit in the Sun: true"
        );
    }

    #[test]
    fn report_with_no_planets_still_has_the_verdict() {
        let mut sun = Sun::new("Lonely", 10.0, 0.0);
        sun.derive_circumference();
        // An empty total (0) is still strictly smaller than the sun's volume.
        assert_eq!(
            sun.to_string(),
            "Sun: Lonely\n\
             Diameter: 10 km\n\
             Circumference: 31 km\n\
             \n\
             All the planets' volumes added together could fit in the Sun: true"
        );
    }

    #[test]
    fn equal_volumes_do_not_fit() {
        let mut sun = Sun::new("Sol", 2.0, 0.0);
        sun.add_planet(Planet::new("Twin", 0.0, 0.0, 2.0, 0.0, Vec::new()));
        assert!(sun
            .to_string()
            .ends_with("could fit in the Sun: false"));
    }
}
