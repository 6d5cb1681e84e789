use super::body::PhysicalBody;

/// A moon. Owned by exactly one planet; list membership is ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub body: PhysicalBody,
}

impl Moon {
    /// Builds a moon and immediately runs its derivation pass, so a moon
    /// entering the tree already has its complementary length filled in
    /// where derivable. Call order is fixed: circumference, then diameter.
    pub fn new(name: impl Into<String>, diameter: f64, circumference: f64) -> Self {
        let mut body = PhysicalBody::new(name, diameter, circumference);
        body.derive_circumference();
        body.derive_diameter();
        Self { body }
    }
}

/// A planet: shared geometry plus orbital parameters and owned moons.
///
/// Distances are in astronomical units, periods in years. As with the
/// geometry, 0 means "not given".
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub body: PhysicalBody,
    pub distance_from_sun: f64,
    pub orbital_period: f64,
    pub moons: Vec<Moon>,
}

impl Planet {
    /// Builds a planet with its moons, preserving moon input order.
    ///
    /// Construction performs no derivation on the planet's own fields; the
    /// owning [`Sun`] runs the full pass when the planet is attached.
    pub fn new(
        name: impl Into<String>,
        distance_from_sun: f64,
        orbital_period: f64,
        diameter: f64,
        circumference: f64,
        moons: Vec<Moon>,
    ) -> Self {
        Self {
            body: PhysicalBody::new(name, diameter, circumference),
            distance_from_sun,
            orbital_period,
            moons,
        }
    }

    pub fn derive_circumference(&mut self) {
        self.body.derive_circumference();
    }

    pub fn derive_diameter(&mut self) {
        self.body.derive_diameter();
    }

    /// Fills in the orbital period from the distance via Kepler's third law
    /// with unit proportionality constant: period = √(distance³). No-op when
    /// the distance is unknown or the period is already set.
    pub fn derive_orbital_period(&mut self) {
        if self.distance_from_sun != 0.0 && self.orbital_period == 0.0 {
            self.orbital_period = self.distance_from_sun.powi(3).sqrt();
        }
    }

    /// Fills in the distance from the orbital period: distance = ∛(period²).
    /// No-op when the period is unknown or the distance is already set.
    pub fn derive_distance(&mut self) {
        if self.orbital_period != 0.0 && self.distance_from_sun == 0.0 {
            self.distance_from_sun = (self.orbital_period * self.orbital_period).cbrt();
        }
    }

    /// Volume of the planet itself; moons are not counted.
    pub fn volume(&self) -> f64 {
        self.body.volume()
    }
}

/// The root of the system graph. Owns its planets in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    pub body: PhysicalBody,
    pub planets: Vec<Planet>,
}

impl Sun {
    pub fn new(name: impl Into<String>, diameter: f64, circumference: f64) -> Self {
        Self {
            body: PhysicalBody::new(name, diameter, circumference),
            planets: Vec::new(),
        }
    }

    /// Runs the planet's one-time derivation pass, then appends it. Call
    /// order is fixed: circumference, diameter, orbital period, distance.
    pub fn add_planet(&mut self, mut planet: Planet) {
        planet.derive_circumference();
        planet.derive_diameter();
        planet.derive_orbital_period();
        planet.derive_distance();
        self.planets.push(planet);
    }

    pub fn derive_circumference(&mut self) {
        self.body.derive_circumference();
    }

    pub fn derive_diameter(&mut self) {
        self.body.derive_diameter();
    }

    pub fn volume(&self) -> f64 {
        self.body.volume()
    }

    /// Sum of the volumes of all owned planets; 0 when there are none.
    pub fn total_planets_volume(&self) -> f64 {
        self.planets.iter().map(Planet::volume).sum()
    }
}
