use std::f64::consts::PI;

/// Geometry shared by every body in the system: a name plus diameter and
/// circumference in kilometres, where 0 means "not given".
///
/// At most one of the two lengths is ever derived; once both are known they
/// are never recomputed, even if mutually inconsistent. First known wins.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalBody {
    pub name: String,
    pub diameter: f64,
    pub circumference: f64,
}

impl PhysicalBody {
    pub fn new(name: impl Into<String>, diameter: f64, circumference: f64) -> Self {
        Self {
            name: name.into(),
            diameter,
            circumference,
        }
    }

    /// Fills in the circumference from the diameter. No-op when the diameter
    /// is unknown or the circumference is already set.
    pub fn derive_circumference(&mut self) {
        if self.diameter != 0.0 && self.circumference == 0.0 {
            self.circumference = self.diameter * PI;
        }
    }

    /// Fills in the diameter from the circumference. No-op when the
    /// circumference is unknown or the diameter is already set.
    pub fn derive_diameter(&mut self) {
        if self.circumference != 0.0 && self.diameter == 0.0 {
            self.diameter = self.circumference / PI;
        }
    }

    /// Volume of the sphere with this body's diameter. Returns 0 when the
    /// diameter is unknown; no error is signalled.
    pub fn volume(&self) -> f64 {
        let radius = self.diameter / 2.0;
        (4.0 / 3.0) * PI * radius.powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn circumference_from_known_diameter() {
        let mut body = PhysicalBody::new("Io", 3643.2, 0.0);
        body.derive_circumference();
        assert_eq!(body.circumference, 3643.2 * PI);
        assert_eq!(body.diameter, 3643.2);
    }

    #[test]
    fn diameter_stays_put_after_roundtrip() {
        let mut body = PhysicalBody::new("Io", 3643.2, 0.0);
        body.derive_circumference();
        body.derive_diameter();
        assert_eq!(body.diameter, 3643.2);
        assert_eq!(body.circumference, 3643.2 * PI);
    }

    #[test]
    fn diameter_from_known_circumference() {
        let mut body = PhysicalBody::new("Europa", 0.0, 9806.9);
        body.derive_diameter();
        assert_eq!(body.diameter, 9806.9 / PI);

        // Circumference is already known, so this must not touch it.
        body.derive_circumference();
        assert_eq!(body.circumference, 9806.9);
    }

    #[test]
    fn inconsistent_values_are_never_reconciled() {
        let mut body = PhysicalBody::new("Oddball", 100.0, 50.0);
        body.derive_circumference();
        body.derive_diameter();
        assert_eq!(body.diameter, 100.0);
        assert_eq!(body.circumference, 50.0);
    }

    #[test]
    fn both_unknown_stays_unknown() {
        let mut body = PhysicalBody::new("Ghost", 0.0, 0.0);
        body.derive_circumference();
        body.derive_diameter();
        assert_eq!(body.diameter, 0.0);
        assert_eq!(body.circumference, 0.0);
    }

    #[test]
    fn volume_of_unknown_diameter_is_zero() {
        let body = PhysicalBody::new("Ghost", 0.0, 0.0);
        assert_eq!(body.volume(), 0.0);
    }

    #[test]
    fn volume_of_unit_radius() {
        let body = PhysicalBody::new("Unit", 2.0, 0.0);
        assert!(approx_eq(body.volume(), (4.0 / 3.0) * PI, 1e-12));
    }
}
