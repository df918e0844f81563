// pt-core/src/units.rs

use uom::si::f64::{Length as UomLength, VolumeRate as UomVolumeRate};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn lps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_second;
    VolumeRate::new::<liter_per_second>(v)
}

#[inline]
pub fn as_m(v: Length) -> f64 {
    use uom::si::length::meter;
    v.get::<meter>()
}

#[inline]
pub fn as_mm(v: Length) -> f64 {
    use uom::si::length::millimeter;
    v.get::<millimeter>()
}

#[inline]
pub fn as_lps(v: VolumeRate) -> f64 {
    use uom::si::volume_rate::liter_per_second;
    v.get::<liter_per_second>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_conversions() {
        assert!((as_mm(m(0.025)) - 25.0).abs() < 1e-9);
        assert!((as_m(mm(1500.0)) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn volume_rate_conversions() {
        assert!((as_lps(m3ps(0.002)) - 2.0).abs() < 1e-9);
        assert!((as_lps(lps(0.35)) - 0.35).abs() < 1e-12);
    }
}
