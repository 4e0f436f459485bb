// cl-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, HeatTransfer as UomHeatTransfer, Length as UomLength, Mass as UomMass,
    Power as UomPower, SpecificHeatCapacity as UomSpecificHeatCapacity,
    TemperatureInterval as UomTemperatureInterval, ThermalConductivity as UomThermalConductivity,
    Time as UomTime, Volume as UomVolume, VolumetricHeatCapacity as UomVolumetricHeatCapacity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
/// U-value, W/(m²·K).
pub type HeatTransfer = UomHeatTransfer;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Power = UomPower;
pub type SpecificHeat = UomSpecificHeatCapacity;
pub type TempInterval = UomTemperatureInterval;
pub type ThermalConductivity = UomThermalConductivity;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumetricHeatCapacity = UomVolumetricHeatCapacity;

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn delta_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

/// Specific heat given in kJ/(kg·K), the unit product data sheets use.
#[inline]
pub fn kj_per_kg_k(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v * 1000.0)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn j_per_m3_k(v: f64) -> VolumetricHeatCapacity {
    use uom::si::volumetric_heat_capacity::joule_per_cubic_meter_kelvin;
    VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(v)
}

#[inline]
pub fn as_kw(p: Power) -> f64 {
    use uom::si::power::kilowatt;
    p.get::<kilowatt>()
}

#[inline]
pub fn as_w(p: Power) -> f64 {
    use uom::si::power::watt;
    p.get::<watt>()
}

#[inline]
pub fn as_w_per_m2_k(u: HeatTransfer) -> f64 {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    u.get::<watt_per_square_meter_kelvin>()
}
