//! Per-category default specification and feature tables
//!
//! Slice order is display order. Empty default values mean the field is
//! required but has no suggested value.

use crate::models::VehicleCategory;

const BIKE_DEFAULTS: &[(&str, &str)] = &[
    ("Engine", ""),
    ("Displacement (cc)", ""),
    ("Power", ""),
    ("Torque", ""),
    ("Fuel Type", "Petrol"),
    ("Fuel Tank Capacity", ""),
    ("Transmission", "Manual"),
    ("Gears", "5"),
    ("Clutch", "Wet Multi-plate"),
    ("Brakes Front", "Disc"),
    ("Brakes Rear", "Disc/Drum"),
    ("ABS", "Single/Dual Channel"),
    ("Suspension Front", "Telescopic"),
    ("Suspension Rear", "Mono Shock"),
    ("Tyre Front", ""),
    ("Tyre Rear", ""),
    ("Mileage", ""),
    ("Max Speed", ""),
    ("Seat Height", ""),
    ("Ground Clearance", ""),
    ("Kerb Weight", ""),
    ("Wheelbase", ""),
];

const SCOOTER_DEFAULTS: &[(&str, &str)] = &[
    ("Engine", ""),
    ("Displacement (cc)", ""),
    ("Power", ""),
    ("Torque", ""),
    ("Fuel Type", "Petrol"),
    ("Fuel Tank Capacity", ""),
    ("Transmission", "Automatic"),
    ("Drive Type", "CVT"),
    ("Brakes Front", "Disc/Drum"),
    ("Brakes Rear", "Drum"),
    ("Brake System", "CBS/IBS"),
    ("Suspension Front", "Telescopic"),
    ("Suspension Rear", "Hydraulic"),
    ("Tyre Front", ""),
    ("Tyre Rear", ""),
    ("Mileage", ""),
    ("Max Speed", ""),
    ("Seat Height", ""),
    ("Ground Clearance", ""),
    ("Kerb Weight", ""),
    ("Boot Space", ""),
    ("Wheelbase", ""),
];

const EV_DEFAULTS: &[(&str, &str)] = &[
    ("Motor Type", "BLDC"),
    ("Motor Power", ""),
    ("Battery Type", "Lithium-ion"),
    ("Battery Capacity", ""),
    ("Battery Warranty", ""),
    ("Controller", ""),
    ("Charger Type", ""),
    ("Charging Time", ""),
    ("Range", ""),
    ("Drive Type", "Hub/Chain Drive"),
    ("Top Speed", ""),
    ("Brakes Front", "Disc/Drum"),
    ("Brakes Rear", "Drum"),
    ("Brake System", "CBS"),
    ("Suspension Front", "Telescopic"),
    ("Suspension Rear", "Dual Shock"),
    ("Tyre Front", ""),
    ("Tyre Rear", ""),
    ("Ground Clearance", ""),
    ("Loading Capacity", ""),
    ("Kerb Weight", ""),
    ("IP Rating", ""),
    ("Smart Features", "App Connectivity"),
];

const BIKE_FEATURES: &[&str] = &["Analog Speedometer", "Halogen Headlamp", "Electric Start"];
const SCOOTER_FEATURES: &[&str] = &[
    "Under-seat Storage",
    "Automatic Start/Stop",
    "USB Charging Port",
];
const EV_FEATURES: &[&str] = &[
    "Regenerative Braking",
    "Digital Speedometer",
    "Mobile App Connectivity",
];

/// Default specification table for a vehicle category
pub fn type_defaults(category: VehicleCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        VehicleCategory::Bike => BIKE_DEFAULTS,
        VehicleCategory::Scooter => SCOOTER_DEFAULTS,
        VehicleCategory::Ev => EV_DEFAULTS,
    }
}

/// Default feature list for a vehicle category
pub fn default_features(category: VehicleCategory) -> &'static [&'static str] {
    match category {
        VehicleCategory::Bike => BIKE_FEATURES,
        VehicleCategory::Scooter => SCOOTER_FEATURES,
        VehicleCategory::Ev => EV_FEATURES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_no_duplicate_keys() {
        for category in [
            VehicleCategory::Bike,
            VehicleCategory::Scooter,
            VehicleCategory::Ev,
        ] {
            let table = type_defaults(category);
            let mut seen = std::collections::HashSet::new();
            for (key, _) in table {
                assert!(seen.insert(*key), "duplicate key {key:?} in {category:?}");
            }
        }
    }

    #[test]
    fn every_category_has_features() {
        for category in [
            VehicleCategory::Bike,
            VehicleCategory::Scooter,
            VehicleCategory::Ev,
        ] {
            assert_eq!(default_features(category).len(), 3);
        }
    }
}
