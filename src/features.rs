//! The eight battery-cycle features the prediction service expects.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Identifies one field of the feature set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    CycleIndex,
    DischargeTime,
    Decrement,
    MaxVoltageDischarge,
    MinVoltageDcharge,
    TimeAt415,
    TimeConstantCurrent,
    ChargingTime,
}

impl FeatureKey {
    /// All keys, in form and wire order.
    pub const ALL: [FeatureKey; 8] = [
        FeatureKey::CycleIndex,
        FeatureKey::DischargeTime,
        FeatureKey::Decrement,
        FeatureKey::MaxVoltageDischarge,
        FeatureKey::MinVoltageDcharge,
        FeatureKey::TimeAt415,
        FeatureKey::TimeConstantCurrent,
        FeatureKey::ChargingTime,
    ];

    /// JSON key used by the prediction service.
    pub fn wire_name(self) -> &'static str {
        self.spec().key
    }

    /// Static display metadata for this feature.
    pub fn spec(self) -> &'static FeatureSpec {
        &FEATURES[self as usize]
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown feature field: {0}")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureKey {
    type Err = UnknownFeature;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FeatureKey::ALL
            .into_iter()
            .find(|key| key.wire_name() == name)
            .ok_or_else(|| UnknownFeature(name.to_string()))
    }
}

/// Label, unit and description shown next to a feature input.
#[derive(Debug, PartialEq, Eq)]
pub struct FeatureSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Indexed by `FeatureKey as usize`.
pub static FEATURES: [FeatureSpec; 8] = [
    FeatureSpec {
        key: "cycle_index",
        label: "Cycle Index (N)",
        unit: "cycles",
        description: "The sequential number of the completed charge-discharge cycle.",
    },
    FeatureSpec {
        key: "discharge_time",
        label: "Discharge Time (s)",
        unit: "seconds",
        description: "The total time the battery took to complete the discharge process (at a 1.5C rate).",
    },
    FeatureSpec {
        key: "decrement",
        label: "Decrement 3.6-3.4V (s)",
        unit: "seconds",
        description: "The time required for the battery's voltage to drop from 3.6 V to 3.4 V during the discharge phase.",
    },
    FeatureSpec {
        key: "max_voltage_discharge",
        label: "Max. Voltage Discharge (V)",
        unit: "Volts",
        description: "The maximum voltage recorded at the start of the discharge phase.",
    },
    FeatureSpec {
        key: "min_voltage_dcharge",
        label: "Min. Voltage Discharge (V)",
        unit: "Volts",
        description: "The minimum voltage recorded at the start of the charge phase (the cutoff voltage from the previous discharge).",
    },
    FeatureSpec {
        key: "time_at_4_15",
        label: "Time at 4.15V (s)",
        unit: "seconds",
        description: "The total time the battery spent at the voltage 4.15 V (or above) during the charging phase.",
    },
    FeatureSpec {
        key: "time_constant_current",
        label: "Time Constant Current (s)",
        unit: "seconds",
        description: "The duration of the Constant Current (CC) phase during the battery's charge cycle (at a C/2 rate).",
    },
    FeatureSpec {
        key: "charging_time",
        label: "Charging Time (s)",
        unit: "seconds",
        description: "The total time the battery took to complete the entire charge cycle (CC + CV).",
    },
];

/// One value per feature, serialized with the service's field names.
///
/// Values stay strings end to end; the service does the numeric parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatteryFeatures {
    pub cycle_index: String,
    pub discharge_time: String,
    pub decrement: String,
    pub max_voltage_discharge: String,
    pub min_voltage_dcharge: String,
    pub time_at_4_15: String,
    pub time_constant_current: String,
    pub charging_time: String,
}

impl BatteryFeatures {
    pub fn get(&self, key: FeatureKey) -> &str {
        match key {
            FeatureKey::CycleIndex => &self.cycle_index,
            FeatureKey::DischargeTime => &self.discharge_time,
            FeatureKey::Decrement => &self.decrement,
            FeatureKey::MaxVoltageDischarge => &self.max_voltage_discharge,
            FeatureKey::MinVoltageDcharge => &self.min_voltage_dcharge,
            FeatureKey::TimeAt415 => &self.time_at_4_15,
            FeatureKey::TimeConstantCurrent => &self.time_constant_current,
            FeatureKey::ChargingTime => &self.charging_time,
        }
    }

    pub fn get_mut(&mut self, key: FeatureKey) -> &mut String {
        match key {
            FeatureKey::CycleIndex => &mut self.cycle_index,
            FeatureKey::DischargeTime => &mut self.discharge_time,
            FeatureKey::Decrement => &mut self.decrement,
            FeatureKey::MaxVoltageDischarge => &mut self.max_voltage_discharge,
            FeatureKey::MinVoltageDcharge => &mut self.min_voltage_dcharge,
            FeatureKey::TimeAt415 => &mut self.time_at_4_15,
            FeatureKey::TimeConstantCurrent => &mut self.time_constant_current,
            FeatureKey::ChargingTime => &mut self.charging_time,
        }
    }

    /// Keys whose value is still the empty string.
    pub fn missing(&self) -> Vec<FeatureKey> {
        FeatureKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_empty())
            .collect()
    }
}
