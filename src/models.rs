//! Typed wire models for the Tado cloud API.
//!
//! Covers the schemas this client touches on both API generations:
//! - shared home-level objects served by `my.tado.com` regardless of
//!   generation (user, home state, weather, air comfort, devices, boiler),
//! - the legacy zone-state shape (`ZoneStateData` and friends),
//! - the X-line room-state shape (`RoomState` and friends) served by
//!   `hops.tado.com`.
//!
//! All fields are optional unless the API is known to always send them; the
//! normalization layer (`crate::zone_state`) is responsible for presenting a
//! uniform surface on top of these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =====================
// Scalar ID newtype wrappers
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub String);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeatingCircuitId(pub i64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeId(pub i64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobileDeviceId(pub i64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ZoneId(pub i64);

/// Timetable identifier: 0=ONE_DAY, 1=THREE_DAY, 2=SEVEN_DAY on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimetableTypeId {
    OneDay,
    ThreeDay,
    SevenDay,
}

impl TimetableTypeId {
    pub fn as_i32(self) -> i32 {
        match self {
            TimetableTypeId::OneDay => 0,
            TimetableTypeId::ThreeDay => 1,
            TimetableTypeId::SevenDay => 2,
        }
    }
}

impl serde::Serialize for TimetableTypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> serde::Deserialize<'de> for TimetableTypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;
        impl<'de> serde::de::Visitor<'de> for V {
            type Value = TimetableTypeId;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "an integer 0, 1 or 2 for TimetableTypeId")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    0 => Ok(TimetableTypeId::OneDay),
                    1 => Ok(TimetableTypeId::ThreeDay),
                    2 => Ok(TimetableTypeId::SevenDay),
                    other => Err(E::invalid_value(serde::de::Unexpected::Signed(other), &self)),
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_i64(value as i64)
            }
        }

        deserializer.deserialize_any(V)
    }
}

// =====================
// Core enums (string enums on the wire)
// =====================

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirConditioningMode {
    Auto,
    Cool,
    Heat,
    Dry,
    Fan,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirFreshness {
    Fair,
    Fresh,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatteryState {
    Low,
    Normal,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallForHeatValue {
    #[serde(rename = "NONE")]
    None_,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    MondayToSunday,
    MondayToFriday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FanLevel {
    Auto,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Silent,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomePresence {
    Home,
    Away,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HumidityLevel {
    Humid,
    Comfy,
    Dry,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalSwing {
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "RIGHT")]
    Right,
    #[serde(rename = "LEFT")]
    Left,
    #[serde(rename = "MID_RIGHT")]
    MidRight,
    #[serde(rename = "MID_LEFT")]
    MidLeft,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Power {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureLevel {
    Cold,
    Comfy,
    Warm,
    Hot,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimetableTypeType {
    OneDay,
    ThreeDay,
    SevenDay,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalSwing {
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "MID_UP")]
    MidUp,
    #[serde(rename = "MID_DOWN")]
    MidDown,
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "DOWN")]
    Down,
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "MID")]
    Mid,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherState {
    Cloudy,
    CloudyMostly,
    CloudyPartly,
    Drizzle,
    Foggy,
    NightClear,
    NightCloudy,
    Rain,
    ScatteredRain,
    ScatteredRainSnow,
    ScatteredSnow,
    Snow,
    Sun,
    Thunderstorm,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneOverlayTerminationType {
    Manual,
    TadoMode,
    Timer,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneOverlayTerminationTypeSkillBasedApp {
    Manual,
    TadoMode,
    Timer,
    NextTimeBlock,
}

impl From<ZoneOverlayTerminationType> for ZoneOverlayTerminationTypeSkillBasedApp {
    fn from(value: ZoneOverlayTerminationType) -> Self {
        match value {
            ZoneOverlayTerminationType::Manual => Self::Manual,
            ZoneOverlayTerminationType::TadoMode => Self::TadoMode,
            ZoneOverlayTerminationType::Timer => Self::Timer,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneType {
    AirConditioning,
    Heating,
    HotWater,
}

// =====================
// Client-side vocabularies for the normalized zone state
// =====================

/// What the zone's equipment is doing right now.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HvacAction {
    Heating,
    Cooling,
    Drying,
    Fan,
    HotWater,
    Idle,
    Off,
}

/// How the zone is being driven (schedule, overlay mode, or off).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HvacMode {
    Off,
    SmartSchedule,
    Auto,
    Cool,
    Heat,
    Dry,
    Fan,
}

impl From<AirConditioningMode> for HvacMode {
    fn from(value: AirConditioningMode) -> Self {
        match value {
            AirConditioningMode::Auto => Self::Auto,
            AirConditioningMode::Cool => Self::Cool,
            AirConditioningMode::Heat => Self::Heat,
            AirConditioningMode::Dry => Self::Dry,
            AirConditioningMode::Fan => Self::Fan,
        }
    }
}

// =====================
// Core datapoint structs
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Temperature {
    pub celsius: Option<f64>,
    pub fahrenheit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TemperaturePrecision {
    pub celsius: Option<f64>,
    pub fahrenheit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataPoint {
    pub celsius: Option<f64>,
    pub fahrenheit: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub precision: Option<TemperaturePrecision>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PercentageDataPoint {
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub percentage: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PowerDataPoint {
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub value: Option<Power>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SensorDataPoints {
    pub inside_temperature: Option<TemperatureDataPoint>,
    pub humidity: Option<PercentageDataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDataPoints {
    pub heating_power: Option<PercentageDataPoint>,
    pub ac_power: Option<PowerDataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeatherStateDataPoint {
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub value: Option<WeatherState>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TemperatureRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TemperatureCapability {
    pub celsius: Option<TemperatureRange>,
    pub fahrenheit: Option<TemperatureRange>,
}

// =====================
// Shared home-level schemas (my-api, both generations)
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HomeBase {
    pub id: Option<HomeId>,
    pub name: Option<String>,
}

/// Presence state of the home, including the geofencing capability hints the
/// presence controls depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HomeState {
    pub presence: Option<HomePresence>,
    pub presence_locked: Option<bool>,
    pub show_home_presence_switch_button: Option<bool>,
    pub show_switch_to_auto_geofencing_button: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MobileDeviceSettings {
    pub geo_tracking_enabled: Option<bool>,
    pub special_offers_enabled: Option<bool>,
    pub on_demand_log_retrieval_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MobileDeviceLocation {
    pub stale: Option<bool>,
    pub at_home: Option<bool>,
    pub relative_distance_from_home_fence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MobileDeviceMetadata {
    pub platform: Option<String>,
    pub os_version: Option<String>,
    pub model: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MobileDevice {
    pub id: Option<MobileDeviceId>,
    pub name: Option<String>,
    pub settings: Option<MobileDeviceSettings>,
    pub location: Option<MobileDeviceLocation>,
    pub device_metadata: Option<MobileDeviceMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub id: Option<String>,
    pub locale: Option<String>,
    pub homes: Option<Vec<HomeBase>>,
    pub mobile_devices: Option<Vec<MobileDevice>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub solar_intensity: Option<PercentageDataPoint>,
    pub outside_temperature: Option<TemperatureDataPoint>,
    pub weather_state: Option<WeatherStateDataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirComfortFreshness {
    pub value: Option<AirFreshness>,
    pub last_open_window: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirComfortCoordinate {
    pub radial: Option<f64>,
    pub angular: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirComfortRoomComfort {
    pub room_id: Option<ZoneId>,
    pub temperature_level: Option<TemperatureLevel>,
    pub humidity_level: Option<HumidityLevel>,
    pub coordinate: Option<AirComfortCoordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirComfort {
    pub freshness: Option<AirComfortFreshness>,
    // empty when the home has no connection
    pub comfort: Option<Vec<AirComfortRoomComfort>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeatingCircuit {
    pub number: Option<HeatingCircuitId>,
    pub driver_serial_no: Option<String>,
    pub driver_short_serial_no: Option<String>,
}

// =====================
// Devices (legacy zone model)
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceType(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConnectionState {
    pub value: Option<bool>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCharacteristics {
    pub capabilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMountingState {
    pub value: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_type: Option<DeviceType>,
    pub serial_no: Option<DeviceId>,
    pub short_serial_no: Option<String>,
    pub current_fw_version: Option<String>,
    pub connection_state: Option<DeviceConnectionState>,
    pub characteristics: Option<DeviceCharacteristics>,
    pub mounting_state: Option<DeviceMountingState>,
    pub battery_state: Option<BatteryState>,
    pub child_lock_enabled: Option<bool>,
}

// =====================
// Boiler installation (homeByBridge scope)
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoilerMaxOutputTemperature {
    pub boiler_max_output_temperature_in_celsius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceWiredToBoiler {
    pub r#type: Option<String>,
    pub serial_no: Option<String>,
    pub therm_interface_type: Option<String>,
    pub connected: Option<bool>,
    pub last_request_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoilerOutputTemperature {
    pub celsius: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoilerWiringInstallationStateBoiler {
    pub output_temperature: Option<BoilerOutputTemperature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoilerWiringInstallationState {
    pub state: Option<String>,
    pub device_wired_to_boiler: Option<DeviceWiredToBoiler>,
    pub bridge_connected: Option<bool>,
    pub hot_water_zone_present: Option<bool>,
    pub boiler: Option<BoilerWiringInstallationStateBoiler>,
}

// =====================
// Legacy zone state (my-api) and related
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneOverlayType(pub String);

/// Zone setting as the legacy API reports it. AC zones add mode/fan/swing on
/// top of the heating fields; older AC installations use `fanSpeed`/`swing`,
/// newer ones `fanLevel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSetting {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneType>,
    pub power: Option<Power>,
    pub temperature: Option<Temperature>,
    pub mode: Option<AirConditioningMode>,
    pub fan_speed: Option<String>,
    pub fan_level: Option<FanLevel>,
    pub swing: Option<Power>,
    pub is_boost: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOverlayTermination {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneOverlayTerminationType>,
    pub type_skill_based_app: Option<ZoneOverlayTerminationTypeSkillBasedApp>,
    pub duration_in_seconds: Option<i64>,
    pub remaining_time_in_seconds: Option<i64>,
    pub expiry: Option<DateTime<Utc>>,
    pub projected_expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOverlay {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneOverlayType>,
    pub setting: Option<ZoneSetting>,
    pub termination: Option<ZoneOverlayTermination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOpenWindow {
    pub detected_time: Option<DateTime<Utc>>,
    pub duration_in_seconds: Option<i64>,
    pub expiry: Option<DateTime<Utc>>,
    pub remaining_time_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStateLinkReason {
    pub code: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStateLink {
    // ONLINE / OFFLINE
    pub state: Option<String>,
    pub reason: Option<ZoneStateLinkReason>,
}

/// Raw `zones/{id}/state` response of the legacy API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStateData {
    pub tado_mode: Option<HomePresence>,
    pub geolocation_override: Option<bool>,
    pub geolocation_override_disable_time: Option<DateTime<Utc>>,
    pub preparation: Option<Value>,
    pub setting: Option<ZoneSetting>,
    pub overlay_type: Option<ZoneOverlayType>,
    pub overlay: Option<ZoneOverlay>,
    pub open_window: Option<ZoneOpenWindow>,
    pub open_window_detected: Option<bool>,
    pub link: Option<ZoneStateLink>,
    pub running_offline_schedule: Option<bool>,
    pub activity_data_points: Option<ActivityDataPoints>,
    pub sensor_data_points: Option<SensorDataPoints>,
}

// =====================
// Zone capabilities / control / defaults (legacy)
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirConditioningModeCapabilities {
    pub fan_level: Option<Vec<FanLevel>>,
    pub vertical_swing: Option<Vec<VerticalSwing>>,
    pub horizontal_swing: Option<Vec<HorizontalSwing>>,
    pub temperatures: Option<TemperatureCapability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCapabilitiesInitialStates {
    pub mode: Option<AirConditioningMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCapabilities {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneType>,
    pub temperatures: Option<TemperatureCapability>,
    pub can_set_temperature: Option<bool>,
    #[serde(rename = "AUTO")]
    pub auto: Option<AirConditioningModeCapabilities>,
    #[serde(rename = "HEAT")]
    pub heat: Option<AirConditioningModeCapabilities>,
    #[serde(rename = "FAN")]
    pub fan: Option<AirConditioningModeCapabilities>,
    #[serde(rename = "COOL")]
    pub cool: Option<AirConditioningModeCapabilities>,
    #[serde(rename = "DRY")]
    pub dry: Option<AirConditioningModeCapabilities>,
    pub initial_states: Option<ZoneCapabilitiesInitialStates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneControlDuties {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneType>,
    pub driver: Option<Device>,
    pub drivers: Option<Vec<Device>>,
    pub leader: Option<Device>,
    pub leaders: Option<Vec<Device>>,
    pub ui: Option<Device>,
    pub uis: Option<Vec<Device>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneControl {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneType>,
    pub early_start_enabled: Option<bool>,
    pub heating_circuit: Option<HeatingCircuitId>,
    pub duties: Option<ZoneControlDuties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DefaultOverlayTerminationCondition {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneOverlayTerminationType>,
    pub duration_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DefaultZoneOverlay {
    pub termination_condition: Option<DefaultOverlayTerminationCondition>,
}

/// `zones/{id}/schedule/activeTimetable` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimetableType {
    pub id: Option<TimetableTypeId>,
    #[serde(rename = "type")]
    pub r#type: Option<TimetableTypeType>,
}

// =====================
// Day report (legacy historic data)
// =====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataInterval {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BooleanDataInterval {
    #[serde(flatten)]
    pub interval: DataInterval,
    pub value: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BooleanTimeSeries {
    pub time_series_type: Option<String>,
    pub value_type: Option<String>,
    pub data_intervals: Option<Vec<BooleanDataInterval>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallForHeatDataInterval {
    #[serde(flatten)]
    pub interval: DataInterval,
    pub value: Option<CallForHeatValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallForHeatTimeSeries {
    pub time_series_type: Option<String>,
    pub value_type: Option<String>,
    pub data_intervals: Option<Vec<CallForHeatDataInterval>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PercentageDataPointInTimeSeries {
    pub timestamp: Option<DateTime<Utc>>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PercentageTimeSeries {
    pub time_series_type: Option<String>,
    pub value_type: Option<String>,
    pub percentage_unit: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub data_points: Option<Vec<PercentageDataPointInTimeSeries>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataPointInTimeSeries {
    pub timestamp: Option<DateTime<Utc>>,
    pub value: Option<Temperature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureTimeSeries {
    pub time_series_type: Option<String>,
    pub value_type: Option<String>,
    pub min: Option<Temperature>,
    pub max: Option<Temperature>,
    pub data_points: Option<Vec<TemperatureDataPointInTimeSeries>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSettingDataInterval {
    #[serde(flatten)]
    pub interval: DataInterval,
    pub value: Option<ZoneSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSettingTimeSeries {
    pub time_series_type: Option<String>,
    pub value_type: Option<String>,
    pub data_intervals: Option<Vec<ZoneSettingDataInterval>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayReportInterval {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayReportMeasuredData {
    pub measuring_device_connected: Option<BooleanTimeSeries>,
    pub inside_temperature: Option<TemperatureTimeSeries>,
    pub humidity: Option<PercentageTimeSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub zone_type: Option<ZoneType>,
    pub interval: Option<DayReportInterval>,
    pub hours_in_day: Option<i64>,
    pub measured_data: Option<DayReportMeasuredData>,
    pub settings: Option<ZoneSettingTimeSeries>,
    pub call_for_heat: Option<CallForHeatTimeSeries>,
    pub hot_water_production: Option<BooleanTimeSeries>,
}

// =====================
// X-line room state (hops-api)
// =====================

/// Temperature reading as the hops API reports it: a plain `value` in celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomTemperature {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomHumidity {
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomSensorDataPoints {
    pub inside_temperature: Option<RoomTemperature>,
    pub humidity: Option<RoomHumidity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomSetting {
    pub power: Option<Power>,
    pub temperature: Option<RoomTemperature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManualControlTermination {
    #[serde(rename = "type")]
    pub r#type: Option<ZoneOverlayTerminationTypeSkillBasedApp>,
    pub remaining_time_in_seconds: Option<i64>,
    pub projected_expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomHeatingPower {
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomConnection {
    // CONNECTED / DISCONNECTED
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomOpenWindow {
    pub activated: Option<bool>,
    pub expiry_in_seconds: Option<i64>,
}

/// Raw `rooms/{id}` response of the hops API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    pub id: Option<ZoneId>,
    pub name: Option<String>,
    pub sensor_data_points: Option<RoomSensorDataPoints>,
    pub setting: Option<RoomSetting>,
    pub manual_control_termination: Option<ManualControlTermination>,
    pub boost_mode: Option<Value>,
    pub heating_power: Option<RoomHeatingPower>,
    pub connection: Option<RoomConnection>,
    pub open_window: Option<RoomOpenWindow>,
    pub next_schedule_change: Option<Value>,
    pub next_time_block: Option<Value>,
}

// =====================
// Derived client-side records
// =====================

/// Inside climate snapshot of a zone, uniform across generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Climate {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}
