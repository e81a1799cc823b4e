//! Backend capability surface.
//!
//! [`TadoApi`] is the one method set both generations implement, so the
//! facade can forward positionally without knowing which backend answered.
//! Home-level operations are identical either way and have default bodies
//! delegating to the shared [`HomeApi`]; zone/room/device-level operations
//! are generation-specific and live in [`MyApi`] / [`HopsApi`].

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::TadoApiError;
use crate::models::{
    AirComfort, BoilerMaxOutputTemperature, BoilerWiringInstallationState, Climate, DayReport, DayType,
    DefaultZoneOverlay, HeatingCircuit, HeatingCircuitId, HomePresence, HomeState, MobileDevice, TimetableTypeId,
    User, Weather, ZoneCapabilities, ZoneControl, ZoneId, ZoneOverlayTerminationTypeSkillBasedApp,
};
use crate::zone_state::ZoneState;

pub mod home;
pub mod hops;
pub mod my;

pub use home::HomeApi;
pub use hops::HopsApi;
pub use my::MyApi;

/// Capability set of one API generation.
///
/// Operations that exist on only one generation still appear here; the other
/// backend fails them eagerly with [`TadoApiError::NotSupported`] instead of
/// guessing at routes the account does not serve.
pub trait TadoApi {
    /// Shared home-level scope; both generations answer these on the legacy
    /// host.
    fn home(&self) -> &HomeApi;

    // --- shared across generations ---

    fn get_me(&self) -> Result<User, TadoApiError> {
        self.home().get_me()
    }

    fn get_users(&self) -> Result<Vec<User>, TadoApiError> {
        self.home().get_users()
    }

    fn get_mobile_devices(&self) -> Result<Vec<MobileDevice>, TadoApiError> {
        self.home().get_mobile_devices()
    }

    fn get_home_state(&self) -> Result<HomeState, TadoApiError> {
        self.home().get_home_state()
    }

    fn get_auto_geofencing_supported(&self) -> Result<bool, TadoApiError> {
        self.home().get_auto_geofencing_supported()
    }

    fn change_presence(&self, presence: HomePresence) -> Result<Value, TadoApiError> {
        self.home().change_presence(presence)
    }

    fn set_home(&self) -> Result<Value, TadoApiError> {
        self.home().set_home()
    }

    fn set_away(&self) -> Result<Value, TadoApiError> {
        self.home().set_away()
    }

    fn set_auto(&self) -> Result<Value, TadoApiError> {
        self.home().set_auto()
    }

    fn get_weather(&self) -> Result<Weather, TadoApiError> {
        self.home().get_weather()
    }

    fn get_air_comfort(&self) -> Result<AirComfort, TadoApiError> {
        self.home().get_air_comfort()
    }

    fn get_heating_circuits(&self) -> Result<Vec<HeatingCircuit>, TadoApiError> {
        self.home().get_heating_circuits()
    }

    fn get_running_times(&self, date: NaiveDate) -> Result<Value, TadoApiError> {
        self.home().get_running_times(date)
    }

    fn get_eiq_tariffs(&self) -> Result<Value, TadoApiError> {
        self.home().get_eiq_tariffs()
    }

    fn get_eiq_meter_readings(&self) -> Result<Value, TadoApiError> {
        self.home().get_eiq_meter_readings()
    }

    fn set_eiq_meter_readings(&self, date: NaiveDate, reading: i64) -> Result<Value, TadoApiError> {
        self.home().set_eiq_meter_readings(date, reading)
    }

    fn set_eiq_tariff(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
        tariff: f64,
        unit: &str,
        is_period: bool,
    ) -> Result<Value, TadoApiError> {
        self.home().set_eiq_tariff(from_date, to_date, tariff, unit, is_period)
    }

    fn get_boiler_install_state(
        &self,
        bridge_id: &str,
        auth_key: &str,
    ) -> Result<BoilerWiringInstallationState, TadoApiError> {
        self.home().get_boiler_install_state(bridge_id, auth_key)
    }

    fn get_boiler_max_output_temperature(
        &self,
        bridge_id: &str,
        auth_key: &str,
    ) -> Result<BoilerMaxOutputTemperature, TadoApiError> {
        self.home().get_boiler_max_output_temperature(bridge_id, auth_key)
    }

    fn set_boiler_max_output_temperature(
        &self,
        bridge_id: &str,
        auth_key: &str,
        temperature_in_celsius: f64,
    ) -> Result<Value, TadoApiError> {
        self.home()
            .set_boiler_max_output_temperature(bridge_id, auth_key, temperature_in_celsius)
    }

    // --- generation-specific ---

    /// Raw device inventory. Shapes differ per generation by design: the
    /// legacy API answers a device list, the hops API rooms-and-devices.
    fn get_devices(&self) -> Result<Value, TadoApiError>;

    fn get_zones(&self) -> Result<Value, TadoApiError>;

    fn get_zone_states(&self) -> Result<Value, TadoApiError>;

    /// Raw state of one zone/room, exactly as the backend reports it.
    fn get_state(&self, zone: ZoneId) -> Result<Value, TadoApiError>;

    /// Normalized state of one zone/room.
    fn get_zone_state(&self, zone: ZoneId) -> Result<ZoneState, TadoApiError>;

    fn get_climate(&self, zone: ZoneId) -> Result<Climate, TadoApiError>;

    fn get_capabilities(&self, zone: ZoneId) -> Result<ZoneCapabilities, TadoApiError>;

    fn get_timetable(&self, zone: ZoneId) -> Result<TimetableTypeId, TadoApiError>;

    fn set_timetable(&self, zone: ZoneId, timetable: TimetableTypeId) -> Result<Value, TadoApiError>;

    fn get_schedule(
        &self,
        zone: ZoneId,
        timetable: TimetableTypeId,
        day: Option<DayType>,
    ) -> Result<Value, TadoApiError>;

    fn set_schedule(
        &self,
        zone: ZoneId,
        timetable: TimetableTypeId,
        day: DayType,
        data: Value,
    ) -> Result<Value, TadoApiError>;

    fn get_historic(&self, zone: ZoneId, date: NaiveDate) -> Result<DayReport, TadoApiError>;

    fn get_zone_overlay_default(&self, zone: ZoneId) -> Result<DefaultZoneOverlay, TadoApiError>;

    fn set_zone_overlay(
        &self,
        zone: ZoneId,
        overlay_mode: ZoneOverlayTerminationTypeSkillBasedApp,
        set_temp: Option<f64>,
        duration_seconds: Option<i64>,
    ) -> Result<Value, TadoApiError>;

    fn reset_zone_overlay(&self, zone: ZoneId) -> Result<Value, TadoApiError>;

    fn get_window_state(&self, zone: ZoneId) -> Result<Value, TadoApiError>;

    fn get_open_window_detected(&self, zone: ZoneId) -> Result<bool, TadoApiError>;

    fn set_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError>;

    fn reset_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError>;

    fn get_zone_control(&self, zone: ZoneId) -> Result<ZoneControl, TadoApiError>;

    fn set_zone_heating_circuit(&self, zone: ZoneId, circuit: HeatingCircuitId) -> Result<Value, TadoApiError>;

    fn get_device_info(&self, serial: &str) -> Result<Value, TadoApiError>;

    fn set_temp_offset(&self, serial: &str, offset_celsius: f64) -> Result<Value, TadoApiError>;

    fn set_child_lock(&self, serial: &str, enabled: bool) -> Result<Value, TadoApiError>;
}
