//! The unified client facade.
//!
//! [`Tado`] authenticates once, detects which backend generation serves the
//! account and holds the matching backend behind the [`TadoApi`] trait.
//! Every public method is a pure forwarding call; no business logic lives
//! here beyond dispatch, and backend errors propagate unchanged.

use chrono::NaiveDate;
use log::info;
use serde_json::Value;
use std::rc::Rc;

use crate::api::{HopsApi, MyApi, TadoApi};
use crate::error::TadoApiError;
use crate::http::{Http, Transport};
use crate::models::{
    AirComfort, BoilerMaxOutputTemperature, BoilerWiringInstallationState, Climate, DayReport, DayType,
    DefaultZoneOverlay, HeatingCircuit, HeatingCircuitId, HomePresence, HomeState, MobileDevice, TimetableTypeId,
    User, Weather, ZoneCapabilities, ZoneControl, ZoneId, ZoneOverlayTerminationTypeSkillBasedApp,
};
use crate::zone_state::ZoneState;

pub struct Tado {
    api: Box<dyn TadoApi>,
}

impl Tado {
    /// Log in and classify the account's backend generation.
    ///
    /// Fails with [`TadoApiError::Auth`] when the credentials are rejected.
    /// The generation is resolved exactly once; it does not change within a
    /// session.
    pub fn new(email: &str, password: &str) -> Result<Tado, TadoApiError> {
        let http = Http::login(email, password)?;
        let x_line = http.is_x_line();
        Ok(Tado::with_transport(Rc::new(http), x_line))
    }

    /// Build the facade over an existing transport and an already-known
    /// generation flag. No network traffic is issued.
    pub fn with_transport(transport: Rc<dyn Transport>, x_line: bool) -> Tado {
        let api: Box<dyn TadoApi> = if x_line {
            info!("using the X-line (room) backend");
            Box::new(HopsApi::new(transport))
        } else {
            info!("using the pre-X (zone) backend");
            Box::new(MyApi::new(transport))
        };
        Tado { api }
    }

    pub fn get_me(&self) -> Result<User, TadoApiError> {
        self.api.get_me()
    }

    pub fn get_users(&self) -> Result<Vec<User>, TadoApiError> {
        self.api.get_users()
    }

    pub fn get_mobile_devices(&self) -> Result<Vec<MobileDevice>, TadoApiError> {
        self.api.get_mobile_devices()
    }

    pub fn get_home_state(&self) -> Result<HomeState, TadoApiError> {
        self.api.get_home_state()
    }

    pub fn get_auto_geofencing_supported(&self) -> Result<bool, TadoApiError> {
        self.api.get_auto_geofencing_supported()
    }

    pub fn change_presence(&self, presence: HomePresence) -> Result<Value, TadoApiError> {
        self.api.change_presence(presence)
    }

    pub fn set_home(&self) -> Result<Value, TadoApiError> {
        self.api.set_home()
    }

    pub fn set_away(&self) -> Result<Value, TadoApiError> {
        self.api.set_away()
    }

    pub fn set_auto(&self) -> Result<Value, TadoApiError> {
        self.api.set_auto()
    }

    pub fn get_weather(&self) -> Result<Weather, TadoApiError> {
        self.api.get_weather()
    }

    pub fn get_air_comfort(&self) -> Result<AirComfort, TadoApiError> {
        self.api.get_air_comfort()
    }

    pub fn get_heating_circuits(&self) -> Result<Vec<HeatingCircuit>, TadoApiError> {
        self.api.get_heating_circuits()
    }

    pub fn get_running_times(&self, date: NaiveDate) -> Result<Value, TadoApiError> {
        self.api.get_running_times(date)
    }

    pub fn get_eiq_tariffs(&self) -> Result<Value, TadoApiError> {
        self.api.get_eiq_tariffs()
    }

    pub fn get_eiq_meter_readings(&self) -> Result<Value, TadoApiError> {
        self.api.get_eiq_meter_readings()
    }

    pub fn set_eiq_meter_readings(&self, date: NaiveDate, reading: i64) -> Result<Value, TadoApiError> {
        self.api.set_eiq_meter_readings(date, reading)
    }

    pub fn set_eiq_tariff(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
        tariff: f64,
        unit: &str,
        is_period: bool,
    ) -> Result<Value, TadoApiError> {
        self.api.set_eiq_tariff(from_date, to_date, tariff, unit, is_period)
    }

    pub fn get_boiler_install_state(
        &self,
        bridge_id: &str,
        auth_key: &str,
    ) -> Result<BoilerWiringInstallationState, TadoApiError> {
        self.api.get_boiler_install_state(bridge_id, auth_key)
    }

    pub fn get_boiler_max_output_temperature(
        &self,
        bridge_id: &str,
        auth_key: &str,
    ) -> Result<BoilerMaxOutputTemperature, TadoApiError> {
        self.api.get_boiler_max_output_temperature(bridge_id, auth_key)
    }

    pub fn set_boiler_max_output_temperature(
        &self,
        bridge_id: &str,
        auth_key: &str,
        temperature_in_celsius: f64,
    ) -> Result<Value, TadoApiError> {
        self.api
            .set_boiler_max_output_temperature(bridge_id, auth_key, temperature_in_celsius)
    }

    pub fn get_devices(&self) -> Result<Value, TadoApiError> {
        self.api.get_devices()
    }

    pub fn get_zones(&self) -> Result<Value, TadoApiError> {
        self.api.get_zones()
    }

    pub fn get_zone_states(&self) -> Result<Value, TadoApiError> {
        self.api.get_zone_states()
    }

    pub fn get_state(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.api.get_state(zone)
    }

    pub fn get_zone_state(&self, zone: ZoneId) -> Result<ZoneState, TadoApiError> {
        self.api.get_zone_state(zone)
    }

    pub fn get_climate(&self, zone: ZoneId) -> Result<Climate, TadoApiError> {
        self.api.get_climate(zone)
    }

    pub fn get_capabilities(&self, zone: ZoneId) -> Result<ZoneCapabilities, TadoApiError> {
        self.api.get_capabilities(zone)
    }

    pub fn get_timetable(&self, zone: ZoneId) -> Result<TimetableTypeId, TadoApiError> {
        self.api.get_timetable(zone)
    }

    pub fn set_timetable(&self, zone: ZoneId, timetable: TimetableTypeId) -> Result<Value, TadoApiError> {
        self.api.set_timetable(zone, timetable)
    }

    pub fn get_schedule(
        &self,
        zone: ZoneId,
        timetable: TimetableTypeId,
        day: Option<DayType>,
    ) -> Result<Value, TadoApiError> {
        self.api.get_schedule(zone, timetable, day)
    }

    pub fn set_schedule(
        &self,
        zone: ZoneId,
        timetable: TimetableTypeId,
        day: DayType,
        data: Value,
    ) -> Result<Value, TadoApiError> {
        self.api.set_schedule(zone, timetable, day, data)
    }

    pub fn get_historic(&self, zone: ZoneId, date: NaiveDate) -> Result<DayReport, TadoApiError> {
        self.api.get_historic(zone, date)
    }

    pub fn get_zone_overlay_default(&self, zone: ZoneId) -> Result<DefaultZoneOverlay, TadoApiError> {
        self.api.get_zone_overlay_default(zone)
    }

    pub fn set_zone_overlay(
        &self,
        zone: ZoneId,
        overlay_mode: ZoneOverlayTerminationTypeSkillBasedApp,
        set_temp: Option<f64>,
        duration_seconds: Option<i64>,
    ) -> Result<Value, TadoApiError> {
        self.api.set_zone_overlay(zone, overlay_mode, set_temp, duration_seconds)
    }

    pub fn reset_zone_overlay(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.api.reset_zone_overlay(zone)
    }

    pub fn get_window_state(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.api.get_window_state(zone)
    }

    pub fn get_open_window_detected(&self, zone: ZoneId) -> Result<bool, TadoApiError> {
        self.api.get_open_window_detected(zone)
    }

    pub fn set_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.api.set_open_window(zone)
    }

    pub fn reset_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.api.reset_open_window(zone)
    }

    pub fn get_zone_control(&self, zone: ZoneId) -> Result<ZoneControl, TadoApiError> {
        self.api.get_zone_control(zone)
    }

    pub fn set_zone_heating_circuit(&self, zone: ZoneId, circuit: HeatingCircuitId) -> Result<Value, TadoApiError> {
        self.api.set_zone_heating_circuit(zone, circuit)
    }

    pub fn get_device_info(&self, serial: &str) -> Result<Value, TadoApiError> {
        self.api.get_device_info(serial)
    }

    pub fn set_temp_offset(&self, serial: &str, offset_celsius: f64) -> Result<Value, TadoApiError> {
        self.api.set_temp_offset(serial, offset_celsius)
    }

    pub fn set_child_lock(&self, serial: &str, enabled: bool) -> Result<Value, TadoApiError> {
        self.api.set_child_lock(serial, enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Endpoint;
    use crate::test_support::MockTransport;
    use http::Method;
    use serde_json::json;

    #[test]
    fn construction_issues_no_requests() {
        let transport = MockTransport::new();
        let _tado = Tado::with_transport(transport.clone(), false);
        let _tado_x = Tado::with_transport(transport.clone(), true);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn pre_x_accounts_route_to_the_zone_backend() {
        let transport = MockTransport::new();
        let tado = Tado::with_transport(transport.clone(), false);

        tado.set_zone_overlay(ZoneId(1), ZoneOverlayTerminationTypeSkillBasedApp::Manual, Some(22.0), Some(3600))
            .unwrap();

        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("zones/1/overlay"));
        assert_eq!(req.endpoint, Endpoint::MyApi);
    }

    #[test]
    fn x_line_accounts_route_to_the_room_backend() {
        let transport = MockTransport::new();
        let tado = Tado::with_transport(transport.clone(), true);

        tado.set_zone_overlay(ZoneId(1), ZoneOverlayTerminationTypeSkillBasedApp::Manual, Some(22.0), Some(3600))
            .unwrap();

        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/manualControl"));
        assert_eq!(req.endpoint, Endpoint::Hops);
    }

    #[test]
    fn open_window_routes_differ_per_generation() {
        let transport = MockTransport::new();
        let tado = Tado::with_transport(transport.clone(), false);
        tado.set_open_window(ZoneId(1)).unwrap();
        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("zones/1/state/openWindow/activate"));
        assert_eq!(req.action, Method::POST);

        let tado_x = Tado::with_transport(transport.clone(), true);
        tado_x.set_open_window(ZoneId(1)).unwrap();
        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/openWindow"));
        assert_eq!(req.action, Method::PUT);
    }

    #[test]
    fn legacy_only_surface_depends_on_the_selected_backend() {
        let transport = MockTransport::new();

        let tado = Tado::with_transport(transport.clone(), false);
        transport.push_response(json!({"type": "HEATING", "canSetTemperature": true}));
        assert!(tado.get_capabilities(ZoneId(1)).is_ok());
        transport.push_response(json!(null));
        assert!(tado.set_timetable(ZoneId(1), TimetableTypeId::SevenDay).is_ok());

        let tado_x = Tado::with_transport(transport.clone(), true);
        assert!(matches!(
            tado_x.get_capabilities(ZoneId(1)),
            Err(TadoApiError::NotSupported(_))
        ));
        assert!(matches!(
            tado_x.set_timetable(ZoneId(1), TimetableTypeId::SevenDay),
            Err(TadoApiError::NotSupported(_))
        ));
    }

    #[test]
    fn errors_propagate_unchanged() {
        let transport = MockTransport::new();
        transport.push_error(TadoApiError::Http {
            status: 422,
            message: "unprocessable".to_string(),
        });
        let tado = Tado::with_transport(transport.clone(), false);

        let err = tado.get_devices().unwrap_err();
        assert!(matches!(err, TadoApiError::Http { status: 422, .. }));
    }

    #[test]
    fn forwarded_reads_hit_the_shared_home_scope() {
        let transport = MockTransport::new();
        transport.push_response(json!({"homes": [{"id": 1234, "name": "home"}]}));
        let tado = Tado::with_transport(transport.clone(), true);

        let me = tado.get_me().unwrap();
        assert_eq!(me.homes.unwrap()[0].id, Some(crate::models::HomeId(1234)));
        // X-line accounts still answer `me` on the legacy endpoint.
        assert_eq!(transport.last_request().endpoint, Endpoint::MyApi);
    }
}
