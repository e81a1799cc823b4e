//! Backend for X-line accounts: the room/device model on `hops.tado.com`.
//!
//! Rooms replace zones and devices are addressed by serial under
//! `roomsAndDevices`; home-level endpoints stay on the legacy host and come
//! from the embedded [`HomeApi`]. Legacy-only operations fail eagerly with
//! `NotSupported` — that incompatibility is part of the API surface, not a
//! defect.

use chrono::NaiveDate;
use http::Method;
use serde_json::{Value, json};
use std::rc::Rc;

use crate::api::{HomeApi, TadoApi};
use crate::error::TadoApiError;
use crate::http::{Endpoint, TadoRequest, Transport};
use crate::models::{
    Climate, DayReport, DayType, DefaultZoneOverlay, HeatingCircuitId, RoomState, TimetableTypeId, ZoneCapabilities,
    ZoneControl, ZoneId, ZoneOverlayTerminationTypeSkillBasedApp,
};
use crate::utils::from_value;
use crate::zone_state::ZoneState;

/// Precision the hops API expects inside manual-control temperature blocks.
const OVERLAY_TEMPERATURE_PRECISION: f64 = 0.1;

pub struct HopsApi {
    transport: Rc<dyn Transport>,
    home: HomeApi,
}

impl HopsApi {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        HopsApi {
            home: HomeApi::new(transport.clone()),
            transport,
        }
    }

    fn request(&self, req: &TadoRequest) -> Result<Value, TadoApiError> {
        self.transport.request(req)
    }

    fn get_room_state(&self, zone: ZoneId) -> Result<RoomState, TadoApiError> {
        from_value(self.request(&TadoRequest::get(format!("rooms/{}", zone.0)).via(Endpoint::Hops))?)
    }
}

impl TadoApi for HopsApi {
    fn home(&self) -> &HomeApi {
        &self.home
    }

    fn get_devices(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("roomsAndDevices").via(Endpoint::Hops))
    }

    fn get_zones(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("roomsAndDevices").via(Endpoint::Hops))
    }

    fn get_zone_states(&self) -> Result<Value, TadoApiError> {
        // The hops API has no separate bulk-state route; rooms-and-devices
        // carries the room states.
        self.get_devices()
    }

    fn get_state(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get(format!("rooms/{}", zone.0)).via(Endpoint::Hops))
    }

    fn get_zone_state(&self, zone: ZoneId) -> Result<ZoneState, TadoApiError> {
        let data = self.get_room_state(zone)?;
        Ok(ZoneState::from_room_data(zone, &data))
    }

    fn get_climate(&self, zone: ZoneId) -> Result<Climate, TadoApiError> {
        let data = self.get_room_state(zone)?;
        let sensor = data.sensor_data_points.as_ref();
        Ok(Climate {
            temperature: sensor.and_then(|s| s.inside_temperature.as_ref()).and_then(|t| t.value),
            humidity: sensor.and_then(|s| s.humidity.as_ref()).and_then(|h| h.percentage),
        })
    }

    fn get_capabilities(&self, _zone: ZoneId) -> Result<ZoneCapabilities, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "get_capabilities is not available on X-line homes",
        ))
    }

    fn get_timetable(&self, _zone: ZoneId) -> Result<TimetableTypeId, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "X-line schedules have no timetable types",
        ))
    }

    fn set_timetable(&self, _zone: ZoneId, _timetable: TimetableTypeId) -> Result<Value, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "X-line schedules have no timetable types",
        ))
    }

    fn get_schedule(
        &self,
        zone: ZoneId,
        _timetable: TimetableTypeId,
        _day: Option<DayType>,
    ) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get(format!("rooms/{}/schedule", zone.0)).via(Endpoint::Hops))
    }

    fn set_schedule(
        &self,
        zone: ZoneId,
        _timetable: TimetableTypeId,
        _day: DayType,
        data: Value,
    ) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put(format!("rooms/{}/schedule", zone.0), data).via(Endpoint::Hops))
    }

    fn get_historic(&self, _zone: ZoneId, _date: NaiveDate) -> Result<DayReport, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "day reports are not available on X-line homes",
        ))
    }

    fn get_zone_overlay_default(&self, _zone: ZoneId) -> Result<DefaultZoneOverlay, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "default overlays are not available on X-line homes",
        ))
    }

    fn set_zone_overlay(
        &self,
        zone: ZoneId,
        overlay_mode: ZoneOverlayTerminationTypeSkillBasedApp,
        set_temp: Option<f64>,
        duration_seconds: Option<i64>,
    ) -> Result<Value, TadoApiError> {
        let mut setting = json!({"type": "HEATING", "power": "ON"});
        if let Some(temperature) = set_temp {
            setting["temperature"] = json!({
                "value": temperature,
                "valueRaw": temperature,
                "precision": OVERLAY_TEMPERATURE_PRECISION,
            });
        }
        let mut termination = json!({"type": overlay_mode});
        if let Some(duration) = duration_seconds {
            termination["durationInSeconds"] = json!(duration);
        }
        self.request(
            &TadoRequest::put(
                format!("rooms/{}/manualControl", zone.0),
                json!({"setting": setting, "termination": termination}),
            )
            .via(Endpoint::Hops),
        )
    }

    fn reset_zone_overlay(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest {
            command: Some(format!("rooms/{}/resumeSchedule", zone.0)),
            action: Method::PUT,
            endpoint: Endpoint::Hops,
            ..TadoRequest::default()
        })
    }

    fn get_window_state(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        let data = self.get_room_state(zone)?;
        Ok(serde_json::to_value(data.open_window)?)
    }

    fn get_open_window_detected(&self, zone: ZoneId) -> Result<bool, TadoApiError> {
        let data = self.get_room_state(zone)?;
        Ok(data.open_window.and_then(|w| w.activated).unwrap_or(false))
    }

    fn set_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest {
            command: Some(format!("rooms/{}/openWindow", zone.0)),
            action: Method::PUT,
            endpoint: Endpoint::Hops,
            ..TadoRequest::default()
        })
    }

    fn reset_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::delete(format!("rooms/{}/openWindow", zone.0)).via(Endpoint::Hops))
    }

    fn get_zone_control(&self, _zone: ZoneId) -> Result<ZoneControl, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "zone control is not available on X-line homes",
        ))
    }

    fn set_zone_heating_circuit(&self, _zone: ZoneId, _circuit: HeatingCircuitId) -> Result<Value, TadoApiError> {
        Err(TadoApiError::NotSupported(
            "heating circuits are not available on X-line homes",
        ))
    }

    fn get_device_info(&self, serial: &str) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get(format!("roomsAndDevices/devices/{}", serial)).via(Endpoint::Hops))
    }

    fn set_temp_offset(&self, serial: &str, offset_celsius: f64) -> Result<Value, TadoApiError> {
        self.request(
            &TadoRequest::put(
                format!("roomsAndDevices/devices/{}", serial),
                json!({"temperatureOffset": offset_celsius}),
            )
            .via(Endpoint::Hops),
        )
    }

    fn set_child_lock(&self, serial: &str, enabled: bool) -> Result<Value, TadoApiError> {
        self.request(
            &TadoRequest::put(
                format!("roomsAndDevices/devices/{}", serial),
                json!({"childLockEnabled": enabled}),
            )
            .via(Endpoint::Hops),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use http::Method;

    fn hops_api(transport: &Rc<MockTransport>) -> HopsApi {
        HopsApi::new(transport.clone())
    }

    #[test]
    fn set_zone_overlay_builds_the_manual_control_payload() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        api.set_zone_overlay(
            ZoneId(1),
            ZoneOverlayTerminationTypeSkillBasedApp::Manual,
            Some(22.0),
            Some(3600),
        )
        .unwrap();

        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/manualControl"));
        assert_eq!(req.action, Method::PUT);
        assert_eq!(req.endpoint, Endpoint::Hops);
        assert_eq!(
            req.payload,
            Some(json!({
                "setting": {
                    "type": "HEATING",
                    "power": "ON",
                    "temperature": {"value": 22.0, "valueRaw": 22.0, "precision": 0.1}
                },
                "termination": {"type": "MANUAL", "durationInSeconds": 3600}
            }))
        );
    }

    #[test]
    fn reset_zone_overlay_resumes_the_schedule() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        api.reset_zone_overlay(ZoneId(1)).unwrap();

        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/resumeSchedule"));
        assert_eq!(req.action, Method::PUT);
        assert_eq!(req.payload, None);
    }

    #[test]
    fn open_window_routes_are_room_keyed() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        api.set_open_window(ZoneId(1)).unwrap();
        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/openWindow"));
        assert_eq!(req.action, Method::PUT);

        api.reset_open_window(ZoneId(1)).unwrap();
        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/openWindow"));
        assert_eq!(req.action, Method::DELETE);
    }

    #[test]
    fn schedule_routes_ignore_timetable_and_day() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        api.set_schedule(
            ZoneId(1),
            TimetableTypeId::SevenDay,
            DayType::Monday,
            json!({"start": "00:00", "end": "07:05"}),
        )
        .unwrap();

        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1/schedule"));
        assert_eq!(req.action, Method::PUT);
        assert_eq!(req.payload, Some(json!({"start": "00:00", "end": "07:05"})));
    }

    #[test]
    fn device_endpoints_use_rooms_and_devices() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        api.set_temp_offset("VA1234567890", 2.0).unwrap();
        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("roomsAndDevices/devices/VA1234567890"));
        assert_eq!(req.action, Method::PUT);
        assert_eq!(req.endpoint, Endpoint::Hops);
        assert_eq!(req.payload, Some(json!({"temperatureOffset": 2.0})));

        api.set_child_lock("VA1234567890", true).unwrap();
        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("roomsAndDevices/devices/VA1234567890"));
        assert_eq!(req.payload, Some(json!({"childLockEnabled": true})));
    }

    #[test]
    fn legacy_only_operations_fail_eagerly() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        assert!(matches!(
            api.get_capabilities(ZoneId(1)),
            Err(TadoApiError::NotSupported(_))
        ));
        assert!(matches!(
            api.set_timetable(ZoneId(1), TimetableTypeId::OneDay),
            Err(TadoApiError::NotSupported(_))
        ));
        assert!(matches!(api.get_timetable(ZoneId(1)), Err(TadoApiError::NotSupported(_))));
        assert!(matches!(
            api.set_zone_heating_circuit(ZoneId(1), HeatingCircuitId(2)),
            Err(TadoApiError::NotSupported(_))
        ));
        // Nothing hit the wire.
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn get_zone_state_normalizes_the_room_state() {
        let transport = MockTransport::new();
        let json = std::fs::read_to_string("tests/data/room_state.auto_mode.json").expect("fixture present");
        transport.push_response(serde_json::from_str(&json).expect("parse fixture"));
        let api = hops_api(&transport);

        let state = api.get_zone_state(ZoneId(1)).unwrap();
        assert_eq!(state.current_temp, Some(24.0));
        assert_eq!(state.precision, 0.01);

        let req = transport.last_request();
        assert_eq!(req.command.as_deref(), Some("rooms/1"));
        assert_eq!(req.endpoint, Endpoint::Hops);
    }

    #[test]
    fn rooms_and_devices_serves_the_inventory_reads() {
        let transport = MockTransport::new();
        let api = hops_api(&transport);

        api.get_devices().unwrap();
        assert_eq!(transport.last_request().command.as_deref(), Some("roomsAndDevices"));

        api.get_zones().unwrap();
        assert_eq!(transport.last_request().command.as_deref(), Some("roomsAndDevices"));

        api.get_zone_states().unwrap();
        assert_eq!(transport.last_request().command.as_deref(), Some("roomsAndDevices"));

        api.get_device_info("VA1234567890").unwrap();
        assert_eq!(
            transport.last_request().command.as_deref(),
            Some("roomsAndDevices/devices/VA1234567890")
        );
    }
}
