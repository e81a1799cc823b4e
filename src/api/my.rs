//! Backend for pre-X accounts: the legacy zone model on `my.tado.com`.

use chrono::NaiveDate;
use serde_json::{Value, json};
use std::rc::Rc;

use crate::api::{HomeApi, TadoApi};
use crate::error::TadoApiError;
use crate::http::{TadoRequest, Transport};
use crate::models::{
    Climate, DayReport, DayType, DefaultZoneOverlay, HeatingCircuitId, TimetableType, TimetableTypeId,
    ZoneCapabilities, ZoneControl, ZoneId, ZoneOverlayTerminationTypeSkillBasedApp, ZoneStateData,
};
use crate::utils::{from_value, serde_enum_name};
use crate::zone_state::ZoneState;

pub struct MyApi {
    transport: Rc<dyn Transport>,
    home: HomeApi,
}

impl MyApi {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        MyApi {
            home: HomeApi::new(transport.clone()),
            transport,
        }
    }

    fn request(&self, req: &TadoRequest) -> Result<Value, TadoApiError> {
        self.transport.request(req)
    }

    fn get_state_data(&self, zone: ZoneId) -> Result<ZoneStateData, TadoApiError> {
        from_value(self.request(&TadoRequest::get(format!("zones/{}/state", zone.0)))?)
    }

    fn day_path(day: DayType) -> String {
        serde_enum_name(&day).unwrap_or_default()
    }
}

impl TadoApi for MyApi {
    fn home(&self) -> &HomeApi {
        &self.home
    }

    fn get_devices(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("devices"))
    }

    fn get_zones(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("zones"))
    }

    fn get_zone_states(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("zoneStates"))
    }

    fn get_state(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get(format!("zones/{}/state", zone.0)))
    }

    fn get_zone_state(&self, zone: ZoneId) -> Result<ZoneState, TadoApiError> {
        let data = self.get_state_data(zone)?;
        Ok(ZoneState::from_zone_data(zone, &data))
    }

    fn get_climate(&self, zone: ZoneId) -> Result<Climate, TadoApiError> {
        let data = self.get_state_data(zone)?;
        let sensor = data.sensor_data_points.as_ref();
        Ok(Climate {
            temperature: sensor
                .and_then(|s| s.inside_temperature.as_ref())
                .and_then(|t| t.celsius),
            humidity: sensor.and_then(|s| s.humidity.as_ref()).and_then(|h| h.percentage),
        })
    }

    fn get_capabilities(&self, zone: ZoneId) -> Result<ZoneCapabilities, TadoApiError> {
        from_value(self.request(&TadoRequest::get(format!("zones/{}/capabilities", zone.0)))?)
    }

    fn get_timetable(&self, zone: ZoneId) -> Result<TimetableTypeId, TadoApiError> {
        let timetable: TimetableType =
            from_value(self.request(&TadoRequest::get(format!("zones/{}/schedule/activeTimetable", zone.0)))?)?;
        timetable
            .id
            .ok_or_else(|| TadoApiError::Json("activeTimetable response is missing an id".to_string()))
    }

    fn set_timetable(&self, zone: ZoneId, timetable: TimetableTypeId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put(
            format!("zones/{}/schedule/activeTimetable", zone.0),
            json!({"id": timetable}),
        ))
    }

    fn get_schedule(
        &self,
        zone: ZoneId,
        timetable: TimetableTypeId,
        day: Option<DayType>,
    ) -> Result<Value, TadoApiError> {
        let command = match day {
            Some(day) => format!(
                "zones/{}/schedule/timetables/{}/blocks/{}",
                zone.0,
                timetable.as_i32(),
                Self::day_path(day)
            ),
            None => format!("zones/{}/schedule/timetables/{}/blocks", zone.0, timetable.as_i32()),
        };
        self.request(&TadoRequest::get(command))
    }

    fn set_schedule(
        &self,
        zone: ZoneId,
        timetable: TimetableTypeId,
        day: DayType,
        data: Value,
    ) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put(
            format!(
                "zones/{}/schedule/timetables/{}/blocks/{}",
                zone.0,
                timetable.as_i32(),
                Self::day_path(day)
            ),
            data,
        ))
    }

    fn get_historic(&self, zone: ZoneId, date: NaiveDate) -> Result<DayReport, TadoApiError> {
        let mut req = TadoRequest::get(format!("zones/{}/dayReport", zone.0));
        req.params.push(("date".to_string(), date.format("%Y-%m-%d").to_string()));
        from_value(self.request(&req)?)
    }

    fn get_zone_overlay_default(&self, zone: ZoneId) -> Result<DefaultZoneOverlay, TadoApiError> {
        from_value(self.request(&TadoRequest::get(format!("zones/{}/defaultOverlay", zone.0)))?)
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
            setting["temperature"] = json!({"celsius": temperature});
        }
        let mut termination = json!({"typeSkillBasedApp": overlay_mode});
        if let Some(duration) = duration_seconds {
            termination["durationInSeconds"] = json!(duration);
        }
        self.request(&TadoRequest::put(
            format!("zones/{}/overlay", zone.0),
            json!({"setting": setting, "termination": termination}),
        ))
    }

    fn reset_zone_overlay(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::delete(format!("zones/{}/overlay", zone.0)))
    }

    fn get_window_state(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        let data = self.get_state_data(zone)?;
        Ok(serde_json::to_value(data.open_window)?)
    }

    fn get_open_window_detected(&self, zone: ZoneId) -> Result<bool, TadoApiError> {
        let data = self.get_state_data(zone)?;
        Ok(data.open_window_detected.unwrap_or(false))
    }

    fn set_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::post(format!("zones/{}/state/openWindow/activate", zone.0)))
    }

    fn reset_open_window(&self, zone: ZoneId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::delete(format!("zones/{}/state/openWindow", zone.0)))
    }

    fn get_zone_control(&self, zone: ZoneId) -> Result<ZoneControl, TadoApiError> {
        from_value(self.request(&TadoRequest::get(format!("zones/{}/control", zone.0)))?)
    }

    fn set_zone_heating_circuit(&self, zone: ZoneId, circuit: HeatingCircuitId) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put(
            format!("zones/{}/control/heatingCircuit", zone.0),
            json!({"circuitNumber": circuit}),
        ))
    }

    fn get_device_info(&self, serial: &str) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::default().for_device(serial))
    }

    fn set_temp_offset(&self, serial: &str, offset_celsius: f64) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put("temperatureOffset", json!({"celsius": offset_celsius})).for_device(serial))
    }

    fn set_child_lock(&self, serial: &str, enabled: bool) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put("childLock", json!({"childLockEnabled": enabled})).for_device(serial))
    }
}
