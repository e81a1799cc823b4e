//! Normalized zone state.
//!
//! Both API generations report the state of a heating-control unit in their
//! own shape; this module maps either into one [`ZoneState`] record with a
//! fixed field set. Callers must never need to know which backend answered:
//! every field is present with a typed value or `None`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    HomePresence, HvacAction, HvacMode, Power, RoomState, ZoneId, ZoneOverlayTerminationTypeSkillBasedApp, ZoneSetting,
    ZoneStateData, ZoneType,
};
use crate::utils::serde_enum_name;

/// Temperature precision assumed for legacy zones whose sensor datapoint does
/// not report one.
const MY_API_DEFAULT_PRECISION: f64 = 0.1;

/// X-line rooms report temperatures to two decimals and no precision field.
const HOPS_PRECISION: f64 = 0.01;

/// Uniform snapshot of one zone/room, whichever generation produced it.
///
/// Timestamps are only available from the legacy API; the hops API reports
/// none, so they stay `None` there. Same for `link` (legacy) vs `connection`
/// (X line) — the generation-neutral signal is `available`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneState {
    pub zone_id: ZoneId,
    pub current_temp: Option<f64>,
    pub current_temp_timestamp: Option<DateTime<Utc>>,
    pub current_humidity: Option<f64>,
    pub current_humidity_timestamp: Option<DateTime<Utc>>,
    pub is_away: Option<bool>,
    pub tado_mode: Option<HomePresence>,
    pub available: bool,
    pub link: Option<String>,
    pub connection: Option<String>,
    pub power: Option<Power>,
    pub target_temp: Option<f64>,
    pub current_hvac_mode: HvacMode,
    pub current_hvac_action: HvacAction,
    pub current_fan_speed: Option<String>,
    pub current_swing_mode: Option<Power>,
    pub ac_power: Option<Power>,
    pub ac_power_timestamp: Option<DateTime<Utc>>,
    pub heating_power_percentage: Option<f64>,
    pub heating_power_timestamp: Option<DateTime<Utc>>,
    pub overlay_active: bool,
    pub overlay_termination_type: Option<ZoneOverlayTerminationTypeSkillBasedApp>,
    pub open_window: bool,
    pub open_window_detected: bool,
    pub preparation: bool,
    pub precision: f64,
}

impl ZoneState {
    /// Normalize a legacy (`my.tado.com`) zone state.
    pub fn from_zone_data(zone_id: ZoneId, data: &ZoneStateData) -> ZoneState {
        let sensor = data.sensor_data_points.as_ref();
        let inside = sensor.and_then(|s| s.inside_temperature.as_ref());
        let humidity = sensor.and_then(|s| s.humidity.as_ref());

        let setting = data.setting.as_ref();
        let power = setting.and_then(|s| s.power);
        let powered = power == Some(Power::On);
        let mode = setting.and_then(|s| s.mode);

        let activity = data.activity_data_points.as_ref();
        let heating_power = activity.and_then(|a| a.heating_power.as_ref());
        let heating_pct = heating_power.and_then(|h| h.percentage);
        let ac_power = activity.and_then(|a| a.ac_power.as_ref());
        let ac_on = ac_power.and_then(|p| p.value) == Some(Power::On);

        let overlay = data.overlay.as_ref();
        let termination = overlay.and_then(|o| o.termination.as_ref());
        let overlay_active = overlay.is_some();
        // `typeSkillBasedApp` is the richer vocabulary (NEXT_TIME_BLOCK only
        // exists there); fall back to the plain type for older responses.
        let overlay_termination_type =
            termination.and_then(|t| t.type_skill_based_app.or(t.r#type.map(Into::into)));

        let current_hvac_action = if !powered {
            HvacAction::Off
        } else if heating_pct.unwrap_or(0.0) > 0.0 {
            HvacAction::Heating
        } else if ac_on {
            match mode {
                Some(crate::models::AirConditioningMode::Heat) => HvacAction::Heating,
                Some(crate::models::AirConditioningMode::Dry) => HvacAction::Drying,
                Some(crate::models::AirConditioningMode::Fan) => HvacAction::Fan,
                _ => HvacAction::Cooling,
            }
        } else if setting.and_then(|s| s.r#type) == Some(ZoneType::HotWater) {
            HvacAction::HotWater
        } else {
            HvacAction::Idle
        };

        let current_hvac_mode = if !powered {
            HvacMode::Off
        } else if overlay_active {
            mode.map(HvacMode::from).unwrap_or(HvacMode::Heat)
        } else {
            HvacMode::SmartSchedule
        };

        let link = data.link.as_ref().and_then(|l| l.state.clone());
        let open_window_detected = data.open_window_detected.unwrap_or(false);

        ZoneState {
            zone_id,
            current_temp: inside.and_then(|t| t.celsius),
            current_temp_timestamp: inside.and_then(|t| t.timestamp),
            current_humidity: humidity.and_then(|h| h.percentage),
            current_humidity_timestamp: humidity.and_then(|h| h.timestamp),
            is_away: data.tado_mode.map(|m| m == HomePresence::Away),
            tado_mode: data.tado_mode,
            available: link.as_deref() == Some("ONLINE"),
            link,
            connection: None,
            power,
            target_temp: if powered {
                setting.and_then(|s| s.temperature.as_ref()).and_then(|t| t.celsius)
            } else {
                None
            },
            current_hvac_mode,
            current_hvac_action,
            current_fan_speed: setting.and_then(fan_speed),
            current_swing_mode: setting.and_then(|s| s.swing).or(Some(Power::Off)),
            ac_power: ac_power.and_then(|p| p.value),
            ac_power_timestamp: ac_power.and_then(|p| p.timestamp),
            heating_power_percentage: heating_pct,
            heating_power_timestamp: heating_power.and_then(|h| h.timestamp),
            overlay_active,
            overlay_termination_type,
            open_window: data.open_window.is_some() || open_window_detected,
            open_window_detected,
            preparation: data.preparation.is_some(),
            precision: inside
                .and_then(|t| t.precision.as_ref())
                .and_then(|p| p.celsius)
                .unwrap_or(MY_API_DEFAULT_PRECISION),
        }
    }

    /// Normalize an X-line (`hops.tado.com`) room state.
    pub fn from_room_data(zone_id: ZoneId, data: &RoomState) -> ZoneState {
        let sensor = data.sensor_data_points.as_ref();
        let inside = sensor.and_then(|s| s.inside_temperature.as_ref());
        let humidity = sensor.and_then(|s| s.humidity.as_ref());

        let setting = data.setting.as_ref();
        let power = setting.and_then(|s| s.power);
        let powered = power == Some(Power::On);

        let termination = data.manual_control_termination.as_ref();
        let overlay_active = termination.is_some();
        let heating_pct = data.heating_power.as_ref().and_then(|h| h.percentage);

        let current_hvac_action = if !powered {
            HvacAction::Off
        } else if heating_pct.unwrap_or(0.0) > 0.0 {
            HvacAction::Heating
        } else {
            HvacAction::Idle
        };

        let current_hvac_mode = if !powered {
            HvacMode::Off
        } else if overlay_active {
            HvacMode::Heat
        } else {
            HvacMode::SmartSchedule
        };

        let connection = data.connection.as_ref().and_then(|c| c.state.clone());
        let open_window_detected = data.open_window.as_ref().and_then(|w| w.activated).unwrap_or(false);

        ZoneState {
            zone_id,
            current_temp: inside.and_then(|t| t.value),
            current_temp_timestamp: None,
            current_humidity: humidity.and_then(|h| h.percentage),
            current_humidity_timestamp: None,
            is_away: None,
            tado_mode: None,
            available: connection.as_deref() == Some("CONNECTED"),
            link: None,
            connection,
            power,
            target_temp: if powered {
                setting.and_then(|s| s.temperature.as_ref()).and_then(|t| t.value)
            } else {
                None
            },
            current_hvac_mode,
            current_hvac_action,
            current_fan_speed: None,
            current_swing_mode: Some(Power::Off),
            ac_power: None,
            ac_power_timestamp: None,
            heating_power_percentage: heating_pct,
            heating_power_timestamp: None,
            overlay_active,
            overlay_termination_type: termination.and_then(|t| t.r#type),
            open_window: open_window_detected,
            open_window_detected,
            preparation: false,
            precision: HOPS_PRECISION,
        }
    }
}

fn fan_speed(setting: &ZoneSetting) -> Option<String> {
    setting
        .fan_speed
        .clone()
        .or_else(|| setting.fan_level.and_then(|level| serde_enum_name(&level)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AirConditioningMode;
    use serde_json::json;

    fn legacy_fixture() -> ZoneStateData {
        let json = std::fs::read_to_string("tests/data/zone_state.heating.manual_mode.json").expect("fixture present");
        serde_json::from_str(&json).expect("parse zone state")
    }

    fn room_fixture() -> RoomState {
        let json = std::fs::read_to_string("tests/data/room_state.auto_mode.json").expect("fixture present");
        serde_json::from_str(&json).expect("parse room state")
    }

    #[test]
    fn legacy_heating_manual_mode() {
        let state = ZoneState::from_zone_data(ZoneId(1), &legacy_fixture());

        assert_eq!(state.zone_id, ZoneId(1));
        assert_eq!(state.current_temp, Some(24.0));
        assert!(state.current_temp_timestamp.is_some());
        assert_eq!(state.current_humidity, Some(62.0));
        assert_eq!(state.is_away, Some(false));
        assert_eq!(state.tado_mode, Some(HomePresence::Home));
        assert!(state.available);
        assert_eq!(state.link.as_deref(), Some("ONLINE"));
        assert_eq!(state.connection, None);
        assert_eq!(state.power, Some(Power::On));
        assert_eq!(state.target_temp, Some(20.5));
        assert_eq!(state.current_hvac_mode, HvacMode::Heat);
        assert_eq!(state.current_hvac_action, HvacAction::Heating);
        assert_eq!(state.current_fan_speed, None);
        assert_eq!(state.current_swing_mode, Some(Power::Off));
        assert_eq!(state.ac_power, None);
        assert_eq!(state.heating_power_percentage, Some(100.0));
        assert!(state.heating_power_timestamp.is_some());
        assert!(state.overlay_active);
        assert_eq!(
            state.overlay_termination_type,
            Some(ZoneOverlayTerminationTypeSkillBasedApp::Manual)
        );
        assert!(!state.open_window);
        assert!(!state.open_window_detected);
        assert!(!state.preparation);
        assert_eq!(state.precision, 0.1);
    }

    #[test]
    fn legacy_smart_schedule_without_overlay() {
        let mut data = legacy_fixture();
        data.overlay = None;
        data.overlay_type = None;

        let state = ZoneState::from_zone_data(ZoneId(1), &data);
        assert_eq!(state.current_hvac_mode, HvacMode::SmartSchedule);
        assert!(!state.overlay_active);
        assert_eq!(state.overlay_termination_type, None);
    }

    #[test]
    fn legacy_powered_off_zone_reports_off() {
        let mut data = legacy_fixture();
        if let Some(setting) = data.setting.as_mut() {
            setting.power = Some(Power::Off);
        }
        if let Some(activity) = data.activity_data_points.as_mut()
            && let Some(heating) = activity.heating_power.as_mut()
        {
            heating.percentage = Some(0.0);
        }

        let state = ZoneState::from_zone_data(ZoneId(1), &data);
        assert_eq!(state.current_hvac_mode, HvacMode::Off);
        assert_eq!(state.current_hvac_action, HvacAction::Off);
        assert_eq!(state.power, Some(Power::Off));
        // A powered-off zone has no target.
        assert_eq!(state.target_temp, None);
    }

    #[test]
    fn legacy_idle_when_powered_without_heating() {
        let mut data = legacy_fixture();
        data.overlay = None;
        if let Some(activity) = data.activity_data_points.as_mut()
            && let Some(heating) = activity.heating_power.as_mut()
        {
            heating.percentage = Some(0.0);
        }

        let state = ZoneState::from_zone_data(ZoneId(1), &data);
        assert_eq!(state.current_hvac_action, HvacAction::Idle);
    }

    #[test]
    fn legacy_ac_cooling_with_fan_speed() {
        let data: ZoneStateData = serde_json::from_value(json!({
            "tadoMode": "AWAY",
            "setting": {
                "type": "AIR_CONDITIONING",
                "power": "ON",
                "mode": "COOL",
                "fanSpeed": "AUTO",
                "swing": "ON",
                "temperature": {"celsius": 17.0, "fahrenheit": 62.6}
            },
            "overlay": {
                "type": "MANUAL",
                "termination": {"type": "TADO_MODE", "typeSkillBasedApp": "TADO_MODE"}
            },
            "link": {"state": "ONLINE"},
            "activityDataPoints": {
                "acPower": {"type": "POWER", "value": "ON", "timestamp": "2024-03-07T15:08:45.401Z"}
            },
            "sensorDataPoints": {
                "insideTemperature": {
                    "celsius": 24.76,
                    "fahrenheit": 76.57,
                    "timestamp": "2024-03-07T15:08:45.401Z",
                    "type": "TEMPERATURE",
                    "precision": {"celsius": 0.1, "fahrenheit": 0.1}
                },
                "humidity": {"type": "PERCENTAGE", "percentage": 60.9, "timestamp": "2024-03-07T15:08:45.401Z"}
            }
        }))
        .expect("parse ac state");

        let state = ZoneState::from_zone_data(ZoneId(3), &data);
        assert_eq!(state.current_hvac_action, HvacAction::Cooling);
        assert_eq!(state.current_hvac_mode, HvacMode::Cool);
        assert_eq!(state.current_fan_speed.as_deref(), Some("AUTO"));
        assert_eq!(state.current_swing_mode, Some(Power::On));
        assert_eq!(state.ac_power, Some(Power::On));
        assert!(state.ac_power_timestamp.is_some());
        assert_eq!(state.is_away, Some(true));
        assert_eq!(
            state.overlay_termination_type,
            Some(ZoneOverlayTerminationTypeSkillBasedApp::TadoMode)
        );
    }

    #[test]
    fn legacy_ac_heat_mode_maps_to_heating_action() {
        let data: ZoneStateData = serde_json::from_value(json!({
            "setting": {"type": "AIR_CONDITIONING", "power": "ON", "mode": "HEAT", "fanLevel": "LEVEL2"},
            "activityDataPoints": {"acPower": {"value": "ON"}}
        }))
        .expect("parse ac state");

        let state = ZoneState::from_zone_data(ZoneId(3), &data);
        assert_eq!(state.current_hvac_action, HvacAction::Heating);
        assert_eq!(state.current_fan_speed.as_deref(), Some("LEVEL2"));
        assert_eq!(state.current_hvac_mode, HvacMode::from(AirConditioningMode::Heat));
    }

    #[test]
    fn legacy_hot_water_zone_powered_without_activity() {
        let data: ZoneStateData = serde_json::from_value(json!({
            "setting": {"type": "HOT_WATER", "power": "ON", "temperature": {"celsius": 55.0}},
            "link": {"state": "ONLINE"}
        }))
        .expect("parse hot water state");

        let state = ZoneState::from_zone_data(ZoneId(0), &data);
        assert_eq!(state.current_hvac_action, HvacAction::HotWater);
        assert_eq!(state.target_temp, Some(55.0));
    }

    #[test]
    fn legacy_open_window_flags() {
        let mut data = legacy_fixture();
        data.open_window_detected = Some(true);

        let state = ZoneState::from_zone_data(ZoneId(1), &data);
        assert!(state.open_window);
        assert!(state.open_window_detected);

        data.open_window_detected = None;
        data.open_window = serde_json::from_value(json!({
            "detectedTime": "2024-03-07T15:08:45Z",
            "durationInSeconds": 900,
            "expiry": "2024-03-07T15:23:45Z",
            "remainingTimeInSeconds": 600
        }))
        .ok();
        let state = ZoneState::from_zone_data(ZoneId(1), &data);
        assert!(state.open_window);
        assert!(!state.open_window_detected);
    }

    #[test]
    fn legacy_offline_zone_is_unavailable() {
        let mut data = legacy_fixture();
        data.link = serde_json::from_value(json!({"state": "OFFLINE", "reason": {"code": "gatewayOffline"}})).ok();

        let state = ZoneState::from_zone_data(ZoneId(1), &data);
        assert!(!state.available);
        assert_eq!(state.link.as_deref(), Some("OFFLINE"));
    }

    #[test]
    fn room_auto_mode() {
        let state = ZoneState::from_room_data(ZoneId(1), &room_fixture());

        assert_eq!(state.zone_id, ZoneId(1));
        assert_eq!(state.ac_power, None);
        assert_eq!(state.ac_power_timestamp, None);
        assert!(state.available);
        assert_eq!(state.connection.as_deref(), Some("CONNECTED"));
        assert_eq!(state.current_fan_speed, None);
        assert_eq!(state.current_humidity, Some(38.0));
        assert_eq!(state.current_humidity_timestamp, None);
        assert_eq!(state.current_hvac_action, HvacAction::Heating);
        assert_eq!(state.current_hvac_mode, HvacMode::SmartSchedule);
        assert_eq!(state.current_swing_mode, Some(Power::Off));
        assert_eq!(state.current_temp, Some(24.0));
        assert_eq!(state.current_temp_timestamp, None);
        assert_eq!(state.heating_power_percentage, Some(100.0));
        assert_eq!(state.heating_power_timestamp, None);
        assert_eq!(state.is_away, None);
        assert_eq!(state.link, None);
        assert!(!state.open_window);
        assert!(!state.overlay_active);
        assert_eq!(state.overlay_termination_type, None);
        assert_eq!(state.power, Some(Power::On));
        assert_eq!(state.precision, 0.01);
        assert!(!state.preparation);
        assert_eq!(state.tado_mode, None);
        assert_eq!(state.target_temp, Some(22.0));
    }

    #[test]
    fn room_manual_mode_reports_overlay() {
        let mut data = room_fixture();
        data.manual_control_termination = serde_json::from_value(json!({
            "type": "NEXT_TIME_BLOCK",
            "remainingTimeInSeconds": 1800,
            "projectedExpiry": "2024-03-07T22:00:00Z"
        }))
        .ok();
        if let Some(setting) = data.setting.as_mut() {
            setting.temperature = Some(crate::models::RoomTemperature { value: Some(25.5) });
        }

        let state = ZoneState::from_room_data(ZoneId(1), &data);
        assert!(state.overlay_active);
        assert_eq!(
            state.overlay_termination_type,
            Some(ZoneOverlayTerminationTypeSkillBasedApp::NextTimeBlock)
        );
        assert_eq!(state.current_hvac_mode, HvacMode::Heat);
        assert_eq!(state.current_hvac_action, HvacAction::Heating);
        assert_eq!(state.target_temp, Some(25.5));
    }

    #[test]
    fn room_manual_off() {
        let mut data = room_fixture();
        data.manual_control_termination = serde_json::from_value(json!({"type": "NEXT_TIME_BLOCK"})).ok();
        data.setting = serde_json::from_value(json!({"power": "OFF", "temperature": null})).ok();
        if let Some(heating) = data.heating_power.as_mut() {
            heating.percentage = Some(0.0);
        }

        let state = ZoneState::from_room_data(ZoneId(1), &data);
        assert_eq!(state.current_hvac_mode, HvacMode::Off);
        assert_eq!(state.current_hvac_action, HvacAction::Off);
        assert_eq!(state.power, Some(Power::Off));
        assert_eq!(state.target_temp, None);
        assert!(state.overlay_active);
    }

    #[test]
    fn room_open_window_activated() {
        let mut data = room_fixture();
        data.open_window = serde_json::from_value(json!({"activated": true, "expiryInSeconds": 880})).ok();

        let state = ZoneState::from_room_data(ZoneId(1), &data);
        assert!(state.open_window);
        assert!(state.open_window_detected);
    }

    #[test]
    fn room_disconnected_is_unavailable() {
        let mut data = room_fixture();
        data.connection = serde_json::from_value(json!({"state": "DISCONNECTED"})).ok();

        let state = ZoneState::from_room_data(ZoneId(1), &data);
        assert!(!state.available);
        assert_eq!(state.connection.as_deref(), Some("DISCONNECTED"));
    }
}
