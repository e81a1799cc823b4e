//! Home-level operations shared by both API generations.
//!
//! X-line accounts keep answering these on the legacy host, so the two
//! backends embed one [`HomeApi`] instead of duplicating the routes.

use chrono::NaiveDate;
use log::debug;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::TadoApiError;
use crate::http::{Domain, Endpoint, TadoRequest, Transport};
use crate::models::{
    AirComfort, BoilerMaxOutputTemperature, BoilerWiringInstallationState, HeatingCircuit, HomePresence, HomeState,
    MobileDevice, User, Weather,
};
use crate::utils::from_value;

pub struct HomeApi {
    transport: Rc<dyn Transport>,
    /// Whether the home supports auto geofencing; learned lazily from the
    /// home state and reused by the presence controls.
    auto_geofencing_supported: RefCell<Option<bool>>,
}

impl HomeApi {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        HomeApi {
            transport,
            auto_geofencing_supported: RefCell::new(None),
        }
    }

    fn request(&self, req: &TadoRequest) -> Result<Value, TadoApiError> {
        self.transport.request(req)
    }

    pub fn get_me(&self) -> Result<User, TadoApiError> {
        let value = self.request(&TadoRequest {
            domain: Domain::Me,
            ..TadoRequest::default()
        })?;
        from_value(value)
    }

    pub fn get_users(&self) -> Result<Vec<User>, TadoApiError> {
        from_value(self.request(&TadoRequest::get("users"))?)
    }

    pub fn get_mobile_devices(&self) -> Result<Vec<MobileDevice>, TadoApiError> {
        from_value(self.request(&TadoRequest::get("mobileDevices"))?)
    }

    /// Fetch the home's presence state and remember whether auto geofencing
    /// is supported.
    pub fn get_home_state(&self) -> Result<HomeState, TadoApiError> {
        let state: HomeState = from_value(self.request(&TadoRequest::get("state"))?)?;

        // The API signals geofencing capability through one of two buttons;
        // a home showing neither cannot switch to auto mode.
        let supported = match (
            state.show_switch_to_auto_geofencing_button,
            state.show_home_presence_switch_button,
        ) {
            (Some(auto_button), _) => auto_button,
            (None, Some(manual_button)) => !manual_button,
            (None, None) => false,
        };
        *self.auto_geofencing_supported.borrow_mut() = Some(supported);
        debug!("home geofencing auto mode supported: {}", supported);

        Ok(state)
    }

    pub fn get_auto_geofencing_supported(&self) -> Result<bool, TadoApiError> {
        if let Some(supported) = *self.auto_geofencing_supported.borrow() {
            return Ok(supported);
        }
        self.get_home_state()?;
        Ok(self.auto_geofencing_supported.borrow().unwrap_or(false))
    }

    pub fn change_presence(&self, presence: HomePresence) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::put("presenceLock", json!({"homePresence": presence})))
    }

    pub fn set_home(&self) -> Result<Value, TadoApiError> {
        self.change_presence(HomePresence::Home)
    }

    pub fn set_away(&self) -> Result<Value, TadoApiError> {
        self.change_presence(HomePresence::Away)
    }

    /// Return presence control to geofencing. Refused client-side when the
    /// home is not geofencing-capable.
    pub fn set_auto(&self) -> Result<Value, TadoApiError> {
        if self.get_auto_geofencing_supported()? {
            self.request(&TadoRequest::delete("presenceLock"))
        } else {
            Err(TadoApiError::NotSupported(
                "home does not support automatic geofencing",
            ))
        }
    }

    pub fn get_weather(&self) -> Result<Weather, TadoApiError> {
        from_value(self.request(&TadoRequest::get("weather"))?)
    }

    pub fn get_air_comfort(&self) -> Result<AirComfort, TadoApiError> {
        from_value(self.request(&TadoRequest::get("airComfort"))?)
    }

    pub fn get_heating_circuits(&self) -> Result<Vec<HeatingCircuit>, TadoApiError> {
        from_value(self.request(&TadoRequest::get("heatingCircuits"))?)
    }

    pub fn get_running_times(&self, date: NaiveDate) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get(format!("runningTimes/{}", date.format("%Y-%m-%d"))).via(Endpoint::Minder))
    }

    pub fn get_eiq_tariffs(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("tariffs").via(Endpoint::Eiq))
    }

    pub fn get_eiq_meter_readings(&self) -> Result<Value, TadoApiError> {
        self.request(&TadoRequest::get("meterReadings").via(Endpoint::Eiq))
    }

    pub fn set_eiq_meter_readings(&self, date: NaiveDate, reading: i64) -> Result<Value, TadoApiError> {
        let mut req = TadoRequest::post("meterReadings").via(Endpoint::Eiq);
        req.payload = Some(json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "reading": reading,
        }));
        self.request(&req)
    }

    /// Record an energy tariff. The API wants cents; `tariff` is in the
    /// currency's main unit.
    pub fn set_eiq_tariff(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
        tariff: f64,
        unit: &str,
        is_period: bool,
    ) -> Result<Value, TadoApiError> {
        let tariff_in_cents = (tariff * 100.0).round() as i64;
        let payload = if is_period {
            json!({
                "tariffInCents": tariff_in_cents,
                "unit": unit,
                "startDate": from_date.format("%Y-%m-%d").to_string(),
                "endDate": to_date.format("%Y-%m-%d").to_string(),
            })
        } else {
            json!({
                "tariffInCents": tariff_in_cents,
                "unit": unit,
                "startDate": from_date.format("%Y-%m-%d").to_string(),
            })
        };
        let mut req = TadoRequest::post("tariffs").via(Endpoint::Eiq);
        req.payload = Some(payload);
        self.request(&req)
    }

    pub fn get_boiler_install_state(
        &self,
        bridge_id: &str,
        auth_key: &str,
    ) -> Result<BoilerWiringInstallationState, TadoApiError> {
        from_value(self.request(&TadoRequest::get("boilerWiringInstallationState").for_bridge(bridge_id, auth_key))?)
    }

    pub fn get_boiler_max_output_temperature(
        &self,
        bridge_id: &str,
        auth_key: &str,
    ) -> Result<BoilerMaxOutputTemperature, TadoApiError> {
        from_value(self.request(&TadoRequest::get("boilerMaxOutputTemperature").for_bridge(bridge_id, auth_key))?)
    }

    pub fn set_boiler_max_output_temperature(
        &self,
        bridge_id: &str,
        auth_key: &str,
        temperature_in_celsius: f64,
    ) -> Result<Value, TadoApiError> {
        self.request(
            &TadoRequest::put(
                "boilerMaxOutputTemperature",
                json!({"boilerMaxOutputTemperatureInCelsius": temperature_in_celsius}),
            )
            .for_bridge(bridge_id, auth_key),
        )
    }
}
