//! Integration tests for payload parsing
//!
//! These tests parse recorded API bodies and check the snapshot views
//! the sensor entities read from.

use std::time::Duration;

use domain::{
    AggregationMode, AreaSensor, BoundingBox, DataClass, DeviceSensor, MAX_READING_AGE,
    PublicSnapshot, SensorEntity, SensorType, SensorValue, StationSnapshot, WeatherArea,
};
use integration_netatmo::{PublicData, Snapshot, StationData};

const STATIONS: &str = include_str!("fixtures/stationsdata.json");
const HOMECOACH: &str = include_str!("fixtures/homecoachsdata.json");
const PUBLIC: &str = include_str!("fixtures/publicdata.json");

const STATION: &str = "70:ee:50:22:a3:00";
const OUTDOOR: &str = "02:00:00:00:00:01";
const WIND: &str = "06:00:00:00:00:02";
const RAIN: &str = "05:00:00:00:00:03";

fn stations() -> StationData {
    StationData::from_json(STATIONS).expect("valid stations payload")
}

/// Shift every fixture timestamp so the payload looks freshly fetched
fn fresh(raw: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    raw.replace("1700000000", &now.to_string())
        .replace("1699999800", &(now - 200).to_string())
        .replace("1699999900", &(now - 100).to_string())
}

// ============================================================================
// Station payload
// ============================================================================

#[test]
fn lists_stations_and_modules() {
    let data = stations();
    assert_eq!(data.station_ids(), [STATION]);
    assert_eq!(data.module_ids(STATION), [OUTDOOR, WIND, RAIN]);

    let outdoor = data.module(OUTDOOR).unwrap();
    assert_eq!(outdoor.model, "NAModule1");
    assert_eq!(outdoor.main_device.as_deref(), Some(STATION));

    let station = data.station(STATION).unwrap();
    assert_eq!(station.station_name.as_deref(), Some("MyStation"));
    assert!(data.module(STATION).is_none());
}

#[test]
fn monitored_conditions_per_device() {
    let data = stations();
    assert_eq!(
        data.monitored_conditions(STATION),
        [
            "temperature",
            "co2",
            "humidity",
            "noise",
            "pressure",
            "wifi_status",
            "reachable"
        ]
    );
    assert_eq!(
        data.monitored_conditions(OUTDOOR),
        [
            "temperature",
            "humidity",
            "rf_status",
            "battery_vp",
            "battery_percent"
        ]
    );
    assert!(data.monitored_conditions("unknown").is_empty());
}

#[test]
fn stale_modules_are_excluded() {
    let readings = stations().latest_readings_at(STATION, MAX_READING_AGE, 1_700_000_100);

    assert!(readings.contains_key(STATION));
    assert!(readings.contains_key(OUTDOOR));
    assert!(readings.contains_key(RAIN));
    assert!(!readings.contains_key(WIND));
}

#[test]
fn readings_carry_link_and_battery_state() {
    let readings = stations().latest_readings_at(STATION, MAX_READING_AGE, 1_700_000_100);

    assert_eq!(readings[STATION]["wifi_status"], 42);
    assert_eq!(readings[STATION]["reachable"], true);
    assert_eq!(readings[OUTDOOR]["battery_vp"], 5148);
    assert_eq!(readings[OUTDOOR]["rf_status"], 68);
    assert_eq!(readings[OUTDOOR]["Temperature"], 4.84);
}

#[test]
fn everything_is_stale_after_long_silence() {
    let readings =
        stations().latest_readings_at(STATION, Duration::from_secs(60), 1_800_000_000);
    assert!(readings.is_empty());
}

#[test]
fn sensors_read_fresh_payload() {
    let data = StationData::from_json(&fresh(STATIONS)).unwrap();
    let snapshot: &dyn StationSnapshot = &data;

    let mut co2 = DeviceSensor::new(
        DataClass::WeatherStation,
        &data.station(STATION).unwrap(),
        "co2",
        snapshot,
    )
    .unwrap();
    co2.refresh(Some(snapshot)).unwrap();
    assert_eq!(co2.value(), Some(SensorValue::Integer(652)));
    assert_eq!(co2.name(), "Netatmo MyStation CO2");

    let module = data.module(OUTDOOR).unwrap();
    let mut battery =
        DeviceSensor::new(DataClass::WeatherStation, &module, "battery_vp", snapshot).unwrap();
    battery.refresh(Some(snapshot)).unwrap();
    assert_eq!(battery.value(), Some(SensorValue::Text("High".into())));

    let mut rf = DeviceSensor::new(DataClass::WeatherStation, &module, "rf_status", snapshot)
        .unwrap();
    rf.refresh(Some(snapshot)).unwrap();
    assert_eq!(rf.value(), Some(SensorValue::Text("High".into())));

    let mut temperature =
        DeviceSensor::new(DataClass::WeatherStation, &module, "temperature", snapshot).unwrap();
    temperature.refresh(Some(snapshot)).unwrap();
    assert_eq!(temperature.value(), Some(SensorValue::Float(4.8)));
}

#[test]
fn wind_module_goes_unavailable_when_stale() {
    let data = StationData::from_json(&fresh(STATIONS)).unwrap();
    let snapshot: &dyn StationSnapshot = &data;
    let module = data.module(WIND).unwrap();

    let mut angle =
        DeviceSensor::new(DataClass::WeatherStation, &module, "windangle", snapshot).unwrap();
    angle.refresh(Some(snapshot)).unwrap();
    assert!(!angle.available());
    assert_eq!(angle.name(), "Netatmo MyStation Wind Angle");
}

#[test]
fn home_coach_reports_health() {
    let data = StationData::from_json(&fresh(HOMECOACH)).unwrap();
    let snapshot: &dyn StationSnapshot = &data;
    let station = data.station("70:ee:50:3c:00:10").unwrap();

    assert!(
        data.monitored_conditions("70:ee:50:3c:00:10")
            .contains(&"health_idx".to_string())
    );

    let mut health =
        DeviceSensor::new(DataClass::HomeCoach, &station, "health_idx", snapshot).unwrap();
    health.refresh(Some(snapshot)).unwrap();
    assert_eq!(health.value(), Some(SensorValue::Text("Fair".into())));
}

// ============================================================================
// Public payload
// ============================================================================

#[test]
fn latest_station_measures() {
    let data = PublicData::from_json(PUBLIC).unwrap();

    let temperatures = data.latest_temperatures();
    assert_eq!(temperatures.len(), 2);
    assert_eq!(temperatures["70:ee:50:1f:68:9e"], Some(11.2));
    assert_eq!(temperatures["70:ee:50:27:25:b0"], Some(13.8));

    let humidities = data.latest_humidities();
    assert_eq!(humidities["70:ee:50:1f:68:9e"], Some(78.0));
    assert_eq!(humidities["70:ee:50:27:25:b0"], None);

    assert_eq!(data.latest_pressures().len(), 3);
}

#[test]
fn accessory_measures() {
    let data = PublicData::from_json(PUBLIC).unwrap();

    assert_eq!(data.latest_rain()["70:ee:50:1f:68:9e"], Some(0.0));
    assert_eq!(data.rain_60min()["70:ee:50:1f:68:9e"], Some(0.2));
    assert_eq!(data.rain_24h()["70:ee:50:1f:68:9e"], Some(4.1));
    assert_eq!(data.latest_wind_strengths()["70:ee:50:27:25:b0"], Some(9.0));
    assert_eq!(data.latest_gust_strengths()["70:ee:50:27:25:b0"], Some(21.0));
    assert!(!data.latest_rain().contains_key("70:ee:50:27:25:b0"));
}

#[test]
fn area_sensors_aggregate_public_payload() {
    let bbox = BoundingBox::new(52.6, 13.5, 52.4, 13.3).unwrap();
    let avg = WeatherArea::new("Berlin", bbox, AggregationMode::Avg, false).unwrap();
    let max = WeatherArea::new("Berlin", bbox, AggregationMode::Max, false).unwrap();

    let Snapshot::Public(data) = Snapshot::parse(&DataClass::public(&avg), PUBLIC).unwrap() else {
        panic!("public payload parsed as stations");
    };
    let snapshot: &dyn PublicSnapshot = data.as_ref();

    let mut pressure = AreaSensor::new(&avg, SensorType::Pressure).unwrap();
    pressure.refresh(Some(snapshot));
    assert_eq!(pressure.value(), Some(SensorValue::Float(1014.1)));

    let mut humidity = AreaSensor::new(&avg, SensorType::Humidity).unwrap();
    humidity.refresh(Some(snapshot));
    assert_eq!(humidity.value(), Some(SensorValue::Float(78.0)));

    let mut temperature = AreaSensor::new(&max, SensorType::Temperature).unwrap();
    temperature.refresh(Some(snapshot));
    assert_eq!(temperature.value(), Some(SensorValue::Float(13.8)));
}
