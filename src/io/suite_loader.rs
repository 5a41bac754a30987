// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::error::ConfigError;
use crate::math::constants::{Float, Vector3f};
use crate::sensors::camera::{AspectRatio, Camera, CameraConfig};
use crate::sensors::lidar::{Lidar, LidarConfig};
use crate::suite::SensorSuite;

#[derive(thiserror::Error, Debug)]
pub enum SuiteLoadError {
    #[error("cannot read suite description: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed suite description: {0}")]
    Parse(String),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid sensor configuration: {0}")]
    Config(#[from] ConfigError),
}

pub fn load_suite<P: AsRef<Path>>(path: P) -> Result<SensorSuite, SuiteLoadError> {
    let xml = fs::read_to_string(path.as_ref())?;
    parse_suite(&xml)
}

/// Builds a suite from XML of the form
///
/// ```xml
/// <suite position="0,0,0" preset="av">
///     <default name="res" value="1024"/>
///     <lidar position="0,4,0" hres="$res" vres="64"/>
///     <ouster position="0,4,2" hres="$res"/>
///     <camera position="0,2,-1" direction="0,0,-1" hfov="90" hres="320" aspect="16:9"/>
/// </suite>
/// ```
///
/// Sensor positions are relative to the suite position. Omitted attributes
/// keep the sensor defaults.
pub fn parse_suite(xml: &str) -> Result<SensorSuite, SuiteLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut defaults: HashMap<String, String> = HashMap::new();
    let mut suite: Option<SensorSuite> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                match e.name().as_ref() {
                    b"default" => {
                        let attrs = read_attributes(&e, &defaults)?;
                        if let (Some(k), Some(v)) = (attrs.get("name"), attrs.get("value")) {
                            defaults.insert(k.clone(), v.clone());
                        }
                    }
                    b"suite" => {
                        if suite.is_some() {
                            return Err(SuiteLoadError::Parse("nested or repeated <suite>".to_string()));
                        }
                        let attrs = read_attributes(&e, &defaults)?;
                        let position = optional(&attrs, "position", parse_vec3)?.unwrap_or_else(Vector3f::zeros);
                        suite = Some(match attrs.get("preset").map(String::as_str) {
                            None => SensorSuite::new(position),
                            Some("av") => SensorSuite::av_suite(position)?,
                            Some(other) => {
                                return Err(SuiteLoadError::Parse(format!("unknown suite preset: {}", other)));
                            }
                        });
                    }
                    b"lidar" | b"ouster" | b"camera" => {
                        let current = suite.as_mut().ok_or_else(|| {
                            SuiteLoadError::Parse("sensor declared outside of <suite>".to_string())
                        })?;
                        let attrs = read_attributes(&e, &defaults)?;
                        let origin = current.position();
                        match e.name().as_ref() {
                            b"camera" => {
                                let camera = Camera::new(camera_config(&attrs, origin)?)?;
                                current.add_sensor(Box::new(with_id(camera, &attrs, Camera::with_id)));
                            }
                            b"ouster" => {
                                let base = LidarConfig::default();
                                let config = LidarConfig::ouster(
                                    origin + optional(&attrs, "position", parse_vec3)?.unwrap_or(base.position),
                                    optional(&attrs, "direction", parse_vec3)?.unwrap_or(base.direction),
                                    optional(&attrs, "hres", parse_usize)?.unwrap_or(base.horizontal_resolution),
                                );
                                let lidar = Lidar::new(config)?;
                                current.add_sensor(Box::new(with_id(lidar, &attrs, Lidar::with_id)));
                            }
                            _ => {
                                let lidar = Lidar::new(lidar_config(&attrs, origin)?)?;
                                current.add_sensor(Box::new(with_id(lidar, &attrs, Lidar::with_id)));
                            }
                        }
                    }
                    other => {
                        log::warn!("Ignoring unknown suite element <{}>", String::from_utf8_lossy(other));
                    }
                }
            }
            Ok(_) => {}
            Err(e) => return Err(SuiteLoadError::Parse(e.to_string())),
        }
        buf.clear();
    }

    let suite = suite.ok_or(SuiteLoadError::MissingField("suite"))?;
    log::info!("Loaded a suite of {} sensors", suite.sensors().len());
    Ok(suite)
}

fn lidar_config(attrs: &HashMap<String, String>, origin: Vector3f) -> Result<LidarConfig, SuiteLoadError> {
    let d = LidarConfig::default();
    Ok(LidarConfig {
        position: origin + optional(attrs, "position", parse_vec3)?.unwrap_or(d.position),
        direction: optional(attrs, "direction", parse_vec3)?.unwrap_or(d.direction),
        divergence: optional(attrs, "divergence", parse_float)?.unwrap_or(d.divergence),
        horizontal_fov: optional(attrs, "hfov", parse_float)?.unwrap_or(d.horizontal_fov),
        vertical_fov: optional(attrs, "vfov", parse_float)?.unwrap_or(d.vertical_fov),
        horizontal_resolution: optional(attrs, "hres", parse_usize)?.unwrap_or(d.horizontal_resolution),
        vertical_resolution: optional(attrs, "vres", parse_usize)?.unwrap_or(d.vertical_resolution),
        attenuation: optional(attrs, "attenuation", parse_float)?.unwrap_or(d.attenuation),
        noise: optional(attrs, "noise", parse_float)?.unwrap_or(d.noise),
    })
}

fn camera_config(attrs: &HashMap<String, String>, origin: Vector3f) -> Result<CameraConfig, SuiteLoadError> {
    let d = CameraConfig::default();
    Ok(CameraConfig {
        position: origin + optional(attrs, "position", parse_vec3)?.unwrap_or(d.position),
        direction: optional(attrs, "direction", parse_vec3)?.unwrap_or(d.direction),
        horizontal_fov: optional(attrs, "hfov", parse_float)?.unwrap_or(d.horizontal_fov),
        horizontal_resolution: optional(attrs, "hres", parse_usize)?.unwrap_or(d.horizontal_resolution),
        aspect_ratio: optional(attrs, "aspect", parse_aspect)?.unwrap_or(d.aspect_ratio),
    })
}

fn with_id<S>(sensor: S, attrs: &HashMap<String, String>, set: fn(S, String) -> S) -> S {
    match attrs.get("id") {
        Some(id) => set(sensor, id.clone()),
        None => sensor,
    }
}

fn read_attributes(e: &BytesStart, defaults: &HashMap<String, String>) -> Result<HashMap<String, String>, SuiteLoadError> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(|err| SuiteLoadError::Parse(err.to_string()))?;
        attrs.insert(key, resolve_value(&value, defaults));
    }
    Ok(attrs)
}

fn optional<T>(attrs: &HashMap<String, String>,
               key: &str,
               parse: fn(&str) -> Result<T, SuiteLoadError>) -> Result<Option<T>, SuiteLoadError> {
    attrs.get(key).map(|v| parse(v)).transpose()
}

/// Replaces every `$name` with its default, taking the longest name that
/// matches when one name prefixes another. Unknown names are left as is.
fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(at) = rest.find('$') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];
        let longest = defaults.iter()
            .filter(|(k, _)| !k.is_empty() && tail.starts_with(k.as_str()))
            .max_by_key(|(k, _)| k.len());
        match longest {
            Some((k, v)) => {
                out.push_str(v);
                rest = &tail[k.len()..];
            }
            None => {
                out.push('$');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

fn parse_float(value: &str) -> Result<Float, SuiteLoadError> {
    value.trim().parse::<Float>().map_err(|_| SuiteLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_usize(value: &str) -> Result<usize, SuiteLoadError> {
    value.trim().parse::<usize>().map_err(|_| SuiteLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_aspect(value: &str) -> Result<AspectRatio, SuiteLoadError> {
    AspectRatio::from_name(value.trim()).ok_or_else(|| SuiteLoadError::Parse(format!("unknown aspect ratio: {}", value)))
}

fn parse_vec3(value: &str) -> Result<Vector3f, SuiteLoadError> {
    let mut parts = value.split(',').map(|s| s.trim()).filter(|s| !s.is_empty());
    let mut next = || parts.next().ok_or_else(|| SuiteLoadError::Parse(format!("invalid vec3: {}", value)));
    let (x, y, z) = (next()?, next()?, next()?);
    Ok(Vector3f::new(parse_float(x)?, parse_float(y)?, parse_float(z)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::computation_node::ComputationNode;
    use crate::core::sensor::SensorKind;

    #[test]
    fn test_parse_sensors_with_defaults() {
        let xml = r#"
            <suite position="1,0,0">
                <default name="res" value="32"/>
                <camera id="front" position="0,2,0" direction="0,0,-1" hfov="90" hres="$res" aspect="16:9"/>
                <lidar id="roof" hres="$res" vres="8" noise="0"/>
            </suite>"#;
        let suite = parse_suite(xml).unwrap();
        let sensors = suite.sensors();
        assert_eq!(sensors.len(), 2);

        assert_eq!(sensors[0].kind(), SensorKind::Lidar);
        assert_eq!(sensors[0].id(), "roof");
        assert_eq!(sensors[0].source().pose().position(), Vector3f::new(1.0, 4.0, 0.0));
        assert_eq!(sensors[0].source().len(), 32 * 8);

        assert_eq!(sensors[1].id(), "front");
        assert_eq!(sensors[1].source().pose().position(), Vector3f::new(1.0, 2.0, 0.0));
        assert_eq!(sensors[1].source().field().vertical_resolution(), 18);
    }

    #[test]
    fn test_av_preset_and_ouster() {
        let xml = r#"<suite preset="av"><ouster hres="16"/></suite>"#;
        let suite = parse_suite(xml).unwrap();
        assert_eq!(suite.sensors().len(), 4);
        assert!((suite.sensors()[1].source().divergence() - 0.07f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(parse_suite("<lidar/>"), Err(SuiteLoadError::Parse(_))));
        assert!(matches!(parse_suite("<empty/>"), Err(SuiteLoadError::MissingField("suite"))));
        assert!(matches!(parse_suite(r#"<suite><lidar hres="abc"/></suite>"#), Err(SuiteLoadError::Parse(_))));
        assert!(matches!(parse_suite(r#"<suite><lidar hres="0"/></suite>"#), Err(SuiteLoadError::Config(_))));
        assert!(matches!(parse_suite(r#"<suite><camera aspect="1:1"/></suite>"#), Err(SuiteLoadError::Parse(_))));
        assert!(matches!(parse_suite(r#"<suite preset="boat"/>"#), Err(SuiteLoadError::Parse(_))));
        assert!(matches!(load_suite("/nonexistent/suite.xml"), Err(SuiteLoadError::Io(_))));
    }

    #[test]
    fn test_defaults_sharing_a_prefix() {
        let xml = r#"
            <suite>
                <default name="res" value="32"/>
                <default name="resy" value="8"/>
                <lidar hres="$res" vres="$resy"/>
            </suite>"#;
        for _ in 0..16 {
            let suite = parse_suite(xml).unwrap();
            let field = suite.sensors()[0].source().field();
            assert_eq!((field.horizontal_resolution(), field.vertical_resolution()), (32, 8));
        }
    }

    #[test]
    fn test_resolve_value() {
        let mut defaults = HashMap::new();
        defaults.insert("res".to_string(), "32".to_string());
        defaults.insert("resy".to_string(), "8".to_string());
        assert_eq!(resolve_value("$resy", &defaults), "8");
        assert_eq!(resolve_value("$res,$resy,$resx", &defaults), "32,8,32x");
        assert_eq!(resolve_value("$other 1$", &defaults), "$other 1$");
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3(" 1, 2.5,-3 ").unwrap(), Vector3f::new(1.0, 2.5, -3.0));
        assert!(parse_vec3("1,2").is_err());
    }
}
