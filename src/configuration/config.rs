//! Configuration parser for pendulum scenarios.
//!
//! The configuration is a free-form, whitespace-separated token stream of
//! directives, each followed by exactly one value. There are no comments
//! and line breaks carry no meaning. Directives and their aliases are
//! listed in [`crate::configuration::directives`].
//!
//! # Format
//! An example configuration for an Earth-bound pendulum:
//!
//! ```text
//! /name Earth
//! /mass 5.972e24
//! /radius 6.371e6
//! /day 86400
//! /osc_len 1 /osc_ampl 1
//! /mp 4
//! ```
//!
//! Required: `/name`, `/mass`, `/radius`, `/day`, `/osc_len`, `/osc_ampl`.
//! `/osc_mass` defaults to 0 and `/multiplier` to 1. A repeated directive
//! overwrites the earlier value.
//!
//! Parsing either produces a complete [`Config`] or fails with a
//! [`ConfigError`]; there is no partial result.

use std::str::FromStr;

use crate::configuration::directives::Field;
use crate::configuration::source::ByteSource;
use crate::simulation::params::SimulationSettings;
use crate::simulation::states::{OscillatorModel, PlanetModel};

/// Longest token the parser accepts, in characters
pub const MAX_TOKEN_LEN: usize = 19;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown directive `{token}`")]
    UnknownDirective { token: String },
    #[error("`{token}` is not a valid value for {field}")]
    TypeMismatch { field: Field, token: String },
    #[error("token `{token}` is longer than {limit} characters (the limit applies to every token, values included)")]
    FieldOverflow { token: String, limit: usize },
    #[error("directive {directive} has no value")]
    MissingValue { directive: Field },
    #[error("required field {field} was never set")]
    MissingField { field: Field },
    #[error("{field} = {value} is invalid: {reason}")]
    InvalidValue {
        field: Field,
        value: String,
        reason: &'static str,
    },
    #[error("configuration is not valid UTF-8")]
    NotUtf8,
}

/// Fully populated, validated parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub planet: PlanetModel,
    pub oscillator: OscillatorModel,
    pub settings: SimulationSettings,
}

impl Config {
    /// Read everything from `source` and parse it
    pub fn load<S: ByteSource>(source: &S) -> crate::Result<Config> {
        let bytes = source.read_bytes()?;
        Ok(parse_config(&bytes)?)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut draft = Draft::default();
        let mut pending: Option<Field> = None;

        for token in text.split_ascii_whitespace() {
            if token.chars().count() > MAX_TOKEN_LEN {
                return Err(ConfigError::FieldOverflow {
                    token: token.to_string(),
                    limit: MAX_TOKEN_LEN,
                });
            }

            // a pending directive turns the next token into its value
            match pending.take() {
                Some(field) => draft.assign(field, token)?,
                None => {
                    let field = Field::from_directive(token).ok_or_else(|| {
                        ConfigError::UnknownDirective {
                            token: token.to_string(),
                        }
                    })?;
                    pending = Some(field);
                }
            }
        }

        if let Some(directive) = pending {
            return Err(ConfigError::MissingValue { directive });
        }

        draft.finish()
    }
}

/// Parse raw configuration bytes
pub fn parse_config(bytes: &[u8]) -> Result<Config, ConfigError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
    text.parse()
}

/// Fields seen so far; `None` means the directive never appeared
#[derive(Debug, Default)]
struct Draft {
    name: Option<String>,
    mass: Option<f64>,
    radius: Option<f64>,
    day: Option<f64>,
    osc_mass: Option<f64>,
    osc_len: Option<f64>,
    osc_ampl: Option<f64>,
    multiplier: Option<u32>,
}

impl Draft {
    fn assign(&mut self, field: Field, token: &str) -> Result<(), ConfigError> {
        log::trace!("{} <- {}", field, token);
        match field {
            Field::Name => self.name = Some(token.to_string()),
            Field::Mass => self.mass = Some(parse_float(field, token)?),
            Field::Radius => self.radius = Some(parse_float(field, token)?),
            Field::Day => self.day = Some(parse_float(field, token)?),
            Field::OscMass => self.osc_mass = Some(parse_float(field, token)?),
            Field::OscLen => self.osc_len = Some(parse_float(field, token)?),
            Field::OscAmpl => self.osc_ampl = Some(parse_float(field, token)?),
            Field::Multiplier => {
                let value = token.parse::<u32>().map_err(|_| mismatch(field, token))?;
                self.multiplier = Some(value);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Config, ConfigError> {
        let name = required(Field::Name, self.name)?;
        let mass = positive(Field::Mass, required(Field::Mass, self.mass)?)?;
        let radius = positive(Field::Radius, required(Field::Radius, self.radius)?)?;
        let day = positive(Field::Day, required(Field::Day, self.day)?)?;
        let length = positive(Field::OscLen, required(Field::OscLen, self.osc_len)?)?;
        let amplitude = required(Field::OscAmpl, self.osc_ampl)?;

        let time_multiplier = self.multiplier.unwrap_or(1);
        if time_multiplier == 0 {
            return Err(ConfigError::InvalidValue {
                field: Field::Multiplier,
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        let config = Config {
            planet: PlanetModel { name, mass, radius, day },
            oscillator: OscillatorModel {
                mass: self.osc_mass.unwrap_or(0.0),
                length,
                amplitude,
            },
            settings: SimulationSettings { time_multiplier },
        };
        log::debug!("parsed configuration: {:?}", config);
        Ok(config)
    }
}

fn mismatch(field: Field, token: &str) -> ConfigError {
    ConfigError::TypeMismatch {
        field,
        token: token.to_string(),
    }
}

fn parse_float(field: Field, token: &str) -> Result<f64, ConfigError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(mismatch(field, token)),
    }
}

fn required<T>(field: Field, value: Option<T>) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::MissingField { field })
}

fn positive(field: Field, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must be strictly positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH: &str = "/n Earth /m 5.972e24 /r 6.371e6 /t 86400 /ol 1 /oa 1 /mp 1";

    #[test]
    fn parses_short_aliases() {
        let cfg: Config = EARTH.parse().unwrap();
        assert_eq!(cfg.planet.name, "Earth");
        assert_eq!(cfg.planet.mass, 5.972e24);
        assert_eq!(cfg.planet.radius, 6.371e6);
        assert_eq!(cfg.planet.day, 86400.0);
        assert_eq!(cfg.oscillator.length, 1.0);
        assert_eq!(cfg.oscillator.amplitude, 1.0);
        assert_eq!(cfg.settings.time_multiplier, 1);
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let cfg: Config = "/name Mars /mass 6.39e23 /radius 3.3895e6 /day 88642 /osc_len 2 /osc_ampl 0.5"
            .parse()
            .unwrap();
        assert_eq!(cfg.oscillator.mass, 0.0);
        assert_eq!(cfg.settings.time_multiplier, 1);
        assert_eq!(cfg.oscillator.amplitude, 0.5);
    }

    #[test]
    fn line_breaks_and_tabs_are_plain_whitespace() {
        let cfg: Config = "/n\tEarth\n/m 5.972e24\r\n/r 6.371e6 /t 86400\n\n/ol 1 /oa 1\n"
            .parse()
            .unwrap();
        assert_eq!(cfg.planet.name, "Earth");
    }

    #[test]
    fn last_assignment_wins() {
        let cfg: Config = format!("{EARTH} /mp 3 /mp 5").parse().unwrap();
        assert_eq!(cfg.settings.time_multiplier, 5);
    }

    #[test]
    fn unknown_directive_fails() {
        let err = format!("{EARTH} /bogus 1").parse::<Config>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownDirective {
                token: "/bogus".to_string()
            }
        );
    }

    #[test]
    fn value_without_directive_is_unknown_directive() {
        let err = "Earth /n Earth".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDirective { token } if token == "Earth"));
    }

    #[test]
    fn non_numeric_mass_is_type_mismatch() {
        let err = "/n Earth /m heavy".parse::<Config>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::TypeMismatch {
                field: Field::Mass,
                token: "heavy".to_string()
            }
        );
    }

    #[test]
    fn fractional_multiplier_is_type_mismatch() {
        let err = format!("{EARTH} /mp 2.5").parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { field: Field::Multiplier, .. }));
    }

    #[test]
    fn infinite_float_is_type_mismatch() {
        let err = "/n Earth /m inf".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { field: Field::Mass, .. }));
    }

    #[test]
    fn long_name_overflows() {
        let name = "A".repeat(MAX_TOKEN_LEN + 1);
        let err = format!("/n {name}").parse::<Config>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::FieldOverflow {
                token: name,
                limit: MAX_TOKEN_LEN
            }
        );
    }

    #[test]
    fn long_numeric_value_overflows_too() {
        let err = "/n Earth /m 5972000000000000000000000".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::FieldOverflow { limit: MAX_TOKEN_LEN, .. }));
        assert_eq!(
            err.to_string(),
            "token `5972000000000000000000000` is longer than 19 characters \
             (the limit applies to every token, values included)"
        );
    }

    #[test]
    fn nineteen_character_name_fits() {
        let name = "A".repeat(MAX_TOKEN_LEN);
        let cfg: Config = format!("/n {name} /m 1 /r 1 /t 1 /ol 1 /oa 1").parse().unwrap();
        assert_eq!(cfg.planet.name, name);
    }

    #[test]
    fn trailing_directive_misses_value() {
        let err = format!("{EARTH} /om").parse::<Config>().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue { directive: Field::OscMass });
    }

    #[test]
    fn missing_radius_is_reported() {
        let err = "/n Earth /m 5.972e24 /t 86400 /ol 1 /oa 1"
            .parse::<Config>()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingField { field: Field::Radius });
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = "/n Earth /m 5.972e24 /r 6.371e6 /t 86400 /ol 0 /oa 1"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: Field::OscLen, .. }));
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let err = format!("{EARTH} /mp 0").parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: Field::Multiplier, .. }));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert_eq!(parse_config(&[b'/', b'n', b' ', 0xff]), Err(ConfigError::NotUtf8));
    }

    #[test]
    fn loads_through_byte_source() {
        let cfg = Config::load(&EARTH).unwrap();
        assert_eq!(cfg.planet.name, "Earth");
    }
}
