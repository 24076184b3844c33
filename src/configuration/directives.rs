//! Directive table for the configuration token stream
//!
//! Every directive starts with `/`, is matched case-insensitively and
//! targets exactly one field:
//!
//! | directive (aliases)              | field                  |
//! |----------------------------------|------------------------|
//! | `/name`, `/n`                    | planet name            |
//! | `/mass`, `/m`                    | planet mass            |
//! | `/radius`, `/rad`, `/r`          | planet radius          |
//! | `/day`, `/period`, `/t`          | planet day length      |
//! | `/osc_mass`, `/om`               | oscillator mass        |
//! | `/osc_len`, `/ol`                | oscillator length      |
//! | `/osc_ampl`, `/oa`               | oscillator amplitude   |
//! | `/multiplier`, `/mp`             | time multiplier        |

use std::fmt;

/// Field a directive assigns to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Mass,
    Radius,
    Day,
    OscMass,
    OscLen,
    OscAmpl,
    Multiplier,
}

const TABLE: &[(&str, Field)] = &[
    ("/name", Field::Name),
    ("/n", Field::Name),
    ("/mass", Field::Mass),
    ("/m", Field::Mass),
    ("/radius", Field::Radius),
    ("/rad", Field::Radius),
    ("/r", Field::Radius),
    ("/day", Field::Day),
    ("/period", Field::Day),
    ("/t", Field::Day),
    ("/osc_mass", Field::OscMass),
    ("/om", Field::OscMass),
    ("/osc_len", Field::OscLen),
    ("/ol", Field::OscLen),
    ("/osc_ampl", Field::OscAmpl),
    ("/oa", Field::OscAmpl),
    ("/multiplier", Field::Multiplier),
    ("/mp", Field::Multiplier),
];

impl Field {
    /// Look a directive token up, ignoring ASCII case
    pub fn from_directive(token: &str) -> Option<Field> {
        TABLE
            .iter()
            .find(|(directive, _)| directive.eq_ignore_ascii_case(token))
            .map(|&(_, field)| field)
    }

    /// Canonical (long) directive for diagnostics
    pub fn directive(self) -> &'static str {
        match self {
            Field::Name => "/name",
            Field::Mass => "/mass",
            Field::Radius => "/radius",
            Field::Day => "/day",
            Field::OscMass => "/osc_mass",
            Field::OscLen => "/osc_len",
            Field::OscAmpl => "/osc_ampl",
            Field::Multiplier => "/multiplier",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "planet.name",
            Field::Mass => "planet.mass",
            Field::Radius => "planet.radius",
            Field::Day => "planet.day",
            Field::OscMass => "oscillator.mass",
            Field::OscLen => "oscillator.length",
            Field::OscAmpl => "oscillator.amplitude",
            Field::Multiplier => "settings.time_multiplier",
        };
        f.write_str(name)
    }
}
