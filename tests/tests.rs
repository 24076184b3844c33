use approx::assert_relative_eq;

use foucault::{Config, ConfigError, DerivedConstants, Field, Scenario, SimulationFault};
use foucault::{angular_velocity, surface_gravity, Trajectory};
use foucault::{draw_plot, DrawingSurface, Extent, NVec2, Unpaced};

const EARTH: &str = "/n Earth /m 5.972e24 /r 6.371e6 /t 86400 /ol 1 /oa 1 /mp 1";

/// Earth scenario from the short-alias config
pub fn earth_scenario() -> Scenario {
    let cfg: Config = EARTH.parse().expect("earth config parses");
    Scenario::build_scenario(cfg).expect("earth constants are finite")
}

/// Config text using the given spelling for each directive, in table order
pub fn config_with(directives: [&str; 8]) -> String {
    let values = ["Earth", "5.972e24", "6.371e6", "86400", "2", "1.5", "0.75", "3"];
    directives
        .iter()
        .zip(values.iter())
        .map(|(d, v)| format!("{d} {v}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Records every segment, for comparing runs
#[derive(Default)]
pub struct Recorder {
    pub segments: Vec<(NVec2, NVec2)>,
}

impl DrawingSurface for Recorder {
    fn line(&mut self, from: NVec2, to: NVec2) {
        self.segments.push((from, to));
    }
    fn text(&mut self, _at: NVec2, _label: &str) {}
}

// ==================================================================================
// Config tests
// ==================================================================================

#[test]
fn config_populates_every_field() {
    let cfg: Config = config_with([
        "/name", "/mass", "/radius", "/day", "/osc_mass", "/osc_len", "/osc_ampl", "/multiplier",
    ])
    .parse()
    .unwrap();

    assert_eq!(cfg.planet.name, "Earth");
    assert_eq!(cfg.planet.mass, 5.972e24);
    assert_eq!(cfg.planet.radius, 6.371e6);
    assert_eq!(cfg.planet.day, 86400.0);
    assert_eq!(cfg.oscillator.mass, 2.0);
    assert_eq!(cfg.oscillator.length, 1.5);
    assert_eq!(cfg.oscillator.amplitude, 0.75);
    assert_eq!(cfg.settings.time_multiplier, 3);
}

#[test]
fn config_aliases_are_equivalent() {
    let spellings = [
        ["/name", "/mass", "/radius", "/day", "/osc_mass", "/osc_len", "/osc_ampl", "/multiplier"],
        ["/n", "/m", "/rad", "/period", "/om", "/ol", "/oa", "/mp"],
        ["/N", "/M", "/r", "/t", "/OM", "/OL", "/OA", "/MP"],
        ["/Name", "/MASS", "/Radius", "/Day", "/Osc_Mass", "/Osc_Len", "/Osc_Ampl", "/Multiplier"],
    ];

    let reference: Config = config_with(spellings[0]).parse().unwrap();
    for directives in &spellings[1..] {
        let cfg: Config = config_with(*directives).parse().unwrap();
        assert_eq!(cfg, reference, "spelling {:?} differs", directives);
    }
}

#[test]
fn config_bogus_directive_fails_anywhere() {
    for text in [
        format!("/bogus 1 {EARTH}"),
        "/n Earth /bogus 1 /m 5.972e24".to_string(),
        format!("{EARTH} /bogus"),
    ] {
        let err = text.parse::<Config>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownDirective { token: "/bogus".to_string() });
    }
}

#[test]
fn config_name_may_be_any_short_token() {
    let cfg: Config = "/n 51-Pegasi-b /m 8.9e26 /r 9.6e7 /t 360000 /ol 10 /oa 2".parse().unwrap();
    assert_eq!(cfg.planet.name, "51-Pegasi-b");
}

#[test]
fn config_error_messages_name_the_field() {
    let err = "/n Earth /r wide".parse::<Config>().unwrap_err();
    assert_eq!(err.to_string(), "`wide` is not a valid value for planet.radius");

    let err = "/n Earth /m 1 /r 1 /t 1 /oa 1".parse::<Config>().unwrap_err();
    assert_eq!(err, ConfigError::MissingField { field: Field::OscLen });
}

#[test]
fn config_missing_file_is_fatal() {
    let err = Config::load(&foucault::FileSource::new("no/such/dir/config.cfg")).unwrap_err();
    assert!(matches!(err, foucault::Error::Source(_)));
}

// ==================================================================================
// Physics tests
// ==================================================================================

#[test]
fn physics_earth_constants() {
    let scenario = earth_scenario();
    assert_relative_eq!(surface_gravity(&scenario.planet), 9.82, max_relative = 0.01);
    assert_relative_eq!(angular_velocity(&scenario.planet), 7.2722e-5, max_relative = 1e-4);
    assert_eq!(scenario.constants.gravity, surface_gravity(&scenario.planet));
}

#[test]
fn physics_zero_length_never_reaches_trajectory() {
    let scenario = earth_scenario();
    let mut oscillator = scenario.oscillator.clone();
    oscillator.length = 0.0;

    let fault = DerivedConstants::derive(&scenario.planet, &oscillator).unwrap_err();
    assert!(matches!(fault, SimulationFault::NonFinite { .. }));
}

// ==================================================================================
// Trajectory tests
// ==================================================================================

#[test]
fn trajectory_first_sample_at_origin() {
    let first = earth_scenario().trajectory(8000.0).unwrap().next().unwrap();
    assert_eq!(first.time, 0.0);
    assert_eq!(first.position, NVec2::new(0.0, 0.0));
}

#[test]
fn trajectory_reference_run_sample_count() {
    let scenario = earth_scenario();
    let samples: Vec<_> = scenario.trajectory(8000.0).unwrap().collect();

    assert_eq!(samples.len(), 320_000);
    let last = samples.last().unwrap();
    assert!(last.time < 8000.0);
    assert_relative_eq!(last.time, 8000.0 - 0.025, epsilon = 1e-9);
}

#[test]
fn trajectory_is_deterministic() {
    let scenario = earth_scenario();
    let a = scenario.trajectory(500.0).unwrap();
    let b = scenario.trajectory(500.0).unwrap();

    for (x, y) in a.zip(b) {
        assert_eq!(x.time.to_bits(), y.time.to_bits());
        assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
        assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
    }
}

#[test]
fn trajectory_rejects_endless_or_empty_durations() {
    let scenario = earth_scenario();
    for max_time in [f64::INFINITY, f64::NAN, -1.0, 0.0] {
        match scenario.trajectory(max_time) {
            Err(SimulationFault::InvalidDuration { max_time: got }) => {
                assert_eq!(got.to_bits(), max_time.to_bits())
            }
            other => panic!("{max_time} accepted: {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn trajectory_stays_within_scaled_amplitude() {
    // |x|, |y| <= |cos| d + |sin| d <= sqrt(2) * 100 * amplitude
    let scenario = earth_scenario();
    let bound = 100.0 * scenario.oscillator.amplitude * 2f64.sqrt() + 1e-9;
    let traj = Trajectory::new(scenario.oscillator.clone(), scenario.constants, 200.0).unwrap();
    for s in traj {
        assert!(s.position.x.abs() <= bound && s.position.y.abs() <= bound, "{:?}", s);
    }
}

// ==================================================================================
// Plot tests
// ==================================================================================

#[test]
fn plot_reference_run_stays_on_canvas() {
    let scenario = earth_scenario();
    let mut extent = Extent::default();

    let drawn = draw_plot(&scenario, 8000.0, &mut extent, &mut Unpaced).unwrap();

    assert_eq!(drawn, 320_000);
    assert_eq!(extent.segments, 320_000 + 8);
    assert_eq!(extent.labels, ["0", "0", "x, m", "y, m"]);
    assert_eq!(extent.clipped, 0);
}

#[test]
fn plot_runs_are_identical() {
    let scenario = earth_scenario();
    let mut a = Recorder::default();
    let mut b = Recorder::default();

    draw_plot(&scenario, 100.0, &mut a, &mut Unpaced).unwrap();
    draw_plot(&scenario, 100.0, &mut b, &mut Unpaced).unwrap();

    assert_eq!(a.segments.len(), 8 + 4000);
    assert_eq!(a.segments, b.segments);
}

#[test]
fn plot_invalid_duration_fails_before_drawing() {
    let scenario = earth_scenario();
    let mut extent = Extent::default();

    let err = draw_plot(&scenario, f64::NAN, &mut extent, &mut Unpaced).unwrap_err();

    assert!(matches!(err, SimulationFault::InvalidDuration { .. }));
    assert_eq!(extent, Extent::default());
}

#[test]
fn report_uses_scientific_notation() {
    let [planet, _] = earth_scenario().report();
    assert_eq!(planet, "Earth: mass 5.972e24, radius 6.371e6, day 8.64e4");
}
