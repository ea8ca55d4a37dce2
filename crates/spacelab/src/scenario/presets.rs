//! Predefined systems and body templates.
//!
//! Distances in km, masses in kg, speeds in km/s. Orbiting bodies are
//! placed at a fixed angle with a circular tangential velocity.

use nbody::body::BodyKind;

use super::BodySpec;

/// Mass of a newly created satellite (kg)
pub const SATELLITE_MASS: f64 = 1000.0;
/// Radius of a newly created satellite (km)
pub const SATELLITE_RADIUS: f64 = 0.1;

fn earth() -> BodySpec {
    BodySpec::new(BodyKind::Planet, "Earth", 5.972e24, 6371.0, [0.0, 0.0], [0.0, 0.0])
}

fn moon() -> BodySpec {
    BodySpec::new(
        BodyKind::Moon,
        "Moon",
        7.34767309e22,
        1737.4,
        [384_400.0, 0.0],
        [0.0, 1.022],
    )
}

fn iss() -> BodySpec {
    // 400 km above the surface
    BodySpec::new(
        BodyKind::Satellite,
        "ISS",
        SATELLITE_MASS,
        SATELLITE_RADIUS,
        [6771.0, 0.0],
        [0.0, 7.66],
    )
}

fn sun() -> BodySpec {
    BodySpec::new(BodyKind::Star, "Sun", 1.989e30, 696_340.0, [0.0, 0.0], [0.0, 0.0])
}

fn jupiter_at_rest() -> BodySpec {
    BodySpec::new(BodyKind::Planet, "Jupiter", 1.898e27, 69_911.0, [0.0, 0.0], [0.0, 0.0])
}

fn proxima() -> BodySpec {
    BodySpec::new(
        BodyKind::Star,
        "Proxima Centauri",
        2.446e29,
        100_000.0,
        [0.0, 0.0],
        [0.0, 0.0],
    )
}

/// Earth, Moon and the ISS
pub fn earth_moon() -> Vec<BodySpec> {
    vec![earth(), moon(), iss()]
}

/// The Sun and the eight planets spread around their orbits
pub fn solar_system() -> Vec<BodySpec> {
    use BodyKind::Planet;

    vec![
        sun(),
        BodySpec::orbiting(Planet, "Mercury", 3.301e23, 2439.7, 57_909_050.0, 45.0, 47.36),
        BodySpec::orbiting(Planet, "Venus", 4.867e24, 6051.8, 108_208_000.0, 120.0, 35.02),
        BodySpec::orbiting(Planet, "Earth", 5.972e24, 6371.0, 149_597_870.0, 200.0, 29.78),
        BodySpec::orbiting(Planet, "Mars", 6.39e23, 3390.0, 227_943_824.0, 300.0, 24.07),
        BodySpec::orbiting(Planet, "Jupiter", 1.898e27, 69_911.0, 778_299_000.0, 80.0, 13.07),
        BodySpec::orbiting(Planet, "Saturn", 5.683e26, 58_232.0, 1_429_400_000.0, 160.0, 9.68),
        BodySpec::orbiting(Planet, "Uranus", 8.681e25, 25_362.0, 2_870_658_186.0, 240.0, 6.80),
        BodySpec::orbiting(Planet, "Neptune", 1.024e26, 24_622.0, 4_498_396_441.0, 30.0, 5.43),
    ]
}

/// Jupiter with the four Galilean moons
pub fn jupiter_system() -> Vec<BodySpec> {
    use BodyKind::Moon;

    vec![
        jupiter_at_rest(),
        BodySpec::orbiting(Moon, "Io", 8.93e22, 1821.6, 421_700.0, 90.0, 17.33),
        BodySpec::orbiting(Moon, "Europa", 4.8e22, 1560.8, 671_034.0, 180.0, 13.74),
        BodySpec::orbiting(Moon, "Ganymede", 1.48e23, 2634.1, 1_070_412.0, 270.0, 10.88),
        BodySpec::orbiting(Moon, "Callisto", 1.08e23, 2410.3, 1_882_709.0, 45.0, 8.20),
    ]
}

/// Proxima Centauri and its three known planets
pub fn proxima_centauri() -> Vec<BodySpec> {
    use BodyKind::Planet;

    vec![
        proxima(),
        BodySpec::orbiting(Planet, "Proxima b", 7.6e24, 7160.0, 7_500_000.0, 45.0, 46.7),
        BodySpec::orbiting(Planet, "Proxima c", 4.25e25, 10_000.0, 22_350_000.0, 180.0, 27.0),
        BodySpec::orbiting(Planet, "Proxima d", 1.2e24, 3500.0, 2_400_000.0, 270.0, 82.4),
    ]
}

/// Find a predefined body by name, ignoring case
///
/// Only the kind, mass and radius of the result matter to callers; its
/// position and velocity are those of the preset it came from.
///
/// # Examples
///
/// ```
/// use spacelab::scenario::template;
///
/// let moon = template("MOON").unwrap();
/// assert_eq!(moon.name, "Moon");
/// assert!(template("death star").is_none());
/// ```
pub fn template(name: &str) -> Option<BodySpec> {
    let wanted = name.trim();

    earth_moon()
        .into_iter()
        .chain(solar_system())
        .chain(jupiter_system())
        .chain(proxima_centauri())
        .find(|spec| spec.name.eq_ignore_ascii_case(wanted))
}

/// Names [`template`] resolves, in preset order without duplicates
pub fn template_names() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    earth_moon()
        .into_iter()
        .chain(solar_system())
        .chain(jupiter_system())
        .chain(proxima_centauri())
        .for_each(|spec| {
            if !names.contains(&spec.name) {
                names.push(spec.name);
            }
        });
    names
}
