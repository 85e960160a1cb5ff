use clap::{Parser, Subcommand};
use jieqi_core::{
    AnalyticProvider, Astronomy, Body, EphemerisProvider, MemoProvider, ProviderError,
};
use jieqi_frames::{
    DEGREE_SECONDS_PER_RADIAN, EquatorialCoordinates, GeographicCoordinates, mod_360_deg,
};
use jieqi_search::{SolverConfig, solar_terms, solve_longitude};
use jieqi_time::{JulianDay, UtcTime};

#[derive(Parser)]
#[command(name = "jieqi", about = "Solar terms, hour angles and ecliptic positions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// The 24 solar terms following 1 January of a year
    SolarTerms {
        /// Calendar year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Print times at this offset from UTC, in hours
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        utc_offset: f64,
        /// List in date order instead of longitude order
        #[arg(long)]
        chronological: bool,
    },
    /// Local hour angle of a body
    HourAngle {
        /// Body name (Sun or Moon with the built-in ephemeris)
        #[arg(long, default_value = "Sun")]
        body: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Observer latitude in degrees, north positive
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lat: f64,
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Apply nutation to sidereal time and obliquity
        #[arg(long)]
        corrected: bool,
    },
    /// Obliquity and nutation at an instant
    Ecliptic {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Ecliptic and equatorial position of a body
    Position {
        /// Body name
        #[arg(long, default_value = "Sun")]
        body: String,
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// First instant after a date when a body reaches an ecliptic longitude
    LongitudeTime {
        /// Body name
        #[arg(long, default_value = "Sun")]
        body: String,
        /// Target ecliptic longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        target: f64,
        /// UTC datetime to search from (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Stop at a 1e-7 rad tolerance instead of 1e-9
        #[arg(long)]
        coarse: bool,
    },
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    s.parse().map_err(|e| format!("Invalid date '{s}': {e}"))
}

fn require_utc(s: &str) -> UtcTime {
    parse_utc(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_body(name: &str) -> Body {
    Body::from_name(name).unwrap_or_else(|| {
        eprintln!("Invalid body name: {name}");
        eprintln!("Valid: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto");
        std::process::exit(1);
    })
}

/// Apparent RA/Dec as printed by `position`: aberration removed, true obliquity.
fn apparent_equatorial<P: EphemerisProvider + ?Sized>(
    astro: &Astronomy<'_, P>,
    body: Body,
) -> Result<EquatorialCoordinates, ProviderError> {
    astro.equatorial(body, true)
}

fn solver_config(coarse: bool) -> SolverConfig {
    if coarse {
        SolverConfig::coarse()
    } else {
        SolverConfig::default()
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let provider = MemoProvider::new(AnalyticProvider::new());

    match cli.command {
        Commands::SolarTerms {
            year,
            utc_offset,
            chronological,
        } => {
            let astro = Astronomy::new(
                GeographicCoordinates::default(),
                JulianDay::from_calendar(year, 1, 1, 0, 0, 0.0),
                &provider,
            );
            let terms = solar_terms(&astro, year, &SolverConfig::default())
                .unwrap_or_else(|e| fail(e));
            let events = if chronological {
                terms.chronological()
            } else {
                terms.events().to_vec()
            };
            for event in events {
                println!(
                    "{:>2}  {}  {:<22} {:>5.1} deg  {}",
                    event.term.index(),
                    event.term.name(),
                    event.term.english_name(),
                    event.term.longitude_deg(),
                    event.utc().with_offset_hours(utc_offset)
                );
            }
            let stats = provider.stats();
            log::info!(
                "{} provider evaluations, {} cache hits",
                stats.evaluations,
                stats.cache_hits
            );
        }

        Commands::HourAngle {
            body,
            lon,
            lat,
            date,
            corrected,
        } => {
            let body = require_body(&body);
            let utc = require_utc(&date);
            let geo = GeographicCoordinates::from_degrees(lon, lat);
            let astro = Astronomy::new(geo, utc.to_julian_day(), &provider);
            let ha = astro
                .hour_angle(body, corrected)
                .unwrap_or_else(|e| fail(e));
            println!("{body} at {utc} (lon {lon:.4}, lat {lat:.4})");
            println!(
                "  Hour angle: {:.6} deg ({:.4} h)",
                ha.hour_angle.to_degrees(),
                ha.hour_angle.to_degrees() / 15.0
            );
            println!(
                "  RA: {:.6} deg  Dec: {:.6} deg",
                ha.equatorial.right_ascension.to_degrees(),
                ha.equatorial.declination.to_degrees()
            );
            println!(
                "  Ecliptic lon: {:.6} deg (aberration removed)",
                ha.planet.longitude().to_degrees()
            );
        }

        Commands::Ecliptic { date } => {
            let utc = require_utc(&date);
            let astro = Astronomy::new(
                GeographicCoordinates::default(),
                utc.to_julian_day(),
                &provider,
            );
            let ecl = astro.ecliptic().unwrap_or_else(|e| fail(e));
            let instant = astro.instant();
            println!(
                "{utc}  (JD UT {:.6}, ET {:.6}, delta-T {:.2} s)",
                instant.jd_ut().value(),
                instant.jd_et().value(),
                instant.delta_t_seconds()
            );
            println!("  True obliquity:       {:.7} deg", ecl.true_obliquity.to_degrees());
            println!("  Mean obliquity:       {:.7} deg", ecl.mean_obliquity.to_degrees());
            println!(
                "  Nutation in lon:      {:.3} arcsec",
                ecl.nutation_in_longitude * DEGREE_SECONDS_PER_RADIAN
            );
            println!(
                "  Nutation in obliquity: {:.3} arcsec",
                ecl.nutation_in_obliquity * DEGREE_SECONDS_PER_RADIAN
            );
        }

        Commands::Position { body, date } => {
            let body = require_body(&body);
            let utc = require_utc(&date);
            let astro = Astronomy::new(
                GeographicCoordinates::default(),
                utc.to_julian_day(),
                &provider,
            );
            let planet = astro.planet(body).unwrap_or_else(|e| fail(e));
            let eq = apparent_equatorial(&astro, body).unwrap_or_else(|e| fail(e));
            println!("{body} at {utc}");
            println!(
                "  Ecliptic lon: {:.6} deg  lat: {:.6} deg  dist: {:.8} AU",
                planet.longitude().to_degrees(),
                planet.latitude().to_degrees(),
                planet.distance()
            );
            println!(
                "  Speed: {:.6} deg/day",
                planet.speed_in_longitude.to_degrees()
            );
            println!(
                "  RA: {:.6} deg  Dec: {:.6} deg",
                eq.right_ascension.to_degrees(),
                eq.declination.to_degrees()
            );
        }

        Commands::LongitudeTime {
            body,
            target,
            date,
            coarse,
        } => {
            let body = require_body(&body);
            let utc = require_utc(&date);
            let astro = Astronomy::new(
                GeographicCoordinates::default(),
                utc.to_julian_day(),
                &provider,
            );
            let reference = astro.planet(body).unwrap_or_else(|e| fail(e));
            let target_deg = mod_360_deg(target);
            let crossing = solve_longitude(
                &astro,
                &reference,
                target_deg.to_radians(),
                &solver_config(coarse),
            )
            .unwrap_or_else(|e| fail(e));
            println!(
                "{body} reaches {target_deg:.4} deg at {}",
                UtcTime::from_julian_day(crossing.instant.jd_ut())
            );
            println!(
                "  JD UT {:.6}  ({} iterations)",
                crossing.instant.jd_ut().value(),
                crossing.iterations
            );
        }
    }
}
