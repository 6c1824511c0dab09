use std::env;
use std::fs;
use std::path::PathBuf;

use dotenv::dotenv;
use itertools::Itertools;
use log::{debug, info};

use parkgrid::source::{OverpassQuery, OverpassSource, StaticSource};
use parkgrid::{ClusterOptions, Markers, Park, ParkSource, Viewport, ZoomPolicy};

const USAGE: &str = "usage: parkgrid [LAT LNG LAT_DELTA LNG_DELTA] [--overpass FILE] [--query] [--json]";

#[derive(Debug, Default)]
struct Args {
    viewport: Option<Viewport>,
    overpass: Option<PathBuf>,
    query: bool,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, Box<dyn std::error::Error>> {
    let mut parsed = Args::default();
    let mut numbers = vec![];

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--overpass" => {
                let path = args.next().ok_or("--overpass needs a file")?;
                parsed.overpass = Some(PathBuf::from(path));
            }
            "--query" => parsed.query = true,
            "--json" => parsed.json = true,
            "-h" | "--help" => return Err(USAGE.into()),
            other => numbers.push(other.parse::<f64>().map_err(|_| USAGE)?),
        }
    }

    parsed.viewport = match numbers.as_slice() {
        [] => None,
        [lat, lng, lat_delta, lng_delta] => Some(Viewport::new(*lat, *lng, *lat_delta, *lng_delta)?),
        _ => return Err(USAGE.into()),
    };

    Ok(parsed)
}

fn describe(park: &Park) -> String {
    format!(
        "{} ({}) at {:.5}, {:.5} [{}]",
        park.name,
        park.id,
        park.lat(),
        park.lng(),
        park.equipment.iter().join(", ")
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load `.env` file, if present
    dotenv().ok();
    parkgrid::util::trace::initialize_logger();

    let args = parse_args(env::args().skip(1))?;
    let viewport = args.viewport.unwrap_or_default();
    let bounds = viewport.bounds();
    let zoom = viewport.zoom_level()?;

    if args.query {
        println!("{}", OverpassQuery::new(bounds));
        return Ok(());
    }

    let options = ClusterOptions::from_env();
    debug!("Clustering with {options:?}");

    let parks = match &args.overpass {
        Some(path) => {
            let body = fs::read_to_string(path).map_err(parkgrid::Error::from)?;
            OverpassSource::from_response(&body)?.parks_within(&bounds)?
        }
        None => StaticSource::bundled()?.parks_within(&bounds)?,
    };

    info!("{} parks within {bounds:?} at zoom {zoom}", parks.len());

    let markers = ZoomPolicy::new(options).markers(parks, zoom);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
        return Ok(());
    }

    match markers {
        Markers::Individual(parks) => {
            println!("{} parks:", parks.len());
            parks.iter().for_each(|park| println!("  {}", describe(park)));
        }
        Markers::Single(park) => println!("1 park: {}", describe(&park)),
        Markers::Clusters(clusters) => {
            println!("{} clusters:", clusters.len());
            for cluster in clusters {
                let location = cluster.location();
                println!(
                    "  [{}] {} parks at {:.5}, {:.5}",
                    cluster.id(),
                    cluster.len(),
                    location.y(),
                    location.x()
                );
            }
        }
    }

    Ok(())
}
