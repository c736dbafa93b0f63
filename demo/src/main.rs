//! Fetches a few maps from Google. Run with `RUST_LOG=info` to see what is going on.

use std::path::Path;

use staticmap::{
    GoogleStaticMap, ImageFormat, MapLocation, MapMarker, MapPath, MapPolygon, MapType, Protocol,
};

/// Washington, DC at zoom 11.
fn washington() -> GoogleStaticMap {
    GoogleStaticMap {
        zoom: Some(11),
        center: Some(MapLocation::address("Washington, DC")),
        ..Default::default()
    }
}

/// Blue markers at the White House and the Supreme Court. Without the center and zoom, Google
/// picks the closest zoom with both of them visible.
fn white_house_and_supreme_court() -> GoogleStaticMap {
    let blue_marker = |address: &str| MapMarker {
        color: Some("blue".to_owned()),
        ..MapMarker::new(MapLocation::address(address))
    };

    GoogleStaticMap {
        markers: vec![
            blue_marker("1600 Pennsylvania Ave., Washington, DC"),
            blue_marker("1 1st Street Northeast, Washington, DC"),
        ],
        ..Default::default()
    }
}

/// Satellite GIF with a semi-transparent green box drawn around four coordinates.
fn green_box() -> GoogleStaticMap {
    let polygon = MapPolygon {
        path: MapPath {
            color: Some("0x00FF00FF".to_owned()),
            points: vec![
                MapLocation::lat_lon(38.8, -77.5),
                MapLocation::lat_lon(38.8, -76.9),
                MapLocation::lat_lon(39.2, -76.9),
                MapLocation::lat_lon(39.2, -77.5),
                MapLocation::lat_lon(38.8, -77.5),
            ],
            ..Default::default()
        },
        fill_color: Some("0x00FF0060".to_owned()),
    };

    GoogleStaticMap {
        width: Some(640),
        height: Some(480),
        map_type: MapType::Satellite,
        format: Some(ImageFormat::Gif),
        paths: vec![polygon.into()],
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), staticmap::Error> {
    env_logger::init();

    for (name, map) in [
        ("Washington, DC", washington()),
        ("White House and Supreme Court", white_house_and_supreme_court()),
    ] {
        let image = map.get_map(None).await?;
        log::info!("Got a map of {name}, {} bytes.", image.len());
        log::info!("Its URL is '{}'.", map.url(Protocol::Auto)?);
    }

    let output = Path::new("map.gif");
    green_box().get_map(Some(output)).await?;
    log::info!("Satellite map written to {}.", output.display());

    Ok(())
}
