// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! imgseam - seam carving from the command line.
//!
//! Reads any format the image crate can decode, carves down to the
//! requested dimensions, and always writes JPEG.  With `--artifacts`
//! every iteration additionally drops a painted-seam snapshot and a
//! work-in-progress snapshot into the given directory.

use clap::{App, Arg, ArgMatches, ErrorKind};
use failure::{format_err, Error};
use image::{DynamicImage, ImageOutputFormat};
use log::info;
use std::fs;
use std::fs::File;
use std::process;

use imgseam::{ArtifactDirectory, ArtifactSink, SeamCarver};

fn cli() -> App<'static, 'static> {
    App::new("imgseam")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        // -h belongs to --output-height here; help moves to -H.
        .help_short("H")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("input file path")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("output file")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output-width")
                .short("w")
                .long("output-width")
                .value_name("PIXELS")
                .help("output width (default: input width)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output-height")
                .short("h")
                .long("output-height")
                .value_name("PIXELS")
                .help("output height (default: input height)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("artifacts")
                .short("a")
                .long("artifacts")
                .value_name("DIR")
                .help("directory to store per-iteration artifacts")
                .takes_value(true),
        )
}

fn parsed_dimension(matches: &ArgMatches, name: &str) -> Result<Option<u32>, Error> {
    match matches.value_of(name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format_err!("invalid value for --{}: {}", name, raw)),
        None => Ok(None),
    }
}

fn run(matches: &ArgMatches, width: Option<u32>, height: Option<u32>) -> Result<(), Error> {
    let original = image::open(matches.value_of("input").unwrap())?.to_rgb();
    let target_width = width.unwrap_or_else(|| original.width());
    let target_height = height.unwrap_or_else(|| original.height());
    info!(
        "carving {}x{} down to {}x{}",
        original.width(),
        original.height(),
        target_width,
        target_height
    );

    let mut sink = match matches.value_of("artifacts") {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            Some(ArtifactDirectory::new(dir))
        }
        None => None,
    };
    let sink = sink.as_mut().map(|s| s as &mut dyn ArtifactSink);

    let carved = SeamCarver::new(original).carve(target_width, target_height, sink)?;

    let mut out = File::create(matches.value_of("output").unwrap())?;
    DynamicImage::ImageRgb8(carved).write_to(&mut out, ImageOutputFormat::JPEG(90))?;
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = match cli().get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => {
            // An explicit help or version request is not an error.
            let ok = e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed;
            // Argument problems go to stdout with the usage text, and
            // the process reports failure.
            println!("{}", e.message);
            process::exit(if ok { 0 } else { 1 });
        }
    };

    let dimensions = parsed_dimension(&matches, "output-width")
        .and_then(|w| parsed_dimension(&matches, "output-height").map(|h| (w, h)));
    let (width, height) = match dimensions {
        Ok(pair) => pair,
        Err(e) => {
            println!("{}", e);
            println!("{}", matches.usage());
            process::exit(1);
        }
    };

    if let Err(e) = run(&matches, width, height) {
        eprintln!("imgseam: {}", e);
        process::exit(1);
    }
}
