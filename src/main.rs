// Copyright 2020 TwoCookingMice

use sensorsim::core::sweep::CaptureSettings;
use sensorsim::io::suite_loader::load_suite;
use sensorsim::math::constants::Vector3f;
use sensorsim::scenes::phantom::phantom_scene;
use sensorsim::suite::SensorSuite;

use std::env;
use std::error::Error;
use std::path::Path;

const USAGE: &str = "<out_dir> [--suite suite.xml] [--seed N] [--threads N] [--progress] [--show-scene] [--show-sensor]";

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} {}", args[0], USAGE);
        std::process::exit(1);
    }

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new(&args[1]);
    let mut suite_path: Option<String> = None;
    let mut settings = CaptureSettings::default();
    let mut show_scene = false;
    let mut show_sensor = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--suite" => {
                i += 1;
                suite_path = args.get(i).cloned();
            }
            "--seed" => {
                i += 1;
                settings.seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--threads" => {
                i += 1;
                settings.threads = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(0);
            }
            "--progress" => settings.show_progress = true,
            "--show-scene" => show_scene = true,
            "--show-sensor" => show_sensor = true,
            other => log::warn!("Ignoring unknown argument {}", other),
        }
        i += 1;
    }

    let mut suite = match suite_path {
        Some(path) => load_suite(path)?,
        None => SensorSuite::av_suite(Vector3f::zeros())?,
    };
    let scene = phantom_scene();
    suite.capture(&scene, &settings)?;

    let frame = suite.display(&scene, show_scene, show_sensor);
    std::fs::create_dir_all(out_dir)?;
    for labeled in &frame.images {
        let path = out_dir.join(format!("{}.png", file_stem(&labeled.sensor)));
        labeled.image.to_rgb8_image().save(&path)?;
        log::info!("Wrote {}", path.display());
    }
    for cloud in &frame.point_clouds {
        log::info!("{}: {} colored returns", cloud.sensor, cloud.points.len());
    }
    if show_scene || show_sensor {
        log::info!("Frame holds {} scene objects and {} housing parts",
                   frame.scene_objects.len(), frame.sensor_housings.len());
    }
    Ok(())
}

fn file_stem(sensor_id: &str) -> String {
    sensor_id.chars().map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' }).collect()
}
